pub mod dnslink_resolver;
pub mod txt_parser;

pub use dnslink_resolver::{lookup_deadline, DnsLinkResolver};
pub use txt_parser::{build_link_set, dnslink_name, parse_entry};

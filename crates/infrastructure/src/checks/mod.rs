pub mod allow_all;

pub use allow_all::AllowAll;

pub mod check;
pub mod health;

pub use check::CheckQuery;
pub use health::HealthResponse;

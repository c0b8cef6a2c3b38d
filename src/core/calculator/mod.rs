pub mod aggregate;
pub mod period;

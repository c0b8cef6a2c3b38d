pub mod calculator;
pub mod config;
pub mod entry;
pub mod log;
pub mod logic;

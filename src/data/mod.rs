pub mod config;
pub mod signal;
pub mod stored;

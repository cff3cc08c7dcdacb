pub mod config;
pub mod error;
pub mod hash;
pub mod types;

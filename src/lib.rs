pub mod aggregator;
pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod resolver;
pub mod types;

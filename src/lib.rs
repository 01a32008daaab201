pub mod application;
pub mod cli;
pub mod config;
pub mod domain;

pub use config::BankConfig;
pub use domain::*;

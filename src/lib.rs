#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod server;
pub mod tools;
pub mod types;
pub mod views;

mod tests;

pub use config::Config;
pub use engine::*;
pub use error::*;
pub use types::*;

#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod services;
pub mod types;

pub use engine::*;
pub use error::*;
pub use services::*;
pub use types::*;

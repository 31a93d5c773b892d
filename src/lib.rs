pub mod common;
pub mod config;
pub mod writer;

pub use common::*;

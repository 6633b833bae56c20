pub mod commands;
pub mod input;

pub use commands::{Cli, Commands};

//! Command-line interface module.

mod args;
pub mod check;
pub mod show;

pub use args::{Cli, Commands, ShowArgs, Tool};

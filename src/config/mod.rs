//! Run configuration and CLI argument types.

mod cli;

pub use cli::{AnalyzeArgs, Cli, Command, InfoArgs, OutputFormat, RunArgs};

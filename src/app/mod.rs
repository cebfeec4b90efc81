// Application layer: wires config, adapters and core for the CLI.

pub mod commands;

pub use commands::{execute, Outcome};

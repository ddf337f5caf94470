//! Command trait and context for dispatching commands

use std::fs;
use std::io::{self, Read};
use std::str::FromStr;
use std::time::Instant;

use crate::cli::{Cli, InputArgs, OutputFormat};
use graphkit_core::config::Config;
use graphkit_core::error::{GraphError, Result};

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Whole input as text, from `path` or stdin when `path` is `-`
    pub fn read_input(&self, path: &str) -> Result<String> {
        let text = if path == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(path)
                .map_err(|e| GraphError::Other(format!("failed to read {}: {}", path, e)))?
        };
        trace_command!(self.cli, self.start, "read_input");
        Ok(text)
    }

    /// Read and parse any edge-list graph representation
    pub fn load<T>(&self, input: &InputArgs) -> Result<T>
    where
        T: FromStr<Err = GraphError>,
    {
        let graph = self.read_input(&input.file)?.parse()?;
        trace_command!(self.cli, self.start, "parse_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classical graph algorithms over edge-list files.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Cli;
use crate::output::OutputFormat;

/// Settings for a single run, resolved from flags and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig context; the current context when unset
    pub context: Option<String>,
    pub output: OutputFormat,
    pub verbosity: u8,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            // An empty CRDCOUNT_CONTEXT means "no override"
            context: cli.context.clone().filter(|c| !c.is_empty()),
            output: cli.output,
            verbosity: cli.verbose,
        }
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

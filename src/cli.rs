// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line definitions

use crate::constants::env;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crdcount", version, about = "Inspect custom resources in a Kubernetes cluster")]
pub struct Cli {
    /// Kubernetes context to use
    #[arg(long, global = true, env = env::CONTEXT)]
    pub context: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table", env = env::OUTPUT)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display one or more resources
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(subcommand)]
    pub resource: GetResource,
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Custom resource definitions
    #[command(alias = "crds")]
    Crd(CrdArgs),
}

#[derive(Args, Debug)]
pub struct CrdArgs {
    #[command(subcommand)]
    pub command: CrdCommand,
}

#[derive(Subcommand, Debug)]
pub enum CrdCommand {
    /// Display resources count for all custom resources
    #[command(
        long_about = "Count the number of resources for all custom resources definitions",
        after_help = "Examples:\n  # Count the number of resources for all custom resources definitions\n  crdcount get crd count"
    )]
    Count,
}

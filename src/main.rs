// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crdcount::cli::{Cli, Command, CrdCommand, GetResource};
use crdcount::commands::crd_count;
use crdcount::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    setup_tracing(&config);

    match cli.command {
        Command::Get(args) => match args.resource {
            GetResource::Crd(crd) => match crd.command {
                CrdCommand::Count => crd_count::run(&config)
                    .await
                    .context("cannot get custom resource counts")?,
            },
        },
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries the rendered output
fn setup_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

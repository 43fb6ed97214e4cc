// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `get crd count`: how many instances exist for every custom resource version

use crate::config::Config;
use crate::error::Result;
use crate::inventory::collect_counts;
use crate::kubernetes::{Clients, CrdSource, InstanceCounter};
use crate::output::{render, OutputFormat};

/// Connect to the cluster and print the count listing to stdout
pub async fn run(config: &Config) -> Result<()> {
    let clients = Clients::connect(config.context.as_deref()).await?;
    let output = count_report(&clients.api_extensions, &clients.dynamic, config.output).await?;
    println!("{}", output);
    Ok(())
}

/// Collect and render; nothing is rendered if collection fails
pub async fn count_report<S, C>(crds: &S, counter: &C, format: OutputFormat) -> Result<String>
where
    S: CrdSource,
    C: InstanceCounter,
{
    let rows = collect_counts(crds, counter).await?;
    render(&rows, format)
}

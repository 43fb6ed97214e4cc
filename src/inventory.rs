// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Collection of per-version instance counts for every CRD in a cluster

use crate::constants::SLOW_OPERATION_NOTICE;
use crate::error::{CrdCountError, Result};
use crate::kubernetes::{CrdSource, InstanceCounter};
use crate::types::CountRow;
use tracing::{debug, info};

/// Count the live instances of every version of every CRD.
///
/// Calls are issued one at a time. The first failure aborts the whole
/// collection and no rows are returned. Rows come back sorted by count,
/// smallest first, with ties kept in CRD list order then version order.
pub async fn collect_counts<S, C>(crds: &S, counter: &C) -> Result<Vec<CountRow>>
where
    S: CrdSource,
    C: InstanceCounter,
{
    info!("{}", SLOW_OPERATION_NOTICE);

    let crd_list = crds
        .list_custom_resource_definitions()
        .await
        .map_err(CrdCountError::ListCrds)?;

    let mut rows = Vec::new();
    for crd in &crd_list {
        debug!("Counting {} ({:?})", crd.name, crd.scope);
        for version in &crd.versions {
            let count = counter
                .count_instances(&crd.group, version, &crd.plural)
                .await
                .map_err(|source| CrdCountError::ListResourceInstances {
                    plural: crd.plural.clone(),
                    group: crd.group.clone(),
                    version: version.clone(),
                    source,
                })?;

            rows.push(CountRow::new(crd.qualified_name(), version.clone(), count));
        }
    }

    // Stable, so equal counts keep collection order; the largest end up at the bottom
    rows.sort_by_key(|row| row.count);
    Ok(rows)
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by the command line
pub mod env {
    /// Kubeconfig context to use instead of the current one
    pub const CONTEXT: &str = "CRDCOUNT_CONTEXT";
    /// Output format (table, json or yaml)
    pub const OUTPUT: &str = "CRDCOUNT_OUTPUT";
}

/// Table layout of the count listing
pub mod table {
    pub const HEADERS: [&str; 3] = ["NAME", "VERSION", "COUNT"];
    /// Spaces between two columns
    pub const COLUMN_GAP: usize = 2;
}

/// Logged before the first API call; every CRD version costs a round trip.
pub const SLOW_OPERATION_NOTICE: &str =
    "this operation may take a while depending on how many custom resources exist";

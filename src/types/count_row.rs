// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;

/// Number of live instances of one version of a custom resource
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CountRow {
    /// `<plural>.<group>`
    pub name: String,
    pub version: String,
    pub count: usize,
}

impl CountRow {
    pub fn new(name: impl Into<String>, version: impl Into<String>, count: usize) -> Self {
        CountRow {
            name: name.into(),
            version: version.into(),
            count,
        }
    }

    /// Table cells in header order
    pub fn cells(&self) -> [String; 3] {
        [self.name.clone(), self.version.clone(), self.count.to_string()]
    }
}

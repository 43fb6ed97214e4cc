// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use thiserror::Error;

/// The kind of API client a construction failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    ApiExtensions,
    Dynamic,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::ApiExtensions => f.write_str("api extensions"),
            ClientKind::Dynamic => f.write_str("dynamic"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CrdCountError {
    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("failed to get {kind} client: {message}")]
    ClientConstruction { kind: ClientKind, message: String },

    #[error("failed to get a list of custom resource definitions: {0}")]
    ListCrds(#[source] kube::Error),

    #[error("finding resource {plural}.{group} {version}: {source}")]
    ListResourceInstances {
        plural: String,
        group: String,
        version: String,
        #[source]
        source: kube::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CrdCountError {
    fn from(e: serde_json::Error) -> Self {
        CrdCountError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CrdCountError {
    fn from(e: serde_yaml::Error) -> Self {
        CrdCountError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CrdCountError>;

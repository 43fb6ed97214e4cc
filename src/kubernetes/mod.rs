// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes clients for CRD discovery and untyped resource counting.

pub mod client;
pub mod crd;
pub mod dynamic;

pub use client::Clients;
pub use crd::{ApiExtensionsClient, CrdSource};
pub use dynamic::{DynamicClient, InstanceCounter};

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod crd;
pub mod count_row;

pub use count_row::CountRow;
pub use crd::{CrdDescriptor, CrdScope};

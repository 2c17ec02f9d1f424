// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Record counting.
//!
//! Counts come from the length of each scope group's record vector, so a
//! full count costs O(groups) and never touches individual records.

use crate::groups::{ResourceGroup, ScopeGroup, TelemetryBatch};

/// Total number of records in a batch.
#[must_use]
pub fn count<B: TelemetryBatch>(batch: &B) -> usize {
    batch.resource_groups().iter().map(resource_records).sum()
}

/// Number of records under one resource group.
#[must_use]
pub fn resource_records<R: ResourceGroup>(resource: &R) -> usize {
    resource.scope_groups().iter().map(scope_records).sum()
}

/// Number of records in one scope group.
#[must_use]
pub fn scope_records<S: ScopeGroup>(scope: &S) -> usize {
    scope.records().len()
}

// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Extracting a bounded sub-batch from the front of a telemetry batch.
//!
//! [`split`] walks resource groups, then scope groups, front to back. Groups
//! that fit in the remaining budget are moved whole. The first group that does
//! not fit is split: its descriptor is cloned into the destination and only
//! the leading part of its contents is moved. Everything after that boundary
//! stays in the source untouched.
//!
//! When the whole source fits, nothing is moved at all and the caller gets
//! its own batch back as [`Split::Whole`].

use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::{debug, trace};

use crate::count::{count, resource_records, scope_records};
use crate::groups::{ResourceGroup, ScopeGroup, TelemetryBatch};
use crate::mover::move_front;

/// Outcome of [`split`].
///
/// Both variants deref to the batch they carry.
#[derive(Debug)]
pub enum Split<'a, B> {
    /// The source already fit the target. This is the caller's batch itself:
    /// changes made through it are changes to the source.
    Whole(&'a mut B),
    /// A newly built batch holding the records removed from the source.
    Part(B),
}

impl<B: TelemetryBatch> Split<'_, B> {
    /// Did the source fit entirely?
    #[must_use]
    pub const fn is_whole(&self) -> bool {
        matches!(self, Split::Whole(_))
    }

    /// Takes ownership of the result.
    ///
    /// For [`Split::Whole`] this moves the source's contents out and leaves
    /// an empty batch behind, which is the "fully consumed" state.
    #[must_use]
    pub fn into_batch(self) -> B {
        match self {
            Split::Whole(source) => mem::take(source),
            Split::Part(batch) => batch,
        }
    }
}

impl<B> Deref for Split<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        match self {
            Split::Whole(source) => source,
            Split::Part(batch) => batch,
        }
    }
}

impl<B> DerefMut for Split<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        match self {
            Split::Whole(source) => source,
            Split::Part(batch) => batch,
        }
    }
}

/// Removes up to `size` records from the front of `source` and returns them
/// as a batch with the same resource/scope structure.
///
/// If `source` holds `size` records or fewer it is returned as-is through
/// [`Split::Whole`]. Otherwise the result holds exactly `size` records and
/// `source` keeps the rest, in order, with emptied groups removed.
pub fn split<B: TelemetryBatch>(size: usize, source: &mut B) -> Split<'_, B> {
    let total = count(source);
    if total <= size {
        trace!(size, total, "batch fits, returning source");
        return Split::Whole(source);
    }

    let mut dest = B::default();
    let mut remaining = size;

    let resources = source.resource_groups_mut();
    let (whole, taken) = whole_prefix(resources.as_slice(), remaining, resource_records);
    move_front(resources, whole, dest.resource_groups_mut());
    remaining -= taken;

    if remaining > 0 {
        if let Some(src_resource) = resources.first_mut() {
            let dest_resource = split_resource(remaining, src_resource);
            dest.resource_groups_mut().push(dest_resource);
        }
    }

    debug!(
        size,
        taken = count(&dest),
        left = total - size,
        "split telemetry batch"
    );
    Split::Part(dest)
}

/// Moves `size` records out of a resource group that holds more than that.
fn split_resource<R: ResourceGroup>(size: usize, source: &mut R) -> R {
    let mut dest = source.descriptor_only();
    let mut remaining = size;

    let scopes = source.scope_groups_mut();
    let (whole, taken) = whole_prefix(scopes.as_slice(), remaining, scope_records);
    move_front(scopes, whole, dest.scope_groups_mut());
    remaining -= taken;

    if remaining > 0 {
        if let Some(src_scope) = scopes.first_mut() {
            let mut dest_scope = src_scope.descriptor_only();
            move_front(src_scope.records_mut(), remaining, dest_scope.records_mut());
            dest.scope_groups_mut().push(dest_scope);
        }
    }
    dest
}

/// Length of the leading run of `items` that fits whole in `budget`, and the
/// number of records that run holds. Stops as soon as the budget is spent.
fn whole_prefix<T>(items: &[T], budget: usize, records: impl Fn(&T) -> usize) -> (usize, usize) {
    let mut taken = 0;
    let mut whole = 0;
    for item in items {
        if taken == budget {
            break;
        }
        let n = records(item);
        if n > budget - taken {
            break;
        }
        taken += n;
        whole += 1;
    }
    (whole, taken)
}

// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Accumulating incoming batches until they are sent.
//!
//! `PendingBatch` is single-owner state. Callers that share one between a
//! receiving task and a timer put it behind a mutex so that `add` and `take`
//! never interleave.

use std::mem;

use tracing::debug;

use crate::config::Config;
use crate::count::count;
use crate::groups::TelemetryBatch;
use crate::mover::move_front;
use crate::split::split;

/// Records accumulated for one signal, with a running count.
#[derive(Debug, Default)]
pub struct PendingBatch<B> {
    batch: B,
    item_count: usize,
}

impl<B: TelemetryBatch> PendingBatch<B> {
    /// An empty pending batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            batch: B::default(),
            item_count: 0,
        }
    }

    /// Appends the resource groups of `incoming` after those already pending.
    /// Groups are moved, not copied. Batches with no records are dropped.
    pub fn add(&mut self, mut incoming: B) {
        let n = count(&incoming);
        if n == 0 {
            return;
        }
        let groups = incoming.resource_groups_mut();
        let len = groups.len();
        move_front(groups, len, self.batch.resource_groups_mut());
        self.item_count += n;
    }

    /// Number of records pending.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Is nothing pending?
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Has the pending count reached `send_batch_size`?
    #[must_use]
    pub fn is_ready(&self, config: &Config) -> bool {
        !self.is_empty() && self.item_count >= config.send_batch_size
    }

    /// The accumulated batch.
    #[must_use]
    pub const fn batch(&self) -> &B {
        &self.batch
    }

    /// Consumes the accumulator, returning everything pending.
    #[must_use]
    pub fn into_batch(self) -> B {
        self.batch
    }

    /// Removes the next batch to send.
    ///
    /// When `send_batch_max_size` is set and exceeded, exactly that many
    /// records are split off and the rest stay pending. Otherwise everything
    /// pending is returned.
    #[must_use]
    pub fn take(&mut self, config: &Config) -> B {
        let out = match config.send_batch_max_size {
            Some(max) if self.item_count > max.get() => {
                split(max.get(), &mut self.batch).into_batch()
            }
            _ => mem::take(&mut self.batch),
        };
        let sent = count(&out);
        self.item_count -= sent;
        debug!(signal = %B::SIGNAL, sent, pending = self.item_count, "took pending batch");
        out
    }
}

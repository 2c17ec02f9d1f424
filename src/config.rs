// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Batch size thresholds.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{MaxBelowBatchSizeSnafu, Result};

/// Default number of records that makes a pending batch ready to send.
const DEFAULT_SEND_BATCH_SIZE: usize = 8192;

/// Default flush interval.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

/// Size thresholds for batching telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of records after which a pending batch is ready, regardless of
    /// the timeout. Zero makes any non-empty batch ready.
    #[serde(default = "default_send_batch_size")]
    pub send_batch_size: usize,

    /// Upper bound on records per emitted batch. Larger pending batches are
    /// split. Unbounded when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_batch_max_size: Option<NonZeroUsize>,

    /// Interval after which a non-empty batch is sent even if it is not full.
    /// The timer lives with the caller; it is only carried here.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            send_batch_size: DEFAULT_SEND_BATCH_SIZE,
            send_batch_max_size: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a configuration with the given send size.
    #[must_use]
    pub fn new(send_batch_size: usize) -> Self {
        Self {
            send_batch_size,
            ..Self::default()
        }
    }

    /// Set the per-batch upper bound.
    #[must_use]
    pub fn with_send_batch_max_size(mut self, max: NonZeroUsize) -> Self {
        self.send_batch_max_size = Some(max);
        self
    }

    /// Set the flush interval.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the thresholds are consistent.
    ///
    /// # Errors
    ///
    /// Returns `Error::MaxBelowBatchSize` if `send_batch_max_size` is set and
    /// smaller than `send_batch_size`.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.send_batch_max_size {
            ensure!(
                max.get() >= self.send_batch_size,
                MaxBelowBatchSizeSnafu {
                    max: max.get(),
                    size: self.send_batch_size,
                }
            );
        }
        Ok(())
    }
}

fn default_send_batch_size() -> usize {
    DEFAULT_SEND_BATCH_SIZE
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

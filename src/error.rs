// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors for the batch splitting crate.
//!
//! Splitting itself never fails. Errors come from configuration checks and
//! from signal-tagged operations that are handed the wrong kind of data.

use snafu::Snafu;

use crate::groups::SignalType;

/// Errors that can occur while configuring or rebatching telemetry.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The per-batch upper bound is smaller than the size that triggers a send.
    #[snafu(display(
        "send_batch_max_size ({max}) must be greater than or equal to send_batch_size ({size})"
    ))]
    MaxBelowBatchSize {
        /// Configured `send_batch_max_size`.
        max: usize,
        /// Configured `send_batch_size`.
        size: usize,
    },

    /// A batch of one signal was passed where another was expected.
    #[snafu(display("Mixed signal types: expected {expected}, found {found}"))]
    MixedSignals {
        /// Signal the operation was asked to produce.
        expected: SignalType,
        /// Signal of the offending input batch.
        found: SignalType,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

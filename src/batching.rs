// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Rebatching sequences of OTLP batches to a bounded size.

use std::num::NonZeroUsize;

use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
use tracing::debug;

use crate::count::count;
use crate::error::{MixedSignalsSnafu, Result};
use crate::groups::{OtlpBatch, SignalType, TelemetryBatch};
use crate::pending::PendingBatch;
use crate::split::split;

/// Drains `batch` into chunks of `max` records. Every chunk is full except
/// possibly the last. An empty batch yields no chunks.
#[must_use]
pub fn split_into<B: TelemetryBatch>(mut batch: B, max: NonZeroUsize) -> Vec<B> {
    let mut chunks = Vec::with_capacity(count(&batch).div_ceil(max.get()));
    while count(&batch) > 0 {
        chunks.push(split(max.get(), &mut batch).into_batch());
    }
    chunks
}

/// Merge and re-chunk batches to the appropriate size.
/// Error if not all of the same signal type.
///
/// Without a limit the result is a single merged batch. Inputs holding no
/// records are dropped, so an all-empty input gives an empty result.
///
/// # Errors
///
/// Returns `Error::MixedSignals` if any input is not of type `signal`.
pub fn make_output_batches(
    signal: SignalType,
    batches: Vec<OtlpBatch>,
    max_size: Option<NonZeroUsize>,
) -> Result<Vec<OtlpBatch>> {
    let input = batches.len();
    let output = match signal {
        SignalType::Logs => rebatch::<ExportLogsServiceRequest>(batches, max_size),
        SignalType::Metrics => rebatch::<ExportMetricsServiceRequest>(batches, max_size),
        SignalType::Traces => rebatch::<ExportTraceServiceRequest>(batches, max_size),
    }?;
    debug!(%signal, input, output = output.len(), "rebatched");
    Ok(output)
}

fn rebatch<B>(batches: Vec<OtlpBatch>, max_size: Option<NonZeroUsize>) -> Result<Vec<OtlpBatch>>
where
    B: TelemetryBatch + TryFrom<OtlpBatch, Error = OtlpBatch> + Into<OtlpBatch>,
{
    let mut pending = PendingBatch::<B>::new();
    for batch in batches {
        match B::try_from(batch) {
            Ok(batch) => pending.add(batch),
            Err(other) => {
                return MixedSignalsSnafu {
                    expected: B::SIGNAL,
                    found: other.signal(),
                }
                .fail();
            }
        }
    }
    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let merged = pending.into_batch();
    let chunks = match max_size {
        Some(max) => split_into(merged, max),
        None => vec![merged],
    };
    Ok(chunks.into_iter().map(Into::into).collect())
}

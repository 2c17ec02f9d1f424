// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Size-bounded splitting of OTLP telemetry batches.
//!
//! A batch is a tree: resource groups hold scope groups, which hold records
//! (metrics, spans or log records). [`split`] removes a fixed number of
//! records from the front of a batch and returns them as a new batch with the
//! same shape, cloning resource and scope descriptors wherever a group is cut
//! in two. The remainder stays in the caller's batch.
//!
//! ```
//! use otel_batch_split::{count, split};
//! use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
//!
//! let mut pending = ExportTraceServiceRequest::default();
//! // ... accumulate spans ...
//! let mut to_export = Vec::new();
//! while count(&pending) > 0 {
//!     to_export.push(split(512, &mut pending).into_batch());
//! }
//! ```
//!
//! When the whole batch already fits, `split` hands back the caller's own
//! batch as [`Split::Whole`] instead of moving anything.
//! [`PendingBatch`] and [`make_output_batches`] build the usual accumulate
//! then drain flow on top of it.

pub mod batching;
pub mod config;
pub mod count;
pub mod error;
pub mod groups;
pub mod mover;
pub mod pending;
pub mod split;

#[cfg(test)]
mod testdata;

pub use batching::{make_output_batches, split_into};
pub use config::Config;
pub use count::count;
pub use error::{Error, Result};
pub use groups::{OtlpBatch, ResourceGroup, ScopeGroup, SignalType, TelemetryBatch};
pub use pending::PendingBatch;
pub use split::{split, Split};

// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! The resource → scope → record hierarchy shared by OTLP metrics, traces
//! and logs.
//!
//! The splitter is written once against [`TelemetryBatch`], [`ResourceGroup`]
//! and [`ScopeGroup`]. The three OTLP export requests implement them through a
//! single macro, so each signal only differs in its leaf type.

use std::fmt;

use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
use opentelemetry_proto::tonic::logs::v1::{LogRecord, ResourceLogs, ScopeLogs};
use opentelemetry_proto::tonic::metrics::v1::{Metric, ResourceMetrics, ScopeMetrics};
use opentelemetry_proto::tonic::trace::v1::{ResourceSpans, ScopeSpans, Span};
use paste::paste;
use serde::{Deserialize, Serialize};

use crate::count;

/// Telemetry signal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    /// Log records
    Logs,
    /// Metric series
    Metrics,
    /// Spans
    Traces,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalType::Logs => "logs",
            SignalType::Metrics => "metrics",
            SignalType::Traces => "traces",
        };
        f.write_str(name)
    }
}

/// Ordered records sharing one instrumentation scope.
pub trait ScopeGroup {
    /// The leaf type: `Metric`, `Span` or `LogRecord`.
    type Record;

    /// Records in order.
    fn records(&self) -> &[Self::Record];

    /// Mutable access to the record sequence.
    fn records_mut(&mut self) -> &mut Vec<Self::Record>;

    /// A new group carrying a copy of this group's scope descriptor and no
    /// records.
    #[must_use]
    fn descriptor_only(&self) -> Self;
}

/// Ordered scope groups sharing one resource.
pub trait ResourceGroup {
    /// Scope group type held by this resource.
    type Scope: ScopeGroup;

    /// Scope groups in order.
    fn scope_groups(&self) -> &[Self::Scope];

    /// Mutable access to the scope group sequence.
    fn scope_groups_mut(&mut self) -> &mut Vec<Self::Scope>;

    /// A new group carrying a copy of this group's resource descriptor and no
    /// scope groups.
    #[must_use]
    fn descriptor_only(&self) -> Self;
}

/// An ordered sequence of resource groups: the unit of work that gets split.
pub trait TelemetryBatch: Default {
    /// Resource group type held by this batch.
    type Resource: ResourceGroup;

    /// Which signal this batch carries.
    const SIGNAL: SignalType;

    /// Resource groups in order.
    fn resource_groups(&self) -> &[Self::Resource];

    /// Mutable access to the resource group sequence.
    fn resource_groups_mut(&mut self) -> &mut Vec<Self::Resource>;
}

macro_rules! impl_telemetry_batch {
    ($signal:ident, $request:ident, $kind:ident, $field:ident, $record:ident, $records:ident) => {
        paste! {
            impl ScopeGroup for [<Scope $kind>] {
                type Record = $record;

                fn records(&self) -> &[$record] {
                    &self.$records
                }

                fn records_mut(&mut self) -> &mut Vec<$record> {
                    &mut self.$records
                }

                fn descriptor_only(&self) -> Self {
                    Self {
                        scope: self.scope.clone(),
                        schema_url: self.schema_url.clone(),
                        ..Default::default()
                    }
                }
            }

            impl ResourceGroup for [<Resource $kind>] {
                type Scope = [<Scope $kind>];

                fn scope_groups(&self) -> &[Self::Scope] {
                    &self.[<scope_ $field>]
                }

                fn scope_groups_mut(&mut self) -> &mut Vec<Self::Scope> {
                    &mut self.[<scope_ $field>]
                }

                fn descriptor_only(&self) -> Self {
                    Self {
                        resource: self.resource.clone(),
                        schema_url: self.schema_url.clone(),
                        ..Default::default()
                    }
                }
            }

            impl TelemetryBatch for $request {
                type Resource = [<Resource $kind>];

                const SIGNAL: SignalType = SignalType::$signal;

                fn resource_groups(&self) -> &[Self::Resource] {
                    &self.[<resource_ $field>]
                }

                fn resource_groups_mut(&mut self) -> &mut Vec<Self::Resource> {
                    &mut self.[<resource_ $field>]
                }
            }

            impl From<$request> for OtlpBatch {
                fn from(batch: $request) -> Self {
                    OtlpBatch::$signal(batch)
                }
            }

            impl TryFrom<OtlpBatch> for $request {
                type Error = OtlpBatch;

                fn try_from(batch: OtlpBatch) -> Result<Self, OtlpBatch> {
                    match batch {
                        OtlpBatch::$signal(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        }
    };
}

impl_telemetry_batch!(Metrics, ExportMetricsServiceRequest, Metrics, metrics, Metric, metrics);
impl_telemetry_batch!(Traces, ExportTraceServiceRequest, Spans, spans, Span, spans);
impl_telemetry_batch!(Logs, ExportLogsServiceRequest, Logs, logs, LogRecord, log_records);

/// A batch of any one signal.
#[derive(Clone, Debug, PartialEq)]
pub enum OtlpBatch {
    /// Log data
    Logs(ExportLogsServiceRequest),
    /// Metric data
    Metrics(ExportMetricsServiceRequest),
    /// Span data
    Traces(ExportTraceServiceRequest),
}

impl OtlpBatch {
    /// The signal carried by this batch.
    #[must_use]
    pub const fn signal(&self) -> SignalType {
        match self {
            OtlpBatch::Logs(_) => SignalType::Logs,
            OtlpBatch::Metrics(_) => SignalType::Metrics,
            OtlpBatch::Traces(_) => SignalType::Traces,
        }
    }

    /// Total records, whatever the signal.
    #[must_use]
    pub fn record_count(&self) -> usize {
        match self {
            OtlpBatch::Logs(batch) => count::count(batch),
            OtlpBatch::Metrics(batch) => count::count(batch),
            OtlpBatch::Traces(batch) => count::count(batch),
        }
    }

    /// Does this batch hold no records?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry_proto::tonic::common::v1::InstrumentationScope;
    use opentelemetry_proto::tonic::resource::v1::Resource;

    fn scope_logs(name: &str, n: usize) -> ScopeLogs {
        ScopeLogs {
            scope: Some(InstrumentationScope {
                name: name.into(),
                version: "1.0".into(),
                ..Default::default()
            }),
            log_records: (0..n)
                .map(|i| LogRecord {
                    severity_text: format!("{name}-{i}"),
                    ..Default::default()
                })
                .collect(),
            schema_url: "https://example.com/scope".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scope_descriptor_only() {
        let scope = scope_logs("lib", 3);
        let empty = scope.descriptor_only();
        assert!(empty.records().is_empty());
        assert_eq!(empty.scope, scope.scope);
        assert_eq!(empty.schema_url, scope.schema_url);
        assert_eq!(scope.records().len(), 3);
    }

    #[test]
    fn test_resource_descriptor_only() {
        let resource = ResourceLogs {
            resource: Some(Resource {
                dropped_attributes_count: 7,
                ..Default::default()
            }),
            scope_logs: vec![scope_logs("a", 1), scope_logs("b", 2)],
            schema_url: "https://example.com/resource".into(),
            ..Default::default()
        };
        let empty = resource.descriptor_only();
        assert!(empty.scope_groups().is_empty());
        assert_eq!(empty.resource, resource.resource);
        assert_eq!(empty.schema_url, resource.schema_url);
    }

    #[test]
    fn test_otlp_batch_conversions() {
        let mut logs = ExportLogsServiceRequest::default();
        logs.resource_groups_mut().push(ResourceLogs {
            scope_logs: vec![scope_logs("a", 4)],
            ..Default::default()
        });

        let batch = OtlpBatch::from(logs.clone());
        assert_eq!(batch.signal(), SignalType::Logs);
        assert_eq!(batch.record_count(), 4);
        assert!(!batch.is_empty());

        let back = ExportLogsServiceRequest::try_from(batch).unwrap();
        assert_eq!(back, logs);

        let spans = OtlpBatch::from(ExportTraceServiceRequest::default());
        assert!(spans.is_empty());
        let err = ExportMetricsServiceRequest::try_from(spans).unwrap_err();
        assert_eq!(err.signal(), SignalType::Traces);
    }

    #[test]
    fn test_signal_type_serde() {
        assert_eq!(SignalType::Traces.to_string(), "traces");
        assert_eq!(<ExportMetricsServiceRequest as TelemetryBatch>::SIGNAL, SignalType::Metrics);
        let parsed: SignalType = serde_json::from_str("\"logs\"").unwrap();
        assert_eq!(parsed, SignalType::Logs);
    }
}

// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Batch generators shared by unit tests.

use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::common::v1::{any_value, AnyValue, InstrumentationScope, KeyValue};
use opentelemetry_proto::tonic::logs::v1::{LogRecord, ResourceLogs, ScopeLogs};
use opentelemetry_proto::tonic::metrics::v1::{Metric, ResourceMetrics, ScopeMetrics};
use opentelemetry_proto::tonic::resource::v1::Resource;
use rand::Rng;

pub(crate) fn resource(service: &str) -> Resource {
    Resource {
        attributes: vec![KeyValue {
            key: "service.name".into(),
            value: Some(AnyValue {
                value: Some(any_value::Value::StringValue(service.into())),
            }),
        }],
        ..Default::default()
    }
}

pub(crate) fn scope(name: &str) -> InstrumentationScope {
    InstrumentationScope {
        name: name.into(),
        version: "0.1.0".into(),
        ..Default::default()
    }
}

/// One resource, one scope, `n` metrics named `test-metric-int-{index}-{i}`.
pub(crate) fn metrics_many_metrics_same_resource(
    index: usize,
    n: usize,
) -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest {
        resource_metrics: vec![ResourceMetrics {
            resource: Some(resource("test-service")),
            scope_metrics: vec![ScopeMetrics {
                scope: Some(scope("test-scope")),
                metrics: (0..n)
                    .map(|i| Metric {
                        name: format!("test-metric-int-{index}-{i}"),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

pub(crate) fn metric_names(batch: &ExportMetricsServiceRequest) -> Vec<String> {
    batch
        .resource_metrics
        .iter()
        .flat_map(|r| &r.scope_metrics)
        .flat_map(|s| &s.metrics)
        .map(|m| m.name.clone())
        .collect()
}

/// A log batch with a random shape, including empty groups. Every record has
/// a distinct `severity_text`.
pub(crate) fn random_logs<R: Rng>(rng: &mut R) -> ExportLogsServiceRequest {
    let mut next = 0;
    let resource_logs = (0..rng.random_range(0..4))
        .map(|r| ResourceLogs {
            resource: Some(resource(&format!("svc-{r}"))),
            scope_logs: (0..rng.random_range(0..4))
                .map(|s| ScopeLogs {
                    scope: Some(scope(&format!("scope-{r}-{s}"))),
                    log_records: (0..rng.random_range(0..7))
                        .map(|_| {
                            next += 1;
                            LogRecord {
                                severity_text: format!("log-{next}"),
                                ..Default::default()
                            }
                        })
                        .collect(),
                    schema_url: format!("https://example.com/{r}/{s}"),
                    ..Default::default()
                })
                .collect(),
            schema_url: format!("https://example.com/{r}"),
            ..Default::default()
        })
        .collect();
    ExportLogsServiceRequest { resource_logs }
}

pub(crate) fn record_names(batch: &ExportLogsServiceRequest) -> Vec<String> {
    batch
        .resource_logs
        .iter()
        .flat_map(|r| &r.scope_logs)
        .flat_map(|s| &s.log_records)
        .map(|l| l.severity_text.clone())
        .collect()
}

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw `HttpConnectionManager.Tracing` config in API JSON form, attached
/// to connection managers through `spec.tracingRef`.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "Tracing",
    namespaced
)]
#[serde(transparent)]
pub struct TracingSpec(pub serde_json::Value);

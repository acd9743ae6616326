use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw `envoy.config.cluster.v3.Cluster` in API JSON form. The embedded
/// cluster name must be unique across the watched namespaces.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "Cluster",
    namespaced
)]
#[serde(transparent)]
pub struct ClusterSpec(pub serde_json::Value);

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A list of raw HTTP connection manager filters in API JSON form,
/// shareable between virtual services.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "HttpFilter",
    namespaced
)]
#[serde(transparent)]
pub struct HttpFilterSpec(pub Vec<serde_json::Value>);

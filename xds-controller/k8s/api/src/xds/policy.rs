use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw `envoy.config.rbac.v3.Policy` in API JSON form, referenced from
/// virtual service RBAC sections under its object name.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "Policy",
    namespaced
)]
#[serde(transparent)]
pub struct PolicySpec(pub serde_json::Value);

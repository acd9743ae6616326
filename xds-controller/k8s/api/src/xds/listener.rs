use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw `envoy.config.listener.v3.Listener` in API JSON form.
///
/// The payload must not carry filter chains; those are assembled from the
/// virtual services attached to the listener.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "Listener",
    namespaced
)]
#[serde(transparent)]
pub struct ListenerSpec(pub serde_json::Value);

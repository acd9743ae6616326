use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A list of raw `envoy.config.route.v3.Route`s in API JSON form, shareable
/// between virtual hosts.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "Route",
    namespaced
)]
#[serde(transparent)]
pub struct RouteSpec(pub Vec<serde_json::Value>);

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw `envoy.config.accesslog.v3.AccessLog` in API JSON form.
///
/// When the object carries the auto-generated-filename annotation, file
/// logger paths are rewritten per referencing virtual service.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "AccessLogConfig",
    namespaced
)]
#[serde(transparent)]
pub struct AccessLogConfigSpec(pub serde_json::Value);

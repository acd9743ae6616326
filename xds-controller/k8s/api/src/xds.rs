pub mod access_log_config;
pub mod cluster;
pub mod http_filter;
pub mod listener;
pub mod policy;
pub mod route;
pub mod tracing;
pub mod virtual_service;
pub mod virtual_service_template;

pub use self::{
    access_log_config::{AccessLogConfig, AccessLogConfigSpec},
    cluster::{Cluster, ClusterSpec},
    http_filter::{HttpFilter, HttpFilterSpec},
    listener::{Listener, ListenerSpec},
    policy::{Policy, PolicySpec},
    route::{Route, RouteSpec},
    tracing::{Tracing, TracingSpec},
    virtual_service::{
        CommonSpec, RbacSpec, VirtualService, VirtualServiceSpec, VirtualServiceStatus,
    },
    virtual_service_template::{
        ExtraField, VirtualServiceTemplate, VirtualServiceTemplateSpec,
    },
};

/// References a named resource, optionally in another namespace.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Deserialize,
    serde::Serialize,
    schemars::JsonSchema,
)]
pub struct ResourceRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Selects the downstream certificate for a virtual host. Exactly one of the
/// two fields may be set; the builder rejects anything else.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    /// A `kubernetes.io/tls` secret holding the certificate chain and key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<ResourceRef>,
    /// Match the virtual host's domains against the domain annotations of
    /// SDS-cached secrets instead of naming a secret explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_discovery: Option<bool>,
}

/// Per-field overrides applied when a virtual service inherits from a
/// template.
#[derive(
    Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
pub struct TemplateOption {
    /// Top-level spec field the modifier applies to.
    pub field: String,
    pub modifier: Modifier,
}

/// How a virtual service field combines with the same field of its template.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Deep-merge objects, concatenate arrays.
    Merge,
    /// The service value wins wholesale.
    Replace,
    /// Drop the field from the combined spec.
    Delete,
}

// === impl ResourceRef ===

impl ResourceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Resolves the referenced namespace, falling back to that of the
    /// referring resource.
    pub fn namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.namespace.as_deref().unwrap_or(default)
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.namespace.as_deref() {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

// === impl TlsConfig ===

impl TlsConfig {
    pub fn auto_discovery(&self) -> bool {
        self.auto_discovery.unwrap_or(false)
    }
}

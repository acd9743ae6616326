use super::{ResourceRef, TemplateOption, TlsConfig};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Describes a single Envoy virtual host, the listener that serves it, and
/// everything needed to build the surrounding HTTP connection manager.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "VirtualService",
    status = "VirtualServiceStatus",
    shortname = "vs",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(flatten)]
    pub common: CommonSpec,

    /// Template this service inherits from. Unqualified references resolve
    /// to the template's own namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_options: Option<Vec<TemplateOption>>,
    /// Values substituted into `{{ .Name }}` placeholders declared by the
    /// template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_fields: Option<BTreeMap<String, String>>,
}

/// Fields shared by a virtual service and the template it may inherit from.
///
/// Everything is optional so that a service can override any subset of its
/// template; the combined spec is validated as a whole at build time.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonSpec {
    /// An `envoy.config.route.v3.VirtualHost` in API JSON form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<serde_json::Value>,
    /// The listener this host attaches to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
    /// An inline `envoy.config.accesslog.v3.AccessLog` for the connection
    /// manager. Mutually exclusive with the other access-log fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log_config: Option<ResourceRef>,
    /// Inline access logs; the plural form of `accessLog`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_logs: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log_configs: Option<Vec<ResourceRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_http_filters: Option<Vec<ResourceRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_routes: Option<Vec<ResourceRef>>,
    /// Inline HTTP filters, placed ahead of any referenced ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_filters: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_remote_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xff_num_trusted_hops: Option<u32>,
    /// `UpgradeConfig`s passed through to the connection manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_configs: Option<Vec<serde_json::Value>>,
    /// An inline `HttpConnectionManager.Tracing` config. Mutually exclusive
    /// with `tracingRef`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbac: Option<RbacSpec>,
}

/// RBAC rules enforced ahead of every other HTTP filter on the host.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RbacSpec {
    /// `ALLOW`, `DENY`, or `LOG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Inline policies, keyed by policy name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<BTreeMap<String, serde_json::Value>>,
    /// References to shared `Policy` objects merged in by their object name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_policies: Option<Vec<ResourceRef>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceStatus {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Machine-readable counterparts of `message`, stable across releases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_reasons: Vec<String>,
}

// === impl VirtualService ===

impl VirtualService {
    /// Node IDs this service is published to, parsed from the node-id
    /// annotation under `annotation_key`.
    pub fn node_ids(&self, annotation_key: &str) -> Vec<String> {
        crate::annotation_csv(&self.metadata, annotation_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_manifest() {
        let vs: VirtualService = serde_yaml::from_str(
            r#"
            apiVersion: envoy.kaasops.io/v1alpha1
            kind: VirtualService
            metadata:
              name: demo
              namespace: default
              annotations:
                envoy.kaasops.io/node-id: "node-1, node-2"
            spec:
              listener:
                name: https
              tlsConfig:
                secretRef:
                  name: demo-cert
              virtualHost:
                name: demo
                domains: ["demo.example.com"]
                routes:
                  - match: { prefix: "/" }
                    route: { cluster: demo }
              template:
                name: base
                namespace: platform
              templateOptions:
                - field: httpFilters
                  modifier: replace
              extraFields:
                LogPath: /var/log/demo.log
            "#,
        )
        .expect("must deserialize");

        assert_eq!(
            vs.spec.common.listener,
            Some(ResourceRef::new("https")),
        );
        assert_eq!(
            vs.spec.template,
            Some(ResourceRef {
                name: "base".into(),
                namespace: Some("platform".into()),
            }),
        );
        assert_eq!(
            vs.spec.template_options,
            Some(vec![TemplateOption {
                field: "httpFilters".into(),
                modifier: super::super::Modifier::Replace,
            }]),
        );
        assert_eq!(
            vs.node_ids("envoy.kaasops.io/node-id"),
            vec!["node-1".to_string(), "node-2".to_string()],
        );
        let vh = vs.spec.common.virtual_host.expect("virtual host");
        assert_eq!(vh["domains"][0], "demo.example.com");
    }

    #[test]
    fn node_ids_absent_annotation() {
        let vs: VirtualService = serde_yaml::from_str(
            r#"
            apiVersion: envoy.kaasops.io/v1alpha1
            kind: VirtualService
            metadata:
              name: demo
              namespace: default
            spec:
              listener:
                name: http
            "#,
        )
        .expect("must deserialize");
        assert!(vs.node_ids("envoy.kaasops.io/node-id").is_empty());
    }
}

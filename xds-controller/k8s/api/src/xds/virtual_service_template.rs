use super::virtual_service::CommonSpec;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reusable base spec that virtual services inherit from. Templates are
/// never compiled on their own.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "envoy.kaasops.io",
    version = "v1alpha1",
    kind = "VirtualServiceTemplate",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceTemplateSpec {
    #[serde(flatten)]
    pub common: CommonSpec,

    /// Placeholders a referencing service may (or must) fill in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_fields: Option<Vec<ExtraField>>,
}

/// Declares one `{{ .Name }}` placeholder available inside the template's
/// raw payloads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtraField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub r#type: String,
    #[serde(default)]
    pub required: bool,
    /// When set, the substituted value must be one of these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_manifest() {
        let vst: VirtualServiceTemplate = serde_yaml::from_str(
            r#"
            apiVersion: envoy.kaasops.io/v1alpha1
            kind: VirtualServiceTemplate
            metadata:
              name: base
              namespace: platform
            spec:
              listener:
                name: https
              accessLog:
                name: envoy.access_loggers.file
                typed_config:
                  "@type": type.googleapis.com/envoy.extensions.access_loggers.file.v3.FileAccessLog
                  path: "{{ .LogPath }}"
              extraFields:
                - name: LogPath
                  type: string
                  required: true
                - name: Mode
                  type: enum
                  required: false
                  enum: ["staging", "production"]
                  default: staging
            "#,
        )
        .expect("must deserialize");

        let fields = vst.spec.extra_fields.expect("extra fields");
        assert_eq!(fields.len(), 2);
        assert!(fields[0].required);
        assert_eq!(fields[1].r#enum.as_deref(), Some(&["staging".to_string(), "production".to_string()][..]));
        assert_eq!(fields[1].default.as_deref(), Some("staging"));
    }
}

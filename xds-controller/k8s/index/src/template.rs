//! Template inheritance for virtual services.
//!
//! A service naming a template is compiled from the template's spec with
//! the service's own fields merged on top. Before the merge, `{{ .Name }}`
//! placeholders in the template payloads are filled from the service's
//! `extraFields`, and unqualified references inside the template are pinned
//! to the template's namespace so that inheritance never silently retargets
//! them into the service's namespace.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use envoy_xds_controller_core::{Error, NamespacedName};
use envoy_xds_controller_k8s_api as k8s;

use crate::{merge, store::Store};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*\.([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern"));

/// Produces the effective spec of a virtual service, applying its template
/// when one is named. Services without a template pass through unchanged.
pub(crate) fn apply(
    name: &NamespacedName,
    spec: &k8s::xds::VirtualServiceSpec,
    store: &Store,
) -> Result<k8s::xds::CommonSpec, Error> {
    let Some(template_ref) = &spec.template else {
        return Ok(spec.common.clone());
    };
    let template_name = NamespacedName::new(
        template_ref.namespace_or(&name.namespace),
        &*template_ref.name,
    );
    let template = store
        .template(&template_name)
        .ok_or_else(|| Error::TemplateNotFound(template_name.clone()))?;

    let values = resolve_extra_fields(
        template.extra_fields.as_deref().unwrap_or(&[]),
        spec.extra_fields.as_ref(),
    )?;

    let base = serde_json::to_value(&template.common)
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;
    let mut base = substitute(base, &values)?;
    qualify_refs(&mut base, &template_name.namespace);

    let overlay =
        serde_json::to_value(&spec.common).map_err(|e| Error::MalformedPayload(e.to_string()))?;
    let options = spec.template_options.as_deref().unwrap_or(&[]);
    let merged = merge::merge(base, overlay, options);

    serde_json::from_value(merged).map_err(|e| Error::MalformedPayload(e.to_string()))
}

/// Checks a template's `extraFields` declarations: every field must carry a
/// supported type, enum fields must enumerate their values, and every
/// declared field must actually be referenced by a placeholder somewhere in
/// the template payloads.
pub(crate) fn validate_declarations(
    spec: &k8s::xds::VirtualServiceTemplateSpec,
) -> Result<(), Error> {
    let declared = spec.extra_fields.as_deref().unwrap_or(&[]);
    for field in declared {
        if field.name.is_empty() {
            return Err(Error::InvalidPayload(
                "extraField name cannot be empty".into(),
            ));
        }
        match field.r#type.as_str() {
            "string" => {}
            "enum" => {
                if field.r#enum.as_ref().map_or(true, Vec::is_empty) {
                    return Err(Error::InvalidPayload(format!(
                        "extraField '{}' type is 'enum' but no enum values are defined",
                        field.name
                    )));
                }
            }
            "" => {
                return Err(Error::InvalidPayload(
                    "extraField type cannot be empty".into(),
                ));
            }
            other => {
                return Err(Error::InvalidPayload(format!(
                    "extraField '{}' has unknown type '{}', valid types are: string, enum",
                    field.name, other
                )));
            }
        }
    }
    if declared.is_empty() {
        return Ok(());
    }

    let payload = serde_json::to_value(&spec.common)
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;
    let mut used = AHashSet::new();
    collect_placeholders(&payload, &mut used);
    let unused: Vec<&str> = declared
        .iter()
        .filter(|f| !used.contains(f.name.as_str()))
        .map(|f| f.name.as_str())
        .collect();
    if !unused.is_empty() {
        return Err(Error::InvalidPayload(format!(
            "the following extraFields are defined but not used in the template: {}",
            unused.join(", ")
        )));
    }
    Ok(())
}

/// Resolves declared extra fields against the values a service provides,
/// falling back to declared defaults.
fn resolve_extra_fields(
    declared: &[k8s::xds::ExtraField],
    provided: Option<&BTreeMap<String, String>>,
) -> Result<AHashMap<String, String>, Error> {
    if let Some(provided) = provided {
        for field in provided.keys() {
            if !declared.iter().any(|d| &d.name == field) {
                return Err(Error::ExtraFieldNotDeclared(field.clone()));
            }
        }
    }
    let mut values = AHashMap::with_capacity(declared.len());
    for field in declared {
        let value = provided
            .and_then(|p| p.get(&field.name))
            .cloned()
            .or_else(|| field.default.clone());
        match value {
            Some(value) => {
                if let Some(allowed) = &field.r#enum {
                    if !allowed.contains(&value) {
                        return Err(Error::EnumValueInvalid {
                            field: field.name.clone(),
                            value,
                        });
                    }
                }
                values.insert(field.name.clone(), value);
            }
            None if field.required => {
                return Err(Error::ExtraFieldMissingRequired(field.name.clone()));
            }
            None => {}
        }
    }
    Ok(values)
}

/// Replaces placeholders in every string (and key) of the payload tree.
fn substitute(value: Value, values: &AHashMap<String, String>) -> Result<Value, Error> {
    match value {
        Value::String(s) => Ok(Value::String(substitute_str(&s, values)?)),
        Value::Array(items) => items
            .into_iter()
            .map(|v| substitute(v, values))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(substitute_str(&key, values)?, substitute(value, values)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other),
    }
}

fn substitute_str(s: &str, values: &AHashMap<String, String>) -> Result<String, Error> {
    if !s.contains("{{") {
        return Ok(s.to_owned());
    }
    let mut missing = None;
    let replaced = PLACEHOLDER.replace_all(s, |caps: &regex::Captures<'_>| {
        let field = &caps[1];
        match values.get(field) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| field.to_owned());
                String::new()
            }
        }
    });
    match missing {
        Some(field) => Err(Error::TemplateSubstitutionError(format!(
            "no value for extra field {field:?}"
        ))),
        None => Ok(replaced.into_owned()),
    }
}

fn collect_placeholders(value: &Value, used: &mut AHashSet<String>) {
    match value {
        Value::String(s) => {
            for caps in PLACEHOLDER.captures_iter(s) {
                used.insert(caps[1].to_owned());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_placeholders(item, used);
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                for caps in PLACEHOLDER.captures_iter(key) {
                    used.insert(caps[1].to_owned());
                }
                collect_placeholders(value, used);
            }
        }
        _ => {}
    }
}

/// Pins every unqualified reference in a template spec to the template's
/// namespace.
fn qualify_refs(spec: &mut Value, namespace: &str) {
    let Some(map) = spec.as_object_mut() else {
        return;
    };
    for key in ["listener", "accessLogConfig", "tracingRef"] {
        if let Some(r) = map.get_mut(key) {
            qualify_ref(r, namespace);
        }
    }
    for key in ["accessLogConfigs", "additionalHttpFilters", "additionalRoutes"] {
        if let Some(Value::Array(refs)) = map.get_mut(key) {
            for r in refs {
                qualify_ref(r, namespace);
            }
        }
    }
    if let Some(tls) = map.get_mut("tlsConfig").and_then(Value::as_object_mut) {
        if let Some(r) = tls.get_mut("secretRef") {
            qualify_ref(r, namespace);
        }
    }
    if let Some(rbac) = map.get_mut("rbac").and_then(Value::as_object_mut) {
        if let Some(Value::Array(refs)) = rbac.get_mut("additionalPolicies") {
            for r in refs {
                qualify_ref(r, namespace);
            }
        }
    }
}

fn qualify_ref(r: &mut Value, namespace: &str) {
    if let Some(map) = r.as_object_mut() {
        if map.get("namespace").map_or(true, Value::is_null) {
            map.insert("namespace".to_owned(), Value::String(namespace.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envoy_xds_controller_core::Reason;
    use k8s::xds::{
        CommonSpec, ExtraField, ResourceRef, VirtualServiceSpec, VirtualServiceTemplateSpec,
    };
    use serde_json::json;

    fn vs_name() -> NamespacedName {
        NamespacedName::new("default", "demo")
    }

    fn string_field(name: &str, required: bool, default: Option<&str>) -> ExtraField {
        ExtraField {
            name: name.into(),
            description: None,
            r#type: "string".into(),
            required,
            r#enum: None,
            default: default.map(String::from),
        }
    }

    fn template_with_log_path() -> VirtualServiceTemplateSpec {
        VirtualServiceTemplateSpec {
            common: CommonSpec {
                listener: Some(ResourceRef::new("https")),
                access_log: Some(json!({
                    "name": "envoy.access_loggers.file",
                    "typed_config": {
                        "@type": "type.googleapis.com/envoy.extensions.access_loggers.file.v3.FileAccessLog",
                        "path": "{{ .LogPath }}"
                    }
                })),
                ..Default::default()
            },
            extra_fields: Some(vec![string_field("LogPath", true, None)]),
        }
    }

    fn store_with(template: VirtualServiceTemplateSpec) -> Store {
        let mut store = Store::default();
        store.apply_template(NamespacedName::new("platform", "base"), template);
        store
    }

    fn vs_spec(extra: Option<BTreeMap<String, String>>) -> VirtualServiceSpec {
        VirtualServiceSpec {
            common: CommonSpec {
                virtual_host: Some(json!({"name": "demo", "domains": ["demo.example.com"]})),
                ..Default::default()
            },
            template: Some(ResourceRef {
                name: "base".into(),
                namespace: Some("platform".into()),
            }),
            template_options: None,
            extra_fields: extra,
        }
    }

    #[test]
    fn no_template_is_identity() {
        let spec = VirtualServiceSpec {
            common: CommonSpec {
                listener: Some(ResourceRef::new("http")),
                ..Default::default()
            },
            template: None,
            template_options: None,
            extra_fields: None,
        };
        let merged = apply(&vs_name(), &spec, &Store::default()).expect("applies");
        assert_eq!(merged, spec.common);
    }

    #[test]
    fn missing_template_is_an_error() {
        let err = apply(&vs_name(), &vs_spec(None), &Store::default()).unwrap_err();
        assert_eq!(
            err,
            Error::TemplateNotFound(NamespacedName::new("platform", "base")),
        );
    }

    #[test]
    fn inherits_and_qualifies_template_references() {
        let store = store_with(template_with_log_path());
        let provided = BTreeMap::from([("LogPath".to_string(), "/var/log/demo.log".to_string())]);
        let merged = apply(&vs_name(), &vs_spec(Some(provided)), &store).expect("applies");

        // The service keeps its own virtual host and gains the template's
        // listener, pinned to the template's namespace.
        assert_eq!(
            merged.listener,
            Some(ResourceRef {
                name: "https".into(),
                namespace: Some("platform".into()),
            }),
        );
        let log = merged.access_log.expect("access log");
        assert_eq!(log["typed_config"]["path"], json!("/var/log/demo.log"));
        assert_eq!(
            merged.virtual_host.expect("virtual host")["domains"][0],
            json!("demo.example.com"),
        );
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let mut template = template_with_log_path();
        template.extra_fields = Some(vec![string_field(
            "LogPath",
            false,
            Some("/var/log/default.log"),
        )]);
        let store = store_with(template);

        let merged = apply(&vs_name(), &vs_spec(None), &store).expect("applies");
        let log = merged.access_log.expect("access log");
        assert_eq!(log["typed_config"]["path"], json!("/var/log/default.log"));
    }

    #[test]
    fn rejects_undeclared_missing_and_out_of_enum_values() {
        let store = store_with(template_with_log_path());

        let provided = BTreeMap::from([("Nope".to_string(), "x".to_string())]);
        let err = apply(&vs_name(), &vs_spec(Some(provided)), &store).unwrap_err();
        assert_eq!(err, Error::ExtraFieldNotDeclared("Nope".into()));

        let err = apply(&vs_name(), &vs_spec(None), &store).unwrap_err();
        assert_eq!(err, Error::ExtraFieldMissingRequired("LogPath".into()));

        let mut template = template_with_log_path();
        template.extra_fields = Some(vec![ExtraField {
            name: "LogPath".into(),
            description: None,
            r#type: "enum".into(),
            required: true,
            r#enum: Some(vec!["/a.log".into(), "/b.log".into()]),
            default: None,
        }]);
        let store = store_with(template);
        let provided = BTreeMap::from([("LogPath".to_string(), "/c.log".to_string())]);
        let err = apply(&vs_name(), &vs_spec(Some(provided)), &store).unwrap_err();
        assert_eq!(
            err,
            Error::EnumValueInvalid {
                field: "LogPath".into(),
                value: "/c.log".into(),
            },
        );
    }

    #[test]
    fn unresolved_placeholder_fails_the_build() {
        let mut template = template_with_log_path();
        // Declared but optional and defaultless: referencing it without a
        // value cannot be substituted.
        template.extra_fields = Some(vec![string_field("LogPath", false, None)]);
        let store = store_with(template);

        let err = apply(&vs_name(), &vs_spec(None), &store).unwrap_err();
        assert_eq!(err.reason(), Reason::TemplateSubstitutionError);
    }

    #[test]
    fn declarations_must_be_used_and_well_typed() {
        let mut template = template_with_log_path();
        template.extra_fields = Some(vec![
            string_field("LogPath", true, None),
            string_field("Unused", false, None),
        ]);
        let err = validate_declarations(&template).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: the following extraFields are defined but not used in the template: Unused",
        );

        let mut template = template_with_log_path();
        template.extra_fields = Some(vec![ExtraField {
            name: "LogPath".into(),
            description: None,
            r#type: "enum".into(),
            required: false,
            r#enum: None,
            default: None,
        }]);
        let err = validate_declarations(&template).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: extraField 'LogPath' type is 'enum' but no enum values are defined",
        );

        let mut template = template_with_log_path();
        template.extra_fields = Some(vec![ExtraField {
            name: "LogPath".into(),
            description: None,
            r#type: "integer".into(),
            required: false,
            r#enum: None,
            default: None,
        }]);
        let err = validate_declarations(&template).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: extraField 'LogPath' has unknown type 'integer', valid types are: string, enum",
        );

        assert!(validate_declarations(&template_with_log_path()).is_ok());
    }
}

use super::*;

use envoy_api::config::accesslog::v3 as accesslog_v3;
use envoy_api::extensions::access_loggers::file::v3 as file_logger;

fn mk_template(ns: &str, name: &str, spec: Value) -> k8s::xds::VirtualServiceTemplate {
    k8s::xds::VirtualServiceTemplate {
        metadata: meta(ns, name),
        spec: serde_json::from_value(spec).expect("template spec"),
    }
}

/// A template in `platform` whose listener reference resolves to its own
/// namespace, not the service's.
fn base_template() -> k8s::xds::VirtualServiceTemplate {
    mk_template(
        "platform",
        "base",
        json!({
            "listener": {"name": "ingress"},
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [
                    prefix_route("health", "/healthz", "health"),
                    prefix_route("root", "/", "backend"),
                ],
            },
        }),
    )
}

fn route_names(snapshot: &Snapshot, name: &str) -> Vec<String> {
    route_config(snapshot, name).virtual_hosts[0]
        .routes
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

/// A service inherits listener, domains, and routes from its template; its
/// own routes append after the template's, with the catch-all `/` route
/// pushed to the back so specific matches win.
#[test]
fn services_inherit_their_template() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("platform", "ingress", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "health", "health"));
    test.index.write().apply_template(base_template());
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
            "virtualHost": {
                "routes": [prefix_route("api", "/api", "backend")],
            },
        }),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );

    let snapshot = test.snapshot("node-1");
    assert_eq!(route_names(&snapshot, "default/app"), ["health", "api", "root"]);
    assert!(snapshot
        .resources(ResourceType::Listener)
        .iter()
        .any(|r| r.name == "platform/ingress"));
}

/// A `replace` template option swaps a field wholesale instead of merging.
#[test]
fn replace_modifier_overrides_template_routes() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("platform", "ingress", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "health", "health"));
    test.index.write().apply_template(base_template());
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
            "templateOptions": [{"field": "virtualHost", "modifier": "replace"}],
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [prefix_route("api", "/api", "backend")],
            },
        }),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );
    assert_eq!(route_names(&test.snapshot("node-1"), "default/app"), ["api"]);
}

/// `{{ .Field }}` placeholders are declared by the template and filled by
/// the service; a missing required value invalidates it.
#[test]
fn extra_fields_fill_template_placeholders() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("platform", "ingress", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_template(mk_template(
        "platform",
        "base",
        json!({
            "listener": {"name": "ingress"},
            "accessLog": {
                "name": "envoy.access_loggers.file",
                "typed_config": {
                    "@type": "type.googleapis.com/envoy.extensions.access_loggers.file.v3.FileAccessLog",
                    "path": "{{ .LogPath }}",
                },
            },
            "extraFields": [{"name": "LogPath", "type": "string", "required": true}],
        }),
    ));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [prefix_route("root", "/", "backend")],
            },
            "extraFields": {"LogPath": "/var/log/edge/app.log"},
        }),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );

    let listener = listener_named(&test.snapshot("node-1"), "platform/ingress");
    let manager = hcm_of(&listener.filter_chains[0]);
    assert_eq!(manager.access_log.len(), 1);
    let Some(accesslog_v3::access_log::ConfigType::TypedConfig(any)) =
        &manager.access_log[0].config_type
    else {
        panic!("access log has no typed config");
    };
    let log = file_logger::FileAccessLog::decode(any.value.as_slice()).expect("file log decodes");
    assert_eq!(log.path, "/var/log/edge/app.log");

    // Omitting the required field invalidates the referencing service.
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "bare",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
            "virtualHost": {
                "domains": ["bare.example.com"],
                "routes": [prefix_route("root", "/", "backend")],
            },
        }),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "bare")),
        Some(VsStatus::invalid(&Error::ExtraFieldMissingRequired(
            "LogPath".to_string(),
        ))),
    );
}

/// Re-applying a template reflows every service built from it.
#[test]
fn template_updates_ripple_to_services() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("platform", "ingress", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "health", "health"));
    test.index.write().apply_template(base_template());
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
        }),
    ));
    assert_eq!(
        route_names(&test.snapshot("node-1"), "default/app"),
        ["health", "root"],
    );

    let mut rx = test.cache.watch("node-1");
    let _ = rx.borrow_and_update();
    test.index.write().apply_template(mk_template(
        "platform",
        "base",
        json!({
            "listener": {"name": "ingress"},
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [prefix_route("root", "/", "backend")],
            },
        }),
    ));
    assert!(rx.has_changed().unwrap());
    assert_eq!(route_names(&test.snapshot("node-1"), "default/app"), ["root"]);
}

/// An updated template must keep every inheriting service compiling.
#[test]
fn admission_rejects_template_updates_that_break_dependents() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("platform", "ingress", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "health", "health"));
    test.index.write().apply_template(base_template());
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "template": {"name": "base", "namespace": "platform"},
            "virtualHost": {
                "routes": [prefix_route("api", "/api", "backend")],
            },
        }),
    ));

    let candidate = mk_template(
        "platform",
        "base",
        json!({
            "listener": {"name": "ingress"},
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [prefix_route("root", "/", "legacy")],
            },
        }),
    );
    assert_eq!(
        test.index.read().check_template(&candidate),
        Err(Error::ClusterReferenceMissing("legacy".to_string())),
    );

    // Creating the missing cluster clears the rejection.
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "legacy", "legacy"));
    assert_eq!(test.index.read().check_template(&candidate), Ok(()));
}

/// Admission rejects templates with malformed placeholder declarations.
#[test]
fn admission_flags_bad_declarations() {
    let test = TestIndex::new();
    let bad = mk_template(
        "platform",
        "base",
        json!({
            "extraFields": [{"name": "Mode", "type": "widget"}],
        }),
    );
    assert_eq!(
        test.index.read().check_template(&bad),
        Err(Error::InvalidPayload(
            "extraField 'Mode' has unknown type 'widget', valid types are: string, enum"
                .to_string(),
        )),
    );
}

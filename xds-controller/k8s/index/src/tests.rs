//! End-to-end index tests: Kubernetes objects go in through the reducers,
//! snapshots and status updates come out the other side.

mod certificates;
mod conflicts;
mod templates;

use std::collections::BTreeMap;
use std::sync::Arc;

use maplit::btreemap;
use prost::Message;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use envoy_api::config::listener::v3 as listener_v3;
use envoy_api::config::route::v3 as route_v3;
use envoy_api::extensions::filters::network::http_connection_manager::v3 as hcm;

use envoy_xds_controller_core::status::{Update, VsStatus};
use envoy_xds_controller_core::{
    Error, NamespacedName, ObjectKind, Resource, ResourceType, Snapshot, SnapshotCache,
};
use envoy_xds_controller_k8s_api as k8s;

use super::*;

struct TestIndex {
    index: SharedIndex,
    cache: Arc<SnapshotCache>,
    status_rx: mpsc::UnboundedReceiver<Update>,
    _tracing: tracing::subscriber::DefaultGuard,
}

// === impl TestIndex ===

impl TestIndex {
    /// An index whose initial watch sync has already completed, so every
    /// apply below rebuilds immediately.
    fn new() -> Self {
        let _tracing = init_tracing();
        let cache = Arc::new(SnapshotCache::new());
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        let index = Index::shared(
            Settings::default(),
            cache.clone(),
            status_tx,
            SnapshotMetrics::default(),
        );
        {
            let mut index = index.write();
            for kind in ObjectKind::ALL {
                index.mark_synced(kind);
            }
        }
        Self {
            index,
            cache,
            status_rx,
            _tracing,
        }
    }

    fn snapshot(&self, node: &str) -> Arc<Snapshot> {
        self.cache
            .get(node)
            .unwrap_or_else(|| panic!("node {node} has no snapshot"))
    }

    /// Drains queued status updates, keeping the last one per service.
    fn statuses(&mut self) -> BTreeMap<NamespacedName, VsStatus> {
        let mut statuses = BTreeMap::new();
        while let Ok(Update { target, status }) = self.status_rx.try_recv() {
            statuses.insert(target, status);
        }
        statuses
    }
}

fn init_tracing() -> tracing::subscriber::DefaultGuard {
    tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .finish(),
    )
}

fn meta(ns: &str, name: &str) -> k8s::ObjectMeta {
    k8s::ObjectMeta {
        namespace: Some(ns.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn annotate(mut meta: k8s::ObjectMeta, key: &str, value: &str) -> k8s::ObjectMeta {
    meta.annotations
        .get_or_insert_with(Default::default)
        .insert(key.to_string(), value.to_string());
    meta
}

/// A virtual service pinned to `nodes` through the node-id annotation.
fn mk_virtual_service(ns: &str, name: &str, nodes: &str, spec: Value) -> k8s::xds::VirtualService {
    k8s::xds::VirtualService {
        metadata: annotate(meta(ns, name), DEFAULT_NODE_ID_ANNOTATION, nodes),
        spec: serde_json::from_value(spec).expect("virtual service spec"),
        status: None,
    }
}

/// A virtual service without a node-id annotation; it publishes wherever
/// its listener is annotated.
fn mk_unpinned_virtual_service(ns: &str, name: &str, spec: Value) -> k8s::xds::VirtualService {
    k8s::xds::VirtualService {
        metadata: meta(ns, name),
        spec: serde_json::from_value(spec).expect("virtual service spec"),
        status: None,
    }
}

fn mk_listener(ns: &str, name: &str, payload: Value) -> k8s::xds::Listener {
    k8s::xds::Listener {
        metadata: meta(ns, name),
        spec: k8s::xds::ListenerSpec(payload),
    }
}

fn mk_listener_for_nodes(ns: &str, name: &str, nodes: &str, payload: Value) -> k8s::xds::Listener {
    k8s::xds::Listener {
        metadata: annotate(meta(ns, name), DEFAULT_NODE_ID_ANNOTATION, nodes),
        spec: k8s::xds::ListenerSpec(payload),
    }
}

/// A plain HTTP listener payload bound to `0.0.0.0:port`.
fn http_listener(port: u32) -> Value {
    json!({
        "name": "http",
        "address": {
            "socket_address": {"address": "0.0.0.0", "port_value": port},
        },
    })
}

/// An HTTPS listener payload: same bind, plus the TLS inspector.
fn https_listener(port: u32) -> Value {
    json!({
        "name": "https",
        "address": {
            "socket_address": {"address": "0.0.0.0", "port_value": port},
        },
        "listener_filters": [{
            "name": "envoy.filters.listener.tls_inspector",
            "typed_config": {
                "@type": "type.googleapis.com/envoy.extensions.filters.listener.tls_inspector.v3.TlsInspector",
            },
        }],
    })
}

fn mk_cluster(ns: &str, name: &str, cluster_name: &str) -> k8s::xds::Cluster {
    k8s::xds::Cluster {
        metadata: meta(ns, name),
        spec: k8s::xds::ClusterSpec(json!({
            "name": cluster_name,
            "type": "STRICT_DNS",
            "connect_timeout": "1s",
        })),
    }
}

fn mk_tls_secret(ns: &str, name: &str, domains: Option<&str>, cert: &str) -> k8s::Secret {
    let mut metadata = meta(ns, name);
    if let Some(domains) = domains {
        metadata = annotate(metadata, DEFAULT_DOMAIN_ANNOTATION, domains);
    }
    k8s::Secret {
        metadata,
        type_: Some("kubernetes.io/tls".to_string()),
        data: Some(btreemap! {
            "tls.crt".to_string() => k8s::ByteString(cert.as_bytes().to_vec()),
            "tls.key".to_string() => k8s::ByteString(b"test-key".to_vec()),
        }),
        ..Default::default()
    }
}

fn prefix_route(name: &str, prefix: &str, cluster: &str) -> Value {
    json!({
        "name": name,
        "match": {"prefix": prefix},
        "route": {"cluster": cluster},
    })
}

/// A minimal spec: one virtual host with a prefix route to `cluster`.
fn vs_spec(listener: &str, domains: &[&str], cluster: &str) -> Value {
    json!({
        "listener": {"name": listener},
        "virtualHost": {
            "domains": domains,
            "routes": [prefix_route("root", "/", cluster)],
        },
    })
}

/// `vs_spec` plus a tlsConfig block.
fn tls_vs_spec(listener: &str, domains: &[&str], cluster: &str, tls: Value) -> Value {
    let mut spec = vs_spec(listener, domains, cluster);
    spec["tlsConfig"] = tls;
    spec
}

fn decode<M: Message + Default>(resource: &Resource) -> M {
    M::decode(resource.body.value.as_slice()).expect("resource must decode")
}

fn listener_named(snapshot: &Snapshot, name: &str) -> listener_v3::Listener {
    let resource = snapshot
        .resources(ResourceType::Listener)
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("listener {name} not in snapshot"));
    decode(resource)
}

fn route_config(snapshot: &Snapshot, name: &str) -> route_v3::RouteConfiguration {
    let resource = snapshot
        .resources(ResourceType::RouteConfiguration)
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("route configuration {name} not in snapshot"));
    decode(resource)
}

/// Unpacks the HTTP connection manager from a filter chain.
fn hcm_of(chain: &listener_v3::FilterChain) -> hcm::HttpConnectionManager {
    let filter = chain.filters.first().expect("chain has a filter");
    let Some(listener_v3::filter::ConfigType::TypedConfig(any)) = &filter.config_type else {
        panic!("filter {} has no typed config", filter.name);
    };
    hcm::HttpConnectionManager::decode(any.value.as_slice()).expect("manager must decode")
}

/// One listener, one cluster, one service: the node's snapshot carries all
/// four resource families and the service turns valid.
#[test]
fn plain_http_service_round_trip() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));

    let snapshot = test.snapshot("node-1");
    let listener = listener_named(&snapshot, "default/http");
    assert_eq!(listener.name, "default/http");
    assert_eq!(listener.filter_chains.len(), 1);

    // No TLS config: a single catch-all chain without a match or transport
    // socket.
    let chain = &listener.filter_chains[0];
    assert_eq!(chain.name, "default/app");
    assert!(chain.filter_chain_match.is_none());
    assert!(chain.transport_socket.is_none());

    let manager = hcm_of(chain);
    assert_eq!(manager.stat_prefix, "default/app");
    match &manager.route_specifier {
        Some(hcm::http_connection_manager::RouteSpecifier::Rds(rds)) => {
            assert_eq!(rds.route_config_name, "default/app");
        }
        other => panic!("expected RDS, got {other:?}"),
    }

    let routes = route_config(&snapshot, "default/app");
    assert_eq!(routes.virtual_hosts.len(), 1);
    assert_eq!(routes.virtual_hosts[0].name, "default/app");
    assert_eq!(routes.virtual_hosts[0].domains, vec!["app.example.com"]);

    let clusters = snapshot.resources(ResourceType::Cluster);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].name, "backend");
    assert!(snapshot.resources(ResourceType::Secret).is_empty());

    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );
}

/// A service referencing a listener that does not exist yet turns invalid,
/// then recovers the moment the listener is applied.
#[test]
fn service_waits_for_its_listener() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));

    assert!(test.cache.get("node-1").is_none());
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::invalid(&Error::RefMissing {
            kind: ObjectKind::Listener,
            name: NamespacedName::new("default", "http"),
        })),
    );

    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );
    assert_eq!(
        test.snapshot("node-1")
            .resources(ResourceType::Listener)
            .len(),
        1,
    );
}

/// Weighted routes pull every referenced cluster into the snapshot; an
/// unknown target invalidates the whole service until it shows up.
#[test]
fn weighted_clusters_require_every_target() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "canary", "canary"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        json!({
            "listener": {"name": "http"},
            "virtualHost": {
                "domains": ["app.example.com"],
                "routes": [{
                    "name": "split",
                    "match": {"prefix": "/"},
                    "route": {
                        "weighted_clusters": {
                            "clusters": [
                                {"name": "stable", "weight": 80},
                                {"name": "canary", "weight": 20},
                            ],
                        },
                    },
                }],
            },
        }),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::invalid(&Error::ClusterReferenceMissing(
            "stable".to_string(),
        ))),
    );

    test.index
        .write()
        .apply_cluster(mk_cluster("default", "stable", "stable"));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );
    let snapshot = test.snapshot("node-1");
    let clusters: Vec<&str> = snapshot
        .resources(ResourceType::Cluster)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(clusters, vec!["canary", "stable"]);
}

/// A service without a node-id annotation publishes wherever its listener
/// is annotated; with neither annotation it cannot resolve any node.
#[test]
fn node_ids_fall_back_to_the_listener() {
    let mut test = TestIndex::new();
    test.index.write().apply_listener(mk_listener_for_nodes(
        "default",
        "http",
        "edge-a,edge-b",
        http_listener(8080),
    ));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_virtual_service(mk_unpinned_virtual_service(
            "default",
            "app",
            vs_spec("http", &["app.example.com"], "backend"),
        ));

    assert!(!test.snapshot("edge-a").is_empty());
    assert!(!test.snapshot("edge-b").is_empty());

    // An unannotated service on an unannotated listener resolves nowhere.
    test.index
        .write()
        .apply_listener(mk_listener("default", "bare", http_listener(8081)));
    test.index
        .write()
        .apply_virtual_service(mk_unpinned_virtual_service(
            "default",
            "orphan",
            vs_spec("bare", &["orphan.example.com"], "backend"),
        ));
    assert_eq!(
        test.statuses()
            .remove(&NamespacedName::new("default", "orphan")),
        Some(VsStatus::invalid(&Error::NodeIdsEmpty(
            NamespacedName::new("default", "orphan"),
        ))),
    );
}

/// A `*` service lands on every node any other service publishes to,
/// including nodes that only appear later.
#[test]
fn wildcard_services_follow_every_node() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    for (name, port) in [("one", 8080), ("two", 8081), ("three", 8082)] {
        test.index
            .write()
            .apply_listener(mk_listener("default", name, http_listener(port)));
    }

    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "pinned",
        "node-1",
        vs_spec("one", &["pinned.example.com"], "backend"),
    ));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "everywhere",
        "*",
        vs_spec("two", &["everywhere.example.com"], "backend"),
    ));
    assert_eq!(
        test.snapshot("node-1")
            .resources(ResourceType::Listener)
            .len(),
        2,
    );

    // A node that appears later picks the wildcard service up as well.
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "late",
        "node-2",
        vs_spec("three", &["late.example.com"], "backend"),
    ));
    let snapshot = test.snapshot("node-2");
    assert_eq!(snapshot.resources(ResourceType::Listener).len(), 2);
    assert!(snapshot
        .resources(ResourceType::RouteConfiguration)
        .iter()
        .any(|r| r.name == "default/everywhere"));
}

/// Deleting the only service of a node retires the node: its snapshot
/// empties and it drops out of the node list.
#[test]
fn deleting_the_last_service_retires_the_node() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));
    assert_eq!(test.cache.node_ids(), vec!["node-1".to_string()]);

    test.index
        .write()
        .delete_virtual_service("default".to_string(), "app".to_string());
    assert!(test.snapshot("node-1").is_empty());
    assert!(test.cache.node_ids().is_empty());
}

/// Re-applying an object without changes neither wakes the node's streams
/// nor repeats the service's status.
#[test]
fn unchanged_inputs_do_not_republish() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    let vs = mk_virtual_service(
        "default",
        "app",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    );
    test.index.write().apply_virtual_service(vs.clone());
    assert_eq!(test.statuses().len(), 1);

    let mut rx = test.cache.watch("node-1");
    let _ = rx.borrow_and_update();
    test.index.write().apply_virtual_service(vs);
    assert!(!rx.has_changed().unwrap());
    assert!(test.statuses().is_empty());
}

use super::*;

use envoy_api::config::core::v3 as core_v3;
use envoy_api::extensions::transport_sockets::tls::v3 as tls_v3;
use envoy_api::wellknown;

fn mk_opaque_secret(ns: &str, name: &str) -> k8s::Secret {
    k8s::Secret {
        metadata: meta(ns, name),
        type_: Some("Opaque".to_string()),
        data: Some(btreemap! {
            "token".to_string() => k8s::ByteString(b"shhh".to_vec()),
        }),
        ..Default::default()
    }
}

/// Unpacks the downstream TLS context from a chain's transport socket.
fn tls_context(chain: &listener_v3::FilterChain) -> tls_v3::DownstreamTlsContext {
    let socket = chain
        .transport_socket
        .as_ref()
        .expect("chain has a transport socket");
    assert_eq!(socket.name, wellknown::TRANSPORT_SOCKET_TLS);
    let Some(core_v3::transport_socket::ConfigType::TypedConfig(any)) = &socket.config_type else {
        panic!("transport socket has no typed config");
    };
    tls_v3::DownstreamTlsContext::decode(any.value.as_slice()).expect("TLS context must decode")
}

fn inline_chain_bytes(secret: tls_v3::Secret) -> Vec<u8> {
    match secret.r#type {
        Some(tls_v3::secret::Type::TlsCertificate(cert)) => {
            let chain = cert.certificate_chain.expect("certificate chain");
            match chain.specifier {
                Some(core_v3::data_source::Specifier::InlineBytes(bytes)) => bytes,
                other => panic!("expected inline bytes, got {other:?}"),
            }
        }
        other => panic!("expected a TLS certificate, got {other:?}"),
    }
}

/// A secretRef service gets an SNI-matched chain, an SDS transport socket,
/// and the secret itself in the snapshot.
#[test]
fn secret_ref_terminates_tls() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_secret(mk_tls_secret("default", "app-cert", None, "cert-one"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        tls_vs_spec(
            "https",
            &["app.example.com"],
            "backend",
            json!({"secretRef": {"name": "app-cert"}}),
        ),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );

    let snapshot = test.snapshot("node-1");
    let listener = listener_named(&snapshot, "default/https");
    assert_eq!(listener.filter_chains.len(), 1);
    let chain = &listener.filter_chains[0];
    let chain_match = chain
        .filter_chain_match
        .as_ref()
        .expect("chain has a match");
    assert_eq!(chain_match.server_names, vec!["app.example.com"]);

    let context = tls_context(chain);
    let common = context.common_tls_context.expect("common TLS context");
    assert_eq!(common.alpn_protocols, vec!["h2", "http/1.1"]);
    let sds: Vec<&str> = common
        .tls_certificate_sds_secret_configs
        .iter()
        .map(|config| config.name.as_str())
        .collect();
    assert_eq!(sds, vec!["default/app-cert"]);

    let secrets = snapshot.resources(ResourceType::Secret);
    assert_eq!(secrets.len(), 1);
    assert_eq!(secrets[0].name, "default/app-cert");
    assert_eq!(inline_chain_bytes(decode(&secrets[0])), b"cert-one");
}

/// Auto-discovery matches each domain to an annotated certificate and
/// builds one chain per certificate group, exact matches before wildcards.
#[test]
fn auto_discovery_builds_a_chain_per_certificate() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_secret(mk_tls_secret(
        "default",
        "api-cert",
        Some("api.example.com"),
        "api",
    ));
    test.index.write().apply_secret(mk_tls_secret(
        "default",
        "wild-cert",
        Some("*.example.com"),
        "wild",
    ));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        tls_vs_spec(
            "https",
            &["api.example.com", "www.example.com"],
            "backend",
            json!({"autoDiscovery": true}),
        ),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );

    let snapshot = test.snapshot("node-1");
    let listener = listener_named(&snapshot, "default/https");
    let chains: Vec<(Vec<String>, String)> = listener
        .filter_chains
        .iter()
        .map(|chain| {
            let names = chain
                .filter_chain_match
                .as_ref()
                .expect("chain has a match")
                .server_names
                .clone();
            let sds = tls_context(chain)
                .common_tls_context
                .expect("common TLS context")
                .tls_certificate_sds_secret_configs
                .into_iter()
                .next()
                .expect("SDS config")
                .name;
            (names, sds)
        })
        .collect();
    assert_eq!(
        chains,
        vec![
            (
                vec!["api.example.com".to_string()],
                "default/api-cert".to_string(),
            ),
            (
                vec!["www.example.com".to_string()],
                "default/wild-cert".to_string(),
            ),
        ],
    );

    let secrets: Vec<&str> = snapshot
        .resources(ResourceType::Secret)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(secrets, vec!["default/api-cert", "default/wild-cert"]);
}

/// Discovery fails while a domain has no certificate and recovers when a
/// covering secret shows up.
#[test]
fn missing_certificate_blocks_until_it_arrives() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        tls_vs_spec(
            "https",
            &["app.example.com"],
            "backend",
            json!({"autoDiscovery": true}),
        ),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::invalid(&Error::DomainCertificateNotFound(
            "app.example.com".to_string(),
        ))),
    );

    test.index.write().apply_secret(mk_tls_secret(
        "default",
        "app-cert",
        Some("app.example.com"),
        "cert",
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::valid()),
    );
    let listener = listener_named(&test.snapshot("node-1"), "default/https");
    assert_eq!(listener.filter_chains.len(), 1);
}

/// Rotating certificate bytes republishes the node's snapshot with the new
/// secret.
#[test]
fn certificate_rotation_republishes() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_secret(mk_tls_secret("default", "app-cert", None, "cert-one"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        tls_vs_spec(
            "https",
            &["app.example.com"],
            "backend",
            json!({"secretRef": {"name": "app-cert"}}),
        ),
    ));

    let mut rx = test.cache.watch("node-1");
    let _ = rx.borrow_and_update();
    test.index
        .write()
        .apply_secret(mk_tls_secret("default", "app-cert", None, "cert-two"));
    assert!(rx.has_changed().unwrap());

    let snapshot = test.snapshot("node-1");
    let secrets = snapshot.resources(ResourceType::Secret);
    assert_eq!(inline_chain_bytes(decode(&secrets[0])), b"cert-two");
}

/// A secretRef pointing at a non-TLS secret is rejected.
#[test]
fn secret_ref_requires_a_tls_secret() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_secret(mk_opaque_secret("default", "token"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        tls_vs_spec(
            "https",
            &["app.example.com"],
            "backend",
            json!({"secretRef": {"name": "token"}}),
        ),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::invalid(&Error::SecretNotTls(NamespacedName::new(
            "default", "token",
        )))),
    );
}

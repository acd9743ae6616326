use super::*;

fn two_claimants(test: &TestIndex) {
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "alpha",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "beta",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));
}

/// Two services on one listener claiming the same domain: the first by
/// name keeps serving, both turn invalid until the clash is resolved.
#[test]
fn shared_domain_invalidates_both_services() {
    let mut test = TestIndex::new();
    two_claimants(&test);

    let alpha = NamespacedName::new("default", "alpha");
    let beta = NamespacedName::new("default", "beta");
    let statuses = test.statuses();
    assert_eq!(
        statuses.get(&alpha),
        Some(&VsStatus::invalid(&Error::DuplicateDomainAcrossVs {
            domain: "app.example.com".to_string(),
            other: beta.clone(),
        })),
    );
    assert_eq!(
        statuses.get(&beta),
        Some(&VsStatus::invalid(&Error::DuplicateDomainAcrossVs {
            domain: "app.example.com".to_string(),
            other: alpha,
        })),
    );

    // The earlier claimant's config stays up while operators untangle it.
    let snapshot = test.snapshot("node-1");
    let routes: Vec<&str> = snapshot
        .resources(ResourceType::RouteConfiguration)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(routes, vec!["default/alpha"]);
}

/// Deleting the surviving claimant revives the excluded one.
#[test]
fn deleting_the_claimant_revives_the_loser() {
    let mut test = TestIndex::new();
    two_claimants(&test);
    test.statuses();

    test.index
        .write()
        .delete_virtual_service("default".to_string(), "alpha".to_string());
    let statuses = test.statuses();
    assert_eq!(
        statuses.get(&NamespacedName::new("default", "beta")),
        Some(&VsStatus::valid()),
    );
    assert!(!statuses.contains_key(&NamespacedName::new("default", "alpha")));

    let snapshot = test.snapshot("node-1");
    let routes: Vec<&str> = snapshot
        .resources(ResourceType::RouteConfiguration)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(routes, vec!["default/beta"]);
}

/// Listeners that bind the same address and port: the first by name wins
/// the bind, services of the later one turn invalid until it moves.
#[test]
fn port_collision_drops_the_later_listener() {
    let mut test = TestIndex::new();
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_listener(mk_listener("default", "first", http_listener(8080)));
    test.index
        .write()
        .apply_listener(mk_listener("default", "second", http_listener(8080)));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "one",
        "node-1",
        vs_spec("first", &["one.example.com"], "backend"),
    ));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "two",
        "node-1",
        vs_spec("second", &["two.example.com"], "backend"),
    ));

    let two = NamespacedName::new("default", "two");
    let statuses = test.statuses();
    assert_eq!(
        statuses.get(&NamespacedName::new("default", "one")),
        Some(&VsStatus::valid()),
    );
    assert_eq!(
        statuses.get(&two),
        Some(&VsStatus::invalid(&Error::ListenerPortConflict {
            listener: NamespacedName::new("default", "second"),
            winner: NamespacedName::new("default", "first"),
            bind: "0.0.0.0".to_string(),
            port: 8080,
        })),
    );
    assert_eq!(
        test.snapshot("node-1")
            .resources(ResourceType::Listener)
            .len(),
        1,
    );

    // Moving the loser to a free port clears the conflict.
    test.index
        .write()
        .apply_listener(mk_listener("default", "second", http_listener(8081)));
    assert_eq!(test.statuses().remove(&two), Some(VsStatus::valid()));
    assert_eq!(
        test.snapshot("node-1")
            .resources(ResourceType::Listener)
            .len(),
        2,
    );
}

/// The admission probe flags a candidate whose domain is already claimed
/// on the same listener and node set, but not on a disjoint one.
#[test]
fn admission_flags_duplicate_domains() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "http", http_listener(8080)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "alpha",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));

    let gamma = mk_virtual_service(
        "default",
        "gamma",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    );
    assert_eq!(
        test.index.read().check_virtual_service(&gamma),
        Err(Error::DuplicateDomainAcrossVs {
            domain: "app.example.com".to_string(),
            other: NamespacedName::new("default", "alpha"),
        }),
    );

    let elsewhere = mk_virtual_service(
        "default",
        "gamma",
        "node-9",
        vs_spec("http", &["app.example.com"], "backend"),
    );
    assert_eq!(test.index.read().check_virtual_service(&elsewhere), Ok(()));
}

/// Envoy cluster names are global: a second object claiming one is turned
/// away at admission, while the owner itself passes.
#[test]
fn admission_flags_stolen_cluster_names() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "one", "web"));
    assert_eq!(
        test.index
            .read()
            .check_cluster(&mk_cluster("default", "two", "web")),
        Err(Error::DuplicateClusterName("web".to_string())),
    );
    assert_eq!(
        test.index
            .read()
            .check_cluster(&mk_cluster("default", "one", "web")),
        Ok(()),
    );
}

/// Deletion protection: objects referenced by a live service report one of
/// their users.
#[test]
fn referenced_objects_report_a_user() {
    let test = TestIndex::new();
    test.index
        .write()
        .apply_listener(mk_listener("default", "https", https_listener(8443)));
    test.index
        .write()
        .apply_cluster(mk_cluster("default", "backend", "backend"));
    test.index
        .write()
        .apply_secret(mk_tls_secret("default", "app-cert", None, "cert"));
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

    let app = NamespacedName::new("default", "app");
    let index = test.index.read();
    assert_eq!(
        index.in_use_by(ObjectKind::Listener, &NamespacedName::new("default", "https")),
        Some(app.clone()),
    );
    assert_eq!(
        index.in_use_by(ObjectKind::Cluster, &NamespacedName::new("default", "backend")),
        Some(app.clone()),
    );
    assert_eq!(
        index.in_use_by(ObjectKind::Secret, &NamespacedName::new("default", "app-cert")),
        Some(app.clone()),
    );
    assert_eq!(
        index.in_use_by(ObjectKind::Listener, &NamespacedName::new("default", "unused")),
        None,
    );
    assert_eq!(
        index.used_secrets(),
        btreemap! { NamespacedName::new("default", "app-cert") => app },
    );
}

/// A delete for an object a live service still references is dropped; the
/// same delete is honored once the last user is gone.
#[test]
fn deletes_of_in_use_objects_wait_for_the_last_user() {
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
    test.statuses();

    test.index
        .write()
        .delete_cluster("default".to_string(), "backend".to_string());
    let snapshot = test.snapshot("node-1");
    let clusters: Vec<&str> = snapshot
        .resources(ResourceType::Cluster)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(clusters, vec!["backend"]);

    test.index
        .write()
        .delete_virtual_service("default".to_string(), "app".to_string());
    test.index
        .write()
        .delete_cluster("default".to_string(), "backend".to_string());
    test.index.write().apply_virtual_service(mk_virtual_service(
        "default",
        "app",
        "node-1",
        vs_spec("http", &["app.example.com"], "backend"),
    ));
    assert_eq!(
        test.statuses().remove(&NamespacedName::new("default", "app")),
        Some(VsStatus::invalid(&Error::ClusterReferenceMissing(
            "backend".to_string(),
        ))),
    );
}

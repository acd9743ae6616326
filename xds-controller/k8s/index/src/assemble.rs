//! Per-node snapshot assembly.
//!
//! Takes the compiled outputs of every virtual service targeting one node
//! and folds them into a [`Snapshot`]: services are grouped by listener,
//! their filter chains are appended to the decoded listener payload in
//! name order, and clusters and secrets are unioned across the group. Two
//! conflicts are settled here rather than at compile time because they only
//! exist between services: listeners that bind the same address and port,
//! and virtual hosts that serve the same domain.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashMap;

use envoy_api::config::core::v3 as core_v3;
use envoy_api::config::listener::v3 as listener_v3;
use envoy_api::json;

use envoy_xds_controller_core::{
    Error, NamespacedName, ObjectKind, Resource, ResourceType, Snapshot,
};

use crate::compile::VsOutput;
use crate::store::Store;

/// One node's snapshot plus the fate of every service that was considered
/// for it. A service with an `Err` verdict was either excluded from the
/// snapshot or kept in it while a peer was excluded; either way the error
/// becomes its status.
pub(crate) struct Assembly {
    pub snapshot: Snapshot,
    pub verdicts: BTreeMap<NamespacedName, Result<(), Error>>,
}

pub(crate) fn assemble(
    outputs: &BTreeMap<NamespacedName, Arc<VsOutput>>,
    store: &Store,
) -> Assembly {
    let mut verdicts: BTreeMap<NamespacedName, Result<(), Error>> = BTreeMap::new();

    // Group services by listener. Both maps iterate in qualified-name
    // order, which makes every conflict below resolve deterministically.
    let mut groups: BTreeMap<&NamespacedName, Vec<(&NamespacedName, &Arc<VsOutput>)>> =
        BTreeMap::new();
    for (name, output) in outputs {
        groups.entry(&output.listener).or_default().push((name, output));
    }

    let mut listeners = Vec::new();
    let mut routes = Vec::new();
    let mut clusters: BTreeMap<&str, &envoy_api::config::cluster::v3::Cluster> = BTreeMap::new();
    let mut secrets: BTreeMap<&str, &envoy_api::extensions::transport_sockets::tls::v3::Secret> =
        BTreeMap::new();
    let mut bound: AHashMap<(String, u32), NamespacedName> = AHashMap::new();

    for (listener_name, group) in groups {
        let base = match load_listener(listener_name, store) {
            Ok(listener) => listener,
            Err(e) => {
                for (name, _) in &group {
                    verdicts.insert((*name).clone(), Err(e.clone()));
                }
                continue;
            }
        };

        // The first listener to bind an address wins it; later groups are
        // dropped whole.
        if let Some((bind, port)) = socket_bind(&base) {
            if let Some(winner) = bound.get(&(bind.clone(), port)) {
                let err = Error::ListenerPortConflict {
                    listener: listener_name.clone(),
                    winner: winner.clone(),
                    bind,
                    port,
                };
                for (name, _) in &group {
                    verdicts.insert((*name).clone(), Err(err.clone()));
                }
                continue;
            }
            bound.insert((bind, port), listener_name.clone());
        }

        // A domain belongs to one service per listener. On a clash the
        // later service by name is excluded, but both turn invalid: the
        // winner's config is still served while operators untangle it.
        let mut claims = DomainClaims::default();
        let mut included: Vec<(&NamespacedName, &Arc<VsOutput>)> = Vec::new();
        for (name, output) in group {
            match claims.conflict(&output.domains) {
                Some((domain, other)) => {
                    if let Some(verdict) = verdicts.get_mut(&other) {
                        if verdict.is_ok() {
                            *verdict = Err(Error::DuplicateDomainAcrossVs {
                                domain: domain.clone(),
                                other: name.clone(),
                            });
                        }
                    }
                    verdicts.insert(name.clone(), Err(Error::DuplicateDomainAcrossVs {
                        domain,
                        other,
                    }));
                }
                None => {
                    claims.claim(&output.domains, name);
                    verdicts.insert(name.clone(), Ok(()));
                    included.push((name, output));
                }
            }
        }
        if included.is_empty() {
            continue;
        }

        let mut chains: Vec<listener_v3::FilterChain> = included
            .iter()
            .flat_map(|(_, output)| output.filter_chains.iter().cloned())
            .collect();
        chains.sort_by(|a, b| a.name.cmp(&b.name));

        let mut listener = base;
        listener.name = listener_name.to_string();
        listener.filter_chains = chains;
        listeners.push(Resource::new(
            ResourceType::Listener,
            listener_name.to_string(),
            &listener,
        ));

        for (name, output) in &included {
            routes.push(Resource::new(
                ResourceType::RouteConfiguration,
                name.to_string(),
                &output.route_config,
            ));
            for cluster in &output.clusters {
                clusters.entry(&cluster.name).or_insert(cluster);
            }
            for secret in &output.secrets {
                secrets.entry(&secret.name).or_insert(secret);
            }
        }
    }

    let clusters = clusters
        .into_iter()
        .map(|(name, cluster)| Resource::new(ResourceType::Cluster, name, cluster))
        .collect();
    let secrets = secrets
        .into_iter()
        .map(|(name, secret)| Resource::new(ResourceType::Secret, name, secret))
        .collect();

    Assembly {
        snapshot: Snapshot::new(clusters, secrets, listeners, routes),
        verdicts,
    }
}

fn load_listener(name: &NamespacedName, store: &Store) -> Result<listener_v3::Listener, Error> {
    let entry = store.listener(name).ok_or_else(|| Error::RefMissing {
        kind: ObjectKind::Listener,
        name: name.clone(),
    })?;
    Ok(json::from_value(&entry.payload)?)
}

fn socket_bind(listener: &listener_v3::Listener) -> Option<(String, u32)> {
    let address = listener.address.as_ref()?.address.as_ref()?;
    let core_v3::address::Address::SocketAddress(socket) = address else {
        return None;
    };
    let core_v3::socket_address::PortSpecifier::PortValue(port) =
        socket.port_specifier.as_ref()?
    else {
        return None;
    };
    Some((socket.address.clone(), *port))
}

/// Domain ownership within one listener group.
///
/// A wildcard `*.suffix` claims every single-label expansion of the
/// suffix, so it collides with an exact `www.suffix` in either claim
/// order. The bare `*` catch-all only collides with itself; Envoy resolves
/// its overlap with specific domains by most-specific match.
#[derive(Default)]
pub(crate) struct DomainClaims {
    exact: AHashMap<String, NamespacedName>,
    wildcard: AHashMap<String, NamespacedName>,
    /// One exact claimant per wildcard suffix, to catch a wildcard that
    /// arrives after the domains it covers.
    by_suffix: AHashMap<String, NamespacedName>,
}

// === impl DomainClaims ===

impl DomainClaims {
    /// The first of `domains` already claimed by a peer, with that peer.
    pub(crate) fn conflict(&self, domains: &[String]) -> Option<(String, NamespacedName)> {
        for domain in domains {
            if let Some(owner) = self.exact.get(domain) {
                return Some((domain.clone(), owner.clone()));
            }
            if let Some(suffix) = domain.strip_prefix("*.") {
                if let Some(owner) =
                    self.wildcard.get(suffix).or_else(|| self.by_suffix.get(suffix))
                {
                    return Some((domain.clone(), owner.clone()));
                }
            } else if let Some((_, suffix)) = domain.split_once('.') {
                if let Some(owner) = self.wildcard.get(suffix) {
                    return Some((domain.clone(), owner.clone()));
                }
            }
        }
        None
    }

    pub(crate) fn claim(&mut self, domains: &[String], vs: &NamespacedName) {
        for domain in domains {
            if let Some(suffix) = domain.strip_prefix("*.") {
                self.wildcard.insert(suffix.to_owned(), vs.clone());
            } else {
                self.exact.insert(domain.clone(), vs.clone());
                if let Some((_, suffix)) = domain.split_once('.') {
                    self.by_suffix
                        .entry(suffix.to_owned())
                        .or_insert_with(|| vs.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ListenerEntry;
    use envoy_api::config::route::v3 as route_v3;
    use prost::Message;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn output(listener: &NamespacedName, qname: &str, domains: &[&str]) -> Arc<VsOutput> {
        Arc::new(VsOutput {
            node_ids: vec!["node".into()],
            listener: listener.clone(),
            route_config: route_v3::RouteConfiguration {
                name: qname.into(),
                virtual_hosts: vec![],
            },
            filter_chains: vec![listener_v3::FilterChain {
                name: qname.into(),
                ..Default::default()
            }],
            clusters: vec![],
            secrets: vec![],
            domains: domains.iter().map(|d| d.to_string()).collect(),
            referenced_clusters: BTreeSet::new(),
            referenced_secrets: BTreeSet::new(),
            auto_discovery: false,
        })
    }

    fn add_listener(store: &mut Store, name: &NamespacedName, port: u32) {
        store.apply_listener(
            name.clone(),
            ListenerEntry {
                payload: json!({
                    "name": name.name.clone(),
                    "address": {
                        "socket_address": {"address": "0.0.0.0", "port_value": port},
                    },
                }),
                node_ids: vec![],
            },
        );
    }

    fn decoded_listener(assembly: &Assembly, index: usize) -> listener_v3::Listener {
        let resource = &assembly.snapshot.resources(ResourceType::Listener)[index];
        listener_v3::Listener::decode(resource.body.value.as_slice()).expect("listener decodes")
    }

    #[test]
    fn chains_merge_onto_the_listener_in_name_order() {
        let listener = NamespacedName::new("default", "https");
        let mut store = Store::default();
        add_listener(&mut store, &listener, 443);

        let outputs = BTreeMap::from([
            (
                NamespacedName::new("default", "zulu"),
                output(&listener, "default/zulu", &["zulu.example.com"]),
            ),
            (
                NamespacedName::new("default", "alpha"),
                output(&listener, "default/alpha", &["alpha.example.com"]),
            ),
        ]);
        let assembly = assemble(&outputs, &store);

        assert!(assembly.verdicts.values().all(Result::is_ok));
        assert_eq!(assembly.snapshot.resources(ResourceType::Listener).len(), 1);
        let decoded = decoded_listener(&assembly, 0);
        assert_eq!(decoded.name, "default/https");
        assert_eq!(
            decoded
                .filter_chains
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["default/alpha", "default/zulu"],
        );
        assert_eq!(
            assembly.snapshot.resources(ResourceType::RouteConfiguration).len(),
            2,
        );
    }

    #[test]
    fn duplicate_domains_disable_both_services() {
        let listener = NamespacedName::new("default", "https");
        let mut store = Store::default();
        add_listener(&mut store, &listener, 443);

        let first = NamespacedName::new("default", "alpha");
        let second = NamespacedName::new("default", "beta");
        let outputs = BTreeMap::from([
            (first.clone(), output(&listener, "default/alpha", &["app.example.com"])),
            (second.clone(), output(&listener, "default/beta", &["app.example.com"])),
        ]);
        let assembly = assemble(&outputs, &store);

        // The first claimant stays in the snapshot; the second is dropped.
        let routes = assembly.snapshot.resources(ResourceType::RouteConfiguration);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].name, "default/alpha");

        // Both turn invalid, each naming the other.
        assert_eq!(
            assembly.verdicts[&first],
            Err(Error::DuplicateDomainAcrossVs {
                domain: "app.example.com".into(),
                other: second.clone(),
            }),
        );
        assert_eq!(
            assembly.verdicts[&second],
            Err(Error::DuplicateDomainAcrossVs {
                domain: "app.example.com".into(),
                other: first,
            }),
        );
    }

    #[test]
    fn wildcard_domains_collide_with_domains_they_cover() {
        let listener = NamespacedName::new("default", "https");
        let mut store = Store::default();
        add_listener(&mut store, &listener, 443);

        let outputs = BTreeMap::from([
            (
                NamespacedName::new("default", "alpha"),
                output(&listener, "default/alpha", &["*.example.com"]),
            ),
            (
                NamespacedName::new("default", "beta"),
                output(&listener, "default/beta", &["www.example.com"]),
            ),
        ]);
        let assembly = assemble(&outputs, &store);
        assert!(assembly.verdicts.values().all(Result::is_err));

        // The unrelated apex domain is no conflict in either order.
        let outputs = BTreeMap::from([
            (
                NamespacedName::new("default", "alpha"),
                output(&listener, "default/alpha", &["example.com"]),
            ),
            (
                NamespacedName::new("default", "beta"),
                output(&listener, "default/beta", &["*.example.com"]),
            ),
        ]);
        let assembly = assemble(&outputs, &store);
        assert!(assembly.verdicts.values().all(Result::is_ok));
    }

    #[test]
    fn port_conflicts_drop_the_later_listener_group() {
        let first = NamespacedName::new("default", "apex");
        let second = NamespacedName::new("default", "edge");
        let mut store = Store::default();
        add_listener(&mut store, &first, 443);
        add_listener(&mut store, &second, 443);

        let vs_a = NamespacedName::new("default", "alpha");
        let vs_b = NamespacedName::new("default", "beta");
        let outputs = BTreeMap::from([
            (vs_a.clone(), output(&first, "default/alpha", &["a.example.com"])),
            (vs_b.clone(), output(&second, "default/beta", &["b.example.com"])),
        ]);
        let assembly = assemble(&outputs, &store);

        assert_eq!(assembly.verdicts[&vs_a], Ok(()));
        assert_eq!(
            assembly.verdicts[&vs_b],
            Err(Error::ListenerPortConflict {
                listener: second,
                winner: first,
                bind: "0.0.0.0".into(),
                port: 443,
            }),
        );
        assert_eq!(assembly.snapshot.resources(ResourceType::Listener).len(), 1);
    }

    #[test]
    fn missing_listener_invalidates_its_services() {
        let listener = NamespacedName::new("default", "ghost");
        let vs = NamespacedName::new("default", "alpha");
        let outputs =
            BTreeMap::from([(vs.clone(), output(&listener, "default/alpha", &[]))]);
        let assembly = assemble(&outputs, &Store::default());

        assert_eq!(
            assembly.verdicts[&vs],
            Err(Error::RefMissing {
                kind: ObjectKind::Listener,
                name: listener,
            }),
        );
        assert!(assembly.snapshot.is_empty());
    }
}

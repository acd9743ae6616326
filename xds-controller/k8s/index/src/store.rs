//! The distilled view of every watched object.
//!
//! Watch events are reduced to the fields compilation needs before they are
//! stored, so a rebuild never touches Kubernetes metadata. The store also
//! maintains the reverse indexes used to size the rebuild after an event:
//! which virtual services attach to a listener, which inherit a template,
//! and which secret claims each annotated domain.

use std::{collections::BTreeMap, sync::Arc};

use ahash::{AHashMap, AHashSet};
use serde_json::Value;

use envoy_xds_controller_core::{Error, NamespacedName, ObjectKind};
use envoy_xds_controller_k8s_api as k8s;

/// A virtual service reduced to its spec and resolved node IDs.
#[derive(Clone, Debug)]
pub(crate) struct VsEntry {
    pub spec: k8s::xds::VirtualServiceSpec,
    /// Parsed from the node-id annotation; empty when the annotation is
    /// absent and the listener's IDs apply instead.
    pub node_ids: Vec<String>,
}

/// A listener payload plus the node IDs its virtual services inherit.
#[derive(Clone, Debug)]
pub(crate) struct ListenerEntry {
    pub payload: Value,
    pub node_ids: Vec<String>,
}

/// A cluster payload plus the Envoy cluster name extracted from it.
#[derive(Clone, Debug)]
pub(crate) struct ClusterEntry {
    pub payload: Value,
    pub name: Option<String>,
}

/// An access-log payload plus the raw auto-generated-filename annotation.
#[derive(Clone, Debug)]
pub(crate) struct AccessLogEntry {
    pub payload: Value,
    pub auto_filename: Option<String>,
}

/// The usable portion of a watched Kubernetes secret.
#[derive(Clone, Debug)]
pub(crate) struct SecretEntry {
    pub data: SecretData,
    /// Parsed from the domain annotation; drives certificate auto-discovery.
    pub domains: Vec<String>,
}

#[derive(Clone, Debug)]
pub(crate) enum SecretData {
    Tls { cert: Vec<u8>, key: Vec<u8> },
    Opaque(BTreeMap<String, Vec<u8>>),
}

/// Cloning is shallow: payloads sit behind `Arc`s, so the webhook can
/// overlay a candidate object on a copy without duplicating the graph.
#[derive(Clone, Debug, Default)]
pub(crate) struct Store {
    virtual_services: AHashMap<NamespacedName, Arc<VsEntry>>,
    templates: AHashMap<NamespacedName, Arc<k8s::xds::VirtualServiceTemplateSpec>>,
    listeners: AHashMap<NamespacedName, Arc<ListenerEntry>>,
    clusters: AHashMap<NamespacedName, Arc<ClusterEntry>>,
    routes: AHashMap<NamespacedName, Arc<Vec<Value>>>,
    http_filters: AHashMap<NamespacedName, Arc<Vec<Value>>>,
    access_logs: AHashMap<NamespacedName, Arc<AccessLogEntry>>,
    policies: AHashMap<NamespacedName, Arc<Value>>,
    tracings: AHashMap<NamespacedName, Arc<Value>>,
    secrets: AHashMap<NamespacedName, Arc<SecretEntry>>,

    /// Envoy cluster name to the object that claimed it. Uniqueness is
    /// enforced on apply.
    cluster_names: AHashMap<String, NamespacedName>,
    /// Domain to the TLS secret that claimed it, first writer wins.
    secrets_by_domain: AHashMap<String, NamespacedName>,
    vs_by_listener: AHashMap<NamespacedName, AHashSet<NamespacedName>>,
    vs_by_template: AHashMap<NamespacedName, AHashSet<NamespacedName>>,
}

// === impl VsEntry ===

impl VsEntry {
    /// The listener named inline by the spec, qualified against the
    /// service's own namespace. Services that take their listener from a
    /// template return `None`.
    pub fn listener_ref(&self, namespace: &str) -> Option<NamespacedName> {
        self.spec
            .common
            .listener
            .as_ref()
            .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
    }

    pub fn template_ref(&self, namespace: &str) -> Option<NamespacedName> {
        self.spec
            .template
            .as_ref()
            .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
    }
}

// === impl SecretEntry ===

impl SecretEntry {
    pub fn is_tls(&self) -> bool {
        matches!(self.data, SecretData::Tls { .. })
    }
}

// === impl Store ===

impl Store {
    pub fn apply_virtual_service(&mut self, name: NamespacedName, entry: VsEntry) {
        self.unindex_virtual_service(&name);
        if let Some(listener) = entry.listener_ref(&name.namespace) {
            self.vs_by_listener
                .entry(listener)
                .or_default()
                .insert(name.clone());
        }
        if let Some(template) = entry.template_ref(&name.namespace) {
            self.vs_by_template
                .entry(template)
                .or_default()
                .insert(name.clone());
        }
        self.virtual_services.insert(name, Arc::new(entry));
    }

    pub fn delete_virtual_service(&mut self, name: &NamespacedName) {
        self.unindex_virtual_service(name);
        self.virtual_services.remove(name);
    }

    pub fn apply_template(
        &mut self,
        name: NamespacedName,
        spec: k8s::xds::VirtualServiceTemplateSpec,
    ) {
        self.templates.insert(name, Arc::new(spec));
    }

    pub fn delete_template(&mut self, name: &NamespacedName) {
        self.templates.remove(name);
    }

    pub fn apply_listener(&mut self, name: NamespacedName, entry: ListenerEntry) {
        self.listeners.insert(name, Arc::new(entry));
    }

    pub fn delete_listener(&mut self, name: &NamespacedName) {
        self.listeners.remove(name);
    }

    /// Stores a cluster payload, refusing it when the Envoy cluster name
    /// inside is already claimed by a different object.
    pub fn apply_cluster(&mut self, name: NamespacedName, payload: Value) -> Result<(), Error> {
        let cluster_name = payload
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);
        if let Some(cn) = &cluster_name {
            if let Some(owner) = self.cluster_names.get(cn) {
                if owner != &name {
                    return Err(Error::DuplicateClusterName(cn.clone()));
                }
            }
        }
        // An update may rename the embedded cluster; drop the old claim.
        self.cluster_names.retain(|_, owner| owner != &name);
        if let Some(cn) = cluster_name.clone() {
            self.cluster_names.insert(cn, name.clone());
        }
        self.clusters.insert(
            name,
            Arc::new(ClusterEntry {
                payload,
                name: cluster_name,
            }),
        );
        Ok(())
    }

    pub fn delete_cluster(&mut self, name: &NamespacedName) {
        self.cluster_names.retain(|_, owner| owner != name);
        self.clusters.remove(name);
    }

    pub fn apply_route(&mut self, name: NamespacedName, routes: Vec<Value>) {
        self.routes.insert(name, Arc::new(routes));
    }

    pub fn delete_route(&mut self, name: &NamespacedName) {
        self.routes.remove(name);
    }

    pub fn apply_http_filter(&mut self, name: NamespacedName, filters: Vec<Value>) {
        self.http_filters.insert(name, Arc::new(filters));
    }

    pub fn delete_http_filter(&mut self, name: &NamespacedName) {
        self.http_filters.remove(name);
    }

    pub fn apply_access_log(&mut self, name: NamespacedName, entry: AccessLogEntry) {
        self.access_logs.insert(name, Arc::new(entry));
    }

    pub fn delete_access_log(&mut self, name: &NamespacedName) {
        self.access_logs.remove(name);
    }

    pub fn apply_policy(&mut self, name: NamespacedName, payload: Value) {
        self.policies.insert(name, Arc::new(payload));
    }

    pub fn delete_policy(&mut self, name: &NamespacedName) {
        self.policies.remove(name);
    }

    pub fn apply_tracing(&mut self, name: NamespacedName, payload: Value) {
        self.tracings.insert(name, Arc::new(payload));
    }

    pub fn delete_tracing(&mut self, name: &NamespacedName) {
        self.tracings.remove(name);
    }

    pub fn apply_secret(&mut self, name: NamespacedName, entry: SecretEntry) {
        self.prune_domains(&name);
        if entry.is_tls() {
            for domain in &entry.domains {
                match self.secrets_by_domain.get(domain) {
                    None => {
                        self.secrets_by_domain.insert(domain.clone(), name.clone());
                    }
                    Some(owner) if owner == &name => {}
                    Some(owner) => {
                        tracing::warn!(
                            %domain,
                            secret = %name,
                            owner = %owner,
                            "Domain is already claimed by another secret"
                        );
                    }
                }
            }
        }
        self.secrets.insert(name, Arc::new(entry));
    }

    pub fn delete_secret(&mut self, name: &NamespacedName) {
        self.prune_domains(name);
        self.secrets.remove(name);
    }

    pub fn virtual_service(&self, name: &NamespacedName) -> Option<&Arc<VsEntry>> {
        self.virtual_services.get(name)
    }

    pub fn virtual_services(
        &self,
    ) -> impl Iterator<Item = (&NamespacedName, &Arc<VsEntry>)> + '_ {
        self.virtual_services.iter()
    }

    pub fn template(
        &self,
        name: &NamespacedName,
    ) -> Option<&Arc<k8s::xds::VirtualServiceTemplateSpec>> {
        self.templates.get(name)
    }

    pub fn listener(&self, name: &NamespacedName) -> Option<&Arc<ListenerEntry>> {
        self.listeners.get(name)
    }

    pub fn cluster(&self, name: &NamespacedName) -> Option<&Arc<ClusterEntry>> {
        self.clusters.get(name)
    }

    /// Looks up the object claiming an Envoy cluster name.
    pub fn cluster_by_name(&self, cluster_name: &str) -> Option<&NamespacedName> {
        self.cluster_names.get(cluster_name)
    }

    pub fn route(&self, name: &NamespacedName) -> Option<&Arc<Vec<Value>>> {
        self.routes.get(name)
    }

    pub fn http_filter(&self, name: &NamespacedName) -> Option<&Arc<Vec<Value>>> {
        self.http_filters.get(name)
    }

    pub fn access_log(&self, name: &NamespacedName) -> Option<&Arc<AccessLogEntry>> {
        self.access_logs.get(name)
    }

    pub fn policy(&self, name: &NamespacedName) -> Option<&Arc<Value>> {
        self.policies.get(name)
    }

    pub fn tracing(&self, name: &NamespacedName) -> Option<&Arc<Value>> {
        self.tracings.get(name)
    }

    pub fn secret(&self, name: &NamespacedName) -> Option<&Arc<SecretEntry>> {
        self.secrets.get(name)
    }

    pub fn secret_by_domain(&self, domain: &str) -> Option<&NamespacedName> {
        self.secrets_by_domain.get(domain)
    }

    pub fn vs_by_listener(
        &self,
        listener: &NamespacedName,
    ) -> impl Iterator<Item = &NamespacedName> + '_ {
        self.vs_by_listener.get(listener).into_iter().flatten()
    }

    pub fn vs_by_template(
        &self,
        template: &NamespacedName,
    ) -> impl Iterator<Item = &NamespacedName> + '_ {
        self.vs_by_template.get(template).into_iter().flatten()
    }

    pub fn size(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::VirtualService => self.virtual_services.len(),
            ObjectKind::VirtualServiceTemplate => self.templates.len(),
            ObjectKind::Listener => self.listeners.len(),
            ObjectKind::Cluster => self.clusters.len(),
            ObjectKind::Route => self.routes.len(),
            ObjectKind::HttpFilter => self.http_filters.len(),
            ObjectKind::AccessLogConfig => self.access_logs.len(),
            ObjectKind::Policy => self.policies.len(),
            ObjectKind::Tracing => self.tracings.len(),
            ObjectKind::Secret => self.secrets.len(),
        }
    }

    fn unindex_virtual_service(&mut self, name: &NamespacedName) {
        let Some(old) = self.virtual_services.get(name) else {
            return;
        };
        if let Some(listener) = old.listener_ref(&name.namespace) {
            if let Some(set) = self.vs_by_listener.get_mut(&listener) {
                set.remove(name);
                if set.is_empty() {
                    self.vs_by_listener.remove(&listener);
                }
            }
        }
        if let Some(template) = old.template_ref(&name.namespace) {
            if let Some(set) = self.vs_by_template.get_mut(&template) {
                set.remove(name);
                if set.is_empty() {
                    self.vs_by_template.remove(&template);
                }
            }
        }
    }

    fn prune_domains(&mut self, name: &NamespacedName) {
        self.secrets_by_domain.retain(|_, owner| owner != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name(ns: &str, n: &str) -> NamespacedName {
        NamespacedName::new(ns, n)
    }

    #[test]
    fn cluster_names_are_unique_across_objects() {
        let mut store = Store::default();
        store
            .apply_cluster(name("default", "one"), json!({"name": "web"}))
            .expect("first claim");

        // A different object may not claim the same Envoy name.
        let err = store
            .apply_cluster(name("default", "two"), json!({"name": "web"}))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateClusterName("web".into()));

        // The claiming object may keep re-asserting it.
        store
            .apply_cluster(name("default", "one"), json!({"name": "web"}))
            .expect("same owner");

        // Renaming frees the old claim.
        store
            .apply_cluster(name("default", "one"), json!({"name": "api"}))
            .expect("rename");
        store
            .apply_cluster(name("default", "two"), json!({"name": "web"}))
            .expect("freed name");
        assert_eq!(store.cluster_by_name("api"), Some(&name("default", "one")));
        assert_eq!(store.cluster_by_name("web"), Some(&name("default", "two")));
    }

    #[test]
    fn first_secret_keeps_a_contested_domain() {
        let tls = || SecretEntry {
            data: SecretData::Tls {
                cert: b"crt".to_vec(),
                key: b"key".to_vec(),
            },
            domains: vec!["example.com".into()],
        };

        let mut store = Store::default();
        store.apply_secret(name("certs", "first"), tls());
        store.apply_secret(name("certs", "second"), tls());
        assert_eq!(
            store.secret_by_domain("example.com"),
            Some(&name("certs", "first")),
        );

        // The claim is released with the secret; the contender takes over
        // the next time it is applied.
        store.delete_secret(&name("certs", "first"));
        assert_eq!(store.secret_by_domain("example.com"), None);
        store.apply_secret(name("certs", "second"), tls());
        assert_eq!(
            store.secret_by_domain("example.com"),
            Some(&name("certs", "second")),
        );
    }

    #[test]
    fn opaque_secrets_claim_no_domains() {
        let mut store = Store::default();
        store.apply_secret(
            name("certs", "token"),
            SecretEntry {
                data: SecretData::Opaque(BTreeMap::from([(
                    "token".to_string(),
                    b"shhh".to_vec(),
                )])),
                domains: vec!["example.com".into()],
            },
        );
        assert_eq!(store.secret_by_domain("example.com"), None);
    }

    #[test]
    fn vs_indexes_follow_the_latest_spec() {
        use envoy_xds_controller_k8s_api::xds::{ResourceRef, VirtualServiceSpec};

        let vs = |listener: &str| VsEntry {
            spec: VirtualServiceSpec {
                common: k8s::xds::CommonSpec {
                    listener: Some(ResourceRef::new(listener)),
                    ..Default::default()
                },
                template: Some(ResourceRef {
                    name: "base".into(),
                    namespace: Some("platform".into()),
                }),
                template_options: None,
                extra_fields: None,
            },
            node_ids: vec!["node-1".into()],
        };

        let mut store = Store::default();
        store.apply_virtual_service(name("default", "demo"), vs("http"));
        assert_eq!(
            store
                .vs_by_listener(&name("default", "http"))
                .collect::<Vec<_>>(),
            vec![&name("default", "demo")],
        );

        store.apply_virtual_service(name("default", "demo"), vs("https"));
        assert_eq!(store.vs_by_listener(&name("default", "http")).count(), 0);
        assert_eq!(store.vs_by_listener(&name("default", "https")).count(), 1);
        assert_eq!(
            store
                .vs_by_template(&name("platform", "base"))
                .collect::<Vec<_>>(),
            vec![&name("default", "demo")],
        );

        store.delete_virtual_service(&name("default", "demo"));
        assert_eq!(store.vs_by_listener(&name("default", "https")).count(), 0);
        assert_eq!(store.vs_by_template(&name("platform", "base")).count(), 0);
        assert_eq!(store.size(ObjectKind::VirtualService), 0);
    }
}

//! The live index: watch events in, snapshots and statuses out.
//!
//! One [`Index`] receives every watch event through
//! `kubert::index::IndexNamespacedResource`, reduces each object into the
//! [`Store`], recompiles the virtual services the event can affect, and
//! reassembles the snapshots of the nodes those services publish to.
//! Status updates flow out on an unbounded channel toward the status
//! controller; the admission server calls the `check_*` methods against
//! the same state the watches maintain.

use std::{
    collections::{btree_map, BTreeMap, BTreeSet},
    sync::Arc,
};

use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;

use envoy_api::{
    config::{
        accesslog::v3 as accesslog_v3, cluster::v3 as cluster_v3, listener::v3 as listener_v3,
        rbac::v3 as rbac_v3, route::v3 as route_v3,
    },
    extensions::filters::network::http_connection_manager::v3 as hcm,
    json,
    validate::Validate,
};
use envoy_xds_controller_core::{
    status::{Update, VsStatus},
    Error, NamespacedName, ObjectKind, SnapshotCache,
};
use envoy_xds_controller_k8s_api::{self as k8s, annotation_csv};

use crate::{
    assemble::{self, DomainClaims},
    compile::{self, VsOutput},
    metrics::{SizedIndex, SnapshotMetrics},
    store::{AccessLogEntry, ListenerEntry, SecretData, SecretEntry, Store, VsEntry},
    template, Settings, AUTO_FILENAME_ANNOTATION,
};

/// Kubernetes secret type whose data is a certificate chain and key.
const TLS_SECRET_TYPE: &str = "kubernetes.io/tls";

/// The node ID that publishes a virtual service to every known node.
const WILDCARD_NODE: &str = "*";

pub type SharedIndex = Arc<RwLock<Index>>;

pub struct Index {
    node_id_annotation: String,
    domain_annotation: String,
    /// Namespace assumed for admission-reviewed objects that carry none.
    default_namespace: String,

    store: Store,
    /// Compiled output per virtual service. A service is absent here when
    /// it failed to compile or is gone.
    outputs: AHashMap<NamespacedName, Arc<VsOutput>>,
    /// Compile error per failed virtual service, retried on every rebuild
    /// so that a service recovers as soon as its missing pieces arrive.
    failures: AHashMap<NamespacedName, Error>,
    /// Last status published per service, to suppress no-op patches.
    statuses: AHashMap<NamespacedName, VsStatus>,
    /// Kinds whose initial watch list has been delivered. Nothing is
    /// compiled until every kind has reported in.
    synced: AHashSet<ObjectKind>,

    cache: Arc<SnapshotCache>,
    status_tx: UnboundedSender<Update>,
    metrics: SnapshotMetrics,
}

// === impl Index ===

impl Index {
    pub fn shared(
        settings: Settings,
        cache: Arc<SnapshotCache>,
        status_tx: UnboundedSender<Update>,
        metrics: SnapshotMetrics,
    ) -> SharedIndex {
        Arc::new(RwLock::new(Self {
            node_id_annotation: settings.node_id_annotation,
            domain_annotation: settings.domain_annotation,
            default_namespace: settings.default_namespace,
            store: Store::default(),
            outputs: AHashMap::new(),
            failures: AHashMap::new(),
            statuses: AHashMap::new(),
            synced: AHashSet::new(),
            cache,
            status_tx,
            metrics,
        }))
    }

    /// Secrets referenced by at least one compiled service, each with the
    /// first service (by name) that uses it.
    pub fn used_secrets(&self) -> BTreeMap<NamespacedName, NamespacedName> {
        let mut used = BTreeMap::new();
        for (vs, output) in &self.outputs {
            for secret in &output.referenced_secrets {
                match used.entry(secret.clone()) {
                    btree_map::Entry::Vacant(entry) => {
                        entry.insert(vs.clone());
                    }
                    btree_map::Entry::Occupied(mut entry) => {
                        if vs < entry.get() {
                            entry.insert(vs.clone());
                        }
                    }
                }
            }
        }
        used
    }

    /// A virtual service that still depends on the given object, if any.
    /// Admission refuses to delete objects that are in use.
    pub fn in_use_by(&self, kind: ObjectKind, name: &NamespacedName) -> Option<NamespacedName> {
        match kind {
            ObjectKind::VirtualService => None,
            ObjectKind::VirtualServiceTemplate => {
                self.template_dependents(name).into_iter().next()
            }
            ObjectKind::Listener => self.listener_dependents(name).into_iter().next(),
            ObjectKind::Cluster => {
                let claimed = self.store.cluster(name).and_then(|c| c.name.clone());
                self.cluster_dependents(claimed.as_deref(), None)
                    .into_iter()
                    .next()
            }
            ObjectKind::Route => self.route_dependents(name).into_iter().next(),
            ObjectKind::HttpFilter => self.http_filter_dependents(name).into_iter().next(),
            ObjectKind::AccessLogConfig => self.access_log_dependents(name).into_iter().next(),
            ObjectKind::Policy => self.policy_dependents(name).into_iter().next(),
            ObjectKind::Tracing => self.tracing_dependents(name).into_iter().next(),
            ObjectKind::Secret => self
                .outputs
                .iter()
                .filter(|(_, output)| output.referenced_secrets.contains(name))
                .map(|(vs, _)| vs.clone())
                .min(),
        }
    }

    /// Deletion protection inside the event loop, mirroring the webhook's
    /// guard: a delete for an object that live outputs still reference is
    /// not applied to the store.
    fn refuse_delete(&self, kind: ObjectKind, name: &NamespacedName) -> bool {
        match self.in_use_by(kind, name) {
            Some(user) => {
                tracing::warn!(
                    %kind,
                    object = %name,
                    used_by = %user,
                    "Ignoring delete for an object that is still in use"
                );
                true
            }
            None => false,
        }
    }

    // --- Admission checks.
    //
    // Each check runs against the live store without mutating it and
    // surfaces the first error an apply would hit. The webhook turns the
    // error into a denial message.

    /// Compiles a candidate virtual service in place, including a domain
    /// conflict probe against its would-be peers.
    pub fn check_virtual_service(&self, resource: &k8s::xds::VirtualService) -> Result<(), Error> {
        let name = self.object_name(&resource.metadata);
        let entry = VsEntry {
            spec: resource.spec.clone(),
            node_ids: resource.node_ids(&self.node_id_annotation),
        };
        let output = compile::compile(&name, &entry, &self.store)?;
        self.domain_conflict(&name, &output)
    }

    /// Validates a template's declarations, then recompiles every service
    /// inheriting it against a store overlaid with the candidate spec.
    pub fn check_template(&self, resource: &k8s::xds::VirtualServiceTemplate) -> Result<(), Error> {
        template::validate_declarations(&resource.spec)?;

        let name = self.object_name(&resource.metadata);
        let dependents = self.template_dependents(&name);
        if dependents.is_empty() {
            return Ok(());
        }
        let mut store = self.store.clone();
        store.apply_template(name, resource.spec.clone());
        for vs in &dependents {
            if let Some(entry) = store.virtual_service(vs) {
                compile::compile(vs, entry, &store)?;
            }
        }
        Ok(())
    }

    pub fn check_listener(&self, resource: &k8s::xds::Listener) -> Result<(), Error> {
        let name = self.object_name(&resource.metadata);
        let listener: listener_v3::Listener = json::from_value(&resource.spec.0)?;
        listener.validate()?;
        if !listener.filter_chains.is_empty() {
            return Err(Error::ListenerHasFilterChains(name));
        }
        Ok(())
    }

    pub fn check_cluster(&self, resource: &k8s::xds::Cluster) -> Result<(), Error> {
        let name = self.object_name(&resource.metadata);
        let cluster: cluster_v3::Cluster = json::from_value(&resource.spec.0)?;
        cluster.validate()?;
        if let Some(owner) = self.store.cluster_by_name(&cluster.name) {
            if *owner != name {
                return Err(Error::DuplicateClusterName(cluster.name));
            }
        }
        Ok(())
    }

    pub fn check_route(&self, resource: &k8s::xds::Route) -> Result<(), Error> {
        for value in &resource.spec.0 {
            let route: route_v3::Route = json::from_value(value)?;
            route.validate()?;
        }
        Ok(())
    }

    pub fn check_http_filter(&self, resource: &k8s::xds::HttpFilter) -> Result<(), Error> {
        for value in &resource.spec.0 {
            let filter: hcm::HttpFilter = json::from_value(value)?;
            filter.validate()?;
        }
        Ok(())
    }

    pub fn check_access_log_config(
        &self,
        resource: &k8s::xds::AccessLogConfig,
    ) -> Result<(), Error> {
        let log: accesslog_v3::AccessLog = json::from_value(&resource.spec.0)?;
        log.validate()?;
        let annotation = resource
            .metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(AUTO_FILENAME_ANNOTATION));
        if let Some(value) = annotation {
            if value != "true" && value != "false" {
                return Err(Error::InvalidPayload(format!(
                    "{AUTO_FILENAME_ANNOTATION} annotation value must be true or false",
                )));
            }
        }
        Ok(())
    }

    pub fn check_policy(&self, resource: &k8s::xds::Policy) -> Result<(), Error> {
        let policy: rbac_v3::Policy = json::from_value(&resource.spec.0)?;
        policy.validate()?;
        Ok(())
    }

    pub fn check_tracing(&self, resource: &k8s::xds::Tracing) -> Result<(), Error> {
        let _: hcm::http_connection_manager::Tracing = json::from_value(&resource.spec.0)?;
        Ok(())
    }

    /// Replays the domain claims of every compiled peer that shares a node
    /// and a listener with the candidate, then probes its domains.
    fn domain_conflict(&self, name: &NamespacedName, output: &VsOutput) -> Result<(), Error> {
        let mut nodes = BTreeSet::new();
        self.collect_nodes(&output.node_ids, &mut nodes);
        let wildcard = output.node_ids.iter().any(|id| id == WILDCARD_NODE);

        let mut claims = DomainClaims::default();
        for (peer, peer_output) in &self.outputs {
            if peer == name || peer_output.listener != output.listener {
                continue;
            }
            let shares_node = wildcard
                || peer_output
                    .node_ids
                    .iter()
                    .any(|id| id == WILDCARD_NODE || nodes.contains(id));
            if !shares_node {
                continue;
            }
            claims.claim(&peer_output.domains, peer);
        }
        if let Some((domain, other)) = claims.conflict(&output.domains) {
            return Err(Error::DuplicateDomainAcrossVs { domain, other });
        }
        Ok(())
    }

    fn object_name(&self, meta: &k8s::ObjectMeta) -> NamespacedName {
        let namespace = meta
            .namespace
            .clone()
            .unwrap_or_else(|| self.default_namespace.clone());
        NamespacedName::new(namespace, meta.name.clone().unwrap_or_default())
    }

    // --- Watch event reducers.
    //
    // Each reducer stores the distilled object, sizes the set of virtual
    // services the event can affect, and rebuilds their snapshots.

    pub(crate) fn apply_virtual_service(&mut self, resource: k8s::xds::VirtualService) {
        let name = self.object_name(&resource.metadata);
        let entry = VsEntry {
            node_ids: resource.node_ids(&self.node_id_annotation),
            spec: resource.spec,
        };
        self.store.apply_virtual_service(name.clone(), entry);
        self.rebuild(BTreeSet::from([name]));
    }

    pub(crate) fn delete_virtual_service(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        self.store.delete_virtual_service(&name);
        self.statuses.remove(&name);
        self.rebuild(BTreeSet::from([name]));
    }

    pub(crate) fn apply_template(&mut self, resource: k8s::xds::VirtualServiceTemplate) {
        let name = self.object_name(&resource.metadata);
        self.store.apply_template(name.clone(), resource.spec);
        let affected = self.template_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_template(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::VirtualServiceTemplate, &name) {
            return;
        }
        self.store.delete_template(&name);
        let affected = self.template_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_listener(&mut self, resource: k8s::xds::Listener) {
        let name = self.object_name(&resource.metadata);
        let node_ids = annotation_csv(&resource.metadata, &self.node_id_annotation);
        let entry = ListenerEntry {
            payload: resource.spec.0,
            node_ids,
        };
        self.store.apply_listener(name.clone(), entry);
        let affected = self.listener_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_listener(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Listener, &name) {
            return;
        }
        self.store.delete_listener(&name);
        let affected = self.listener_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_cluster(&mut self, resource: k8s::xds::Cluster) {
        let name = self.object_name(&resource.metadata);
        let old = self.store.cluster(&name).and_then(|c| c.name.clone());
        if let Err(error) = self.store.apply_cluster(name.clone(), resource.spec.0) {
            tracing::warn!(cluster = %name, %error, "Rejected cluster");
            return;
        }
        let new = self.store.cluster(&name).and_then(|c| c.name.clone());
        let affected = self.cluster_dependents(old.as_deref(), new.as_deref());
        self.rebuild(affected);
    }

    pub(crate) fn delete_cluster(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Cluster, &name) {
            return;
        }
        let old = self.store.cluster(&name).and_then(|c| c.name.clone());
        self.store.delete_cluster(&name);
        let affected = self.cluster_dependents(old.as_deref(), None);
        self.rebuild(affected);
    }

    pub(crate) fn apply_route(&mut self, resource: k8s::xds::Route) {
        let name = self.object_name(&resource.metadata);
        self.store.apply_route(name.clone(), resource.spec.0);
        let affected = self.route_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_route(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Route, &name) {
            return;
        }
        self.store.delete_route(&name);
        let affected = self.route_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_http_filter(&mut self, resource: k8s::xds::HttpFilter) {
        let name = self.object_name(&resource.metadata);
        self.store.apply_http_filter(name.clone(), resource.spec.0);
        let affected = self.http_filter_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_http_filter(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::HttpFilter, &name) {
            return;
        }
        self.store.delete_http_filter(&name);
        let affected = self.http_filter_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_access_log(&mut self, resource: k8s::xds::AccessLogConfig) {
        let name = self.object_name(&resource.metadata);
        let auto_filename = resource
            .metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(AUTO_FILENAME_ANNOTATION))
            .cloned();
        let entry = AccessLogEntry {
            payload: resource.spec.0,
            auto_filename,
        };
        self.store.apply_access_log(name.clone(), entry);
        let affected = self.access_log_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_access_log(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::AccessLogConfig, &name) {
            return;
        }
        self.store.delete_access_log(&name);
        let affected = self.access_log_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_policy(&mut self, resource: k8s::xds::Policy) {
        let name = self.object_name(&resource.metadata);
        self.store.apply_policy(name.clone(), resource.spec.0);
        let affected = self.policy_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_policy(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Policy, &name) {
            return;
        }
        self.store.delete_policy(&name);
        let affected = self.policy_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_tracing(&mut self, resource: k8s::xds::Tracing) {
        let name = self.object_name(&resource.metadata);
        self.store.apply_tracing(name.clone(), resource.spec.0);
        let affected = self.tracing_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_tracing(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Tracing, &name) {
            return;
        }
        self.store.delete_tracing(&name);
        let affected = self.tracing_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn apply_secret(&mut self, resource: k8s::Secret) {
        let name = self.object_name(&resource.metadata);
        let domains = annotation_csv(&resource.metadata, &self.domain_annotation);
        match secret_entry(resource, domains) {
            Some(entry) => self.store.apply_secret(name.clone(), entry),
            None => {
                tracing::warn!(secret = %name, "TLS secret is missing tls.crt or tls.key");
                self.store.delete_secret(&name);
            }
        }
        let affected = self.secret_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn delete_secret(&mut self, namespace: String, name: String) {
        let name = NamespacedName::new(namespace, name);
        if self.refuse_delete(ObjectKind::Secret, &name) {
            return;
        }
        self.store.delete_secret(&name);
        let affected = self.secret_dependents(&name);
        self.rebuild(affected);
    }

    pub(crate) fn mark_synced(&mut self, kind: ObjectKind) {
        if self.synced.insert(kind) && self.ready() {
            tracing::info!("Initial sync complete; building snapshots");
            let all = self
                .store
                .virtual_services()
                .map(|(name, _)| name.clone())
                .collect();
            self.rebuild(all);
        }
    }

    fn ready(&self) -> bool {
        self.synced.len() == ObjectKind::ALL.len()
    }

    // --- Dependency tracking.

    fn template_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.store.vs_by_template(name).cloned().collect()
    }

    /// Services attaching to a listener, whether the attachment is spelled
    /// inline or inherited from a template.
    fn listener_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        let mut affected: BTreeSet<NamespacedName> =
            self.store.vs_by_listener(name).cloned().collect();
        affected.extend(
            self.outputs
                .iter()
                .filter(|(_, output)| output.listener == *name)
                .map(|(vs, _)| vs.clone()),
        );
        affected
    }

    fn cluster_dependents(&self, old: Option<&str>, new: Option<&str>) -> BTreeSet<NamespacedName> {
        self.outputs
            .iter()
            .filter(|(_, output)| {
                [old, new]
                    .iter()
                    .flatten()
                    .any(|name| output.referenced_clusters.contains(*name))
            })
            .map(|(vs, _)| vs.clone())
            .collect()
    }

    fn route_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.referencing(name, |common, namespace| {
            common
                .additional_routes
                .iter()
                .flatten()
                .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
                .collect()
        })
    }

    fn http_filter_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.referencing(name, |common, namespace| {
            common
                .additional_http_filters
                .iter()
                .flatten()
                .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
                .collect()
        })
    }

    fn access_log_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.referencing(name, |common, namespace| {
            common
                .access_log_config
                .iter()
                .chain(common.access_log_configs.iter().flatten())
                .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
                .collect()
        })
    }

    fn policy_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.referencing(name, |common, namespace| {
            common
                .rbac
                .iter()
                .flat_map(|rbac| rbac.additional_policies.iter().flatten())
                .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
                .collect()
        })
    }

    fn tracing_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.referencing(name, |common, namespace| {
            common
                .tracing_ref
                .iter()
                .map(|r| NamespacedName::new(r.namespace_or(namespace), &*r.name))
                .collect()
        })
    }

    /// Certificate changes touch the services that pulled the secret in and
    /// every auto-discovery service, whose selection may shift with the
    /// secret's domain annotation.
    fn secret_dependents(&self, name: &NamespacedName) -> BTreeSet<NamespacedName> {
        self.outputs
            .iter()
            .filter(|(_, output)| {
                output.auto_discovery || output.referenced_secrets.contains(name)
            })
            .map(|(vs, _)| vs.clone())
            .collect()
    }

    /// Services whose effective spec names the target object. References
    /// from the service resolve against the service's namespace; references
    /// inherited from a template resolve against the template's.
    fn referencing<F>(&self, target: &NamespacedName, refs: F) -> BTreeSet<NamespacedName>
    where
        F: Fn(&k8s::xds::CommonSpec, &str) -> Vec<NamespacedName>,
    {
        let mut found = BTreeSet::new();
        for (name, entry) in self.store.virtual_services() {
            if refs(&entry.spec.common, &name.namespace).contains(target) {
                found.insert(name.clone());
                continue;
            }
            if let Some(template_name) = entry.template_ref(&name.namespace) {
                if let Some(spec) = self.store.template(&template_name) {
                    if refs(&spec.common, &template_name.namespace).contains(target) {
                        found.insert(name.clone());
                    }
                }
            }
        }
        found
    }

    // --- Rebuild.

    /// Recompiles the affected services and republishes the snapshot of
    /// every node whose contents may have moved. Failed services are folded
    /// in unconditionally so they recover without their own event.
    fn rebuild(&mut self, mut affected: BTreeSet<NamespacedName>) {
        if !self.ready() {
            return;
        }
        affected.extend(self.failures.keys().cloned());
        if affected.is_empty() {
            return;
        }

        // Nodes the affected services published to before the change.
        let mut nodes = BTreeSet::new();
        for vs in &affected {
            if let Some(output) = self.outputs.get(vs) {
                self.collect_nodes(&output.node_ids, &mut nodes);
            }
        }

        for vs in &affected {
            let compiled = self
                .store
                .virtual_service(vs)
                .map(|entry| compile::compile(vs, entry, &self.store));
            match compiled {
                Some(Ok(output)) => {
                    self.failures.remove(vs);
                    self.outputs.insert(vs.clone(), Arc::new(output));
                }
                Some(Err(error)) => {
                    tracing::info!(vs = %vs, %error, "Virtual service failed to compile");
                    self.outputs.remove(vs);
                    self.failures.insert(vs.clone(), error);
                }
                None => {
                    self.outputs.remove(vs);
                    self.failures.remove(vs);
                    self.statuses.remove(vs);
                }
            }
        }

        // And the nodes they publish to now.
        for vs in &affected {
            if let Some(output) = self.outputs.get(vs) {
                self.collect_nodes(&output.node_ids, &mut nodes);
            }
        }

        let mut verdicts: BTreeMap<NamespacedName, Result<(), Error>> = BTreeMap::new();
        for node in &nodes {
            let node_outputs: BTreeMap<NamespacedName, Arc<VsOutput>> = self
                .outputs
                .iter()
                .filter(|(_, output)| {
                    output
                        .node_ids
                        .iter()
                        .any(|id| id == node || id == WILDCARD_NODE)
                })
                .map(|(name, output)| (name.clone(), output.clone()))
                .collect();
            let assembly = assemble::assemble(&node_outputs, &self.store);
            let published = self.cache.set(node, assembly.snapshot);
            self.metrics.rebuilt(node, published);

            // A service shared across nodes is invalid if any one of its
            // assemblies rejects it.
            for (vs, verdict) in assembly.verdicts {
                match verdicts.entry(vs) {
                    btree_map::Entry::Vacant(entry) => {
                        entry.insert(verdict);
                    }
                    btree_map::Entry::Occupied(mut entry) => {
                        if entry.get().is_ok() && verdict.is_err() {
                            let _ = entry.insert(verdict);
                        }
                    }
                }
            }
        }

        let mut targets: BTreeSet<NamespacedName> = verdicts.keys().cloned().collect();
        targets.extend(
            affected
                .iter()
                .filter(|vs| self.store.virtual_service(vs).is_some())
                .cloned(),
        );
        for vs in targets {
            let status = if let Some(error) = self.failures.get(&vs) {
                VsStatus::invalid(error)
            } else {
                match verdicts.get(&vs) {
                    Some(Err(error)) => VsStatus::invalid(error),
                    _ => VsStatus::valid(),
                }
            };
            self.publish_status(vs, status);
        }

        self.metrics.set_nodes(self.cache.node_ids().len());
        let invalid = self.statuses.values().filter(|s| !s.valid).count();
        self.metrics.set_services(self.statuses.len() - invalid, invalid);
    }

    /// Expands node IDs into `nodes`, resolving `*` to every node known to
    /// any compiled service or published snapshot.
    fn collect_nodes(&self, ids: &[String], nodes: &mut BTreeSet<String>) {
        for id in ids {
            if id == WILDCARD_NODE {
                nodes.extend(
                    self.outputs
                        .values()
                        .flat_map(|output| output.node_ids.iter())
                        .filter(|id| *id != WILDCARD_NODE)
                        .cloned(),
                );
                nodes.extend(self.cache.node_ids());
            } else {
                nodes.insert(id.clone());
            }
        }
    }

    fn publish_status(&mut self, vs: NamespacedName, status: VsStatus) {
        if self.statuses.get(&vs) == Some(&status) {
            return;
        }
        self.statuses.insert(vs.clone(), status.clone());
        if let Err(error) = self.status_tx.send(Update { target: vs, status }) {
            tracing::error!(%error, "Failed to enqueue status update");
        }
    }
}

fn secret_entry(resource: k8s::Secret, domains: Vec<String>) -> Option<SecretEntry> {
    let is_tls = resource.type_.as_deref() == Some(TLS_SECRET_TYPE);
    let mut data: BTreeMap<String, Vec<u8>> = resource
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.0))
        .collect();
    let data = if is_tls {
        let cert = data.remove("tls.crt")?;
        let key = data.remove("tls.key")?;
        SecretData::Tls { cert, key }
    } else {
        SecretData::Opaque(data)
    };
    Some(SecretEntry { data, domains })
}

impl kubert::index::IndexNamespacedResource<k8s::xds::VirtualService> for Index {
    fn apply(&mut self, resource: k8s::xds::VirtualService) {
        self.apply_virtual_service(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_virtual_service(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::VirtualService>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_virtual_service(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_virtual_service(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::VirtualService);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::VirtualServiceTemplate> for Index {
    fn apply(&mut self, resource: k8s::xds::VirtualServiceTemplate) {
        self.apply_template(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_template(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::VirtualServiceTemplate>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_template(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_template(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::VirtualServiceTemplate);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::Listener> for Index {
    fn apply(&mut self, resource: k8s::xds::Listener) {
        self.apply_listener(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_listener(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::Listener>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_listener(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_listener(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Listener);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::Cluster> for Index {
    fn apply(&mut self, resource: k8s::xds::Cluster) {
        self.apply_cluster(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_cluster(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::Cluster>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_cluster(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_cluster(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Cluster);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::Route> for Index {
    fn apply(&mut self, resource: k8s::xds::Route) {
        self.apply_route(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_route(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::Route>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_route(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_route(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Route);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::HttpFilter> for Index {
    fn apply(&mut self, resource: k8s::xds::HttpFilter) {
        self.apply_http_filter(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_http_filter(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::HttpFilter>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_http_filter(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_http_filter(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::HttpFilter);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::AccessLogConfig> for Index {
    fn apply(&mut self, resource: k8s::xds::AccessLogConfig) {
        self.apply_access_log(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_access_log(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::AccessLogConfig>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_access_log(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_access_log(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::AccessLogConfig);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::Policy> for Index {
    fn apply(&mut self, resource: k8s::xds::Policy) {
        self.apply_policy(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_policy(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::Policy>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_policy(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_policy(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Policy);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::xds::Tracing> for Index {
    fn apply(&mut self, resource: k8s::xds::Tracing) {
        self.apply_tracing(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_tracing(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::xds::Tracing>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_tracing(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_tracing(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Tracing);
    }
}

impl kubert::index::IndexNamespacedResource<k8s::Secret> for Index {
    fn apply(&mut self, resource: k8s::Secret) {
        self.apply_secret(resource);
    }

    fn delete(&mut self, namespace: String, name: String) {
        self.delete_secret(namespace, name);
    }

    fn reset(
        &mut self,
        resources: Vec<k8s::Secret>,
        removed: kubert::index::NamespacedRemoved,
    ) {
        for resource in resources {
            self.apply_secret(resource);
        }
        for (namespace, names) in removed {
            for name in names {
                self.delete_secret(namespace.clone(), name);
            }
        }
        self.mark_synced(ObjectKind::Secret);
    }
}

impl SizedIndex<k8s::xds::VirtualService> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::VirtualService)
    }
}

impl SizedIndex<k8s::xds::VirtualServiceTemplate> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::VirtualServiceTemplate)
    }
}

impl SizedIndex<k8s::xds::Listener> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Listener)
    }
}

impl SizedIndex<k8s::xds::Cluster> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Cluster)
    }
}

impl SizedIndex<k8s::xds::Route> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Route)
    }
}

impl SizedIndex<k8s::xds::HttpFilter> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::HttpFilter)
    }
}

impl SizedIndex<k8s::xds::AccessLogConfig> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::AccessLogConfig)
    }
}

impl SizedIndex<k8s::xds::Policy> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Policy)
    }
}

impl SizedIndex<k8s::xds::Tracing> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Tracing)
    }
}

impl SizedIndex<k8s::Secret> for Index {
    fn size(&self) -> usize {
        self.store.size(ObjectKind::Secret)
    }
}

//! Compiles one virtual service into the Envoy resources it contributes.
//!
//! Compilation is pure: it reads the store, never the cluster. The result
//! carries everything snapshot assembly needs, per node set: the route
//! configuration, the filter chains destined for the service's listener,
//! the clusters and SDS secrets the service pulls in, and the reference
//! lists used to size later rebuilds. Any error here invalidates exactly
//! this service; its peers on the same listener are unaffected.

use std::collections::{BTreeMap, BTreeSet};

use prost::Message;
use serde_json::Value;

use envoy_api::config::accesslog::v3 as accesslog_v3;
use envoy_api::config::cluster::v3 as cluster_v3;
use envoy_api::config::core::v3 as core_v3;
use envoy_api::config::listener::v3 as listener_v3;
use envoy_api::config::rbac::v3 as rbac_v3;
use envoy_api::config::route::v3 as route_v3;
use envoy_api::extensions::access_loggers::file::v3 as file_logger;
use envoy_api::extensions::filters::http::rbac::v3 as http_rbac;
use envoy_api::extensions::filters::http::router::v3 as router;
use envoy_api::extensions::filters::network::http_connection_manager::v3 as hcm;
use envoy_api::extensions::transport_sockets::tls::v3 as tls_v3;
use envoy_api::json::{self, FromJson};
use envoy_api::validate::Validate;
use envoy_api::wellknown;

use envoy_xds_controller_core::{Error, NamespacedName, ObjectKind};
use envoy_xds_controller_k8s_api as k8s;

use crate::store::{SecretData, Store, VsEntry};
use crate::tls::TlsGroup;
use crate::{template, tls, AUTO_FILENAME_ANNOTATION};

/// The filter name carried by the generated RBAC HTTP filter.
const RBAC_FILTER_NAME: &str = "exc.filters.http.rbac";

/// Everything one virtual service contributes to the snapshots of its
/// nodes.
#[derive(Clone, Debug)]
pub(crate) struct VsOutput {
    /// Effective node IDs; `["*"]` publishes to every known node.
    pub node_ids: Vec<String>,
    pub listener: NamespacedName,
    pub route_config: route_v3::RouteConfiguration,
    pub filter_chains: Vec<listener_v3::FilterChain>,
    pub clusters: Vec<cluster_v3::Cluster>,
    pub secrets: Vec<tls_v3::Secret>,
    /// The virtual host's domains, checked for conflicts at assembly.
    pub domains: Vec<String>,
    pub referenced_clusters: BTreeSet<String>,
    pub referenced_secrets: BTreeSet<NamespacedName>,
    pub auto_discovery: bool,
}

pub(crate) fn compile(
    name: &NamespacedName,
    entry: &VsEntry,
    store: &Store,
) -> Result<VsOutput, Error> {
    let spec = template::apply(name, &entry.spec, store)?;
    let qname = name.to_string();

    let listener_ref = spec
        .listener
        .as_ref()
        .ok_or_else(|| Error::InvalidPayload("no listener is set".into()))?;
    let listener_name =
        NamespacedName::new(listener_ref.namespace_or(&name.namespace), &*listener_ref.name);
    let listener_entry = store
        .listener(&listener_name)
        .ok_or_else(|| Error::RefMissing {
            kind: ObjectKind::Listener,
            name: listener_name.clone(),
        })?;
    let xds_listener: listener_v3::Listener = json::from_value(&listener_entry.payload)?;
    xds_listener.validate()?;
    if !xds_listener.filter_chains.is_empty() {
        return Err(Error::ListenerHasFilterChains(listener_name));
    }
    let listener_is_tls = is_tls_listener(&xds_listener);

    // The service's own node IDs win; otherwise it inherits the listener's.
    let node_ids = if !entry.node_ids.is_empty() {
        entry.node_ids.clone()
    } else if !listener_entry.node_ids.is_empty() {
        listener_entry.node_ids.clone()
    } else {
        return Err(Error::NodeIdsEmpty(name.clone()));
    };

    match (listener_is_tls, &spec.tls_config) {
        (true, None) => {
            return Err(Error::InvalidTlsConfig(
                "listener expects TLS but no tlsConfig is set".into(),
            ));
        }
        (false, Some(_)) => {
            return Err(Error::InvalidTlsConfig(
                "listener is not TLS but tlsConfig is set".into(),
            ));
        }
        _ => {}
    }

    let virtual_host = build_virtual_host(name, &spec, store)?;
    let domains = virtual_host.domains.clone();
    let route_config = route_v3::RouteConfiguration {
        name: qname.clone(),
        virtual_hosts: vec![virtual_host],
    };
    route_config.validate()?;

    let http_filters = build_http_filters(name, &spec, store)?;
    let access_logs = build_access_logs(name, &spec, store)?;
    let tracing = build_tracing(name, &spec, store)?;

    let mut upgrade_configs = Vec::new();
    if let Some(values) = &spec.upgrade_configs {
        for value in values {
            upgrade_configs
                .push(json::from_value::<hcm::http_connection_manager::UpgradeConfig>(value)?);
        }
    }

    let manager = hcm::HttpConnectionManager {
        codec_type: hcm::http_connection_manager::CodecType::Auto as i32,
        stat_prefix: qname.replace('.', "-"),
        route_specifier: Some(hcm::http_connection_manager::RouteSpecifier::Rds(hcm::Rds {
            config_source: Some(ads_config_source()),
            route_config_name: qname.clone(),
        })),
        use_remote_address: Some(spec.use_remote_address.unwrap_or(false)),
        xff_num_trusted_hops: spec.xff_num_trusted_hops.unwrap_or(0),
        upgrade_configs,
        http_filters,
        access_log: access_logs,
        tracing,
        ..Default::default()
    };
    manager.validate()?;
    let manager = pack(&manager);

    let tls_groups = match &spec.tls_config {
        Some(config) => tls::resolve(config, &name.namespace, &domains, store)?,
        None => vec![],
    };
    let auto_discovery = spec
        .tls_config
        .as_ref()
        .map_or(false, k8s::xds::TlsConfig::auto_discovery);

    let filter_chains = if tls_groups.is_empty() {
        vec![build_filter_chain(&qname, &manager, None, &[])]
    } else {
        tls_groups
            .iter()
            .map(|group| build_filter_chain(&qname, &manager, Some(&group.secret), &group.domains))
            .collect()
    };

    let (secrets, referenced_secrets) = build_secrets(name, &spec, &tls_groups, store)?;

    let referenced_clusters = collect_cluster_names(name, &spec, &route_config, store);
    let mut clusters = Vec::new();
    for cluster_name in &referenced_clusters {
        let entry = store
            .cluster_by_name(cluster_name)
            .and_then(|owner| store.cluster(owner))
            .ok_or_else(|| Error::ClusterReferenceMissing(cluster_name.clone()))?;
        let xds_cluster: cluster_v3::Cluster = json::from_value(&entry.payload)?;
        xds_cluster.validate()?;
        clusters.push(xds_cluster);
    }

    Ok(VsOutput {
        node_ids,
        listener: listener_name,
        route_config,
        filter_chains,
        clusters,
        secrets,
        domains,
        referenced_clusters,
        referenced_secrets,
        auto_discovery,
    })
}

/// Decodes the virtual host, appends referenced routes, and forces the
/// catch-all `/` prefix route (if any) to match last.
fn build_virtual_host(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    store: &Store,
) -> Result<route_v3::VirtualHost, Error> {
    let value = spec
        .virtual_host
        .as_ref()
        .ok_or_else(|| Error::InvalidPayload("virtual host is empty".into()))?;
    let mut virtual_host: route_v3::VirtualHost = json::from_value(value)?;
    virtual_host.name = name.to_string();

    if let Some(refs) = &spec.additional_routes {
        for r in refs {
            let route_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
            let routes = store.route(&route_name).ok_or_else(|| Error::RefMissing {
                kind: ObjectKind::Route,
                name: route_name.clone(),
            })?;
            for item in routes.iter() {
                virtual_host.routes.push(json::from_value(item)?);
            }
        }
    }

    move_root_route_last(&mut virtual_host.routes)?;
    virtual_host.validate()?;
    Ok(virtual_host)
}

fn move_root_route_last(routes: &mut Vec<route_v3::Route>) -> Result<(), Error> {
    let mut root = None;
    for (i, route) in routes.iter().enumerate() {
        let is_root = matches!(
            route.r#match.as_ref().and_then(|m| m.path_specifier.as_ref()),
            Some(route_v3::route_match::PathSpecifier::Prefix(prefix)) if prefix == "/"
        );
        if is_root {
            if root.is_some() {
                return Err(Error::InvalidPayload("multiple root routes found".into()));
            }
            root = Some(i);
        }
    }
    if let Some(i) = root {
        if i + 1 != routes.len() {
            let route = routes.remove(i);
            routes.push(route);
        }
    }
    Ok(())
}

/// The filter chain order is: RBAC (generated), inline filters, referenced
/// filters, router. A user-supplied router is moved to the end; one is
/// synthesized when none is given.
fn build_http_filters(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    store: &Store,
) -> Result<Vec<hcm::HttpFilter>, Error> {
    let mut filters = Vec::new();
    if let Some(rbac) = &spec.rbac {
        filters.push(build_rbac_filter(name, rbac, store)?);
    }
    if let Some(inline) = &spec.http_filters {
        for item in inline {
            let filter: hcm::HttpFilter = json::from_value(item)?;
            filter.validate()?;
            filters.push(filter);
        }
    }
    if let Some(refs) = &spec.additional_http_filters {
        for r in refs {
            let filter_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
            let items = store
                .http_filter(&filter_name)
                .ok_or_else(|| Error::RefMissing {
                    kind: ObjectKind::HttpFilter,
                    name: filter_name.clone(),
                })?;
            for item in items.iter() {
                let filter: hcm::HttpFilter = json::from_value(item)?;
                filter.validate()?;
                filters.push(filter);
            }
        }
    }
    place_router_last(&mut filters)?;
    Ok(filters)
}

fn place_router_last(filters: &mut Vec<hcm::HttpFilter>) -> Result<(), Error> {
    let router_url = envoy_api::type_url(router::Router::NAME);
    let mut index = None;
    for (i, filter) in filters.iter().enumerate() {
        let is_router = matches!(
            &filter.config_type,
            Some(hcm::http_filter::ConfigType::TypedConfig(any)) if any.type_url == router_url
        );
        if is_router {
            if index.is_some() {
                return Err(Error::InvalidPayload(
                    "multiple router HTTP filters found".into(),
                ));
            }
            index = Some(i);
        }
    }
    match index {
        Some(i) if i + 1 != filters.len() => {
            let filter = filters.remove(i);
            filters.push(filter);
        }
        Some(_) => {}
        None => filters.push(hcm::HttpFilter {
            name: wellknown::HTTP_ROUTER.to_owned(),
            is_optional: false,
            disabled: false,
            config_type: Some(hcm::http_filter::ConfigType::TypedConfig(pack(
                &router::Router::default(),
            ))),
        }),
    }
    Ok(())
}

fn build_rbac_filter(
    name: &NamespacedName,
    spec: &k8s::xds::RbacSpec,
    store: &Store,
) -> Result<hcm::HttpFilter, Error> {
    let action_name = spec.action.as_deref().unwrap_or("");
    if action_name.is_empty() {
        return Err(Error::InvalidPayload("rbac action is empty".into()));
    }
    let action = rbac_v3::rbac::Action::from_str_name(action_name)
        .ok_or_else(|| Error::InvalidPayload(format!("invalid rbac action {action_name}")))?;

    let inline = spec.policies.as_ref().map_or(0, BTreeMap::len);
    let referenced = spec.additional_policies.as_ref().map_or(0, Vec::len);
    if inline + referenced == 0 {
        return Err(Error::InvalidPayload("rbac policies is empty".into()));
    }

    let mut policies: BTreeMap<String, rbac_v3::Policy> = BTreeMap::new();
    if let Some(inline) = &spec.policies {
        for (policy_name, payload) in inline {
            let policy: rbac_v3::Policy = json::from_value(payload)?;
            policy.validate()?;
            policies.insert(policy_name.clone(), policy);
        }
    }
    if let Some(refs) = &spec.additional_policies {
        for r in refs {
            let policy_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
            let payload = store.policy(&policy_name).ok_or_else(|| Error::RefMissing {
                kind: ObjectKind::Policy,
                name: policy_name.clone(),
            })?;
            let policy: rbac_v3::Policy = json::from_value(payload)?;
            policy.validate()?;
            // Referenced policies join under their object name.
            if policies.insert(r.name.clone(), policy).is_some() {
                return Err(Error::InvalidPayload(format!(
                    "rbac policy {:?} is defined more than once",
                    r.name
                )));
            }
        }
    }

    let filter = http_rbac::Rbac {
        rules: Some(rbac_v3::Rbac {
            action: action as i32,
            policies,
        }),
        ..Default::default()
    };
    Ok(hcm::HttpFilter {
        name: RBAC_FILTER_NAME.to_owned(),
        is_optional: false,
        disabled: false,
        config_type: Some(hcm::http_filter::ConfigType::TypedConfig(pack(&filter))),
    })
}

/// Exactly one of the four access-log spellings may be used; the plural
/// forms produce one logger per entry.
fn build_access_logs(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    store: &Store,
) -> Result<Vec<accesslog_v3::AccessLog>, Error> {
    let forms = [
        spec.access_log.is_some(),
        spec.access_logs.is_some(),
        spec.access_log_config.is_some(),
        spec.access_log_configs.is_some(),
    ];
    if forms.iter().filter(|set| **set).count() > 1 {
        return Err(Error::MultipleAccessLogConfig);
    }

    let mut logs = Vec::new();
    if let Some(value) = &spec.access_log {
        logs.push(decode_access_log(value)?);
    }
    if let Some(values) = &spec.access_logs {
        for value in values {
            logs.push(decode_access_log(value)?);
        }
    }
    if let Some(r) = &spec.access_log_config {
        logs.push(resolve_access_log(name, r, store)?);
    }
    if let Some(refs) = &spec.access_log_configs {
        for r in refs {
            logs.push(resolve_access_log(name, r, store)?);
        }
    }
    Ok(logs)
}

fn decode_access_log(value: &Value) -> Result<accesslog_v3::AccessLog, Error> {
    let log: accesslog_v3::AccessLog = json::from_value(value)?;
    log.validate()?;
    Ok(log)
}

fn resolve_access_log(
    name: &NamespacedName,
    r: &k8s::xds::ResourceRef,
    store: &Store,
) -> Result<accesslog_v3::AccessLog, Error> {
    let log_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
    let entry = store.access_log(&log_name).ok_or_else(|| Error::RefMissing {
        kind: ObjectKind::AccessLogConfig,
        name: log_name.clone(),
    })?;
    let mut log = decode_access_log(&entry.payload)?;
    match entry.auto_filename.as_deref() {
        Some("true") => rewrite_log_filename(&mut log, &name.name)?,
        Some("false") | None => {}
        Some(_) => {
            return Err(Error::InvalidPayload(format!(
                "{AUTO_FILENAME_ANNOTATION} annotation value must be true or false"
            )));
        }
    }
    Ok(log)
}

/// Appends `<service>.log` to a file logger's path so that services sharing
/// an access-log config write to distinct files.
fn rewrite_log_filename(log: &mut accesslog_v3::AccessLog, vs_name: &str) -> Result<(), Error> {
    let file_url = envoy_api::type_url(file_logger::FileAccessLog::NAME);
    let any = match &mut log.config_type {
        Some(accesslog_v3::access_log::ConfigType::TypedConfig(any))
            if any.type_url == file_url =>
        {
            any
        }
        _ => {
            return Err(Error::InvalidPayload(
                "access log config type must be of type file".into(),
            ));
        }
    };
    let mut file = file_logger::FileAccessLog::decode(any.value.as_slice())
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;
    let file_name = if vs_name.is_empty() { "access" } else { vs_name };
    file.path = format!("{}/{file_name}.log", file.path.trim_end_matches('/'));
    any.value = file.encode_to_vec();
    Ok(())
}

fn build_tracing(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    store: &Store,
) -> Result<Option<hcm::http_connection_manager::Tracing>, Error> {
    match (&spec.tracing, &spec.tracing_ref) {
        (Some(_), Some(_)) => Err(Error::XorViolation("spec.tracing and spec.tracingRef")),
        (Some(value), None) => Ok(Some(json::from_value(value)?)),
        (None, Some(r)) => {
            let tracing_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
            let payload = store
                .tracing(&tracing_name)
                .ok_or(Error::TracingRefMissing(tracing_name))?;
            Ok(Some(json::from_value(payload)?))
        }
        (None, None) => Ok(None),
    }
}

fn build_filter_chain(
    qname: &str,
    manager: &prost_types::Any,
    secret: Option<&NamespacedName>,
    domains: &[String],
) -> listener_v3::FilterChain {
    let mut chain = listener_v3::FilterChain {
        name: qname.to_owned(),
        filters: vec![listener_v3::Filter {
            name: wellknown::HTTP_CONNECTION_MANAGER.to_owned(),
            config_type: Some(listener_v3::filter::ConfigType::TypedConfig(manager.clone())),
        }],
        ..Default::default()
    };
    // SNI matching is pointless against a wildcard domain set.
    if !domains.is_empty() && !domains.iter().any(|d| d == "*") {
        chain.filter_chain_match = Some(listener_v3::FilterChainMatch {
            server_names: domains.to_vec(),
            ..Default::default()
        });
    }
    if let Some(secret) = secret {
        let context = tls_v3::DownstreamTlsContext {
            common_tls_context: Some(tls_v3::CommonTlsContext {
                tls_certificate_sds_secret_configs: vec![tls_v3::SdsSecretConfig {
                    name: secret.to_string(),
                    sds_config: Some(ads_config_source()),
                }],
                alpn_protocols: vec!["h2".to_owned(), "http/1.1".to_owned()],
                ..Default::default()
            }),
            ..Default::default()
        };
        chain.transport_socket = Some(core_v3::TransportSocket {
            name: wellknown::TRANSPORT_SOCKET_TLS.to_owned(),
            config_type: Some(core_v3::transport_socket::ConfigType::TypedConfig(pack(
                &context,
            ))),
        });
    }
    chain
}

/// Materializes the SDS secrets a service pulls in, from its certificate
/// groups and from `sds_config` references inside its HTTP filters.
fn build_secrets(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    tls_groups: &[TlsGroup],
    store: &Store,
) -> Result<(Vec<tls_v3::Secret>, BTreeSet<NamespacedName>), Error> {
    let mut referenced = BTreeSet::new();
    let mut secrets = Vec::new();

    for group in tls_groups {
        if referenced.insert(group.secret.clone()) {
            make_sds_secrets(&group.secret, store, &mut secrets)?;
        }
    }
    for sds_name in collect_sds_names(name, spec, store)? {
        if referenced.insert(sds_name.clone()) {
            make_sds_secrets(&sds_name, store, &mut secrets)?;
        }
    }
    Ok((secrets, referenced))
}

fn make_sds_secrets(
    name: &NamespacedName,
    store: &Store,
    out: &mut Vec<tls_v3::Secret>,
) -> Result<(), Error> {
    let entry = store
        .secret(name)
        .ok_or_else(|| Error::SecretMissing(name.clone()))?;
    match &entry.data {
        SecretData::Tls { cert, key } => out.push(tls_v3::Secret {
            name: name.to_string(),
            r#type: Some(tls_v3::secret::Type::TlsCertificate(tls_v3::TlsCertificate {
                certificate_chain: Some(inline_bytes(cert.clone())),
                private_key: Some(inline_bytes(key.clone())),
                password: None,
            })),
        }),
        // Opaque secrets surface one generic SDS secret per data key.
        SecretData::Opaque(data) => {
            for (key, value) in data {
                out.push(tls_v3::Secret {
                    name: format!("{name}/{key}"),
                    r#type: Some(tls_v3::secret::Type::GenericSecret(tls_v3::GenericSecret {
                        secret: Some(inline_bytes(value.clone())),
                    })),
                });
            }
        }
    }
    Ok(())
}

fn inline_bytes(bytes: Vec<u8>) -> core_v3::DataSource {
    core_v3::DataSource {
        specifier: Some(core_v3::data_source::Specifier::InlineBytes(bytes)),
    }
}

/// Harvests `namespace/name` secret references from `sds_config` stanzas in
/// the raw filter payloads.
fn collect_sds_names(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    store: &Store,
) -> Result<Vec<NamespacedName>, Error> {
    let mut names = Vec::new();
    for value in filter_payloads(name, spec, store) {
        collect_sds(value, &mut names)?;
    }
    Ok(names)
}

fn collect_sds(value: &Value, out: &mut Vec<NamespacedName>) -> Result<(), Error> {
    match value {
        Value::Object(map) => {
            if map.contains_key("sds_config") || map.contains_key("sdsConfig") {
                if let Some(name) = map.get("name").and_then(Value::as_str) {
                    let (namespace, name) = name.split_once('/').ok_or_else(|| {
                        Error::InvalidPayload(format!(
                            "secret name {name:?} must be qualified as namespace/name"
                        ))
                    })?;
                    out.push(NamespacedName::new(namespace, name));
                }
            }
            for value in map.values() {
                collect_sds(value, out)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_sds(item, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Every Envoy cluster name the service's configuration mentions: typed
/// route actions plus cluster-bearing keys in the raw filter, access-log,
/// and tracing payloads.
fn collect_cluster_names(
    name: &NamespacedName,
    spec: &k8s::xds::CommonSpec,
    route_config: &route_v3::RouteConfiguration,
    store: &Store,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for vh in &route_config.virtual_hosts {
        for route in &vh.routes {
            if let Some(route_v3::route::Action::Route(action)) = &route.action {
                match &action.cluster_specifier {
                    Some(route_v3::route_action::ClusterSpecifier::Cluster(cluster)) => {
                        names.insert(cluster.clone());
                    }
                    Some(route_v3::route_action::ClusterSpecifier::WeightedClusters(weighted)) => {
                        for weight in &weighted.clusters {
                            names.insert(weight.name.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    let mut raw: Vec<&Value> = filter_payloads(name, spec, store);
    if let Some(value) = &spec.access_log {
        raw.push(value);
    }
    if let Some(values) = &spec.access_logs {
        raw.extend(values.iter());
    }
    for r in access_log_refs(spec) {
        let log_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
        if let Some(entry) = store.access_log(&log_name) {
            raw.push(&entry.payload);
        }
    }
    if let Some(value) = &spec.tracing {
        raw.push(value);
    }
    if let Some(r) = &spec.tracing_ref {
        let tracing_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
        if let Some(payload) = store.tracing(&tracing_name) {
            raw.push(payload);
        }
    }
    for value in raw {
        collect_cluster_keys(value, &mut names);
    }
    names
}

const CLUSTER_KEYS: &[&str] = &[
    "cluster",
    "cluster_name",
    "clusterName",
    "collector_cluster",
    "collectorCluster",
    "token_cluster",
    "tokenCluster",
    "authorization_cluster",
    "authorizationCluster",
];

fn collect_cluster_keys(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                if CLUSTER_KEYS.contains(&key.as_str()) {
                    if let Some(name) = value.as_str() {
                        out.insert(name.to_owned());
                    }
                }
                collect_cluster_keys(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_cluster_keys(item, out);
            }
        }
        _ => {}
    }
}

/// The raw JSON of every HTTP filter the service uses, inline and
/// referenced. Unresolvable references are skipped here; they have already
/// failed the build by the time the payload walks run.
fn filter_payloads<'a>(
    name: &NamespacedName,
    spec: &'a k8s::xds::CommonSpec,
    store: &'a Store,
) -> Vec<&'a Value> {
    let mut values: Vec<&Value> = Vec::new();
    if let Some(inline) = &spec.http_filters {
        values.extend(inline.iter());
    }
    if let Some(refs) = &spec.additional_http_filters {
        for r in refs {
            let filter_name = NamespacedName::new(r.namespace_or(&name.namespace), &*r.name);
            if let Some(items) = store.http_filter(&filter_name) {
                values.extend(items.iter());
            }
        }
    }
    values
}

fn access_log_refs(spec: &k8s::xds::CommonSpec) -> Vec<&k8s::xds::ResourceRef> {
    let mut refs = Vec::new();
    if let Some(r) = &spec.access_log_config {
        refs.push(r);
    }
    if let Some(list) = &spec.access_log_configs {
        refs.extend(list.iter());
    }
    refs
}

fn is_tls_listener(listener: &listener_v3::Listener) -> bool {
    let inspector_url =
        envoy_api::type_url(envoy_api::extensions::filters::listener::tls_inspector::v3::TlsInspector::NAME);
    listener.listener_filters.iter().any(|filter| {
        matches!(
            &filter.config_type,
            Some(listener_v3::listener_filter::ConfigType::TypedConfig(any))
                if any.type_url == inspector_url
        )
    })
}

fn ads_config_source() -> core_v3::ConfigSource {
    core_v3::ConfigSource {
        resource_api_version: core_v3::ApiVersion::V3 as i32,
        config_source_specifier: Some(core_v3::config_source::ConfigSourceSpecifier::Ads(
            core_v3::AggregatedConfigSource {},
        )),
        ..Default::default()
    }
}

fn pack<M: Message + FromJson>(message: &M) -> prost_types::Any {
    prost_types::Any {
        type_url: envoy_api::type_url(M::NAME),
        value: message.encode_to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route(name: &str, prefix: &str) -> route_v3::Route {
        json::from_value(&json!({
            "name": name,
            "match": {"prefix": prefix},
            "route": {"cluster": "app"},
        }))
        .expect("route decodes")
    }

    fn filter(name: &str, type_url_body: Value) -> hcm::HttpFilter {
        json::from_value(&json!({"name": name, "typed_config": type_url_body}))
            .expect("filter decodes")
    }

    #[test]
    fn root_route_moves_to_the_end() {
        let mut routes = vec![route("root", "/"), route("api", "/api")];
        move_root_route_last(&mut routes).expect("reorders");
        assert_eq!(
            routes.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["api", "root"],
        );

        // Already last: untouched.
        move_root_route_last(&mut routes).expect("noop");
        assert_eq!(routes[1].name, "root");

        let mut routes = vec![route("a", "/"), route("b", "/")];
        let err = move_root_route_last(&mut routes).unwrap_err();
        assert_eq!(err.to_string(), "invalid payload: multiple root routes found");
    }

    #[test]
    fn router_is_synthesized_when_absent() {
        let mut filters = vec![];
        place_router_last(&mut filters).expect("synthesizes");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, wellknown::HTTP_ROUTER);
        let Some(hcm::http_filter::ConfigType::TypedConfig(any)) = &filters[0].config_type
        else {
            panic!("typed config expected");
        };
        assert_eq!(
            any.type_url,
            "type.googleapis.com/envoy.extensions.filters.http.router.v3.Router",
        );
    }

    #[test]
    fn user_router_moves_to_the_end() {
        let router = filter(
            "envoy.filters.http.router",
            json!({"@type": "type.googleapis.com/envoy.extensions.filters.http.router.v3.Router"}),
        );
        let inspector = filter(
            "auth",
            json!({
                "@type": "type.googleapis.com/envoy.extensions.filters.http.rbac.v3.RBAC",
            }),
        );
        let mut filters = vec![router.clone(), inspector];
        place_router_last(&mut filters).expect("reorders");
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].name, "envoy.filters.http.router");

        let mut filters = vec![filters[1].clone(), router];
        let err = place_router_last(&mut filters).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: multiple router HTTP filters found",
        );
    }

    #[test]
    fn rbac_leads_the_filter_chain() {
        let mut store = Store::default();
        store.apply_policy(
            NamespacedName::new("default", "ops"),
            json!({"permissions": [{"any": true}], "principals": [{"any": true}]}),
        );
        store.apply_http_filter(
            NamespacedName::new("default", "extra"),
            vec![json!({
                "name": "trusted",
                "typed_config": {
                    "@type": "type.googleapis.com/envoy.extensions.filters.http.rbac.v3.RBACPerRoute",
                },
            })],
        );

        let spec = k8s::xds::CommonSpec {
            rbac: Some(k8s::xds::RbacSpec {
                action: Some("ALLOW".to_string()),
                policies: Some(BTreeMap::from([(
                    "inline".to_string(),
                    json!({"permissions": [{"any": true}], "principals": [{"any": true}]}),
                )])),
                additional_policies: Some(vec![k8s::xds::ResourceRef::new("ops")]),
            }),
            http_filters: Some(vec![json!({
                "name": "auth",
                "typed_config": {
                    "@type": "type.googleapis.com/envoy.extensions.filters.http.rbac.v3.RBAC",
                },
            })]),
            additional_http_filters: Some(vec![k8s::xds::ResourceRef::new("extra")]),
            ..Default::default()
        };

        let filters = build_http_filters(&NamespacedName::new("default", "demo"), &spec, &store)
            .expect("builds");
        assert_eq!(
            filters.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec![RBAC_FILTER_NAME, "auth", "trusted", wellknown::HTTP_ROUTER],
        );

        let Some(hcm::http_filter::ConfigType::TypedConfig(any)) = &filters[0].config_type
        else {
            panic!("typed config expected");
        };
        let rbac = http_rbac::Rbac::decode(any.value.as_slice()).expect("rbac decodes");
        let rules = rbac.rules.expect("rules are set");
        assert_eq!(rules.action, rbac_v3::rbac::Action::Allow as i32);
        assert_eq!(
            rules.policies.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["inline", "ops"],
        );
    }

    #[test]
    fn rbac_policy_names_may_not_repeat() {
        let mut store = Store::default();
        store.apply_policy(
            NamespacedName::new("default", "inline"),
            json!({"permissions": [{"any": true}], "principals": [{"any": true}]}),
        );
        let spec = k8s::xds::RbacSpec {
            action: Some("DENY".to_string()),
            policies: Some(BTreeMap::from([(
                "inline".to_string(),
                json!({"permissions": [{"any": true}], "principals": [{"any": true}]}),
            )])),
            additional_policies: Some(vec![k8s::xds::ResourceRef::new("inline")]),
        };
        let err = build_rbac_filter(&NamespacedName::new("default", "demo"), &spec, &store)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: rbac policy \"inline\" is defined more than once",
        );
    }

    #[test]
    fn tls_inspector_marks_a_listener_tls() {
        let tls: listener_v3::Listener = json::from_value(&json!({
            "name": "https",
            "address": {"socket_address": {"address": "0.0.0.0", "port_value": 443}},
            "listener_filters": [{
                "name": "envoy.filters.listener.tls_inspector",
                "typed_config": {
                    "@type": "type.googleapis.com/envoy.extensions.filters.listener.tls_inspector.v3.TlsInspector",
                },
            }],
        }))
        .expect("listener decodes");
        assert!(is_tls_listener(&tls));

        let plain: listener_v3::Listener = json::from_value(&json!({
            "name": "http",
            "address": {"socket_address": {"address": "0.0.0.0", "port_value": 80}},
        }))
        .expect("listener decodes");
        assert!(!is_tls_listener(&plain));
    }

    #[test]
    fn cluster_names_come_from_routes_and_raw_payloads() {
        let route_config = route_v3::RouteConfiguration {
            name: "default/demo".into(),
            virtual_hosts: vec![json::from_value(&json!({
                "name": "demo",
                "domains": ["demo.example.com"],
                "routes": [
                    {"match": {"prefix": "/a"}, "route": {"cluster": "alpha"}},
                    {"match": {"prefix": "/b"}, "route": {"weighted_clusters": {
                        "clusters": [
                            {"name": "beta", "weight": 60},
                            {"name": "gamma", "weight": 40},
                        ],
                    }}},
                ],
            }))
            .expect("virtual host decodes")],
        };

        let spec = k8s::xds::CommonSpec {
            tracing: Some(json!({
                "provider": {
                    "name": "envoy.tracers.zipkin",
                    "typed_config": {
                        "@type": "type.googleapis.com/envoy.config.trace.v3.ZipkinConfig",
                        "collector_cluster": "zipkin",
                        "collector_endpoint": "/api/v2/spans",
                    },
                },
            })),
            ..Default::default()
        };

        let names = collect_cluster_names(
            &NamespacedName::new("default", "demo"),
            &spec,
            &route_config,
            &Store::default(),
        );
        assert_eq!(
            names.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["alpha", "beta", "gamma", "zipkin"],
        );
    }

    #[test]
    fn sds_names_must_be_qualified() {
        let mut out = Vec::new();
        collect_sds(
            &json!({
                "tls_certificate_sds_secret_configs": [{
                    "name": "certs/server",
                    "sds_config": {"ads": {}, "resource_api_version": "V3"},
                }],
            }),
            &mut out,
        )
        .expect("collects");
        assert_eq!(out, vec![NamespacedName::new("certs", "server")]);

        let err = collect_sds(
            &json!({"name": "server", "sds_config": {"ads": {}}}),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: secret name \"server\" must be qualified as namespace/name",
        );
    }

    #[test]
    fn auto_filename_rewrites_file_logger_paths() {
        let mut log = decode_access_log(&json!({
            "name": "envoy.access_loggers.file",
            "typed_config": {
                "@type": "type.googleapis.com/envoy.extensions.access_loggers.file.v3.FileAccessLog",
                "path": "/var/log/envoy",
            },
        }))
        .expect("log decodes");
        rewrite_log_filename(&mut log, "demo").expect("rewrites");

        let Some(accesslog_v3::access_log::ConfigType::TypedConfig(any)) = &log.config_type
        else {
            panic!("typed config expected");
        };
        let file = file_logger::FileAccessLog::decode(any.value.as_slice()).expect("decodes");
        assert_eq!(file.path, "/var/log/envoy/demo.log");

        // Only file loggers can take a per-service file name.
        let mut log = decode_access_log(&json!({
            "name": "envoy.access_loggers.stdout",
            "typed_config": {
                "@type": "type.googleapis.com/envoy.extensions.access_loggers.stream.v3.StdoutAccessLog",
            },
        }))
        .expect("log decodes");
        let err = rewrite_log_filename(&mut log, "demo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid payload: access log config type must be of type file",
        );
    }
}

use crate::{
    admission::Admission,
    core::SnapshotCache,
    filter::NamespaceFilter,
    grpc, index, k8s, status,
};
use anyhow::{bail, Result};
use clap::Parser;
use futures::prelude::*;
use kube::runtime::watcher;
use prometheus_client::registry::Registry;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::mpsc;
use tonic::transport::Server;
use tracing::{info, info_span, instrument, Instrument};

#[derive(Debug, Parser)]
#[clap(
    name = "envoy-xds-controller",
    about = "An xDS control plane that builds Envoy configuration from Kubernetes resources"
)]
pub struct Args {
    #[clap(
        long,
        default_value = "envoy_xds_controller=info,warn",
        env = "ENVOY_XDS_CONTROLLER_LOG"
    )]
    log_level: kubert::LogFilter,

    #[clap(long, default_value = "plain")]
    log_format: kubert::LogFormat,

    #[clap(flatten)]
    client: kubert::ClientArgs,

    #[clap(flatten)]
    server: kubert::ServerArgs,

    #[clap(flatten)]
    admin: kubert::AdminArgs,

    /// Disables the admission controller server.
    #[clap(long)]
    admission_controller_disabled: bool,

    #[clap(long, default_value = "0.0.0.0:8888")]
    grpc_addr: SocketAddr,

    /// Annotation holding the comma-separated node IDs a virtual service or
    /// listener publishes to.
    #[clap(long, default_value = index::DEFAULT_NODE_ID_ANNOTATION)]
    node_id_annotation_key: String,

    /// Annotation holding the comma-separated domains a cached TLS secret
    /// serves, read by certificate auto-discovery.
    #[clap(long, default_value = index::DEFAULT_DOMAIN_ANNOTATION)]
    domain_annotation_key: String,

    /// Label selector for the TLS secrets mirrored into the SDS cache.
    #[clap(long, default_value = "envoy.kaasops.io/secret-type=sds-cached")]
    secret_sds_label: String,

    /// Namespaces to index, comma-separated. All namespaces when unset.
    #[clap(long)]
    watch_namespaces: Option<Namespaces>,

    /// Namespace assumed for reviewed objects and references without one.
    #[clap(long, default_value = "default")]
    default_resource_namespace: String,
}

impl Args {
    #[inline]
    pub async fn parse_and_run() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            admin,
            client,
            log_level,
            log_format,
            server,
            grpc_addr,
            admission_controller_disabled,
            node_id_annotation_key,
            domain_annotation_key,
            secret_sds_label,
            watch_namespaces,
            default_resource_namespace,
        } = self;

        let server = if admission_controller_disabled {
            None
        } else {
            Some(server)
        };

        let namespaces: Arc<[String]> = watch_namespaces
            .map(|Namespaces(namespaces)| namespaces)
            .unwrap_or_default()
            .into();

        let mut prom = <Registry>::default();
        let snapshot_metrics =
            index::SnapshotMetrics::register(prom.sub_registry_with_prefix("snapshot"));

        // Build the index that distills watch events into per-node snapshots,
        // and the cache the ADS server answers from.
        let cache = Arc::new(SnapshotCache::new());
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let index = index::Index::shared(
            index::Settings {
                node_id_annotation: node_id_annotation_key,
                domain_annotation: domain_annotation_key,
                default_namespace: default_resource_namespace.clone(),
            },
            cache.clone(),
            updates_tx,
            snapshot_metrics,
        );
        let watches =
            index::IndexMetrics::register(index.clone(), prom.sub_registry_with_prefix("index"))
                .shared();

        let mut runtime = kubert::Runtime::builder()
            .with_log(log_level, log_format)
            .with_admin(admin.into_builder().with_prometheus(prom))
            .with_client(client)
            .with_optional_server(server)
            .build()
            .await?;

        // Spawn resource watches. Every kind feeds the shared index through
        // its own namespace filter.

        let vs_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let virtual_services =
            runtime.watch_all::<k8s::xds::VirtualService>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(vs_index, virtual_services)
                .instrument(info_span!("virtualservices")),
        );

        let vst_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let templates =
            runtime.watch_all::<k8s::xds::VirtualServiceTemplate>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(vst_index, templates)
                .instrument(info_span!("virtualservicetemplates")),
        );

        let listener_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let listeners = runtime.watch_all::<k8s::xds::Listener>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(listener_index, listeners)
                .instrument(info_span!("listeners")),
        );

        let cluster_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let clusters = runtime.watch_all::<k8s::xds::Cluster>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(cluster_index, clusters).instrument(info_span!("clusters")),
        );

        let route_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let routes = runtime.watch_all::<k8s::xds::Route>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(route_index, routes).instrument(info_span!("routes")),
        );

        let http_filter_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let http_filters = runtime.watch_all::<k8s::xds::HttpFilter>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(http_filter_index, http_filters)
                .instrument(info_span!("httpfilters")),
        );

        let access_log_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let access_logs =
            runtime.watch_all::<k8s::xds::AccessLogConfig>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(access_log_index, access_logs)
                .instrument(info_span!("accesslogconfigs")),
        );

        let policy_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let policies = runtime.watch_all::<k8s::xds::Policy>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(policy_index, policies).instrument(info_span!("policies")),
        );

        let tracing_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let tracings = runtime.watch_all::<k8s::xds::Tracing>(watcher::Config::default());
        tokio::spawn(
            kubert::index::namespaced(tracing_index, tracings).instrument(info_span!("tracings")),
        );

        // Only the SDS-labeled secrets are watched; everything else in the
        // cluster stays out of the index.
        let secret_index = NamespaceFilter::new(watches.clone(), namespaces.clone()).shared();
        let secrets =
            runtime.watch_all::<k8s::Secret>(watcher::Config::default().labels(&secret_sds_label));
        tokio::spawn(
            kubert::index::namespaced(secret_index, secrets).instrument(info_span!("secrets")),
        );

        // Run the ADS server, streaming snapshots out of the cache as the
        // index replaces them.
        tokio::spawn(grpc(grpc_addr, cache.clone(), runtime.shutdown_handle()));

        let client = runtime.client();
        tokio::spawn(
            status::Controller::new(client, updates_rx)
                .process_updates()
                .instrument(info_span!("status")),
        );

        let runtime = runtime.spawn_server({
            let index = index.clone();
            move || Admission::new(index, default_resource_namespace)
        });

        // Block the main thread on the shutdown signal. Once it fires, wait for the background tasks to
        // complete before exiting.
        if runtime.run().await.is_err() {
            bail!("Aborted");
        }

        Ok(())
    }
}

#[derive(Clone, Debug)]
struct Namespaces(Vec<String>);

impl std::str::FromStr for Namespaces {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(
            s.split(',')
                .map(str::trim)
                .filter(|ns| !ns.is_empty())
                .map(String::from)
                .collect(),
        ))
    }
}

#[instrument(skip_all, fields(port = %addr.port()))]
async fn grpc(addr: SocketAddr, cache: Arc<SnapshotCache>, drain: drain::Watch) -> Result<()> {
    let ads_svc = grpc::ads::AdsServer::new(cache, drain.clone()).svc();

    let (close_tx, close_rx) = tokio::sync::oneshot::channel();
    tokio::pin! {
        let srv = Server::builder().add_service(ads_svc).serve_with_shutdown(addr, close_rx.map(|_| {}));
    }

    info!(%addr, "ads gRPC server listening");
    tokio::select! {
        res = (&mut srv) => res?,
        handle = drain.signaled() => {
            let _ = close_tx.send(());
            handle.release_after(srv).await?
        }
    }
    Ok(())
}

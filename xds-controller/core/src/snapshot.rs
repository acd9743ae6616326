//! Per-node snapshots of materialized xDS resources.
//!
//! A snapshot carries the four resource families served over ADS, each in
//! canonical order (sorted by resource name) with a content-hash version.
//! Versions are derived purely from the encoded bytes, so replaying the
//! same inputs yields the same version strings and redundant publications
//! can be suppressed by comparing digests.

use std::hash::Hasher;

use prost::Message;

/// The xDS resource families this control plane materializes.
///
/// `ALL` is in make-before-break order: clusters and secrets precede the
/// listeners and routes that reference them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Cluster,
    Secret,
    Listener,
    RouteConfiguration,
}

/// A named, already-encoded xDS resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub name: String,
    pub body: ::prost_types::Any,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    resources: [Vec<Resource>; 4],
    versions: [u64; 4],
    digest: u64,
}

// === impl ResourceType ===

impl ResourceType {
    pub const ALL: [Self; 4] = [
        Self::Cluster,
        Self::Secret,
        Self::Listener,
        Self::RouteConfiguration,
    ];

    pub fn type_url(self) -> &'static str {
        match self {
            Self::Cluster => "type.googleapis.com/envoy.config.cluster.v3.Cluster",
            Self::Secret => {
                "type.googleapis.com/envoy.extensions.transport_sockets.tls.v3.Secret"
            }
            Self::Listener => "type.googleapis.com/envoy.config.listener.v3.Listener",
            Self::RouteConfiguration => {
                "type.googleapis.com/envoy.config.route.v3.RouteConfiguration"
            }
        }
    }

    pub fn from_type_url(url: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.type_url() == url)
    }

    fn index(self) -> usize {
        match self {
            Self::Cluster => 0,
            Self::Secret => 1,
            Self::Listener => 2,
            Self::RouteConfiguration => 3,
        }
    }
}

// === impl Resource ===

impl Resource {
    /// Packs an encoded message under its family's type URL.
    pub fn new(ty: ResourceType, name: impl Into<String>, message: &impl Message) -> Self {
        Self {
            name: name.into(),
            body: ::prost_types::Any {
                type_url: ty.type_url().to_owned(),
                value: message.encode_to_vec(),
            },
        }
    }
}

// === impl Snapshot ===

impl Snapshot {
    pub fn new(
        clusters: Vec<Resource>,
        secrets: Vec<Resource>,
        listeners: Vec<Resource>,
        routes: Vec<Resource>,
    ) -> Self {
        let mut resources = [clusters, secrets, listeners, routes];
        for family in &mut resources {
            family.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut versions = [0u64; 4];
        let mut digest = seahash::SeaHasher::new();
        for (family, version) in resources.iter().zip(&mut versions) {
            *version = hash_family(family);
            digest.write_u64(*version);
        }

        Self {
            resources,
            versions,
            digest: digest.finish(),
        }
    }

    pub fn resources(&self, ty: ResourceType) -> &[Resource] {
        &self.resources[ty.index()]
    }

    /// The content-hash version string for one resource family.
    pub fn version(&self, ty: ResourceType) -> String {
        format!("{:016x}", self.versions[ty.index()])
    }

    /// A combined content hash over all families.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    pub fn is_empty(&self) -> bool {
        self.resources.iter().all(Vec::is_empty)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

fn hash_family(resources: &[Resource]) -> u64 {
    let mut hasher = seahash::SeaHasher::new();
    for resource in resources {
        hasher.write(resource.name.as_bytes());
        hasher.write_u8(0);
        hasher.write(resource.body.type_url.as_bytes());
        hasher.write_u8(0);
        hasher.write(&resource.body.value);
        hasher.write_u8(0);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use envoy_api::config::cluster::v3::Cluster;
    use envoy_api::config::listener::v3::Listener;

    fn cluster(name: &str) -> Resource {
        Resource::new(
            ResourceType::Cluster,
            name,
            &Cluster {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn resources_are_canonically_ordered() {
        let snapshot = Snapshot::new(
            vec![cluster("zebra"), cluster("alpha")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let names = snapshot
            .resources(ResourceType::Cluster)
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["alpha", "zebra"]);
    }

    #[test]
    fn versions_ignore_insertion_order() {
        let a = Snapshot::new(
            vec![cluster("a"), cluster("b")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let b = Snapshot::new(
            vec![cluster("b"), cluster("a")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(a.version(ResourceType::Cluster), b.version(ResourceType::Cluster));
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn content_changes_the_version() {
        let a = Snapshot::new(vec![cluster("a")], Vec::new(), Vec::new(), Vec::new());
        let b = Snapshot::new(vec![cluster("b")], Vec::new(), Vec::new(), Vec::new());
        assert_ne!(a.version(ResourceType::Cluster), b.version(ResourceType::Cluster));
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.version(ResourceType::Listener), b.version(ResourceType::Listener));
    }

    #[test]
    fn listener_resources_carry_their_type_url() {
        let resource = Resource::new(
            ResourceType::Listener,
            "http",
            &Listener {
                name: "http".into(),
                ..Default::default()
            },
        );
        assert_eq!(
            resource.body.type_url,
            "type.googleapis.com/envoy.config.listener.v3.Listener",
        );
        assert_eq!(
            ResourceType::from_type_url(&resource.body.type_url),
            Some(ResourceType::Listener),
        );
    }
}

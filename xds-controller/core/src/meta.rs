use std::fmt;

/// A `(namespace, name)` pair qualifying an object or reference.
///
/// The derived `Ord` gives the lexicographic tie-break used when two
/// objects contend for the same slot in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

/// The kinds of objects the change feed delivers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    VirtualService,
    VirtualServiceTemplate,
    Listener,
    Cluster,
    Route,
    HttpFilter,
    AccessLogConfig,
    Policy,
    Tracing,
    Secret,
}

// === impl NamespacedName ===

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

// === impl ObjectKind ===

impl ObjectKind {
    /// Every kind the change feed can deliver.
    pub const ALL: [Self; 10] = [
        Self::VirtualService,
        Self::VirtualServiceTemplate,
        Self::Listener,
        Self::Cluster,
        Self::Route,
        Self::HttpFilter,
        Self::AccessLogConfig,
        Self::Policy,
        Self::Tracing,
        Self::Secret,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VirtualService => "VirtualService",
            Self::VirtualServiceTemplate => "VirtualServiceTemplate",
            Self::Listener => "Listener",
            Self::Cluster => "Cluster",
            Self::Route => "Route",
            Self::HttpFilter => "HttpFilter",
            Self::AccessLogConfig => "AccessLogConfig",
            Self::Policy => "Policy",
            Self::Tracing => "Tracing",
            Self::Secret => "Secret",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_order_by_namespace_then_name() {
        let mut names = vec![
            NamespacedName::new("default", "zz"),
            NamespacedName::new("apps", "web"),
            NamespacedName::new("default", "aa"),
        ];
        names.sort();
        assert_eq!(
            names.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["apps/web", "default/aa", "default/zz"],
        );
    }
}

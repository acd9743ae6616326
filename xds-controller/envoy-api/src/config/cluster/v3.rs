/// Configuration for a single upstream cluster.
/// \[#next-free-field: 59\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cluster {
    /// Supplies the name of the cluster which must be unique across all clusters.
    /// The cluster name is used when emitting :ref:`statistics
    /// <config_cluster_manager_cluster_stats>` if :ref:`alt_stat_name
    /// <envoy_v3_api_field_config.cluster.v3.Cluster.alt_stat_name>` is not
    /// provided. By default, the maximum length of a cluster name is limited to
    /// 60 characters.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Configuration to use for EDS updates for the Cluster.
    #[prost(message, optional, tag = "3")]
    pub eds_cluster_config: ::core::option::Option<cluster::EdsClusterConfig>,
    /// The timeout for new network connections to hosts in the cluster. If not
    /// set, a default value of 5s will be used.
    #[prost(message, optional, tag = "4")]
    pub connect_timeout: ::core::option::Option<::prost_types::Duration>,
    /// The :ref:`load balancer type <arch_overview_load_balancing_types>` to use
    /// when picking a host in the cluster.
    #[prost(enumeration = "cluster::LbPolicy", tag = "6")]
    pub lb_policy: i32,
    /// Setting this is required for specifying members of :ref:`STATIC
    /// <envoy_v3_api_enum_value_config.cluster.v3.Cluster.DiscoveryType.STATIC>`,
    /// :ref:`STRICT_DNS
    /// <envoy_v3_api_enum_value_config.cluster.v3.Cluster.DiscoveryType.STRICT_DNS>`
    /// or :ref:`LOGICAL_DNS
    /// <envoy_v3_api_enum_value_config.cluster.v3.Cluster.DiscoveryType.LOGICAL_DNS>`
    /// clusters. This field supersedes the ``hosts`` field in the v2 API.
    #[prost(message, optional, tag = "33")]
    pub load_assignment: ::core::option::Option<
        super::super::endpoint::v3::ClusterLoadAssignment,
    >,
    /// The DNS IP address resolution policy. If this setting is not specified,
    /// the value defaults to :ref:`AUTO
    /// <envoy_v3_api_enum_value_config.cluster.v3.Cluster.DnsLookupFamily.AUTO>`.
    #[prost(enumeration = "cluster::DnsLookupFamily", tag = "17")]
    pub dns_lookup_family: i32,
    /// Optional custom transport socket implementation to use for upstream
    /// connections. To setup TLS, set a transport socket with name
    /// ``envoy.transport_sockets.tls`` and :ref:`UpstreamTlsContexts
    /// <envoy_v3_api_msg_extensions.transport_sockets.tls.v3.UpstreamTlsContext>`
    /// in the ``typed_config``.
    #[prost(message, optional, tag = "24")]
    pub transport_socket: ::core::option::Option<
        super::super::core::v3::TransportSocket,
    >,
    /// Extension protocol specific options. The key should match the extension
    /// filter name, such as "envoy.filters.network.thrift_proxy". See the
    /// extension's documentation for details on specific options.
    /// \[#next-major-version: make this a list of typed extensions.\]
    #[prost(btree_map = "string, message", tag = "36")]
    pub typed_extension_protocol_options: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        ::prost_types::Any,
    >,
    #[prost(oneof = "cluster::ClusterDiscoveryType", tags = "2")]
    pub cluster_discovery_type: ::core::option::Option<
        cluster::ClusterDiscoveryType,
    >,
}
/// Nested message and enum types in `Cluster`.
pub mod cluster {
    /// Only valid when discovery type is EDS.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct EdsClusterConfig {
        /// Configuration for the source of EDS updates for this Cluster.
        #[prost(message, optional, tag = "1")]
        pub eds_config: ::core::option::Option<
            super::super::super::core::v3::ConfigSource,
        >,
        /// Optional alternative to cluster name to present to EDS. This does not
        /// have the same restrictions as cluster name, i.e. it may be arbitrary
        /// length. This may be a xdstp:// URL.
        #[prost(string, tag = "2")]
        pub service_name: ::prost::alloc::string::String,
    }
    /// Refer to :ref:`service discovery type
    /// <arch_overview_service_discovery_types>` for an explanation on each type.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum DiscoveryType {
        /// Refer to the :ref:`static discovery type
        /// <arch_overview_service_discovery_types_static>` for an explanation.
        Static = 0,
        /// Refer to the :ref:`strict DNS discovery type
        /// <arch_overview_service_discovery_types_strict_dns>` for an explanation.
        StrictDns = 1,
        /// Refer to the :ref:`logical DNS discovery type
        /// <arch_overview_service_discovery_types_logical_dns>` for an
        /// explanation.
        LogicalDns = 2,
        /// Refer to the :ref:`service discovery type
        /// <arch_overview_service_discovery_types_eds>` for an explanation.
        Eds = 3,
        /// Refer to the :ref:`original destination discovery type
        /// <arch_overview_service_discovery_types_original_destination>` for an
        /// explanation.
        OriginalDst = 4,
    }
    impl DiscoveryType {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                DiscoveryType::Static => "STATIC",
                DiscoveryType::StrictDns => "STRICT_DNS",
                DiscoveryType::LogicalDns => "LOGICAL_DNS",
                DiscoveryType::Eds => "EDS",
                DiscoveryType::OriginalDst => "ORIGINAL_DST",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "STATIC" => Some(Self::Static),
                "STRICT_DNS" => Some(Self::StrictDns),
                "LOGICAL_DNS" => Some(Self::LogicalDns),
                "EDS" => Some(Self::Eds),
                "ORIGINAL_DST" => Some(Self::OriginalDst),
                _ => None,
            }
        }
    }
    /// Refer to :ref:`load balancer type <arch_overview_load_balancing_types>`
    /// architecture overview section for information on each type.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum LbPolicy {
        /// Refer to the :ref:`round robin load balancing policy
        /// <arch_overview_load_balancing_types_round_robin>` for an explanation.
        RoundRobin = 0,
        /// Refer to the :ref:`least request load balancing policy
        /// <arch_overview_load_balancing_types_least_request>` for an explanation.
        LeastRequest = 1,
        /// Refer to the :ref:`ring hash load balancing policy
        /// <arch_overview_load_balancing_types_ring_hash>` for an explanation.
        RingHash = 2,
        /// Refer to the :ref:`random load balancing policy
        /// <arch_overview_load_balancing_types_random>` for an explanation.
        Random = 3,
        /// Refer to the :ref:`Maglev load balancing policy
        /// <arch_overview_load_balancing_types_maglev>` for an explanation.
        Maglev = 5,
        /// This load balancer type must be specified if the configured cluster
        /// provides a cluster specific load balancer. Consult the configured
        /// cluster's documentation for whether to set this option or not.
        ClusterProvided = 6,
        /// Use the new :ref:`load_balancing_policy
        /// <envoy_v3_api_field_config.cluster.v3.Cluster.load_balancing_policy>`
        /// field to determine the LB policy.
        LoadBalancingPolicyConfig = 7,
    }
    impl LbPolicy {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                LbPolicy::RoundRobin => "ROUND_ROBIN",
                LbPolicy::LeastRequest => "LEAST_REQUEST",
                LbPolicy::RingHash => "RING_HASH",
                LbPolicy::Random => "RANDOM",
                LbPolicy::Maglev => "MAGLEV",
                LbPolicy::ClusterProvided => "CLUSTER_PROVIDED",
                LbPolicy::LoadBalancingPolicyConfig => "LOAD_BALANCING_POLICY_CONFIG",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ROUND_ROBIN" => Some(Self::RoundRobin),
                "LEAST_REQUEST" => Some(Self::LeastRequest),
                "RING_HASH" => Some(Self::RingHash),
                "RANDOM" => Some(Self::Random),
                "MAGLEV" => Some(Self::Maglev),
                "CLUSTER_PROVIDED" => Some(Self::ClusterProvided),
                "LOAD_BALANCING_POLICY_CONFIG" => Some(Self::LoadBalancingPolicyConfig),
                _ => None,
            }
        }
    }
    /// When V4_ONLY is selected, the DNS resolver will only perform a lookup for
    /// addresses in the IPv4 family. If V6_ONLY is selected, the DNS resolver
    /// will only perform a lookup for addresses in the IPv6 family.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum DnsLookupFamily {
        Auto = 0,
        V4Only = 1,
        V6Only = 2,
        V4Preferred = 3,
        All = 4,
    }
    impl DnsLookupFamily {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                DnsLookupFamily::Auto => "AUTO",
                DnsLookupFamily::V4Only => "V4_ONLY",
                DnsLookupFamily::V6Only => "V6_ONLY",
                DnsLookupFamily::V4Preferred => "V4_PREFERRED",
                DnsLookupFamily::All => "ALL",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "AUTO" => Some(Self::Auto),
                "V4_ONLY" => Some(Self::V4Only),
                "V6_ONLY" => Some(Self::V6Only),
                "V4_PREFERRED" => Some(Self::V4Preferred),
                "ALL" => Some(Self::All),
                _ => None,
            }
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ClusterDiscoveryType {
        /// The :ref:`service discovery type
        /// <arch_overview_service_discovery_types>` to use for resolving the
        /// cluster.
        #[prost(enumeration = "DiscoveryType", tag = "2")]
        Type(i32),
    }
}

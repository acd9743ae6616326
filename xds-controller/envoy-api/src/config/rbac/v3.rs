/// Role Based Access Control (RBAC) provides service-level and method-level
/// access control for a service. Requests are allowed or denied based on the
/// ``action`` and whether a matching policy is found.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rbac {
    /// The action to take if a policy matches. Every action either allows or
    /// denies a request, and can also carry out action-specific operations.
    ///
    /// Actions:
    ///
    ///   * ``ALLOW``: Allows the request if and only if there is a policy that
    ///     matches the request.
    ///   * ``DENY``: Allows the request if and only if there are no policies that
    ///     match the request.
    #[prost(enumeration = "rbac::Action", tag = "1")]
    pub action: i32,
    /// Maps from policy name to policy. A match occurs when at least one policy
    /// matches the request. The policies are evaluated in lexicographic order of
    /// the policy name.
    #[prost(btree_map = "string, message", tag = "2")]
    pub policies: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        Policy,
    >,
}
/// Nested message and enum types in `RBAC`.
pub mod rbac {
    /// Should we do safe-list or block-list style access control?
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
    pub enum Action {
        /// The policies grant access to principals. The rest are denied. This is
        /// safe-list style access control. This is the default type.
        Allow = 0,
        /// The policies deny access to principals. The rest are allowed. This is
        /// block-list style access control.
        Deny = 1,
        /// The policies set the ``access_log_hint`` dynamic metadata key based on
        /// if requests match. All requests are allowed.
        Log = 2,
    }
    impl Action {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Action::Allow => "ALLOW",
                Action::Deny => "DENY",
                Action::Log => "LOG",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ALLOW" => Some(Self::Allow),
                "DENY" => Some(Self::Deny),
                "LOG" => Some(Self::Log),
                _ => None,
            }
        }
    }
}
/// Policy specifies a role and the principals that are assigned/denied the
/// role. A policy matches if and only if at least one of its permissions match
/// the action taking place AND at least one of its principals match the
/// downstream AND the condition is true if specified.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Policy {
    /// Required. The set of permissions that define a role. Each permission is
    /// matched with OR semantics. To match all actions for this policy, a single
    /// Permission with the ``any`` field set to true should be used.
    #[prost(message, repeated, tag = "1")]
    pub permissions: ::prost::alloc::vec::Vec<Permission>,
    /// Required. The set of principals that are assigned/denied the role based on
    /// "action". Each principal is matched with OR semantics. To match all
    /// downstreams for this policy, a single Principal with the ``any`` field set
    /// to true should be used.
    #[prost(message, repeated, tag = "2")]
    pub principals: ::prost::alloc::vec::Vec<Principal>,
}
/// Permission defines an action (or actions) that a principal can take.
/// \[#next-free-field: 14\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Permission {
    #[prost(oneof = "permission::Rule", tags = "1, 2, 3, 4, 5, 6, 8, 9, 10")]
    pub rule: ::core::option::Option<permission::Rule>,
}
/// Nested message and enum types in `Permission`.
pub mod permission {
    /// Used in the ``and_rules`` and ``or_rules`` fields in the ``rule`` oneof.
    /// Depending on the context, each are applied with the associated behavior.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Set {
        #[prost(message, repeated, tag = "1")]
        pub rules: ::prost::alloc::vec::Vec<super::Permission>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Rule {
        /// A set of rules that all must match in order to define the action.
        #[prost(message, tag = "1")]
        AndRules(Set),
        /// A set of rules where at least one must match in order to define the
        /// action.
        #[prost(message, tag = "2")]
        OrRules(Set),
        /// When any is set, it matches any action.
        #[prost(bool, tag = "3")]
        Any(bool),
        /// A header (or pseudo-header such as :path or :method) on the incoming
        /// HTTP request. Only available for HTTP request. Note: the pseudo-header
        /// :path includes the query and fragment string. Use the ``url_path``
        /// field if you want to match the URL path without the query and fragment
        /// string.
        #[prost(message, tag = "4")]
        Header(super::super::super::route::v3::HeaderMatcher),
        /// A CIDR block that describes the destination IP.
        #[prost(message, tag = "5")]
        DestinationIp(super::super::super::core::v3::CidrRange),
        /// A port number that describes the destination port connecting to.
        #[prost(uint32, tag = "6")]
        DestinationPort(u32),
        /// Negates matching the provided permission. For instance, if the value of
        /// ``not_rule`` would match, this permission would not match. Conversely,
        /// if the value of ``not_rule`` would not match, this permission would
        /// match.
        #[prost(message, tag = "8")]
        NotRule(::prost::alloc::boxed::Box<super::Permission>),
        /// The request server from the client's connection request. This is
        /// typically TLS SNI.
        #[prost(message, tag = "9")]
        RequestedServerName(
            super::super::super::super::kind::matcher::v3::StringMatcher,
        ),
        /// A URL path on the incoming HTTP request. Only available for HTTP.
        #[prost(message, tag = "10")]
        UrlPath(super::super::super::super::kind::matcher::v3::PathMatcher),
    }
}
/// Principal defines an identity or a group of identities for a downstream
/// subject.
/// \[#next-free-field: 13\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Principal {
    #[prost(oneof = "principal::Identifier", tags = "1, 2, 3, 4, 6, 8, 9, 10, 11")]
    pub identifier: ::core::option::Option<principal::Identifier>,
}
/// Nested message and enum types in `Principal`.
pub mod principal {
    /// Used in the ``and_ids`` and ``or_ids`` fields in the ``identifier`` oneof.
    /// Depending on the context, each are applied with the associated behavior.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Set {
        #[prost(message, repeated, tag = "1")]
        pub ids: ::prost::alloc::vec::Vec<super::Principal>,
    }
    /// Authentication attributes for a downstream.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Authenticated {
        /// The name of the principal. If set, The URI SAN or DNS SAN in that order
        /// is used from the certificate, otherwise the subject field is used. If
        /// unset, it applies to any user that is authenticated.
        #[prost(message, optional, tag = "2")]
        pub principal_name: ::core::option::Option<
            super::super::super::super::kind::matcher::v3::StringMatcher,
        >,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Identifier {
        /// A set of identifiers that all must match in order to define the
        /// downstream.
        #[prost(message, tag = "1")]
        AndIds(Set),
        /// A set of identifiers at least one must match in order to define the
        /// downstream.
        #[prost(message, tag = "2")]
        OrIds(Set),
        /// When any is set, it matches any downstream.
        #[prost(bool, tag = "3")]
        Any(bool),
        /// Authenticated attributes that identify the downstream.
        #[prost(message, tag = "4")]
        Authenticated(Authenticated),
        /// A header (or pseudo-header such as :path or :method) on the incoming
        /// HTTP request. Only available for HTTP request.
        #[prost(message, tag = "6")]
        Header(super::super::super::route::v3::HeaderMatcher),
        /// Negates matching the provided principal. For instance, if the value of
        /// ``not_id`` would match, this principal would not match. Conversely, if
        /// the value of ``not_id`` would not match, this principal would match.
        #[prost(message, tag = "8")]
        NotId(::prost::alloc::boxed::Box<super::Principal>),
        /// A URL path on the incoming HTTP request. Only available for HTTP.
        #[prost(message, tag = "9")]
        UrlPath(super::super::super::super::kind::matcher::v3::PathMatcher),
        /// The directly connected downstream IP address (this is the physical
        /// connection's remote address).
        #[prost(message, tag = "10")]
        DirectRemoteIp(super::super::super::core::v3::CidrRange),
        /// The downstream IP address, inferred from x-forwarded-for or proxy
        /// protocol depending on the configuration.
        #[prost(message, tag = "11")]
        RemoteIp(super::super::super::core::v3::CidrRange),
    }
}

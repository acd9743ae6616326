/// RBAC filter config.
/// \[#next-free-field: 8\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rbac {
    /// Specify the RBAC rules to be applied globally.
    /// If absent, no enforcing RBAC policy will be applied.
    /// If present and empty, DENY.
    /// If both rules and matcher are configured, rules will be ignored.
    #[prost(message, optional, tag = "1")]
    pub rules: ::core::option::Option<
        super::super::super::super::super::config::rbac::v3::Rbac,
    >,
    /// If specified, rules will emit stats with the given prefix. This is useful
    /// for distinguishing metrics when multiple RBAC filters are configured.
    #[prost(string, tag = "6")]
    pub rules_stat_prefix: ::prost::alloc::string::String,
    /// Shadow rules are not enforced by the filter (i.e., returning a 403) but
    /// will emit stats and logs and can be used for rule testing.
    /// If both shadow rules and shadow matcher are configured, shadow rules will
    /// be ignored.
    #[prost(message, optional, tag = "2")]
    pub shadow_rules: ::core::option::Option<
        super::super::super::super::super::config::rbac::v3::Rbac,
    >,
    /// If specified, shadow rules will emit stats with the given prefix. This is
    /// useful for distinguishing metrics when multiple RBAC filters use shadow
    /// rules.
    #[prost(string, tag = "3")]
    pub shadow_rules_stat_prefix: ::prost::alloc::string::String,
}
/// Per-route RBAC override.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RbacPerRoute {
    /// Override the global configuration of the filter with this new config.
    /// If absent, the global RBAC policy will be disabled for this route.
    #[prost(message, optional, tag = "2")]
    pub rbac: ::core::option::Option<Rbac>,
}

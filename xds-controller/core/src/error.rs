use std::fmt;

use crate::meta::{NamespacedName, ObjectKind};

/// Everything that can invalidate a VirtualService or reject an admission.
///
/// `Display` strings are operator-facing and end up verbatim in VS statuses
/// and webhook denials; [`Error::reason`] gives the stable machine-readable
/// counterpart reported in `status.invalidReasons`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("{kind} {name} not found")]
    RefMissing {
        kind: ObjectKind,
        name: NamespacedName,
    },

    #[error("cluster name {0:?} is already taken")]
    DuplicateClusterName(String),

    #[error("domain {domain:?} is already served by {other}")]
    DuplicateDomainAcrossVs {
        domain: String,
        other: NamespacedName,
    },

    #[error("listener {listener} conflicts with {winner} on {bind}:{port}")]
    ListenerPortConflict {
        listener: NamespacedName,
        winner: NamespacedName,
        bind: String,
        port: u32,
    },

    #[error("listener {0} must not declare filter chains")]
    ListenerHasFilterChains(NamespacedName),

    #[error("invalid TLS config: {0}")]
    InvalidTlsConfig(String),

    #[error("secret {0} not found")]
    SecretMissing(NamespacedName),

    #[error("secret {0} is not a TLS secret")]
    SecretNotTls(NamespacedName),

    #[error("no certificate covers domain {0:?}")]
    DomainCertificateNotFound(String),

    #[error("template {0} not found")]
    TemplateNotFound(NamespacedName),

    #[error("extra field {0:?} is not declared by the template")]
    ExtraFieldNotDeclared(String),

    #[error("required extra field {0:?} is not set")]
    ExtraFieldMissingRequired(String),

    #[error("extra field {field:?} does not allow value {value:?}")]
    EnumValueInvalid { field: String, value: String },

    #[error("template substitution failed: {0}")]
    TemplateSubstitutionError(String),

    #[error("exactly one of {0} must be set")]
    XorViolation(&'static str),

    #[error("virtual service {0} resolves to no node IDs")]
    NodeIdsEmpty(NamespacedName),

    #[error("cluster {0:?} is referenced by a route but does not exist")]
    ClusterReferenceMissing(String),

    #[error("only one of the inline access log and the access log ref may be set")]
    MultipleAccessLogConfig,

    #[error("tracing config {0} not found")]
    TracingRefMissing(NamespacedName),
}

/// Machine-readable names for the [`Error`] variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    MalformedPayload,
    InvalidPayload,
    RefMissing,
    DuplicateClusterName,
    DuplicateDomainAcrossVs,
    ListenerPortConflict,
    ListenerHasFilterChains,
    InvalidTlsConfig,
    SecretMissing,
    SecretNotTls,
    DomainCertificateNotFound,
    TemplateNotFound,
    ExtraFieldNotDeclared,
    ExtraFieldMissingRequired,
    EnumValueInvalid,
    TemplateSubstitutionError,
    XorViolation,
    NodeIdsEmpty,
    ClusterReferenceMissing,
    MultipleAccessLogConfig,
    TracingRefMissing,
}

// === impl Error ===

impl Error {
    pub fn reason(&self) -> Reason {
        match self {
            Self::MalformedPayload(_) => Reason::MalformedPayload,
            Self::InvalidPayload(_) => Reason::InvalidPayload,
            Self::RefMissing { .. } => Reason::RefMissing,
            Self::DuplicateClusterName(_) => Reason::DuplicateClusterName,
            Self::DuplicateDomainAcrossVs { .. } => Reason::DuplicateDomainAcrossVs,
            Self::ListenerPortConflict { .. } => Reason::ListenerPortConflict,
            Self::ListenerHasFilterChains(_) => Reason::ListenerHasFilterChains,
            Self::InvalidTlsConfig(_) => Reason::InvalidTlsConfig,
            Self::SecretMissing(_) => Reason::SecretMissing,
            Self::SecretNotTls(_) => Reason::SecretNotTls,
            Self::DomainCertificateNotFound(_) => Reason::DomainCertificateNotFound,
            Self::TemplateNotFound(_) => Reason::TemplateNotFound,
            Self::ExtraFieldNotDeclared(_) => Reason::ExtraFieldNotDeclared,
            Self::ExtraFieldMissingRequired(_) => Reason::ExtraFieldMissingRequired,
            Self::EnumValueInvalid { .. } => Reason::EnumValueInvalid,
            Self::TemplateSubstitutionError(_) => Reason::TemplateSubstitutionError,
            Self::XorViolation(_) => Reason::XorViolation,
            Self::NodeIdsEmpty(_) => Reason::NodeIdsEmpty,
            Self::ClusterReferenceMissing(_) => Reason::ClusterReferenceMissing,
            Self::MultipleAccessLogConfig => Reason::MultipleAccessLogConfig,
            Self::TracingRefMissing(_) => Reason::TracingRefMissing,
        }
    }
}

impl From<envoy_api::json::Error> for Error {
    fn from(err: envoy_api::json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

impl From<envoy_api::validate::Error> for Error {
    fn from(err: envoy_api::validate::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

// === impl Reason ===

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "MalformedPayload",
            Self::InvalidPayload => "InvalidPayload",
            Self::RefMissing => "RefMissing",
            Self::DuplicateClusterName => "DuplicateClusterName",
            Self::DuplicateDomainAcrossVs => "DuplicateDomainAcrossVS",
            Self::ListenerPortConflict => "ListenerPortConflict",
            Self::ListenerHasFilterChains => "ListenerHasFilterChains",
            Self::InvalidTlsConfig => "InvalidTLSConfig",
            Self::SecretMissing => "SecretMissing",
            Self::SecretNotTls => "SecretNotTLS",
            Self::DomainCertificateNotFound => "DomainCertificateNotFound",
            Self::TemplateNotFound => "TemplateNotFound",
            Self::ExtraFieldNotDeclared => "ExtraFieldNotDeclared",
            Self::ExtraFieldMissingRequired => "ExtraFieldMissingRequired",
            Self::EnumValueInvalid => "EnumValueInvalid",
            Self::TemplateSubstitutionError => "TemplateSubstitutionError",
            Self::XorViolation => "XORViolation",
            Self::NodeIdsEmpty => "NodeIDsEmpty",
            Self::ClusterReferenceMissing => "ClusterReferenceMissing",
            Self::MultipleAccessLogConfig => "MultipleAccessLogConfig",
            Self::TracingRefMissing => "TracingRefMissing",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_object() {
        let err = Error::RefMissing {
            kind: ObjectKind::Listener,
            name: NamespacedName::new("default", "https"),
        };
        assert_eq!(err.to_string(), "Listener default/https not found");
        assert_eq!(err.reason().as_str(), "RefMissing");

        let err = Error::DuplicateDomainAcrossVs {
            domain: "shared.example.com".into(),
            other: NamespacedName::new("default", "peer"),
        };
        assert_eq!(
            err.to_string(),
            "domain \"shared.example.com\" is already served by default/peer",
        );
        assert_eq!(err.reason().as_str(), "DuplicateDomainAcrossVS");
    }

    #[test]
    fn codec_errors_map_onto_the_taxonomy() {
        let err: Error = envoy_api::json::from_slice::<envoy_api::config::listener::v3::Listener>(
            b"{\"nope\": 1}",
        )
        .unwrap_err()
        .into();
        assert_eq!(err.reason(), Reason::MalformedPayload);
    }
}

//! Certificate selection for TLS virtual services.
//!
//! A virtual service either names its certificate secret outright or asks
//! for auto-discovery, where each virtual-host domain is matched against
//! the domain annotations of the cached TLS secrets. The result is one
//! group per distinct secret, in first-appearance order of the domains, and
//! each group later becomes its own filter chain.

use ahash::AHashMap;

use envoy_xds_controller_core::{Error, NamespacedName};
use envoy_xds_controller_k8s_api::xds::TlsConfig;

use crate::store::Store;

/// A certificate secret and the domains it serves for one virtual service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TlsGroup {
    pub secret: NamespacedName,
    pub domains: Vec<String>,
}

/// Resolves a TLS config against the virtual host's domains.
///
/// With no domains there is nothing to certify and the result is empty.
pub(crate) fn resolve(
    config: &TlsConfig,
    namespace: &str,
    domains: &[String],
    store: &Store,
) -> Result<Vec<TlsGroup>, Error> {
    if domains.is_empty() {
        return Ok(vec![]);
    }

    match (&config.secret_ref, config.auto_discovery()) {
        (Some(_), true) => Err(Error::InvalidTlsConfig(
            "multiple TLS configuration types specified".into(),
        )),
        (Some(secret_ref), false) => {
            let name = NamespacedName::new(secret_ref.namespace_or(namespace), &*secret_ref.name);
            let secret = store
                .secret(&name)
                .ok_or_else(|| Error::SecretMissing(name.clone()))?;
            if !secret.is_tls() {
                return Err(Error::SecretNotTls(name));
            }
            Ok(vec![TlsGroup {
                secret: name,
                domains: domains.to_vec(),
            }])
        }
        (None, true) => discover(domains, store),
        (None, false) => Err(Error::InvalidTlsConfig(
            "no TLS configuration specified".into(),
        )),
    }
}

fn discover(domains: &[String], store: &Store) -> Result<Vec<TlsGroup>, Error> {
    let mut groups: Vec<TlsGroup> = Vec::new();
    let mut by_secret: AHashMap<NamespacedName, usize> = AHashMap::new();
    for domain in domains {
        let secret = store
            .secret_by_domain(domain)
            .or_else(|| {
                wildcard(domain).and_then(|parent| store.secret_by_domain(&parent))
            })
            .ok_or_else(|| Error::DomainCertificateNotFound(domain.clone()))?
            .clone();
        match by_secret.get(&secret) {
            Some(&i) => groups[i].domains.push(domain.clone()),
            None => {
                by_secret.insert(secret.clone(), groups.len());
                groups.push(TlsGroup {
                    secret,
                    domains: vec![domain.clone()],
                });
            }
        }
    }
    Ok(groups)
}

/// The wildcard covering a domain, e.g. `app.example.com` falls back to
/// `*.example.com`. Single-label domains have none.
fn wildcard(domain: &str) -> Option<String> {
    let (_, rest) = domain.split_once('.')?;
    Some(format!("*.{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SecretData, SecretEntry};
    use envoy_xds_controller_k8s_api::xds::ResourceRef;
    use std::collections::BTreeMap;

    fn tls_secret(domains: &[&str]) -> SecretEntry {
        SecretEntry {
            data: SecretData::Tls {
                cert: b"crt".to_vec(),
                key: b"key".to_vec(),
            },
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn domains(names: &[&str]) -> Vec<String> {
        names.iter().map(|d| d.to_string()).collect()
    }

    fn secret_ref(name: &str) -> TlsConfig {
        TlsConfig {
            secret_ref: Some(ResourceRef::new(name)),
            auto_discovery: None,
        }
    }

    fn auto_discovery() -> TlsConfig {
        TlsConfig {
            secret_ref: None,
            auto_discovery: Some(true),
        }
    }

    #[test]
    fn secret_ref_serves_every_domain() {
        let mut store = Store::default();
        store.apply_secret(NamespacedName::new("default", "cert"), tls_secret(&[]));

        let groups = resolve(
            &secret_ref("cert"),
            "default",
            &domains(&["a.example.com", "b.example.com"]),
            &store,
        )
        .expect("resolves");
        assert_eq!(
            groups,
            vec![TlsGroup {
                secret: NamespacedName::new("default", "cert"),
                domains: domains(&["a.example.com", "b.example.com"]),
            }],
        );
    }

    #[test]
    fn secret_ref_must_exist_and_be_tls() {
        let store = Store::default();
        let err = resolve(
            &secret_ref("cert"),
            "default",
            &domains(&["a.example.com"]),
            &store,
        )
        .unwrap_err();
        assert_eq!(err, Error::SecretMissing(NamespacedName::new("default", "cert")));

        let mut store = Store::default();
        store.apply_secret(
            NamespacedName::new("default", "cert"),
            SecretEntry {
                data: SecretData::Opaque(BTreeMap::from([(
                    "token".to_string(),
                    b"x".to_vec(),
                )])),
                domains: vec![],
            },
        );
        let err = resolve(
            &secret_ref("cert"),
            "default",
            &domains(&["a.example.com"]),
            &store,
        )
        .unwrap_err();
        assert_eq!(err, Error::SecretNotTls(NamespacedName::new("default", "cert")));
    }

    #[test]
    fn conflicting_and_empty_configs_are_rejected() {
        let store = Store::default();
        let conflicted = TlsConfig {
            secret_ref: Some(ResourceRef::new("cert")),
            auto_discovery: Some(true),
        };
        let err = resolve(&conflicted, "default", &domains(&["a.com"]), &store).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTlsConfig("multiple TLS configuration types specified".into()),
        );

        let err = resolve(&TlsConfig::default(), "default", &domains(&["a.com"]), &store)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTlsConfig("no TLS configuration specified".into()),
        );

        // No domains, nothing to certify: even an empty config passes.
        assert_eq!(
            resolve(&TlsConfig::default(), "default", &[], &store).expect("resolves"),
            vec![],
        );
    }

    #[test]
    fn auto_discovery_prefers_exact_over_wildcard() {
        let mut store = Store::default();
        store.apply_secret(
            NamespacedName::new("certs", "app"),
            tls_secret(&["app.example.com"]),
        );
        store.apply_secret(
            NamespacedName::new("certs", "star"),
            tls_secret(&["*.example.com"]),
        );

        let groups = resolve(
            &auto_discovery(),
            "default",
            &domains(&["app.example.com", "www.example.com", "api.example.com"]),
            &store,
        )
        .expect("resolves");
        assert_eq!(
            groups,
            vec![
                TlsGroup {
                    secret: NamespacedName::new("certs", "app"),
                    domains: domains(&["app.example.com"]),
                },
                TlsGroup {
                    secret: NamespacedName::new("certs", "star"),
                    domains: domains(&["www.example.com", "api.example.com"]),
                },
            ],
        );
    }

    #[test]
    fn uncovered_domains_fail_discovery() {
        let mut store = Store::default();
        store.apply_secret(
            NamespacedName::new("certs", "star"),
            tls_secret(&["*.example.com"]),
        );
        let err = resolve(
            &auto_discovery(),
            "default",
            &domains(&["other.io"]),
            &store,
        )
        .unwrap_err();
        assert_eq!(err, Error::DomainCertificateNotFound("other.io".into()));
    }
}

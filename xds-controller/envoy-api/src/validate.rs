//! Structural validation for decoded resources.
//!
//! These checks are the floor every resource must clear before it is
//! eligible for a snapshot: required scalar fields are present and oneofs
//! that Envoy rejects as unset are set. Cross-resource rules (reference
//! resolution, domain and port conflicts) live with the resource index,
//! not here.

use crate::config::accesslog::v3 as accesslog;
use crate::config::cluster::v3 as cluster;
use crate::config::core::v3 as core;
use crate::config::endpoint::v3 as endpoint;
use crate::config::listener::v3 as listener;
use crate::config::rbac::v3 as rbac;
use crate::config::route::v3 as route;
use crate::extensions::access_loggers::file::v3 as file_logger;
use crate::extensions::filters::network::http_connection_manager::v3 as hcm;
use crate::json::FromJson;

/// A message that failed its structural floor.
#[derive(Debug, thiserror::Error)]
#[error("{message}: {reason}")]
pub struct Error {
    pub message: &'static str,
    pub reason: &'static str,
}

pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

fn fail(message: &'static str, reason: &'static str) -> Result<(), Error> {
    Err(Error { message, reason })
}

impl Validate for core::SocketAddress {
    fn validate(&self) -> Result<(), Error> {
        if self.address.is_empty() {
            return fail(Self::NAME, "address is required");
        }
        if self.port_specifier.is_none() {
            return fail(Self::NAME, "a port specifier is required");
        }
        Ok(())
    }
}

impl Validate for core::Address {
    fn validate(&self) -> Result<(), Error> {
        match &self.address {
            None => fail(Self::NAME, "an address kind is required"),
            Some(core::address::Address::SocketAddress(socket)) => socket.validate(),
            Some(core::address::Address::Pipe(pipe)) => {
                if pipe.path.is_empty() {
                    return fail(core::Pipe::NAME, "path is required");
                }
                Ok(())
            }
        }
    }
}

impl Validate for listener::Listener {
    fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return fail(Self::NAME, "name is required");
        }
        match &self.address {
            None => fail(Self::NAME, "address is required"),
            Some(address) => address.validate(),
        }
    }
}

impl Validate for cluster::Cluster {
    fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return fail(Self::NAME, "name is required");
        }
        if let Some(assignment) = &self.load_assignment {
            assignment.validate()?;
        }
        Ok(())
    }
}

impl Validate for endpoint::ClusterLoadAssignment {
    fn validate(&self) -> Result<(), Error> {
        if self.cluster_name.is_empty() {
            return fail(Self::NAME, "cluster_name is required");
        }
        Ok(())
    }
}

impl Validate for route::RouteConfiguration {
    fn validate(&self) -> Result<(), Error> {
        for vh in &self.virtual_hosts {
            vh.validate()?;
        }
        Ok(())
    }
}

impl Validate for route::VirtualHost {
    fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return fail(Self::NAME, "name is required");
        }
        if self.domains.is_empty() {
            return fail(Self::NAME, "at least one domain is required");
        }
        for route in &self.routes {
            route.validate()?;
        }
        Ok(())
    }
}

impl Validate for route::Route {
    fn validate(&self) -> Result<(), Error> {
        if self.r#match.is_none() {
            return fail(Self::NAME, "match is required");
        }
        if self.action.is_none() {
            return fail(Self::NAME, "an action is required");
        }
        Ok(())
    }
}

impl Validate for hcm::HttpFilter {
    fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return fail(Self::NAME, "name is required");
        }
        Ok(())
    }
}

impl Validate for hcm::HttpConnectionManager {
    fn validate(&self) -> Result<(), Error> {
        if self.stat_prefix.is_empty() {
            return fail(Self::NAME, "stat_prefix is required");
        }
        if self.route_specifier.is_none() {
            return fail(Self::NAME, "a route specifier is required");
        }
        for filter in &self.http_filters {
            filter.validate()?;
        }
        Ok(())
    }
}

impl Validate for accesslog::AccessLog {
    fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return fail(Self::NAME, "name is required");
        }
        Ok(())
    }
}

impl Validate for file_logger::FileAccessLog {
    fn validate(&self) -> Result<(), Error> {
        if self.path.is_empty() {
            return fail(Self::NAME, "path is required");
        }
        Ok(())
    }
}

impl Validate for rbac::Policy {
    fn validate(&self) -> Result<(), Error> {
        if self.permissions.is_empty() {
            return fail(Self::NAME, "at least one permission is required");
        }
        if self.principals.is_empty() {
            return fail(Self::NAME, "at least one principal is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_require_a_named_socket() {
        let mut listener = listener::Listener {
            name: "http".into(),
            ..Default::default()
        };
        assert!(listener.validate().is_err(), "address is missing");

        listener.address = Some(core::Address {
            address: Some(core::address::Address::SocketAddress(core::SocketAddress {
                address: "0.0.0.0".into(),
                port_specifier: Some(core::socket_address::PortSpecifier::PortValue(8080)),
                ..Default::default()
            })),
        });
        assert!(listener.validate().is_ok());

        listener.name.clear();
        assert!(listener.validate().is_err(), "name is missing");
    }

    #[test]
    fn virtual_hosts_require_domains() {
        let vh = route::VirtualHost {
            name: "example".into(),
            ..Default::default()
        };
        let err = vh.validate().unwrap_err();
        assert!(err.to_string().contains("domain"), "{err}");
    }

    #[test]
    fn routes_require_match_and_action() {
        let mut r = route::Route::default();
        assert!(r.validate().is_err());
        r.r#match = Some(route::RouteMatch::default());
        assert!(r.validate().is_err());
        r.action = Some(route::route::Action::Route(route::RouteAction::default()));
        assert!(r.validate().is_ok());
    }

    #[test]
    fn rbac_policies_require_both_sides() {
        let policy = rbac::Policy {
            permissions: vec![rbac::Permission {
                rule: Some(rbac::permission::Rule::Any(true)),
            }],
            principals: vec![],
        };
        assert!(policy.validate().is_err());
    }
}

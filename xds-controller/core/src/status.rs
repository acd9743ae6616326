//! VirtualService status updates emitted toward the Kubernetes API.

use crate::{error::Error, meta::NamespacedName, Reason};

/// The compiled outcome reported on a VirtualService's status subresource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VsStatus {
    pub valid: bool,
    /// Operator-facing explanation; empty when valid.
    pub message: String,
    /// Stable reason identifiers, for machine consumption.
    pub reasons: Vec<Reason>,
}

/// One status publication for one VirtualService.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub target: NamespacedName,
    pub status: VsStatus,
}

// === impl VsStatus ===

impl VsStatus {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
            reasons: Vec::new(),
        }
    }

    pub fn invalid(error: &Error) -> Self {
        Self {
            valid: false,
            message: error.to_string(),
            reasons: vec![error.reason()],
        }
    }
}

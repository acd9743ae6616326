//! Core types for the Envoy xDS control plane.
//!
//! This crate defines the vocabulary shared by the resource index and the
//! xDS transport: qualified object names, the error taxonomy surfaced in
//! VirtualService statuses, the per-node snapshot model with content-hash
//! versioning, and the snapshot cache the ADS server reads from.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod cache;
mod error;
mod meta;
pub mod snapshot;
pub mod status;

pub use self::{
    cache::SnapshotCache,
    error::{Error, Reason},
    meta::{NamespacedName, ObjectKind},
    snapshot::{Resource, ResourceType, Snapshot},
};

/// Field manager and annotation prefix for everything this controller writes.
pub const CONTROLLER_NAME: &str = "envoy.kaasops.io/xds-controller";

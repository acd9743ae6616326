#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use envoy_xds_controller_core as core;
pub use envoy_xds_controller_grpc as grpc;
pub use envoy_xds_controller_k8s_api as k8s;
pub use envoy_xds_controller_k8s_index as index;

mod admission;
mod args;
mod filter;
mod status;

pub use self::args::Args;

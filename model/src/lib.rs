/*!

This library is the cluster topology specification and validation engine: given
a declarative description of a cluster's compute fleet (named groups of
identical instances, one of which is the manager quorum), it validates that the
topology can form a working consensus-based cluster and computes the derived
defaults that provisioning depends on, most importantly the pre-boot-known list
of manager addresses that manager nodes dial to form quorum.

The engine is a pure function over an in-memory [`ClusterSpec`]: it performs no
network calls, manages no instance lifecycle, and persists nothing. Callers run
[`apply_defaults`], then [`validate`], and hand only a validating spec to the
provisioning component.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use aws::sdk_config;
pub use defaults::{apply_defaults, apply_launch_defaults, compute_manager_addresses};
pub use error::{Error, Result};
pub use identity::ClusterIdentity;
pub use spec::{ClusterSpec, InstanceGroupSpec};
pub use validation::{ensure_valid, validate, validate_with, ValidationOptions};

mod aws;
pub mod constants;
mod defaults;
mod error;
mod identity;
mod spec;
mod validation;

use crate::constants::{DEFAULT_INSTANCE_TYPE, FIRST_MANAGER_HOST_OCTET, MANAGER_NETWORK};
use crate::error::{self, Result};
use crate::spec::ClusterSpec;
use clusterboot_types::{InstanceLaunchRequest, NetworkInterfaceSpec};
use log::debug;
use snafu::ensure;

/// Computes the addresses managers are assigned at launch: `size` consecutive
/// hosts on the manager network, starting at a fixed base octet. The full set
/// is known before any instance boots, which is what lets managers find each
/// other and form quorum before any service discovery exists.
pub fn compute_manager_addresses(size: u32) -> Vec<String> {
    (0..size)
        .map(|i| format!("{}.{}", MANAGER_NETWORK, FIRST_MANAGER_HOST_OCTET + i))
        .collect()
}

/// Fills unset fields of a launch request: the smallest general-purpose
/// instance type, and a single network interface at device index 0 with
/// public-IP association and delete-on-termination enabled. Fields that are
/// already set are left alone.
pub fn apply_launch_defaults(request: &mut InstanceLaunchRequest) {
    if request.instance_type.is_none() {
        request.instance_type = Some(DEFAULT_INSTANCE_TYPE.to_string());
    }

    let no_interfaces = request
        .network_interfaces
        .as_ref()
        .map(|interfaces| interfaces.is_empty())
        .unwrap_or(true);
    if no_interfaces {
        request.network_interfaces = Some(vec![NetworkInterfaceSpec {
            device_index: 0,
            associate_public_ip_address: Some(true),
            delete_on_termination: Some(true),
            ..Default::default()
        }]);
    }
}

/// Fills every derived field of `spec` in place: launch-request defaults for
/// all groups, and the manager address list recomputed wholesale from the
/// manager group's size. Re-running recomputes rather than merges, so the
/// result is the same regardless of prior derived state.
///
/// Specs with more than one manager group are rejected here rather than left
/// for validation, so the address list is well-defined no matter which of
/// defaulting and validation runs first.
pub fn apply_defaults(spec: &mut ClusterSpec) -> Result<()> {
    let manager_groups = spec.groups.iter().filter(|group| group.is_manager()).count();
    ensure!(
        manager_groups <= 1,
        error::MultipleManagerGroupsSnafu {
            count: manager_groups
        }
    );

    let manager_size = spec.managers().ok().map(|group| group.size);
    if let Some(size) = manager_size {
        spec.manager_ips = compute_manager_addresses(size);
        debug!(
            "assigned {} manager addresses to cluster '{}': {:?}",
            spec.manager_ips.len(),
            spec.cluster_name,
            spec.manager_ips
        );
    }

    spec.mutate_groups(|group| apply_launch_defaults(&mut group.launch_template));
    Ok(())
}

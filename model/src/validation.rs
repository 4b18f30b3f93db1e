use crate::constants::VALID_MANAGER_SIZES;
use crate::error::{self, Result};
use crate::spec::ClusterSpec;
use clusterboot_types::GroupType;
use log::debug;
use snafu::ensure;

/// Toggles for validation rules that are expected to change as the system
/// matures. The defaults match current behavior: workers are optional, and all
/// groups must share one availability zone.
#[derive(Clone, Debug)]
pub struct ValidationOptions {
    /// Require at least one worker group. Off by default: a manager-only
    /// cluster is currently accepted.
    pub require_worker_group: bool,
    /// Require every group to be placed in the same availability zone. On by
    /// default until multi-AZ topologies are supported.
    pub single_availability_zone: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_worker_group: false,
            single_availability_zone: true,
        }
    }
}

/// Validates `spec` with the default rule set. Returns one human-readable
/// message per problem found; an empty list means the spec is valid. Every
/// check runs regardless of earlier failures, so a user sees all problems in
/// one pass.
pub fn validate(spec: &ClusterSpec) -> Vec<String> {
    validate_with(spec, &ValidationOptions::default())
}

/// Validates `spec` against `options`. See [`validate`].
pub fn validate_with(spec: &ClusterSpec, options: &ValidationOptions) -> Vec<String> {
    debug!("validating cluster spec '{}'", spec.cluster_name);
    let mut problems = Vec::new();

    let mut manager_groups = 0;
    let mut worker_groups = 0;
    for group in &spec.groups {
        match group.group_type() {
            Some(GroupType::Manager) => manager_groups += 1,
            Some(GroupType::Worker) => worker_groups += 1,
            None => problems.push(format!(
                "Invalid instance type '{}', must be {} or {}",
                group.group_type,
                GroupType::Worker,
                GroupType::Manager
            )),
        }
    }

    if manager_groups != 1 {
        problems.push(format!(
            "Must specify exactly one group of type {}",
            GroupType::Manager
        ));
    }

    if options.require_worker_group && worker_groups == 0 {
        problems.push(format!(
            "Must specify at least one group of type {}",
            GroupType::Worker
        ));
    }

    if spec.cluster_name.is_empty() {
        problems.push("Must specify clusterName".to_string());
    }

    for group in &spec.groups {
        if group.is_manager() {
            if !VALID_MANAGER_SIZES.contains(&group.size) {
                problems.push(format!("Group {} size must be 1, 3, or 5", group.name));
            }
        } else if group.size < 1 {
            problems.push(format!("Group {} size must be at least 1", group.name));
        }
    }

    for group in &spec.groups {
        match &group.launch_template.placement {
            None => problems.push(format!(
                "In group {}: launchTemplate.placement must be set",
                group.name
            )),
            Some(_) => {
                if group.launch_template.availability_zone().is_none() {
                    problems.push(format!(
                        "In group {}: launchTemplate.placement.availabilityZone must be set",
                        group.name
                    ));
                }
            }
        }
    }

    if options.single_availability_zone {
        let mut first_zone = None;
        for group in &spec.groups {
            let zone = match group.launch_template.availability_zone() {
                Some(zone) => zone,
                None => continue,
            };
            match first_zone {
                None => first_zone = Some(zone),
                Some(first) if first != zone => {
                    problems.push(
                        "All groups must specify the same launchTemplate.placement.availabilityZone"
                            .to_string(),
                    );
                    break;
                }
                Some(_) => {}
            }
        }
    }

    if !problems.is_empty() {
        debug!(
            "cluster spec '{}' has {} problems",
            spec.cluster_name,
            problems.len()
        );
    }
    problems
}

/// Validates `spec` with the default rule set, folding any problems into a
/// single [`Error::InvalidSpec`] whose display joins them with newlines.
///
/// [`Error::InvalidSpec`]: crate::Error::InvalidSpec
pub fn ensure_valid(spec: &ClusterSpec) -> Result<()> {
    let problems = validate(spec);
    ensure!(problems.is_empty(), error::InvalidSpecSnafu { problems });
    Ok(())
}

use crate::error::{self, Result};
use crate::identity::ClusterIdentity;
use clusterboot_types::{GroupType, InstanceLaunchRequest};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use std::str::FromStr;

/// One homogeneous pool of instances. Groups are authored as part of a
/// [`ClusterSpec`] and mutated in place by the defaulting engine; they are
/// never destroyed independently of their spec.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupSpec {
    pub name: String,
    /// Kept as the authored string so validation can report unrecognized
    /// values; parse with [`InstanceGroupSpec::group_type`].
    #[serde(rename = "type")]
    pub group_type: String,
    pub size: u32,
    #[serde(default)]
    pub launch_template: InstanceLaunchRequest,
}

impl InstanceGroupSpec {
    pub fn group_type(&self) -> Option<GroupType> {
        GroupType::from_str(&self.group_type).ok()
    }

    pub fn is_manager(&self) -> bool {
        self.group_type() == Some(GroupType::Manager)
    }
}

/// The aggregate root of a cluster topology. `manager_ips` is derived state:
/// the defaulting engine recomputes it wholesale from the manager group's size
/// and any prior value is discarded.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub cluster_name: String,
    #[serde(rename = "managerIPs", default)]
    pub manager_ips: Vec<String>,
    #[serde(default)]
    pub groups: Vec<InstanceGroupSpec>,
}

impl ClusterSpec {
    /// The sole manager group. Returns [`Error::NoManagerGroup`] when no group
    /// has type manager, which means validation was never run on this spec.
    ///
    /// [`Error::NoManagerGroup`]: crate::Error::NoManagerGroup
    pub fn managers(&self) -> Result<&InstanceGroupSpec> {
        self.groups
            .iter()
            .find(|group| group.is_manager())
            .context(error::NoManagerGroupSnafu)
    }

    /// Applies `op` to every group in place, preserving order.
    pub fn mutate_groups<F>(&mut self, mut op: F)
    where
        F: FnMut(&mut InstanceGroupSpec),
    {
        for group in &mut self.groups {
            op(group);
        }
    }

    /// Applies `op` to manager-type groups only.
    pub fn mutate_managers<F>(&mut self, mut op: F)
    where
        F: FnMut(&mut InstanceGroupSpec),
    {
        self.mutate_groups(|group| {
            if group.is_manager() {
                op(group);
            }
        });
    }

    /// The availability zone of the first group's launch template. Validation
    /// guarantees all groups share one zone, so after a spec validates this is
    /// the cluster's zone.
    pub fn availability_zone(&self) -> Result<&str> {
        let group = self.groups.first().context(error::NoGroupsSnafu)?;
        group
            .launch_template
            .availability_zone()
            .context(error::NoAvailabilityZoneSnafu { group: &group.name })
    }

    /// The cluster's canonical identity, derived from the spec: the region is
    /// the availability zone minus its trailing zone letter, the name is the
    /// cluster name.
    pub fn identity(&self) -> Result<ClusterIdentity> {
        let zone = self.availability_zone()?;
        let mut region = zone.to_string();
        region.pop();
        Ok(ClusterIdentity {
            region,
            name: self.cluster_name.clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ClusterSpec, InstanceGroupSpec};
    use crate::error::Error;
    use clusterboot_types::{InstanceLaunchRequest, Placement};

    fn group(name: &str, group_type: &str, size: u32, zone: Option<&str>) -> InstanceGroupSpec {
        InstanceGroupSpec {
            name: name.to_string(),
            group_type: group_type.to_string(),
            size,
            launch_template: InstanceLaunchRequest {
                placement: zone.map(|zone| Placement {
                    availability_zone: Some(zone.to_string()),
                }),
                ..Default::default()
            },
        }
    }

    #[test]
    fn managers_finds_the_manager_group() {
        let spec = ClusterSpec {
            cluster_name: "prod".to_string(),
            manager_ips: Vec::new(),
            groups: vec![
                group("workers", "worker", 5, Some("us-west-2a")),
                group("managers", "manager", 3, Some("us-west-2a")),
            ],
        };
        assert_eq!(spec.managers().unwrap().name, "managers");
    }

    #[test]
    fn managers_errors_without_a_manager_group() {
        let spec = ClusterSpec {
            cluster_name: "prod".to_string(),
            manager_ips: Vec::new(),
            groups: vec![group("workers", "worker", 5, Some("us-west-2a"))],
        };
        assert!(matches!(spec.managers(), Err(Error::NoManagerGroup)));
    }

    #[test]
    fn availability_zone_requires_groups() {
        let spec = ClusterSpec::default();
        assert!(matches!(spec.availability_zone(), Err(Error::NoGroups)));

        let spec = ClusterSpec {
            cluster_name: "prod".to_string(),
            manager_ips: Vec::new(),
            groups: vec![group("managers", "manager", 3, None)],
        };
        assert!(matches!(
            spec.availability_zone(),
            Err(Error::NoAvailabilityZone { .. })
        ));
    }

    #[test]
    fn identity_strips_the_zone_letter() {
        let spec = ClusterSpec {
            cluster_name: "prod".to_string(),
            manager_ips: Vec::new(),
            groups: vec![group("managers", "manager", 3, Some("us-west-2a"))],
        };
        let identity = spec.identity().unwrap();
        assert_eq!(identity.region, "us-west-2");
        assert_eq!(identity.name, "prod");
    }

    #[test]
    fn mutate_managers_skips_workers() {
        let mut spec = ClusterSpec {
            cluster_name: "prod".to_string(),
            manager_ips: Vec::new(),
            groups: vec![
                group("managers", "manager", 3, Some("us-west-2a")),
                group("workers", "worker", 4, Some("us-west-2a")),
            ],
        };
        spec.mutate_managers(|group| group.size = 5);
        assert_eq!(spec.groups[0].size, 5);
        assert_eq!(spec.groups[1].size, 4);
        spec.mutate_groups(|group| group.size += 1);
        assert_eq!(spec.groups[0].size, 6);
        assert_eq!(spec.groups[1].size, 5);
    }

    #[test]
    fn spec_deserializes_from_json() {
        let spec: ClusterSpec = serde_json::from_str(
            r#"{
                "clusterName": "prod",
                "groups": [
                    {
                        "name": "managers",
                        "type": "manager",
                        "size": 3,
                        "launchTemplate": {
                            "placement": { "availabilityZone": "us-east-1b" }
                        }
                    }
                ]
            }"#,
        )
        .unwrap();
        assert!(spec.manager_ips.is_empty());
        assert_eq!(spec.groups.len(), 1);
        assert!(spec.groups[0].is_manager());
        assert_eq!(spec.availability_zone().unwrap(), "us-east-1b");
    }
}

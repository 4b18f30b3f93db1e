use crate::constants::CLUSTER_TAG;
use aws_sdk_ec2::model::{Filter, Tag};
use maplit::btreemap;
use std::collections::BTreeMap;

/// The canonical identity of a cluster. It is derived from the spec by
/// [`ClusterSpec::identity`] whenever it is needed and never stored or mutated
/// independently.
///
/// [`ClusterSpec::identity`]: crate::ClusterSpec::identity
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterIdentity {
    pub region: String,
    pub name: String,
}

impl ClusterIdentity {
    /// The IAM role assumed by manager instances.
    pub fn role_name(&self) -> String {
        format!("{}-ManagerRole", self.name)
    }

    /// The IAM policy attached to the manager role.
    pub fn manager_policy_name(&self) -> String {
        format!("{}-ManagerPolicy", self.name)
    }

    /// The instance profile that carries the manager role.
    pub fn instance_profile_name(&self) -> String {
        format!("{}-ManagerProfile", self.name)
    }

    /// The tag applied to every resource belonging to this cluster, as a map.
    pub fn cluster_tag_map(&self) -> BTreeMap<String, String> {
        btreemap! { CLUSTER_TAG.to_string() => self.name.clone() }
    }

    /// The tag applied to every resource belonging to this cluster.
    pub fn resource_tag(&self) -> Tag {
        Tag::builder().key(CLUSTER_TAG).value(&self.name).build()
    }

    /// Filter matching resources tagged as belonging to this cluster.
    pub fn cluster_filter(&self) -> Filter {
        Filter::builder()
            .name(format!("tag:{}", CLUSTER_TAG))
            .values(&self.name)
            .build()
    }

    /// Filters scoping a resource-listing call to this cluster's resources
    /// inside `vpc_id`. Every listing call against the compute API must apply
    /// both filters.
    pub fn resource_filter(&self, vpc_id: &str) -> Vec<Filter> {
        vec![
            Filter::builder().name("vpc-id").values(vpc_id).build(),
            self.cluster_filter(),
        ]
    }
}

use serde::{Deserialize, Serialize};

/// The launch description submitted verbatim to the cloud compute API for every
/// instance of a group. Authors may leave `instance_type` and
/// `network_interfaces` unset; the defaulting engine fills them in. Validation
/// only reads `placement.availability_zone`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceLaunchRequest {
    pub instance_type: Option<String>,
    pub image_id: Option<String>,
    pub key_name: Option<String>,
    pub subnet_id: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    /// Base64-encoded user data handed to the instance at boot.
    pub user_data: Option<String>,
    pub network_interfaces: Option<Vec<NetworkInterfaceSpec>>,
    pub placement: Option<Placement>,
}

/// Where instances of a group are placed. The availability zone doubles as the
/// source of the cluster's region (the zone string minus its trailing letter).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub availability_zone: Option<String>,
}

/// One network interface attachment for a launch request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceSpec {
    #[serde(default)]
    pub device_index: i32,
    pub associate_public_ip_address: Option<bool>,
    pub delete_on_termination: Option<bool>,
    pub subnet_id: Option<String>,
    pub groups: Option<Vec<String>>,
}

impl InstanceLaunchRequest {
    /// The availability zone named by this request's placement, if any.
    pub fn availability_zone(&self) -> Option<&str> {
        self.placement
            .as_ref()
            .and_then(|placement| placement.availability_zone.as_deref())
            .filter(|zone| !zone.is_empty())
    }
}

//! String and numeric constants shared across the topology engine.

/// The tag applied to every cloud resource belonging to a cluster; its value is
/// the cluster name. All resource-listing calls must filter on it.
pub const CLUSTER_TAG: &str = "infrakit.cluster";

/// The private network manager addresses are assigned on.
pub const MANAGER_NETWORK: &str = "192.168.33";

/// Host octet of the first manager address on [`MANAGER_NETWORK`]. Managers are
/// numbered consecutively from here, so the full address set is known before
/// any instance boots.
pub const FIRST_MANAGER_HOST_OCTET: u32 = 4;

/// Instance size class used when a launch request does not name one.
pub const DEFAULT_INSTANCE_TYPE: &str = "t2.micro";

/// Group sizes that form a healthy consensus quorum.
pub const VALID_MANAGER_SIZES: [u32; 3] = [1, 3, 5];

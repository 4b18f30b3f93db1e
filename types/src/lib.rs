/*!

`clusterboot-types` holds the cloud-provider-facing data structures that cluster
topology specifications are authored in: the instance launch request template
and the instance group type. These are pure serde types with no behavior beyond
string conversions; the topology engine itself lives in `clusterboot-model`.

!*/

pub use group::GroupType;
pub use launch_request::{InstanceLaunchRequest, NetworkInterfaceSpec, Placement};

mod group;
mod launch_request;

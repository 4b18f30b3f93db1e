use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

/// The role an instance group plays in the cluster. A cluster needs exactly one
/// `manager` group (the consensus quorum) and any number of `worker` groups.
///
/// Authored specs carry the type as a raw string so that validation can report
/// an unrecognized value instead of failing to deserialize; parse it with
/// `GroupType::from_str`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Manager,
    Worker,
}

derive_display_from_serialize!(GroupType);
derive_fromstr_from_deserialize!(GroupType);

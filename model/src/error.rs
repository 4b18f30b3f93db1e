use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("The cluster spec has no instance groups"))]
    NoGroups,

    #[snafu(display("The cluster spec has no group of type manager"))]
    NoManagerGroup,

    #[snafu(display(
        "The cluster spec has {} groups of type manager, expected exactly one",
        count
    ))]
    MultipleManagerGroups { count: usize },

    #[snafu(display("Group '{}' does not specify an availability zone", group))]
    NoAvailabilityZone { group: String },

    #[snafu(display("Invalid cluster spec:\n{}", problems.join("\n")))]
    InvalidSpec { problems: Vec<String> },
}

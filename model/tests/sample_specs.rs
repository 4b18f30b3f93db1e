//! These tests assert that the sample cluster specs deserialize and flow
//! through the defaulting and validation engines the way a caller would drive
//! them: deserialize, apply defaults, validate, then derive the identity.

use clusterboot_model::{apply_defaults, validate, ClusterSpec};
use std::fs::read_to_string;
use std::path::PathBuf;

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("samples")
}

fn read_sample(filename: &str) -> ClusterSpec {
    let path = samples_dir().join(filename);
    let contents =
        read_to_string(&path).unwrap_or_else(|_| panic!("unable to open '{}'", path.display()));
    serde_yaml::from_str(&contents)
        .unwrap_or_else(|e| panic!("unable to parse '{}': {}", path.display(), e))
}

#[test]
fn sample_cluster_defaults_and_validates() {
    let mut spec = read_sample("cluster.yaml");
    apply_defaults(&mut spec).unwrap();

    assert_eq!(validate(&spec), Vec::<String>::new());
    assert_eq!(
        spec.manager_ips,
        vec!["192.168.33.4", "192.168.33.5", "192.168.33.6"]
    );

    // The authored instance type survives defaulting; the worker group gets
    // the default.
    assert_eq!(
        spec.groups[0].launch_template.instance_type.as_deref(),
        Some("m4.large")
    );
    assert_eq!(
        spec.groups[1].launch_template.instance_type.as_deref(),
        Some("t2.micro")
    );

    let identity = spec.identity().unwrap();
    assert_eq!(identity.region, "us-west-2");
    assert_eq!(identity.name, "production");

    let filters = identity.resource_filter("vpc-123");
    assert_eq!(filters[0].name(), Some("vpc-id"));
    assert_eq!(filters[1].name(), Some("tag:infrakit.cluster"));
}

#[test]
fn invalid_sample_reports_every_problem() {
    let spec = read_sample("invalid-cluster.yaml");
    let problems = validate(&spec);
    assert_eq!(
        problems,
        vec![
            "Must specify clusterName",
            "Group managers size must be 1, 3, or 5",
            "All groups must specify the same launchTemplate.placement.availabilityZone",
        ]
    );
}

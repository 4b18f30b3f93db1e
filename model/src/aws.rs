use crate::identity::ClusterIdentity;
use aws_config::default_provider::credentials::default_provider;
use aws_sdk_ec2::Region;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::SdkConfig;
use log::info;

/// Builds the shared AWS SDK config for the cluster's region using the default
/// credentials chain (instance role, then environment, then the shared
/// credentials file). The topology engine never uses the result itself; it is
/// handed opaquely to the provisioning component.
pub async fn sdk_config(cluster: &ClusterIdentity) -> SdkConfig {
    info!(
        "Building AWS SDK config for cluster '{}' in region '{}'.",
        cluster.name, cluster.region
    );
    let credentials = SharedCredentialsProvider::new(default_provider().await);
    aws_config::from_env()
        .credentials_provider(credentials)
        .region(Region::new(cluster.region.clone()))
        .load()
        .await
}

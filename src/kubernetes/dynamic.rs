// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Counting instances of resources that are only known at runtime

use kube::{
    api::{ApiResource, DynamicObject, ListParams},
    Api, Client,
};
use std::future::Future;
use tracing::{debug, instrument};

/// Anything that can count the live objects of a group/version/resource
pub trait InstanceCounter {
    fn count_instances(
        &self,
        group: &str,
        version: &str,
        plural: &str,
    ) -> impl Future<Output = kube::Result<usize>> + Send;
}

/// Untyped client addressing resources by group, version and plural name
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
}

impl DynamicClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Describe a resource collection from its triple; the kind is not needed for listing
fn api_resource(group: &str, version: &str, plural: &str) -> ApiResource {
    ApiResource {
        group: group.to_string(),
        version: version.to_string(),
        api_version: format!("{}/{}", group, version),
        kind: String::new(),
        plural: plural.to_string(),
    }
}

impl InstanceCounter for DynamicClient {
    #[instrument(skip(self))]
    async fn count_instances(&self, group: &str, version: &str, plural: &str) -> kube::Result<usize> {
        let ar = api_resource(group, version, plural);
        // Always cluster-wide, namespaced resources included
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &ar);
        let list = api.list(&ListParams::default()).await?;

        debug!("Counted {} {}.{} {}", list.items.len(), plural, group, version);
        Ok(list.items.len())
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing of the CustomResourceDefinitions registered in a cluster

use crate::types::CrdDescriptor;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{api::ListParams, Api, Client};
use std::future::Future;
use tracing::{debug, instrument};

/// Anything that can enumerate the CRDs of a cluster
pub trait CrdSource {
    fn list_custom_resource_definitions(
        &self,
    ) -> impl Future<Output = kube::Result<Vec<CrdDescriptor>>> + Send;
}

/// Client for the `apiextensions.k8s.io` API group
#[derive(Clone)]
pub struct ApiExtensionsClient {
    client: Client,
}

impl ApiExtensionsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl CrdSource for ApiExtensionsClient {
    #[instrument(skip(self))]
    async fn list_custom_resource_definitions(&self) -> kube::Result<Vec<CrdDescriptor>> {
        let crds: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let crd_list = crds.list(&ListParams::default()).await?;

        debug!("Found {} custom resource definitions", crd_list.items.len());

        Ok(crd_list.items.iter().map(CrdDescriptor::from).collect())
    }
}

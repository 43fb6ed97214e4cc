// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from kubeconfig or in-cluster configuration

use crate::error::{ClientKind, CrdCountError, Result};
use crate::kubernetes::{ApiExtensionsClient, DynamicClient};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// The two API clients the CRD counter talks to
pub struct Clients {
    pub api_extensions: ApiExtensionsClient,
    pub dynamic: DynamicClient,
}

impl Clients {
    /// Build both clients from the kubeconfig, optionally for a named context
    #[instrument]
    pub async fn connect(context: Option<&str>) -> Result<Self> {
        let config = load_config(context).await?;
        debug!("Using cluster {}", config.cluster_url);

        Ok(Clients {
            api_extensions: ApiExtensionsClient::new(build_client(&config, ClientKind::ApiExtensions)?),
            dynamic: DynamicClient::new(build_client(&config, ClientKind::Dynamic)?),
        })
    }
}

/// Load the client configuration; without a context, in-cluster config is tried as well
async fn load_config(context: Option<&str>) -> Result<KConfig> {
    match context {
        Some(context) => {
            let options = KubeConfigOptions {
                context: Some(context.to_string()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options)
                .await
                .map_err(|e| CrdCountError::Kubeconfig(format!("context {}: {}", context, e)))
        }
        None => KConfig::infer()
            .await
            .map_err(|e| CrdCountError::Kubeconfig(e.to_string())),
    }
}

fn build_client(config: &KConfig, kind: ClientKind) -> Result<Client> {
    Client::try_from(config.clone()).map_err(|e| CrdCountError::ClientConstruction {
        kind,
        message: e.to_string(),
    })
}

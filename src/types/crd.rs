// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::ResourceExt;

/// Whether instances of a custom resource live in a namespace or at cluster level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrdScope {
    #[default]
    Namespaced,
    Cluster,
}

impl CrdScope {
    /// Parse the `spec.scope` field of a CRD, falling back to `Namespaced`
    pub fn parse(scope: &str) -> Self {
        match scope {
            "Cluster" => CrdScope::Cluster,
            _ => CrdScope::Namespaced,
        }
    }
}

/// The parts of a CustomResourceDefinition needed to count its instances
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrdDescriptor {
    pub name: String,
    pub group: String,
    /// Version names in declaration order
    pub versions: Vec<String>,
    pub plural: String,
    pub scope: CrdScope,
}

impl CrdDescriptor {
    /// Display name of the resource collection, e.g. `certificates.cert-manager.io`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.plural, self.group)
    }
}

impl From<&CustomResourceDefinition> for CrdDescriptor {
    fn from(crd: &CustomResourceDefinition) -> Self {
        CrdDescriptor {
            name: crd.name_any(),
            group: crd.spec.group.clone(),
            versions: crd.spec.versions.iter().map(|v| v.name.clone()).collect(),
            plural: crd.spec.names.plural.clone(),
            scope: CrdScope::parse(&crd.spec.scope),
        }
    }
}

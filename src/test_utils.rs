// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that answers GET requests from canned responses
/// and records every path it was asked for.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client backed by this mock; clones share the request log
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        self.requests.lock().unwrap().push(path.clone());

        let response = if req.method() == &http::Method::GET {
            self.responses.lock().unwrap().get(&path).cloned()
        } else {
            None
        };
        let (status, body) =
            response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// A CustomResourceDefinition object as returned by the API server
pub fn crd_json(plural: &str, group: &str, scope: &str, versions: &[&str]) -> serde_json::Value {
    let versions: Vec<serde_json::Value> = versions
        .iter()
        .enumerate()
        .map(|(i, v)| serde_json::json!({ "name": v, "served": true, "storage": i == 0 }))
        .collect();

    serde_json::json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": { "name": format!("{}.{}", plural, group) },
        "spec": {
            "group": group,
            "names": { "plural": plural, "kind": plural },
            "scope": scope,
            "versions": versions
        }
    })
}

/// A CustomResourceDefinitionList wrapping the given CRDs
pub fn crd_list_json(crds: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinitionList",
        "metadata": { "resourceVersion": "1" },
        "items": crds
    })
    .to_string()
}

/// A list of `count` untyped objects of the given group/version/kind
pub fn object_list_json(group: &str, version: &str, kind: &str, count: usize) -> String {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "apiVersion": format!("{}/{}", group, version),
                "kind": kind,
                "metadata": { "name": format!("{}-{}", kind, i) }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": format!("{}/{}", group, version),
        "kind": format!("{}List", kind),
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// A failed Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Path listing all CRDs
pub const CRD_LIST_PATH: &str = "/apis/apiextensions.k8s.io/v1/customresourcedefinitions";

/// Cluster-wide list path of a custom resource collection
pub fn resource_path(group: &str, version: &str, plural: &str) -> String {
    format!("/apis/{}/{}/{}", group, version, plural)
}

//! # Backend HTTP Client (`common::http`)
//!
//! File: cli/src/common/http/mod.rs
//!
//! ## Overview
//!
//! `BackendClient` talks to the chunk-finding backend over JSON:
//!
//! - `POST {base_url}/find_chunk` with `{"query": "..."}`, answered by
//!   `{"answer": "..."}`. This is the `ChunkFinder` used by chat sessions.
//! - `POST {base_url}/create_kg` with no body, answered by
//!   `{"response": "..."}` or, on backend failure, `{"detail": "..."}`.
//!
//! HTTP status codes are never inspected. A body that decodes is used whatever
//! the status; a body that does not decode is a failed request, the same as a
//! transport error.
//!
//! No timeout is configured on the client; a request waits as long as the
//! backend takes.
//!
use crate::chat::session::ChunkFinder;
use crate::core::config::EndpointConfig;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct FindChunkRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct FindChunkResponse {
    answer: String,
}

/// Either shape the backend uses for `/create_kg`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CreateKgResponse {
    Created { response: String },
    Rejected { detail: String },
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    find_chunk_url: String,
    create_kg_url: String,
}

impl BackendClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            find_chunk_url: endpoint.find_chunk_url(),
            create_kg_url: endpoint.create_kg_url(),
        })
    }

    pub fn find_chunk_url(&self) -> &str {
        &self.find_chunk_url
    }

    /// Asks the backend to (re)build its knowledge graph and vector index.
    pub async fn create_knowledge_graph(&self) -> std::result::Result<String, ChatError> {
        let url = &self.create_kg_url;
        info!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;
        debug!("create_kg answered with status {}", resp.status());

        match resp
            .json::<CreateKgResponse>()
            .await
            .map_err(|e| request_failed(url, e))?
        {
            CreateKgResponse::Created { response } => Ok(response),
            CreateKgResponse::Rejected { detail } => Err(ChatError::Backend(detail)),
        }
    }
}

#[async_trait]
impl ChunkFinder for BackendClient {
    async fn find_chunk(&self, query: &str) -> std::result::Result<String, ChatError> {
        let url = &self.find_chunk_url;
        debug!("POST {} ({} bytes of query)", url, query.len());

        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .http
            .post(url)
            .json(&FindChunkRequest { query })
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;
        debug!("find_chunk answered with status {}", resp.status());

        let body: FindChunkResponse = resp.json().await.map_err(|e| request_failed(url, e))?;
        Ok(body.answer)
    }
}

fn request_failed(url: &str, err: reqwest::Error) -> ChatError {
    ChatError::RequestFailed {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

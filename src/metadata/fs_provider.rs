//! FsMetadataProvider implementation.
//!
//! Serves workspaces, semantic graphs and source schemas from a directory of
//! JSON documents laid out the way the backend returns them:
//!
//! ```text
//! <root>/workspaces.json            [{ "id": ..., "name": ... }, ...]  (required)
//! <root>/graphs/<workspace_id>.json { "definitions": { "nodes": [...], "edges": [...] } }
//! <root>/schemas/<source_id>.json   { "columns": [{ "name": ..., "type": ... }], "rowCount": ... }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::{MetadataResult, ProviderError};
use super::provider::MetadataProvider;
use crate::model::{SemanticGraphDetail, SourceSchema, Workspace};

const WORKSPACES_FILE: &str = "workspaces.json";
const GRAPHS_DIR: &str = "graphs";
const SCHEMAS_DIR: &str = "schemas";

/// MetadataProvider backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FsMetadataProvider {
    root: PathBuf,
}

impl FsMetadataProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn graph_path(&self, workspace_id: &str) -> MetadataResult<PathBuf> {
        Ok(self
            .root
            .join(GRAPHS_DIR)
            .join(format!("{}.json", checked_id(workspace_id)?)))
    }

    fn schema_path(&self, source_id: &str) -> MetadataResult<PathBuf> {
        Ok(self
            .root
            .join(SCHEMAS_DIR)
            .join(format!("{}.json", checked_id(source_id)?)))
    }
}

/// Reject ids that could escape the provider's directory.
fn checked_id(id: &str) -> MetadataResult<&str> {
    if id.is_empty() || id == "." || id.contains("..") || id.contains(['/', '\\', '\0']) {
        return Err(ProviderError::InvalidId(id.to_string()));
    }
    Ok(id)
}

/// Read and decode a JSON file, returning `Ok(None)` if it does not exist.
async fn read_json<T: DeserializeOwned>(path: &Path) -> MetadataResult<Option<T>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ProviderError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| ProviderError::Json {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait]
impl MetadataProvider for FsMetadataProvider {
    async fn list_workspaces(&self) -> MetadataResult<Vec<Workspace>> {
        let path = self.root.join(WORKSPACES_FILE);
        read_json(&path)
            .await?
            .ok_or_else(|| {
                ProviderError::not_found("workspace list", path.display().to_string())
            })
    }

    async fn get_semantic_graph(
        &self,
        workspace_id: &str,
    ) -> MetadataResult<Option<SemanticGraphDetail>> {
        let path = self.graph_path(workspace_id)?;
        let detail: Option<SemanticGraphDetail> = read_json(&path).await?;

        Ok(detail.map(|mut d| {
            d.workspace_id.get_or_insert_with(|| workspace_id.to_string());
            d
        }))
    }

    async fn get_source_schema(&self, source_id: &str) -> MetadataResult<SourceSchema> {
        let path = self.schema_path(source_id)?;
        let mut schema: SourceSchema = read_json(&path)
            .await?
            .ok_or_else(|| ProviderError::not_found("source schema", source_id))?;
        schema.source_id = source_id.to_string();
        Ok(schema)
    }
}

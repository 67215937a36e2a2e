//! Metadata provider module.
//!
//! This module is the boundary to the backend that owns workspaces, semantic
//! graphs and data-source schemas.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MetadataProvider                           │
//! │  - list_workspaces()                                            │
//! │  - get_semantic_graph(workspace_id)                             │
//! │  - get_source_schema(source_id)                                 │
//! │  - get_source_schemas(ids)      (parallel, all-or-nothing)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │            FsMetadataProvider (JSON directory)                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tessera::metadata::{FsMetadataProvider, MetadataProvider};
//!
//! let provider = FsMetadataProvider::new("./data");
//! let workspaces = provider.list_workspaces().await?;
//! ```

mod error;
mod fs_provider;
mod provider;

pub use error::{MetadataResult, ProviderError};
pub use fs_provider::FsMetadataProvider;
pub use provider::MetadataProvider;

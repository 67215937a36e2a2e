//! Asynchronous load pipeline for the semantic graph.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────────┐   ┌──────────────┐   ┌────────────────┐
//! │ list         │──▶│ get semantic      │──▶│ fetch source │──▶│ build tables + │
//! │ workspaces   │   │ graph (selected)  │   │ schemas (∥)  │   │ relationships  │
//! └──────────────┘   └───────────────────┘   └──────────────┘   └────────────────┘
//!   LoadingWorkspaces   LoadingGraph            BuildingTables      Ready
//! ```
//!
//! Every run captures a generation number when it starts. Before it commits
//! any state, it checks that no newer run has started since; if one has, the
//! run stops and its results are dropped. Network calls are never cancelled,
//! only ignored.
//!
//! The schema fan-out is all-or-nothing: one failed fetch fails the run, so a
//! partial table set is never exposed.

mod error;
mod state;

pub use error::OrchestratorError;
pub use state::{EmptyReason, GraphSnapshot, LoadState, RunOutcome};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::metadata::MetadataProvider;
use crate::model::Workspace;
use crate::semantic::{build_relationships, build_tables, view_names};

/// Why a run stopped before producing a snapshot.
enum Halt {
    Stale,
    Empty(EmptyReason),
    Failed(OrchestratorError),
}

#[derive(Debug, Default)]
struct Session {
    workspaces: Vec<Workspace>,
    selected: Option<String>,
}

/// Drives the workspace → graph → schemas pipeline and exposes its state.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use tessera::metadata::FsMetadataProvider;
/// use tessera::orchestrator::GraphOrchestrator;
///
/// let orchestrator = GraphOrchestrator::new(Arc::new(FsMetadataProvider::new("./data")));
/// orchestrator.reload().await;
/// if let Some(snapshot) = orchestrator.snapshot() {
///     println!("{} tables", snapshot.tables.len());
/// }
/// ```
pub struct GraphOrchestrator<P: MetadataProvider> {
    provider: Arc<P>,

    /// Bumped at the start of every run
    generation: AtomicU64,

    /// Workspace list and current selection
    session: RwLock<Session>,

    /// Current state, observable through `subscribe`
    state: watch::Sender<LoadState>,
}

impl<P: MetadataProvider> GraphOrchestrator<P> {
    pub fn new(provider: Arc<P>) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            provider,
            generation: AtomicU64::new(0),
            session: RwLock::new(Session::default()),
            state,
        }
    }

    /// Preselect a workspace for the first `reload`.
    ///
    /// Ignored by `reload` if the backend does not list it.
    pub fn with_initial_workspace(mut self, workspace_id: impl Into<String>) -> Self {
        self.session.get_mut().selected = Some(workspace_id.into());
        self
    }

    /// Current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Snapshot of the last successful run, if the current state is `Ready`.
    pub fn snapshot(&self) -> Option<Arc<GraphSnapshot>> {
        self.state.borrow().snapshot().cloned()
    }

    /// Generation of the most recently started run.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Workspaces from the last committed workspace listing.
    pub async fn workspaces(&self) -> Vec<Workspace> {
        self.session.read().await.workspaces.clone()
    }

    pub async fn selected_workspace(&self) -> Option<String> {
        self.session.read().await.selected.clone()
    }

    /// Run the whole pipeline from the workspace listing.
    ///
    /// Keeps the current selection if the workspace is still listed,
    /// otherwise selects the first workspace.
    pub async fn reload(&self) -> RunOutcome {
        let generation = self.begin();
        log::debug!("Reload started (generation {})", generation);

        let result = self.run_from_workspaces(generation).await;
        self.finish(generation, result)
    }

    /// Select a workspace and rebuild from its semantic graph.
    ///
    /// Any run still in flight for a previous selection becomes stale.
    pub async fn select_workspace(&self, workspace_id: &str) -> RunOutcome {
        let generation = self.begin();
        log::debug!(
            "Workspace '{}' selected (generation {})",
            workspace_id,
            generation
        );

        {
            let mut session = self.session.write().await;
            if !self.is_current(generation) {
                return self.stale(generation);
            }
            session.selected = Some(workspace_id.to_string());
        }

        let result = self.run_from_graph(generation, workspace_id.to_string()).await;
        self.finish(generation, result)
    }

    // =========================================================================
    // Pipeline stages
    // =========================================================================

    async fn run_from_workspaces(&self, generation: u64) -> Result<Arc<GraphSnapshot>, Halt> {
        self.transition(generation, LoadState::LoadingWorkspaces)?;

        let workspaces = self
            .provider
            .list_workspaces()
            .await
            .map_err(|e| Halt::Failed(OrchestratorError::WorkspaceLoad(e)))?;

        let selected = {
            let mut session = self.session.write().await;
            self.ensure_current(generation)?;

            let keep = session
                .selected
                .take()
                .filter(|id| workspaces.iter().any(|w| &w.id == id));
            let selected = keep.or_else(|| workspaces.first().map(|w| w.id.clone()));

            session.workspaces = workspaces;
            session.selected = selected.clone();
            selected
        };

        match selected {
            Some(workspace_id) => self.run_from_graph(generation, workspace_id).await,
            None => Err(Halt::Empty(EmptyReason::NoWorkspaces)),
        }
    }

    async fn run_from_graph(
        &self,
        generation: u64,
        workspace_id: String,
    ) -> Result<Arc<GraphSnapshot>, Halt> {
        self.transition(
            generation,
            LoadState::LoadingGraph {
                workspace_id: workspace_id.clone(),
            },
        )?;

        let detail = self
            .provider
            .get_semantic_graph(&workspace_id)
            .await
            .map_err(|source| {
                Halt::Failed(OrchestratorError::GraphLoad {
                    workspace_id: workspace_id.clone(),
                    source,
                })
            })?;
        self.ensure_current(generation)?;

        let detail = match detail {
            None => return Err(Halt::Empty(EmptyReason::NoGraph { workspace_id })),
            Some(d) if d.definitions.is_empty() => {
                return Err(Halt::Empty(EmptyReason::NoNodes { workspace_id }))
            }
            Some(d) => d,
        };

        self.transition(
            generation,
            LoadState::BuildingTables {
                workspace_id: workspace_id.clone(),
            },
        )?;

        let source_ids = detail.definitions.source_ids();
        let schemas = self
            .provider
            .get_source_schemas(&source_ids)
            .await
            .map_err(|source| {
                Halt::Failed(OrchestratorError::SourceSchemaFetch {
                    workspace_id: workspace_id.clone(),
                    source,
                })
            })?;
        self.ensure_current(generation)?;

        let nodes = &detail.definitions.nodes;
        let tables = build_tables(nodes, &schemas);
        let relationships = build_relationships(&detail.definitions.edges, &view_names(nodes));

        log::info!(
            "Workspace '{}': {} tables, {} relationships (generation {})",
            workspace_id,
            tables.len(),
            relationships.len(),
            generation
        );

        Ok(Arc::new(GraphSnapshot {
            generation,
            workspace_id,
            graph: detail,
            tables,
            relationships,
            schemas,
        }))
    }

    // =========================================================================
    // Generation guard
    // =========================================================================

    /// Start a new run.
    ///
    /// The bump happens under the watch channel's lock, the same lock `commit`
    /// checks under, so no older run can commit once this returns.
    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_if_modified(|_| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            false
        });
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn ensure_current(&self, generation: u64) -> Result<(), Halt> {
        if self.is_current(generation) {
            Ok(())
        } else {
            Err(Halt::Stale)
        }
    }

    /// Commit `next` if `generation` is still the latest run.
    ///
    /// The check runs under the watch channel's lock, so a stale run can
    /// never overwrite a state committed by a newer one.
    fn commit(&self, generation: u64, next: LoadState) -> bool {
        self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            *state = next;
            true
        })
    }

    fn transition(&self, generation: u64, next: LoadState) -> Result<(), Halt> {
        if self.commit(generation, next) {
            Ok(())
        } else {
            Err(Halt::Stale)
        }
    }

    fn finish(&self, generation: u64, result: Result<Arc<GraphSnapshot>, Halt>) -> RunOutcome {
        let next = match result {
            Ok(snapshot) => LoadState::Ready { snapshot },
            Err(Halt::Empty(reason)) => LoadState::Empty { reason },
            Err(Halt::Failed(err)) => {
                log::warn!("Load failed (generation {}): {}", generation, err);
                LoadState::Error {
                    message: err.to_string(),
                }
            }
            Err(Halt::Stale) => return self.stale(generation),
        };

        if self.commit(generation, next.clone()) {
            RunOutcome::Applied(next)
        } else {
            self.stale(generation)
        }
    }

    fn stale(&self, generation: u64) -> RunOutcome {
        log::debug!(
            "Dropping results of generation {} (current is {})",
            generation,
            self.generation()
        );
        RunOutcome::Stale { generation }
    }
}

//! Tessera CLI - Inspect semantic graphs and attribute query results
//!
//! Usage:
//!   tessera load [--root <dir>] [--workspace <id>] [--config <file>] [--output <format>]
//!   tessera adapt <result.json> <fields.json>
//!   tessera sanitize <name>
//!   tessera infer <column> <type> [--role <role>]
//!
//! Examples:
//!   tessera load --root ./backend --workspace ws-sales
//!   tessera adapt result.json fields.json
//!   tessera sanitize "Order Items (2024)"

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use tessera::config::Settings;
use tessera::metadata::FsMetadataProvider;
use tessera::model::{ExplicitRole, QueryResult, SelectedField};
use tessera::orchestrator::{GraphOrchestrator, LoadState, RunOutcome};
use tessera::semantic::{adapt, infer_role, sanitize};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Tessera - Semantic graph model and result adapter for visual query exploration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a workspace's semantic graph and print its tables and relationships
    Load {
        /// Backend data directory (overrides source.root from the config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Workspace to load (defaults to explorer.default_workspace, then the first one)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Config file (defaults to the standard search locations)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,
    },

    /// Attribute the columns of a query result to selected fields
    Adapt {
        /// Query result JSON file
        result: PathBuf,

        /// Selected fields JSON file (array)
        fields: PathBuf,
    },

    /// Print the view name for a source name
    Sanitize {
        name: String,
    },

    /// Print the inferred role of a column
    Infer {
        /// Column name
        column: String,

        /// Column type (e.g. INTEGER, VARCHAR)
        data_type: String,

        /// Explicit role override
        #[arg(short, long)]
        role: Option<RoleArg>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Full state as JSON
    Json,
    /// Human-readable table listing
    Summary,
}

#[derive(Clone, ValueEnum)]
enum RoleArg {
    Measure,
    Key,
    Ignore,
    Unset,
}

impl From<RoleArg> for ExplicitRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Measure => ExplicitRole::Measure,
            RoleArg::Key => ExplicitRole::Key,
            RoleArg::Ignore => ExplicitRole::Ignore,
            RoleArg::Unset => ExplicitRole::Unset,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Load {
            root,
            workspace,
            config,
            output,
        } => cmd_load(root, workspace, config, output).await,
        Commands::Adapt { result, fields } => {
            init_logging(&Settings::default().logging.filter);
            cmd_adapt(result, fields)
        }
        Commands::Sanitize { name } => {
            println!("{}", sanitize(&name));
            ExitCode::SUCCESS
        }
        Commands::Infer {
            column,
            data_type,
            role,
        } => {
            println!("{}", infer_role(&column, &data_type, role.map(Into::into)));
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

async fn cmd_load(
    root: Option<PathBuf>,
    workspace: Option<String>,
    config: Option<PathBuf>,
    output: OutputFormat,
) -> ExitCode {
    let settings = match config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.filter);

    let root = match root {
        Some(root) => root,
        None => match settings.source.resolved_root() {
            Ok(root) => root,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let provider = Arc::new(FsMetadataProvider::new(root));
    let mut orchestrator = GraphOrchestrator::new(provider);
    let requested = workspace.or(settings.explorer.default_workspace);
    if let Some(id) = &requested {
        orchestrator = orchestrator.with_initial_workspace(id.clone());
    }

    let mut outcome = orchestrator.reload().await;

    // Requested but unlisted workspaces are loaded directly.
    if let Some(id) = &requested {
        if orchestrator.selected_workspace().await.as_deref() != Some(id.as_str()) {
            outcome = orchestrator.select_workspace(id).await;
        }
    }

    let state = match outcome {
        RunOutcome::Applied(state) => state,
        RunOutcome::Stale { .. } => orchestrator.state(),
    };

    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize state: {}", e);
                return ExitCode::FAILURE;
            }
        },
        OutputFormat::Summary => print_summary(&state),
    }

    if matches!(state, LoadState::Error { .. }) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_summary(state: &LoadState) {
    match state {
        LoadState::Ready { snapshot } => {
            println!("Workspace: {}", snapshot.workspace_id);
            println!();

            println!("Tables:");
            for table in &snapshot.tables {
                println!(
                    "  - {} (\"{}\", {} rows)",
                    table.view_name, table.display_name, table.row_count
                );
                for column in &table.columns {
                    println!("      {} {} [{}]", column.name, column.data_type, column.role);
                }
            }
            println!();

            if snapshot.relationships.is_empty() {
                println!("No relationships defined.");
            } else {
                println!("Relationships:");
                for rel in &snapshot.relationships {
                    println!(
                        "  - {}.{} {} JOIN {}.{}",
                        rel.source_table,
                        rel.source_column,
                        rel.join_kind,
                        rel.target_table,
                        rel.target_column
                    );
                }
            }
        }
        LoadState::Empty { reason } => println!("Nothing to show: {:?}", reason),
        LoadState::Error { message } => eprintln!("Error: {}", message),
        other => println!("{:?}", other),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Error parsing file '{}': {}", path.display(), e))
}

fn cmd_adapt(result: PathBuf, fields: PathBuf) -> ExitCode {
    let result: QueryResult = match read_json(&result) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let fields: Vec<SelectedField> = match read_json(&fields) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let adapted = adapt(result, &fields);

    match serde_json::to_string_pretty(&adapted) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}

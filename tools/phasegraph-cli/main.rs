use clap::{Parser, Subcommand};
use itertools::Itertools;
use phasegraph::prelude::*;
use std::fs;
use std::time::Instant;

/// Inspect and validate saved compiler-pipeline projects
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a workspace configuration JSON file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the nodes, connections and phase access of a project
    Inspect {
        /// Path to the project JSON file
        project_path: String,
    },
    /// Check whether a single phase may be opened; exits non-zero when denied
    Check {
        /// Path to the project JSON file
        project_path: String,
        /// Phase to check (source, lexer, parser, analyser, translator, optimiser)
        phase: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WorkspaceConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load configuration '{}': {}", path, e))
        }),
        None => WorkspaceConfig::default(),
    };

    match cli.command {
        Command::Inspect { project_path } => run_inspect(&project_path, config),
        Command::Check {
            project_path,
            phase,
        } => run_check(&project_path, &phase, config),
    }
}

fn load_workspace(project_path: &str, config: WorkspaceConfig) -> Workspace {
    let content = fs::read_to_string(project_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read project file '{}': {}",
            project_path, e
        ))
    });
    let project: ProjectDocument = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse project JSON: {}", e)));

    let mut workspace = Workspace::builder().with_config(config).build();
    let ticket = workspace.begin_load();
    workspace
        .finish_load(ticket, Ok(project))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to restore pipeline: {}", e)));
    workspace
}

fn run_inspect(project_path: &str, config: WorkspaceConfig) {
    let start = Instant::now();
    let workspace = load_workspace(project_path, config);
    let state = workspace.state();

    println!("\n--- Nodes ({}) ---", state.nodes().len());
    for node in state.nodes() {
        println!(
            "  {:<14} {:<12} ({}, {})",
            node.id, node.label, node.position.x, node.position.y
        );
    }

    println!("\n--- Connections ({}) ---", state.connections().len());
    for connection in state.connections() {
        println!(
            "  {} -> {}",
            connection.source_node_id, connection.target_node_id
        );
    }

    let completed = workspace.status().completed_phases();
    println!(
        "\nCompleted phases: {}",
        if completed.is_empty() {
            "none".to_string()
        } else {
            completed.iter().join(", ")
        }
    );

    println!("\n--- Phase Access ---");
    for (phase, access) in workspace.access_report() {
        match access {
            Ok(_) => println!("  {:<11} open", phase),
            Err(e) => println!("  {:<11} {} ({})", phase, e.reason(), e),
        }
    }

    match state.last_saved() {
        Some(at) => println!("\nLast saved: {}", at.to_rfc3339()),
        None => println!("\nLast saved: never"),
    }
    println!("Inspected in {:?}", start.elapsed());
}

fn run_check(project_path: &str, phase: &str, config: WorkspaceConfig) {
    let phase: PhaseType = phase
        .parse()
        .unwrap_or_else(|e: GraphError| exit_with_error(&e.to_string()));
    let mut workspace = load_workspace(project_path, config);

    match workspace.validate(phase) {
        Ok(grant) => {
            let node = grant.node_id.unwrap_or_else(|| "-".to_string());
            println!("{}: open (node {})", phase, node);
        }
        Err(e) => {
            println!("{}: {}", phase, e.reason());
            exit_with_error(&e.to_string());
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

use clap::{Parser, Subcommand};
use fg_core::{DagError, VertexProfile};
use fg_graph::{ConstValue, Graph};
use tracing_subscriber::EnvFilter;

mod designs;

#[derive(Parser)]
#[command(name = "fg-cli")]
#[command(about = "Dataflow graph inspector - build, validate and render designs", long_about = None)]
struct Cli {
    /// Log graph construction events (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in designs
    Designs,
    /// Build a design, validate it and print its transforms and edges
    Show {
        /// Design name (see `designs`)
        design: String,
    },
    /// Resolve every constant of a design against profiling records
    Resolve {
        /// Design name (see `designs`)
        design: String,
        /// JSON array of per-vertex profiling records
        #[arg(short, long, default_value = "[]")]
        profiles: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown design '{0}' (try `fg-cli designs`)")]
    UnknownDesign(String),

    #[error("invalid profiling records: {0}")]
    Profiles(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] DagError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Designs => {
            cmd_designs();
            Ok(())
        }
        Commands::Show { design } => cmd_show(&design),
        Commands::Resolve { design, profiles } => cmd_resolve(&design, &profiles),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build(name: &str) -> CliResult<Graph> {
    let design = designs::find(name).ok_or_else(|| CliError::UnknownDesign(name.to_string()))?;
    let graph = (design.build)()?;
    graph.validate()?;
    tracing::info!(
        design = name,
        transforms = graph.transforms().len(),
        edges = graph.edges().len(),
        "design built"
    );
    Ok(graph)
}

fn cmd_designs() {
    println!("Designs:");
    for d in designs::DESIGNS {
        println!("  {:<10} {}", d.name, d.about);
    }
}

fn cmd_show(name: &str) -> CliResult<()> {
    let graph = build(name)?;

    println!("Graph: {}", graph.name());
    println!("Transforms:");
    for t in graph.transforms() {
        let mut flags = Vec::new();
        if t.reads_memory() {
            flags.push("reads memory");
        }
        if t.writes_memory() {
            flags.push("writes memory");
        }
        if flags.is_empty() {
            println!("  {t}");
        } else {
            println!("  {t}  [{}]", flags.join(", "));
        }
        for c in t.constants() {
            let value = match c.value() {
                Ok(ConstValue::Literal(s)) => s,
                Ok(ConstValue::Profiled(_)) => "<from profile>".to_string(),
                Err(_) => "<unbound>".to_string(),
            };
            println!("    {} = {}", c.name(), value);
        }
    }

    println!("Edges:");
    for e in graph.edges() {
        println!("  {}", graph.describe_edge(e));
    }
    println!("✓ Graph is valid");
    Ok(())
}

fn cmd_resolve(name: &str, profiles: &str) -> CliResult<()> {
    let records: Vec<VertexProfile> = serde_json::from_str(profiles)?;
    let graph = build(name)?;

    println!(
        "Resolving constants of '{}' with {} profile record(s):",
        graph.name(),
        records.len()
    );
    for t in graph.transforms() {
        for c in t.constants() {
            match c.resolve(&records) {
                Ok(value) => println!("  {}.{} = {}", t.name(), c.name(), value),
                Err(err) => println!("  {}.{}: {}", t.name(), c.name(), err),
            }
        }
    }
    Ok(())
}

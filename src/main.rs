//! depscope: interactive dependency tree explorer and risk analyzer.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use depscope::cli::{run_list, run_stats, run_view, StatsFormat};
use depscope::model::{DependencyKind, DependencyStatus};
use depscope::{ExplorerConfig, FilterCriteria, ViewKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "depscope")]
#[command(version)]
#[command(about = "Interactive dependency tree explorer and risk analyzer", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Explore a project interactively
    depscope view projects.json --project storefront

    # Flat listing of everything on a path to a security issue
    depscope list projects.json --status security-issue

    # Risk figures as JSON for scripting
    depscope stats projects.json --output json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Filter flags shared by the non-interactive subcommands.
#[derive(Args)]
struct FilterArgs {
    /// Substring to search in names and descriptions (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Restrict to one dependency kind
    #[arg(long = "type", value_enum)]
    kind: Option<KindArg>,

    /// Restrict to one status
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            kind: self.kind.map(Into::into),
            status: self.status.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Direct,
    Dev,
    Peer,
    Optional,
}

impl From<KindArg> for DependencyKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Direct => Self::Direct,
            KindArg::Dev => Self::Dev,
            KindArg::Peer => Self::Peer,
            KindArg::Optional => Self::Optional,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Deprecated,
    SecurityIssue,
    Outdated,
}

impl From<StatusArg> for DependencyStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Deprecated => Self::Deprecated,
            StatusArg::SecurityIssue => Self::SecurityIssue,
            StatusArg::Outdated => Self::Outdated,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a project's dependency tree interactively
    View {
        /// Path to the project dataset (JSON)
        dataset: PathBuf,

        /// Project to open (defaults to the first in the dataset)
        #[arg(short, long)]
        project: Option<String>,

        /// How many tree levels the view descends
        #[arg(long, default_value_t = 3)]
        max_depth: usize,

        /// Tab to open on
        #[arg(long, value_enum, default_value_t = ViewKind::Tree)]
        view: ViewKind,

        /// Color theme (dark or light)
        #[arg(long, default_value = "dark")]
        theme: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the filtered dependency forest as a flat listing
    List {
        /// Path to the project dataset (JSON)
        dataset: PathBuf,

        /// Project to list (defaults to the first in the dataset)
        #[arg(short, long)]
        project: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print derived risk statistics for the (filtered) tree
    Stats {
        /// Path to the project dataset (JSON)
        dataset: PathBuf,

        /// Project to analyze (defaults to the first in the dataset)
        #[arg(short, long)]
        project: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = StatsFormat::Summary)]
        output: StatsFormat,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("depscope={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::View {
            dataset,
            project,
            max_depth,
            view,
            theme,
            filters,
        } => {
            let config = ExplorerConfig {
                max_depth,
                default_view: view,
                theme,
            };
            run_view(&dataset, project.as_deref(), config, &filters.criteria())?;
        }
        Commands::List {
            dataset,
            project,
            filters,
        } => {
            run_list(&dataset, project.as_deref(), &filters.criteria())?;
        }
        Commands::Stats {
            dataset,
            project,
            filters,
            output,
        } => {
            run_stats(&dataset, project.as_deref(), &filters.criteria(), output)?;
        }
    }

    Ok(())
}

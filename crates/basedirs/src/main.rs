//! basedirs - print where an application's files belong

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

mod commands;

use commands::{base_command, load_settings, project_command, user_command, Field};

use basedirs_core::KnownFolderStrategy;

/// basedirs - platform directory lookup
#[derive(Parser)]
#[command(name = "basedirs")]
#[command(about = "◆ Platform-aware base, user and project directories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Log helper lookups to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with lookup settings
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Upper bound on helper programs, in milliseconds
    #[arg(long, global = true)]
    helper_timeout_ms: Option<u64>,

    /// Resolve Windows known folders through PowerShell
    #[arg(long, global = true)]
    powershell: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-application directories
    Project(ProjectArgs),
    /// Show base directories
    Base {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show user content directories
    User {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProjectArgs {
    /// Application name, or a path fragment with --raw
    name: String,
    /// Reverse-domain qualifier, e.g. "com"
    #[arg(short, long, default_value = "")]
    qualifier: String,
    /// Organization name
    #[arg(short, long, default_value = "")]
    organization: String,
    /// Use NAME verbatim as the path fragment
    #[arg(long)]
    raw: bool,
    #[arg(long)]
    cache: bool,
    #[arg(long)]
    config: bool,
    #[arg(long)]
    data: bool,
    #[arg(long)]
    data_local: bool,
    #[arg(long)]
    preferences: bool,
    #[arg(long)]
    runtime: bool,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

impl ProjectArgs {
    fn fields(&self) -> Vec<Field> {
        [
            (self.cache, Field::Cache),
            (self.config, Field::Config),
            (self.data, Field::Data),
            (self.data_local, Field::DataLocal),
            (self.preferences, Field::Preferences),
            (self.runtime, Field::Runtime),
        ]
        .into_iter()
        .filter_map(|(selected, field)| selected.then_some(field))
        .collect()
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match load_settings(cli.settings.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };
    if let Some(ms) = cli.helper_timeout_ms {
        config.helper_timeout_ms = ms;
    }
    if cli.powershell {
        config.known_folder_strategy = KnownFolderStrategy::PowerShell;
    }

    let result = match cli.command {
        Commands::Project(args) => {
            let fields = args.fields();
            project_command(
                config,
                &args.qualifier,
                &args.organization,
                &args.name,
                args.raw,
                &fields,
                args.json,
            )
        }
        Commands::Base { json } => base_command(config, json),
        Commands::User { json } => user_command(config, json),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

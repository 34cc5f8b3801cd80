//! # sphinx-embed CLI
//!
//! Command-line interface for embedding Sphinx HTML pages into a static site.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use sphinx_embed_core::{LinkProfile, RootTarget};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sphinx-embed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = sphinx_embed_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every target listed in the configuration
    Run {
        /// Override the directory holding the generated pages
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print the rewritten pages instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Rewrite a single page
    File {
        /// Page to rewrite in place
        path: PathBuf,

        /// Title written to the frontmatter
        #[arg(long)]
        title: String,

        /// Permalink written to the frontmatter
        #[arg(long)]
        permalink: String,

        #[command(flatten)]
        links: LinkArgs,

        /// Print the rewritten page instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Rewrite every page in a directory whose name starts with a prefix
    Scan {
        /// Directory to scan (not recursive)
        dir: PathBuf,

        /// Only files whose name starts with this prefix are touched
        #[arg(long)]
        prefix: String,

        /// Permalink template; `{name}` is replaced by the file name,
        /// otherwise the name is appended
        #[arg(long)]
        permalink: String,

        #[command(flatten)]
        links: LinkArgs,

        /// Print the rewritten pages instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a default configuration file
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Link rewriting options shared by `file` and `scan`
#[derive(clap::Args, Clone)]
pub struct LinkArgs {
    /// Which link rules apply
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// Href used for rewritten overview and logo links
    #[arg(long, value_enum, default_value_t = RootTargetArg::Root)]
    root_target: RootTargetArg,

    /// Navigation parent written to the frontmatter
    #[arg(long, default_value = sphinx_embed_core::frontmatter::DEFAULT_PARENT)]
    parent: String,

    /// Leave pages whose frontmatter already has the same permalink
    #[arg(long)]
    skip_processed: bool,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum ProfileArg {
    ModuleIndex,
    ApiPage,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum RootTargetArg {
    /// "."
    Root,
    /// "./index.html"
    IndexFile,
}

impl From<ProfileArg> for LinkProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::ModuleIndex => LinkProfile::ModuleIndex,
            ProfileArg::ApiPage => LinkProfile::ApiPage,
        }
    }
}

impl From<RootTargetArg> for RootTarget {
    fn from(arg: RootTargetArg) -> Self {
        match arg {
            RootTargetArg::Root => RootTarget::Root,
            RootTargetArg::IndexFile => RootTarget::IndexFile,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run { root, dry_run } => commands::run_targets(&cli.config, root, dry_run),
        Commands::File {
            path,
            title,
            permalink,
            links,
            dry_run,
        } => commands::rewrite_file(&path, title, permalink, &links, dry_run),
        Commands::Scan {
            dir,
            prefix,
            permalink,
            links,
            dry_run,
        } => commands::scan_dir(&dir, prefix, permalink, &links, dry_run),
        Commands::Init { path, force } => commands::init_config(path.as_deref(), force),
    }
}

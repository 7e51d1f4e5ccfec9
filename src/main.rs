use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autotoc::cli::{GlobalOptions, Output};
use autotoc::cli::commands::toc::TocOptions;
use autotoc::{DiscoveryStrategy, OutputFormat, TocError};

#[derive(Parser)]
#[command(name = "autotoc")]
#[command(
    version,
    about = "Table of contents and gap detection for loosely-named documentation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Use this config file only")]
    config: Option<PathBuf>,

    #[arg(long, short, global = true, env = "AUTOTOC_LOCALE", help = "Display locale: fi, en")]
    locale: Option<String>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a table of contents for a content directory
    Toc {
        #[arg(help = "Content directory (default: current directory)")]
        dir: Option<PathBuf>,
        #[arg(short = 'f', long, help = "Output format: text, markdown, json")]
        format: Option<OutputFormat>,
        #[arg(short = 'o', long, help = "Write to file instead of stdout")]
        output: Option<PathBuf>,
        #[arg(short = 's', long, help = "Discovery strategy: auto, manifest, scan, probe")]
        strategy: Option<DiscoveryStrategy>,
    },

    /// Show the category, sort key and display name of filenames
    Classify {
        #[arg(required = true, help = "Filenames to classify")]
        names: Vec<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Structure statistics and missing-file suggestions
    Analyze {
        #[arg(help = "Content directory (default: current directory)")]
        dir: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// List filenames a project probably needs
    Likely {
        #[arg(help = "Project path; its last segment names the project")]
        project_path: String,
    },

    /// Initialize autotoc in the current directory
    Init {
        #[arg(long, help = "Overwrite existing initialization")]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Edit configuration file with $EDITOR
    Edit {
        #[arg(long, short, help = "Edit global config")]
        global: bool,
    },
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mautotoc encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("Error: {:#}", e));
            // Bad input or missing setup exits 2, everything else 1
            match e.downcast_ref::<TocError>() {
                Some(err) if err.is_user_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let global = GlobalOptions {
        config_path: cli.config,
        locale: cli.locale,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Toc {
            dir,
            format,
            output,
            strategy,
        } => {
            autotoc::cli::commands::toc::run(
                &global,
                TocOptions {
                    dir,
                    format,
                    output,
                    strategy,
                },
            )?;
        }
        Commands::Classify { names, format } => {
            autotoc::cli::commands::classify::run(&global, &names, format)?;
        }
        Commands::Analyze { dir, format } => {
            autotoc::cli::commands::analyze::run(&global, dir, format)?;
        }
        Commands::Likely { project_path } => {
            autotoc::cli::commands::likely::run(&global, &project_path)?;
        }
        Commands::Init { force } => {
            autotoc::cli::commands::init::run(&global, force)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global: only_global, format } => {
                autotoc::cli::commands::config::show(only_global, &format)?;
            }
            ConfigAction::Path => {
                autotoc::cli::commands::config::path()?;
            }
            ConfigAction::Edit { global: edit_global } => {
                autotoc::cli::commands::config::edit(edit_global)?;
            }
            ConfigAction::Init {
                global: init_global,
                force,
            } => {
                if init_global {
                    autotoc::cli::commands::config::init_global(&global, force)?;
                } else {
                    autotoc::cli::commands::config::init_project(&global, force)?;
                }
            }
        },
    }

    Ok(())
}

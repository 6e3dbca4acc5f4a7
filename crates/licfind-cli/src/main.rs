//! licfind - license finder configuration
//!
//! Usage:
//!   licfind config show   # Show resolved settings
//!   licfind config init   # Create the config file from the template
//!   licfind config set    # Change and save settings
//!   licfind config path   # Print the config file location

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use licfind_core::config::{Configuration, Persistence, RawAttributes};
use licfind_core::context::ConfigContext;

#[derive(Parser)]
#[command(name = "licfind")]
#[command(about = "License finder configuration", long_about = None)]
struct Cli {
    /// Config file (default: config/license_finder.yml under the project root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project root (default: current directory)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the project configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Show resolved settings and derived artifact paths
    Show {
        #[command(flatten)]
        overrides: SettingArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Create the config file from the template if it does not exist
    Init,

    /// Change settings and save them to the config file
    Set {
        #[command(flatten)]
        settings: SettingArgs,
    },

    /// Print the config file location
    Path,
}

#[derive(Args)]
struct SettingArgs {
    /// Project name
    #[arg(long)]
    project_name: Option<String>,

    /// Directory holding dependency decision files
    #[arg(long = "dependencies-dir", value_name = "DIR")]
    dependencies_file_dir: Option<String>,

    /// Command used to invoke gradle
    #[arg(long)]
    gradle_command: Option<String>,
}

impl SettingArgs {
    fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.dependencies_file_dir.is_none()
            && self.gradle_command.is_none()
    }

    fn into_attributes(self) -> RawAttributes {
        RawAttributes {
            project_name: self.project_name,
            dependencies_file_dir: self.dependencies_file_dir,
            gradle_command: self.gradle_command,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "licfind_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let ctx = match cli.project_root {
        Some(root) => {
            let root = std::path::absolute(&root)
                .with_context(|| format!("Invalid project root: {}", root.display()))?;
            ConfigContext::for_project(root, cli.config.as_deref())
        }
        None => ConfigContext::from_process(cli.config.as_deref())
            .context("Failed to determine project root")?,
    };

    match cli.command {
        Commands::Config(args) => run_config(&ctx, args.command),
    }
}

fn run_config(ctx: &ConfigContext, command: ConfigSubcommand) -> Result<()> {
    match command {
        ConfigSubcommand::Show { overrides, format } => {
            let config = load_configuration(ctx, overrides.into_attributes())?;
            print_configuration(&config, format)?;
        }
        ConfigSubcommand::Init => {
            let created = ctx
                .persistence()
                .init()
                .context("Failed to initialize configuration")?;
            if created {
                println!("✓ Created {}", ctx.config_file().display());
            } else {
                println!("• {} already exists", ctx.config_file().display());
            }
        }
        ConfigSubcommand::Set { settings } => run_set(ctx, settings)?,
        ConfigSubcommand::Path => {
            println!("{}", ctx.config_file().display());
        }
    }
    Ok(())
}

fn run_set(ctx: &ConfigContext, settings: SettingArgs) -> Result<()> {
    if settings.is_empty() {
        anyhow::bail!(
            "Nothing to set. Use --project-name, --dependencies-dir or --gradle-command"
        );
    }

    let config = load_configuration(ctx, settings.into_attributes())?;
    ctx.save(&config).with_context(|| {
        format!(
            "Failed to save configuration to {}",
            ctx.config_file().display()
        )
    })?;
    tracing::debug!(path = %ctx.config_file().display(), "Configuration updated");

    println!("✓ Saved {}", ctx.config_file().display());
    print_configuration(&config, OutputFormat::Table)
}

fn load_configuration(ctx: &ConfigContext, overrides: RawAttributes) -> Result<Configuration> {
    ctx.ensure_default_with(overrides).map_err(|err| {
        let message = if err.is_parse_error() {
            format!(
                "Invalid configuration in {}; fix or delete it to start from the template",
                ctx.config_file().display()
            )
        } else {
            "Failed to load configuration".to_string()
        };
        anyhow::Error::new(err).context(message)
    })
}

fn print_configuration(config: &Configuration, format: OutputFormat) -> Result<()> {
    let artifacts = config.artifacts();
    match format {
        OutputFormat::Table => {
            println!("Project name:      {}", config.project_name());
            println!("Dependencies dir:  {}", config.dependencies_file_dir());
            println!("Gradle command:    {}", config.gradle_command());
            println!("Decisions file:    {}", artifacts.decisions_file().display());
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "settings": config,
                "artifacts": {
                    "dir": artifacts.dir(),
                    "decisions_file": artifacts.decisions_file(),
                    "legacy_yaml_file": artifacts.legacy_yaml_file(),
                    "text_file": artifacts.text_file(),
                    "html_file": artifacts.html_file(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

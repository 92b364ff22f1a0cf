//! confex-ctl
//!
//! Renders annotated configuration example files from a YAML option spec and
//! reports documentation style diagnostics.

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;

#[derive(Parser, Debug)]
#[command(
    name = "confex-ctl",
    version,
    about = "Render annotated configuration examples",
    styles = output::clap_styles(),
    arg_required_else_help = true
)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every example file declared in a spec
    Render {
        /// Path to the spec YAML (`files: [{example_name, options}]`)
        #[arg(value_name = "SPEC")]
        spec: PathBuf,

        /// Write each example to this directory instead of stdout
        #[arg(short, long, env = "CONFEX_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// Stdout format when no output directory is given
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit with an error if any diagnostic is reported
        #[arg(long)]
        strict: bool,

        /// Maximum description line length, indent included
        #[arg(long, value_name = "CHARS")]
        line_length_limit: Option<usize>,
    },

    /// Print the phrase used for a value type in option headers
    DescribeType {
        /// Declared type (`string`, `object`, `array`, ...)
        value_type: String,

        /// Item type for arrays
        #[arg(long)]
        items: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Example documents, one after another
    Text,
    /// `{example_name: {content, errors}}`
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let result = match cli.command {
        Commands::Render {
            spec,
            output_dir,
            format,
            strict,
            line_length_limit,
        } => {
            let config = cli_config::load_cli_config();
            commands::handle_render_command(
                RenderArgs {
                    spec,
                    output_dir,
                    format,
                    strict,
                    line_length_limit,
                },
                &config,
            )
        }
        Commands::DescribeType { value_type, items } => {
            commands::handle_describe_type_command(&value_type, items.as_deref());
            Ok(())
        }
    };

    if let Err(e) = result {
        output::error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = if verbose > 0 { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("confex_ctl={level}").parse()?)
                .add_directive(format!("confex_core={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

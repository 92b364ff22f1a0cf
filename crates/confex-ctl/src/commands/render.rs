//! `confex-ctl render`: load a spec file and render its example files.

use std::path::{Path, PathBuf};

use confex_core::{
    ConfigSpec, ExampleConsumer, RenderOptions, RenderedExamples, DESCRIPTION_LINE_LENGTH_LIMIT,
};

use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;
use crate::OutputFormat;

/// Arguments of the render command after clap parsing.
#[derive(Debug)]
pub(crate) struct RenderArgs {
    pub spec: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub line_length_limit: Option<usize>,
}

pub(crate) fn handle_render_command(args: RenderArgs, config: &CliConfig) -> CtlResult<()> {
    let output_dir = args
        .output_dir
        .or_else(|| config.output_dir.as_ref().map(PathBuf::from));
    let line_length_limit = args
        .line_length_limit
        .or(config.line_length_limit)
        .unwrap_or(DESCRIPTION_LINE_LENGTH_LIMIT);
    let strict = args.strict || config.strict;

    let spec = load_spec(&args.spec)?;
    tracing::debug!(files = spec.files.len(), line_length_limit, "Loaded spec");

    let consumer = ExampleConsumer::new().with_options(RenderOptions { line_length_limit });
    let rendered = consumer.render(&spec.files)?;

    match (&output_dir, args.format) {
        (Some(dir), _) => write_examples(dir, &rendered)?,
        (None, OutputFormat::Json) => {
            let json = serde_json::to_string_pretty(&rendered)?;
            output::document(&format!("{json}\n"));
        }
        (None, OutputFormat::Text) => print_examples(&rendered),
    }

    let count = report_diagnostics(&rendered);
    tracing::info!(
        files = rendered.len(),
        diagnostics = count,
        "Rendered configuration examples"
    );

    if strict && count > 0 {
        return Err(CtlError::Diagnostics { count });
    }

    Ok(())
}

fn load_spec(path: &Path) -> CtlResult<ConfigSpec> {
    let yaml_content = std::fs::read_to_string(path).map_err(|source| CtlError::ReadSpec {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&yaml_content).map_err(|source| CtlError::ParseSpec {
        path: path.to_path_buf(),
        source,
    })
}

fn write_examples(dir: &Path, rendered: &RenderedExamples) -> CtlResult<()> {
    for (example_name, example) in rendered {
        let path = dir.join(example_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CtlError::WriteOutput {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, &example.content).map_err(|source| CtlError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        output::success(format!("Wrote {}", path.display()));
    }
    Ok(())
}

fn print_examples(rendered: &RenderedExamples) {
    let many = rendered.len() > 1;
    for (example_name, example) in rendered {
        if many {
            output::header(format!("==> {example_name} <=="));
        }
        output::document(&example.content);
    }
}

/// Print every diagnostic as a warning and return how many there were.
fn report_diagnostics(rendered: &RenderedExamples) -> usize {
    let mut count = 0;
    for (example_name, example) in rendered {
        for error in &example.errors {
            tracing::debug!(example_name = %example_name, "{error}");
            output::warning(format!("{example_name}: {error}"));
            count += 1;
        }
    }
    if count > 0 {
        output::hint("Wrap long description lines in the spec to silence these warnings.");
    }
    count
}

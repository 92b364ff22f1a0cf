//! Renders every file of a spec into its annotated example document.

use indexmap::IndexMap;

use crate::defaults::{ExampleDefaults, PlaceholderDefaults};
use crate::error::RenderResult;
use crate::render::{OptionRenderer, RenderOptions};
use crate::spec::ExampleFile;
use crate::writer::{OptionWriter, RenderedExample};

/// Rendered examples keyed by `example_name`, in first-seen order.
pub type RenderedExamples = IndexMap<String, RenderedExample>;

/// Produces one [`RenderedExample`] per [`ExampleFile`].
///
/// Files never share buffers or diagnostics, so [`ExampleConsumer::render_file`]
/// may be called from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct ExampleConsumer<D = PlaceholderDefaults> {
    defaults: D,
    options: RenderOptions,
}

impl ExampleConsumer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ExampleDefaults> ExampleConsumer<D> {
    /// Use a different name-derived default convention.
    pub fn with_defaults(defaults: D) -> Self {
        Self {
            defaults,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render all files in input order.
    ///
    /// A later file with an `example_name` already seen replaces the earlier
    /// result but keeps its position.
    pub fn render(&self, files: &[ExampleFile]) -> RenderResult<RenderedExamples> {
        let mut rendered = RenderedExamples::with_capacity(files.len());

        for file in files {
            let example = self.render_file(file)?;
            if let Some(previous) = rendered.insert(file.example_name.clone(), example) {
                tracing::warn!(
                    example_name = %file.example_name,
                    replaced_errors = previous.errors.len(),
                    "duplicate example name, keeping the last rendering"
                );
            }
        }

        Ok(rendered)
    }

    /// Render a single file's top-level options, separated by blank lines.
    pub fn render_file(&self, file: &ExampleFile) -> RenderResult<RenderedExample> {
        let renderer = OptionRenderer::new(&self.defaults, self.options);

        let rendered = OptionWriter::scoped(|writer| -> RenderResult<()> {
            let num_options = file.options.len();
            for (i, option) in file.options.iter().enumerate() {
                renderer.write_option(option, writer, "", false)?;

                if i + 1 != num_options {
                    writer.write(&["\n"]);
                }
            }
            Ok(())
        })?;

        tracing::debug!(
            example_name = %file.example_name,
            options = file.options.len(),
            errors = rendered.errors.len(),
            "rendered example file"
        );

        Ok(rendered)
    }
}

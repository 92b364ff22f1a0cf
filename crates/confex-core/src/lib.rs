//! Annotated configuration example rendering.
//!
//! Turns an in-memory [`ConfigSpec`] into one commented example document per
//! target file. Documentation lines start with `## `, optional settings are
//! commented-out YAML (`# key: value`) and required settings are live YAML.
//! Style problems such as over-long description lines are reported as
//! per-file diagnostics and never stop rendering.
//!
//! # Modules
//!
//! - [`spec`]: Option tree: files, value options and sections
//! - [`type_descriptor`]: Noun phrases for declared value types
//! - [`defaults`]: Name-derived default example convention
//! - [`writer`]: Text buffer with a diagnostics side channel
//! - [`render`]: Recursive option rendering
//! - [`consumer`]: Per-file orchestration
//!
//! ```
//! use confex_core::{ExampleConsumer, ExampleFile, SchemaNode, ValueOption, ValueSpec};
//!
//! let file = ExampleFile {
//!     example_name: "conf.yaml.example".into(),
//!     options: vec![SchemaNode::Value(ValueOption {
//!         name: "port".into(),
//!         required: true,
//!         value: ValueSpec::new("integer", 8125),
//!         description: "The port to use.".into(),
//!     })],
//! };
//!
//! let rendered = ExampleConsumer::new().render(&[file]).unwrap();
//! assert!(rendered["conf.yaml.example"].content.ends_with("port: 8125\n"));
//! ```

pub mod consumer;
pub mod defaults;
pub mod error;
pub mod render;
pub mod spec;
pub mod type_descriptor;
pub mod writer;

pub use consumer::{ExampleConsumer, RenderedExamples};
pub use defaults::{ExampleDefaults, PlaceholderDefaults};
pub use error::{RenderError, RenderResult};
pub use render::{RenderOptions, DESCRIPTION_LINE_LENGTH_LIMIT};
pub use spec::{
    ConfigSpec, ExampleFile, ItemSpec, SchemaNode, SectionOption, ValueOption, ValueSpec,
    ValueType,
};
pub use type_descriptor::describe;
pub use writer::{OptionWriter, RenderedExample};

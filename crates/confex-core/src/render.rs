//! Recursive option rendering.
//!
//! Each option is written as a block of `## ` documentation lines, a `#`
//! separator and a YAML example. Optional values are commented out with `# `,
//! required values are live YAML. Sections either nest their children one
//! indent step deeper or, when they have no structured children, document a
//! commented-out example of their own.

use serde_yaml::{Mapping, Value};

use crate::defaults::ExampleDefaults;
use crate::error::{RenderError, RenderResult};
use crate::spec::{SchemaNode, SectionOption, ValueOption};
use crate::type_descriptor::describe;
use crate::writer::OptionWriter;

/// Default maximum length of a rendered description line, indent included.
pub const DESCRIPTION_LINE_LENGTH_LIMIT: usize = 120;

const INDENT_STEP: &str = "    ";

/// Width of the `- ` list marker, absorbed from the indent of list items.
const LIST_MARKER_WIDTH: usize = 2;

/// Tunables for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub line_length_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_length_limit: DESCRIPTION_LINE_LENGTH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum OptionKind {
    Option,
    Section,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Option => f.write_str("option"),
            Self::Section => f.write_str("section"),
        }
    }
}

/// Renders schema nodes into an [`OptionWriter`].
#[derive(Debug)]
pub(crate) struct OptionRenderer<'a, D> {
    defaults: &'a D,
    options: RenderOptions,
}

impl<'a, D: ExampleDefaults> OptionRenderer<'a, D> {
    pub(crate) fn new(defaults: &'a D, options: RenderOptions) -> Self {
        Self { defaults, options }
    }

    /// Write `node` at `indent`. `start_list` renders a value option as the
    /// first item of a list, folding the `- ` marker into its example.
    pub(crate) fn write_option(
        &self,
        node: &SchemaNode,
        writer: &mut OptionWriter,
        indent: &str,
        start_list: bool,
    ) -> RenderResult<()> {
        match node {
            SchemaNode::Value(option) => self.write_value(option, writer, indent, start_list),
            SchemaNode::Section(section) => self.write_section(section, writer, indent),
        }
    }

    fn write_value(
        &self,
        option: &ValueOption,
        writer: &mut OptionWriter,
        indent: &str,
        start_list: bool,
    ) -> RenderResult<()> {
        let name = option.name.as_str();
        let type_description = describe(&option.value);
        writer.write(&[
            indent,
            "## ",
            name,
            " - ",
            type_description.as_str(),
            " - ",
            if option.required {
                "required"
            } else {
                "optional"
            },
        ]);

        if !option.required {
            if let Some(default) = self.default_suffix(name, option.value.example.as_ref()) {
                writer.write(&[" - default: ", default.as_str()]);
            }
        }
        writer.write(&["\n"]);

        self.write_description(OptionKind::Option, name, &option.description, writer, indent);

        let example = option.value.example.clone().unwrap_or(Value::Null);
        let (option_yaml, indent) = if start_list {
            let item = Value::Sequence(vec![single_entry(name, example)]);
            (construct_yaml(name, &item)?, dedent(indent))
        } else {
            (construct_yaml(name, &single_entry(name, example))?, indent)
        };

        for line in option_yaml.lines() {
            writer.write(&[indent]);
            if !option.required {
                writer.write(&["# "]);
            }
            writer.write(&[line, "\n"]);
        }

        Ok(())
    }

    fn write_section(
        &self,
        section: &SectionOption,
        writer: &mut OptionWriter,
        indent: &str,
    ) -> RenderResult<()> {
        let name = section.name.as_str();
        self.write_description(
            OptionKind::Section,
            name,
            &section.description,
            writer,
            indent,
        );

        let Some(options) = &section.options else {
            // Documented entirely through the description, like `logs`.
            let example = section.example.clone().unwrap_or_else(|| {
                if section.multiple {
                    Value::Sequence(Vec::new())
                } else {
                    Value::Mapping(Mapping::new())
                }
            });
            let option_yaml = construct_yaml(name, &single_entry(name, example))?;
            for line in option_yaml.lines() {
                writer.write(&[indent, "# ", line, "\n"]);
            }
            return Ok(());
        };

        let next_indent = format!("{indent}{INDENT_STEP}");
        writer.write(&[indent, name, ":\n"]);

        if options.is_empty() {
            if section.multiple {
                writer.write(&["\n", dedent(&next_indent), "- {}\n"]);
            }
            return Ok(());
        }

        for (i, child) in options.iter().enumerate() {
            writer.write(&["\n"]);
            if i == 0 && section.multiple {
                if child.is_required() {
                    self.write_option(child, writer, &next_indent, true)?;
                } else {
                    writer.write(&[dedent(&next_indent), "-\n"]);
                    self.write_option(child, writer, &next_indent, false)?;
                }
            } else {
                self.write_option(child, writer, &next_indent, false)?;
            }
        }

        Ok(())
    }

    fn write_description(
        &self,
        kind: OptionKind,
        name: &str,
        description: &str,
        writer: &mut OptionWriter,
        indent: &str,
    ) {
        let limit = self.options.line_length_limit;
        for line in description_lines(description) {
            if line.is_empty() {
                writer.write(&[indent, "##"]);
            } else {
                let line = format!("{indent}## {line}");
                let length = line.chars().count();
                if length > limit {
                    let extra = length - limit;
                    tracing::debug!(%kind, option = name, extra, "description line over limit");
                    writer.new_error(line_length_error(kind, name, extra));
                }
                writer.write(&[line.as_str()]);
            }
            writer.write(&["\n"]);
        }

        writer.write(&[indent, "#\n"]);
    }

    fn default_suffix(&self, name: &str, example: Option<&Value>) -> Option<String> {
        match example? {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if *s != self.defaults.default_example(name) => Some(s.clone()),
            _ => None,
        }
    }
}

fn line_length_error(kind: OptionKind, name: &str, extra: usize) -> String {
    format!(
        "Description line length of {} `{}` was over the limit by {} character{}",
        kind,
        name,
        extra,
        if extra > 1 { "s" } else { "" }
    )
}

fn single_entry(name: &str, example: Value) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert(Value::String(name.to_string()), example);
    Value::Mapping(mapping)
}

/// Block-style YAML with keys in insertion order.
///
/// Strings that a YAML 1.1 loader resolves to booleans (`yes`, `off`, ...) are
/// emitted single-quoted so that uncommenting an example keeps its type.
fn construct_yaml(name: &str, value: &Value) -> RenderResult<String> {
    let mut quoted = Vec::new();
    let masked = mask_yaml11_bools(value, &mut quoted);
    let mut yaml =
        serde_yaml::to_string(&masked).map_err(|source| RenderError::YamlSerialization {
            option: name.to_string(),
            source,
        })?;

    for (i, original) in quoted.iter().enumerate() {
        yaml = yaml.replace(&quote_marker(i), &format!("'{original}'"));
    }
    Ok(yaml)
}

fn is_yaml11_bool(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "yes" | "no" | "on" | "off" | "y" | "n"
    )
}

fn quote_marker(i: usize) -> String {
    format!("CONFEX_QUOTED_{i}_")
}

/// Replace YAML 1.1 boolean words (keys included) with plain markers, recording
/// the originals in `quoted` by marker index.
fn mask_yaml11_bools(value: &Value, quoted: &mut Vec<String>) -> Value {
    match value {
        Value::String(s) if is_yaml11_bool(s) => {
            quoted.push(s.clone());
            Value::String(quote_marker(quoted.len() - 1))
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .iter()
                .map(|item| mask_yaml11_bools(item, quoted))
                .collect(),
        ),
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .iter()
                .map(|(k, v)| (mask_yaml11_bools(k, quoted), mask_yaml11_bools(v, quoted)))
                .collect(),
        ),
        Value::Tagged(tagged) => {
            let mut tagged = (**tagged).clone();
            tagged.value = mask_yaml11_bools(&tagged.value, quoted);
            Value::Tagged(Box::new(tagged))
        }
        other => other.clone(),
    }
}

/// Split on every line boundary Python's `str.splitlines` recognizes
/// (`\r\n` counts once); a trailing boundary yields no empty last line.
fn description_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(
            c,
            '\n' | '\r'
                | '\u{0b}'
                | '\u{0c}'
                | '\u{1c}'
                | '\u{1d}'
                | '\u{1e}'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        ) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Strip one list-marker width from an all-space indent.
fn dedent(indent: &str) -> &str {
    &indent[..indent.len().saturating_sub(LIST_MARKER_WIDTH)]
}

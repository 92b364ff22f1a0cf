//! In-memory configuration spec: files, options and their values.
//!
//! The tree is produced by an upstream loader and handed to the renderer
//! read-only. Deserialization is lenient: a node with a `value` key is a
//! [`ValueOption`], every other node is a [`SectionOption`], and keys the
//! renderer does not consume are ignored.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Declared type of an option value.
///
/// `object` and `array` drive structural decisions; every other type name is
/// carried verbatim so that it can be echoed into the rendered header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    Object,
    Array,
    Scalar(String),
}

impl From<String> for ValueType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "object" => Self::Object,
            "array" => Self::Array,
            _ => Self::Scalar(s),
        }
    }
}

impl From<&str> for ValueType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ValueType> for String {
    fn from(t: ValueType) -> Self {
        t.as_str().to_string()
    }
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Scalar(s) => s,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item type of an `array` value. Only one level is ever consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

/// Type information and example for a value option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl ValueSpec {
    /// Scalar or object value with an example.
    pub fn new(value_type: impl Into<ValueType>, example: impl Into<Value>) -> Self {
        Self {
            value_type: value_type.into(),
            items: None,
            example: Some(example.into()),
        }
    }

    /// Array value whose items are of `item_type`.
    pub fn array(item_type: impl Into<ValueType>, example: impl Into<Value>) -> Self {
        Self {
            value_type: ValueType::Array,
            items: Some(ItemSpec {
                value_type: item_type.into(),
            }),
            example: Some(example.into()),
        }
    }
}

/// A leaf option: one key with a typed example value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueOption {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub value: ValueSpec,
    #[serde(default)]
    pub description: String,
}

/// A grouping option documenting (and optionally containing) child options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The section is a list of uniform items rather than a single mapping.
    #[serde(default)]
    pub multiple: bool,
    /// `None` means the section documents itself through its description
    /// and `example` only; `Some(vec![])` is an empty structured section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SchemaNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// One entry of the option tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Value(ValueOption),
    Section(SectionOption),
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = Value::deserialize(deserializer)?;
        let has_value = node
            .as_mapping()
            .is_some_and(|mapping| mapping.contains_key("value"));

        if has_value {
            ValueOption::deserialize(node)
                .map(Self::Value)
                .map_err(de::Error::custom)
        } else {
            SectionOption::deserialize(node)
                .map(Self::Section)
                .map_err(de::Error::custom)
        }
    }
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Value(option) => &option.name,
            Self::Section(section) => &section.name,
        }
    }

    /// Sections carry no requiredness of their own and report `false`.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Value(option) => option.required,
            Self::Section(_) => false,
        }
    }
}

impl From<ValueOption> for SchemaNode {
    fn from(option: ValueOption) -> Self {
        Self::Value(option)
    }
}

impl From<SectionOption> for SchemaNode {
    fn from(section: SectionOption) -> Self {
        Self::Section(section)
    }
}

/// A target example file and its top-level options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleFile {
    pub example_name: String,
    #[serde(default)]
    pub options: Vec<SchemaNode>,
}

/// Root of a loaded spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSpec {
    #[serde(default)]
    pub files: Vec<ExampleFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_from_str() {
        assert_eq!(ValueType::from("object"), ValueType::Object);
        assert_eq!(ValueType::from("array"), ValueType::Array);
        assert_eq!(
            ValueType::from("integer"),
            ValueType::Scalar("integer".into())
        );
        assert_eq!(ValueType::from("boolean").to_string(), "boolean");
    }

    #[test]
    fn test_node_with_value_is_value_option() {
        let node: SchemaNode = serde_yaml::from_str(
            r#"
name: port
required: true
description: The port to use.
value:
  type: integer
  example: 8125
"#,
        )
        .unwrap();

        match node {
            SchemaNode::Value(option) => {
                assert_eq!(option.name, "port");
                assert!(option.required);
                assert_eq!(option.value.value_type, ValueType::Scalar("integer".into()));
                assert_eq!(option.value.example, Some(Value::from(8125)));
            }
            SchemaNode::Section(_) => panic!("expected a value option"),
        }
    }

    #[test]
    fn test_invalid_value_option_is_an_error() {
        let err = serde_yaml::from_str::<SchemaNode>(
            "name: port\nrequired: true\nvalue:\n  example: 8125\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }

    #[test]
    fn test_invalid_option_fails_whole_spec() {
        let result = serde_yaml::from_str::<ConfigSpec>(
            r#"
files:
- example_name: conf.yaml.example
  options:
  - name: port
    value:
      example: 8125
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_section_distinguishes_absent_and_empty_options() {
        let absent: SchemaNode =
            serde_yaml::from_str("name: logs\ndescription: Log section\n").unwrap();
        let empty: SchemaNode =
            serde_yaml::from_str("name: instances\nmultiple: true\noptions: []\n").unwrap();

        let SchemaNode::Section(absent) = absent else {
            panic!("expected a section");
        };
        let SchemaNode::Section(empty) = empty else {
            panic!("expected a section");
        };

        assert!(absent.options.is_none());
        assert!(!absent.multiple);
        assert_eq!(empty.options, Some(vec![]));
        assert!(empty.multiple);
    }

    #[test]
    fn test_array_items_parsed() {
        let value: ValueSpec =
            serde_yaml::from_str("type: array\nitems:\n  type: string\nexample: [a, b]\n")
                .unwrap();
        assert_eq!(value.value_type, ValueType::Array);
        assert_eq!(
            value.items.unwrap().value_type,
            ValueType::Scalar("string".into())
        );
    }

    #[test]
    fn test_sections_are_never_required() {
        let node = SchemaNode::from(SectionOption {
            name: "init_config".into(),
            description: String::new(),
            multiple: false,
            options: Some(vec![]),
            example: None,
        });
        assert!(!node.is_required());
        assert_eq!(node.name(), "init_config");
    }

    #[test]
    fn test_spec_with_nested_files() {
        let spec: ConfigSpec = serde_yaml::from_str(
            r#"
files:
- example_name: conf.yaml.example
  options:
  - name: instances
    description: Every instance is scheduled independently.
    multiple: true
    options:
    - name: url
      required: true
      description: The URL.
      value:
        type: string
        example: http://localhost:8200
"#,
        )
        .unwrap();

        assert_eq!(spec.files.len(), 1);
        assert_eq!(spec.files[0].example_name, "conf.yaml.example");
        let SchemaNode::Section(section) = &spec.files[0].options[0] else {
            panic!("expected a section");
        };
        assert_eq!(section.options.as_ref().map(Vec::len), Some(1));
    }
}

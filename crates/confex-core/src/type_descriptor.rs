//! Human-readable noun phrases for declared value types.

use crate::spec::{ValueSpec, ValueType};

/// Describe a value's type for the option header (`list of integers`, `mapping`, ...).
///
/// Arrays without an item type fall back to the bare type name.
pub fn describe(value: &ValueSpec) -> String {
    match &value.value_type {
        ValueType::Object => "mapping".to_string(),
        ValueType::Array => match value.items.as_ref().map(|items| &items.value_type) {
            Some(ValueType::Object) => "list of mappings".to_string(),
            Some(ValueType::Array) => "list of lists".to_string(),
            Some(ValueType::Scalar(item)) => format!("list of {item}s"),
            None => ValueType::Array.to_string(),
        },
        ValueType::Scalar(name) => name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ItemSpec;

    fn spec(value_type: &str, item_type: Option<&str>) -> ValueSpec {
        ValueSpec {
            value_type: value_type.into(),
            items: item_type.map(|t| ItemSpec {
                value_type: t.into(),
            }),
            example: None,
        }
    }

    #[test]
    fn test_object_is_mapping() {
        assert_eq!(describe(&spec("object", None)), "mapping");
    }

    #[test]
    fn test_array_of_scalars_is_pluralized() {
        assert_eq!(
            describe(&spec("array", Some("integer"))),
            "list of integers"
        );
        assert_eq!(describe(&spec("array", Some("string"))), "list of strings");
    }

    #[test]
    fn test_array_of_containers() {
        assert_eq!(
            describe(&spec("array", Some("object"))),
            "list of mappings"
        );
        assert_eq!(describe(&spec("array", Some("array"))), "list of lists");
    }

    #[test]
    fn test_scalar_verbatim() {
        assert_eq!(describe(&spec("string", None)), "string");
        assert_eq!(describe(&spec("boolean", None)), "boolean");
        assert_eq!(describe(&spec("number", None)), "number");
    }

    #[test]
    fn test_array_without_items() {
        assert_eq!(describe(&spec("array", None)), "array");
    }
}

//! `confex-ctl describe-type`: print the header phrase for a value type.

use confex_core::{describe, ItemSpec, ValueSpec};

use crate::output;

pub(crate) fn handle_describe_type_command(value_type: &str, items: Option<&str>) {
    output::document(&format!("{}\n", type_phrase(value_type, items)));
}

fn type_phrase(value_type: &str, items: Option<&str>) -> String {
    let value = ValueSpec {
        value_type: value_type.into(),
        items: items.map(|item_type| ItemSpec {
            value_type: item_type.into(),
        }),
        example: None,
    };
    describe(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_phrase() {
        assert_eq!(type_phrase("array", Some("integer")), "list of integers");
        assert_eq!(type_phrase("object", None), "mapping");
        assert_eq!(type_phrase("string", Some("ignored")), "string");
    }
}

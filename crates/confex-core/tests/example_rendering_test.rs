//! End-to-end rendering of a realistic integration spec.

use confex_core::{ConfigSpec, ExampleConsumer};

const VAULT_SPEC: &str = r#"
files:
- example_name: conf.yaml.example
  options:
  - name: init_config
    description: |
      All options defined here will be available to all instances.
    options: []
  - name: instances
    description: |
      Every instance will be scheduled independent of the others.
    multiple: true
    options:
    - name: api_url
      required: true
      description: URL of the Vault to query.
      value:
        type: string
        example: http://localhost:8200/v1
    - name: client_token
      description: |
        Client token necessary to collect metrics.

        Requires read access to the sys/metrics endpoint.
      value:
        type: string
        example: <CLIENT_TOKEN>
    - name: detect_leader
      description: Whether to detect leadership changes.
      value:
        type: boolean
        example: false
    - name: tags
      description: A list of tags to attach to every metric and service check emitted by this instance.
      value:
        type: array
        items:
          type: string
        example:
        - <KEY_1>:<VALUE_1>
"#;

fn render_vault() -> (String, Vec<String>) {
    let spec: ConfigSpec = serde_yaml::from_str(VAULT_SPEC).unwrap();
    let mut rendered = ExampleConsumer::new().render(&spec.files).unwrap();
    let example = rendered.swap_remove("conf.yaml.example").unwrap();
    (example.content, example.errors)
}

#[test]
fn test_vault_example_structure() {
    let (content, errors) = render_vault();
    assert!(errors.is_empty(), "unexpected diagnostics: {errors:?}");

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        &lines[..6],
        [
            "## All options defined here will be available to all instances.",
            "#",
            "init_config:",
            "",
            "## Every instance will be scheduled independent of the others.",
            "#",
        ]
    );
    assert_eq!(lines[6], "instances:");
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], "    ## api_url - string - required");
    assert!(lines.contains(&"  - api_url: http://localhost:8200/v1"));
    assert!(!lines.contains(&"  -"));
}

#[test]
fn test_vault_optional_options() {
    let (content, _) = render_vault();

    assert!(content.contains("    ## client_token - string - optional\n"));
    assert!(content.contains(
        "    ## Client token necessary to collect metrics.\n    ##\n    ## Requires read access"
    ));
    assert!(content.contains("    # client_token: <CLIENT_TOKEN>\n"));

    assert!(content.contains("    ## detect_leader - boolean - optional - default: false\n"));
    assert!(content.contains("    # detect_leader: false\n"));

    assert!(content.contains("    ## tags - list of strings - optional\n"));
    assert!(content.ends_with("    # tags:\n    # - <KEY_1>:<VALUE_1>\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(render_vault(), render_vault());
}

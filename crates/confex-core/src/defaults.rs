//! Name-derived example defaults.
//!
//! Some option names imply a conventional placeholder example (`<PASSWORD>` for
//! `password`). When an optional string option's example equals that
//! placeholder, the rendered header omits its `default:` suffix.

/// Source of the conventional example string implied by an option name.
pub trait ExampleDefaults {
    fn default_example(&self, option_name: &str) -> String;
}

/// Upper-cased option name in angle brackets: `host` becomes `<HOST>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderDefaults;

impl ExampleDefaults for PlaceholderDefaults {
    fn default_example(&self, option_name: &str) -> String {
        format!("<{}>", option_name.to_uppercase())
    }
}

impl<F> ExampleDefaults for F
where
    F: Fn(&str) -> String,
{
    fn default_example(&self, option_name: &str) -> String {
        self(option_name)
    }
}

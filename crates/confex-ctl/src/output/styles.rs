//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Color, Effects, Style};

/// Files written.
pub(crate) const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Fatal errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Render diagnostics.
pub(crate) const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Per-file headers.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

/// Help output reuses the status palette: bold green headings, red errors.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(SUCCESS.effects(Effects::BOLD))
        .usage(SUCCESS.effects(Effects::BOLD))
        .literal(HEADER)
        .error(ERROR.effects(Effects::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clap_styles_use_status_palette() {
        let styles = clap_styles();
        assert_eq!(*styles.get_header(), SUCCESS.effects(Effects::BOLD));
        assert_eq!(*styles.get_error(), ERROR.effects(Effects::BOLD));
        assert_eq!(*styles.get_literal(), HEADER);
    }
}

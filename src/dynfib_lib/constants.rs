use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The path at which a configuration file is looked for if none is given.
pub const DEFAULT_CONFIG_PATH: &str = "./dynfib.toml";

/// The largest index whose Fibonacci number is exactly representable as an
/// `f64`. `F(78) = 8944394323791464 < 2^53 < F(79)`.
pub const MAX_EXACT_INDEX: u64 = 78;

/// The largest index whose Fibonacci number is a finite `f64`.
pub const MAX_FINITE_INDEX: u64 = 1476;

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for the secondary text.
pub const SECONDARY_STYLE: Style = style_from_fg(AnsiColor::BrightGreen);

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold().blink();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();

/// The banner printed by `dynfib version`.
///
/// `{LINE1}` and `{LINE2}` are replaced at runtime.
pub const LOGO: &str = "
 ┌─┬─┬───┬─────┐
 │1│1│ 2 │  3  │  {LINE1}
 └─┴─┴───┴─────┘  {LINE2}
";

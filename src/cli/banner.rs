//! ASCII art banner for interactive mode.

use super::output;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    title: "\x1b[1;38;2;120;180;240m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the MatrixHub banner to stdout.
///
/// Renders ANSI true-color when color output is enabled,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if output::colors_enabled() {
        &COLOR
    } else {
        &PLAIN
    };

    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{tt}  __  __       _        _      _   _       _     {r}
{tt} |  \/  | __ _| |_ _ __(_)_  _| | | |_   _| |__  {r}
{tt} | |\/| |/ _` | __| '__| \ \/ / |_| | | | | '_ \ {r}
{tt} | |  | | (_| | |_| |  | |>  <|  _  | |_| | |_) |{r}
{tt} |_|  |_|\__,_|\__|_|  |_/_/\_\_| |_|\__,_|_.__/ {r}

{st} Self-hosted AI model registry{r}
"#
    );
}

//! CLI module graph.

pub mod banner;
pub mod command;
pub mod logs;
pub mod output;
pub mod paths;
pub mod restart;
pub mod start;
pub mod status;
pub mod stop;
pub mod update;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::{Error, Result};

/// Ask the user to confirm a destructive step.
///
/// `skip` (from `--yes`) answers yes without prompting. In `--json` mode a
/// blocking prompt is an error: scripts must opt in explicitly.
pub(crate) fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if output::is_json() {
        return Err(Error::Usage(
            "confirmation required; pass --yes to proceed in --json mode".to_string(),
        ));
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}

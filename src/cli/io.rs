use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};
use once_cell::sync::Lazy;

use crate::cli::core::CommandError;
use crate::cli::output;

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CommandError> {
    Confirm::with_theme(&*THEME)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a function that uses interactive prompts, treating user cancellation as `None`.
///
/// If the user cancels a prompt (Ctrl+C or Escape), a newline is printed to clean
/// up the terminal and `Ok(None)` is returned instead of the error.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Prints a local validation warning to stderr. Always shown, even in quiet mode.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}

/// Prints Chef Maestro's answer to stdout, preceded by a status heading.
pub fn print_answer(heading: &str, answer: &str) {
    crate::status!("{}", Style::success(heading));
    println!("{}", answer.trim_end());
    println!();
}

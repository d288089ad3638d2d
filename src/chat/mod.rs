//! Interactive Chef Maestro session.
//!
//! A REPL with two input modes: free-text cooking questions and a
//! structured profile form (`/meal`) that produces a meal prep plan.

/// Slash command parsing and autocomplete.
pub mod command;
mod form;
mod session;
mod state;
mod ui;

pub use form::prompt_profile;
pub use session::ChatSession;
pub use state::{EMPTY_QUESTION_WARNING, MealPlan, SessionState, Submission};

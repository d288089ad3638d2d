//! Chef Maestro prompts and the text-generation client.

mod client;
mod error;
mod prompt;
mod sse_parser;

pub use client::{ChefClient, TextGenerator};
pub use error::GenerationError;
pub use prompt::{SYSTEM_PROMPT, build_freeform_prompt, build_meal_prep_prompt};

/// Asks Chef Maestro and returns the answer text.
///
/// Generation failures are not propagated: they come back as
/// `"An error occurred: <message>"` and are shown like any other answer.
pub async fn ask_chef<G: TextGenerator>(generator: &G, text: &str) -> String {
    let prompt = build_freeform_prompt(text);

    match generator.generate(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, "generation failed");
            failure_message(&e)
        }
    }
}

pub fn failure_message(err: &GenerationError) -> String {
    format!("An error occurred: {err}")
}

//! Chat mode UI components.

use super::command::SLASH_COMMANDS;
use super::state::SessionState;
use crate::config::ResolvedConfig;
use crate::nutrition::ProteinTarget;
use crate::ui::{Style, print_answer};

pub use crate::ui::{print_error, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Your Culinary Tutor",
        Style::header("Chef Maestro"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint("Try: How do I make a perfect soufflé? | What's the science behind caramelization?")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye! Happy cooking!"));
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("api key"),
        Style::secondary(if config.api_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        })
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (command, description) in SLASH_COMMANDS {
        println!(
            "  {:<8}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_protein_target(target: ProteinTarget) {
    println!(
        "Your calculated daily protein needs: {}",
        Style::value(format!("{target}g"))
    );
}

pub fn print_last(state: &SessionState) {
    if state.answer().is_empty() && state.meal_plan().is_none() {
        println!("{}\n", Style::secondary("Nothing yet. Ask a question or try /meal."));
        return;
    }

    if !state.answer().is_empty() {
        println!("{} {}", Style::label("Question:"), state.question());
        print_answer("Here's your answer:", state.answer());
    }

    if let Some(meal_plan) = state.meal_plan() {
        print_protein_target(meal_plan.protein_target);
        print_answer("Here's your personalized meal prep plan:", &meal_plan.plan);
    }
}

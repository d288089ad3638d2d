//! # Chef Maestro - Culinary Tutor CLI
//!
//! `chef` answers cooking questions and writes personalized meal prep plans
//! using an OpenAI-compatible chat completion endpoint (Gemini by default).
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="..."   # or put it in ./.env
//!
//! # Interactive session (questions, /meal for the profile form)
//! chef
//!
//! # One question
//! chef ask "How can I replace eggs in baking?"
//!
//! # Meal prep plan from a profile
//! chef meal-plan --age 30 --weight 70 --activity "Moderately Active" --diet vegan
//!
//! # Protein target only, no API call
//! chef protein --weight 70 --age 30 --activity sedentary
//! ```
//!
//! ## Configuration
//!
//! Optional; stored in `~/.config/chef/config.toml`:
//!
//! ```toml
//! [chef]
//! provider = "ollama"
//! model = "llama3.2"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434/v1"
//! models = ["llama3.2"]
//! ```

/// Interactive session, per-session state and the profile form.
pub mod chat;

/// Chef Maestro prompts and the text-generation client.
pub mod chef;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Reading questions from arguments, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Profile model and protein target calculation.
pub mod nutrition;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors, messages).
pub mod ui;

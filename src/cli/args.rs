use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::nutrition::{ActivityLevel, DietPreference, Gender, check_age, check_height, check_weight};

#[derive(Parser, Debug)]
#[command(name = "chef")]
#[command(about = "Chef Maestro: your culinary tutor and meal prep planner")]
#[command(version)]
pub struct Args {
    /// Provider name from the config file (default: gemini)
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Suppress status messages and spinners
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session (default when no command is given)
    Chat,
    /// Ask Chef Maestro a single culinary question
    Ask {
        /// The question (reads --file or stdin if omitted)
        question: Option<String>,

        /// Read the question from a file
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Print the prompt instead of sending it
        #[arg(long)]
        print_prompt: bool,
    },
    /// Generate a personalized meal prep plan
    MealPlan(MealPlanArgs),
    /// Calculate a daily protein target without calling the API
    Protein {
        /// Body weight in kilograms
        #[arg(short = 'w', long, value_parser = parse_weight)]
        weight: f64,

        /// Age in years
        #[arg(short = 'a', long, value_parser = parse_age)]
        age: u32,

        /// Gender (does not change the result)
        #[arg(short = 'g', long, default_value = "Male")]
        gender: Gender,

        /// Activity level, e.g. "Moderately Active" or moderately-active
        #[arg(long)]
        activity: String,
    },
    /// List configured providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct MealPlanArgs {
    /// Age in years (16-100)
    #[arg(long, default_value = "30", value_parser = parse_age)]
    pub age: u32,

    /// Body weight in kilograms (30-200)
    #[arg(long, default_value = "70.0", value_parser = parse_weight)]
    pub weight: f64,

    /// Height in centimetres (120-250)
    #[arg(long, default_value = "170", value_parser = parse_height)]
    pub height: u32,

    /// Male or Female
    #[arg(long, default_value = "Male")]
    pub gender: Gender,

    /// Sedentary, Lightly Active, Moderately Active, Very Active or Extremely Active
    #[arg(long, default_value = "Sedentary")]
    pub activity: ActivityLevel,

    /// Omnivore, Vegetarian, Vegan, Pescatarian, Keto, Paleo or Mediterranean
    #[arg(long, default_value = "Omnivore")]
    pub diet: DietPreference,

    /// Print the prompt instead of sending it
    #[arg(long)]
    pub print_prompt: bool,
}

fn parse_age(s: &str) -> Result<u32, String> {
    let age = s.parse().map_err(|_| format!("'{s}' is not a whole number"))?;
    check_age(age).map_err(|e| e.to_string())
}

fn parse_weight(s: &str) -> Result<f64, String> {
    let weight = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    check_weight(weight).map_err(|e| e.to_string())
}

fn parse_height(s: &str) -> Result<u32, String> {
    let height = s.parse().map_err(|_| format!("'{s}' is not a whole number"))?;
    check_height(height).map_err(|e| e.to_string())
}

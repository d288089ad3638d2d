use anyhow::Result;
use clap::Parser;

use chef_maestro::cli::commands::{ask, chat, meal_plan, protein, providers};
use chef_maestro::cli::{Args, Command};
use chef_maestro::config::ResolveOptions;
use chef_maestro::output::{self, OutputConfig};
use chef_maestro::{logging, ui};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose, output::is_no_color());

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, ".env not loaded, using process environment");
    }

    if let Err(e) = run(args).await {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(exitcode::SOFTWARE);
    }
}

async fn run(args: Args) -> Result<()> {
    let resolve = ResolveOptions {
        provider: args.provider,
        model: args.model,
    };

    match args.command {
        None | Some(Command::Chat) => chat::run_chat(&resolve).await?,
        Some(Command::Ask {
            question,
            file,
            print_prompt,
        }) => {
            let options = ask::AskOptions {
                question,
                file,
                print_prompt,
            };
            ask::run_ask(options, &resolve).await?;
        }
        Some(Command::MealPlan(meal_args)) => meal_plan::run_meal_plan(meal_args, &resolve).await?,
        Some(Command::Protein {
            weight,
            age,
            gender,
            activity,
        }) => protein::print_protein(weight, age, gender, &activity),
        Some(Command::Providers { provider }) => providers::print_providers(provider.as_deref())?,
    }

    Ok(())
}

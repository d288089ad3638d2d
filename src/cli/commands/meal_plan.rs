use anyhow::Result;

use super::load_client;
use crate::chat::SessionState;
use crate::chef::{build_freeform_prompt, build_meal_prep_prompt};
use crate::cli::MealPlanArgs;
use crate::config::ResolveOptions;
use crate::nutrition::UserProfile;
use crate::status;
use crate::ui::{Spinner, Style, print_answer};

pub async fn run_meal_plan(args: MealPlanArgs, resolve: &ResolveOptions) -> Result<()> {
    let profile = UserProfile::new(
        args.age,
        args.weight,
        args.height,
        args.gender,
        args.activity,
        args.diet,
    )?;

    let target = profile.protein_target();
    status!(
        "Your calculated daily protein needs: {}",
        Style::value(format!("{target}g"))
    );

    if args.print_prompt {
        println!(
            "{}",
            build_freeform_prompt(&build_meal_prep_prompt(&profile, target))
        );
        return Ok(());
    }

    let (_, client) = load_client(resolve)?;
    let mut state = SessionState::new();

    let spinner = Spinner::new("Chef Maestro is preparing your personalized meal plan...");
    let meal_plan = state.submit_profile(&client, profile).await;
    spinner.stop();

    print_answer("Here's your personalized meal prep plan:", &meal_plan.plan);
    Ok(())
}

//! Interactive profile form for meal prep plans.

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Select};
use std::fmt::Display;

use crate::nutrition::{
    AGE_RANGE, ActivityLevel, DietPreference, Gender, HEIGHT_RANGE, ProfileError, UserProfile,
    WEIGHT_RANGE, check_age, check_height, check_weight,
};

/// Asks for the six profile fields, starting from `defaults`.
///
/// Numbers outside the accepted ranges are rejected at the prompt, so the
/// returned profile is always valid.
pub fn prompt_profile(defaults: &UserProfile) -> Result<UserProfile> {
    let age = CustomType::<u32>::new("Age")
        .with_default(defaults.age())
        .with_help_message(&range_hint(&AGE_RANGE, "years"))
        .with_error_message("Please enter a whole number of years")
        .with_validator(validate_age)
        .prompt()?;

    let weight_kg = CustomType::<f64>::new("Weight (kg)")
        .with_default(defaults.weight_kg())
        .with_help_message(&range_hint(&WEIGHT_RANGE, "kg"))
        .with_error_message("Please enter a number, e.g. 70.5")
        .with_validator(validate_weight)
        .prompt()?;

    let gender = select_option("Gender", Gender::ALL, defaults.gender())?;

    let height_cm = CustomType::<u32>::new("Height (cm)")
        .with_default(defaults.height_cm())
        .with_help_message(&range_hint(&HEIGHT_RANGE, "cm"))
        .with_error_message("Please enter a whole number of centimetres")
        .with_validator(validate_height)
        .prompt()?;

    let activity_level = select_option(
        "Activity Level",
        ActivityLevel::ALL,
        defaults.activity_level(),
    )?;
    let diet_preference = select_option(
        "Dietary Preference",
        DietPreference::ALL,
        defaults.diet_preference(),
    )?;

    Ok(UserProfile::new(
        age,
        weight_kg,
        height_cm,
        gender,
        activity_level,
        diet_preference,
    )?)
}

fn range_hint<T: Display>(range: &std::ops::RangeInclusive<T>, unit: &str) -> String {
    format!("{} to {} {unit}", range.start(), range.end())
}

fn select_option<T>(message: &str, options: &[T], default: T) -> Result<T>
where
    T: Copy + Display + PartialEq,
{
    let cursor = options
        .iter()
        .position(|option| *option == default)
        .unwrap_or(0);

    Ok(Select::new(message, options.to_vec())
        .with_starting_cursor(cursor)
        .prompt()?)
}

fn to_validation<T>(result: Result<T, ProfileError>) -> Validation {
    match result {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    }
}

#[allow(clippy::unnecessary_wraps, clippy::trivially_copy_pass_by_ref)]
fn validate_age(age: &u32) -> Result<Validation, CustomUserError> {
    Ok(to_validation(check_age(*age)))
}

#[allow(clippy::unnecessary_wraps, clippy::trivially_copy_pass_by_ref)]
fn validate_weight(weight_kg: &f64) -> Result<Validation, CustomUserError> {
    Ok(to_validation(check_weight(*weight_kg)))
}

#[allow(clippy::unnecessary_wraps, clippy::trivially_copy_pass_by_ref)]
fn validate_height(height_cm: &u32) -> Result<Validation, CustomUserError> {
    Ok(to_validation(check_height(*height_cm)))
}

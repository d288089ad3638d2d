//! User profile collected by the meal prep form.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use super::protein::{ProteinTarget, protein_needs};

/// Accepted ages in years.
pub const AGE_RANGE: RangeInclusive<u32> = 16..=100;

/// Accepted body weights in kilograms.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted heights in centimetres.
pub const HEIGHT_RANGE: RangeInclusive<u32> = 120..=250;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Unknown gender: '{0}' (expected one of: {choices})", choices = choices(Gender::ALL))]
    UnknownGender(String),

    #[error(
        "Unknown activity level: '{0}' (expected one of: {choices})",
        choices = choices(ActivityLevel::ALL)
    )]
    UnknownActivityLevel(String),

    #[error(
        "Unknown dietary preference: '{0}' (expected one of: {choices})",
        choices = choices(DietPreference::ALL)
    )]
    UnknownDietPreference(String),
}

fn choices<T: fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Matches `input` against a label, ignoring case and treating `-`/`_` as spaces.
fn label_matches(input: &str, label: &str) -> bool {
    let normalized: String = input
        .trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    normalized.eq_ignore_ascii_case(label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: &[Self] = &[Self::Male, Self::Female];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Habitual physical exertion, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: &[Self] = &[
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        }
    }

    /// Parses an activity label, falling back to [`ActivityLevel::ExtremelyActive`]
    /// for anything unrecognised.
    ///
    /// The fallback mirrors the protein table, where the most active coefficient
    /// is also the default branch.
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or(Self::ExtremelyActive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietPreference {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
    Mediterranean,
}

impl DietPreference {
    pub const ALL: &[Self] = &[
        Self::Omnivore,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::Keto,
        Self::Paleo,
        Self::Mediterranean,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Omnivore => "Omnivore",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescatarian => "Pescatarian",
            Self::Keto => "Keto",
            Self::Paleo => "Paleo",
            Self::Mediterranean => "Mediterranean",
        }
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| label_matches(s, variant.label()))
                    .ok_or_else(|| ProfileError::$err(s.to_string()))
            }
        }
    };
}

impl_label_traits!(Gender, UnknownGender);
impl_label_traits!(ActivityLevel, UnknownActivityLevel);
impl_label_traits!(DietPreference, UnknownDietPreference);

/// A single meal prep request. Built from form input, used once.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    age: u32,
    weight_kg: f64,
    height_cm: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    diet_preference: DietPreference,
}

impl UserProfile {
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: u32,
        gender: Gender,
        activity_level: ActivityLevel,
        diet_preference: DietPreference,
    ) -> Result<Self, ProfileError> {
        check_age(age)?;
        check_weight(weight_kg)?;
        check_height(height_cm)?;

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            gender,
            activity_level,
            diet_preference,
        })
    }

    pub const fn age(&self) -> u32 {
        self.age
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub const fn height_cm(&self) -> u32 {
        self.height_cm
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub const fn diet_preference(&self) -> DietPreference {
        self.diet_preference
    }

    /// Daily protein target for this profile.
    pub fn protein_target(&self) -> ProteinTarget {
        protein_needs(self.weight_kg, self.age, self.gender, self.activity_level)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            weight_kg: 70.0,
            height_cm: 170,
            gender: Gender::default(),
            activity_level: ActivityLevel::default(),
            diet_preference: DietPreference::default(),
        }
    }
}

pub fn check_age(age: u32) -> Result<u32, ProfileError> {
    check_range("Age", age, &AGE_RANGE)
}

pub fn check_weight(weight_kg: f64) -> Result<f64, ProfileError> {
    check_range("Weight (kg)", weight_kg, &WEIGHT_RANGE)
}

pub fn check_height(height_cm: u32) -> Result<u32, ProfileError> {
    check_range("Height (cm)", height_cm, &HEIGHT_RANGE)
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<T, ProfileError>
where
    T: PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ProfileError::OutOfRange {
            field,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(
            UserProfile::new(
                16,
                30.0,
                120,
                Gender::Female,
                ActivityLevel::Sedentary,
                DietPreference::Keto
            )
            .is_ok()
        );
        assert!(
            UserProfile::new(
                100,
                200.0,
                250,
                Gender::Male,
                ActivityLevel::VeryActive,
                DietPreference::Paleo
            )
            .is_ok()
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let too_young = UserProfile::new(
            15,
            70.0,
            170,
            Gender::Male,
            ActivityLevel::Sedentary,
            DietPreference::Omnivore,
        );
        assert!(matches!(
            too_young,
            Err(ProfileError::OutOfRange { field: "Age", .. })
        ));

        let too_heavy = UserProfile::new(
            30,
            200.1,
            170,
            Gender::Male,
            ActivityLevel::Sedentary,
            DietPreference::Omnivore,
        );
        assert!(too_heavy.unwrap_err().to_string().contains("Weight"));

        let too_tall = UserProfile::new(
            30,
            70.0,
            251,
            Gender::Male,
            ActivityLevel::Sedentary,
            DietPreference::Omnivore,
        );
        assert!(too_tall.unwrap_err().to_string().contains("between 120 and 250"));
    }

    #[test]
    fn test_default_matches_form_defaults() {
        let profile = UserProfile::default();
        assert_eq!(profile.age(), 30);
        assert!((profile.weight_kg() - 70.0).abs() < f64::EPSILON);
        assert_eq!(profile.height_cm(), 170);
        assert_eq!(profile.gender(), Gender::Male);
        assert_eq!(profile.activity_level(), ActivityLevel::Sedentary);
        assert_eq!(profile.diet_preference(), DietPreference::Omnivore);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            "Moderately Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(
            "moderately-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!("VEGAN".parse::<DietPreference>().unwrap(), DietPreference::Vegan);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn test_parse_unknown_lists_choices() {
        let err = "couch potato".parse::<ActivityLevel>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("couch potato"));
        assert!(message.contains("Lightly Active"));

        assert!("carnivore".parse::<DietPreference>().is_err());
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_from_label_lossy_falls_back_to_extremely_active() {
        assert_eq!(
            ActivityLevel::from_label_lossy("Very Active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            ActivityLevel::from_label_lossy("Marathon Runner"),
            ActivityLevel::ExtremelyActive
        );
        assert_eq!(
            ActivityLevel::from_label_lossy(""),
            ActivityLevel::ExtremelyActive
        );
    }

    #[test]
    fn test_display_uses_labels() {
        assert_eq!(ActivityLevel::LightlyActive.to_string(), "Lightly Active");
        assert_eq!(DietPreference::Mediterranean.to_string(), "Mediterranean");
        assert_eq!(Gender::Male.to_string(), "Male");
    }
}

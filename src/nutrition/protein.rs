//! Daily protein target calculation.

use std::fmt;

use super::profile::{ActivityLevel, Gender};

/// Extra grams per kilogram for older adults.
const SENIOR_BONUS_PER_KG: f64 = 0.2;

/// Age from which [`SENIOR_BONUS_PER_KG`] applies.
const SENIOR_AGE: u32 = 65;

/// Daily protein intake goal in grams, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProteinTarget(f64);

impl ProteinTarget {
    pub const fn grams(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProteinTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl ActivityLevel {
    /// Grams of protein per kilogram of body weight per day.
    pub const fn protein_per_kg(self) -> f64 {
        match self {
            Self::Sedentary => 0.8,
            Self::LightlyActive => 1.0,
            Self::ModeratelyActive => 1.2,
            Self::VeryActive => 1.4,
            Self::ExtremelyActive => 1.6,
        }
    }
}

/// Computes the daily protein target.
///
/// The coefficient comes from the activity table, plus 0.2 g/kg from age 65.
/// The product with `weight_kg` is rounded to one decimal, half away from zero
/// (`70.25` becomes `70.3`).
///
/// `_gender` is accepted for parity with the form but does not change the result.
/// Ranges are not checked here; callers validate through [`super::UserProfile`].
pub fn protein_needs(
    weight_kg: f64,
    age: u32,
    _gender: Gender,
    activity_level: ActivityLevel,
) -> ProteinTarget {
    let mut per_kg = activity_level.protein_per_kg();
    if age >= SENIOR_AGE {
        per_kg += SENIOR_BONUS_PER_KG;
    }

    ProteinTarget(round_one_decimal(weight_kg * per_kg))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

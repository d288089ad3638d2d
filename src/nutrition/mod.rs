//! Profile model and protein target calculation for meal prep plans.

mod profile;
mod protein;

pub use profile::{
    AGE_RANGE, ActivityLevel, DietPreference, Gender, HEIGHT_RANGE, ProfileError, UserProfile,
    WEIGHT_RANGE, check_age, check_height, check_weight,
};
pub use protein::{ProteinTarget, protein_needs};

use crate::nutrition::{ActivityLevel, Gender, protein_needs};
use crate::ui::print_warning;

/// Prints the daily protein target.
///
/// Unrecognised activity labels are accepted and use the Extremely Active
/// coefficient, with a warning.
pub fn print_protein(weight_kg: f64, age: u32, gender: Gender, activity: &str) {
    let activity_level = activity.parse().unwrap_or_else(|_| {
        print_warning(&format!(
            "Unrecognized activity level '{activity}', using {}",
            ActivityLevel::ExtremelyActive
        ));
        ActivityLevel::from_label_lossy(activity)
    });

    let target = protein_needs(weight_kg, age, gender, activity_level);
    println!("Daily protein target: {target}g");
}

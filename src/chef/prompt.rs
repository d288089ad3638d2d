use crate::nutrition::{ProteinTarget, UserProfile};

pub const SYSTEM_PROMPT: &str = "You are Chef Maestro, a professional culinary tutor and expert nutritionist. \
Your role is to assist users with cooking techniques, ingredient substitutions, recipe customization, \
food science concepts, and personalized meal planning based on their dietary preferences and protein needs. \
Always provide well-structured and concise answers while maintaining a warm and approachable tone. \
When relevant, break down your answers into steps, use bullet points for clarity, and include helpful tips or examples.

For example:
1. **Introduction**: Start by briefly summarizing the topic.
2. **Step-by-Step Guidance**: Provide clear steps for recipes or meal prep.
3. **Tips and Tricks**: Share additional tips or common mistakes to avoid.

Be engaging, professional, and encouraging. \
Ensure your responses inspire creativity in the kitchen while meeting nutritional goals.";

/// Frames a user message with the Chef Maestro persona.
///
/// The message is inserted verbatim.
pub fn build_freeform_prompt(question: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nUser: {question}\n\nChef Maestro:")
}

/// Builds the meal prep request for a profile and its protein target.
pub fn build_meal_prep_prompt(profile: &UserProfile, protein_target: ProteinTarget) -> String {
    let diet = profile.diet_preference();

    format!(
        "Please create a personalized daily meal prep plan for me with the following requirements:

**Personal Information:**
- Age: {age} years
- Weight: {weight:?} kg
- Height: {height} cm
- Gender: {gender}
- Activity Level: {activity}
- Dietary Preference: {diet}

**Nutritional Goals:**
- Daily Protein Target: {protein_target}g

Please provide:
1. A complete daily meal plan (breakfast, lunch, dinner, and 2 snacks)
2. Protein content breakdown for each meal
3. Preparation instructions for each meal
4. Shopping list for all ingredients
5. Any tips for meal prep and storage

Make sure all meals align with my {diet} dietary preference and help me reach my daily protein goal of {protein_target}g.",
        age = profile.age(),
        weight = profile.weight_kg(),
        height = profile.height_cm(),
        gender = profile.gender(),
        activity = profile.activity_level(),
    )
}

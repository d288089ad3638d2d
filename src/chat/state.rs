use crate::chef::{TextGenerator, ask_chef, build_meal_prep_prompt};
use crate::nutrition::{ProteinTarget, UserProfile};

pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question before submitting.";

/// Outcome of submitting the free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Chef Maestro answered (possibly with an error message as the answer).
    Answered(String),
    /// Rejected locally; nothing was sent.
    Warning(&'static str),
}

/// A generated meal prep plan and the target it was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub profile: UserProfile,
    pub protein_target: ProteinTarget,
    pub plan: String,
}

/// State of one interactive session.
///
/// Holds only the latest question/answer pair and the latest meal plan.
#[derive(Debug, Default)]
pub struct SessionState {
    question: String,
    answer: String,
    meal_plan: Option<MealPlan>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub const fn meal_plan(&self) -> Option<&MealPlan> {
        self.meal_plan.as_ref()
    }

    /// The profile of the last meal plan, used to pre-fill the form.
    pub fn last_profile(&self) -> Option<&UserProfile> {
        self.meal_plan.as_ref().map(|plan| &plan.profile)
    }

    /// Sends a free-text question unless it is blank.
    pub async fn submit_question<G: TextGenerator>(
        &mut self,
        generator: &G,
        input: &str,
    ) -> Submission {
        if input.trim().is_empty() {
            return Submission::Warning(EMPTY_QUESTION_WARNING);
        }

        let answer = ask_chef(generator, input).await;
        input.clone_into(&mut self.question);
        answer.clone_into(&mut self.answer);
        Submission::Answered(answer)
    }

    /// Clears the free-text question and answer. The meal plan is kept.
    pub fn clear(&mut self) {
        self.question.clear();
        self.answer.clear();
    }

    /// Computes the protein target and requests a meal plan for `profile`.
    pub async fn submit_profile<G: TextGenerator>(
        &mut self,
        generator: &G,
        profile: UserProfile,
    ) -> &MealPlan {
        let protein_target = profile.protein_target();
        let prompt = build_meal_prep_prompt(&profile, protein_target);
        let plan = ask_chef(generator, &prompt).await;

        self.meal_plan.insert(MealPlan {
            profile,
            protein_target,
            plan,
        })
    }
}

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::form::prompt_profile;
use super::state::{SessionState, Submission};
use super::ui;
use crate::chef::ChefClient;
use crate::config::ResolvedConfig;
use crate::nutrition::UserProfile;
use crate::ui::{Spinner, Style, handle_prompt_cancellation, is_prompt_cancelled, print_answer};

/// An interactive Chef Maestro session.
///
/// Plain lines are cooking questions; slash commands open the meal prep
/// form and manage the session.
pub struct ChatSession {
    config: ResolvedConfig,
    client: ChefClient,
    state: SessionState,
}

impl ChatSession {
    pub fn new(config: ResolvedConfig, client: ChefClient) -> Self {
        Self {
            config,
            client,
            state: SessionState::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let line = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask a culinary question, /meal for a meal prep plan, /help for commands")
                .prompt();

            match line {
                Ok(line) => match parse_input(&line) {
                    Input::Question(question) => self.ask(&question).await,
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Answer => ui::print_last(&self.state),
            SlashCommand::Clear => {
                self.state.clear();
                println!("{} Question and answer cleared\n", Style::success("✓"));
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Meal => self.meal_prep().await?,
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        Ok(true)
    }

    async fn ask(&mut self, question: &str) {
        let spinner = (!question.trim().is_empty())
            .then(|| Spinner::new("Chef Maestro is cooking up an answer..."));
        let outcome = self.state.submit_question(&self.client, question).await;
        if let Some(spinner) = &spinner {
            spinner.stop();
        }

        match outcome {
            Submission::Answered(answer) => print_answer("Here's your answer:", &answer),
            Submission::Warning(message) => ui::print_warning(message),
        }
    }

    async fn meal_prep(&mut self) -> Result<()> {
        let defaults = self
            .state
            .last_profile()
            .cloned()
            .unwrap_or_default();

        println!("{}", Style::header("Get Your Personalized Meal Prep Plan"));
        let Some(profile) = handle_prompt_cancellation(|| prompt_profile(&defaults))? else {
            return Ok(());
        };

        self.generate_meal_plan(profile).await;
        Ok(())
    }

    async fn generate_meal_plan(&mut self, profile: UserProfile) {
        ui::print_protein_target(profile.protein_target());

        let spinner = Spinner::new("Chef Maestro is preparing your personalized meal plan...");
        let meal_plan = self.state.submit_profile(&self.client, profile).await;
        spinner.stop();

        print_answer("Here's your personalized meal prep plan:", &meal_plan.plan);
    }
}

use anyhow::Result;
use std::path::PathBuf;

use super::load_client;
use crate::chat::EMPTY_QUESTION_WARNING;
use crate::chef::{ask_chef, build_freeform_prompt};
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::ui::{Spinner, print_answer, print_warning};

pub struct AskOptions {
    pub question: Option<String>,
    pub file: Option<PathBuf>,
    pub print_prompt: bool,
}

pub async fn run_ask(options: AskOptions, resolve: &ResolveOptions) -> Result<()> {
    let question = InputReader::read(options.question.as_deref(), options.file.as_deref())?;

    if question.trim().is_empty() {
        print_warning(EMPTY_QUESTION_WARNING);
        return Ok(());
    }

    if options.print_prompt {
        println!("{}", build_freeform_prompt(&question));
        return Ok(());
    }

    let (_, client) = load_client(resolve)?;

    let spinner = Spinner::new("Chef Maestro is cooking up an answer...");
    let answer = ask_chef(&client, &question).await;
    spinner.stop();

    print_answer("Here's your answer:", &answer);
    Ok(())
}

use anyhow::Result;

use super::load_client;
use crate::chat::ChatSession;
use crate::config::ResolveOptions;

pub async fn run_chat(options: &ResolveOptions) -> Result<()> {
    let (config, client) = load_client(options)?;
    let mut session = ChatSession::new(config, client);
    session.run().await
}

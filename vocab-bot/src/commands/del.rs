//! Del command - deletes words by their position in the last shown list

use super::CommandContext;
use super::positions::{parse_positions, split_by_positions};
use crate::error::VocabError;

/// Execute the del command
pub async fn execute(args: &str, chat_id: &str, ctx: &CommandContext) -> Result<String, VocabError> {
    let all_ids = ctx.sessions.get(chat_id).await;
    let positions = parse_positions(args, all_ids.len())?;
    let (to_delete, kept) = split_by_positions(&all_ids, &positions);

    ctx.store.delete_words(&to_delete).await?;
    log::info!("Del: chat {} deleted {} word(s)", chat_id, to_delete.len());

    // Remaining words shift up so positions match the list the user now sees
    ctx.sessions.set(chat_id, kept).await;

    Ok("Words deleted".to_string())
}

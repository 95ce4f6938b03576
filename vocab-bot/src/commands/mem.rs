//! Mem command - marks listed positions as memorized and shows what is left

use super::CommandContext;
use super::format::plain_list;
use super::positions::{parse_positions, split_by_positions};
use crate::error::VocabError;

/// Execute the mem command.
///
/// The conversation's list is not rewritten: positions keep pointing at the
/// words shown by the last `/last`, memorized or not.
pub async fn execute(args: &str, chat_id: &str, ctx: &CommandContext) -> Result<String, VocabError> {
    let all_ids = ctx.sessions.get(chat_id).await;
    let positions = parse_positions(args, all_ids.len())?;
    let (memorized, to_repeat) = split_by_positions(&all_ids, &positions);

    ctx.store.update_scores(&memorized).await?;
    log::info!(
        "Mem: chat {} memorized {} word(s), {} left to repeat",
        chat_id,
        memorized.len(),
        to_repeat.len()
    );

    let words = ctx.store.get_list(all_ids.len() as i64).await?;
    let remaining: Vec<_> = words.iter().filter(|w| to_repeat.contains(&w.id)).collect();

    if remaining.is_empty() {
        return Ok("All words memorized".to_string());
    }

    Ok(plain_list(remaining, |w| format!("{} - {}", w.word, w.translation)))
}

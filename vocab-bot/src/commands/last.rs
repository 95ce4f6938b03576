//! Last command - shows the words still being learned and remembers their order

use super::CommandContext;
use super::format::{numbered_list, score_percent};
use crate::error::VocabError;
use std::num::IntErrorKind;

/// Words shown when no (or an unparsable) limit is given
pub const DEFAULT_LIMIT: i64 = 5;

/// `/last 10` → 10; anything unparsable falls back to the default.
/// An integer too large for `i64` means no limit.
pub fn parse_limit(args: &str) -> i64 {
    match args.trim().parse::<i64>() {
        Ok(limit) => limit,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => 0,
        Err(_) => DEFAULT_LIMIT,
    }
}

/// Execute the last command
pub async fn execute(args: &str, chat_id: &str, ctx: &CommandContext) -> Result<String, VocabError> {
    let limit = parse_limit(args);
    let words = ctx.store.get_list(limit).await?;

    ctx.sessions
        .set(chat_id, words.iter().map(|w| w.id).collect())
        .await;

    if words.is_empty() {
        return Ok("No words to repeat".to_string());
    }

    Ok(numbered_list(&words, |w| {
        format!("{} - {}%", w.word, score_percent(w.score, ctx.threshold))
    }))
}

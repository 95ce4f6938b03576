//! Stats command - vocabulary totals

use super::CommandContext;
use crate::error::VocabError;

pub async fn execute(ctx: &CommandContext) -> Result<String, VocabError> {
    let stats = ctx.store.stats().await?;
    Ok(format!(
        "Words: {}\nMemorized: {}\nIn progress: {}\nMemorization threshold: {}",
        stats.total_words,
        stats.memorized_count,
        stats.in_progress_count(),
        ctx.threshold
    ))
}

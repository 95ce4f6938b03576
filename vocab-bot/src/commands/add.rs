//! Add command - stores a new word/translation pair

use super::CommandContext;
use crate::error::VocabError;
use vocabulary_types::Word;

const USAGE: &str = "Usage: /add <word> <translation>";

/// Split `<word> <translation>`; anything but exactly two tokens is rejected
fn parse_word(args: &str) -> Result<Word, VocabError> {
    match args.split_whitespace().collect::<Vec<_>>().as_slice() {
        [word, translation] => Ok(Word::new(*word, *translation)),
        _ => Err(VocabError::parse(USAGE)),
    }
}

/// Execute the add command
pub async fn execute(args: &str, ctx: &CommandContext) -> Result<String, VocabError> {
    let word = parse_word(args)?;
    ctx.store.push(word).await?;
    Ok("World added".to_string())
}

//! Vocabulary bot command handling

mod add;
mod del;
mod format;
mod help;
mod last;
mod mem;
mod positions;
mod stats;


use std::sync::Arc;

use crate::error::VocabError;
use crate::session::SessionStore;
use crate::vocabulary::VocabularyStore;

/// Dependencies shared by every command
pub struct CommandContext {
    pub store: Arc<dyn VocabularyStore>,
    pub sessions: Arc<dyn SessionStore>,
    /// Score at which a word counts as memorized, used for progress display
    pub threshold: u32,
}

impl CommandContext {
    pub fn new(
        store: Arc<dyn VocabularyStore>,
        sessions: Arc<dyn SessionStore>,
        threshold: u32,
    ) -> Self {
        Self {
            store,
            sessions,
            threshold,
        }
    }
}

/// Available commands, each carrying its raw argument string
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a word: `/add cat meow`
    Add(String),
    /// List words to repeat: `/last [limit]`
    Last(String),
    /// Mark positions memorized: `/mem 1 3`
    Mem(String),
    /// Delete positions: `/del 2`
    Del(String),
    /// Vocabulary totals: `/stats`
    Stats,
    /// Show help: `/help`, `/start`
    Help,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Last(_) => "last",
            Command::Mem(_) => "mem",
            Command::Del(_) => "del",
            Command::Stats => "stats",
            Command::Help => "help",
        }
    }
}

/// Parse a command from message text.
///
/// Accepts `/name args` and `/name@botname args`; returns `None` for plain
/// text and unknown commands.
pub fn parse(text: &str) -> Option<Command> {
    let text = text.trim();
    let rest = text.strip_prefix('/')?;

    let (token, args) = match rest.split_once(char::is_whitespace) {
        Some((token, args)) => (token, args.trim().to_string()),
        None => (rest, String::new()),
    };
    let name = token.split('@').next().unwrap_or(token).to_lowercase();

    log::debug!("Commands: Parsing '{}' -> /{} args={:?}", text, name, args);

    match name.as_str() {
        "add" => Some(Command::Add(args)),
        "last" => Some(Command::Last(args)),
        "mem" => Some(Command::Mem(args)),
        "del" => Some(Command::Del(args)),
        "stats" => Some(Command::Stats),
        "help" | "start" => Some(Command::Help),
        _ => {
            log::debug!("Commands: Unknown command '/{}'", name);
            None
        }
    }
}

/// Execute a command for one conversation and return the reply text.
///
/// Input errors become their own message; storage errors are logged and
/// reported as a generic `Error`.
pub async fn execute(cmd: Command, chat_id: &str, ctx: &CommandContext) -> String {
    let name = cmd.name();
    log::info!("Commands: /{} in chat {}", name, chat_id);

    let result = match cmd {
        Command::Add(args) => add::execute(&args, ctx).await,
        Command::Last(args) => last::execute(&args, chat_id, ctx).await,
        Command::Mem(args) => mem::execute(&args, chat_id, ctx).await,
        Command::Del(args) => del::execute(&args, chat_id, ctx).await,
        Command::Stats => stats::execute(ctx).await,
        Command::Help => Ok(help::execute()),
    };

    match result {
        Ok(reply) => reply,
        Err(VocabError::Parse(msg)) => {
            log::warn!("Commands: /{} in chat {} rejected: {}", name, chat_id, msg);
            msg
        }
        Err(e) => {
            log::error!("Commands: /{} in chat {} failed: {}", name, chat_id, e);
            "Error".to_string()
        }
    }
}

/// Reply for messages that are not a known command
pub fn help_message() -> String {
    help::execute()
}

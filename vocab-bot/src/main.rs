//! Vocabulary Bot: Telegram flashcard trainer.
//!
//! Users add word/translation pairs, review the words they have not
//! memorized yet, and mark or delete them by their position in the list.

use dotenv::dotenv;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

mod channels;
mod commands;
mod config;
mod db;
mod error;
mod session;
mod vocabulary;

use channels::telegram::{self, AccessFilter};
use commands::CommandContext;
use config::Config;
use db::Database;
use session::MemorySessionStore;
use vocabulary::SqliteVocabulary;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let db_path = config.database_path();
    if db_path != ":memory:" {
        if let Some(dir) = Path::new(&db_path).parent() {
            std::fs::create_dir_all(dir).expect("Failed to create database directory");
        }
    }

    log::info!("Initializing database at {}", db_path);
    let db = Arc::new(Database::new(&db_path).expect("Failed to initialize database"));

    log::info!(
        "Memorization threshold: {}, session idle timeout: {}s",
        config.memorization_threshold,
        config.session_idle_secs
    );
    let store = Arc::new(SqliteVocabulary::new(db, config.memorization_threshold));
    let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(
        config.session_idle_secs,
    )));
    let ctx = Arc::new(CommandContext::new(
        store,
        sessions,
        config.memorization_threshold,
    ));

    if config.telegram_access_id.is_none() {
        log::warn!("TELEGRAM_ACCESS_ID not set, the bot will answer anyone");
    }
    let access = AccessFilter::new(config.telegram_access_id);

    telegram::start_telegram_listener(&config.telegram_api_token, access, ctx).await;
}

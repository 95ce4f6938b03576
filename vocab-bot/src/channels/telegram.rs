//! Telegram channel - long-polling listener that feeds messages to the command handlers

use crate::channels::util::split_message;
use crate::commands::{self, CommandContext};
use std::sync::Arc;
use teloxide::dptree;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;

/// Telegram rejects messages longer than this
const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

/// Restricts the bot to a single Telegram user when configured
#[derive(Debug, Clone, Copy)]
pub struct AccessFilter {
    allowed_user_id: Option<u64>,
}

impl AccessFilter {
    pub fn new(allowed_user_id: Option<u64>) -> Self {
        Self { allowed_user_id }
    }

    pub fn allows(&self, user_id: Option<u64>) -> bool {
        match self.allowed_user_id {
            None => true,
            Some(allowed) => user_id == Some(allowed),
        }
    }
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    ctx: Arc<CommandContext>,
    access: AccessFilter,
) -> ResponseResult<()> {
    // Stickers, photos and other non-text updates carry no command
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let user_id = msg.from().map(|user| user.id.0);
    let chat_id = msg.chat.id.to_string();

    if !access.allows(user_id) {
        log::warn!(
            "Telegram: Access denied for user {:?} in chat {}",
            user_id,
            chat_id
        );
        send_reply(&bot, &msg, "Access denied").await;
        return Ok(());
    }

    let reply = match commands::parse(text) {
        Some(cmd) => commands::execute(cmd, &chat_id, &ctx).await,
        None => commands::help_message(),
    };

    send_reply(&bot, &msg, &reply).await;
    Ok(())
}

/// Reply to `msg`, splitting long text. Send failures are logged and dropped.
async fn send_reply(bot: &Bot, msg: &Message, text: &str) {
    for chunk in split_message(text, TELEGRAM_MAX_MESSAGE_LEN) {
        if let Err(e) = bot
            .send_message(msg.chat.id, chunk)
            .reply_to_message_id(msg.id)
            .await
        {
            log::error!("Telegram: Failed to send message to chat {}: {}", msg.chat.id, e);
            return;
        }
    }
}

/// Run the Telegram long-polling dispatcher until Ctrl-C.
///
/// Updates from one chat are handled one at a time; different chats run
/// concurrently.
pub async fn start_telegram_listener(bot_token: &str, access: AccessFilter, ctx: Arc<CommandContext>) {
    log::info!("Starting Telegram listener");
    log::info!("Telegram: Token length = {}", bot_token.len());

    let bot = Bot::new(bot_token);

    match bot.get_me().await {
        Ok(me) => log::info!("Telegram: Bot connected as @{}", me.username()),
        Err(e) => log::warn!("Telegram: Could not fetch bot info: {}", e),
    }

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx, access])
        .default_handler(|update| async move {
            log::debug!("Telegram: Ignoring update {:?}", update.kind);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Telegram listener stopped");
}

use crate::bot::router::Command;
use teloxide::dispatching::HandlerExt;
use teloxide::{dptree, prelude::*, types::Update, utils::command::BotCommands};
use tracing::{error, info, warn};

pub mod handlers;
pub mod keyboards;
pub mod reply;
pub mod router;
pub mod texts;

pub async fn run_bot(bot: Bot, state: crate::AppState) -> anyhow::Result<()> {
    info!("Starting bot dispatcher...");

    std::panic::set_hook(Box::new(|info| {
        error!("CRITICAL BOT PANIC: {:?}", info);
    }));

    let me = bot.get_me().await.map_err(|e| {
        error!("Bot failed to connect to Telegram: {}", e);
        anyhow::anyhow!("Telegram rejected the bot token or is unreachable: {}", e)
    })?;
    info!(
        "Bot connected as: @{}",
        me.username.clone().unwrap_or_else(|| "unknown".into())
    );

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register command list: {}", e);
    }

    let message_handler = Update::filter_message()
        .branch(
            dptree::filter(|msg: Message| msg.successful_payment().is_some())
                .endpoint(handlers::payment::successful_payment_handler),
        )
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::command::command_handler),
        );
    let callback_handler =
        Update::filter_callback_query().endpoint(handlers::callback::callback_handler);
    let pre_checkout_handler =
        Update::filter_pre_checkout_query().endpoint(handlers::payment::pre_checkout_handler);

    Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(message_handler)
            .branch(callback_handler)
            .branch(pre_checkout_handler),
    )
    .dependencies(dptree::deps![state])
    .default_handler(|upd: std::sync::Arc<Update>| async move {
        info!("Unhandled update: {:?}", upd.kind);
    })
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    info!("Bot dispatcher stopped");
    Ok(())
}

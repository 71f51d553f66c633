use crate::bot::handlers::payment::invoice_reply;
use crate::bot::keyboards::buy_keyboard;
use crate::bot::reply::{deliver, Reply, ReplyTarget};
use crate::bot::router::{route_callback, CallbackAction};
use crate::bot::texts;
use crate::models::media::select_media;
use crate::AppState;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{debug, error, info, warn};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
) -> Result<(), teloxide::RequestError> {
    info!("Received callback: {:?}", q.data);

    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!("Failed to answer callback query: {}", e);
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let target = ReplyTarget::for_callback(&q);

    let reply = match route_callback(data) {
        Some((CallbackAction::ProductDetail, arg)) => product_detail_reply(&state, arg).await,
        Some((CallbackAction::Pay, arg)) => invoice_reply(&state, arg, true).await,
        None => {
            debug!("No handler for callback payload {:?}", data);
            return Ok(());
        }
    };

    deliver(&bot, target, reply).await;
    Ok(())
}

pub async fn product_detail_reply(state: &AppState, arg: &str) -> Reply {
    let product = match state.catalog.get_product_by_arg(arg).await {
        Ok(product) => product,
        Err(e) if e.is_not_found() => {
            debug!("Detail requested for unknown product: {}", e);
            return Reply::edit(texts::NOT_FOUND);
        }
        Err(e) => {
            error!("Failed to load product {:?}: {}", arg, e);
            return Reply::edit(texts::DATA_FAILED);
        }
    };

    let caption = texts::detail_caption(&product, &state.config.currency_label);
    let keyboard = Some(buy_keyboard(product.id));

    match select_media(&product) {
        Some(media) => Reply::Media {
            media,
            caption,
            keyboard,
        },
        None => Reply::EditText {
            text: caption,
            keyboard,
        },
    }
}

use crate::bot::handlers::payment::invoice_reply;
use crate::bot::keyboards::products_keyboard;
use crate::bot::reply::{deliver, AlbumItem, Reply, ReplyTarget};
use crate::bot::router::Command;
use crate::bot::texts;
use crate::config::ListingMode;
use crate::models::media::select_media;
use crate::AppState;
use teloxide::prelude::*;
use tracing::{error, info};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: AppState,
) -> Result<(), teloxide::RequestError> {
    info!(chat_id = msg.chat.id.0, "Received command: {:?}", cmd);
    let target = ReplyTarget::chat(msg.chat.id);

    let reply = match cmd {
        Command::Start => Reply::text(texts::GREETING),
        Command::Products | Command::List => products_reply(&state).await,
        Command::AllVideos => all_media_reply(&state).await,
        Command::Pay(arg) if arg.trim().is_empty() => Reply::text(texts::PAY_USAGE),
        Command::Pay(arg) => invoice_reply(&state, &arg, false).await,
    };

    deliver(&bot, target, reply).await;
    Ok(())
}

pub async fn products_reply(state: &AppState) -> Reply {
    let products = match state.catalog.list_products().await {
        Ok(products) => products,
        Err(e) => {
            error!("Failed to load products: {}", e);
            return Reply::text(texts::PRODUCTS_FAILED);
        }
    };

    if products.is_empty() {
        return Reply::text(texts::NO_PRODUCTS);
    }

    let label = &state.config.currency_label;
    match state.config.listing_mode {
        ListingMode::Text => Reply::text(
            products
                .iter()
                .map(|p| texts::price_line(p, label))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        ListingMode::Buttons => Reply::Text {
            text: texts::PRODUCTS_HEADER.to_string(),
            keyboard: Some(products_keyboard(&products, label)),
        },
    }
}

pub async fn all_media_reply(state: &AppState) -> Reply {
    let products = match state.catalog.list_products().await {
        Ok(products) => products,
        Err(e) => {
            error!("Failed to load products for media: {}", e);
            return Reply::text(texts::DATA_FAILED);
        }
    };

    let label = &state.config.currency_label;
    let album: Vec<AlbumItem> = products
        .iter()
        .filter_map(|p| {
            select_media(p).map(|media| AlbumItem {
                media,
                caption: texts::price_line(p, label),
            })
        })
        .collect();

    if album.is_empty() {
        Reply::text(texts::NO_MEDIA)
    } else {
        Reply::Album(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::MediaKind;
    use crate::testing::{failing_state, product, state};
    use teloxide::types::InlineKeyboardButtonKind;

    #[tokio::test]
    async fn empty_store_lists_no_products() {
        for mode in [ListingMode::Text, ListingMode::Buttons] {
            assert_eq!(
                products_reply(&state(vec![], mode)).await,
                Reply::text("Нет товаров.")
            );
        }
    }

    #[tokio::test]
    async fn text_listing_has_one_line_per_product_in_store_order() {
        let st = state(
            vec![product(1, "Pen", "150.00"), product(2, "Ink", "12.5")],
            ListingMode::Text,
        );
        assert_eq!(
            products_reply(&st).await,
            Reply::text("Pen - 150.00 тг\nInk - 12.50 тг")
        );
    }

    #[tokio::test]
    async fn button_listing_links_each_product_to_its_detail() {
        let st = state(
            vec![product(1, "Pen", "150.00"), product(9, "Ink", "3")],
            ListingMode::Buttons,
        );
        let Reply::Text {
            text,
            keyboard: Some(keyboard),
        } = products_reply(&st).await
        else {
            panic!("expected a keyboard reply");
        };

        assert_eq!(text, "Список товаров:");
        let buttons: Vec<_> = keyboard.inline_keyboard.iter().flatten().collect();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].text, "Pen - 150.00 тг");
        assert_eq!(
            buttons[0].kind,
            InlineKeyboardButtonKind::CallbackData("product_1".into())
        );
        assert_eq!(
            buttons[1].kind,
            InlineKeyboardButtonKind::CallbackData("product_9".into())
        );
    }

    #[tokio::test]
    async fn store_errors_become_a_failure_message() {
        assert_eq!(
            products_reply(&failing_state()).await,
            Reply::text("Произошла ошибка при загрузке товаров.")
        );
        assert_eq!(
            all_media_reply(&failing_state()).await,
            Reply::text("Произошла ошибка при загрузке данных.")
        );
    }

    #[tokio::test]
    async fn album_prefers_video_and_skips_products_without_media() {
        let mut both = product(1, "Pen", "150.00");
        both.video_url = Some("https://cdn.test/pen.mp4".into());
        both.image_url = Some("https://cdn.test/pen.jpg".into());
        let mut photo = product(2, "Ink", "10.00");
        photo.image_url = Some("https://cdn.test/ink.jpg".into());
        let bare = product(3, "Clip", "1.00");

        let Reply::Album(items) = all_media_reply(&state(vec![both, bare, photo], ListingMode::Text)).await
        else {
            panic!("expected an album");
        };

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].media.kind, MediaKind::Video);
        assert_eq!(items[0].caption, "Pen - 150.00 тг");
        assert_eq!(items[1].media.kind, MediaKind::Photo);
        assert_eq!(items[1].caption, "Ink - 10.00 тг");
    }

    #[tokio::test]
    async fn products_without_media_yield_no_media_message() {
        let st = state(vec![product(1, "Pen", "150.00")], ListingMode::Text);
        assert_eq!(
            all_media_reply(&st).await,
            Reply::text("Нет доступных видео или изображений для продуктов.")
        );
    }

    #[tokio::test]
    async fn empty_store_has_no_media_available() {
        assert_eq!(
            all_media_reply(&state(vec![], ListingMode::Text)).await,
            Reply::text("Нет доступных видео или изображений для продуктов.")
        );
    }
}

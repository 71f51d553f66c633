use crate::models::media::{Media, MediaKind};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQuery, ChatId, InlineKeyboardMarkup, InputFile, InputMedia, InputMediaPhoto,
    InputMediaVideo, LabeledPrice, MaybeInaccessibleMessage, MessageId,
};
use tracing::error;

/// Most album items Telegram accepts in one request.
pub const ALBUM_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRequest {
    pub title: String,
    pub description: String,
    pub payload: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub provider_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumItem {
    pub media: Media,
    pub caption: String,
}

/// What a handler wants sent back. Built without touching the network so
/// handlers can be tested against an in-memory store.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    /// Replaces the text of the message the callback came from.
    EditText {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Media {
        media: Media,
        caption: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Album(Vec<AlbumItem>),
    Invoice(InvoiceRequest),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn edit(text: impl Into<String>) -> Self {
        Self::EditText {
            text: text.into(),
            keyboard: None,
        }
    }
}

/// How the message a callback came from can be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Text message: the text is replaced.
    Text,
    /// Photo or video: only the caption can be replaced.
    Caption,
}

/// Where a reply goes: the chat, and the message to edit if there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTarget {
    pub chat_id: ChatId,
    pub edit: Option<(MessageId, EditMode)>,
}

impl ReplyTarget {
    pub fn chat(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            edit: None,
        }
    }

    pub fn message(chat_id: ChatId, message_id: MessageId, mode: EditMode) -> Self {
        Self {
            chat_id,
            edit: Some((message_id, mode)),
        }
    }

    pub fn for_callback(q: &CallbackQuery) -> Self {
        Self::callback_origin(ChatId(q.from.id.0 as i64), q.message.as_ref())
    }

    /// Inline-mode callbacks carry no message, so replies go to the user's
    /// private chat. Inaccessible messages are answered in their chat.
    pub fn callback_origin(user_chat: ChatId, message: Option<&MaybeInaccessibleMessage>) -> Self {
        let Some(message) = message else {
            return Self::chat(user_chat);
        };
        match message.regular_message() {
            Some(msg) if msg.text().is_some() => Self::message(msg.chat.id, msg.id, EditMode::Text),
            Some(msg) => Self::message(msg.chat.id, msg.id, EditMode::Caption),
            None => Self::chat(message.chat().id),
        }
    }
}

/// One request's worth of album items.
#[derive(Debug, PartialEq)]
pub enum AlbumBatch<'a> {
    /// Media groups need two items, so a lone item goes out on its own.
    Single(&'a AlbumItem),
    Group(&'a [AlbumItem]),
}

pub fn album_batches(items: &[AlbumItem]) -> Vec<AlbumBatch<'_>> {
    items
        .chunks(ALBUM_LIMIT)
        .map(|chunk| match chunk {
            [single] => AlbumBatch::Single(single),
            group => AlbumBatch::Group(group),
        })
        .collect()
}

/// Sends a reply. Failures are logged, never propagated to the dispatcher.
pub async fn deliver(bot: &Bot, target: ReplyTarget, reply: Reply) {
    if let Err(e) = send(bot, target, reply).await {
        error!(chat_id = target.chat_id.0, "Failed to deliver reply: {}", e);
    }
}

async fn send(bot: &Bot, target: ReplyTarget, reply: Reply) -> Result<(), teloxide::RequestError> {
    let chat_id = target.chat_id;
    match reply {
        Reply::Text { text, keyboard } => send_text(bot, chat_id, text, keyboard).await,
        Reply::EditText { text, keyboard } => match target.edit {
            Some((message_id, EditMode::Text)) => {
                let mut req = bot.edit_message_text(chat_id, message_id, text);
                if let Some(kb) = keyboard {
                    req = req.reply_markup(kb);
                }
                req.await.map(|_| ())
            }
            Some((message_id, EditMode::Caption)) => {
                let mut req = bot.edit_message_caption(chat_id, message_id).caption(text);
                if let Some(kb) = keyboard {
                    req = req.reply_markup(kb);
                }
                req.await.map(|_| ())
            }
            None => send_text(bot, chat_id, text, keyboard).await,
        },
        Reply::Media {
            media,
            caption,
            keyboard,
        } => send_media(bot, chat_id, media, caption, keyboard).await,
        Reply::Album(items) => {
            for batch in album_batches(&items) {
                match batch {
                    AlbumBatch::Single(item) => {
                        send_media(bot, chat_id, item.media.clone(), item.caption.clone(), None)
                            .await?;
                    }
                    AlbumBatch::Group(group) => {
                        bot.send_media_group(chat_id, group.iter().map(input_media))
                            .await?;
                    }
                }
            }
            Ok(())
        }
        Reply::Invoice(invoice) => bot
            .send_invoice(
                chat_id,
                invoice.title,
                invoice.description,
                invoice.payload,
                invoice.currency,
                invoice.prices,
            )
            .provider_token(invoice.provider_token)
            .is_flexible(false)
            .await
            .map(|_| ()),
    }
}

async fn send_text(
    bot: &Bot,
    chat_id: ChatId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<(), teloxide::RequestError> {
    let mut req = bot.send_message(chat_id, text);
    if let Some(kb) = keyboard {
        req = req.reply_markup(kb);
    }
    req.await.map(|_| ())
}

async fn send_media(
    bot: &Bot,
    chat_id: ChatId,
    media: Media,
    caption: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<(), teloxide::RequestError> {
    let file = InputFile::url(media.url);
    match media.kind {
        MediaKind::Video => {
            let mut req = bot.send_video(chat_id, file).caption(caption);
            if let Some(kb) = keyboard {
                req = req.reply_markup(kb);
            }
            req.await.map(|_| ())
        }
        MediaKind::Photo => {
            let mut req = bot.send_photo(chat_id, file).caption(caption);
            if let Some(kb) = keyboard {
                req = req.reply_markup(kb);
            }
            req.await.map(|_| ())
        }
    }
}

fn input_media(item: &AlbumItem) -> InputMedia {
    let file = InputFile::url(item.media.url.clone());
    match item.media.kind {
        MediaKind::Video => InputMedia::Video(InputMediaVideo::new(file).caption(item.caption.clone())),
        MediaKind::Photo => InputMedia::Photo(InputMediaPhoto::new(file).caption(item.caption.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;

    fn items(n: usize) -> Vec<AlbumItem> {
        (0..n)
            .map(|i| AlbumItem {
                media: Media {
                    kind: MediaKind::Photo,
                    url: Url::parse(&format!("https://cdn.test/{}.jpg", i)).unwrap(),
                },
                caption: format!("item {}", i),
            })
            .collect()
    }

    fn shape(batches: &[AlbumBatch<'_>]) -> Vec<usize> {
        batches
            .iter()
            .map(|b| match b {
                AlbumBatch::Single(_) => 1,
                AlbumBatch::Group(group) => group.len(),
            })
            .collect()
    }

    #[test]
    fn albums_are_split_into_requests_of_at_most_ten() {
        let one = items(1);
        let batches = album_batches(&one);
        assert_eq!(batches, vec![AlbumBatch::Single(&one[0])]);

        let ten = items(10);
        assert_eq!(album_batches(&ten), vec![AlbumBatch::Group(&ten[..])]);

        let eleven = items(11);
        let batches = album_batches(&eleven);
        assert_eq!(shape(&batches), vec![10, 1]);
        assert_eq!(batches[1], AlbumBatch::Single(&eleven[10]));

        let twenty_one = items(21);
        let batches = album_batches(&twenty_one);
        assert_eq!(shape(&batches), vec![10, 10, 1]);
        assert!(matches!(batches[2], AlbumBatch::Single(item) if item.caption == "item 20"));

        assert!(album_batches(&[]).is_empty());
    }

    fn origin(extra: serde_json::Value) -> MaybeInaccessibleMessage {
        let mut message = json!({
            "message_id": 5,
            "date": 1_700_000_000,
            "chat": { "id": 42, "type": "private", "first_name": "Ann" }
        });
        for (k, v) in extra.as_object().unwrap() {
            message[k] = v.clone();
        }
        serde_json::from_value(message).unwrap()
    }

    #[test]
    fn callback_without_message_replies_in_private_chat() {
        let target = ReplyTarget::callback_origin(ChatId(77), None);
        assert_eq!(target, ReplyTarget::chat(ChatId(77)));
    }

    #[test]
    fn callback_from_text_message_edits_its_text() {
        let listing = origin(json!({ "text": "Список товаров:" }));
        assert_eq!(
            ReplyTarget::callback_origin(ChatId(77), Some(&listing)),
            ReplyTarget::message(ChatId(42), MessageId(5), EditMode::Text)
        );
    }

    #[test]
    fn callback_from_media_message_edits_its_caption() {
        let photo = origin(json!({
            "photo": [{ "file_id": "f", "file_unique_id": "u", "width": 90, "height": 90 }],
            "caption": "Название: Pen"
        }));
        assert_eq!(
            ReplyTarget::callback_origin(ChatId(77), Some(&photo)),
            ReplyTarget::message(ChatId(42), MessageId(5), EditMode::Caption)
        );
    }
}

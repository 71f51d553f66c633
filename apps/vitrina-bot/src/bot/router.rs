use crate::models::payload::{PAY_PREFIX, PRODUCT_PREFIX};
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "приветствие")]
    Start,
    #[command(description = "список товаров")]
    Products,
    #[command(description = "список товаров")]
    List,
    #[command(description = "фото и видео всех товаров")]
    AllVideos,
    #[command(description = "оплатить товар: /pay <id>")]
    Pay(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    ProductDetail,
    Pay,
}

/// Checked in order; prefixes are disjoint so the first match is the only one.
const CALLBACK_ROUTES: &[(&str, CallbackAction)] = &[
    (PRODUCT_PREFIX, CallbackAction::ProductDetail),
    (PAY_PREFIX, CallbackAction::Pay),
];

/// Picks the handler for a callback payload and returns it with the id
/// segment (everything after the prefix, extra underscores included).
pub fn route_callback(data: &str) -> Option<(CallbackAction, &str)> {
    CALLBACK_ROUTES
        .iter()
        .find_map(|(prefix, action)| data.strip_prefix(prefix).map(|arg| (*action, arg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_route_by_prefix() {
        assert_eq!(
            route_callback("product_42"),
            Some((CallbackAction::ProductDetail, "42"))
        );
        assert_eq!(route_callback("pay_7"), Some((CallbackAction::Pay, "7")));
        assert_eq!(
            route_callback("product_4_2"),
            Some((CallbackAction::ProductDetail, "4_2"))
        );
        assert_eq!(route_callback("set_lang_en"), None);
        assert_eq!(route_callback("product"), None);
    }

    #[test]
    fn commands_parse_with_aliases() {
        assert_eq!(Command::parse("/start", "vitrina_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/products", "vitrina_bot").unwrap(), Command::Products);
        assert_eq!(Command::parse("/list@vitrina_bot", "vitrina_bot").unwrap(), Command::List);
        assert_eq!(Command::parse("/all_videos", "vitrina_bot").unwrap(), Command::AllVideos);
        assert_eq!(
            Command::parse("/pay 7", "vitrina_bot").unwrap(),
            Command::Pay("7".to_string())
        );
        assert!(Command::parse("/unknown", "vitrina_bot").is_err());
    }
}

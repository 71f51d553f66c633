use vitrina_db::Product;

pub const GREETING: &str =
    "Привет! Это бот для работы с товарами. Используй /products для просмотра товаров.";
pub const NO_PRODUCTS: &str = "Нет товаров.";
pub const PRODUCTS_HEADER: &str = "Список товаров:";
pub const PRODUCTS_FAILED: &str = "Произошла ошибка при загрузке товаров.";
pub const DATA_FAILED: &str = "Произошла ошибка при загрузке данных.";
pub const NOT_FOUND: &str = "Товар не найден.";
pub const NO_MEDIA: &str = "Нет доступных видео или изображений для продуктов.";
pub const BUY_BUTTON: &str = "Купить";
pub const PAY_USAGE: &str = "Укажите номер товара: /pay <id>. Список товаров: /products";
pub const INVOICE_FAILED: &str = "Не удалось выставить счёт. Попробуйте позже.";
pub const PAYMENT_THANKS: &str = "Спасибо! Оплата прошла успешно.";
pub const CHECKOUT_UNKNOWN_PRODUCT: &str = "Товар больше недоступен.";
pub const CHECKOUT_STALE: &str = "Цена товара изменилась. Запросите новый счёт.";
pub const CHECKOUT_RETRY: &str = "Не удалось проверить заказ. Попробуйте позже.";

/// `"{name} - {price} {label}"`, used for list lines, buttons and album captions.
pub fn price_line(product: &Product, label: &str) -> String {
    format!("{} - {} {}", product.name, product.display_price(), label)
}

pub fn detail_caption(product: &Product, label: &str) -> String {
    format!(
        "Название: {}\nЦена: {} {}",
        product.name,
        product.display_price(),
        label.to_uppercase()
    )
}

pub fn invoice_description(product: &Product) -> String {
    format!("Описание товара: {}", product.name)
}

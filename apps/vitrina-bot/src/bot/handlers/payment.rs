use crate::bot::reply::{deliver, InvoiceRequest, Reply, ReplyTarget};
use crate::bot::texts;
use crate::models::payload::{parse_invoice_payload, product_payload};
use crate::services::catalog_service::price_in_minor_units;
use crate::AppState;
use teloxide::prelude::*;
use teloxide::types::{LabeledPrice, PreCheckoutQuery};
use tracing::{error, info, warn};

/// Builds the invoice for the product named by `arg`. Callback-initiated
/// payments edit the originating message when the product is gone.
pub async fn invoice_reply(state: &AppState, arg: &str, from_callback: bool) -> Reply {
    let not_found = || {
        if from_callback {
            Reply::edit(texts::NOT_FOUND)
        } else {
            Reply::text(texts::NOT_FOUND)
        }
    };

    let product = match state.catalog.get_product_by_arg(arg).await {
        Ok(product) => product,
        Err(e) if e.is_not_found() => return not_found(),
        Err(e) => {
            error!("Failed to load product {:?} for invoice: {}", arg, e);
            return Reply::text(texts::INVOICE_FAILED);
        }
    };

    let amount = match price_in_minor_units(&product) {
        Ok(amount) => amount,
        Err(e) => {
            error!("{}", e);
            return Reply::text(texts::INVOICE_FAILED);
        }
    };

    Reply::Invoice(InvoiceRequest {
        title: product.name.clone(),
        description: texts::invoice_description(&product),
        payload: product_payload(product.id),
        currency: state.config.currency.clone(),
        prices: vec![LabeledPrice {
            label: product.name.clone(),
            amount,
        }],
        provider_token: state.config.payment_provider_token.clone(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutDecision {
    Approve,
    Reject(&'static str),
}

/// Approves a checkout only for an existing product whose current price and
/// currency still match the invoice.
pub async fn review_checkout(
    state: &AppState,
    payload: &str,
    currency: &str,
    total_amount: u32,
) -> CheckoutDecision {
    let id = match parse_invoice_payload(payload) {
        Ok(id) => id,
        Err(e) => {
            warn!("Rejecting checkout: {}", e);
            return CheckoutDecision::Reject(texts::CHECKOUT_UNKNOWN_PRODUCT);
        }
    };

    let product = match state.catalog.get_product(id).await {
        Ok(product) => product,
        Err(e) if e.is_not_found() => {
            warn!("Rejecting checkout: {}", e);
            return CheckoutDecision::Reject(texts::CHECKOUT_UNKNOWN_PRODUCT);
        }
        Err(e) => {
            error!("Checkout review failed: {}", e);
            return CheckoutDecision::Reject(texts::CHECKOUT_RETRY);
        }
    };

    let expected = price_in_minor_units(&product).ok();
    if currency != state.config.currency || expected != Some(total_amount) {
        warn!(
            product_id = id,
            "Rejecting stale checkout: {} {} (expected {} {:?})",
            total_amount,
            currency,
            state.config.currency,
            expected
        );
        return CheckoutDecision::Reject(texts::CHECKOUT_STALE);
    }

    CheckoutDecision::Approve
}

pub async fn pre_checkout_handler(
    bot: Bot,
    q: PreCheckoutQuery,
    state: AppState,
) -> Result<(), teloxide::RequestError> {
    info!(
        "Pre-checkout query: payload={:?} total={} {}",
        q.invoice_payload, q.total_amount, q.currency
    );

    let decision = review_checkout(&state, &q.invoice_payload, &q.currency, q.total_amount).await;
    let res = match decision {
        CheckoutDecision::Approve => bot.answer_pre_checkout_query(q.id, true).await,
        CheckoutDecision::Reject(reason) => {
            bot.answer_pre_checkout_query(q.id, false)
                .error_message(reason)
                .await
        }
    };

    if let Err(e) = res {
        error!("Failed to answer pre-checkout query: {}", e);
    }
    Ok(())
}

pub async fn successful_payment_handler(
    bot: Bot,
    msg: Message,
) -> Result<(), teloxide::RequestError> {
    if let Some(payment) = msg.successful_payment() {
        info!(
            chat_id = msg.chat.id.0,
            "Payment received: payload={:?} total={} {} charge={:?}",
            payment.invoice_payload,
            payment.total_amount,
            payment.currency,
            payment.provider_payment_charge_id
        );
    }

    deliver(&bot, ReplyTarget::chat(msg.chat.id), Reply::text(texts::PAYMENT_THANKS)).await;
    Ok(())
}

use dioxus::prelude::*;
use shared_types::Product;

use crate::sequencer::{ButtonView, BUY_LABEL};

pub const CHECK_ICON: &str = "fas fa-check";

/// Fixed two-decimal currency display: 29999 -> "$299.99".
pub fn format_price(price_cents: u64) -> String {
    format!("${}.{:02}", price_cents / 100, price_cents % 100)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Static HTML for one card, structurally identical to `ProductCard`.
pub fn render_card_markup(product: &Product) -> String {
    let features: String = product
        .features
        .iter()
        .map(|feature| {
            format!(
                r#"<li><i class="{CHECK_ICON}"></i>{}</li>"#,
                escape_html(feature)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="product-card" data-product-id="{id}">"#,
            r#"<div class="product-image"><i class="{icon}"></i></div>"#,
            r#"<h3 class="product-title">{name}</h3>"#,
            r#"<p class="product-description">{description}</p>"#,
            r#"<div class="product-price">{price}</div>"#,
            r#"<ul class="product-features">{features}</ul>"#,
            r#"<button class="buy-button" data-product-id="{id}">{label}</button>"#,
            r#"</div>"#,
        ),
        id = product.id,
        icon = escape_html(&product.icon),
        name = escape_html(&product.name),
        description = escape_html(&product.description),
        price = format_price(product.price_cents),
        features = features,
        label = BUY_LABEL,
    )
}

/// Full container content for `products`. Replacing the container's children
/// with this string is idempotent.
pub fn render_catalog_markup(products: &[Product]) -> String {
    products.iter().map(render_card_markup).collect()
}

#[component]
pub fn ProductGrid(
    container_id: String,
    products: Vec<Product>,
    on_buy: Callback<(u32, Signal<ButtonView>)>,
) -> Element {
    rsx! {
        div {
            id: "{container_id}",
            class: "products-grid",

            for product in products {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                    on_buy,
                }
            }
        }
    }
}

#[component]
pub fn ProductCard(product: Product, on_buy: Callback<(u32, Signal<ButtonView>)>) -> Element {
    let button = use_signal(ButtonView::default);
    let product_id = product.id;
    let view = button.read().clone();
    let button_class = view.class();
    let button_style = view.style();
    let price = format_price(product.price_cents);

    rsx! {
        div {
            class: "product-card",
            "data-product-id": "{product_id}",

            div {
                class: "product-image",
                i { class: "{product.icon}" }
            }
            h3 { class: "product-title", "{product.name}" }
            p { class: "product-description", "{product.description}" }
            div { class: "product-price", "{price}" }
            ul {
                class: "product-features",
                for feature in product.features.iter() {
                    li {
                        i { class: CHECK_ICON }
                        "{feature}"
                    }
                }
            }
            button {
                class: "{button_class}",
                style: button_style,
                disabled: view.disabled,
                "data-product-id": "{product_id}",
                onclick: move |_| on_buy.call((product_id, button)),
                "{view.label}"
            }
        }
    }
}

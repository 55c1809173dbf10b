//! WhatsApp 下单链接

use crate::Product;

/// 组装下单消息，保修为空时省略该行
pub fn order_message(product: &Product) -> String {
    let mut message = format!(
        "Hello 👋\nI want to buy this product:\n\nProduct: {}\nSpecs: {}\nPrice: {}",
        product.name,
        product.specs.join(" • "),
        product.price
    );
    if !product.warranty.trim().is_empty() {
        message.push_str("\nWarranty: ");
        message.push_str(&product.warranty);
    }
    message.push_str("\n\nIs it available?");
    message
}

/// `https://wa.me/<number>?text=<encoded>`
pub fn whatsapp_link(number: &str, product: &Product) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(&order_message(product))
    )
}

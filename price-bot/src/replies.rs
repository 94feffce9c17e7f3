//! Reply templates, the asset table, and the main reply keyboard.
//!
//! All texts are Telegram HTML (the adapter sends with `ParseMode::Html`).

use teloxide::utils::html;

use crate::core::ReplyKeyboard;

/// Greeting sent on `/start` together with [`main_keyboard`].
pub const GREETING: &str = "Привіт! Я крипто-бот. Тисни кнопки нижче 👇";

/// Interim acknowledgment sent before the exchange is queried.
pub const LOOKUP_PENDING: &str = "🔍 Отримую ціну...";

pub const HELP: &str = "Дані беруться з біржі <a href='https://www.binance.com'>Binance</a>.";

pub const HELP_BUTTON: &str = "🆘 Допомога";

pub const KEYBOARD_PLACEHOLDER: &str = "Вибери дію...";

const PRICE_FAILURE: &str = "Помилка з'єднання з біржею.";

/// A price button: what the user presses, how the reply names it, and what is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub button: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
}

/// Price buttons in keyboard order.
pub const ASSETS: [Asset; 3] = [
    Asset {
        button: "💰 Bitcoin",
        label: "Bitcoin",
        symbol: "BTCUSDT",
    },
    Asset {
        button: "📉 Ethereum",
        label: "Ethereum",
        symbol: "ETHUSDT",
    },
    Asset {
        button: "💵 SOLUSDT",
        label: "SOLUSDT",
        symbol: "SOLUSDT",
    },
];

/// Finds the asset whose button text is exactly `text`.
pub fn asset_for_button(text: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.button == text)
}

/// Three price buttons on the first row, help on the second.
pub fn main_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::new()
        .row(ASSETS.iter().map(|a| a.button))
        .row([HELP_BUTTON])
        .resized()
        .placeholder(KEYBOARD_PLACEHOLDER)
}

/// `🔥 <b>Bitcoin:</b> <code>$65,000.50</code>`
pub fn format_price_success(label: &str, price: f64) -> String {
    format!(
        "🔥 {} {}",
        html::bold(&format!("{}:", html::escape(label))),
        html::code_inline(&format!("${}", format_usd(price)))
    )
}

pub fn format_price_failure() -> String {
    PRICE_FAILURE.to_string()
}

/// Two decimals with comma thousands separators: `1234567.891` → `1,234,567.89`.
pub fn format_usd(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Strips HTML tags and unescapes entities; what the user sees in the client.
pub fn visible_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(65000.5), "65,000.50");
        assert_eq!(format_usd(1234567.891), "1,234,567.89");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(100.0), "100.00");
        assert_eq!(format_usd(0.1234), "0.12");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1500.0), "-1,500.00");
        assert_eq!(format_usd(-0.001), "0.00");
    }

    #[test]
    fn test_format_price_success_markup() {
        let text = format_price_success("Bitcoin", 65000.5);
        assert_eq!(text, "🔥 <b>Bitcoin:</b> <code>$65,000.50</code>");
        assert_eq!(visible_text(&text), "🔥 Bitcoin: $65,000.50");
    }

    #[test]
    fn test_format_price_success_escapes_label() {
        let text = format_price_success("A<B>&C", 1.0);
        assert_eq!(text, "🔥 <b>A&lt;B&gt;&amp;C:</b> <code>$1.00</code>");
        assert_eq!(visible_text(&text), "🔥 A<B>&C: $1.00");
    }

    #[test]
    fn test_format_price_failure_literal() {
        assert_eq!(format_price_failure(), "Помилка з'єднання з біржею.");
    }

    #[test]
    fn test_help_links_exchange() {
        assert!(HELP.contains("href='https://www.binance.com'"));
        assert_eq!(visible_text(HELP), "Дані беруться з біржі Binance.");
    }

    #[test]
    fn test_main_keyboard_layout() {
        let kb = main_keyboard();
        assert_eq!(
            kb.rows,
            vec![
                vec!["💰 Bitcoin", "📉 Ethereum", "💵 SOLUSDT"],
                vec!["🆘 Допомога"],
            ]
        );
        assert!(kb.resize);
        assert_eq!(kb.placeholder.as_deref(), Some("Вибери дію..."));
    }

    #[test]
    fn test_asset_for_button() {
        assert_eq!(asset_for_button("💰 Bitcoin").map(|a| a.symbol), Some("BTCUSDT"));
        assert_eq!(asset_for_button("📉 Ethereum").map(|a| a.symbol), Some("ETHUSDT"));
        assert_eq!(asset_for_button("💵 SOLUSDT").map(|a| a.symbol), Some("SOLUSDT"));
        assert!(asset_for_button("Bitcoin").is_none());
        assert!(asset_for_button(HELP_BUTTON).is_none());
    }
}

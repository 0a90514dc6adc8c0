//! WhatsApp contact links and the pre-filled inquiry text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::listing::Listing;
use crate::types::Price;

/// Base of the click-to-chat link; the phone number follows the slash.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a click-to-chat link that opens a conversation with `phone` and
/// `message` pre-filled.
///
/// ```
/// use eskipara_core::contact::build_contact_link;
///
/// assert_eq!(
///     build_contact_link("905551112233", "Merhaba dünya"),
///     "https://wa.me/905551112233?text=Merhaba%20d%C3%BCnya"
/// );
/// ```
pub fn build_contact_link(phone: &str, message: &str) -> String {
    let text = utf8_percent_encode(message, URI_COMPONENT);
    format!("{WHATSAPP_BASE_URL}{phone}?text={text}")
}

/// The message sent from a listing's detail page.
pub fn inquiry_message(listing: &Listing) -> String {
    format!(
        "Merhaba, sitenizdeki şu parayla ilgileniyorum:\n\n{}\n\nBilgi alabilir miyim?",
        listing_summary(listing),
    )
}

/// The shorter message sent from a catalogue card. No closing question.
pub fn card_inquiry_message(listing: &Listing) -> String {
    format!(
        "Merhaba, bu parayla ilgileniyorum:\n\n{}",
        listing_summary(listing),
    )
}

/// Category, title, price and id, one per line.
fn listing_summary(listing: &Listing) -> String {
    format!(
        "Kategori: {}\n\
         Başlık: {}\n\
         Fiyat: {} TL\n\
         ID: {}",
        listing.category.label(),
        listing.title,
        format_price_tr(listing.price),
        listing.id,
    )
}

/// Format a price the way Turkish locale formatting does: `.` groups
/// thousands, `,` separates decimals, at most three fraction digits with
/// trailing zeros dropped.
pub fn format_price_tr(price: Price) -> String {
    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|d| d == '0') && frac_part.is_empty();
    let sign = if price < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

//! Page-layout parser for the vendor warranty page.
//!
//! The page renders one `div.WarrantyInformation` block per informational
//! row. Each block's text content splits into lines with the field label on
//! the second line (carrying a trailing colon) and the value on the third;
//! the first line is presentation filler. That positional contract tracks
//! the live page layout — blocks that do not satisfy it contribute nothing,
//! so a vendor layout change surfaces as missing fields and an explicit
//! extraction failure rather than silently corrupted records.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Selector};

const WARRANTY_BLOCK_SELECTOR: &str = "div.WarrantyInformation";

/// Extracts raw label/value pairs from every warranty block on the page.
///
/// Returns `None` when the page contains no warranty blocks at all — the
/// shape a lookup for an unknown serial produces.
#[must_use]
pub fn parse_warranty_fields(body: &str) -> Option<BTreeMap<String, String>> {
    let selector = Selector::parse(WARRANTY_BLOCK_SELECTOR).ok()?;
    let document = Html::parse_document(body);
    let blocks: Vec<ElementRef<'_>> = document.select(&selector).collect();
    if blocks.is_empty() {
        return None;
    }
    Some(
        blocks
            .into_iter()
            .filter_map(field_from_block)
            .collect(),
    )
}

/// Reads one `(label, value)` pair from a warranty block's text content.
///
/// The trailing colon on the label is dropped and both sides are
/// whitespace-trimmed. Blocks with fewer than three text lines or an empty
/// label yield nothing.
fn field_from_block(block: ElementRef<'_>) -> Option<(String, String)> {
    let text: String = block.text().collect();
    let mut lines = text.lines();
    lines.next()?;
    let label = lines
        .next()?
        .trim()
        .trim_end_matches(':')
        .trim_end()
        .to_owned();
    let value = lines.next()?.trim().to_owned();
    if label.is_empty() {
        return None;
    }
    Some((label, value))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

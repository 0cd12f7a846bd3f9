//! Thermal-ticket style receipt text.
//!
//! The receipt is a list of fixed-width lines: a shop header with the issue
//! date, each order line with its quantity and line total, then subtotal,
//! discount (only when one is set), tip, the grand total, and a footer with
//! the ticket number. Columns are aligned by display width so accented item
//! names do not break the layout.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use unicode_width::UnicodeWidthStr;

use crate::i18n::Strings;
use crate::models::OrderState;

/// Default ticket width in columns.
pub const RECEIPT_WIDTH: usize = 32;

/// Rows printed above the first order line.
pub const RECEIPT_HEADER_ROWS: usize = 4;

/// Highest ticket number; numbers print zero-padded to four digits.
pub const MAX_TICKET_NUMBER: u16 = 9999;

/// Identifies one printed ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub number: u16,
    pub issued_at: NaiveDateTime,
}

/// Formats an amount as `$12.50`: two decimals, half away from zero,
/// sign in front of the symbol.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded < Decimal::ZERO {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${rounded:.2}")
    }
}

/// Renders the receipt for `state` using the labels in `strings`.
///
/// The first [`RECEIPT_HEADER_ROWS`] rows are the header; each order line
/// then takes two rows.
pub fn render_receipt(
    state: &OrderState,
    strings: &Strings,
    ticket: &Ticket,
    width: usize,
) -> Vec<String> {
    let totals = state.totals();
    let mut out = Vec::with_capacity(RECEIPT_HEADER_ROWS + state.lines.len() * 2 + 10);

    out.push(center(strings.ticket_header, width));
    out.push(center(strings.sales_ticket, width));
    out.push(center(
        &ticket.issued_at.format("%d/%m/%Y %H:%M:%S").to_string(),
        width,
    ));
    out.push("-".repeat(width));

    for line in &state.lines {
        out.push(line.name.clone());
        out.push(row(
            &format!(
                "  {} {} {}",
                line.quantity,
                strings.quantity,
                format_currency(line.price)
            ),
            &format_currency(line.line_total()),
            width,
        ));
    }

    out.push("-".repeat(width));
    out.push(row(strings.subtotal, &format_currency(totals.subtotal), width));
    if state.discount_percent > 0 {
        out.push(row(
            &format!("{} ({}%)", strings.discount, state.discount_percent),
            &format!("-{}", format_currency(totals.discount_amount)),
            width,
        ));
    }
    out.push(row(
        &format!("{} ({}%)", strings.tip, state.tip_percent),
        &format!("+{}", format_currency(totals.tip_amount)),
        width,
    ));
    out.push("=".repeat(width));
    out.push(row(strings.total, &format_currency(totals.total), width));
    out.push(String::new());
    out.push(center(strings.thank_you, width));
    out.push(center(
        &format!("{}{:04}", strings.ticket_number, ticket.number),
        width,
    ));

    out
}

/// Left text and right text separated by enough spaces to fill `width`.
fn row(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{text}", " ".repeat(pad))
}

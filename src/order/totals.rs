//! Derived order totals.
//!
//! Totals are never stored. They are recomputed from the order lines and
//! the two percentages whenever something needs to show or close an order,
//! using exact decimal arithmetic so repeated recomputation cannot drift.
//!
//! Evaluation order is fixed: the discount comes off the subtotal first and
//! the tip is taken on what remains.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::OrderLine;

/// Amounts derived from one order state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub discounted_subtotal: Decimal,
    pub tip_amount: Decimal,
    pub total: Decimal,
}

/// Computes subtotal, discount, tip, and total for `lines`.
///
/// Percentages are taken as given. Values above 100 produce a negative
/// discounted subtotal (discount) or more than doubling (tip); limiting
/// them is the input validator's job.
pub fn compute_totals(lines: &[OrderLine], discount_percent: u32, tip_percent: u32) -> Totals {
    let subtotal: Decimal = lines.iter().map(OrderLine::line_total).sum();
    let discount_amount = subtotal * fraction(discount_percent);
    let discounted_subtotal = subtotal - discount_amount;
    let tip_amount = discounted_subtotal * fraction(tip_percent);
    let total = discounted_subtotal + tip_amount;

    Totals {
        subtotal,
        discount_amount,
        discounted_subtotal,
        tip_amount,
        total,
    }
}

fn fraction(percent: u32) -> Decimal {
    Decimal::from(percent) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(id: u32, price: Decimal, quantity: u32) -> OrderLine {
        OrderLine {
            id,
            name: format!("item-{id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn empty_order_totals_zero_for_any_percentages() {
        for (d, t) in [(0, 0), (20, 10), (100, 100), (150, 300)] {
            let totals = compute_totals(&[], d, t);
            assert_eq!(totals, Totals::default(), "d={d} t={t}");
        }
    }

    #[test]
    fn tip_is_taken_on_discounted_subtotal() {
        let totals = compute_totals(&[line(1, dec!(100), 1)], 10, 10);
        assert_eq!(totals.subtotal, dec!(100));
        assert_eq!(totals.discount_amount, dec!(10));
        assert_eq!(totals.discounted_subtotal, dec!(90));
        assert_eq!(totals.tip_amount, dec!(9));
        assert_eq!(totals.total, dec!(99));
        assert_ne!(totals.total, dec!(100));
    }

    #[test]
    fn total_matches_closed_form() {
        let lines = [line(1, dec!(19.99), 3), line(2, dec!(4.25), 2)];
        let s = dec!(19.99) * dec!(3) + dec!(4.25) * dec!(2);
        for (d, t) in [(0, 0), (5, 25), (15, 50), (25, 100)] {
            let totals = compute_totals(&lines, d, t);
            let expected = s
                * (Decimal::ONE - Decimal::from(d) / dec!(100))
                * (Decimal::ONE + Decimal::from(t) / dec!(100));
            assert_eq!(totals.total, expected, "d={d} t={t}");
        }
    }

    #[test]
    fn pizza_and_soda_scenario() {
        let lines = [line(1, dec!(12.00), 2), line(2, dec!(2.50), 1)];
        let totals = compute_totals(&lines, 20, 10);
        assert_eq!(totals.subtotal, dec!(26.50));
        assert_eq!(totals.discount_amount, dec!(5.30));
        assert_eq!(totals.discounted_subtotal, dec!(21.20));
        assert_eq!(totals.tip_amount, dec!(2.12));
        assert_eq!(totals.total, dec!(23.32));
    }

    #[test]
    fn recomputation_is_stable() {
        let lines = [line(1, dec!(0.10), 3), line(2, dec!(0.20), 1)];
        let first = compute_totals(&lines, 15, 5);
        for _ in 0..1000 {
            assert_eq!(compute_totals(&lines, 15, 5), first);
        }
        assert_eq!(first.subtotal, dec!(0.50));
    }

    #[test]
    fn discount_over_hundred_goes_negative() {
        let totals = compute_totals(&[line(1, dec!(10), 1)], 150, 0);
        assert_eq!(totals.discount_amount, dec!(15));
        assert_eq!(totals.discounted_subtotal, dec!(-5));
        assert_eq!(totals.total, dec!(-5));
    }

    #[test]
    fn full_discount_zeroes_tip() {
        let totals = compute_totals(&[line(1, dec!(40), 2)], 100, 25);
        assert_eq!(totals.discounted_subtotal, Decimal::ZERO);
        assert_eq!(totals.tip_amount, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}

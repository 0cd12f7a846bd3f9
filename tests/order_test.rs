//! End-to-end order store scenarios.

mod common;

use posplus::models::OrderState;
use posplus::order::percent::{
    PercentInputError, PercentPolicy, parse_percent, sanitize_percent, validate_percent_input,
};
use posplus::order::totals::compute_totals;
use posplus::order::{OrderAction, OrderError, OrderStore, reduce};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{hundred, pizza, soda};

#[test]
fn test_two_pizzas_one_soda_with_discount_and_tip() {
    let mut store = OrderStore::new();
    store.dispatch(OrderAction::AddItem(pizza())).unwrap();
    store.dispatch(OrderAction::AddItem(pizza())).unwrap();
    store.dispatch(OrderAction::AddItem(soda())).unwrap();
    store.dispatch(OrderAction::SetDiscount(20)).unwrap();
    store.dispatch(OrderAction::SetTip(10)).unwrap();

    let state = store.state();
    assert_eq!(state.lines.len(), 2);
    assert_eq!(state.lines[0].quantity, 2);
    assert_eq!(state.lines[1].quantity, 1);

    let totals = store.totals();
    assert_eq!(totals.subtotal, dec!(26.50));
    assert_eq!(totals.discount_amount, dec!(5.30));
    assert_eq!(totals.discounted_subtotal, dec!(21.20));
    assert_eq!(totals.tip_amount, dec!(2.12));
    assert_eq!(totals.total, dec!(23.32));
}

#[test]
fn test_round_hundred_with_ten_percent_each() {
    let state = reduce(&OrderState::default(), &OrderAction::AddItem(hundred())).unwrap();
    let state = reduce(&state, &OrderAction::SetDiscount(10)).unwrap();
    let state = reduce(&state, &OrderAction::SetTip(10)).unwrap();

    let totals = state.totals();
    assert_eq!(totals.discounted_subtotal, dec!(90));
    assert_eq!(totals.tip_amount, dec!(9));
    assert_eq!(totals.total, dec!(99));
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = OrderStore::new();
    store.dispatch(OrderAction::AddItem(pizza())).unwrap();
    store.dispatch(OrderAction::AddItem(soda())).unwrap();

    store.dispatch(OrderAction::RemoveItem(1)).unwrap();
    let once = store.state().clone();
    store.dispatch(OrderAction::RemoveItem(1)).unwrap();
    assert_eq!(store.state(), &once);
    assert_eq!(once.lines.len(), 1);
    assert_eq!(once.lines[0].id, 2);
}

#[test]
fn test_lines_keep_first_insertion_order() {
    let mut store = OrderStore::new();
    for item in [soda(), pizza(), soda(), hundred(), pizza()] {
        store.dispatch(OrderAction::AddItem(item)).unwrap();
    }
    let ids: Vec<u32> = store.state().lines.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(store.state().item_count(), 5);
}

#[test]
fn test_rejected_add_leaves_state_untouched() {
    let mut store = OrderStore::new();
    store.dispatch(OrderAction::AddItem(pizza())).unwrap();
    let before = store.state().clone();

    let mut refund = soda();
    refund.price = dec!(-2.50);
    let err = store.dispatch(OrderAction::AddItem(refund)).unwrap_err();
    assert!(matches!(err, OrderError::NegativePrice { id: 2, .. }));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_reset_then_recompute_is_zero() {
    let mut store = OrderStore::new();
    store.dispatch(OrderAction::AddItem(pizza())).unwrap();
    store.dispatch(OrderAction::SetDiscount(15)).unwrap();
    store.dispatch(OrderAction::SetTip(5)).unwrap();
    store.dispatch(OrderAction::ResetOrder).unwrap();

    assert_eq!(store.state(), &OrderState::default());
    assert_eq!(store.totals().total, Decimal::ZERO);
}

#[test]
fn test_finalize_reports_then_clears() {
    let mut store = OrderStore::new();
    store.dispatch(OrderAction::AddItem(hundred())).unwrap();
    store.dispatch(OrderAction::SetTip(5)).unwrap();

    let finalized = store.finalize().unwrap();
    assert_eq!(finalized.line_count, 1);
    assert_eq!(finalized.item_count, 1);
    assert_eq!(finalized.totals.total, dec!(105));
    assert!(store.state().is_empty());
    assert_eq!(store.state().tip_percent, 0);
}

#[test]
fn test_boundary_input_reaches_store() {
    for (raw, policy, expected) in [
        ("abc", PercentPolicy::Clamp, 0),
        ("", PercentPolicy::Clamp, 0),
        ("150", PercentPolicy::Clamp, 100),
        ("150", PercentPolicy::Allow, 150),
        ("15", PercentPolicy::Allow, 15),
    ] {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::AddItem(hundred())).unwrap();
        let value = validate_percent_input(raw, policy);
        store.dispatch(OrderAction::SetDiscount(value)).unwrap();
        assert_eq!(store.state().discount_percent, expected, "input {raw:?}");
    }
}

#[test]
fn test_discount_over_hundred_goes_negative() {
    let state = OrderState::default()
        .add_item(&hundred())
        .unwrap()
        .set_discount(validate_percent_input("150", PercentPolicy::Allow));
    let totals = compute_totals(&state.lines, state.discount_percent, state.tip_percent);
    assert_eq!(totals.discounted_subtotal, dec!(-50));
    assert_eq!(totals.total, dec!(-50));
}

#[test]
fn test_strict_and_lenient_parsing_disagree_on_garbage() {
    assert!(matches!(
        parse_percent("abc"),
        Err(PercentInputError::NonDigit { .. })
    ));
    assert_eq!(sanitize_percent("abc"), 0);
    assert!(matches!(
        parse_percent("1000"),
        Err(PercentInputError::TooLong { len: 4 })
    ));
    assert_eq!(sanitize_percent("1000"), 100);
    assert_eq!(parse_percent("25").unwrap(), 25);
}

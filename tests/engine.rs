//! Unit-level tests for the pure engine: candle aggregation, strike
//! selection, spread pricing, chain snapshot construction, and the order
//! wire format.

mod common;

use common::{CALL_QUOTES, PUT_QUOTES, candle, raw_chain, snapshot};

use chrono::NaiveDate;
use vertical_trigger::TriggerError;
use vertical_trigger::strategy::price::spread_price;
use vertical_trigger::strategy::select::{StrikePair, select_strikes};
use vertical_trigger::strategy::{Dte1Config, MultiplierTable, QuantitySchedule};
use vertical_trigger::ticker::{Platform, translate};
use vertical_trigger::types::candle::{Candle, CandleSeries};
use vertical_trigger::types::chain::{OptionChainSnapshot, OptionQuote};
use vertical_trigger::types::enums::{Instruction, OptionType, OrderType};
use vertical_trigger::types::order::SpreadOrderRequest;
use vertical_trigger::types::spread::{OptionLeg, VerticalSpread};

const EXP: &str = "2022-04-21";
const EXP_KEY: &str = "2022-04-21:1";

fn quote(strike: f64, bid: f64, ask: f64) -> OptionQuote {
    OptionQuote {
        strike,
        symbol: format!("SPXW_TEST{strike}"),
        bid,
        ask,
    }
}

// ===================================================================
// Candles, ATR, streaks
// ===================================================================

#[test]
fn daily_range_rounds_to_cents() {
    let c = Candle {
        open: 5.0,
        high: 10.123,
        low: 4.0,
        close: 9.0,
    };
    assert_eq!(c.daily_range(), 6.12);
}

#[test]
fn atr_is_mean_of_daily_ranges() {
    let candles = vec![
        candle(100.0, 101.0, 4.0),
        candle(101.0, 100.0, 6.0),
        candle(100.0, 100.0, 5.0),
        candle(99.0, 100.0, 5.0),
    ];
    let series = CandleSeries::new(candles.clone()).unwrap();
    let expected: f64 =
        candles.iter().map(Candle::daily_range).sum::<f64>() / candles.len() as f64;
    assert_eq!(series.atr(), expected);
    assert_eq!(series.atr(), 5.0);
}

#[test]
fn empty_history_is_rejected() {
    assert!(matches!(
        CandleSeries::new(vec![]),
        Err(TriggerError::DataUnavailable(_))
    ));
}

#[test]
fn streak_is_zero_when_latest_candle_breaks_pattern() {
    // Candle 0 red, older candles green: no green streak.
    let series = CandleSeries::new(vec![
        candle(101.0, 100.0, 5.0),
        candle(100.0, 101.0, 5.0),
        candle(100.0, 101.0, 5.0),
    ])
    .unwrap();
    assert_eq!(series.green_streak(), 0);
    assert_eq!(series.red_streak(), 1);
    assert_eq!(series.signal(), OptionType::PUT);
}

#[test]
fn flat_latest_candle_resolves_no_op() {
    let series = CandleSeries::new(vec![
        candle(100.0, 100.0, 5.0),
        candle(100.0, 101.0, 5.0),
    ])
    .unwrap();
    assert_eq!(series.green_streak(), 0);
    assert_eq!(series.red_streak(), 0);
    assert_eq!(series.signal(), OptionType::NO_OP);
}

#[test]
fn unbroken_streak_stops_at_series_end() {
    // Every candle green: the scan must stop at the series length instead
    // of running off the end.
    let series =
        CandleSeries::new((0..14).map(|_| candle(100.0, 101.0, 5.0)).collect()).unwrap();
    assert_eq!(series.green_streak(), 14);
    assert_eq!(series.signal(), OptionType::CALL);
}

#[test]
fn mixed_streak_counts_to_first_break() {
    let series = CandleSeries::new(vec![
        candle(100.0, 102.0, 5.0),
        candle(100.0, 101.0, 5.0),
        candle(101.0, 100.0, 5.0),
        candle(100.0, 101.0, 5.0),
    ])
    .unwrap();
    assert_eq!(series.green_streak(), 2);
    assert_eq!(series.red_streak(), 0);
}

// ===================================================================
// Strike selection
// ===================================================================

#[test]
fn nearest_strike_tie_breaks_to_lower() {
    // 4100 and 4200 are both 50 away from 4150; the first-seen minimum
    // wins, so the lower strike is selected.
    let pair = select_strikes(&[4000.0, 4100.0, 4200.0], 4150.0, 100.0, OptionType::CALL)
        .unwrap();
    assert_eq!(pair.short, 4100.0);
    assert_eq!(pair.long, 4200.0);
}

#[test]
fn call_walk_stops_at_exact_width() {
    let strikes = [4000.0, 4050.0, 4100.0, 4150.0, 4200.0, 4250.0];
    let pair = select_strikes(&strikes, 4101.12, 100.0, OptionType::CALL).unwrap();
    assert_eq!(pair.short, 4100.0);
    assert_eq!(pair.long, 4200.0);
}

#[test]
fn call_walk_backs_off_on_overshoot() {
    // First strike at >= 120 away is 4250 (150), which overshoots; back
    // off to 4200.
    let strikes = [4000.0, 4050.0, 4100.0, 4150.0, 4200.0, 4250.0];
    let pair = select_strikes(&strikes, 4100.0, 120.0, OptionType::CALL).unwrap();
    assert_eq!(pair.long, 4200.0);
}

#[test]
fn put_walk_mirrors_downward() {
    let strikes = [4000.0, 4050.0, 4100.0, 4150.0, 4200.0, 4250.0];
    let pair = select_strikes(&strikes, 4199.0, 100.0, OptionType::PUT).unwrap();
    assert_eq!(pair.short, 4200.0);
    assert_eq!(pair.long, 4100.0);
}

#[test]
fn overshoot_back_off_can_degenerate_to_short_strike() {
    // Only neighbour is 200 away; the walk overshoots and backs off onto
    // the short strike itself. The selector reports the pair as-is; the
    // orchestrator is responsible for rejecting it.
    let pair = select_strikes(&[4000.0, 4200.0], 4000.0, 100.0, OptionType::CALL).unwrap();
    assert_eq!(pair.short, 4000.0);
    assert_eq!(pair.long, 4000.0);
}

#[test]
fn walk_off_the_end_is_degenerate() {
    let err = select_strikes(&[4000.0, 4005.0], 4000.0, 100.0, OptionType::CALL)
        .unwrap_err();
    assert!(matches!(err, TriggerError::DegenerateSpread(_)));
}

#[test]
fn no_op_short_circuits_without_reading_strikes() {
    let pair = select_strikes(&[], 0.0, 0.0, OptionType::NO_OP).unwrap();
    assert!(pair.is_no_trade());
    assert_eq!(pair, StrikePair::NO_TRADE);
    assert_eq!(pair.short, -1.0);
    assert_eq!(pair.long, -1.0);
}

// ===================================================================
// Pricing
// ===================================================================

#[test]
fn call_spread_prices_to_nine_sixty() {
    // Mids 34.90 / 25.30: raw 9.60, floored to the tick grid plus one
    // tick lands back on 9.60 (the raw sits just under the grid line in
    // binary floating point).
    let chain = snapshot(EXP, EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let short = chain.calls.quote_at(4000.0).unwrap();
    let long = chain.calls.quote_at(4010.0).unwrap();
    assert_eq!(short.mid(), 34.9);
    assert_eq!(long.mid(), 25.3);
    assert_eq!(spread_price(OptionType::CALL, short, long, 0.05), 9.6);
}

#[test]
fn put_spread_prices_to_one_fifteen() {
    // Mids 34.90 / 33.80: raw 1.10, one tick above the floor gives 1.15.
    let chain = snapshot(EXP, EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let short = chain.puts.quote_at(4200.0).unwrap();
    let long = chain.puts.quote_at(4195.0).unwrap();
    assert_eq!(spread_price(OptionType::PUT, short, long, 0.05), 1.15);
}

#[test]
fn off_grid_raw_price_rounds_up_one_tick() {
    let short = quote(4000.0, 2.30, 2.34);
    let long = quote(4010.0, 1.25, 1.35);
    // raw = 2.32 - 1.30 = 1.02 -> floor to 1.00, plus one tick.
    assert_eq!(spread_price(OptionType::CALL, &short, &long, 0.05), 1.05);
}

#[test]
fn no_op_prices_to_sentinel() {
    let short = quote(4000.0, 1.0, 2.0);
    let long = quote(4010.0, 1.0, 2.0);
    assert_eq!(spread_price(OptionType::NO_OP, &short, &long, 0.05), -1.0);
}

// ===================================================================
// Chain snapshot
// ===================================================================

#[test]
fn snapshot_construction_is_idempotent() {
    let raw = raw_chain(EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let a = OptionChainSnapshot::from_raw(&raw, EXP).unwrap();
    let b = OptionChainSnapshot::from_raw(&raw, EXP).unwrap();
    assert_eq!(a, b);
}

#[test]
fn snapshot_sorts_strikes_ascending() {
    let chain = snapshot(EXP, EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let strikes = chain.calls.strikes();
    assert_eq!(strikes, vec![3980.0, 4000.0, 4010.0, 4020.0]);
    assert_eq!(chain.puts.len(), 4);
}

#[test]
fn snapshot_matches_expiration_by_prefix() {
    // The raw key carries a ":dte" suffix; the match is on the date
    // prefix only.
    let chain = snapshot(EXP, "2022-04-21:1", CALL_QUOTES, PUT_QUOTES);
    assert_eq!(chain.expiration, EXP);

    let raw = raw_chain("2022-04-22:2", CALL_QUOTES, PUT_QUOTES);
    let err = OptionChainSnapshot::from_raw(&raw, EXP).unwrap_err();
    assert!(matches!(err, TriggerError::DataUnavailable(_)));
}

#[test]
fn failed_chain_status_is_an_error() {
    let mut raw = raw_chain(EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    raw.status = Some("FAILED".to_owned());
    let err = OptionChainSnapshot::from_raw(&raw, EXP).unwrap_err();
    assert!(matches!(err, TriggerError::ChainRequestFailed { .. }));
}

#[test]
fn quote_lookup_by_strike() {
    let chain = snapshot(EXP, EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let q = chain.calls.quote_at(4000.0).unwrap();
    assert_eq!(q.symbol, "SPXW_042122C4000");
    assert_eq!(q.mid(), 34.9);
    assert!(chain.calls.quote_at(4001.0).is_none());
}

// ===================================================================
// Ticker translation
// ===================================================================

#[test]
fn canonical_tickers_translate_per_platform() {
    assert_eq!(translate("SPX", Platform::Broker), "$SPX.X");
    assert_eq!(translate("SPX", Platform::Yahoo), "^GSPC");
    assert_eq!(translate("NDX", Platform::Broker), "$NDX.X");
    assert_eq!(translate("AAPL", Platform::Broker), "AAPL");
}

// ===================================================================
// Order wire format
// ===================================================================

#[test]
fn spread_order_body_matches_wire_format() {
    let chain = snapshot(EXP, EXP_KEY, CALL_QUOTES, PUT_QUOTES);
    let short = chain.calls.quote_at(4000.0).unwrap();
    let long = chain.calls.quote_at(4010.0).unwrap();
    let spread = VerticalSpread {
        order_type: OrderType::NET_CREDIT,
        quantity: 2,
        expiration_date: EXP.to_owned(),
        short_leg: OptionLeg::new(short, Instruction::SELL_TO_OPEN, 2),
        long_leg: OptionLeg::new(long, Instruction::BUY_TO_OPEN, 2),
        price: 9.6,
    };

    let req = SpreadOrderRequest::from_spread(&spread);
    let body: serde_json::Value = serde_json::to_value(&req).unwrap();

    assert_eq!(body["orderType"], "NET_CREDIT");
    assert_eq!(body["session"], "NORMAL");
    assert_eq!(body["duration"], "DAY");
    assert_eq!(body["orderStrategyType"], "SINGLE");
    assert_eq!(body["price"], "9.60");
    let legs = body["orderLegCollection"].as_array().unwrap();
    assert_eq!(legs.len(), 2);
    assert_eq!(legs[0]["instruction"], "BUY_TO_OPEN");
    assert_eq!(legs[0]["instrument"]["symbol"], "SPXW_042122C4010");
    assert_eq!(legs[0]["instrument"]["assetType"], "OPTION");
    assert_eq!(legs[1]["instruction"], "SELL_TO_OPEN");
    assert_eq!(legs[1]["quantity"], 2);
}

// ===================================================================
// Configuration
// ===================================================================

#[test]
fn friday_expiration_skips_the_weekend() {
    let config = Dte1Config::default();
    let friday = NaiveDate::from_ymd_opt(2022, 4, 22).unwrap();
    let wednesday = NaiveDate::from_ymd_opt(2022, 4, 20).unwrap();
    assert_eq!(
        config.expiration_for(friday),
        NaiveDate::from_ymd_opt(2022, 4, 25).unwrap()
    );
    assert_eq!(
        config.expiration_for(wednesday),
        NaiveDate::from_ymd_opt(2022, 4, 21).unwrap()
    );
}

#[test]
fn quantity_schedule_keys_on_evaluation_weekday() {
    let schedule = QuantitySchedule {
        monday: 3,
        wednesday: 5,
        friday: 7,
    };
    assert_eq!(schedule.quantity_for(chrono::Weekday::Fri), 3);
    assert_eq!(schedule.quantity_for(chrono::Weekday::Tue), 5);
    assert_eq!(schedule.quantity_for(chrono::Weekday::Thu), 7);
    assert_eq!(schedule.quantity_for(chrono::Weekday::Mon), 1);
}

#[test]
fn multiplier_table_falls_back_past_known_streaks() {
    let table = MultiplierTable::default_call();
    assert_eq!(table.multiplier_for(1), 1.6);
    assert_eq!(table.multiplier_for(2), 1.2);
    assert_eq!(table.multiplier_for(9), 1.0);

    let put = MultiplierTable::default_put();
    assert_eq!(put.multiplier_for(1), 1.8);
    assert_eq!(put.multiplier_for(4), 1.0);
}

#[test]
fn width_converts_buying_power_cents_to_dollars() {
    let config = Dte1Config {
        buying_power: 1000,
        ..Dte1Config::default()
    };
    assert_eq!(config.width(), 10.0);
}

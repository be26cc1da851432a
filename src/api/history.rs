//! Price history endpoint — daily candles for the ATR window.

use crate::client::BrokerClient;
use crate::error::{Result, TriggerError};
use crate::providers::MarketDataProvider;
use crate::ticker::{self, Platform};
use crate::types::candle::{Candle, CandleSeries, PriceHistoryResponse, round2};

impl BrokerClient {
    /// Retrieve daily price history for a platform symbol.
    ///
    /// **Endpoint:** `GET /v1/marketdata/{symbol}/pricehistory`
    pub async fn get_price_history(&self, symbol: &str) -> Result<PriceHistoryResponse> {
        self.get(&format!(
            "/v1/marketdata/{symbol}/pricehistory\
             ?periodType=month&period=1&frequencyType=daily&frequency=1"
        ))
        .await
    }
}

impl MarketDataProvider for BrokerClient {
    /// Fetch and normalize the most recent `days` daily candles.
    ///
    /// The wire response is oldest-first; the returned series is
    /// most-recent-first with OHLC values rounded to cents.
    async fn daily_candles(&self, ticker: &str, days: usize) -> Result<CandleSeries> {
        let symbol = ticker::translate(ticker, Platform::Broker);
        let history = self.get_price_history(symbol).await?;

        if history.empty || history.candles.len() < days {
            return Err(TriggerError::DataUnavailable(format!(
                "price history for {ticker} has {} candles, need {days}",
                history.candles.len()
            )));
        }

        let candles = history
            .candles
            .iter()
            .rev()
            .take(days)
            .map(|raw| Candle {
                open: round2(raw.open),
                high: round2(raw.high),
                low: round2(raw.low),
                close: round2(raw.close),
            })
            .collect();
        CandleSeries::new(candles)
    }
}

//! Conversion: ticker wire → Tick, with crossed-book validation.

use super::wire::{MarketSummary, TickerResponse};
use super::Tick;
use crate::domain::market::Market;
use crate::error::ParseError;
use crate::shared::split_market_pair;
use rust_decimal::Decimal;

impl Tick {
    /// Assemble a tick from raw quotes. The last price is required; absent
    /// quotes collapse to zero. A crossed or locked book (bid at or above
    /// ask) is rejected.
    pub(crate) fn from_quotes(
        market: Market,
        last: Option<Decimal>,
        ask: Option<Decimal>,
        bid: Option<Decimal>,
    ) -> Result<Self, ParseError> {
        let close = last.ok_or_else(|| ParseError::missing("Last"))?;
        let buy_price = ask.unwrap_or(Decimal::ZERO);
        let sell_price = bid.unwrap_or(Decimal::ZERO);
        if !buy_price.is_zero() && sell_price >= buy_price {
            return Err(ParseError::invalid(
                "Bid",
                format!("crossed book: bid {sell_price} at or above ask {buy_price}"),
            ));
        }
        Ok(Self {
            market,
            close,
            buy_price,
            sell_price,
        })
    }

    pub(crate) fn from_response(market: Market, raw: TickerResponse) -> Result<Self, ParseError> {
        Self::from_quotes(market, raw.last, raw.ask, raw.bid)
    }
}

impl TryFrom<MarketSummary> for Tick {
    type Error = ParseError;

    fn try_from(raw: MarketSummary) -> Result<Self, Self::Error> {
        let pair = raw
            .market_name
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::missing("MarketName"))?;
        let (primary, secondary) = split_market_pair("MarketName", &pair)?;
        let market = Market::from_currencies(primary, secondary);
        Self::from_quotes(market, raw.last, raw.ask, raw.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn quotes_map_onto_buy_and_sell_prices() {
        let market = Market::from_currencies("BTC", "USDT");
        let tick = Tick::from_quotes(
            market,
            Some(dec("100.5")),
            Some(dec("101")),
            Some(dec("100")),
        )
        .unwrap();
        assert_eq!(tick.close, dec("100.5"));
        assert_eq!(tick.buy_price, dec("101"));
        assert_eq!(tick.sell_price, dec("100"));
    }

    #[test]
    fn missing_last_price_is_an_error() {
        let market = Market::from_currencies("BTC", "USDT");
        let err = Tick::from_quotes(market, None, Some(dec("101")), Some(dec("100"))).unwrap_err();
        assert_eq!(err.field, "Last");
    }

    #[test]
    fn absent_quotes_collapse_to_zero() {
        let market = Market::from_currencies("BTC", "USDT");
        let tick = Tick::from_quotes(market, Some(dec("100")), None, None).unwrap();
        assert_eq!(tick.buy_price, Decimal::ZERO);
        assert_eq!(tick.sell_price, Decimal::ZERO);
    }

    #[test]
    fn crossed_book_is_rejected() {
        let market = Market::from_currencies("BTC", "USDT");
        let err = Tick::from_quotes(market, Some(dec("100")), Some(dec("99")), Some(dec("101")))
            .unwrap_err();
        assert_eq!(err.field, "Bid");
    }

    #[test]
    fn locked_book_is_rejected_too() {
        let market = Market::from_currencies("BTC", "USDT");
        let err = Tick::from_quotes(market, Some(dec("100")), Some(dec("100")), Some(dec("100")))
            .unwrap_err();
        assert_eq!(err.field, "Bid");
    }

    #[test]
    fn summary_recovers_the_market_from_the_pair_name() {
        let raw = MarketSummary {
            market_name: Some("USDT-BTC".to_string()),
            last: Some(dec("100")),
            ask: Some(dec("101")),
            bid: Some(dec("99")),
        };
        let tick = Tick::try_from(raw).unwrap();
        assert_eq!(tick.market.primary, "BTC");
        assert_eq!(tick.market.secondary, "USDT");
    }

    #[test]
    fn summary_without_a_pair_name_is_an_error() {
        let raw = MarketSummary {
            market_name: None,
            last: Some(dec("100")),
            ask: None,
            bid: None,
        };
        assert_eq!(Tick::try_from(raw).unwrap_err().field, "MarketName");
    }
}

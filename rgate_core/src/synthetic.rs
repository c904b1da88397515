//! Labeled synthetic-data generators.
//!
//! Several response fields have no live upstream yet (indicative DEX
//! rates for unlisted pairs, per-item "AI scores", pool statistics,
//! ownership concentration). They are generated here, behind plain
//! functions, and every payload built from them is tagged with
//! `DataSource::Synthetic` so a real source can be substituted without
//! changing any handler contract.

use rand::Rng;

/// Indicative exchange rate for a pair missing from the static table.
/// Stays inside a plausible band rather than returning an error, so the
/// quote endpoint keeps a uniform shape.
pub fn fallback_rate() -> f64 {
    rand::thread_rng().gen_range(0.5..1500.0)
}

/// Per-item trending "AI score".
pub fn ai_score() -> u8 {
    rand::thread_rng().gen_range(60..=95)
}

/// Price impact for a quote, in percent. Grows with trade size.
pub fn price_impact(amount: f64) -> f64 {
    let base = rand::thread_rng().gen_range(0.05..0.3);
    (base + amount.log10().max(0.0) * 0.1).min(5.0)
}

/// Gas units a swap of this kind would plausibly consume.
pub fn swap_gas_estimate() -> u64 {
    rand::thread_rng().gen_range(120_000..220_000)
}

/// TVL figure for a pool listing, in USD.
pub fn pool_tvl_usd() -> f64 {
    rand::thread_rng().gen_range(50_000.0..25_000_000.0)
}

/// 24h volume figure for a pool listing, in USD.
pub fn pool_volume_usd() -> f64 {
    rand::thread_rng().gen_range(10_000.0..5_000_000.0)
}

/// Pool APR, in percent.
pub fn pool_apr() -> f64 {
    rand::thread_rng().gen_range(1.0..85.0)
}

/// Share of supply the top wallets are estimated to hold, in percent.
pub fn ownership_concentration() -> f64 {
    rand::thread_rng().gen_range(15.0..80.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_stay_in_band() {
        for _ in 0..200 {
            let rate = fallback_rate();
            assert!((0.5..1500.0).contains(&rate));

            let score = ai_score();
            assert!((60..=95).contains(&score));

            let impact = price_impact(1_000_000.0);
            assert!(impact > 0.0 && impact <= 5.0);

            let concentration = ownership_concentration();
            assert!((15.0..80.0).contains(&concentration));
        }
    }

    #[test]
    fn test_small_trades_have_small_impact() {
        for _ in 0..50 {
            assert!(price_impact(1.0) < 0.5);
        }
    }
}

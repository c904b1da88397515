pub mod basescan;
pub mod coingecko;
pub mod facilitator;
pub mod rpc;

use log::warn;

/// Downgrade a failed upstream branch to its fallback value. Handlers
/// stay able to produce a 200 under partial upstream failure; only the
/// branch's fields end up defaulted.
pub fn or_default<T: Default>(result: anyhow::Result<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("{what} upstream call failed, substituting fallback: {e}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_absorbs_failures() {
        let failed: anyhow::Result<Vec<u32>> = Err(anyhow::anyhow!("connection refused"));
        assert!(or_default(failed, "test").is_empty());

        let ok: anyhow::Result<u64> = Ok(42);
        assert_eq!(or_default(ok, "test"), 42);
    }
}

//! Test fixtures and data for registry tests

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const STORE_FILE: &'static str = "exclusion_coins.json";

    pub const STABLE_COIN: &'static str = "USDC";
    pub const PROBLEMATIC_COIN: &'static str = "XYZ";

    /// Candidate symbols from the reference filtering case
    pub fn candidate_symbols() -> Vec<String> {
        vec![
            "BTCUSDT".to_string(),
            "USDCUSDT".to_string(),
            "XYZUSDT".to_string(),
            "ETHBUSD".to_string(),
        ]
    }

    /// Symbols expected to survive filtering of `candidate_symbols`
    pub fn surviving_symbols() -> Vec<String> {
        vec!["BTCUSDT".to_string(), "ETHBUSD".to_string()]
    }

    /// Typical stable coin pairs as they arrive from an exchange listing
    pub fn stable_pairs() -> Vec<&'static str> {
        vec!["USDCUSDT", "FDUSDUSDT", "TUSDUSDT", "DAIUSDT", "USDT"]
    }

    /// Hand-written record in the persisted layout
    pub fn stored_record_json() -> &'static str {
        r#"{
    "stable_coins": ["USDC", "DAI"],
    "problematic_coins": ["XYZ"]
}"#
    }
}

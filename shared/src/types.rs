//! Core symbol types shared by the exclusion tooling

use std::fmt;

/// Quote currency suffix recognized on trading-pair symbols
pub const QUOTE_SUFFIX: &str = "USDT";

/// Which exclusion list a coin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionKind {
    Stable,
    Problematic,
}

impl ExclusionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionKind::Stable => "stable",
            ExclusionKind::Problematic => "problematic",
        }
    }
}

impl fmt::Display for ExclusionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reduce a symbol to its base ticker.
///
/// A trailing `USDT` is stripped unless the symbol is exactly `USDT`, so the
/// quote currency itself never collapses to an empty ticker. Any other input
/// is returned unchanged, including the empty string.
pub fn base_ticker(symbol: &str) -> &str {
    if symbol == QUOTE_SUFFIX {
        return symbol;
    }
    symbol.strip_suffix(QUOTE_SUFFIX).unwrap_or(symbol)
}

/// Build the `USDT` trading-pair symbol for a base ticker
pub fn pair_symbol(base: &str) -> String {
    format!("{base}{QUOTE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_ticker_strips_quote_suffix() {
        assert_eq!(base_ticker("USDCUSDT"), "USDC");
        assert_eq!(base_ticker("BTCUSDT"), "BTC");
    }

    #[test]
    fn test_base_ticker_keeps_bare_quote() {
        assert_eq!(base_ticker("USDT"), "USDT");
    }

    #[test]
    fn test_base_ticker_passthrough() {
        assert_eq!(base_ticker("USDC"), "USDC");
        assert_eq!(base_ticker("ETHBUSD"), "ETHBUSD");
        assert_eq!(base_ticker(""), "");
        // Only one suffix is stripped
        assert_eq!(base_ticker("USDTUSDT"), "USDT");
    }

    #[test]
    fn test_pair_symbol() {
        assert_eq!(pair_symbol("XYZ"), "XYZUSDT");
        assert_eq!(pair_symbol("USDT"), "USDTUSDT");
    }

    #[test]
    fn test_exclusion_kind_display() {
        assert_eq!(ExclusionKind::Stable.to_string(), "stable");
        assert_eq!(ExclusionKind::Problematic.to_string(), "problematic");
    }
}

//! Exclusion registry
//!
//! Owns the stable and problematic coin lists, persists them through a
//! [`RecordStore`] after every accepted addition, and filters trading-pair
//! symbols against them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shared::{base_ticker, pair_symbol, registry_debug, registry_info, ExclusionKind};

use crate::config::RegistryConfig;
use crate::error::ExclusionResult;
use crate::services::JsonRecordStore;
use crate::traits::RecordStore;
use crate::types::ExclusionRecord;

pub struct ExclusionRegistry<S: RecordStore = JsonRecordStore> {
    store: S,
    record: ExclusionRecord,
    location: String,
}

impl ExclusionRegistry<JsonRecordStore> {
    /// Open the registry stored at `path`
    pub fn open(path: impl Into<PathBuf>) -> ExclusionResult<Self> {
        Self::from_config(&RegistryConfig::new(path))
    }

    pub fn from_config(config: &RegistryConfig) -> ExclusionResult<Self> {
        config.validate()?;
        Self::with_store(JsonRecordStore::from_config(config))
    }

    /// Storage file backing this registry
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: RecordStore> ExclusionRegistry<S> {
    /// Load the current record from `store`
    pub fn with_store(store: S) -> ExclusionResult<Self> {
        let record = store.load()?;
        let location = store.location();
        Ok(Self {
            store,
            record,
            location,
        })
    }

    /// Add a stable coin. Returns whether the list changed.
    pub fn add_stable_coin(&mut self, symbol: &str) -> ExclusionResult<bool> {
        self.add_coin(ExclusionKind::Stable, symbol)
    }

    /// Add a problematic coin. Returns whether the list changed.
    pub fn add_problematic_coin(&mut self, symbol: &str) -> ExclusionResult<bool> {
        self.add_coin(ExclusionKind::Problematic, symbol)
    }

    /// Normalize `symbol` to its base ticker and append it to the `kind` list.
    ///
    /// Empty and already-present tickers are ignored without touching storage.
    /// When the write fails the addition is rolled back so memory never runs
    /// ahead of the stored record.
    pub fn add_coin(&mut self, kind: ExclusionKind, symbol: &str) -> ExclusionResult<bool> {
        let base = base_ticker(symbol);

        if base.is_empty() {
            registry_debug!(self.location, "Ignoring empty {} coin symbol", kind);
            return Ok(false);
        }
        if self.record.list(kind).iter().any(|coin| coin == base) {
            registry_debug!(self.location, "{} already listed as {} coin", base, kind);
            return Ok(false);
        }

        self.record.list_mut(kind).push(base.to_string());
        if let Err(e) = self.store.save(&self.record) {
            self.record.list_mut(kind).pop();
            return Err(e);
        }

        registry_info!(self.location, "➕ Added {} as {} coin", base, kind);
        Ok(true)
    }

    pub fn stable_coins(&self) -> &[String] {
        &self.record.stable_coins
    }

    pub fn problematic_coins(&self) -> &[String] {
        &self.record.problematic_coins
    }

    /// Stable coins followed by problematic coins, duplicates kept
    pub fn exclusion_coins(&self) -> Vec<String> {
        self.record.combined()
    }

    pub fn record(&self) -> &ExclusionRecord {
        &self.record
    }

    /// Whether `symbol` is the `USDT` pair of an excluded coin
    pub fn is_excluded(&self, symbol: &str) -> bool {
        self.excluded_pairs().contains(symbol)
    }

    /// Keep the symbols that are not the `USDT` pair of an excluded coin.
    ///
    /// Order is preserved. Pairs quoted in any other currency always pass.
    pub fn filter_symbols<T>(&self, symbols: &[T]) -> Vec<T>
    where
        T: AsRef<str> + Clone,
    {
        let excluded = self.excluded_pairs();
        let kept: Vec<T> = symbols
            .iter()
            .filter(|symbol| {
                let symbol: &str = (*symbol).as_ref();
                !excluded.contains(symbol)
            })
            .cloned()
            .collect();

        registry_debug!(
            self.location,
            "🔍 Filtered {} symbols, kept {}",
            symbols.len(),
            kept.len()
        );
        kept
    }

    /// `base + "USDT"` for every stable and problematic coin
    fn excluded_pairs(&self) -> HashSet<String> {
        self.exclusion_coins()
            .iter()
            .map(|base| pair_symbol(base))
            .collect()
    }
}

//! Gene-symbol resolution.
//!
//! Free-text symbols from the call-set table are mapped to stable gene
//! identifiers through a [`SymbolResolver`]. The pipeline only depends on the
//! trait; the file-backed [`SynonymIndex`] is the production implementation.
//!
//! A symbol may legitimately resolve to several identifiers (paralogous loci,
//! alias collisions). That ambiguity is preserved here and handled downstream
//! by overlap filtering, never by picking one identifier.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::pair::normalize_symbol;
use crate::core::types::GeneId;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to read synonym index: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps one gene symbol to a set of zero or more stable identifiers.
pub trait SymbolResolver {
    /// Resolve a symbol; an unknown symbol yields the empty set.
    fn resolve(&self, symbol: &str) -> HashSet<GeneId>;
}

/// File-backed symbol index.
///
/// Each line of the index file starts with a gene identifier; every further
/// tab-separated field is a symbol or synonym for it. Within a field,
/// alternative names may be packed with `,`, `;` or `|`. The mapping is
/// many-to-many: one symbol may be claimed by several identifiers and one
/// identifier usually carries several symbols.
#[derive(Debug, Default)]
pub struct SynonymIndex {
    symbol_to_ids: HashMap<String, HashSet<GeneId>>,
}

impl SynonymIndex {
    /// Load the index from a synonym file.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Io` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let content = std::fs::read_to_string(path)?;
        let index = Self::from_text(&content);
        debug!(
            "loaded synonym index from {} ({} symbols)",
            path.display(),
            index.len()
        );
        Ok(index)
    }

    /// Build the index from synonym-file text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut index = Self::default();

        for line in text.lines() {
            let mut fields = line.trim_end_matches('\r').split('\t');
            let Some(id) = fields.next().map(str::trim).filter(|id| !id.is_empty()) else {
                continue;
            };
            let id = GeneId::new(id);

            for field in fields {
                for symbol in field.split([',', ';', '|']) {
                    index.insert(symbol, id.clone());
                }
            }
        }

        index
    }

    /// Register one symbol for an identifier. Empty symbols are ignored.
    pub fn insert(&mut self, symbol: &str, id: GeneId) {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return;
        }
        self.symbol_to_ids.entry(symbol).or_default().insert(id);
    }

    /// Number of distinct symbols in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbol_to_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbol_to_ids.is_empty()
    }
}

impl SymbolResolver for SynonymIndex {
    fn resolve(&self, symbol: &str) -> HashSet<GeneId> {
        self.symbol_to_ids
            .get(&normalize_symbol(symbol))
            .cloned()
            .unwrap_or_default()
    }
}

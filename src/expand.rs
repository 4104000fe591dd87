//! Cross-expansion of symbol pairs into identifier pairs.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::pair::{GenePair, SymbolPair};
use crate::resolve::SymbolResolver;

/// Expand canonical symbol pairs into candidate identifier pairs.
///
/// Each side of a symbol pair is resolved independently; the full cross
/// product of the two identifier sets is emitted as canonical [`GenePair`]s.
/// A symbol pair where either side resolves to nothing is dropped, as is any
/// combination where both identifiers coincide. The result is deduplicated
/// and sorted, so the output is deterministic regardless of input order.
pub fn expand_symbol_pairs<R, I>(pairs: I, resolver: &R) -> Vec<GenePair>
where
    R: SymbolResolver + ?Sized,
    I: IntoIterator<Item = SymbolPair>,
{
    let mut expanded = BTreeSet::new();
    let mut unresolved = 0usize;

    for pair in pairs {
        let left = resolver.resolve(pair.first());
        let right = resolver.resolve(pair.second());
        if left.is_empty() || right.is_empty() {
            // No identifier can be assigned; conservatively excluded
            unresolved += 1;
            continue;
        }

        for a in &left {
            for b in &right {
                if let Some(gene_pair) = GenePair::new(a.clone(), b.clone()) {
                    expanded.insert(gene_pair);
                }
            }
        }
    }

    if unresolved > 0 {
        debug!("{unresolved} symbol pairs dropped with an unresolvable side");
    }

    expanded.into_iter().collect()
}

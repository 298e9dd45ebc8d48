//! Symbol probability tables and Gilbert-Moore code-word assignment.
//!
//! Code words are cut from the binary expansion of each symbol's cumulative
//! midpoint, so they depend on the traversal order of the probability table.
//! That order is part of the contract: tables are keyed in first-occurrence
//! order of a single left-to-right scan, and two inputs with the same symbol
//! multiset but different first occurrences produce different code tables.

use crate::binfrac;
use crate::error::{GmcError, Result};
use indexmap::IndexMap;
use std::hash::Hash;

/// Round to two decimal places, the display granularity the probability
/// table is quantized to.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Symbol probabilities in first-occurrence order.
///
/// Probabilities are relative frequencies quantized to two decimal places.
/// Quantization can push a very rare symbol to 0.0; such an entry is kept in
/// the table (the counts were real) and rejected by the domain guard in
/// [`assign_code_words`] when a code is requested for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable<S: Eq + Hash> {
    entries: IndexMap<S, f64>,
}

impl<S: Eq + Hash + Copy> ProbabilityTable<S> {
    /// Build a table from explicit (symbol, probability) pairs, preserving
    /// the given order. Later duplicates overwrite earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self { entries: pairs.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, symbol: &S) -> Option<f64> {
        self.entries.get(symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.entries.iter().map(|(s, &p)| (s, p))
    }
}

/// One counting pass over `symbols`, yielding relative frequencies keyed in
/// first-occurrence order. Fails with `InvalidInput` on empty input.
pub fn build_probability_table<S: Eq + Hash + Copy>(symbols: &[S]) -> Result<ProbabilityTable<S>> {
    if symbols.is_empty() {
        return Err(GmcError::InvalidInput(
            "cannot build a probability table from an empty sequence".to_string(),
        ));
    }

    let mut counts: IndexMap<S, usize> = IndexMap::new();
    for &symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let total = symbols.len() as f64;
    let entries = counts
        .into_iter()
        .map(|(symbol, count)| (symbol, round2(count as f64 / total)))
        .collect();

    Ok(ProbabilityTable { entries })
}

/// A derived code-table row. Immutable once computed; rows share no state
/// beyond the cumulative sum threaded through the assignment traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeWordRow<S> {
    /// 1-based assignment order.
    pub index: usize,
    pub symbol: S,
    pub probability: f64,
    /// Sum of all strictly-prior symbols' probabilities.
    pub cumulative: f64,
    /// `cumulative + probability / 2`, the anchor the code word is cut from.
    pub midpoint: f64,
    /// The midpoint formatted as a fixed-point binary fraction.
    pub midpoint_binary: String,
    pub code_length: usize,
    pub code_word: String,
}

/// Derive a code word for every table entry, in table order.
///
/// The cumulative probability is carried through one ordered traversal
/// rather than recomputed by partial summation, so every row sees the same
/// canonical ordering. `precision` is the number of fractional binary digits
/// requested from the formatter and bounds the longest representable code
/// word; size it at or above `ceil(-log2(p_min / 2))` for the smallest
/// probability in the table, or assignment fails with
/// `InsufficientPrecision`.
pub fn assign_code_words<S: Eq + Hash + Copy>(
    table: &ProbabilityTable<S>,
    precision: usize,
) -> Result<Vec<CodeWordRow<S>>> {
    let mut rows = Vec::with_capacity(table.len());
    let mut running_sum = 0.0f64;

    for (index, (&symbol, probability)) in table.iter().enumerate() {
        let cumulative = round2(running_sum);
        running_sum += probability;

        let row = derive_row(index + 1, symbol, probability, cumulative, precision)?;
        rows.push(row);
    }

    Ok(rows)
}

fn derive_row<S>(
    index: usize,
    symbol: S,
    probability: f64,
    cumulative: f64,
    precision: usize,
) -> Result<CodeWordRow<S>> {
    if probability <= 0.0 {
        return Err(GmcError::Domain(format!(
            "probability {} of symbol #{} is not positive",
            probability, index
        )));
    }
    let half = probability / 2.0;
    if half >= 1.0 {
        return Err(GmcError::Domain(format!(
            "probability {} of symbol #{} exceeds 1",
            probability, index
        )));
    }

    let code_length = (-half.log2()).ceil() as usize;
    let midpoint = cumulative + half;
    let midpoint_binary = binfrac::format_fixed(midpoint, precision)?;

    let fractional = midpoint_binary
        .split('.')
        .nth(1)
        .unwrap_or("");
    if code_length > fractional.len() {
        return Err(GmcError::InsufficientPrecision {
            required: code_length,
            available: fractional.len(),
        });
    }

    let code_word = fractional[..code_length].to_string();

    Ok(CodeWordRow {
        index,
        symbol,
        probability,
        cumulative,
        midpoint,
        midpoint_binary,
        code_length,
        code_word,
    })
}

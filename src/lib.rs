//! # GMC (Gilbert-Moore Coding) Analysis Platform
//!
//! A library for measuring the empirical entropy of a byte stream and
//! deriving a Shannon-Fano-Elias-style ("Gilbert-Moore") prefix code for its
//! symbol alphabet from cumulative probabilities.
//!
//! ## Features
//!
//! - **Entropy Measurement**: Shannon entropy (bits/symbol) over the
//!   empirical distribution of any discrete symbol sequence
//! - **Bit-Pair Transposition**: a fixed reversible permutation of the bit
//!   expansion, its own inverse on even-length input
//! - **Code-Word Derivation**: per-symbol code words cut from the binary
//!   expansion of cumulative-probability midpoints, in first-occurrence order
//! - **Fixed-Point Binary Formatting**: exact dyadic-rational rendering of
//!   midpoints with explicit precision control
//!
//! The core is a pure, single-threaded pipeline: no shared state, no I/O.
//! The CLI layer fans out over independent input files in parallel.
//!
//! ## Quick Start
//!
//! ### Analyzing a buffer
//!
//! ```rust
//! use gmc::{analyze_bytes, GmcConfig};
//!
//! let report = analyze_bytes(b"abracadabra", &GmcConfig::default()).unwrap();
//!
//! // The transposition permutes bits, so the bit-level entropy is unchanged.
//! assert!((report.source_entropy - report.encoded_entropy).abs() < 1e-12);
//! assert_eq!(report.bits.len(), 8 * 11);
//! ```
//!
//! ### Deriving a code table directly
//!
//! ```rust
//! use gmc::code_table;
//!
//! let symbols: Vec<char> = "aabb".chars().collect();
//! let rows = code_table(&symbols, 8).unwrap();
//!
//! assert_eq!(rows[0].code_word, "01");
//! assert_eq!(rows[1].code_word, "11");
//! ```
//!
//! ### Measuring entropy on its own
//!
//! ```rust
//! use gmc::compute_entropy;
//!
//! let symbols: Vec<char> = "0110".chars().collect();
//! let entropy = compute_entropy(&symbols).unwrap();
//! assert!((entropy - 1.0).abs() < 1e-12);
//! ```

pub mod binfrac;
pub mod bits;
pub mod cli;
pub mod codebook;
pub mod config;
pub mod entropy;
pub mod error;
pub mod pipeline;
pub mod transpose;

// Re-export commonly used types for convenience
pub use bits::BitSequence;
pub use codebook::{assign_code_words, build_probability_table, CodeWordRow, ProbabilityTable};
pub use config::{GmcConfig, DEFAULT_PRECISION};
pub use entropy::compute_entropy;
pub use error::{GmcError, Result};
pub use pipeline::{analyze, analyze_bytes, AnalysisReport};
pub use transpose::transpose_bit_pairs;

use std::hash::Hash;

/// Build the probability table for `symbols` and assign code words in one
/// call.
///
/// Equivalent to [`build_probability_table`] followed by
/// [`assign_code_words`]; `precision` is the number of fractional binary
/// digits requested from the midpoint formatter.
pub fn code_table<S: Eq + Hash + Copy>(
    symbols: &[S],
    precision: usize,
) -> Result<Vec<CodeWordRow<S>>> {
    let table = build_probability_table(symbols)?;
    assign_code_words(&table, precision)
}

/// GMC library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

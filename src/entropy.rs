use crate::error::{GmcError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy of a symbol sequence, in bits per symbol.
///
/// Partitions the sequence into symbol classes by one counting pass and
/// returns `-sum(p * log2(p))` over the classes. Empty input is rejected:
/// entropy over zero symbols is undefined and returning 0.0 would be
/// indistinguishable from a constant sequence.
pub fn compute_entropy<S: Eq + Hash + Copy>(symbols: &[S]) -> Result<f64> {
    if symbols.is_empty() {
        return Err(GmcError::InvalidInput(
            "cannot compute entropy of an empty sequence".to_string(),
        ));
    }

    let mut counts: HashMap<S, usize> = HashMap::new();
    for &symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let total = symbols.len() as f64;
    let entropy = counts
        .values()
        .map(|&count| count as f64 / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum();

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        let symbols: Vec<u8> = Vec::new();
        assert!(compute_entropy(&symbols).is_err());
    }

    #[test]
    fn test_single_symbol_class_is_zero() {
        let symbols = vec![7u8; 100];
        let entropy = compute_entropy(&symbols).unwrap();
        assert_eq!(entropy, 0.0);
    }

    #[test]
    fn test_fair_coin_is_one_bit() {
        let symbols: Vec<char> = "0110".chars().collect();
        let entropy = compute_entropy(&symbols).unwrap();
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_256_is_eight_bits() {
        let symbols: Vec<u8> = (0..=255).collect();
        let entropy = compute_entropy(&symbols).unwrap();
        assert!((entropy - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounded_by_log2_of_alphabet() {
        // Skewed three-symbol distribution.
        let mut symbols = vec![b'a'; 70];
        symbols.extend(vec![b'b'; 20]);
        symbols.extend(vec![b'c'; 10]);
        let entropy = compute_entropy(&symbols).unwrap();
        assert!(entropy > 0.0);
        assert!(entropy <= 3f64.log2() + 1e-12);
    }
}

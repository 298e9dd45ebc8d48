use crate::bits::BitSequence;

/// Bit-pair transposition: a fixed, reversible permutation that swaps each
/// adjacent pair of bits. For even position i, output[i] = input[i + 1] and
/// output[i + 1] = input[i].
///
/// Odd-length input is zero-padded to even length *before* the swap, so the
/// output of an odd-length input is one bit longer than the input. Applying
/// the transform twice then recovers the padded sequence, not the original;
/// callers that need the exact original length must track it themselves.
/// On even-length input the transform is its own inverse.
pub fn transpose_bit_pairs(bits: &BitSequence) -> BitSequence {
    let input = bits.as_slice();
    let mut output = BitSequence::with_capacity(input.len() + 1);

    let mut pairs = input.chunks_exact(2);
    for pair in &mut pairs {
        output.push(pair[1]);
        output.push(pair[0]);
    }
    // Trailing unpaired bit: pad with 0, then swap the pair.
    if let [last] = pairs.remainder() {
        output.push(0);
        output.push(*last);
    }

    output
}

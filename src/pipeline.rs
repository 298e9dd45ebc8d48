use crate::bits::BitSequence;
use crate::codebook::{assign_code_words, build_probability_table, CodeWordRow};
use crate::config::GmcConfig;
use crate::entropy::compute_entropy;
use crate::error::{GmcError, Result};
use crate::transpose::transpose_bit_pairs;
use log::debug;
use std::io::{Read, Write};

/// Everything the analysis of one input produces: the bit expansion, the
/// entropy on both sides of the bit-pair transposition, and the code-word
/// table over the input's characters.
#[derive(Debug)]
pub struct AnalysisReport {
	pub byte_count: usize,
	pub bits: BitSequence,
	pub source_entropy: f64,
	pub encoded: BitSequence,
	pub encoded_entropy: f64,
	pub rows: Vec<CodeWordRow<char>>,
}

pub fn analyze<R: Read>(reader: &mut R, config: &GmcConfig) -> Result<AnalysisReport> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	analyze_bytes(&buffer, config)
}

/// Run the full analysis over an in-memory buffer.
///
/// Bytes are expanded MSB-first into bits, measured, transposed, measured
/// again, and independently decoded as UTF-8 (lossily, so binary inputs
/// still analyze) to build the per-character code-word table.
pub fn analyze_bytes(data: &[u8], config: &GmcConfig) -> Result<AnalysisReport> {
	config.validate()?;
	if data.is_empty() {
		return Err(GmcError::InvalidInput(
			"cannot analyze an empty input".to_string(),
		));
	}

	let bits = BitSequence::from_bytes(data);
	let source_entropy = compute_entropy(bits.as_slice())?;

	let encoded = transpose_bit_pairs(&bits);
	let encoded_entropy = compute_entropy(encoded.as_slice())?;

	let text = String::from_utf8_lossy(data);
	let symbols: Vec<char> = text.chars().collect();
	let table = build_probability_table(&symbols)?;
	let rows = assign_code_words(&table, config.precision)?;

	debug!(
		"analyzed {} bytes: {} bits, entropy {:.4} -> {:.4}, {} code words",
		data.len(),
		bits.len(),
		source_entropy,
		encoded_entropy,
		rows.len()
	);

	Ok(AnalysisReport {
		byte_count: data.len(),
		bits,
		source_entropy,
		encoded,
		encoded_entropy,
		rows,
	})
}

/// Persist a bit sequence in its textual `'0'`/`'1'` form.
pub fn write_bit_sequence<W: Write>(writer: &mut W, bits: &BitSequence) -> Result<()> {
	writer.write_all(bits.to_string().as_bytes())?;
	Ok(())
}

/// Read back a bit sequence persisted by [`write_bit_sequence`]. Surrounding
/// whitespace (a trailing newline, typically) is ignored.
pub fn read_bit_sequence<R: Read>(reader: &mut R) -> Result<BitSequence> {
	let mut text = String::new();
	reader.read_to_string(&mut text)?;
	BitSequence::parse(text.trim())
}

use gmc::config::GmcConfig;
use gmc::{analyze_bytes, code_table};

fn main() {
	let data = b"hello hello hello hello".to_vec();
	let cfg = GmcConfig::default();
	let report = analyze_bytes(&data, &cfg).unwrap();
	println!(
		"entropy {:.4} -> {:.4} bits/symbol over {} bits",
		report.source_entropy,
		report.encoded_entropy,
		report.bits.len()
	);

	let symbols: Vec<char> = "abracadabra".chars().collect();
	let rows = code_table(&symbols, cfg.precision).unwrap();
	for row in rows {
		println!("{} {:?} p={:.2} -> {}", row.index, row.symbol, row.probability, row.code_word);
	}
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GmcError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Domain error: {0}")]
	Domain(String),

	#[error("Precision error: {0}")]
	Precision(String),

	#[error("Insufficient precision: code word needs {required} fractional digits, formatter produced {available}")]
	InsufficientPrecision { required: usize, available: usize },

	#[error("Configuration error: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, GmcError>;

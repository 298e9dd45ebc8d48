use crate::error::GmcError;

/// Default number of fractional binary digits requested from the
/// binary-fraction formatter.
pub const DEFAULT_PRECISION: usize = 8;

#[derive(Debug, Clone)]
pub struct GmcConfig {
    pub precision: usize,
    pub threads: usize,
}

impl Default for GmcConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            threads: num_cpus::get(),
        }
    }
}

impl GmcConfig {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Code words are cut from the formatter's fractional digits, so a
    /// zero precision can never yield a code word.
    pub fn validate(&self) -> Result<(), GmcError> {
        if self.precision == 0 {
            return Err(GmcError::Config(
                "precision must be at least 1 fractional digit".to_string(),
            ));
        }
        if self.threads == 0 {
            return Err(GmcError::Config("thread count must be at least 1".to_string()));
        }
        Ok(())
    }
}

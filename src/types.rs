use clap::ValueEnum;

/// Default length of the hash prefix used as a pseudonym
pub const DEFAULT_TOKEN_LENGTH: usize = 8;

/// Default output path for the transformed table
pub const DEFAULT_OUTPUT_FILE: &str = "transformed_output.csv";

/// Hash algorithm used to derive pseudonyms
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Length of the full hex digest for this algorithm
    pub fn hex_digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha256
    }
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, crate::error::Error>;

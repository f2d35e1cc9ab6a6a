use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// How many rows the variation chart shows by default.
pub const DEFAULT_TOP_N: usize = 20;

/// Central configuration loaded from environment variables.
///
/// Everything here is a default that CLI flags can override. The .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Default top-N for the variation chart (LEXIVAR_TOP_N)
    pub top_n: usize,
    /// Where result CSVs go when set; otherwise next to the input file
    /// (LEXIVAR_OUT_DIR)
    pub out_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A malformed LEXIVAR_TOP_N is an error rather than a silent fallback
    /// to the default.
    pub fn load() -> Result<Self> {
        let top_n = match env::var("LEXIVAR_TOP_N") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("LEXIVAR_TOP_N must be a positive integer, got {raw:?}")
            })?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self {
            top_n,
            out_dir: env::var("LEXIVAR_OUT_DIR").ok().map(PathBuf::from),
        })
    }
}

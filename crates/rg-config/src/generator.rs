use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_COUNT: usize = 5000;
pub const DEFAULT_OUTPUT: &str = "reviews.jsonl";
pub const DEFAULT_PROGRESS_EVERY: usize = 500;

/// `[generator]` section: how many records to produce and where to put them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub count: usize,
    /// Output JSONL path. Relative paths are resolved against the config
    /// file's parent directory.
    pub output: PathBuf,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Emit a progress log line every N records.
    pub progress_every: usize,
    /// Print the first record pretty-printed after generation.
    pub sample: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            progress_every: DEFAULT_PROGRESS_EVERY,
            sample: true,
        }
    }
}

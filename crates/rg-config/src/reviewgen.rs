use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::generator::GeneratorConfig;
use crate::logging::LoggingConfig;
use crate::validate;

// ---------------------------------------------------------------------------
// Raw TOML structure (intermediate representation)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReviewGenConfigRaw {
    #[serde(default)]
    generator: GeneratorConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// ReviewGenConfig (resolved, validated)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ReviewGenConfig {
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

impl ReviewGenConfig {
    /// Read and parse a `reviewgen.toml` file.
    ///
    /// Relative `generator.output` and `logging.file` paths are resolved
    /// against the directory containing the config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let mut config: Self = content.parse()?;
        if let Some(base_dir) = path.parent() {
            config.resolve_paths(base_dir);
        }
        Ok(config)
    }

    /// Anchor relative paths at `base_dir`.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if self.generator.output.is_relative() {
            self.generator.output = base_dir.join(&self.generator.output);
        }
        if let Some(file) = self.logging.file.as_mut() {
            if file.is_relative() {
                *file = base_dir.join(&*file);
            }
        }
    }
}

impl FromStr for ReviewGenConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a validated [`ReviewGenConfig`].
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let raw: ReviewGenConfigRaw = toml::from_str(toml_str)?;

        let config = ReviewGenConfig {
            generator: raw.generator,
            logging: raw.logging,
        };

        validate::validate(&config)?;

        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use std::path::PathBuf;

    const FULL_TOML: &str = r#"
[generator]
count = 250
output = "data/reviews.jsonl"
seed = 42
progress_every = 50
sample = false

[logging]
level = "debug"
modules = { "reviewgen::output" = "trace" }
file = "logs/reviewgen.log"
format = "json"
"#;

    #[test]
    fn parse_full_config() {
        let cfg: ReviewGenConfig = FULL_TOML.parse().unwrap();
        assert_eq!(cfg.generator.count, 250);
        assert_eq!(cfg.generator.output, PathBuf::from("data/reviews.jsonl"));
        assert_eq!(cfg.generator.seed, Some(42));
        assert_eq!(cfg.generator.progress_every, 50);
        assert!(!cfg.generator.sample);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(
            cfg.logging.modules.get("reviewgen::output").map(String::as_str),
            Some("trace")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ReviewGenConfig = "".parse().unwrap();
        assert_eq!(cfg.generator, GeneratorConfig::default());
        assert_eq!(cfg.generator.count, 5000);
        assert_eq!(cfg.generator.output, PathBuf::from("reviews.jsonl"));
        assert_eq!(cfg.generator.seed, None);
        assert_eq!(cfg.generator.progress_every, 500);
        assert!(cfg.generator.sample);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, LogFormat::Plain);
        assert!(cfg.logging.file.is_none());
    }

    #[test]
    fn partial_generator_section_keeps_other_defaults() {
        let cfg: ReviewGenConfig = "[generator]\ncount = 0\n".parse().unwrap();
        assert_eq!(cfg.generator.count, 0);
        assert_eq!(cfg.generator.progress_every, 500);
    }

    #[test]
    fn reject_zero_progress_interval() {
        let err = "[generator]\nprogress_every = 0\n"
            .parse::<ReviewGenConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("progress_every"), "{err}");
    }

    #[test]
    fn reject_empty_output() {
        let err = "[generator]\noutput = \"\"\n"
            .parse::<ReviewGenConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("generator.output"), "{err}");
    }

    #[test]
    fn reject_unknown_section() {
        assert!("[server]\nlisten = \"x\"\n".parse::<ReviewGenConfig>().is_err());
    }

    #[test]
    fn reject_unknown_log_format() {
        assert!("[logging]\nformat = \"xml\"\n".parse::<ReviewGenConfig>().is_err());
    }

    #[test]
    fn resolve_relative_paths_against_base_dir() {
        let mut cfg: ReviewGenConfig = FULL_TOML.parse().unwrap();
        cfg.resolve_paths(Path::new("/srv/demo"));
        assert_eq!(
            cfg.generator.output,
            PathBuf::from("/srv/demo/data/reviews.jsonl")
        );
        assert_eq!(
            cfg.logging.file,
            Some(PathBuf::from("/srv/demo/logs/reviewgen.log"))
        );
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let mut cfg: ReviewGenConfig = "[generator]\noutput = \"/tmp/out.jsonl\"\n"
            .parse()
            .unwrap();
        cfg.resolve_paths(Path::new("/srv/demo"));
        assert_eq!(cfg.generator.output, PathBuf::from("/tmp/out.jsonl"));
    }
}

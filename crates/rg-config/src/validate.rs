use crate::reviewgen::ReviewGenConfig;

/// Run all semantic checks on a resolved config.
pub fn validate(config: &ReviewGenConfig) -> anyhow::Result<()> {
    let generator = &config.generator;
    if generator.progress_every == 0 {
        anyhow::bail!("generator.progress_every must be greater than 0");
    }
    if generator.output.as_os_str().is_empty() {
        anyhow::bail!("generator.output must not be empty");
    }
    if generator.output.file_name().is_none() {
        anyhow::bail!(
            "generator.output {:?} does not name a file",
            generator.output.display().to_string()
        );
    }
    if config.logging.level.trim().is_empty() {
        anyhow::bail!("logging.level must not be empty");
    }
    Ok(())
}

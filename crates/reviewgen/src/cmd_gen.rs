use anyhow::Context;
use rg_config::GeneratorConfig;

use reviewgen::dataset::generate_dataset_with_progress;
use reviewgen::output::jsonl::write_jsonl;
use reviewgen::{DatasetStats, GenContext};

pub(crate) fn run(config: &GeneratorConfig) -> anyhow::Result<()> {
    tracing::info!(
        domain = "sys",
        count = config.count,
        output = %config.output.display(),
        seed = ?config.seed,
        "reviewgen started"
    );

    let mut ctx = GenContext::from_seed_option(config.seed);
    let records = generate_dataset_with_progress(config.count, config.progress_every, &mut ctx);

    write_jsonl(&records, &config.output)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("writing dataset to {}", config.output.display()))?;
    println!(
        "Generated {} records -> {}",
        records.len(),
        config.output.display()
    );

    if config.sample {
        if let Some(first) = records.first() {
            println!("\nSample record:");
            println!("{}", serde_json::to_string_pretty(first)?);
        }
    }

    println!("\n{}", DatasetStats::collect(&records));
    Ok(())
}

use std::path::Path;

use anyhow::Context;

use reviewgen::DatasetStats;
use reviewgen::output::jsonl::read_jsonl;

pub(crate) fn run(input: &Path) -> anyhow::Result<()> {
    let records = read_jsonl(input)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("reading dataset {}", input.display()))?;
    print!("{}", DatasetStats::collect(&records));
    Ok(())
}

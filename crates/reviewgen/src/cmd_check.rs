use std::path::Path;

use anyhow::Context;

use reviewgen::check::check_record;
use reviewgen::output::jsonl::read_jsonl;

pub(crate) fn run(input: &Path) -> anyhow::Result<()> {
    let records = read_jsonl(input)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("reading dataset {}", input.display()))?;

    let mut violations = 0usize;
    for (idx, record) in records.iter().enumerate() {
        for problem in check_record(record) {
            eprintln!("  record {} ({}): {problem}", idx + 1, record.review_id);
            violations += 1;
        }
    }

    if violations > 0 {
        anyhow::bail!(
            "{violations} violation(s) found in {} record(s)",
            records.len()
        );
    }
    println!("{} records OK", records.len());
    Ok(())
}

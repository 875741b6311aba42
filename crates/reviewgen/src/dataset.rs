use rg_config::generator::DEFAULT_PROGRESS_EVERY;

use crate::context::GenContext;
use crate::record::{Record, assemble_record};

/// Generate `count` independent records, logging progress every 500.
pub fn generate_dataset(count: usize, ctx: &mut GenContext) -> Vec<Record> {
    generate_dataset_with_progress(count, DEFAULT_PROGRESS_EVERY, ctx)
}

/// Like [`generate_dataset`] with a custom progress interval. An interval of
/// 0 disables progress lines.
pub fn generate_dataset_with_progress(
    count: usize,
    progress_every: usize,
    ctx: &mut GenContext,
) -> Vec<Record> {
    rg_info!(synth, count, today = %ctx.today, "dataset generation started");

    let mut records = Vec::with_capacity(initial_capacity(count));
    for i in 0..count {
        records.push(assemble_record(ctx));
        let done = i + 1;
        if progress_every > 0 && done % progress_every == 0 {
            rg_info!(synth, done, total = count, "generation progress");
        }
    }

    rg_debug!(synth, records = records.len(), "dataset generation complete");
    records
}

/// Pre-allocation for `count` records, bounded so an absurd count grows the
/// vector on demand instead of failing up front.
fn initial_capacity(count: usize) -> usize {
    count.min(MAX_PREALLOCATED_RECORDS)
}

const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review_text::{RATING_WEIGHTS, Rating};
    use crate::ticket::TicketType;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn ctx(seed: u64) -> GenContext {
        GenContext::seeded(seed, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
    }

    #[test]
    fn zero_and_one() {
        assert!(generate_dataset(0, &mut ctx(1)).is_empty());
        assert_eq!(generate_dataset(1, &mut ctx(1)).len(), 1);
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        assert_eq!(initial_capacity(10), 10);
        assert_eq!(initial_capacity(usize::MAX), MAX_PREALLOCATED_RECORDS);
        let v: Vec<Record> = Vec::with_capacity(initial_capacity(usize::MAX));
        assert!(v.capacity() >= MAX_PREALLOCATED_RECORDS);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = generate_dataset_with_progress(50, 0, &mut ctx(42));
        let b = generate_dataset_with_progress(50, 0, &mut ctx(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_dataset(20, &mut ctx(1));
        let b = generate_dataset(20, &mut ctx(2));
        assert_ne!(a, b);
    }

    #[test]
    fn rating_distribution_matches_weights() {
        let n = 10_000;
        let records = generate_dataset(n, &mut ctx(2024));
        let mut counts: HashMap<Rating, usize> = HashMap::new();
        for r in &records {
            *counts.entry(r.review_rating).or_default() += 1;
        }
        for (rating, weight) in RATING_WEIGHTS {
            let observed = counts.get(&rating).copied().unwrap_or(0) as f64 / n as f64;
            assert!(
                (observed - weight).abs() < 0.02,
                "{rating}-star: observed {observed:.3}, expected {weight}"
            );
        }
    }

    #[test]
    fn ticket_types_are_uniform() {
        let n = 10_000;
        let records = generate_dataset(n, &mut ctx(7));
        for t in TicketType::ALL {
            let count = records.iter().filter(|r| r.support_ticket_type == t).count();
            let observed = count as f64 / n as f64;
            assert!(
                (observed - 0.25).abs() < 0.02,
                "{t}: observed {observed:.3}"
            );
        }
    }
}

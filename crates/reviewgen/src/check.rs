//! Invariant checks over generated records.

use crate::record::{Record, slugify};

/// Describe every invariant `record` violates. Empty means the record is
/// consistent with the catalog and ticket rules. Rating bounds are enforced
/// when the record is deserialized.
pub fn check_record(record: &Record) -> Vec<String> {
    let mut problems = Vec::new();

    match record.catalog_item() {
        Some(item) => {
            if !item.contains_price(record.price) {
                problems.push(format!(
                    "price {} outside [{}, {}] for {}",
                    record.price, item.min_price, item.max_price, record.product_name
                ));
            }
            if record.product_description != item.description {
                problems.push(format!(
                    "description does not match catalog entry for {}",
                    record.product_name
                ));
            }
        }
        None => problems.push(format!("unknown product {:?}", record.product_name)),
    }

    if record.slug != slugify(&record.product_name) {
        problems.push(format!(
            "slug {:?} does not match product name {:?}",
            record.slug, record.product_name
        ));
    }

    if record.review_description.trim().is_empty() {
        problems.push("empty review description".to_string());
    }
    if record.review_description.contains('{') || record.review_description.contains('}') {
        problems.push(format!(
            "unresolved template marker in {:?}",
            record.review_description
        ));
    }

    let status = record.support_ticket_status;
    let scenario = record.support_ticket_type.scenario();
    match (status.is_terminal(), record.support_ticket_resolution) {
        (true, None) => problems.push(format!("{status:?} ticket without resolution")),
        (false, Some(r)) => problems.push(format!("{status:?} ticket with resolution {r:?}")),
        (true, Some(r)) if !scenario.resolutions.contains(&r) => problems.push(format!(
            "resolution {r:?} invalid for {} tickets",
            record.support_ticket_type
        )),
        _ => {}
    }

    let (min, max) = scenario.duration_range;
    if !(min..=max).contains(&record.ticket_duration) {
        problems.push(format!(
            "duration {} outside [{min}, {max}] for {}",
            record.ticket_duration, record.support_ticket_type
        ));
    }

    problems
}

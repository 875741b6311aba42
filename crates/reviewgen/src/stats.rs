use std::fmt;

use crate::record::Record;
use crate::review_text::Rating;
use crate::ticket::TicketType;

/// Summary counts over a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    /// Index 0 holds 1-star reviews.
    pub by_rating: [usize; 5],
    /// Indexed in [`TicketType::ALL`] order.
    pub by_ticket_type: [usize; 4],
}

impl DatasetStats {
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;
            stats.by_rating[usize::from(record.review_rating.get() - Rating::MIN)] += 1;
            let type_idx = TicketType::ALL
                .iter()
                .position(|t| *t == record.support_ticket_type)
                .unwrap_or_default();
            stats.by_ticket_type[type_idx] += 1;
        }
        stats
    }

    pub fn rating_count(&self, rating: Rating) -> usize {
        self.by_rating[usize::from(rating.get() - Rating::MIN)]
    }

    pub fn ticket_type_count(&self, ticket_type: TicketType) -> usize {
        TicketType::ALL
            .iter()
            .position(|t| *t == ticket_type)
            .map(|i| self.by_ticket_type[i])
            .unwrap_or_default()
    }

    /// Share of `count` in percent; 0 for an empty dataset.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Statistics:")?;
        writeln!(f, "Total records: {}", self.total)?;
        for rating in Rating::all() {
            let count = self.rating_count(rating);
            writeln!(
                f,
                "{rating}-star reviews: {count} ({:.1}%)",
                self.percent(count)
            )?;
        }
        for ticket_type in TicketType::ALL {
            let count = self.ticket_type_count(ticket_type);
            writeln!(
                f,
                "{ticket_type} tickets: {count} ({:.1}%)",
                self.percent(count)
            )?;
        }
        Ok(())
    }
}

//! Support-ticket scenarios attached to each review.

use std::fmt;
use std::sync::LazyLock;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::weighted::WeightedTable;

/// Category of support request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Query,
    Refund,
    Replacement,
    Dispute,
}

/// Ticket lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// Terminal outcome of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    QueryResolved,
    RefundApproved,
    RefundRejected,
    ReplacementApproved,
    ReplacementRejected,
    DisputeResolved,
    DisputeRejected,
}

/// Static data for one ticket type.
#[derive(Debug)]
pub struct Scenario {
    pub comments: &'static [&'static str],
    /// Inclusive duration range in minutes.
    pub duration_range: (u32, u32),
    pub resolutions: &'static [Resolution],
}

impl TicketType {
    pub const ALL: [TicketType; 4] = [
        TicketType::Query,
        TicketType::Refund,
        TicketType::Replacement,
        TicketType::Dispute,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Query => "QUERY",
            TicketType::Refund => "REFUND",
            TicketType::Replacement => "REPLACEMENT",
            TicketType::Dispute => "DISPUTE",
        }
    }

    pub fn scenario(self) -> &'static Scenario {
        match self {
            TicketType::Query => &QUERY,
            TicketType::Refund => &REFUND,
            TicketType::Replacement => &REPLACEMENT,
            TicketType::Dispute => &DISPUTE,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TicketStatus {
    /// RESOLVED and CLOSED tickets carry a resolution; the others never do.
    pub fn is_terminal(self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    pub fn sample(rng: &mut StdRng) -> Self {
        STATUS_TABLE.sample(rng)
    }

    /// Sub-range of the type's `(min, max)` duration a ticket in this status
    /// falls into. Inverted bounds are swapped so the range is never empty.
    pub fn duration_bounds(self, (min, max): (u32, u32)) -> (u32, u32) {
        let (lo, hi) = match self {
            TicketStatus::Open => (min, min.saturating_mul(3)),
            TicketStatus::InProgress => (min.saturating_mul(2), max / 2),
            TicketStatus::Resolved | TicketStatus::Closed => (max / 2, max),
        };
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }
}

/// OPEN 10%, IN_PROGRESS 20%, RESOLVED 50%, CLOSED 20%.
pub const STATUS_WEIGHTS: [(TicketStatus, f64); 4] = [
    (TicketStatus::Open, 0.1),
    (TicketStatus::InProgress, 0.2),
    (TicketStatus::Resolved, 0.5),
    (TicketStatus::Closed, 0.2),
];

static STATUS_TABLE: LazyLock<WeightedTable<TicketStatus>> =
    LazyLock::new(|| WeightedTable::new(&STATUS_WEIGHTS));

static QUERY: Scenario = Scenario {
    comments: &[
        "Customer asking about product compatibility",
        "Question about warranty coverage and terms",
        "Inquiry about product specifications and features",
        "Request for usage instructions and setup guide",
        "Question about product availability and restocking",
    ],
    duration_range: (15, 120),
    resolutions: &[Resolution::QueryResolved],
};

static REFUND: Scenario = Scenario {
    comments: &[
        "Product not as described, requesting full refund",
        "Item arrived damaged, seeking refund",
        "Changed mind about purchase, want to return",
        "Product quality below expectations, refund requested",
        "Wrong item received, requesting refund",
    ],
    duration_range: (180, 2880),
    resolutions: &[Resolution::RefundApproved, Resolution::RefundRejected],
};

static REPLACEMENT: Scenario = Scenario {
    comments: &[
        "Product defective on arrival, need replacement",
        "Item stopped working after few days, requesting replacement",
        "Received wrong color/size, need correct replacement",
        "Product has manufacturing defect, replacement needed",
        "Item missing accessories, requesting complete replacement",
    ],
    duration_range: (240, 4320),
    resolutions: &[
        Resolution::ReplacementApproved,
        Resolution::ReplacementRejected,
    ],
};

static DISPUTE: Scenario = Scenario {
    comments: &[
        "Charged twice for same order, disputing duplicate charge",
        "Product description misleading, disputing charges",
        "Service fee not disclosed, raising billing dispute",
        "Unauthorized charge on account, formal dispute",
        "Product return processed but refund not received",
    ],
    duration_range: (720, 10080),
    resolutions: &[Resolution::DisputeResolved, Resolution::DisputeRejected],
};

/// A synthesized support ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub number: String,
    pub ticket_type: TicketType,
    pub status: TicketStatus,
    pub comment: &'static str,
    pub resolution: Option<Resolution>,
    /// Minutes.
    pub duration: u32,
}

pub fn synthesize_ticket(rng: &mut StdRng) -> Ticket {
    let ticket_type = TicketType::ALL[rng.random_range(0..TicketType::ALL.len())];
    let scenario = ticket_type.scenario();

    let status = TicketStatus::sample(rng);
    let comment = scenario.comments[rng.random_range(0..scenario.comments.len())];

    let resolution = status
        .is_terminal()
        .then(|| scenario.resolutions[rng.random_range(0..scenario.resolutions.len())]);

    let (lo, hi) = status.duration_bounds(scenario.duration_range);
    let duration = rng.random_range(lo..=hi);

    let number = format!("TKT-{}", rng.random_range(100_000..=999_999u32));

    Ticket {
        number,
        ticket_type,
        status,
        comment,
        resolution,
        duration,
    }
}

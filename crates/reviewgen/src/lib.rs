#[macro_use]
mod log_macros;

pub mod catalog;
pub mod check;
pub mod context;
pub mod dataset;
pub mod error;
pub mod output;
pub mod record;
pub mod review_text;
pub mod stats;
pub mod ticket;
pub mod tracing_init;
pub mod weighted;

pub use context::GenContext;
pub use dataset::generate_dataset;
pub use error::{GenError, GenReason, GenResult};
pub use record::{Record, assemble_record, slugify};
pub use review_text::{Rating, synthesize_review};
pub use stats::DatasetStats;
pub use ticket::{Ticket, TicketStatus, TicketType, synthesize_ticket};

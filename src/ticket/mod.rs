//! Ticket generation pipeline.
//!
//! One invocation takes a batch of recipients and, per valid recipient:
//! assigns a sequential ticket number for its category, fetches the category
//! template PDF, stamps the ticket number onto the first page, and queues an
//! email carrying the stamped PDF. Submodules:
//! - `category` - the closed set of ticket categories and template paths
//! - `allocator` - per-invocation ticket number sequences
//! - `stamper` - PDF text stamping
//! - `models` - request/response wire shapes
//! - `handlers` - the HTTP endpoint and batch orchestration

pub mod allocator;
pub mod category;
pub mod handlers;
pub mod models;
pub mod stamper;

pub use allocator::TicketCounter;
pub use category::Category;

use thiserror::Error;

use crate::mail::QueueError;
use crate::storage::StorageError;
use stamper::StampError;

/// Unrecoverable errors inside per-recipient processing. Any of these fails
/// the whole batch; recipient-level validation problems are skips, not errors.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("failed to fetch template {path}: {source}")]
    TemplateFetch {
        path: String,
        #[source]
        source: StorageError,
    },
    #[error("failed to stamp template {path}: {source}")]
    Stamp {
        path: String,
        #[source]
        source: StampError,
    },
    #[error("failed to enqueue ticket mail for {email}: {source}")]
    Enqueue {
        email: String,
        #[source]
        source: QueueError,
    },
}

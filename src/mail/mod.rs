//! Outbound mail queueing.
//!
//! Tickets are delivered by an external worker that watches a durable mail
//! queue. This module owns the message record shape and the append-only
//! queue abstraction:
//! - `models` - the `OutboundMessage` wire shape
//! - `queue` - the `MailQueue` trait and its Postgres implementation

pub mod models;
pub mod queue;

pub use models::{Attachment, MessageBody, OutboundMessage};
pub use queue::{MailQueue, PostgresMailQueue};

use thiserror::Error;

/// Errors raised when appending to the mail queue.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to append mail record: {0}")]
    Insert(#[source] sqlx::Error),
    #[error("mail queue unavailable: {0}")]
    Unavailable(String),
}

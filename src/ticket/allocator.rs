//! Per-invocation ticket number sequences.

use parking_lot::Mutex;
use std::collections::HashMap;

use super::Category;

/// In-memory sequence counters, one per category, scoped to one invocation.
///
/// Every counter starts at 1. The orchestrator constructs a fresh counter per
/// batch and allocates synchronously in input order, so numbering is
/// deterministic for a given request. Ticket numbers are only unique within
/// one batch; concurrent invocations may overlap.
pub struct TicketCounter {
    counts: Mutex<HashMap<Category, u32>>,
}

impl TicketCounter {
    pub fn new() -> Self {
        let counts = Category::ALL.into_iter().map(|c| (c, 1)).collect();
        Self {
            counts: Mutex::new(counts),
        }
    }

    /// Return the next sequence number for `category` and advance it.
    pub fn allocate(&self, category: Category) -> u32 {
        let mut counts = self.counts.lock();
        let entry = counts.entry(category).or_insert(1);
        let current = *entry;
        *entry += 1;
        current
    }
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a ticket number as `C0<category><3-digit zero-padded sequence>`,
/// e.g. category 1 sequence 7 becomes `C01007`.
pub fn format_ticket_number(category: Category, sequence: u32) -> String {
    format!("C0{}{:03}", category.code(), sequence)
}

use crate::config::Sequencing;
use crate::error::PersistenceError;
use crate::model::{ChangeSink, PipelineChange};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Counts changes since the pipeline was last persisted.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    revision: u64,
    saved_revision: u64,
}

/// Marks an in-flight save: which request it was, what revision it captured
/// and the timestamp written into the saved document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    pub ticket: u64,
    pub revision: u64,
    pub at: DateTime<Utc>,
}

impl DirtyTracker {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Records that `revision` reached the store. Returns `true` when nothing
    /// changed since then, i.e. the stored copy is current.
    pub fn mark_saved(&mut self, revision: u64) -> bool {
        self.saved_revision = self.saved_revision.max(revision);
        !self.is_dirty()
    }

    /// Treats the current state as freshly loaded.
    pub fn mark_clean(&mut self) {
        self.saved_revision = self.revision;
    }
}

impl ChangeSink for DirtyTracker {
    fn record(&mut self, change: PipelineChange) {
        self.revision += 1;
        debug!(revision = self.revision, ?change, "pipeline changed");
    }
}

/// Issues request tickets and decides whether a completion may still apply.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    policy: Sequencing,
    latest: u64,
}

impl RequestSequencer {
    pub fn new(policy: Sequencing) -> Self {
        Self { policy, latest: 0 }
    }

    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Under [`Sequencing::Tokens`], rejects a ticket older than the newest
    /// one issued. Under [`Sequencing::LastWriterWins`] every ticket is accepted.
    pub fn accept(&self, ticket: u64) -> Result<(), PersistenceError> {
        if self.policy == Sequencing::Tokens && ticket < self.latest {
            warn!(ticket, latest = self.latest, "discarding stale response");
            return Err(PersistenceError::StaleResponse {
                ticket,
                latest: self.latest,
            });
        }
        Ok(())
    }
}

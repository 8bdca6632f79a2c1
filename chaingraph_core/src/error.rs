//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainGraphError {
    /// A chain node handle was used after its node was removed. The slot epoch advances every
    /// time a slot is vacated, so handles to removed nodes are rejected even after the slot
    /// has been reused.
    #[error("Stale node handle for slot {index}: handle epoch {handle_epoch}, slot epoch {slot_epoch}.")]
    InvalidHandle {
        index: usize,
        handle_epoch: u32,
        slot_epoch: u32,
    },
}

//! Pack Records

use jiff::Timestamp;

/// Pack Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRecord {
    pub size: u64,
    pub created_at: Timestamp,
}

use crate::error::AppResult;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

pub trait ArchiveWriterPort: Send + Sync {
    /// Entries are written in slice order.
    fn write(&self, entries: &[ArchiveEntry]) -> AppResult<Vec<u8>>;
}

pub type DynArchiveWriterPort = Arc<dyn ArchiveWriterPort>;

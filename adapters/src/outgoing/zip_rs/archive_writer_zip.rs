use iconsmith_application::{
    error::{AppError, AppResult},
    ports::outgoing::archive_writer::{ArchiveEntry, ArchiveWriterPort},
};
use std::fmt::Display;
use std::io::{Cursor, Write};
use tracing::{debug, instrument};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

#[derive(Clone, Default)]
pub struct ZipArchiveAdapter;

/// Entries carry a fixed timestamp so identical inputs give identical archives.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

fn archive_error(e: impl Display) -> AppError {
    AppError::ArchiveError {
        message: e.to_string(),
    }
}

impl ZipArchiveAdapter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    fn write_impl(&self, entries: &[ArchiveEntry]) -> AppResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for entry in entries {
            writer
                .start_file(entry.name.as_str(), entry_options())
                .map_err(archive_error)?;
            writer.write_all(&entry.data).map_err(archive_error)?;
        }

        let archive = writer.finish().map_err(archive_error)?.into_inner();
        debug!("Wrote zip archive: {} bytes", archive.len());
        Ok(archive)
    }
}

impl ArchiveWriterPort for ZipArchiveAdapter {
    fn write(&self, entries: &[ArchiveEntry]) -> AppResult<Vec<u8>> {
        self.write_impl(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn entries() -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry::new("icon.png", b"original".to_vec()),
            ArchiveEntry::new("icon16.png", vec![1; 300]),
            ArchiveEntry::new("icon48.png", vec![2; 300]),
            ArchiveEntry::new("icon128.png", Vec::new()),
        ]
    }

    #[test]
    fn entries_keep_their_order_and_contents() {
        let bytes = ZipArchiveAdapter::new().write(&entries()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 4);
        for (index, expected) in entries().iter().enumerate() {
            let mut file = archive.by_index(index).unwrap();
            assert_eq!(file.name(), expected.name);
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            assert_eq!(data, expected.data);
        }
    }

    #[test]
    fn output_is_deterministic() {
        let adapter = ZipArchiveAdapter::new();
        assert_eq!(
            adapter.write(&entries()).unwrap(),
            adapter.write(&entries()).unwrap()
        );
    }

    #[test]
    fn empty_entry_list_is_a_valid_archive() {
        let bytes = ZipArchiveAdapter::new().write(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}

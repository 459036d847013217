use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub filename: Option<String>,
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("data", &self.data.len())
            .field("filename", &self.filename)
            .finish()
    }
}

/// Raw form fields of a conversion upload, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertUpload {
    pub file: Option<UploadedFile>,
    pub kind: Option<String>,
}

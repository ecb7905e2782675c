use crate::error::{QueryError, Result};

use std::io::{ErrorKind, Read};

/// Sequential reader over the members of an ar archive.
///
/// Members can only be visited in on-disk order; each read consumes
/// everything up to and including the wanted member. The underlying stream
/// is dropped with the reader on every exit path.
pub struct MemberReader<R: Read> {
    archive: ar::Archive<R>,
}

impl<R: Read> MemberReader<R> {
    pub fn new(reader: R) -> Self {
        MemberReader {
            archive: ar::Archive::new(reader),
        }
    }

    /// Reads the member named `name`, skipping over anything before it.
    pub fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        let (_, data) = self.read_member_where(name, |id| id == name)?;
        Ok(data)
    }

    /// Reads the first member whose identifier satisfies `accept`. `wanted`
    /// only labels the error when the archive runs out first.
    pub fn read_member_where<F>(&mut self, wanted: &str, accept: F) -> Result<(String, Vec<u8>)>
    where
        F: Fn(&str) -> bool,
    {
        while let Some(entry) = self.archive.next_entry() {
            let mut entry = entry.map_err(archive_error)?;
            let id = String::from_utf8_lossy(entry.header().identifier()).into_owned();
            if accept(&id) {
                let mut data = Vec::new();
                entry.read_to_end(&mut data)?;
                return Ok((id, data));
            }
        }
        Err(QueryError::MissingMember(wanted.to_string()))
    }
}

// The ar crate surfaces a bad magic signature and mangled member headers as
// InvalidData, and a header cut short as UnexpectedEof.
fn archive_error(err: std::io::Error) -> QueryError {
    match err.kind() {
        ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
            QueryError::ArchiveFormat(err.to_string())
        }
        _ => QueryError::Io(err),
    }
}

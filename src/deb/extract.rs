use crate::error::{QueryError, Result};

use flate2::read::GzDecoder;
use std::io::Read;
use tar::Archive;
use xz2::read::XzDecoder;

/// Decompresses a control tarball member and pulls a single entry out of it.
///
/// `member` picks the decoder by suffix. Packaging tools disagree on whether
/// entries carry a leading "./", so both spellings of `entry` match.
pub fn extract_entry(member: &str, data: &[u8], entry: &str) -> Result<Vec<u8>> {
    match member.ends_with(".xz") {
        true => read_entry(Archive::new(XzDecoder::new(data)), entry),
        false => read_entry(Archive::new(GzDecoder::new(data)), entry),
    }
}

fn read_entry<R: Read>(mut archive: Archive<R>, wanted: &str) -> Result<Vec<u8>> {
    let dotted = format!("./{}", wanted);
    for file in archive.entries()? {
        let mut file = file?;
        let path = file.header().path()?.to_string_lossy().into_owned();
        if path == wanted || path == dotted {
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            return Ok(data);
        }
    }
    Err(QueryError::MissingControlEntry(wanted.to_string()))
}

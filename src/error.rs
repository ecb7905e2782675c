use thiserror::Error;

/// Everything that can go wrong between opening a package container and
/// handing out a frozen record. Callers branch on the variant; no failure
/// is folded into another.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("malformed outer archive: {0}")]
    ArchiveFormat(String),

    #[error("invalid debian binary format: {0:?}")]
    UnsupportedFormat(String),

    #[error("missing {0} in package archive")]
    MissingMember(String),

    #[error("missing '{0}' file in control archive")]
    MissingControlEntry(String),

    #[error("malformed control line: {0:?}")]
    MalformedControl(String),

    #[error("control file has no {0} field")]
    MissingField(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;

//! Query metadata from Debian binary packages.
//!
//! A `.deb` is an ar archive wrapping a compressed control tarball; the
//! `control` entry inside that tarball describes the package. [`PackageRecord`]
//! extracts the description in a single pass over the container, and
//! [`deb_vercmp`] orders version strings the way dpkg does.

mod cli;
pub mod deb;
pub mod error;
pub mod version;

pub use deb::PackageRecord;
pub use error::{QueryError, Result};
pub use version::{deb_vercmp, PkgVersion};

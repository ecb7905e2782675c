//! Reading package metadata out of .deb containers.
//!
//! A deb is an ar archive holding a format marker (`debian-binary`), a
//! compressed control tarball and a data tarball. Only the first two are
//! read; the `control` entry of the control tarball is parsed and normalized
//! into a [`PackageRecord`].

mod archive;
mod control;
mod extract;
mod fields;

use crate::error::{QueryError, Result};
use crate::version::PkgVersion;
use archive::MemberReader;
use control::ControlMap;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Required content of the format marker member.
const FORMAT_MARKER: &str = "2.0\n";
const MARKER_MEMBER: &str = "debian-binary";
const CONTROL_ENTRY: &str = "control";

/// Control metadata of a single Debian binary package.
///
/// Built in one pass over the container and immutable afterwards. Known
/// control fields get typed accessors; everything else stays reachable
/// through [`get_tag`](PackageRecord::get_tag).
#[derive(Debug, Clone)]
pub struct PackageRecord {
    name: String,
    version: String,
    release: String,
    epoch: String,
    arch: String,
    description: String,
    provides: Vec<String>,
    depends: Vec<String>,
    pre_depends: Vec<String>,
    extra: HashMap<String, String>,
}

impl PackageRecord {
    /// Reads the package at `path`.
    pub fn query<P: AsRef<Path>>(path: P) -> Result<PackageRecord> {
        PackageRecord::read_from(File::open(path)?)
    }

    /// Reads a package out of any byte source, e.g. a file fetched by some
    /// transport layer. The source is consumed up to the control tarball;
    /// the data tarball behind it is never touched.
    pub fn read_from<R: Read>(reader: R) -> Result<PackageRecord> {
        let mut members = MemberReader::new(reader);

        let marker = members.read_member(MARKER_MEMBER)?;
        if marker != FORMAT_MARKER.as_bytes() {
            return Err(QueryError::UnsupportedFormat(
                String::from_utf8_lossy(&marker).into_owned(),
            ));
        }

        let (member, data) = members.read_member_where("control.tar.gz", |id| {
            id == "control.tar.gz" || id == "control.tar.xz"
        })?;
        let text = extract::extract_entry(&member, &data, CONTROL_ENTRY)?;
        let fields = control::parse_control(&String::from_utf8_lossy(&text))?;
        PackageRecord::from_control(fields)
    }

    fn from_control(mut fields: ControlMap) -> Result<PackageRecord> {
        let name = fields
            .remove("package")
            .ok_or(QueryError::MissingField("package"))?;
        let raw_version = fields
            .remove("version")
            .ok_or(QueryError::MissingField("version"))?;

        let (version, release) = fields::split_release(&raw_version);
        let (epoch, version) = fields::split_epoch(&version);

        let mut provides = fields::split_list(&fields.remove("provides").unwrap_or_default());
        let depends = fields::split_list(&fields.remove("depends").unwrap_or_default());
        let pre_depends = fields::split_list(&fields.remove("pre_depends").unwrap_or_default());
        // Every package provides itself under its own version-release.
        provides.push(format!("{} = {}-{}", name, version, release));

        Ok(PackageRecord {
            name,
            version,
            release,
            epoch,
            arch: fields.remove("architecture").unwrap_or_default(),
            description: fields.remove("description").unwrap_or_default(),
            provides,
            depends,
            pre_depends,
            extra: fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upstream version, stripped of epoch and release.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Capabilities this package provides, always including itself.
    pub fn provides(&self) -> &[String] {
        &self.provides
    }

    /// Capabilities required at installation time.
    pub fn requires(&self) -> &[String] {
        &self.depends
    }

    /// Capabilities required before installation starts.
    pub fn pre_depends(&self) -> &[String] {
        &self.pre_depends
    }

    /// Any retained control field without a typed accessor, e.g. `section`
    /// or `installed_size`.
    pub fn get_tag(&self, tag: &str) -> Option<&str> {
        self.extra.get(tag).map(String::as_str)
    }

    /// The epoch:version-release triple of this package.
    pub fn pkg_version(&self) -> PkgVersion {
        PkgVersion {
            epoch: self.epoch.clone(),
            version: self.version.clone(),
            release: self.release.clone(),
        }
    }

    /// Orders two packages by epoch, then version, then release.
    pub fn vercmp(&self, other: &PackageRecord) -> Ordering {
        self.pkg_version().cmp(&other.pkg_version())
    }
}

//! Font loading: full-name and character-set extraction.

use std::{fs::read, path::Path};

use read_fonts::{FontRef, TableProvider};

use crate::{
    charset::Charset,
    error::{Error, Result},
};

/// Name table ID for the font's full name.
const NAME_ID_FULL_NAME: u16 = 4;

/// Windows platform / Unicode-BMP encoding for name record selection.
const PLATFORM_WINDOWS: u16 = 3;
const ENCODING_UNICODE_BMP: u16 = 1;

/// The parts of a font that coverage reporting consults: its full
/// name (name ID 4) and its character map.
#[derive(Debug, Clone)]
pub struct CoverageFont {
    full_name: String,
    charset: Charset,
}

impl CoverageFont {
    /// Load a font file and extract its full name and charset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read(path).map_err(|source| Error::ReadFont {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_data(path, &data)
    }

    /// Extract the full name and charset from font data already in
    /// memory. `path` is used only for error reporting.
    pub fn from_data(path: &Path, data: &[u8]) -> Result<Self> {
        let font = FontRef::new(data).map_err(|e| Error::ParseFont {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let full_name = full_name(&font).ok_or_else(|| Error::MissingFullName {
            path: path.to_path_buf(),
        })?;

        let cmap = match font.cmap() {
            Ok(cmap) => cmap,
            Err(read_fonts::ReadError::TableIsMissing(_)) => {
                return Err(Error::MissingCharacterMap { path: path.to_path_buf() });
            }
            Err(e) => return Err(e.into()),
        };
        let charset = Charset::from_cmap(&cmap).ok_or_else(|| {
            Error::MissingCharacterMap { path: path.to_path_buf() }
        })?;

        Ok(Self { full_name, charset })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }
}

/// Read the full font name (name ID 4).
///
/// Prefers the Windows platform-3/encoding-1 record; falls back to the
/// first decodable ID-4 record on any platform.
fn full_name(font: &FontRef) -> Option<String> {
    let name = font.name().ok()?;

    let mut fallback = None;
    for record in name.name_record() {
        if record.name_id().to_u16() != NAME_ID_FULL_NAME {
            continue;
        }
        let Ok(value) = record.string(name.string_data()) else {
            continue;
        };
        let value: String = value.chars().collect();
        if record.platform_id() == PLATFORM_WINDOWS
            && record.encoding_id() == ENCODING_UNICODE_BMP
        {
            return Some(value);
        }
        fallback.get_or_insert(value);
    }
    fallback
}

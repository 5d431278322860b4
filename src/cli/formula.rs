//! Access to a formula file, by extension.
//!
//! Plain `.cnf` files are read as they are, and `.xz` files are decompressed on the fly when built with the `xz` feature.

use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use dpll_sat::types::err::ErrorKind;

pub enum FormulaError {
    /// The file could not be opened.
    Open(std::io::Error),

    /// The extension of the file is not one with a known reader, if the file has an extension.
    Extension(Option<OsString>),

    /// The contents of the file are not a DIMACS formula.
    Parse(ErrorKind),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(e) => write!(f, "Failed to open formula: {e}"),
            Self::Extension(None) => write!(f, "Formula files require an extension"),
            Self::Extension(Some(extension)) => write!(f, "No reader for extension {extension:?}"),
            Self::Parse(e) => write!(f, "Failed to parse formula: {e}"),
        }
    }
}

/// A buffered reader over the (decompressed) contents of the formula at `path`.
pub fn open_formula(path: &Path) -> Result<Box<dyn BufRead>, FormulaError> {
    let extension = path.extension().map(|extension| extension.to_os_string());

    let is_supported = match extension.as_ref().and_then(|extension| extension.to_str()) {
        Some("cnf") => true,
        Some("xz") => cfg!(feature = "xz"),
        _ => false,
    };
    if !is_supported {
        return Err(FormulaError::Extension(extension));
    }

    let file = File::open(path).map_err(FormulaError::Open)?;

    #[cfg(feature = "xz")]
    if extension.as_ref().is_some_and(|extension| extension == "xz") {
        return Ok(Box::new(BufReader::new(xz2::read::XzDecoder::new(file))));
    }

    Ok(Box::new(BufReader::new(file)))
}

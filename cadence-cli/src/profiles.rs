//! Listener profile files.
//!
//! A profiles file holds either a single profile object or an array of
//! `{ "name": ..., "profile": { ... } }` entries. A lone profile is named
//! after the file stem.

use cadence_catalog::fs::read_to_string;
use cadence_core::UserProfile;
use camino::Utf8Path;
use serde::Deserialize;
use serde_json::Value;

use crate::CliError;

/// A profile paired with the label used in reports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct NamedProfile {
    pub(crate) name: String,
    pub(crate) profile: UserProfile,
}

/// Read and decode a profiles file.
pub(crate) fn load_profiles(path: &Utf8Path) -> Result<Vec<NamedProfile>, CliError> {
    let text = read_to_string(path).map_err(|source| CliError::ReadProfiles {
        path: path.to_path_buf(),
        source,
    })?;
    let fallback_name = path.file_stem().unwrap_or("profile");
    parse_profiles(&text, fallback_name).map_err(|source| CliError::ParseProfiles {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode profiles JSON, naming a lone profile `fallback_name`.
///
/// The document is inspected before decoding so field errors, such as a
/// missing `target_energy`, reach the caller intact.
pub(crate) fn parse_profiles(
    text: &str,
    fallback_name: &str,
) -> Result<Vec<NamedProfile>, serde_json::Error> {
    let document: Value = serde_json::from_str(text)?;
    if document.is_array() {
        serde_json::from_value(document)
    } else {
        let profile: UserProfile = serde_json::from_value(document)?;
        Ok(vec![NamedProfile {
            name: fallback_name.to_owned(),
            profile,
        }])
    }
}

//! Avoidance phrase file loading

use std::path::Path;

use crate::error::DistanceError;
use crate::types::AvoidancePhraseSet;

/// Load phrases from a file, one per line, trimmed, blank lines skipped
pub fn load_avoidance_phrases(path: impl AsRef<Path>) -> Result<AvoidancePhraseSet, DistanceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DistanceError::PhraseFile {
        path: path.to_path_buf(),
        source,
    })?;

    let phrases = AvoidancePhraseSet::parse(&text);
    tracing::info!(path = %path.display(), count = phrases.len(), "loaded avoidance phrases");
    Ok(phrases)
}

/// Load phrases, falling back to an empty set when the file cannot be read
pub fn load_avoidance_phrases_or_empty(path: impl AsRef<Path>) -> AvoidancePhraseSet {
    match load_avoidance_phrases(path) {
        Ok(phrases) => phrases,
        Err(e) => {
            tracing::warn!(error = %e, "continuing without avoidance phrases");
            AvoidancePhraseSet::empty()
        }
    }
}

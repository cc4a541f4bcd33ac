//! Marker-anchored patching.
//!
//! A previously scaffolded file is evolved by inserting text immediately
//! after the first literal occurrence of an anchor string. A missing anchor
//! is a no-op, reported as its own outcome rather than as an error.

/// Anchor in a freshly scaffolded entity class.
pub const ENTITY_MARKER: &str = "use HasFactory;";

/// Anchor in a freshly scaffolded create-table migration.
pub const SCHEMA_MARKER: &str = "$table->id();";

/// Anchor in a freshly scaffolded form request's `rules()` body.
pub const RULES_MARKER: &str = "return [";

/// Result of [`apply_at_marker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerPatch {
    /// The marker was found and the insertion placed right after it.
    Applied(String),
    /// The marker was absent; the content is returned unchanged.
    MarkerNotFound(String),
}

impl MarkerPatch {
    pub fn content(&self) -> &str {
        match self {
            Self::Applied(content) | Self::MarkerNotFound(content) => content,
        }
    }

    pub fn into_content(self) -> String {
        match self {
            Self::Applied(content) | Self::MarkerNotFound(content) => content,
        }
    }

    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Replace the first `marker` in `existing` with `marker` + `insertion`.
///
/// Applying twice inserts twice; this function does not detect prior
/// application.
pub fn apply_at_marker(existing: &str, marker: &str, insertion: &str) -> MarkerPatch {
    match existing.find(marker) {
        Some(start) if !marker.is_empty() => {
            let end = start + marker.len();
            let mut patched = String::with_capacity(existing.len() + insertion.len());
            patched.push_str(&existing[..end]);
            patched.push_str(insertion);
            patched.push_str(&existing[end..]);
            MarkerPatch::Applied(patched)
        }
        _ => MarkerPatch::MarkerNotFound(existing.to_string()),
    }
}

/// Text to append to `existing` so that `line` sits on its own line and the
/// file ends with a newline.
pub fn append_line(existing: &str, line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 2);
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(line);
    out.push('\n');
    out
}

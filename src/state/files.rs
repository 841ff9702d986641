#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use serde::{Deserialize, Serialize};

/// One object in the remote filesystem listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// File extensions treated as resume documents.
const RESUME_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".doc"];

/// Whether a file name counts as a resume document (case-insensitive).
pub fn is_resume_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    RESUME_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Local snapshot of the remote file listing plus the flags the wipe page
/// tracks around it.
///
/// The snapshot is never authoritative between refreshes: every mutation
/// against the remote store is followed by a full re-listing that replaces
/// `entries` wholesale via [`FilesState::apply_listing`].
#[derive(Clone, Debug, Default)]
pub struct FilesState {
    pub entries: Vec<FileEntry>,
    pub loading: bool,
    pub deleting: bool,
    pub error: Option<String>,
}

impl FilesState {
    /// Replace the whole cache with a fresh listing result.
    ///
    /// A failed listing degrades to an empty cache with the error recorded
    /// for the dismissible banner.
    pub fn apply_listing(&mut self, result: Result<Vec<FileEntry>, String>) {
        self.loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                self.entries = Vec::new();
                self.error = Some(e);
            }
        }
    }

    /// True iff at least one cached entry looks like a resume.
    ///
    /// Pure function of the cache; callers recompute it on every read
    /// instead of storing the flag anywhere.
    pub fn has_resumes(&self) -> bool {
        self.entries.iter().any(|f| is_resume_name(&f.name))
    }

    /// Try to start a delete sequence.
    ///
    /// Returns `false` if one is already in flight, in which case the
    /// caller must not issue any remote calls.
    pub fn begin_delete(&mut self) -> bool {
        if self.deleting {
            return false;
        }
        self.deleting = true;
        true
    }

    /// Mark the current delete sequence as finished.
    pub fn finish_delete(&mut self) {
        self.deleting = false;
    }

    /// Paths of every cached entry, in cache order. This is the wipe plan:
    /// the bulk delete walks exactly this snapshot, not the live listing.
    pub fn wipe_plan(&self) -> Vec<String> {
        self.entries.iter().map(|f| f.path.clone()).collect()
    }

    /// Dismiss the listing error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

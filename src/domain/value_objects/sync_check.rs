//! How the mirror decides a client file is already up to date

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison used to skip files during a mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SyncCheck {
    /// Same byte size counts as synced. Cheap, but two different files of
    /// equal length are treated as identical.
    #[default]
    Size,
    /// Same size and same SHA-256 digest
    Content,
}

impl SyncCheck {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "size" => Some(SyncCheck::Size),
            "content" | "hash" | "sha256" => Some(SyncCheck::Content),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncCheck::Size => "size",
            SyncCheck::Content => "content",
        }
    }
}

impl fmt::Display for SyncCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_size() {
        assert_eq!(SyncCheck::default(), SyncCheck::Size);
    }

    #[test]
    fn lenient_parse_accepts_hash_aliases() {
        assert_eq!(SyncCheck::parse_lenient("SHA256"), Some(SyncCheck::Content));
        assert_eq!(SyncCheck::parse_lenient("bogus"), None);
    }
}

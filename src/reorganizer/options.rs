//! Reorganize options

use serde::{Deserialize, Serialize};

/// How imports are regrouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Sort imports separately under each comment line
    #[default]
    #[serde(alias = "preserve-comments", alias = "yes")]
    Preserve,
    /// Collect every import into one sorted block at the top
    #[serde(alias = "group-all", alias = "no")]
    Group,
}

impl SortMode {
    pub fn preserves_comments(self) -> bool {
        matches!(self, SortMode::Preserve)
    }
}

/// `true` means "preserve imports under their comments".
impl From<bool> for SortMode {
    fn from(preserve_comments: bool) -> Self {
        if preserve_comments {
            SortMode::Preserve
        } else {
            SortMode::Group
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Preserve => write!(f, "preserve"),
            SortMode::Group => write!(f, "group"),
        }
    }
}

/// Options for [`super::Reorganizer`]
#[derive(Debug, Clone, Default)]
pub struct ReorganizeOptions {
    pub mode: SortMode,
}

impl ReorganizeOptions {
    pub fn new(mode: SortMode) -> Self {
        Self { mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(SortMode::Preserve.to_string(), "preserve");
        assert_eq!(SortMode::Group.to_string(), "group");
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(SortMode::from(true), SortMode::Preserve);
        assert_eq!(SortMode::from(false), SortMode::Group);
        assert!(SortMode::from(true).preserves_comments());
        assert!(!SortMode::from(false).preserves_comments());
    }

    #[test]
    fn test_mode_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: SortMode,
        }
        let w: Wrapper = toml::from_str("mode = \"group\"").unwrap();
        assert_eq!(w.mode, SortMode::Group);
        let w: Wrapper = toml::from_str("mode = \"preserve-comments\"").unwrap();
        assert_eq!(w.mode, SortMode::Preserve);
        assert_eq!(
            serde_json::to_string(&SortMode::Group).unwrap(),
            "\"group\""
        );
    }

    #[test]
    fn test_default_options() {
        assert_eq!(ReorganizeOptions::default().mode, SortMode::Preserve);
        assert_eq!(ReorganizeOptions::new(SortMode::Group).mode, SortMode::Group);
    }
}

//! The fixed set of page sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// One named, vertically stacked region of the page.
///
/// Variant order matches document order, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Greeting,
    Gallery,
    Message,
    Wishes,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 4] = [
        Section::Greeting,
        Section::Gallery,
        Section::Message,
        Section::Wishes,
    ];

    /// Stable identifier, used for `data-section` attributes and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Greeting => "greeting",
            Section::Gallery => "gallery",
            Section::Message => "message",
            Section::Wishes => "wishes",
        }
    }

    /// Capitalized label shown in the navigation surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Greeting => "Greeting",
            Section::Gallery => "Gallery",
            Section::Message => "Message",
            Section::Wishes => "Wishes",
        }
    }

    /// Position in document order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PageError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_greeting() {
        assert_eq!(Section::default(), Section::Greeting);
    }

    #[test]
    fn order_matches_document_order() {
        let indices: Vec<usize> = Section::ALL.iter().map(Section::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(Section::Greeting < Section::Wishes);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("Gallery".parse::<Section>().unwrap(), Section::Gallery);
        assert_eq!(" wishes ".parse::<Section>().unwrap(), Section::Wishes);
        assert!(matches!(
            "footer".parse::<Section>(),
            Err(PageError::UnknownSection(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Section::Message).unwrap(), "\"message\"");
        let parsed: Section = serde_json::from_str("\"greeting\"").unwrap();
        assert_eq!(parsed, Section::Greeting);
    }
}

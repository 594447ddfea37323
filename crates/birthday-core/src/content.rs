//! Static page content.
//!
//! Defaults are a complete greeting page; every field can be overridden
//! from the `content` table of a [`PageConfig`](crate::PageConfig).

use serde::{Deserialize, Serialize};

use crate::calendar::SpecialDate;

/// A photo in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// Anchor the crop to the bottom of the image instead of the center
    #[serde(default)]
    pub anchor_bottom: bool,
}

impl Memory {
    fn new(src: &str, alt: &str, caption: &str, anchor_bottom: bool) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            caption: caption.to_string(),
            anchor_bottom,
        }
    }
}

/// Icon drawn on a wish card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishIcon {
    Heart,
    Gift,
    Music,
    Calendar,
    Star,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub icon: WishIcon,
    pub title: String,
    pub text: String,
}

impl Wish {
    fn new(icon: WishIcon, title: &str, text: &str) -> Self {
        Self {
            icon,
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// Title and subtitle above a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

impl Heading {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub special_date: Heading,
    pub gallery: Heading,
    pub message: Heading,
    pub wishes: Heading,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            special_date: Heading::new(
                "Special Date",
                "The day a beautiful soul came into this world.",
            ),
            gallery: Heading::new(
                "Our Beautiful Memories",
                "Every moment with you is a treasure. Here are some of my favorite memories that we've shared together.",
            ),
            message: Heading::new(
                "My Birthday Message",
                "A few words from my heart to yours on your special day.",
            ),
            wishes: Heading::new(
                "Birthday Wishes",
                "My wishes for you on your special day and for the year ahead.",
            ),
        }
    }
}

/// The letter in the message section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub paragraphs: Vec<String>,
    pub signature: String,
}

impl Default for Letter {
    fn default() -> Self {
        Self {
            paragraphs: [
                "To the most amazing person I know,",
                "Happy Birthday! Today is all about celebrating you - your kindness, your strength, your beauty, and everything that makes you so special.",
                "Thank you for filling my days with joy and my heart with love. I'm so grateful to have you in my life.",
                "Here's to another year of adventures, laughter, and making beautiful memories together.",
                "With all my love,",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            signature: "Hafidzrdwn, ilysm\u{2764}\u{fe0f}.".to_string(),
        }
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    /// Brand text in the header
    pub title: String,
    /// Second line of the hero headline
    pub recipient: String,
    pub tagline: String,
    pub hero_image: String,
    pub call_to_action: String,
    pub special_date: SpecialDate,
    pub headings: Headings,
    pub memories: Vec<Memory>,
    pub letter: Letter,
    pub wishes: Vec<Wish>,
    pub celebrate_label: String,
    pub footer: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Andeen's Birthday".to_string(),
            recipient: "Pretty!".to_string(),
            tagline: "Today is all about celebrating the amazing person you are and the joy you bring to my life.".to_string(),
            hero_image: "/images/hero.jpg".to_string(),
            call_to_action: "Explore Your Surprise Now".to_string(),
            special_date: SpecialDate::default(),
            headings: Headings::default(),
            memories: vec![
                Memory::new("/images/photo1.jpg", "UPGRADING24", "Our 1st moment together", true),
                Memory::new("/images/photo2.jpg", "DIMENSI24", "Our 1st photo together", true),
                Memory::new("/images/photo3.jpg", "ISMURF24", "Unexpected Photobooth!", true),
                Memory::new("/images/photo4.jpg", "PENSI24", "Finally, Official!", false),
                Memory::new("/images/photo5.jpg", "Photobooth", "Cutest Photobox Ever!", false),
                Memory::new("/images/photo6.webp", "Selfies", "Selfies After Mie Ayam Date", true),
                Memory::new("/images/photo7.jpg", "GrandHarvest", "Grand Harvest Date", true),
                Memory::new("/images/photo8.jpg", "DIKSI25", "2-period Synergy", true),
                Memory::new("/images/photo9.jpg", "HIBUR25", "Iftar with Pretty Girl!", true),
            ],
            letter: Letter::default(),
            wishes: vec![
                Wish::new(
                    WishIcon::Heart,
                    "Love",
                    "May our love continue to grow stronger with each passing day.",
                ),
                Wish::new(
                    WishIcon::Gift,
                    "Joy",
                    "Wishing you a year filled with moments that make your heart smile.",
                ),
                Wish::new(
                    WishIcon::Music,
                    "Happiness",
                    "May your days be filled with laughter, music, and all the things you love.",
                ),
                Wish::new(
                    WishIcon::Calendar,
                    "Adventure",
                    "Here's to a year of new experiences and exciting adventures together.",
                ),
            ],
            celebrate_label: "Celebrate Again! \u{1f389}".to_string(),
            footer: "Made with \u{2764}\u{fe0f} for your special day".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_matches_page() {
        let content = PageContent::default();
        assert_eq!(content.memories.len(), 9);
        assert_eq!(content.wishes.len(), 4);
        assert_eq!(content.letter.paragraphs.len(), 5);

        let titles: Vec<&str> = content.wishes.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Love", "Joy", "Happiness", "Adventure"]);
        assert!(!content.memories[3].anchor_bottom);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let content: PageContent =
            serde_json::from_str(r#"{ "recipient": "Sunshine!", "wishes": [] }"#).unwrap();
        assert_eq!(content.recipient, "Sunshine!");
        assert!(content.wishes.is_empty());
        assert_eq!(content.memories.len(), 9);
    }
}

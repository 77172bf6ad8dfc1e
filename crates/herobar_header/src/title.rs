//! Title configuration
//!
//! A header carries up to four strings. `title`/`subtitle` go to the compact
//! bar; `large_title`/`large_subtitle` go to the large-title block and fall
//! back to the compact strings. A large subtitle never shows without a large
//! title above it.

/// Optional item in the row under the large title
#[derive(Debug, Clone, PartialEq)]
pub struct Accessory {
    pub label: String,
    /// Width reserved for the item
    pub width: f32,
}

impl Accessory {
    pub fn new(label: impl Into<String>, width: f32) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }
}

/// The strings of a header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleConfiguration {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub large_title: Option<String>,
    pub large_subtitle: Option<String>,
    pub leading_accessory: Option<Accessory>,
    pub trailing_accessory: Option<Accessory>,
}

impl TitleConfiguration {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn large_title(mut self, large_title: impl Into<String>) -> Self {
        self.large_title = Some(large_title.into());
        self
    }

    pub fn large_subtitle(mut self, large_subtitle: impl Into<String>) -> Self {
        self.large_subtitle = Some(large_subtitle.into());
        self
    }

    pub fn leading(mut self, accessory: Accessory) -> Self {
        self.leading_accessory = Some(accessory);
        self
    }

    pub fn trailing(mut self, accessory: Accessory) -> Self {
        self.trailing_accessory = Some(accessory);
        self
    }

    /// `large_title`, else `title`
    pub fn resolved_large_title(&self) -> Option<&str> {
        self.large_title.as_deref().or(self.title.as_deref())
    }

    /// `large_subtitle`, else `subtitle`, only under a resolved large title
    pub fn resolved_large_subtitle(&self) -> Option<&str> {
        self.resolved_large_title()?;
        self.large_subtitle.as_deref().or(self.subtitle.as_deref())
    }

    pub fn has_accessories(&self) -> bool {
        self.leading_accessory.is_some() || self.trailing_accessory.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_title_falls_back_to_title() {
        let config = TitleConfiguration::new("Library");
        assert_eq!(config.resolved_large_title(), Some("Library"));

        let config = TitleConfiguration::new("Library").large_title("My Library");
        assert_eq!(config.resolved_large_title(), Some("My Library"));
    }

    #[test]
    fn test_subtitle_needs_a_title() {
        let orphan = TitleConfiguration {
            large_subtitle: Some("42 albums".to_string()),
            ..Default::default()
        };
        assert_eq!(orphan.resolved_large_title(), None);
        assert_eq!(orphan.resolved_large_subtitle(), None);

        let config = TitleConfiguration::new("Library").large_subtitle("42 albums");
        assert_eq!(config.resolved_large_subtitle(), Some("42 albums"));
    }

    #[test]
    fn test_large_subtitle_falls_back_to_subtitle() {
        let config = TitleConfiguration::new("Library").subtitle("Synced");
        assert_eq!(config.resolved_large_subtitle(), Some("Synced"));
    }
}

//! Link card descriptors supplied by the hosting page.

/// An external tool link presented as an interactive card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    /// Card title.
    pub title: String,
    /// Short description shown under the title.
    pub subtitle: String,
    /// URL opened when the card is activated.
    pub url: String,
}

impl CardLink {
    /// Create a new card link.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            url: url.into(),
        }
    }
}

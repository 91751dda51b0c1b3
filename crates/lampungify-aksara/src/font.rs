// Font registry: maps a display font name to the CSS class that renders the
// marker text with that font. Unknown names fall back to Suarnadipa.

use std::fmt;

/// Lampung script fonts with a known CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    #[default]
    Suarnadipa,
    Kaganga,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::Suarnadipa, Font::Kaganga];

    /// Look up a font by its display name ("Lampung Kaganga"). Exact match.
    pub fn from_name(name: &str) -> Option<Font> {
        Self::ALL.into_iter().find(|f| f.display_name() == name)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Font::Suarnadipa => "Lampung Suarnadipa",
            Font::Kaganga => "Lampung Kaganga",
        }
    }

    pub fn class(self) -> FontClass {
        FontClass {
            class: match self {
                Font::Suarnadipa => "lampung-suarnadipa",
                Font::Kaganga => "lampung-kaganga",
            },
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The CSS class to attach to marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontClass {
    pub class: &'static str,
}

/// Resolve a font name to its class. Absent or unknown names give the
/// default font.
pub fn resolve_font(name: Option<&str>) -> FontClass {
    name.and_then(Font::from_name).unwrap_or_default().class()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_when_absent() {
        assert_eq!(resolve_font(None).class, "lampung-suarnadipa");
    }

    #[test]
    fn known_fonts() {
        assert_eq!(resolve_font(Some("Lampung Kaganga")).class, "lampung-kaganga");
        assert_eq!(
            resolve_font(Some("Lampung Suarnadipa")).class,
            "lampung-suarnadipa"
        );
    }

    #[test]
    fn unknown_font_falls_back() {
        assert_eq!(resolve_font(Some("bogus")).class, "lampung-suarnadipa");
        assert_eq!(resolve_font(Some("")).class, "lampung-suarnadipa");
        assert_eq!(resolve_font(Some("lampung kaganga")).class, "lampung-suarnadipa");
    }

    #[test]
    fn display_names_round_trip() {
        for font in Font::ALL {
            assert_eq!(Font::from_name(&font.to_string()), Some(font));
        }
    }
}

//! Read-only word tables keyed by vibe and industry.
//!
//! Lookups go through accessors that return `None` for unrecognized keys, so
//! callers always decide what an unknown industry or vibe means. Keys are
//! matched literally: `"techy"` and `""` are not vibes.

/// Brand tone selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vibe {
    Modern,
    Playful,
    Trustworthy,
    Premium,
    Classic,
    Techy,
}

impl Vibe {
    pub const ALL: [Vibe; 6] = [
        Vibe::Modern,
        Vibe::Playful,
        Vibe::Trustworthy,
        Vibe::Premium,
        Vibe::Classic,
        Vibe::Techy,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|vibe| vibe.key() == key)
    }

    /// Lookup key, also the value submitted by the form.
    pub fn key(self) -> &'static str {
        match self {
            Vibe::Modern => "Modern",
            Vibe::Playful => "Playful",
            Vibe::Trustworthy => "Trustworthy",
            Vibe::Premium => "Premium",
            Vibe::Classic => "Classic",
            Vibe::Techy => "Techy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vibe::Modern => "Modern ✨",
            Vibe::Playful => "Playful 🎉",
            Vibe::Trustworthy => "Trustworthy 🤝",
            Vibe::Premium => "Premium 💎",
            Vibe::Classic => "Classic 🏛️",
            Vibe::Techy => "Techy 💡",
        }
    }

    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Vibe::Modern => &["Neo", "Flux", "Evo", "Nova", "Pixel"],
            Vibe::Playful => &["Joy", "Fun", "Spark", "Zoom", "Pop"],
            Vibe::Trustworthy => &["True", "Solid", "Core", "Guard", "Shield"],
            Vibe::Premium => &["Elite", "Prime", "Luxe", "Apex", "Crown"],
            Vibe::Classic => &["Ever", "Heritage", "Legacy", "Era", "Origin"],
            Vibe::Techy => &["Byte", "Tech", "Data", "Logic", "Algo"],
        }
    }

    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Vibe::Modern => &["Hub", "Labs", "Now", "Edge", "Sync"],
            Vibe::Playful => &["Dash", "Joy", "Blast", "Zone", "Vibes"],
            Vibe::Trustworthy => &["Guard", "Shield", "Safe", "Trust", "Secure"],
            Vibe::Premium => &["Select", "Elite", "Prime", "Peak", "Royal"],
            Vibe::Classic => &["Co", "Inc", "Est", "Bros", "Works"],
            Vibe::Techy => &["Ware", "Sys", "Net", "Code", "AI"],
        }
    }
}

/// Market the startup operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Industry {
    Tech,
    Finance,
    Health,
    Food,
    Education,
    Creative,
    ECommerce,
    Travel,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Tech,
        Industry::Finance,
        Industry::Health,
        Industry::Food,
        Industry::Education,
        Industry::Creative,
        Industry::ECommerce,
        Industry::Travel,
        Industry::Other,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Industry::Tech => "Tech",
            Industry::Finance => "Finance",
            Industry::Health => "Health",
            Industry::Food => "Food",
            Industry::Education => "Education",
            Industry::Creative => "Creative",
            Industry::ECommerce => "E-commerce",
            Industry::Travel => "Travel",
            Industry::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Food => "Food & Drink",
            Industry::Creative => "Creative Arts",
            other => other.key(),
        }
    }

    pub fn words(self) -> &'static [&'static str] {
        match self {
            Industry::Tech => &["Byte", "Code", "Bit", "Pixel", "Cloud"],
            Industry::Finance => &["Capital", "Wealth", "Fund", "Asset", "Money"],
            Industry::Health => &["Vital", "Care", "Health", "Life", "Well"],
            Industry::Food => &["Bite", "Taste", "Dish", "Savor", "Feast"],
            Industry::Education => &["Learn", "Mind", "Scholar", "Brain", "Mentor"],
            Industry::Creative => &["Muse", "Create", "Canvas", "Design", "Art"],
            Industry::ECommerce => &["Shop", "Cart", "Buy", "Market", "Store"],
            Industry::Travel => &["Journey", "Trip", "Wander", "Go", "Tour"],
            Industry::Other => &["Hub", "Spot", "Point", "Link", "Way"],
        }
    }
}

/// Name prefixes for a vibe key, `None` when the key is not a vibe.
pub fn vibe_prefixes(vibe: &str) -> Option<&'static [&'static str]> {
    Vibe::from_key(vibe).map(Vibe::prefixes)
}

/// Name suffixes for a vibe key, `None` when the key is not a vibe.
pub fn vibe_suffixes(vibe: &str) -> Option<&'static [&'static str]> {
    Vibe::from_key(vibe).map(Vibe::suffixes)
}

/// Domain words for an industry key, `None` when the key is not an industry.
pub fn industry_words(industry: &str) -> Option<&'static [&'static str]> {
    Industry::from_key(industry).map(Industry::words)
}

/// Selectable option as presented by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

impl Industry {
    pub fn option(self) -> OptionEntry {
        OptionEntry {
            value: self.key(),
            label: self.label(),
        }
    }
}

impl Vibe {
    pub fn option(self) -> OptionEntry {
        OptionEntry {
            value: self.key(),
            label: self.label(),
        }
    }
}

/// Industries in display order.
pub fn industry_options() -> impl Iterator<Item = OptionEntry> {
    Industry::ALL.into_iter().map(Industry::option)
}

/// Vibes in display order.
pub fn vibe_options() -> impl Iterator<Item = OptionEntry> {
    Vibe::ALL.into_iter().map(Vibe::option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_reject_unknown_and_empty_keys() {
        assert!(vibe_prefixes("Bogus").is_none());
        assert!(vibe_suffixes("").is_none());
        assert!(industry_words("").is_none());
        assert!(industry_words("tech").is_none());
    }

    #[test]
    fn ecommerce_key_keeps_hyphen() {
        assert_eq!(Industry::from_key("E-commerce"), Some(Industry::ECommerce));
        assert_eq!(
            industry_words("E-commerce"),
            Some(&["Shop", "Cart", "Buy", "Market", "Store"][..])
        );
    }

    #[test]
    fn option_catalogs_carry_display_labels() {
        let industries: Vec<_> = industry_options().collect();
        assert_eq!(industries.len(), 9);
        assert_eq!(
            industries[3],
            OptionEntry {
                value: "Food",
                label: "Food & Drink"
            }
        );
        assert_eq!(industries[6].value, "E-commerce");
        assert_eq!(industries[6].label, "E-commerce");

        let vibes: Vec<_> = vibe_options().collect();
        assert_eq!(vibes.len(), 6);
        assert_eq!(vibes[0].value, "Modern");
        assert_eq!(vibes[0].label, "Modern ✨");
        for option in vibes {
            assert_eq!(vibe_prefixes(option.value).map(<[_]>::len), Some(5));
        }
    }

    #[test]
    fn every_vibe_has_prefixes_and_suffixes() {
        for vibe in Vibe::ALL {
            assert!(!vibe.prefixes().is_empty());
            assert!(!vibe.suffixes().is_empty());
        }
        assert_eq!(vibe_suffixes("Techy"), Some(&["Ware", "Sys", "Net", "Code", "AI"][..]));
    }
}

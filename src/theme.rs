/// Visual theme of a content section. Every section picks exactly one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Blue,
    Orange,
    Green,
}

/// CSS class bundle for one theme. All theming goes through this lookup so
/// the section template never branches on color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeTokens {
    pub badge: &'static str,
    pub title: &'static str,
    pub section_bg: &'static str,
    pub icon_bg: &'static str,
    pub glow: &'static str,
}

impl Theme {
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Blue => ThemeTokens {
                badge: "badge-blue",
                title: "title-blue",
                section_bg: "section-white",
                icon_bg: "icon-bg-blue",
                glow: "glow-blue",
            },
            Theme::Orange => ThemeTokens {
                badge: "badge-orange",
                title: "title-orange",
                section_bg: "section-slate",
                icon_bg: "icon-bg-orange",
                glow: "glow-orange",
            },
            Theme::Green => ThemeTokens {
                badge: "badge-green",
                title: "title-green",
                section_bg: "section-white",
                icon_bg: "icon-bg-green",
                glow: "glow-green",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_has_distinct_tokens() {
        let blue = Theme::Blue.tokens();
        let orange = Theme::Orange.tokens();
        let green = Theme::Green.tokens();
        assert_ne!(blue, orange);
        assert_ne!(orange, green);
        assert_ne!(blue, green);
    }

    #[test]
    fn orange_sections_sit_on_the_slate_background() {
        assert_eq!(Theme::Orange.tokens().section_bg, "section-slate");
        assert_eq!(Theme::Blue.tokens().section_bg, "section-white");
        assert_eq!(Theme::Green.tokens().section_bg, "section-white");
    }
}

/// Glyphs used across the page. Rendered as plain text symbols inside
/// themed badges, same trick the rest of the markup uses for markers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Gamepad,
    Check,
    AlertTriangle,
    Leaf,
    ChevronDown,
    Zap,
    Brain,
    Users,
    Eye,
    Moon,
    Recycle,
    Battery,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Gamepad => "🎮",
            Icon::Check => "✔",
            Icon::AlertTriangle => "⚠",
            Icon::Leaf => "🍃",
            Icon::ChevronDown => "⌄",
            Icon::Zap => "⚡",
            Icon::Brain => "🧠",
            Icon::Users => "👥",
            Icon::Eye => "👁",
            Icon::Moon => "🌙",
            Icon::Recycle => "♻",
            Icon::Battery => "🔋",
        }
    }
}

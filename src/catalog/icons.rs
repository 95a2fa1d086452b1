/// Glyphs the catalog's symbolic icon names resolve to.
///
/// Branch definitions carry icon *names* so the catalog stays free of any
/// rendering concern; front-ends resolve the name when they draw a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchIcon {
    Target,
    Package,
    Globe,
    Cog,
    Users,
    Wallet,
    Scale,
    Handshake,
    /// Generic marker for unrecognized icon names.
    Circle,
}

impl BranchIcon {
    /// Resolve a symbolic icon name, falling back to [`BranchIcon::Circle`].
    pub fn resolve(name: &str) -> Self {
        match name {
            "target" => Self::Target,
            "package" => Self::Package,
            "globe" => Self::Globe,
            "cog" => Self::Cog,
            "users" => Self::Users,
            "wallet" => Self::Wallet,
            "scale" => Self::Scale,
            "handshake" => Self::Handshake,
            _ => Self::Circle,
        }
    }

    /// A terminal-friendly rendering of the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Target => "◎",
            Self::Package => "▣",
            Self::Globe => "◍",
            Self::Cog => "⚙",
            Self::Users => "◫",
            Self::Wallet => "▤",
            Self::Scale => "⚖",
            Self::Handshake => "⟡",
            Self::Circle => "○",
        }
    }
}

use std::fmt;

/// Tag identifying a registered pixel encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatId(pub u8);

impl FormatId {
    /// 1 bpp, row-major, most significant bit first.
    pub const MONO_IDEAL: Self = Self(0);
    /// 1 bpp, eight-pixel vertical bytes (page-addressed panels).
    pub const MONO_VERTICAL: Self = Self(1);

    /// Name of a built-in format, if this is one.
    pub const fn builtin_name(self) -> Option<&'static str> {
        match self {
            Self::MONO_IDEAL => Some("mono1-ideal"),
            Self::MONO_VERTICAL => Some("mono1-vertical"),
            _ => None,
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{}", self.0),
        }
    }
}

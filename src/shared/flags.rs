//! Response flags: a bitset selecting optional field groups.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Optional field groups the server includes in cosmetic and shop payloads.
///
/// Fields gated by a flag are absent from the response unless the flag is set,
/// which is why the domain model represents them as `Option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResponseFlags(u32);

impl ResponseFlags {
    /// Include asset paths (`path`, `definitionPath`, ...).
    pub const INCLUDE_PATHS: ResponseFlags = ResponseFlags(1 << 0);
    /// Include `gameplayTags`.
    pub const INCLUDE_GAMEPLAY_TAGS: ResponseFlags = ResponseFlags(1 << 1);
    /// Include `shopHistory`.
    pub const INCLUDE_SHOP_HISTORY: ResponseFlags = ResponseFlags(1 << 2);

    /// No optional groups.
    pub const fn none() -> Self {
        ResponseFlags(0)
    }

    /// Every optional group.
    pub const fn all() -> Self {
        ResponseFlags(
            Self::INCLUDE_PATHS.0 | Self::INCLUDE_GAMEPLAY_TAGS.0 | Self::INCLUDE_SHOP_HISTORY.0,
        )
    }

    /// Raw bit value, as sent in the `responseFlags` query parameter.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: ResponseFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ResponseFlags {
    type Output = ResponseFlags;

    fn bitor(self, rhs: ResponseFlags) -> ResponseFlags {
        ResponseFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ResponseFlags {
    fn bitor_assign(&mut self, rhs: ResponseFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ResponseFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl crate::http::QueryValue for ResponseFlags {
    fn to_query_value(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_values() {
        assert_eq!(ResponseFlags::none().bits(), 0);
        assert_eq!(ResponseFlags::INCLUDE_PATHS.bits(), 1);
        assert_eq!(ResponseFlags::INCLUDE_GAMEPLAY_TAGS.bits(), 2);
        assert_eq!(ResponseFlags::INCLUDE_SHOP_HISTORY.bits(), 4);
        assert_eq!(ResponseFlags::all().bits(), 7);
    }

    #[test]
    fn test_combine_and_contains() {
        let mut flags = ResponseFlags::INCLUDE_PATHS | ResponseFlags::INCLUDE_SHOP_HISTORY;
        assert!(flags.contains(ResponseFlags::INCLUDE_PATHS));
        assert!(!flags.contains(ResponseFlags::INCLUDE_GAMEPLAY_TAGS));

        flags |= ResponseFlags::INCLUDE_GAMEPLAY_TAGS;
        assert_eq!(flags, ResponseFlags::all());
        assert!(ResponseFlags::default().is_empty());
    }
}

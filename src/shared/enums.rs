//! String-valued enums used in payloads and query parameters.
//!
//! Every enum carries an `Unknown(String)` variant so that a value added on
//! the server side never fails a parse; the raw string is kept verbatim.

use std::fmt;

/// Declares a forward-compatible string enum.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value not known to this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// All known variants.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),*];

            /// Get the string representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(raw) => raw,
                }
            }

            /// Parse from the API string. Never fails.
            pub fn from_raw(raw: &str) -> Self {
                match raw {
                    $($value => Self::$variant,)*
                    other => Self::Unknown(other.to_string()),
                }
            }

            /// Whether this value was not recognized.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from_raw(raw)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from_raw(&raw))
            }
        }

        impl crate::http::QueryValue for $name {
            fn to_query_value(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

// ============================================================================
// Request parameters
// ============================================================================

api_enum! {
    /// Encoding of AES keys returned by `/v2/aes`.
    pub enum KeyFormat {
        Hex = "hex",
        Base64 = "base64",
    }
}

api_enum! {
    /// Language of localized strings in responses.
    pub enum GameLanguage {
        Arabic = "ar",
        German = "de",
        English = "en",
        Spanish = "es",
        SpanishLatin = "es-419",
        French = "fr",
        Italian = "it",
        Japanese = "ja",
        Korean = "ko",
        Polish = "pl",
        PortugueseBrazil = "pt-BR",
        Russian = "ru",
        Turkish = "tr",
        ChineseSimplified = "zh-CN",
        ChineseTraditional = "zh-Hant",
    }
}

impl Default for GameLanguage {
    fn default() -> Self {
        GameLanguage::English
    }
}

impl Default for KeyFormat {
    fn default() -> Self {
        KeyFormat::Hex
    }
}

api_enum! {
    /// How cosmetic search compares string criteria.
    pub enum MatchMethod {
        Full = "full",
        Contains = "contains",
        Starts = "starts",
        Ends = "ends",
    }
}

api_enum! {
    /// Platform of an account looked up by name.
    pub enum AccountType {
        Epic = "epic",
        Psn = "psn",
        Xbl = "xbl",
    }
}

api_enum! {
    /// Period covered by player stats.
    pub enum TimeWindow {
        Season = "season",
        Lifetime = "lifetime",
    }
}

api_enum! {
    /// Which input group a stats image is rendered for.
    pub enum StatsImageType {
        All = "all",
        KeyboardMouse = "keyboardMouse",
        Gamepad = "gamepad",
        Touch = "touch",
        None = "none",
    }
}

api_enum! {
    /// Game mode a news feed belongs to.
    pub enum NewsType {
        BattleRoyale = "br",
        SaveTheWorld = "stw",
    }
}

// ============================================================================
// Payload values
// ============================================================================

api_enum! {
    /// Top-level cosmetic category, as used by `/v2/cosmetics` and `/v2/cosmetics/new`.
    pub enum CosmeticCategory {
        Br = "br",
        Tracks = "tracks",
        Instruments = "instruments",
        Cars = "cars",
        Lego = "lego",
        LegoKits = "legokits",
        Beans = "beans",
    }
}

api_enum! {
    /// Rarity of a cosmetic.
    pub enum CosmeticRarity {
        Frozen = "frozen",
        Lava = "lava",
        Legendary = "legendary",
        GamingLegends = "gaminglegends",
        Dark = "dark",
        StarWars = "starwars",
        Marvel = "marvel",
        Dc = "dc",
        IconSeries = "icon",
        Shadow = "shadow",
        Slurp = "slurp",
        Epic = "epic",
        Lamborghini = "lamborghini",
        Rare = "rare",
        Uncommon = "uncommon",
        Common = "common",
        Mythic = "mythic",
    }
}

api_enum! {
    /// Type of a cosmetic (`type.value`).
    pub enum CosmeticType {
        Outfit = "outfit",
        Backpack = "backpack",
        Pet = "pet",
        PetCarrier = "petcarrier",
        Pickaxe = "pickaxe",
        Glider = "glider",
        Contrail = "contrail",
        Aura = "aura",
        Emote = "emote",
        Emoji = "emoji",
        Spray = "spray",
        Toy = "toy",
        Wrap = "wrap",
        Banner = "banner",
        Music = "music",
        LoadingScreen = "loadingscreen",
        Guitar = "guitar",
        Bass = "bass",
        Drums = "drum",
        Microphone = "mic",
        Keytar = "keyboard",
        CarBody = "body",
        Decal = "skin",
        Wheels = "wheel",
        Trail = "drifttrail",
        Boost = "booster",
        JamTrack = "track",
        LegoBuild = "legoset",
        LegoDecorBundle = "legoprop",
        Shout = "shout",
    }
}

api_enum! {
    /// Whether a creator code can currently be used.
    pub enum CreatorCodeStatus {
        Active = "active",
        Disabled = "disabled",
    }
}

api_enum! {
    /// Visual weight of a shop entry banner.
    pub enum BannerIntensity {
        Low = "Low",
        Medium = "Medium",
        High = "High",
    }
}

api_enum! {
    /// Game mode a material instance is primarily used in.
    pub enum CosmeticCompatibleMode {
        BattleRoyale = "ECosmeticCompatibleMode::BattleRoyale",
        Lego = "ECosmeticCompatibleMode::Juno",
        RocketRacing = "ECosmeticCompatibleMode::DelMar",
        Festival = "ECosmeticCompatibleMode::Sparks",
    }
}

api_enum! {
    /// Product a render image or material instance belongs to.
    pub enum ProductTag {
        BattleRoyale = "Product.BR",
        Lego = "Product.Juno",
        RocketRacing = "Product.DelMar",
        Festival = "Product.Sparks",
    }
}

api_enum! {
    /// Body type of a bean variant.
    pub enum CustomGender {
        Female = "EFortCustomGender::Female",
        Male = "EFortCustomGender::Male",
    }
}

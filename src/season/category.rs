//! Categorical labels produced by the analysis
//!
//! Each label displays and serializes as its lowercase name (seasons are
//! capitalized) and parses case-insensitively, treating `_` and `-` as
//! spaces, so `"Dark_Brown"` reads back as [`EyeColor::DarkBrown`].

pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Declares a label enum with `Display`, case-insensitive `FromStr` and
/// serde support. Extra `| "alias"` literals are accepted when parsing.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(into = "&'static str", try_from = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn accepts(&self, normalized: &str) -> bool {
                match self {
                    $($name::$variant => {
                        [$label $(, $alias)*]
                            .iter()
                            .any(|l| $crate::season::category::normalize_label(l) == normalized)
                    }),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::AnalysisError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = $crate::season::category::normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.accepts(&wanted))
                    .ok_or_else(|| $crate::AnalysisError::invalid_parameter(stringify!($name), s))
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::AnalysisError;

            fn try_from(s: String) -> ::std::result::Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.label()
            }
        }
    };
}

pub(crate) use categorical;

categorical! {
    /// Seasonal color palette
    Season {
        Spring => "Spring",
        Summer => "Summer",
        Autumn => "Autumn",
        Winter => "Winter",
    }
}

categorical! {
    /// Three-step level used for contrast and saturation
    Level {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

categorical! {
    /// Skin undertone
    SkinUndertone {
        Warm => "warm",
        Cool => "cool",
        Neutral => "neutral",
    }
}

categorical! {
    EyeColor {
        DarkBrown => "dark brown",
        Brown => "brown",
        Amber => "amber",
        Green => "green",
        Hazel => "hazel",
        Blue => "blue",
        Gray => "gray",
    }
}

categorical! {
    HairColor {
        Black => "black",
        DarkBrown => "dark brown",
        Brown => "brown",
        Red => "red",
        Blonde => "blonde",
        LightBrown => "light brown",
    }
}

impl Season {
    /// Warm seasons are Spring and Autumn
    pub fn is_warm(&self) -> bool {
        matches!(self, Season::Spring | Season::Autumn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalysisError;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("AUTUMN".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!("Dark_Brown".parse::<EyeColor>().unwrap(), EyeColor::DarkBrown);
        assert_eq!("light-brown".parse::<HairColor>().unwrap(), HairColor::LightBrown);
    }

    #[test]
    fn test_unknown_label_is_invalid_parameter() {
        let err = "monsoon".parse::<Season>().unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_serde_uses_display_labels() {
        assert_eq!(serde_json::to_string(&EyeColor::DarkBrown).unwrap(), "\"dark brown\"");
        assert_eq!(serde_json::to_string(&Season::Summer).unwrap(), "\"Summer\"");

        let level: Level = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(level, Level::High);
        assert!(serde_json::from_str::<Level>("\"extreme\"").is_err());
    }

    #[test]
    fn test_season_warmth() {
        assert!(Season::Spring.is_warm());
        assert!(!Season::Winter.is_warm());
    }
}

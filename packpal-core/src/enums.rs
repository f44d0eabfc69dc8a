//! Enum types for PackPal entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TRIP ENUMS
// ============================================================================

/// Why the traveler is making the trip. Selects exactly one purpose rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TripPurpose {
    Business,
    Leisure,
    Adventure,
    Beach,
    WinterSports,
}

impl TripPurpose {
    pub const ALL: [TripPurpose; 5] = [
        Self::Business,
        Self::Leisure,
        Self::Adventure,
        Self::Beach,
        Self::WinterSports,
    ];

    /// Wire name, as used by the trip form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Leisure => "leisure",
            Self::Adventure => "adventure",
            Self::Beach => "beach",
            Self::WinterSports => "winter-sports",
        }
    }
}

/// Coarse luggage constraint. Swaps toiletry and shoe variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum LuggageCapacity {
    CarryOn,
    Checked,
}

impl LuggageCapacity {
    pub const ALL: [LuggageCapacity; 2] = [Self::CarryOn, Self::Checked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CarryOn => "carry-on",
            Self::Checked => "checked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::NonBinary => "non-binary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AgeRange {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teen => "teen",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

// ============================================================================
// PACKING ENUMS
// ============================================================================

/// Category a packing item is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum PackingCategory {
    Documents,
    Clothing,
    Electronics,
    Toiletries,
    Accessories,
    Medicine,
    Activity,
}

impl PackingCategory {
    /// Order in which categories are presented to the traveler.
    pub const DISPLAY_ORDER: [PackingCategory; 7] = [
        Self::Clothing,
        Self::Toiletries,
        Self::Electronics,
        Self::Documents,
        Self::Medicine,
        Self::Accessories,
        Self::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Clothing => "clothing",
            Self::Electronics => "electronics",
            Self::Toiletries => "toiletries",
            Self::Accessories => "accessories",
            Self::Medicine => "medicine",
            Self::Activity => "activity",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Documents => "Documents & ID",
            Self::Clothing => "Clothing & Footwear",
            Self::Electronics => "Electronics & Gadgets",
            Self::Toiletries => "Toiletries & Personal Care",
            Self::Accessories => "Accessories",
            Self::Medicine => "Medications & First Aid",
            Self::Activity => "Activity-specific Items",
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Error when parsing an enumerated value from its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumParseError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for EnumParseError {}

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! wire_enum_impls {
    ($ty:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = normalize_token(s);
                [$($variant),+]
                    .into_iter()
                    .find(|candidate: &$ty| normalize_token(candidate.as_str()) == normalized)
                    .ok_or_else(|| EnumParseError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum_impls!(
    TripPurpose,
    "trip purpose",
    [
        TripPurpose::Business,
        TripPurpose::Leisure,
        TripPurpose::Adventure,
        TripPurpose::Beach,
        TripPurpose::WinterSports,
    ]
);
wire_enum_impls!(
    LuggageCapacity,
    "luggage capacity",
    [LuggageCapacity::CarryOn, LuggageCapacity::Checked]
);
wire_enum_impls!(
    Gender,
    "gender",
    [Gender::Male, Gender::Female, Gender::NonBinary]
);
wire_enum_impls!(
    AgeRange,
    "age range",
    [AgeRange::Child, AgeRange::Teen, AgeRange::Adult, AgeRange::Senior]
);
wire_enum_impls!(
    PackingCategory,
    "packing category",
    [
        PackingCategory::Documents,
        PackingCategory::Clothing,
        PackingCategory::Electronics,
        PackingCategory::Toiletries,
        PackingCategory::Accessories,
        PackingCategory::Medicine,
        PackingCategory::Activity,
    ]
);

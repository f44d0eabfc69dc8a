//! Rule catalog: candidate packing items as data.
//!
//! Each [`Rule`] pairs a [`RuleCondition`] with a list of [`ItemTemplate`]s.
//! The assembler walks the rules in family order and never needs to know
//! what any individual rule contains.

use crate::{LuggageCapacity, PackingCategory, TripPurpose, WeatherSummary};
use once_cell::sync::Lazy;
use std::borrow::Cow;

use crate::PackingCategory::{Accessories, Clothing, Documents, Electronics, Medicine, Toiletries};

/// Laundry is assumed after a week.
pub const LAUNDRY_CYCLE_DAYS: u32 = 7;

/// Days one pair of pants/trousers lasts.
pub const DAYS_PER_PANTS: u32 = 3;

/// Below this average minimum (°C) light layers are packed.
pub const COOL_MIN_TEMP_C: f64 = 15.0;

/// Below this average minimum (°C) winter gear is packed as well.
pub const COLD_MIN_TEMP_C: f64 = 5.0;

/// Above this average maximum (°C) hot-weather items are packed.
pub const HOT_MAX_TEMP_C: f64 = 25.0;

// ============================================================================
// RULE TYPES
// ============================================================================

/// Rule families in evaluation order. Earlier families win name collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleFamily {
    BaseEssentials,
    Duration,
    Weather,
    Purpose,
    Luggage,
}

impl RuleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseEssentials => "base-essentials",
            Self::Duration => "duration",
            Self::Weather => "weather",
            Self::Purpose => "purpose",
            Self::Luggage => "luggage",
        }
    }
}

/// How many of an item to pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityRule {
    Fixed(u32),
    /// One per travel day, capped.
    PerDayCapped { cap: u32 },
    /// One per `days` travel days, rounded up.
    OnePer { days: u32 },
}

impl QuantityRule {
    /// Resolve against the trip length. Never returns less than 1.
    pub fn resolve(&self, trip_days: i64) -> u32 {
        let quantity = match *self {
            Self::Fixed(n) => i64::from(n),
            Self::PerDayCapped { cap } => trip_days.min(i64::from(cap)),
            Self::OnePer { days } => {
                let per = i64::from(days.max(1));
                if trip_days <= 0 {
                    0
                } else {
                    (trip_days + per - 1) / per
                }
            }
        };
        u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
    }
}

/// Candidate item as declared in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    pub name: Cow<'static, str>,
    pub category: PackingCategory,
    pub essential: bool,
    pub quantity: QuantityRule,
}

impl ItemTemplate {
    pub const fn fixed(
        name: &'static str,
        category: PackingCategory,
        essential: bool,
        quantity: u32,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            category,
            essential,
            quantity: QuantityRule::Fixed(quantity),
        }
    }

    pub const fn scaled(
        name: &'static str,
        category: PackingCategory,
        essential: bool,
        quantity: QuantityRule,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            category,
            essential,
            quantity,
        }
    }

    /// Template with an owned name, for rules built at runtime.
    pub fn custom(
        name: impl Into<String>,
        category: PackingCategory,
        essential: bool,
        quantity: QuantityRule,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            category,
            essential,
            quantity,
        }
    }
}

/// When a rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleCondition {
    Always,
    AvgMinTempBelow(f64),
    AvgMaxTempAbove(f64),
    Precipitation,
    Purpose(TripPurpose),
    Luggage(LuggageCapacity),
}

/// Everything a rule condition or quantity may depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSignals {
    pub trip_days: i64,
    pub weather: WeatherSummary,
    pub purpose: TripPurpose,
    pub luggage: LuggageCapacity,
}

impl RuleCondition {
    pub fn matches(&self, signals: &TripSignals) -> bool {
        match *self {
            Self::Always => true,
            Self::AvgMinTempBelow(limit) => signals.weather.avg_temp_min < limit,
            Self::AvgMaxTempAbove(limit) => signals.weather.avg_temp_max > limit,
            Self::Precipitation => signals.weather.has_precipitation,
            Self::Purpose(purpose) => signals.purpose == purpose,
            Self::Luggage(luggage) => signals.luggage == luggage,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub family: RuleFamily,
    pub condition: RuleCondition,
    pub items: Vec<ItemTemplate>,
}

impl Rule {
    pub fn new(family: RuleFamily, condition: RuleCondition, items: &[ItemTemplate]) -> Self {
        Self {
            family,
            condition,
            items: items.to_vec(),
        }
    }
}

/// Item proposed by a rule, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    pub name: String,
    pub category: PackingCategory,
    pub essential: bool,
    pub quantity: u32,
    pub family: RuleFamily,
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    rules: Vec<Rule>,
}

static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(build_standard_catalog);

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped rule table.
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Add a rule behind every rule of the same or an earlier family.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        let position = self
            .rules
            .iter()
            .rposition(|existing| existing.family <= rule.family)
            .map_or(0, |index| index + 1);
        self.rules.insert(position, rule);
        self
    }

    /// Expand every matching rule into candidates, in evaluation order.
    pub fn candidates(&self, signals: &TripSignals) -> Vec<CandidateItem> {
        self.rules
            .iter()
            .filter(|rule| rule.condition.matches(signals))
            .flat_map(|rule| {
                rule.items.iter().map(move |template| CandidateItem {
                    name: template.name.to_string(),
                    category: template.category,
                    essential: template.essential,
                    quantity: template.quantity.resolve(signals.trip_days),
                    family: rule.family,
                })
            })
            .collect()
    }
}

// ============================================================================
// STANDARD TABLE
// ============================================================================

const BASE_ESSENTIALS: &[ItemTemplate] = &[
    ItemTemplate::fixed("Passport", Documents, true, 1),
    ItemTemplate::fixed("ID Card", Documents, true, 1),
    ItemTemplate::fixed("Flight Tickets", Documents, true, 1),
    ItemTemplate::fixed("Travel Insurance", Documents, true, 1),
    ItemTemplate::fixed("Credit/Debit Cards", Documents, true, 2),
    ItemTemplate::fixed("Cash", Documents, true, 1),
    ItemTemplate::fixed("Phone", Electronics, true, 1),
    ItemTemplate::fixed("Phone Charger", Electronics, true, 1),
    ItemTemplate::fixed("Power Adapter", Electronics, true, 1),
    ItemTemplate::fixed("Toothbrush", Toiletries, true, 1),
    ItemTemplate::fixed("Toothpaste", Toiletries, true, 1),
    ItemTemplate::fixed("Deodorant", Toiletries, true, 1),
    ItemTemplate::fixed("Shampoo", Toiletries, false, 1),
    ItemTemplate::fixed("Soap/Body Wash", Toiletries, false, 1),
    ItemTemplate::fixed("Medications", Medicine, true, 1),
    ItemTemplate::fixed("First Aid Kit", Medicine, false, 1),
];

const DAILY_WEAR: QuantityRule = QuantityRule::PerDayCapped {
    cap: LAUNDRY_CYCLE_DAYS,
};

const DURATION_ITEMS: &[ItemTemplate] = &[
    ItemTemplate::scaled("Underwear", Clothing, true, DAILY_WEAR),
    ItemTemplate::scaled("Socks", Clothing, true, DAILY_WEAR),
    ItemTemplate::scaled("T-shirts", Clothing, true, DAILY_WEAR),
    ItemTemplate::scaled(
        "Pants/Trousers",
        Clothing,
        true,
        QuantityRule::OnePer {
            days: DAYS_PER_PANTS,
        },
    ),
];

const COOL_WEATHER: &[ItemTemplate] = &[
    ItemTemplate::fixed("Jacket", Clothing, true, 1),
    ItemTemplate::fixed("Sweater/Hoodie", Clothing, false, 2),
    ItemTemplate::fixed("Long-sleeve Shirts", Clothing, false, 2),
];

const COLD_WEATHER: &[ItemTemplate] = &[
    ItemTemplate::fixed("Winter Coat", Clothing, true, 1),
    ItemTemplate::fixed("Thermal Underwear", Clothing, false, 2),
    ItemTemplate::fixed("Gloves", Accessories, false, 1),
    ItemTemplate::fixed("Scarf", Accessories, false, 1),
    ItemTemplate::fixed("Beanie/Hat", Accessories, false, 1),
];

const HOT_WEATHER: &[ItemTemplate] = &[
    ItemTemplate::fixed("Shorts", Clothing, false, 3),
    ItemTemplate::fixed("Sunglasses", Accessories, false, 1),
    ItemTemplate::fixed("Sunscreen", Toiletries, true, 1),
    ItemTemplate::fixed("Hat/Cap", Accessories, false, 1),
];

const RAIN_GEAR: &[ItemTemplate] = &[
    ItemTemplate::fixed("Umbrella", Accessories, false, 1),
    ItemTemplate::fixed("Waterproof Jacket/Raincoat", Clothing, false, 1),
];

const BUSINESS: &[ItemTemplate] = &[
    ItemTemplate::fixed("Formal Shirts", Clothing, true, 3),
    ItemTemplate::fixed("Formal Pants/Skirts", Clothing, true, 2),
    ItemTemplate::fixed("Blazer/Suit", Clothing, true, 1),
    ItemTemplate::fixed("Formal Shoes", Clothing, true, 1),
    ItemTemplate::fixed("Business Cards", Documents, false, 1),
    ItemTemplate::fixed("Laptop", Electronics, true, 1),
    ItemTemplate::fixed("Laptop Charger", Electronics, true, 1),
    ItemTemplate::fixed("Notebook", Accessories, false, 1),
    ItemTemplate::fixed("Pen", Accessories, false, 2),
];

const BEACH: &[ItemTemplate] = &[
    ItemTemplate::fixed("Swimwear", Clothing, true, 2),
    ItemTemplate::fixed("Beach Towel", Accessories, false, 1),
    ItemTemplate::fixed("Flip Flops/Sandals", Clothing, true, 1),
    ItemTemplate::fixed("Sunscreen", Toiletries, true, 1),
    ItemTemplate::fixed("After-sun Lotion", Toiletries, false, 1),
    ItemTemplate::fixed("Beach Bag", Accessories, false, 1),
    ItemTemplate::fixed("Sunglasses", Accessories, true, 1),
    ItemTemplate::fixed("Hat/Cap", Accessories, true, 1),
];

const ADVENTURE: &[ItemTemplate] = &[
    ItemTemplate::fixed("Hiking Boots", Clothing, true, 1),
    ItemTemplate::fixed("Backpack", Accessories, true, 1),
    ItemTemplate::fixed("Water Bottle", Accessories, true, 1),
    ItemTemplate::fixed("Quick-dry Towel", Accessories, false, 1),
    ItemTemplate::fixed("Insect Repellent", Toiletries, true, 1),
    ItemTemplate::fixed("Flashlight", Accessories, false, 1),
    ItemTemplate::fixed("Pocket Knife", Accessories, false, 1),
    ItemTemplate::fixed("Compass/GPS", Electronics, false, 1),
    ItemTemplate::fixed("First Aid Kit", Medicine, true, 1),
];

const WINTER_SPORTS: &[ItemTemplate] = &[
    ItemTemplate::fixed("Ski/Snowboard Jacket", Clothing, true, 1),
    ItemTemplate::fixed("Ski/Snowboard Pants", Clothing, true, 1),
    ItemTemplate::fixed("Thermal Base Layers", Clothing, true, 3),
    ItemTemplate::fixed("Ski Socks", Clothing, true, 3),
    ItemTemplate::fixed("Gloves", Accessories, true, 1),
    ItemTemplate::fixed("Beanie/Hat", Accessories, true, 1),
    ItemTemplate::fixed("Goggles", Accessories, true, 1),
    ItemTemplate::fixed("Sunscreen", Toiletries, true, 1),
    ItemTemplate::fixed("Lip Balm", Toiletries, true, 1),
];

const LEISURE: &[ItemTemplate] = &[
    ItemTemplate::fixed("Casual Shirts", Clothing, false, 3),
    ItemTemplate::fixed("Camera", Electronics, false, 1),
    ItemTemplate::fixed("Book/E-Reader", Accessories, false, 1),
    ItemTemplate::fixed("Day Bag", Accessories, false, 1),
];

const CARRY_ON: &[ItemTemplate] = &[
    ItemTemplate::fixed("Travel-size Toiletries", Toiletries, true, 1),
    ItemTemplate::fixed("Compact Packing Cubes", Accessories, false, 1),
];

const CHECKED: &[ItemTemplate] = &[
    ItemTemplate::fixed("Full-size Toiletries", Toiletries, false, 1),
    ItemTemplate::fixed("Extra Shoes", Clothing, false, 1),
];

fn build_standard_catalog() -> Catalog {
    use RuleCondition as When;
    use RuleFamily as Family;

    let rules = vec![
        Rule::new(Family::BaseEssentials, When::Always, BASE_ESSENTIALS),
        Rule::new(Family::Duration, When::Always, DURATION_ITEMS),
        Rule::new(Family::Weather, When::AvgMinTempBelow(COOL_MIN_TEMP_C), COOL_WEATHER),
        Rule::new(Family::Weather, When::AvgMinTempBelow(COLD_MIN_TEMP_C), COLD_WEATHER),
        Rule::new(Family::Weather, When::AvgMaxTempAbove(HOT_MAX_TEMP_C), HOT_WEATHER),
        Rule::new(Family::Weather, When::Precipitation, RAIN_GEAR),
        Rule::new(Family::Purpose, When::Purpose(TripPurpose::Business), BUSINESS),
        Rule::new(Family::Purpose, When::Purpose(TripPurpose::Beach), BEACH),
        Rule::new(Family::Purpose, When::Purpose(TripPurpose::Adventure), ADVENTURE),
        Rule::new(Family::Purpose, When::Purpose(TripPurpose::WinterSports), WINTER_SPORTS),
        Rule::new(Family::Purpose, When::Purpose(TripPurpose::Leisure), LEISURE),
        Rule::new(Family::Luggage, When::Luggage(LuggageCapacity::CarryOn), CARRY_ON),
        Rule::new(Family::Luggage, When::Luggage(LuggageCapacity::Checked), CHECKED),
    ];
    Catalog { rules }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(trip_days: i64, min: f64, max: f64, rain: bool) -> TripSignals {
        TripSignals {
            trip_days,
            weather: WeatherSummary {
                avg_temp_max: max,
                avg_temp_min: min,
                has_precipitation: rain,
                days: 7,
            },
            purpose: TripPurpose::Leisure,
            luggage: LuggageCapacity::Checked,
        }
    }

    fn names(candidates: &[CandidateItem]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_base_essentials_has_sixteen_items() {
        assert_eq!(BASE_ESSENTIALS.len(), 16);
    }

    #[test]
    fn test_per_day_capped_quantity() {
        let rule = QuantityRule::PerDayCapped { cap: 7 };
        assert_eq!(rule.resolve(3), 3);
        assert_eq!(rule.resolve(7), 7);
        assert_eq!(rule.resolve(10), 7);
    }

    #[test]
    fn test_one_per_quantity_rounds_up() {
        let rule = QuantityRule::OnePer { days: 3 };
        assert_eq!(rule.resolve(1), 1);
        assert_eq!(rule.resolve(3), 1);
        assert_eq!(rule.resolve(8), 3);
        assert_eq!(rule.resolve(10), 4);
    }

    #[test]
    fn test_quantities_clamp_to_one_for_degenerate_durations() {
        assert_eq!(QuantityRule::PerDayCapped { cap: 7 }.resolve(0), 1);
        assert_eq!(QuantityRule::PerDayCapped { cap: 7 }.resolve(-4), 1);
        assert_eq!(QuantityRule::OnePer { days: 3 }.resolve(-5), 1);
        assert_eq!(QuantityRule::Fixed(0).resolve(5), 1);
    }

    #[test]
    fn test_mild_weather_fires_no_weather_rule() {
        let candidates = Catalog::standard().candidates(&signals(5, 16.0, 22.0, false));
        assert!(candidates.iter().all(|c| c.family != RuleFamily::Weather));
    }

    #[test]
    fn test_threshold_boundaries_are_strict() {
        let at_cool = Catalog::standard().candidates(&signals(5, 15.0, 25.0, false));
        assert!(!names(&at_cool).contains(&"Jacket"));
        assert!(!names(&at_cool).contains(&"Shorts"));

        let at_cold = Catalog::standard().candidates(&signals(5, 5.0, 10.0, false));
        assert!(names(&at_cold).contains(&"Jacket"));
        assert!(!names(&at_cold).contains(&"Winter Coat"));
    }

    #[test]
    fn test_families_are_in_evaluation_order() {
        let candidates = Catalog::standard().candidates(&signals(5, 2.0, 30.0, true));
        let families: Vec<RuleFamily> = candidates.iter().map(|c| c.family).collect();
        let mut sorted = families.clone();
        sorted.sort();
        assert_eq!(families, sorted);
    }

    #[test]
    fn test_with_rule_keeps_family_order() {
        let extra = Rule::new(
            RuleFamily::Weather,
            RuleCondition::AvgMaxTempAbove(35.0),
            &[ItemTemplate::fixed("Cooling Towel", Accessories, false, 1)],
        );
        let catalog = Catalog::standard().clone().with_rule(extra);
        let families: Vec<RuleFamily> = catalog.rules().iter().map(|r| r.family).collect();
        let mut sorted = families.clone();
        sorted.sort();
        assert_eq!(families, sorted);
        assert_eq!(catalog.rules().len(), Catalog::standard().rules().len() + 1);

        let position = catalog
            .rules()
            .iter()
            .position(|r| r.items.iter().any(|i| i.name == "Cooling Towel"))
            .unwrap();
        assert_eq!(catalog.rules()[position + 1].family, RuleFamily::Purpose);
    }

    #[test]
    fn test_with_rule_on_empty_catalog() {
        let rule = Rule::new(
            RuleFamily::Luggage,
            RuleCondition::Always,
            &[ItemTemplate::custom("Luggage Tag", Accessories, false, QuantityRule::Fixed(2))],
        );
        let catalog = Catalog::empty().with_rule(rule);
        let candidates = catalog.candidates(&signals(3, 20.0, 20.0, false));
        assert_eq!(names(&candidates), vec!["Luggage Tag"]);
        assert_eq!(candidates[0].quantity, 2);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cities the catalogue is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CityName {
    #[default]
    Paris,
    Cologne,
    Brussels,
    Amsterdam,
    Hamburg,
    Dusseldorf,
}

/// All cities in display order. The first one is the default location.
pub const CITIES: [CityName; 6] = [
    CityName::Paris,
    CityName::Cologne,
    CityName::Brussels,
    CityName::Amsterdam,
    CityName::Hamburg,
    CityName::Dusseldorf,
];

impl CityName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityName::Paris => "Paris",
            CityName::Cologne => "Cologne",
            CityName::Brussels => "Brussels",
            CityName::Amsterdam => "Amsterdam",
            CityName::Hamburg => "Hamburg",
            CityName::Dusseldorf => "Dusseldorf",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(s: &str) -> Option<Self> {
        CITIES
            .into_iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the offers list of the current city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortType {
    /// Server order.
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    TopRatedFirst,
}

pub const SORT_TYPES: [SortType; 4] = [
    SortType::Popular,
    SortType::PriceLowToHigh,
    SortType::PriceHighToLow,
    SortType::TopRatedFirst,
];

impl SortType {
    pub fn label(&self) -> &'static str {
        match self {
            SortType::Popular => "Popular",
            SortType::PriceLowToHigh => "Price: low to high",
            SortType::PriceHighToLow => "Price: high to low",
            SortType::TopRatedFirst => "Top rated first",
        }
    }

    /// Parse a sort type from its label or a short kebab-case alias.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "popular" => Some(SortType::Popular),
            "price-asc" | "price: low to high" => Some(SortType::PriceLowToHigh),
            "price-desc" | "price: high to low" => Some(SortType::PriceHighToLow),
            "top-rated" | "top rated first" => Some(SortType::TopRatedFirst),
            _ => None,
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location_is_first_city() {
        assert_eq!(CityName::default(), CITIES[0]);
        assert_eq!(SortType::default(), SORT_TYPES[0]);
    }

    #[test]
    fn test_city_parse() {
        assert_eq!(CityName::parse("amsterdam"), Some(CityName::Amsterdam));
        assert_eq!(CityName::parse(" Hamburg "), Some(CityName::Hamburg));
        assert_eq!(CityName::parse("Berlin"), None);
    }

    #[test]
    fn test_sort_type_parse() {
        assert_eq!(SortType::parse("top-rated"), Some(SortType::TopRatedFirst));
        assert_eq!(
            SortType::parse("Price: low to high"),
            Some(SortType::PriceLowToHigh)
        );
        assert_eq!(SortType::parse("cheapest"), None);
    }
}

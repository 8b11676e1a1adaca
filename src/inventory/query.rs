// src/inventory/query.rs

use crate::domain::spot::{Category, Occupancy, ParkingSpot};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;
use tracing::debug;

/// `All` or a single occupancy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Occupancy),
}

impl StatusFilter {
    pub fn matches(&self, occupancy: Occupancy) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == occupancy,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("todos") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// `All` or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(Category),
}

impl TypeFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("todos") {
            return Ok(TypeFilter::All);
        }
        s.parse().map(TypeFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Number,
    Occupancy,
    Category,
    /// Keeps input order. Any unrecognised key parses to this.
    Unsorted,
}

impl SortKey {
    fn compare(&self, a: &ParkingSpot, b: &ParkingSpot) -> Ordering {
        match self {
            SortKey::Number => a.number.cmp(&b.number),
            SortKey::Occupancy => a.occupancy.label().cmp(b.occupancy.label()),
            SortKey::Category => a.category.label().cmp(b.category.label()),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "number" | "numero" => SortKey::Number,
            "occupancy" | "status" | "estado" => SortKey::Occupancy,
            "category" | "type" | "tipo" => SortKey::Category,
            _ => SortKey::Unsorted,
        })
    }
}

/// Filter and ordering requested by the parking page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotQuery {
    pub search: String,
    pub status: StatusFilter,
    pub category: TypeFilter,
    pub sort: SortKey,
}

impl SpotQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, category: TypeFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Builds a query from the raw filter-bar values. Unknown sort keys fall
    /// back to input order; unknown filters are an error.
    pub fn from_raw(search: &str, status: &str, category: &str, sort: &str) -> Result<Self, String> {
        let sort = match sort.parse::<SortKey>() {
            Ok(key) => key,
            Err(never) => match never {},
        };
        Ok(Self {
            search: search.to_string(),
            status: status.parse()?,
            category: category.parse()?,
            sort,
        })
    }

    pub fn matches(&self, spot: &ParkingSpot) -> bool {
        self.accepts(spot, &self.search.trim().to_lowercase())
    }

    fn accepts(&self, spot: &ParkingSpot, needle: &str) -> bool {
        self.status.matches(spot.occupancy)
            && self.category.matches(spot.category)
            && matches_search(spot, needle)
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(spot: &ParkingSpot, needle: &str) -> bool {
    needle.is_empty()
        || spot
            .string_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Filters and sorts without touching the input. The result borrows the
/// input records, so running it again on its own output yields the same set.
pub fn query<'a>(
    spots: impl IntoIterator<Item = &'a ParkingSpot>,
    q: &SpotQuery,
) -> Vec<&'a ParkingSpot> {
    let needle = q.search.trim().to_lowercase();

    let mut result: Vec<&ParkingSpot> = spots
        .into_iter()
        .filter(|spot| q.accepts(spot, &needle))
        .collect();

    // sort_by is stable
    if q.sort != SortKey::Unsorted {
        result.sort_by(|a, b| q.sort.compare(a, b));
    }

    debug!(search = %q.search, sort = ?q.sort, hits = result.len(), "spot query");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(number: &str, category: Category) -> ParkingSpot {
        ParkingSpot::empty(number, category)
    }

    #[test]
    fn sorts_numbers_lexicographically() {
        let spots = vec![
            spot("A-102", Category::Resident),
            spot("A-101", Category::Resident),
            spot("A-103", Category::Resident),
        ];

        let numbers: Vec<&str> = query(&spots, &SpotQuery::new().sort(SortKey::Number))
            .into_iter()
            .map(|s| s.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["A-101", "A-102", "A-103"]);
    }

    #[test]
    fn unknown_sort_key_keeps_input_order() {
        let spots = vec![
            spot("B", Category::Visitor),
            spot("A", Category::Resident),
        ];
        let q = SpotQuery::from_raw("", "all", "all", "owner-name").unwrap();
        assert_eq!(q.sort, SortKey::Unsorted);

        let numbers: Vec<&str> = query(&spots, &q)
            .into_iter()
            .map(|s| s.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["B", "A"]);
    }

    #[test]
    fn filters_parse_all_and_labels() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Ocupado".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(Occupancy::Occupied))
        );
        assert_eq!(
            "visitor".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(Category::Visitor))
        );
        assert!("parked".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn search_is_case_insensitive_over_number() {
        let spots = vec![spot("A-101", Category::Resident), spot("V-01", Category::Visitor)];
        let hits = query(&spots, &SpotQuery::new().search("  v-0 "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, "V-01");
        assert!(SpotQuery::new().search("v-0").matches(&spots[1]));
    }
}

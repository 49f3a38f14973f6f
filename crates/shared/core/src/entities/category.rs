use serde::{Deserialize, Serialize};

/// Product category
///
/// Closed set; stored verbatim as the variant name. Category matching
/// throughout the system is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Instruments,
    Books,
    Electronics,
    Apparel,
    Others,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Instruments,
        Category::Books,
        Category::Electronics,
        Category::Apparel,
        Category::Others,
    ];

    /// Get the category name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Instruments => "Instruments",
            Category::Books => "Books",
            Category::Electronics => "Electronics",
            Category::Apparel => "Apparel",
            Category::Others => "Others",
        }
    }

    /// Parse a category from its exact stored name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Instruments" => Some(Category::Instruments),
            "Books" => Some(Category::Books),
            "Electronics" => Some(Category::Electronics),
            "Apparel" => Some(Category::Apparel),
            "Others" => Some(Category::Others),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category selector for the browse view
///
/// `All` disables category filtering entirely; `Only` retains products
/// whose category equals the given one exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if a product with the given category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_category() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Category::parse("books"), None);
        assert_eq!(Category::parse("BOOKS"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn all_filter_matches_everything() {
        for cat in Category::ALL {
            assert!(CategoryFilter::All.matches(cat));
        }
    }

    #[test]
    fn only_filter_matches_exactly_one() {
        let filter = CategoryFilter::Only(Category::Books);
        assert!(filter.matches(Category::Books));
        assert!(!filter.matches(Category::Electronics));
    }
}

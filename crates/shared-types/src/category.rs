use serde::{Deserialize, Serialize};

/// Service categories offered in the navigation dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "fantasía")]
    Fantasia,
    #[serde(rename = "aventuras")]
    Aventuras,
    #[serde(rename = "others")]
    Others,
}

/// All categories in display order.
pub const ALL_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory::All,
    ServiceCategory::Fantasia,
    ServiceCategory::Aventuras,
    ServiceCategory::Others,
];

impl ServiceCategory {
    /// Key stored in the shared context and used in the listing route.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::All => "all",
            ServiceCategory::Fantasia => "fantasía",
            ServiceCategory::Aventuras => "aventuras",
            ServiceCategory::Others => "others",
        }
    }

    /// Parse a category key. Unknown keys yield `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == s)
    }

    /// Dropdown label: the key with its first letter capitalised, except
    /// for `all` which reads "Todos los servicios".
    pub fn label(&self) -> String {
        if let ServiceCategory::All = self {
            return "Todos los servicios".to_string();
        }
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Listing path segment, `None` for the unfiltered listing.
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            ServiceCategory::All => None,
            other => Some(other.as_str()),
        }
    }
}

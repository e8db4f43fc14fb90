#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Shopping,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    /// Lower-cased form written to the database.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Other => "other",
        }
    }

    /// Case-insensitive lookup. Returns `None` for labels outside the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.key() == lower)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Shopping,
            Self::Transportation,
            Self::Entertainment,
            Self::Utilities,
            Self::Healthcare,
            Self::Other,
        ]
    }

    pub fn labels() -> &'static [&'static str] {
        &[
            "Food",
            "Shopping",
            "Transportation",
            "Entertainment",
            "Utilities",
            "Healthcare",
            "Other",
        ]
    }

    /// Display label for a stored category key. Keys outside the fixed set
    /// (e.g. rows written by older versions) are title-cased.
    pub fn display_name(stored: &str) -> String {
        match Self::parse(stored) {
            Some(c) => c.as_str().to_string(),
            None => title_case(stored),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

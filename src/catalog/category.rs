use serde::{Deserialize, Serialize};

/// The closed set of content categories.
///
/// Variant order is the classification precedence order, so the derived
/// `Ord` sorts keys the same way the classifier tries them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Overview,
    NextSteps,
    Guidelines,
    Results,
    Phase,
    Code,
}

impl CategoryKey {
    /// Precedence order used by the classifier
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Overview,
        CategoryKey::NextSteps,
        CategoryKey::Guidelines,
        CategoryKey::Results,
        CategoryKey::Phase,
        CategoryKey::Code,
    ];

    /// Universal fallback for names no rule matches
    pub const FALLBACK: CategoryKey = CategoryKey::Code;

    /// Sort priority; lower sorts first
    pub fn priority(&self) -> u8 {
        match self {
            CategoryKey::Overview => 1,
            CategoryKey::NextSteps => 2,
            CategoryKey::Guidelines => 3,
            CategoryKey::Results => 4,
            CategoryKey::Phase => 5,
            CategoryKey::Code => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Overview => "overview",
            CategoryKey::NextSteps => "next_steps",
            CategoryKey::Guidelines => "guidelines",
            CategoryKey::Results => "results",
            CategoryKey::Phase => "phase",
            CategoryKey::Code => "code",
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

//! Government-level classification.
//!
//! Each official lands in exactly one [`Level`] by the first matching rule
//! over its Cicero district type and office title:
//!
//! 1. district type contains `LOCAL` → local
//! 2. district type contains `COUNTY`, or title mentions county/sheriff → county
//! 3. district type contains `STATE`, or title mentions governor/state → state
//! 4. district type contains `NATIONAL`, or title mentions a federal office → federal
//! 5. anything else → other
//!
//! Matching is case-insensitive substring matching. The order is significant:
//! a "State Sheriff" is county, and a "United States Senator" without a
//! national district type is state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::official::Official;

const COUNTY_TITLES: &[&str] = &["county", "sheriff"];
const STATE_TITLES: &[&str] = &["governor", "state"];
const FEDERAL_TITLES: &[&str] = &[
    "president",
    "senator",
    "representative",
    "secretary",
    "congress",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Local,
    County,
    State,
    Federal,
    Other,
}

impl Level {
    /// Emission order for buckets: closest government first.
    pub const ALL: [Level; 5] = [
        Level::Local,
        Level::County,
        Level::State,
        Level::Federal,
        Level::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::County => "county",
            Self::State => "state",
            Self::Federal => "federal",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::County => "County",
            Self::State => "State",
            Self::Federal => "Federal",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Local => "🏙️",
            Self::County => "🏘️",
            Self::State => "🏢",
            Self::Federal => "🏛️",
            Self::Other => "📍",
        }
    }
}

/// Officials sharing one government level, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct LevelBucket<'a> {
    pub key: Level,
    pub name: &'static str,
    pub icon: &'static str,
    pub officials: Vec<&'a Official>,
}

impl LevelBucket<'_> {
    fn new(key: Level) -> Self {
        Self {
            key,
            name: key.display_name(),
            icon: key.icon(),
            officials: Vec::new(),
        }
    }
}

/// Assign a single official to its government level.
pub fn classify(official: &Official) -> Level {
    let district_type = official.district_type().to_uppercase();
    let title = official.title().to_lowercase();

    if district_type.contains("LOCAL") {
        Level::Local
    } else if district_type.contains("COUNTY") || contains_any(&title, COUNTY_TITLES) {
        Level::County
    } else if district_type.contains("STATE") || contains_any(&title, STATE_TITLES) {
        Level::State
    } else if district_type.contains("NATIONAL") || contains_any(&title, FEDERAL_TITLES) {
        Level::Federal
    } else {
        Level::Other
    }
}

/// Group officials into non-empty buckets ordered local → county → state →
/// federal → other.
pub fn group_by_level(officials: &[Official]) -> Vec<LevelBucket<'_>> {
    let mut buckets: Vec<LevelBucket<'_>> =
        Level::ALL.iter().map(|&l| LevelBucket::new(l)).collect();

    for official in officials {
        // Discriminants follow Level::ALL order.
        buckets[classify(official) as usize].officials.push(official);
    }

    buckets.retain(|b| !b.officials.is_empty());
    debug!(
        officials = officials.len(),
        buckets = buckets.len(),
        "grouped officials by level"
    );
    buckets
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

//! Display fields derived from an [`Official`].
//!
//! Every accessor tolerates missing data and returns an empty or `None`
//! result instead of failing.

use serde::Serialize;

use crate::official::{Official, non_empty};

/// Party accent for an official's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyStyle {
    Democrat,
    Republican,
    Libertarian,
    Green,
    Other,
    Unknown,
}

impl PartyStyle {
    /// Classify a free-text party name.
    pub fn from_party(party: Option<&str>) -> Self {
        let p = match party {
            Some(p) if !p.is_empty() => p.to_lowercase(),
            _ => return Self::Unknown,
        };
        if p.contains("democrat") {
            Self::Democrat
        } else if p.contains("republican") {
            Self::Republican
        } else if p.contains("libertarian") {
            Self::Libertarian
        } else if p.contains("green") {
            Self::Green
        } else {
            Self::Other
        }
    }

    /// Short style key, as used for card classes.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Democrat => "dem",
            Self::Republican => "rep",
            Self::Libertarian => "lib",
            Self::Green => "green",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }

    /// Accent colour name, or `None` for the neutral styles.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::Democrat => Some("blue"),
            Self::Republican => Some("red"),
            Self::Libertarian => Some("yellow"),
            Self::Green => Some("green"),
            Self::Other | Self::Unknown => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Democrat => "🔵",
            Self::Republican => "🔴",
            Self::Libertarian => "🟡",
            Self::Green => "🟢",
            Self::Other => "⚪",
            Self::Unknown => "🤷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Instagram,
    YouTube,
}

impl SocialPlatform {
    /// Match an identifier type such as `TWITTER` or `FACEBOOK-OFFICIAL`.
    fn from_identifier_type(identifier_type: &str) -> Option<Self> {
        let t = identifier_type.to_uppercase();
        if t.contains("TWITTER") {
            Some(Self::Twitter)
        } else if t.contains("FACEBOOK") {
            Some(Self::Facebook)
        } else if t.contains("INSTAGRAM") {
            Some(Self::Instagram)
        } else if t.contains("YOUTUBE") {
            Some(Self::YouTube)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Twitter => "🐦",
            Self::Facebook => "📘",
            Self::Instagram => "📷",
            Self::YouTube => "📺",
        }
    }

    /// Whether an official may carry more than one link for this platform.
    fn allows_multiple(&self) -> bool {
        matches!(self, Self::Twitter | Self::YouTube)
    }

    fn profile_url(&self, value: &str) -> String {
        match self {
            Self::Twitter => format!("https://twitter.com/{value}"),
            Self::Facebook if value.starts_with("http") => value.to_string(),
            Self::Facebook => format!("https://facebook.com/{value}"),
            Self::Instagram => format!("https://instagram.com/{value}"),
            Self::YouTube => format!("https://youtube.com/{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
    pub icon: &'static str,
}

/// First name, middle initial, last name, and suffix joined by single spaces.
pub fn full_name(official: &Official) -> String {
    [
        &official.first_name,
        &official.middle_initial,
        &official.last_name,
        &official.name_suffix,
    ]
    .into_iter()
    .filter_map(non_empty)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Initials for the photo placeholder, e.g. "JD" for Jane Doe.
pub fn initials(official: &Official) -> String {
    [&official.first_name, &official.last_name]
        .into_iter()
        .filter_map(|n| non_empty(n).and_then(|s| s.chars().next()))
        .collect()
}

pub fn party_style(official: &Official) -> PartyStyle {
    PartyStyle::from_party(official.party.as_deref())
}

pub fn party_label(official: &Official) -> &str {
    non_empty(&official.party).unwrap_or("Party not listed")
}

pub fn photo_url(official: &Official) -> Option<&str> {
    non_empty(&official.photo_origin_url)
}

pub fn website(official: &Official) -> Option<&str> {
    official.urls.first().map(String::as_str).filter(|s| !s.is_empty())
}

pub fn phone(official: &Official) -> Option<&str> {
    official.addresses.first().and_then(|a| non_empty(&a.phone_1))
}

pub fn email(official: &Official) -> Option<&str> {
    official
        .email_addresses
        .first()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
}

pub fn office_title(official: &Official) -> &str {
    match official.title() {
        "" => "Official",
        title => title,
    }
}

/// District label, falling back to the district's city, then `""`.
pub fn district_label(official: &Official) -> &str {
    official
        .district()
        .and_then(|d| non_empty(&d.label).or_else(|| non_empty(&d.city)))
        .unwrap_or("")
}

/// Social-media links in identifier order.
///
/// Facebook and Instagram keep only their first occurrence; Twitter and
/// YouTube keep every handle.
pub fn social_links(official: &Official) -> Vec<SocialLink> {
    let mut links: Vec<SocialLink> = Vec::new();

    for id in &official.identifiers {
        let Some(platform) = id
            .identifier_type
            .as_deref()
            .and_then(SocialPlatform::from_identifier_type)
        else {
            continue;
        };
        let Some(value) = non_empty(&id.identifier_value) else {
            continue;
        };
        if !platform.allows_multiple() && links.iter().any(|l| l.platform == platform) {
            continue;
        }
        links.push(SocialLink {
            platform,
            url: platform.profile_url(value),
            icon: platform.icon(),
        });
    }

    links
}

//! Display-ready results: officials projected into cards, grouped by level.

use serde::Serialize;

use crate::extract::{self, PartyStyle, SocialLink};
use crate::level::{Level, group_by_level};
use crate::official::Official;

/// Everything a surface needs to render one official.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficialCard {
    pub name: String,
    pub initials: String,
    pub photo_url: Option<String>,
    pub office: String,
    pub district: String,
    pub party: String,
    pub party_style: PartyStyle,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub socials: Vec<SocialLink>,
}

impl OfficialCard {
    pub fn from_official(official: &Official) -> Self {
        Self {
            name: extract::full_name(official),
            initials: extract::initials(official),
            photo_url: extract::photo_url(official).map(String::from),
            office: extract::office_title(official).to_string(),
            district: extract::district_label(official).to_string(),
            party: extract::party_label(official).to_string(),
            party_style: extract::party_style(official),
            website: extract::website(official).map(String::from),
            phone: extract::phone(official).map(String::from),
            email: extract::email(official).map(String::from),
            socials: extract::social_links(official),
        }
    }
}

/// One government level's cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub level: Level,
    pub name: &'static str,
    pub icon: &'static str,
    pub cards: Vec<OfficialCard>,
}

/// A successful lookup, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub normalized_address: String,
    pub sections: Vec<Section>,
}

impl ResultsView {
    pub fn build(normalized_address: &str, officials: &[Official]) -> Self {
        let sections = group_by_level(officials)
            .into_iter()
            .map(|bucket| Section {
                level: bucket.key,
                name: bucket.name,
                icon: bucket.icon,
                cards: bucket
                    .officials
                    .into_iter()
                    .map(OfficialCard::from_official)
                    .collect(),
            })
            .collect();

        Self {
            normalized_address: normalized_address.to_string(),
            sections,
        }
    }

    pub fn official_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_officials() -> Vec<Official> {
        let json = r#"[
            {
                "first_name": "Chuck",
                "last_name": "Senator",
                "party": "Democrat",
                "office": {"title": "Senator", "district": {"district_type": "NATIONAL_UPPER", "label": "Illinois"}},
                "identifiers": [{"identifier_type": "TWITTER", "identifier_value": "chuck"}]
            },
            {
                "first_name": "Mia",
                "last_name": "Mayor",
                "office": {"title": "Mayor", "district": {"district_type": "LOCAL_EXEC", "city": "Springfield"}},
                "addresses": [{"phone_1": "217-555-0100"}]
            },
            {
                "first_name": "Gus",
                "last_name": "Governor",
                "party": "Republican",
                "office": {"title": "Governor", "district": {"district_type": "STATE_EXEC"}}
            }
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn build_groups_and_projects() {
        let officials = sample_officials();
        let view = ResultsView::build("123 Main St, Springfield, IL", &officials);

        assert_eq!(view.normalized_address, "123 Main St, Springfield, IL");
        assert_eq!(view.official_count(), 3);

        let levels: Vec<Level> = view.sections.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![Level::Local, Level::State, Level::Federal]);

        let mayor = &view.sections[0].cards[0];
        assert_eq!(mayor.name, "Mia Mayor");
        assert_eq!(mayor.initials, "MM");
        assert_eq!(mayor.district, "Springfield");
        assert_eq!(mayor.phone.as_deref(), Some("217-555-0100"));
        assert_eq!(mayor.party, "Party not listed");
        assert_eq!(mayor.party_style, PartyStyle::Unknown);

        let senator = &view.sections[2].cards[0];
        assert_eq!(senator.party_style, PartyStyle::Democrat);
        assert_eq!(senator.district, "Illinois");
        assert_eq!(senator.socials.len(), 1);
    }

    #[test]
    fn serializes_for_json_output() {
        let officials = sample_officials();
        let view = ResultsView::build("Springfield", &officials);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["sections"][0]["level"], "local");
        assert_eq!(value["sections"][0]["name"], "Local");
        assert_eq!(value["sections"][2]["cards"][0]["party_style"], "democrat");
        assert_eq!(
            value["sections"][2]["cards"][0]["socials"][0]["platform"],
            "Twitter"
        );
    }

    #[test]
    fn empty_officials_have_no_sections() {
        let view = ResultsView::build("Nowhere", &[]);
        assert!(view.sections.is_empty());
        assert_eq!(view.official_count(), 0);
    }
}

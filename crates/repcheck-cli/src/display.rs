//! Terminal and JSON rendering for lookup results.
//!
//! Text output renders each government level as a section of cards. JSON
//! output wraps the payload in an `{ok, data}` or `{ok, error}` envelope.

use colored::Colorize;
use repcheck_core::{OfficialCard, ResultsView, Section};
use serde::Serialize;

const EMPTY_ICON: &str = "🗳️";
const ERROR_ICON: &str = "😬";
const LOCATION_ICON: &str = "📍";

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// ── Public API ──

pub fn print_loading() {
    eprintln!("🔍 Looking...");
}

pub fn print_empty_state(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json::<()>(true, None, None);
    }
    println!("{EMPTY_ICON}  Enter your address to see who represents you");
    println!("    From City Hall to Capitol Hill");
    Ok(())
}

pub fn print_error(json: bool, message: &str) -> anyhow::Result<()> {
    if json {
        return print_json::<()>(false, None, Some(message.to_string()));
    }
    eprintln!("{ERROR_ICON} {message}");
    Ok(())
}

pub fn print_results(json: bool, view: &ResultsView) -> anyhow::Result<()> {
    if json {
        return print_json(true, Some(view), None);
    }
    for line in results_lines(view) {
        println!("{line}");
    }
    Ok(())
}

pub fn print_suggestions(json: bool, suggestions: &[String]) -> anyhow::Result<()> {
    if json {
        return print_json(true, Some(suggestions), None);
    }
    if suggestions.is_empty() {
        println!("No suggestions. Full address works best (123 Main St, City, State ZIP)");
    }
    for s in suggestions {
        println!("{LOCATION_ICON} {s}");
    }
    Ok(())
}

// ── Text layout ──

fn results_lines(view: &ResultsView) -> Vec<String> {
    let mut lines = vec![format!("{LOCATION_ICON} {}", view.normalized_address), String::new()];
    for section in &view.sections {
        lines.extend(section_lines(section));
    }
    lines
}

fn section_lines(section: &Section) -> Vec<String> {
    let mut lines = vec![format!("{} {}", section.icon, section.name.bold())];
    for card in &section.cards {
        lines.extend(card_lines(card).into_iter().map(|l| format!("  {l}")));
        lines.push(String::new());
    }
    lines
}

fn card_lines(card: &OfficialCard) -> Vec<String> {
    let name = match card.party_style.color() {
        Some(color) => card.name.color(color).bold().to_string(),
        None => card.name.bold().to_string(),
    };
    let mut lines = vec![format!("{} {}", card.party_style.glyph(), name)];

    if card.district.is_empty() {
        lines.push(format!("   {}", card.office));
    } else {
        lines.push(format!("   {} · {}", card.office, card.district));
    }
    lines.push(format!("   {}", card.party.dimmed()));

    match &card.photo_url {
        Some(url) => lines.push(format!("   🖼️  {url}")),
        None => lines.push(format!("   [{}]", card.initials)),
    }
    if let Some(website) = &card.website {
        lines.push(format!("   🌐 {website}"));
    }
    if let Some(phone) = &card.phone {
        lines.push(format!("   📞 {phone}"));
    }
    if let Some(email) = &card.email {
        lines.push(format!("   ✉️  {email}"));
    }
    for social in &card.socials {
        lines.push(format!("   {} {}: {}", social.icon, social.platform.name(), social.url));
    }
    lines
}

// ── JSON ──

fn print_json<T: Serialize>(ok: bool, data: Option<T>, error: Option<String>) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data, error })?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use repcheck_core::Official;

    use super::*;

    fn view() -> ResultsView {
        let officials: Vec<Official> = serde_json::from_str(
            r#"[
                {
                    "first_name": "Mia",
                    "last_name": "Mayor",
                    "party": "Green",
                    "office": {"title": "Mayor", "district": {"district_type": "LOCAL_EXEC", "label": "Springfield"}},
                    "urls": ["https://springfield.example/mayor"],
                    "identifiers": [
                        {"identifier_type": "FACEBOOK", "identifier_value": "miamayor"},
                        {"identifier_type": "FACEBOOK", "identifier_value": "mia2"}
                    ]
                },
                {
                    "first_name": "Sam",
                    "last_name": "Sheriff",
                    "office": {"title": "Sheriff"},
                    "photo_origin_url": "https://img.example/sam.jpg"
                }
            ]"#,
        )
        .unwrap();
        ResultsView::build("123 Main St, Springfield, IL", &officials)
    }

    #[test]
    fn results_layout() {
        colored::control::set_override(false);
        let lines = results_lines(&view());

        assert_eq!(lines[0], "📍 123 Main St, Springfield, IL");
        assert!(lines.contains(&"🏙️ Local".to_string()));
        assert!(lines.contains(&"  🟢 Mia Mayor".to_string()));
        assert!(lines.contains(&"     Mayor · Springfield".to_string()));
        assert!(lines.contains(&"     [MM]".to_string()));
        assert!(lines.contains(&"     🌐 https://springfield.example/mayor".to_string()));
        assert!(lines.contains(&"     📘 Facebook: https://facebook.com/miamayor".to_string()));
        assert!(!lines.iter().any(|l| l.contains("mia2")));

        let county = lines.iter().position(|l| l == "🏘️ County").unwrap();
        let local = lines.iter().position(|l| l == "🏙️ Local").unwrap();
        assert!(local < county);
        assert!(lines.contains(&"  🤷 Sam Sheriff".to_string()));
        assert!(lines.contains(&"     Party not listed".to_string()));
        assert!(lines.contains(&"     🖼️  https://img.example/sam.jpg".to_string()));
    }

    #[test]
    fn json_envelope() {
        let out = JsonOut {
            ok: false,
            data: None::<()>,
            error: Some("bad key".into()),
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value, serde_json::json!({"ok": false, "error": "bad key"}));

        let view = view();
        let out = JsonOut {
            ok: true,
            data: Some(&view),
            error: None,
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["normalized_address"], "123 Main St, Springfield, IL");
        assert_eq!(value["data"]["sections"][1]["level"], "county");
    }
}

use std::str::FromStr;

use strum::IntoEnumIterator;

use super::*;

fn embedded() -> &'static SiteContent {
    SiteContent::embedded().unwrap_or_else(|errors| {
        for error in errors {
            eprintln!("{}", error);
        }
        panic!("Embedded content failed validation");
    })
}

fn patched(edit: impl FnOnce(&mut serde_json::Value)) -> Result<SiteContent, Vec<ContentError>> {
    let mut document: serde_json::Value =
        serde_json::from_str(EMBEDDED_DOCUMENT).unwrap();
    edit(&mut document);
    SiteContent::parse(&document.to_string())
}

#[test]
fn test_embedded_content_is_valid() {
    let content = embedded();
    assert_eq!(content.nav.len(), 4);
    assert_eq!(content.highlights.len(), 3);
    assert_eq!(content.contact.len(), 3);
    assert_eq!(content.team.len(), 4);
    assert_eq!(content.footer.len(), 2);
}

#[test]
fn test_features_in_order() {
    let features = &embedded().features;
    assert_eq!(features.len(), FEATURE_COUNT);

    let expected = [
        (Glyph::Eye, "Smart Recognition"),
        (Glyph::Wifi, "Extended Connectivity"),
        (Glyph::MapPin, "Advanced Navigation"),
        (Glyph::Phone, "Emergency Support"),
        (Glyph::Navigation, "Direction Assistance"),
        (Glyph::WifiOff, "Offline Capability"),
    ];
    for (feature, (icon, title)) in features.iter().zip(expected) {
        assert_eq!(feature.icon, icon);
        assert_eq!(feature.title, title);
    }
    assert_eq!(
        features[5].description,
        "Core features remain functional even without internet connection"
    );
}

#[test]
fn test_contact_channels() {
    let contact = &embedded().contact;

    assert_eq!(contact[0].href.as_deref(), Some("mailto:info@aroundyou.tech"));
    assert_eq!(contact[0].lines, vec!["info@aroundyou.tech"]);
    assert_eq!(contact[1].href.as_deref(), Some("tel:+5511960372150"));
    assert_eq!(contact[1].lines, vec!["+55 (11) 96037-2150"]);
    assert_eq!(contact[2].href, None);
    assert_eq!(
        contact[2].lines,
        vec!["Alameda Ribeiro Da Silva, 523", "Campos Elísios"]
    );
}

#[test]
fn test_team_members() {
    let team: Vec<_> = embedded()
        .team
        .iter()
        .map(|m| (m.initials.as_str(), m.name.as_str(), m.role.as_str()))
        .collect();
    assert_eq!(
        team,
        vec![
            ("VP", "Vanesa Pérez", "Content Creator"),
            ("CJ", "Caio Julio", "Lead Developer"),
            ("JG", "José Alejandro Gaitán", "Strategy & Business Management"),
            ("DC", "Danna Castillo", "Product & Visual Designer"),
        ]
    );
}

#[test]
fn test_every_link_resolves() {
    let links = embedded().links();
    assert!(!links.is_empty());
    for link in &links {
        assert!(link.target().resolves(), "{} ({}) does not resolve", link.label, link.href);
    }

    let nav: Vec<_> = links
        .iter()
        .filter(|l| l.location == "nav")
        .map(|l| l.href.as_str())
        .collect();
    assert_eq!(nav, vec!["#product", "#features", "#about", "#contact"]);
}

#[test]
fn test_declared_anchors_cover_nav() {
    let declared: Vec<_> = SiteContent::declared_anchors().collect();
    for link in &embedded().nav {
        assert!(declared.contains(&link.target));
    }
    assert_eq!(declared.len(), Anchor::iter().count());
}

#[test]
fn test_link_target_parse() {
    assert_eq!(LinkTarget::parse("#"), LinkTarget::Placeholder);
    assert_eq!(LinkTarget::parse("#about"), LinkTarget::Section(Anchor::About));
    assert_eq!(LinkTarget::parse("#team"), LinkTarget::UnknownSection("team"));
    assert_eq!(
        LinkTarget::parse("mailto:info@aroundyou.tech"),
        LinkTarget::Mail("info@aroundyou.tech")
    );
    assert_eq!(LinkTarget::parse("tel:+5511960372150"), LinkTarget::Phone("+5511960372150"));
    assert_eq!(
        LinkTarget::parse("https://aroundyou.tech"),
        LinkTarget::External("https://aroundyou.tech")
    );

    assert!(!LinkTarget::parse("#team").resolves());
    assert!(LinkTarget::parse("#").resolves());
    assert_eq!(LinkTarget::parse("#team").kind(), "anchor");
    assert_eq!(LinkTarget::parse("tel:1").kind(), "tel");
}

#[test]
fn test_anchor_href() {
    let ids: Vec<_> = Anchor::iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["product", "features", "about", "contact"]);
    assert_eq!(Anchor::Contact.href(), "#contact");
    assert_eq!(Anchor::from_str("about"), Ok(Anchor::About));
    for anchor in Anchor::iter() {
        assert_eq!(anchor.to_string(), anchor.id());
    }
}

#[test]
fn test_unknown_nav_target_rejected() {
    let errors = patched(|doc| doc["nav"][3]["target"] = "team".into()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "$");
}

#[test]
fn test_dangling_footer_link_rejected() {
    let errors = patched(|doc| doc["footer"][1]["links"][0]["href"] = "#team".into()).unwrap_err();
    assert_eq!(
        errors,
        vec![ContentError::new(
            "footer[1].links[0].href",
            "Link points at section 'team' which the page does not declare"
        )]
    );
}

#[test]
fn test_feature_count_enforced() {
    let errors = patched(|doc| {
        doc["features"].as_array_mut().unwrap().pop();
    })
    .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "features");
    assert_eq!(errors[0].to_string(), "features: Expected exactly 6 features, got 5");
}

#[test]
fn test_collects_every_error() {
    let errors = patched(|doc| {
        doc["features"][0]["title"] = "  ".into();
        doc["team"][1]["initials"] = "cj".into();
        doc["contact"][0]["href"] = "https://aroundyou.tech".into();
    })
    .unwrap_err();

    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["features[0].title", "contact[0].href", "team[1].initials"]
    );
}

#[test]
fn test_unknown_glyph_rejected() {
    let errors = patched(|doc| doc["features"][0]["icon"] = "sparkles".into()).unwrap_err();
    assert_eq!(errors[0].path, "$");
    assert!(errors[0].message.starts_with("Invalid content document"));
}

#[test]
fn test_from_json_skips_validation() {
    let mut document: serde_json::Value = serde_json::from_str(EMBEDDED_DOCUMENT).unwrap();
    document["footer"][0]["links"][1]["href"] = "#specs".into();

    let content = SiteContent::from_json(&document.to_string()).unwrap();
    let unresolved: Vec<_> = content
        .links()
        .into_iter()
        .filter(|l| !l.target().resolves())
        .map(|l| l.label)
        .collect();
    assert_eq!(unresolved, vec!["Specifications"]);
    assert_eq!(content.validate().unwrap_err().len(), 1);
}

#[test]
fn test_malformed_document() {
    let errors = SiteContent::parse("{ \"nav\": [").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "$");
}

#[test]
fn test_glyph_names() {
    assert_eq!(Glyph::MapPin.to_string(), "map-pin");
    assert_eq!(Glyph::WifiOff.to_string(), "wifi-off");
    assert_eq!(Accent::Purple.to_string(), "purple");
}

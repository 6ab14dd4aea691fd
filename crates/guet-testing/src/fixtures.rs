//! Canned roster data shared by integration tests.

use guet_types::{Category, Entry, Organisation, Snapshot};

pub fn entry(id: &str, name: &str, category: Category) -> Entry {
    Entry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        facts: String::new(),
        crown_wanted: false,
        png: false,
        organisation_id: None,
    }
}

pub fn organisation(id: &str, full_name: &str, short_name: Option<&str>) -> Organisation {
    Organisation {
        id: id.to_string(),
        full_name: full_name.to_string(),
        short_name: short_name.map(str::to_string),
    }
}

/// Small but representative roster: every category populated, both flags
/// exercised, one affiliated member and one organisation without members.
pub fn sample_snapshot() -> Snapshot {
    let mut mandrin = entry("b1", "Mandrin", Category::Noire);
    mandrin.facts = "Contrebande de sel".to_string();
    mandrin.crown_wanted = true;
    mandrin.organisation_id = Some("o1".to_string());

    let mut cartouche = entry("b2", "Cartouche", Category::Noire);
    cartouche.png = true;

    let surcouf = entry("b3", "Surcouf", Category::Surveillance);
    let mut eloi = entry("b4", "Éloi le Borgne", Category::Hors);
    eloi.facts = "Passage en force à la barrière".to_string();

    let gaspard = entry("b5", "Vieux Gaspard", Category::Archives);

    Snapshot {
        entries: vec![mandrin, cartouche, surcouf, eloi, gaspard],
        organisations: vec![
            organisation("o1", "Compagnie du Levant", Some("CdL")),
            organisation("o2", "Les Encapuchonnés", None),
        ],
    }
}

use crate::sanitize::sanitize;
use guet_types::{Category, Entry, Organisation};

/// Fixed mention for crown-wanted entries.
pub const CROWN_MENTION: &str = "Recherché par la couronne de France";

const SEPARATOR: &str = " - ";

/// Color names used in report markup.
///
/// The hors slot is a setting rather than a constant: the office never
/// confirmed its color, so deployments override it in `guet.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPalette {
    pub crown: String,
    pub noire: String,
    pub surveillance: String,
    pub hors: String,
    pub png: String,
}

impl Default for ReportPalette {
    fn default() -> Self {
        Self {
            crown: "darkorange".to_string(),
            noire: "red".to_string(),
            surveillance: "darkred".to_string(),
            hors: "crimson".to_string(),
            png: "indigo".to_string(),
        }
    }
}

/// Name color for an entry, first match wins: crown status overrides the
/// category-derived color entirely; archives without crown stay unstyled.
pub fn display_color<'a>(entry: &Entry, palette: &'a ReportPalette) -> Option<&'a str> {
    if entry.crown_wanted {
        return Some(&palette.crown);
    }
    match entry.category {
        Category::Noire => Some(&palette.noire),
        Category::Surveillance => Some(&palette.surveillance),
        Category::Hors => Some(&palette.hors),
        Category::Archives => None,
    }
}

/// Compose the BBCode report line for one entry.
///
/// Segments, joined with `" - "`: colored name, then the mentions in
/// fixed order (crown, PNG, organisation abbreviation), then the
/// sanitized facts. Each segment is omitted when it has nothing to say;
/// a dangling organisation id or a missing abbreviation omits that
/// mention rather than failing. Total: never errors.
pub fn format_report_line(
    entry: &Entry,
    organisations: &[Organisation],
    palette: &ReportPalette,
) -> String {
    let name = sanitize(&entry.name);
    let name_segment = match display_color(entry, palette) {
        Some(color) => format!("[color={}]{}[/color]", color, name),
        None => name,
    };

    let mut mentions: Vec<String> = Vec::new();
    if entry.crown_wanted {
        mentions.push(CROWN_MENTION.to_string());
    }
    if entry.png {
        mentions.push(format!("[color={}]PNG[/color]", palette.png));
    }
    if let Some(org_id) = entry.organisation_id.as_deref() {
        let short = organisations
            .iter()
            .find(|o| o.id == org_id)
            .and_then(|o| o.short_name.as_deref());
        if let Some(short) = short {
            if !short.trim().is_empty() {
                mentions.push(short.to_string());
            }
        }
    }

    let facts = sanitize(&entry.facts);
    let facts = facts.trim();

    let mut segments = vec![name_segment];
    if !mentions.is_empty() {
        segments.push(mentions.join(SEPARATOR));
    }
    if !facts.is_empty() {
        segments.push(facts.to_string());
    }
    segments.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: Category) -> Entry {
        Entry {
            id: "1".to_string(),
            name: name.to_string(),
            category,
            facts: String::new(),
            crown_wanted: false,
            png: false,
            organisation_id: None,
        }
    }

    fn organisation(id: &str, full: &str, short: Option<&str>) -> Organisation {
        Organisation {
            id: id.to_string(),
            full_name: full.to_string(),
            short_name: short.map(str::to_string),
        }
    }

    #[test]
    fn test_archives_without_crown_stays_unstyled() {
        let line = format_report_line(
            &entry("Vieux Gaspard", Category::Archives),
            &[],
            &ReportPalette::default(),
        );
        assert_eq!(line, "Vieux Gaspard");
    }

    #[test]
    fn test_crown_overrides_every_category_color() {
        let palette = ReportPalette::default();
        for category in Category::ALL {
            let mut e = entry("X", category);
            e.crown_wanted = true;
            let line = format_report_line(&e, &[], &palette);
            assert!(line.starts_with("[color=darkorange]X[/color]"), "{}", line);
        }
    }

    #[test]
    fn test_category_colors_without_crown() {
        let palette = ReportPalette::default();
        assert_eq!(
            display_color(&entry("X", Category::Noire), &palette),
            Some("red")
        );
        assert_eq!(
            display_color(&entry("X", Category::Surveillance), &palette),
            Some("darkred")
        );
        assert_eq!(
            display_color(&entry("X", Category::Hors), &palette),
            Some("crimson")
        );
        assert_eq!(display_color(&entry("X", Category::Archives), &palette), None);
    }

    #[test]
    fn test_full_line_with_sanitized_facts() {
        let mut e = entry("X", Category::Archives);
        e.crown_wanted = true;
        e.facts = "[b]evil[/b] smuggler".to_string();

        let line = format_report_line(&e, &[], &ReportPalette::default());
        insta::assert_snapshot!(
            line,
            @"[color=darkorange]X[/color] - Recherché par la couronne de France - evil[/b smuggler"
        );
    }

    #[test]
    fn test_mentions_keep_their_fixed_order() {
        let orgs = vec![organisation("o1", "Compagnie du Levant", Some("CdL"))];
        let mut e = entry("Cartouche", Category::Noire);
        e.crown_wanted = true;
        e.png = true;
        e.organisation_id = Some("o1".to_string());

        let line = format_report_line(&e, &orgs, &ReportPalette::default());
        insta::assert_snapshot!(
            line,
            @"[color=darkorange]Cartouche[/color] - Recherché par la couronne de France - [color=indigo]PNG[/color] - CdL"
        );
    }

    #[test]
    fn test_missing_short_name_omits_the_mention() {
        let orgs = vec![organisation("o1", "Les Encapuchonnés", None)];
        let mut e = entry("Mandrin", Category::Surveillance);
        e.organisation_id = Some("o1".to_string());

        let line = format_report_line(&e, &orgs, &ReportPalette::default());
        assert_eq!(line, "[color=darkred]Mandrin[/color]");
    }

    #[test]
    fn test_dangling_organisation_id_omits_the_mention() {
        let mut e = entry("Mandrin", Category::Surveillance);
        e.organisation_id = Some("gone".to_string());

        let line = format_report_line(&e, &[], &ReportPalette::default());
        assert_eq!(line, "[color=darkred]Mandrin[/color]");
    }

    #[test]
    fn test_blank_facts_are_omitted() {
        let mut e = entry("Mandrin", Category::Archives);
        e.facts = "   ".to_string();
        assert_eq!(
            format_report_line(&e, &[], &ReportPalette::default()),
            "Mandrin"
        );
    }

    #[test]
    fn test_palette_override_changes_the_hors_color() {
        let palette = ReportPalette {
            hors: "maroon".to_string(),
            ..ReportPalette::default()
        };
        let line = format_report_line(&entry("X", Category::Hors), &[], &palette);
        assert_eq!(line, "[color=maroon]X[/color]");
    }
}

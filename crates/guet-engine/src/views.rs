use crate::collate;
use guet_types::{Category, Entry};

/// Identifier of a derived roster view. One page counter is kept per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewKey {
    /// Entries of one primary category.
    Category(Category),
    /// Entries wanted by the crown, across categories.
    CrownWanted,
    /// Personae non gratae, across categories.
    Png,
    /// Member roster of one organisation.
    Organisation(String),
}

pub fn by_category(entries: &[Entry], category: Category) -> Vec<&Entry> {
    entries.iter().filter(|e| e.category == category).collect()
}

pub fn by_crown_wanted(entries: &[Entry]) -> Vec<&Entry> {
    entries.iter().filter(|e| e.crown_wanted).collect()
}

pub fn by_png(entries: &[Entry]) -> Vec<&Entry> {
    entries.iter().filter(|e| e.png).collect()
}

pub fn by_organisation<'a>(entries: &'a [Entry], organisation_id: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|e| e.organisation_id.as_deref() == Some(organisation_id))
        .collect()
}

/// Filtered, display-ordered subset of the snapshot for one view.
///
/// Re-evaluated against the full entry list on every render; the sort is
/// stable, so equal names keep their snapshot order.
pub fn select<'a>(entries: &'a [Entry], key: &ViewKey) -> Vec<&'a Entry> {
    let mut selected = match key {
        ViewKey::Category(category) => by_category(entries, *category),
        ViewKey::CrownWanted => by_crown_wanted(entries),
        ViewKey::Png => by_png(entries),
        ViewKey::Organisation(id) => by_organisation(entries, id),
    };
    selected.sort_by(|a, b| collate::by_display_order(a, b));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        id: &str,
        name: &str,
        category: Category,
        crown: bool,
        png: bool,
        organisation_id: Option<&str>,
    ) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            category,
            facts: String::new(),
            crown_wanted: crown,
            png,
            organisation_id: organisation_id.map(str::to_string),
        }
    }

    fn roster() -> Vec<Entry> {
        vec![
            entry("1", "Zacharie", Category::Noire, true, false, Some("o1")),
            entry("2", "Ambroise", Category::Surveillance, false, true, None),
            entry("3", "Édouard", Category::Noire, false, false, Some("o1")),
            entry("4", "Blaise", Category::Archives, true, true, Some("o2")),
        ]
    }

    #[test]
    fn test_category_filter() {
        let roster = roster();
        let noire = by_category(&roster, Category::Noire);
        assert_eq!(noire.len(), 2);
        assert!(noire.iter().all(|e| e.category == Category::Noire));
    }

    #[test]
    fn test_flag_filters_cross_categories() {
        let roster = roster();
        let crown: Vec<&str> = by_crown_wanted(&roster).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(crown, ["1", "4"]);

        let png: Vec<&str> = by_png(&roster).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(png, ["2", "4"]);
    }

    #[test]
    fn test_organisation_filter_compares_id_by_value() {
        let roster = roster();
        let members = by_organisation(&roster, &String::from("o1"));
        assert_eq!(members.len(), 2);
        assert!(by_organisation(&roster, "o9").is_empty());
    }

    #[test]
    fn test_select_sorts_by_display_order() {
        let roster = roster();
        let noire: Vec<&str> = select(&roster, &ViewKey::Category(Category::Noire))
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        // Édouard before Zacharie: the accent ranks with the base letter.
        assert_eq!(noire, ["Édouard", "Zacharie"]);
    }
}

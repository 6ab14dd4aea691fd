use guet_types::Entry;
use std::cmp::Ordering;

/// Display ordering for roster entries: French-style comparison on the
/// name at base sensitivity — case is ignored and accented letters rank
/// with their base letter (`a` and `à` compare equal).
///
/// Equal names compare `Equal`; callers must use a stable sort so that
/// duplicates keep their snapshot order.
pub fn by_display_order(a: &Entry, b: &Entry) -> Ordering {
    compare_names(&a.name, &b.name)
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

// Lowercase and collapse the accented Latin letters used in French names
// onto their base letters; ligatures expand to their letter pairs.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        for lower in c.to_lowercase() {
            match lower {
                'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => key.push('a'),
                'ç' => key.push('c'),
                'é' | 'è' | 'ê' | 'ë' => key.push('e'),
                'î' | 'ï' | 'í' | 'ì' => key.push('i'),
                'ô' | 'ö' | 'ó' | 'ò' | 'õ' => key.push('o'),
                'ù' | 'û' | 'ü' | 'ú' => key.push('u'),
                'ý' | 'ÿ' => key.push('y'),
                'ñ' => key.push('n'),
                'œ' => key.push_str("oe"),
                'æ' => key.push_str("ae"),
                other => key.push(other),
            }
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use guet_types::Category;

    fn entry(id: &str, name: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Archives,
            facts: String::new(),
            crown_wanted: false,
            png: false,
            organisation_id: None,
        }
    }

    #[test]
    fn test_accents_rank_with_base_letter() {
        let mut names = vec![entry("1", "Zed"), entry("2", "Ana"), entry("3", "Émile")];
        names.sort_by(by_display_order);
        let sorted: Vec<&str> = names.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(sorted, ["Ana", "Émile", "Zed"]);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(compare_names("cartouche", "Cartouche"), Ordering::Equal);
        assert_eq!(compare_names("MANDRIN", "mandrin"), Ordering::Equal);
    }

    #[test]
    fn test_base_equivalence() {
        assert_eq!(compare_names("a", "à"), Ordering::Equal);
        assert_eq!(compare_names("Éloi", "Eloi"), Ordering::Equal);
        assert_eq!(compare_names("Bœuf", "Boeuf"), Ordering::Equal);
    }

    #[test]
    fn test_duplicate_names_keep_snapshot_order() {
        let mut entries = vec![entry("first", "Mandrin"), entry("second", "Mandrin")];
        entries.sort_by(by_display_order);
        assert_eq!(entries[0].id, "first");
        assert_eq!(entries[1].id, "second");
    }
}

use guet_engine::ViewKey;
use guet_types::Category;
use std::str::FromStr;

/// View name accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewArg {
    Category(Category),
    Crown,
    Png,
}

impl ViewArg {
    pub fn into_key(self) -> ViewKey {
        match self {
            ViewArg::Category(category) => ViewKey::Category(category),
            ViewArg::Crown => ViewKey::CrownWanted,
            ViewArg::Png => ViewKey::Png,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewArg::Category(category) => category.label(),
            ViewArg::Crown => "Couronne",
            ViewArg::Png => "PNG",
        }
    }

    /// The crown and PNG tabs list names only; the category tabs carry
    /// the full columns.
    pub fn names_only(&self) -> bool {
        matches!(self, ViewArg::Crown | ViewArg::Png)
    }
}

impl FromStr for ViewArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "couronne" | "crown" => Ok(ViewArg::Crown),
            "png" => Ok(ViewArg::Png),
            other => Category::from_str(other).map(ViewArg::Category).map_err(|_| {
                format!(
                    "unknown view '{}' (expected noire, surveillance, hors, archives, couronne or png)",
                    other
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_parse() {
        assert_eq!(
            "noire".parse::<ViewArg>().unwrap(),
            ViewArg::Category(Category::Noire)
        );
        assert_eq!("Couronne".parse::<ViewArg>().unwrap(), ViewArg::Crown);
        assert_eq!("png".parse::<ViewArg>().unwrap(), ViewArg::Png);
        assert!("inconnu".parse::<ViewArg>().is_err());
    }

    #[test]
    fn test_only_flag_views_are_names_only() {
        assert!(ViewArg::Crown.names_only());
        assert!(ViewArg::Png.names_only());
        assert!(!ViewArg::Category(Category::Noire).names_only());
    }
}

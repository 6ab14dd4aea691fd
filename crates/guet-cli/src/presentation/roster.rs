use crate::presentation::text;
use owo_colors::OwoColorize;
use std::fmt;

/// Compact mention shown in the Mentions column.
pub enum Tag {
    Crown,
    Png,
    Organisation(String),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Crown => write!(f, "{}", "Couronne".yellow()),
            Tag::Png => write!(f, "{}", "PNG".purple()),
            Tag::Organisation(label) => write!(f, "{}", label.cyan()),
        }
    }
}

pub struct EntryRow {
    pub name: String,
    pub facts: String,
    pub tags: Vec<Tag>,
}

/// Full-column table used by the category views.
pub struct EntryTableView {
    title: String,
    rows: Vec<EntryRow>,
    page: usize,
    total_pages: usize,
}

impl EntryTableView {
    pub fn new(title: impl Into<String>, rows: Vec<EntryRow>, page: usize, total_pages: usize) -> Self {
        Self {
            title: title.into(),
            rows,
            page,
            total_pages,
        }
    }
}

impl fmt::Display for EntryTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title.bold())?;

        if self.rows.is_empty() {
            writeln!(f, "  {}", "Aucune entrée".bright_black())?;
        }
        for row in &self.rows {
            let tags = row
                .tags
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "  {:<24} {:<44} {}",
                text::cell(&row.name, 24),
                text::cell(&row.facts, 44),
                tags
            )?;
        }

        writeln!(f, "  Page {}/{}", self.page, self.total_pages)
    }
}

/// Names-only list used by the couronne and PNG views.
pub struct NameListView {
    title: String,
    names: Vec<String>,
    page: usize,
    total_pages: usize,
}

impl NameListView {
    pub fn new(title: impl Into<String>, names: Vec<String>, page: usize, total_pages: usize) -> Self {
        Self {
            title: title.into(),
            names,
            page,
            total_pages,
        }
    }
}

impl fmt::Display for NameListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title.bold())?;

        if self.names.is_empty() {
            writeln!(f, "  {}", "Aucune entrée".bright_black())?;
        }
        for name in &self.names {
            writeln!(f, "  {}", name)?;
        }

        writeln!(f, "  Page {}/{}", self.page, self.total_pages)
    }
}

pub struct OrganisationRow {
    pub id: String,
    pub full_name: String,
    pub short_name: Option<String>,
    pub members: usize,
}

pub struct OrganisationTableView {
    rows: Vec<OrganisationRow>,
}

impl OrganisationTableView {
    pub fn new(rows: Vec<OrganisationRow>) -> Self {
        Self { rows }
    }
}

impl fmt::Display for OrganisationTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{}", "Aucune organisation".bright_black());
        }

        for row in &self.rows {
            let short = row.short_name.as_deref().unwrap_or("—");
            writeln!(
                f,
                "{:<32} {:<10} {:>3} membre(s)  {}",
                text::cell(&row.full_name, 32),
                text::cell(short, 10),
                row.members,
                row.id.bright_black()
            )?;
        }
        Ok(())
    }
}

use crate::api::RosterApi;
use crate::error::{Error, Result};
use guet_engine::{ReportPalette, ViewKey, advance, paginate, select, total_pages};
use guet_types::{Entry, EntryDraft, Organisation, OrganisationDraft, Snapshot};
use std::collections::HashMap;

/// One rendered page of a derived view.
#[derive(Debug)]
pub struct ViewPage<'a> {
    pub key: ViewKey,
    pub number: usize,
    pub total_pages: usize,
    pub entries: Vec<&'a Entry>,
}

impl ViewPage<'_> {
    /// Whether stepping by `delta` would land on a different page.
    pub fn can_step(&self, delta: isize) -> bool {
        advance(self.number, delta, self.total_pages) != self.number
    }
}

/// Sole owner of the roster snapshot and the per-view page counters.
///
/// Every mutation goes through the external [`RosterApi`] collaborator
/// and, on success, triggers a full reload: the snapshot is replaced as a
/// unit and every derived view is recomputed from it on the next read.
/// There is no incremental patching and no optimistic update.
///
/// Mutations take `&mut self`, so overlapping mutations cannot be
/// expressed; readers borrow an already-settled snapshot.
pub struct Coordinator<A> {
    api: A,
    snapshot: Snapshot,
    pages: HashMap<ViewKey, usize>,
    page_size: usize,
    palette: ReportPalette,
}

impl<A: RosterApi> Coordinator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: Snapshot::default(),
            pages: HashMap::new(),
            page_size: guet_engine::DEFAULT_PAGE_SIZE,
            palette: ReportPalette::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_palette(mut self, palette: ReportPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn palette(&self) -> &ReportPalette {
        &self.palette
    }

    /// Fetch entries and organisations concurrently and swap the snapshot
    /// in as a unit. On failure the previous snapshot and every page
    /// counter are left untouched.
    pub async fn load(&mut self) -> Result<()> {
        let api = &self.api;
        let (entries, organisations) =
            tokio::try_join!(api.fetch_entries(), api.fetch_organisations())
                .map_err(Error::Fetch)?;

        self.snapshot = Snapshot {
            entries,
            organisations,
        };
        self.reclamp_pages();
        Ok(())
    }

    pub async fn create(&mut self, draft: EntryDraft) -> Result<Entry> {
        let draft = validated(draft)?;
        let created = self
            .api
            .create_entry(&draft)
            .await
            .map_err(Error::Mutation)?;
        self.load().await?;
        Ok(created)
    }

    /// Full-record replace: the draft must be complete, nothing is
    /// carried over from the stored record.
    pub async fn update(&mut self, id: &str, draft: EntryDraft) -> Result<Entry> {
        let draft = validated(draft)?;
        let updated = self
            .api
            .update_entry(id, &draft)
            .await
            .map_err(Error::Mutation)?;
        self.load().await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.api.delete_entry(id).await.map_err(Error::Mutation)?;
        self.load().await
    }

    /// Batch delete by exact name. The server decides which names
    /// matched; its list is returned after a single snapshot reload.
    pub async fn remove_by_names(&mut self, names: &[String]) -> Result<Vec<String>> {
        let names: Vec<String> = names
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(Error::Validation("Aucun nom valide.".to_string()));
        }

        let deleted = self
            .api
            .delete_entries_by_name(&names)
            .await
            .map_err(Error::Mutation)?;
        self.load().await?;
        Ok(deleted)
    }

    pub async fn create_organisation(&mut self, draft: OrganisationDraft) -> Result<Organisation> {
        let draft = validated_organisation(draft)?;
        let created = self
            .api
            .create_organisation(&draft)
            .await
            .map_err(Error::Mutation)?;
        self.load().await?;
        Ok(created)
    }

    pub async fn update_organisation(
        &mut self,
        id: &str,
        draft: OrganisationDraft,
    ) -> Result<Organisation> {
        let draft = validated_organisation(draft)?;
        let updated = self
            .api
            .update_organisation(id, &draft)
            .await
            .map_err(Error::Mutation)?;
        self.load().await?;
        Ok(updated)
    }

    /// Refused locally while any entry still references the
    /// organisation, before any collaborator call. The server remains
    /// free to reject independently.
    pub async fn remove_organisation(&mut self, id: &str) -> Result<()> {
        let members = self.snapshot.organisation_members(id).count();
        if members > 0 {
            return Err(Error::ReferentialConflict {
                organisation_id: id.to_string(),
                members,
            });
        }

        self.api
            .delete_organisation(id)
            .await
            .map_err(Error::Mutation)?;
        self.load().await
    }

    /// Derive one view page from the current snapshot: filter, collate,
    /// clamp the stored counter, slice.
    pub fn view(&self, key: &ViewKey) -> ViewPage<'_> {
        let selected = select(&self.snapshot.entries, key);
        let requested = self.pages.get(key).copied().unwrap_or(1);
        let page = paginate(&selected, self.page_size, requested);
        ViewPage {
            key: key.clone(),
            number: page.number,
            total_pages: page.total_pages,
            entries: page.items.to_vec(),
        }
    }

    /// Move a view's counter by `delta`, clamped to the view's current
    /// page range. Returns the resulting page number.
    pub fn turn_page(&mut self, key: &ViewKey, delta: isize) -> usize {
        let count = select(&self.snapshot.entries, key).len();
        let total = total_pages(count, self.page_size);
        let current = self.pages.get(key).copied().unwrap_or(1);
        let next = advance(current, delta, total);
        self.pages.insert(key.clone(), next);
        next
    }

    /// Jump a view's counter to the requested page, clamped.
    pub fn set_page(&mut self, key: &ViewKey, requested: usize) -> usize {
        let count = select(&self.snapshot.entries, key).len();
        let total = total_pages(count, self.page_size);
        let page = requested.clamp(1, total);
        self.pages.insert(key.clone(), page);
        page
    }

    pub fn current_page(&self, key: &ViewKey) -> usize {
        self.pages.get(key).copied().unwrap_or(1)
    }

    /// Organisations in display order (collation on the full name).
    pub fn organisations(&self) -> Vec<&Organisation> {
        let mut organisations: Vec<&Organisation> = self.snapshot.organisations.iter().collect();
        organisations.sort_by(|a, b| guet_engine::compare_names(&a.full_name, &b.full_name));
        organisations
    }

    /// One member view per organisation, in display order.
    pub fn organisation_rosters(&self) -> Vec<(&Organisation, ViewPage<'_>)> {
        self.organisations()
            .into_iter()
            .map(|org| (org, self.view(&ViewKey::Organisation(org.id.clone()))))
            .collect()
    }

    pub fn report_line(&self, entry: &Entry) -> String {
        guet_engine::format_report_line(entry, &self.snapshot.organisations, &self.palette)
    }

    pub fn find_by_name(&self, query: &str) -> Option<&Entry> {
        self.snapshot.find_by_name(query)
    }

    // A removed entry may shrink a view below its stored counter, and an
    // organisation may disappear altogether; counters survive reloads but
    // are re-clamped against the then-current counts.
    fn reclamp_pages(&mut self) {
        let snapshot = &self.snapshot;
        let page_size = self.page_size;

        self.pages.retain(|key, _| match key {
            ViewKey::Organisation(id) => snapshot.organisation(id).is_some(),
            _ => true,
        });

        for (key, page) in self.pages.iter_mut() {
            let count = select(&snapshot.entries, key).len();
            let total = total_pages(count, page_size);
            *page = (*page).clamp(1, total);
        }
    }
}

fn validated(draft: EntryDraft) -> Result<EntryDraft> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Validation("Le nom IG est requis.".to_string()));
    }
    Ok(EntryDraft {
        name,
        category: draft.category,
        facts: draft.facts.trim().to_string(),
        crown_wanted: draft.crown_wanted,
        png: draft.png,
        organisation_id: normalize_organisation_ref(draft.organisation_id),
    })
}

fn validated_organisation(draft: OrganisationDraft) -> Result<OrganisationDraft> {
    let full_name = draft.full_name.trim();
    if full_name.is_empty() {
        return Err(Error::Validation("Le nom complet est requis.".to_string()));
    }
    let short_name = draft
        .short_name
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    Ok(OrganisationDraft {
        full_name: full_name.to_string(),
        short_name,
    })
}

// Form selectors historically submitted placeholder strings for "no
// organisation"; they all normalize to None.
fn normalize_organisation_ref(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    match value.to_lowercase().as_str() {
        "" | "aucun" | "aucune" | "none" | "null" => None,
        _ => Some(value),
    }
}

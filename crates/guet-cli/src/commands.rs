use crate::args::{Cli, Commands, OrgCommand};
use crate::presentation::roster::{
    EntryRow, EntryTableView, NameListView, OrganisationRow, OrganisationTableView, Tag,
};
use crate::types::ViewArg;
use anyhow::{Result, bail};
use guet_engine::ViewKey;
use guet_runtime::{Coordinator, MemoryStore, RosterApi, Settings, resolve_data_path};
use guet_types::{Entry, EntryDraft, Organisation, OrganisationDraft};

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data.as_deref())?;
    let settings = Settings::load_from(&data_dir.join("config.toml"))?;
    let store = MemoryStore::open(data_dir.join("roster.json"))?;

    let mut coordinator = Coordinator::new(store)
        .with_page_size(settings.page_size)
        .with_palette(settings.palette());
    coordinator.load().await?;

    match cli.command {
        Commands::List { view, page } => list(&mut coordinator, view, page),

        Commands::Add {
            name,
            list,
            facts,
            crown,
            png,
            organisation,
        } => {
            let organisation_id = match organisation {
                Some(reference) => Some(resolve_organisation(&coordinator, &reference)?.id),
                None => None,
            };
            coordinator
                .create(EntryDraft {
                    name,
                    category: list,
                    facts,
                    crown_wanted: crown,
                    png,
                    organisation_id,
                })
                .await?;
            println!("Brigand ajouté !");
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            list,
            facts,
            crown,
            png,
            organisation,
        } => {
            let organisation_id = match organisation {
                Some(reference) => Some(resolve_organisation(&coordinator, &reference)?.id),
                None => None,
            };
            coordinator
                .update(
                    &id,
                    EntryDraft {
                        name,
                        category: list,
                        facts,
                        crown_wanted: crown,
                        png,
                        organisation_id,
                    },
                )
                .await?;
            println!("Brigand modifié !");
            Ok(())
        }

        Commands::Rm { id } => {
            coordinator.remove(&id).await?;
            println!("Brigand supprimé !");
            Ok(())
        }

        Commands::Purge { names } => {
            let deleted = coordinator.remove_by_names(&names).await?;
            println!("Brigands supprimés: {}", deleted.join(", "));
            Ok(())
        }

        Commands::Search { query } => search(&coordinator, &query),

        Commands::Report { view } => report(&coordinator, view),

        Commands::Org { command } => org(&mut coordinator, command).await,
    }
}

fn list<A: RosterApi>(coordinator: &mut Coordinator<A>, view: ViewArg, page: usize) -> Result<()> {
    let key = view.clone().into_key();
    coordinator.set_page(&key, page);
    let page = coordinator.view(&key);

    if view.names_only() {
        let names = page.entries.iter().map(|e| e.name.clone()).collect();
        print!(
            "{}",
            NameListView::new(view.title(), names, page.number, page.total_pages)
        );
    } else {
        let rows = page
            .entries
            .iter()
            .map(|entry| entry_row(coordinator, entry))
            .collect();
        print!(
            "{}",
            EntryTableView::new(view.title(), rows, page.number, page.total_pages)
        );
    }
    Ok(())
}

fn entry_row<A: RosterApi>(coordinator: &Coordinator<A>, entry: &Entry) -> EntryRow {
    let mut tags = Vec::new();
    if entry.crown_wanted {
        tags.push(Tag::Crown);
    }
    if entry.png {
        tags.push(Tag::Png);
    }
    if let Some(org) = entry
        .organisation_id
        .as_deref()
        .and_then(|id| coordinator.snapshot().organisation(id))
    {
        tags.push(Tag::Organisation(org.display_label().to_string()));
    }

    EntryRow {
        name: entry.name.clone(),
        facts: entry.facts.clone(),
        tags,
    }
}

fn search<A: RosterApi>(coordinator: &Coordinator<A>, query: &str) -> Result<()> {
    let Some(entry) = coordinator.find_by_name(query) else {
        bail!("Aucun brigand trouvé.");
    };

    println!("{} [{}]", entry.name, entry.id);
    println!("  Liste: {}", entry.category.label());
    if !entry.facts.is_empty() {
        println!("  Faits: {}", entry.facts);
    }
    if entry.crown_wanted {
        println!("  Recherché par la couronne");
    }
    if entry.png {
        println!("  Persona non grata");
    }
    if let Some(org) = entry
        .organisation_id
        .as_deref()
        .and_then(|id| coordinator.snapshot().organisation(id))
    {
        println!("  Organisation: {}", org.display_label());
    }
    println!("  BBCode: {}", coordinator.report_line(entry));
    Ok(())
}

fn report<A: RosterApi>(coordinator: &Coordinator<A>, view: ViewArg) -> Result<()> {
    let key = view.into_key();
    for entry in guet_engine::select(&coordinator.snapshot().entries, &key) {
        println!("{}", coordinator.report_line(entry));
    }
    Ok(())
}

async fn org<A: RosterApi>(coordinator: &mut Coordinator<A>, command: OrgCommand) -> Result<()> {
    match command {
        OrgCommand::List => {
            let rows = coordinator
                .organisations()
                .into_iter()
                .map(|o| OrganisationRow {
                    id: o.id.clone(),
                    full_name: o.full_name.clone(),
                    short_name: o.short_name.clone(),
                    members: coordinator.snapshot().organisation_members(&o.id).count(),
                })
                .collect();
            print!("{}", OrganisationTableView::new(rows));
            Ok(())
        }

        OrgCommand::Add { full_name, short } => {
            coordinator
                .create_organisation(OrganisationDraft {
                    full_name,
                    short_name: short,
                })
                .await?;
            println!("Organisation ajoutée !");
            Ok(())
        }

        OrgCommand::Rename {
            org,
            full_name,
            short,
        } => {
            let id = resolve_organisation(coordinator, &org)?.id;
            coordinator
                .update_organisation(
                    &id,
                    OrganisationDraft {
                        full_name,
                        short_name: short,
                    },
                )
                .await?;
            println!("Organisation modifiée !");
            Ok(())
        }

        OrgCommand::Rm { org } => {
            let id = resolve_organisation(coordinator, &org)?.id;
            coordinator.remove_organisation(&id).await?;
            println!("Organisation supprimée !");
            Ok(())
        }

        OrgCommand::Members { org, page } => {
            let organisation = resolve_organisation(coordinator, &org)?;
            let key = ViewKey::Organisation(organisation.id.clone());
            coordinator.set_page(&key, page);
            let view = coordinator.view(&key);
            let names = view.entries.iter().map(|e| e.name.clone()).collect();
            print!(
                "{}",
                NameListView::new(
                    format!("Membres: {}", organisation.display_label()),
                    names,
                    view.number,
                    view.total_pages,
                )
            );
            Ok(())
        }
    }
}

/// Accept an organisation by id, abbreviation or full name, the way the
/// legacy forms did.
fn resolve_organisation<A: RosterApi>(
    coordinator: &Coordinator<A>,
    reference: &str,
) -> Result<Organisation> {
    let snapshot = coordinator.snapshot();
    let needle = reference.trim();

    let found = snapshot
        .organisation(needle)
        .or_else(|| {
            snapshot
                .organisations
                .iter()
                .find(|o| o.short_name.as_deref() == Some(needle))
        })
        .or_else(|| snapshot.organisations.iter().find(|o| o.full_name == needle));

    match found {
        Some(organisation) => Ok(organisation.clone()),
        None => bail!("Organisation introuvable"),
    }
}

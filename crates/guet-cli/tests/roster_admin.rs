use guet_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn list_noire_shows_the_seeded_entries() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["list", "noire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mandrin"))
        .stdout(predicate::str::contains("Cartouche"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn crown_view_lists_names_only() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["list", "couronne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mandrin"))
        .stdout(predicate::str::contains("Contrebande de sel").not());
}

#[test]
fn empty_view_prints_the_canonical_empty_state() {
    let world = TestWorld::new();

    world
        .command()
        .args(["list", "archives"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucune entrée"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn page_size_setting_splits_the_view() {
    let world = TestWorld::new()
        .with_roster(&fixtures::sample_snapshot())
        .with_settings("page_size = 1\n");

    world
        .command()
        .args(["list", "noire", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2/2"));
}

#[test]
fn add_persists_and_confirms() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args([
            "add",
            "Borgia",
            "--list",
            "surveillance",
            "--facts",
            "Racket au port",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brigand ajouté !"));

    let roster = world.read_roster().unwrap();
    assert!(roster.entries.iter().any(|e| e.name == "Borgia"));
}

#[test]
fn add_accepts_an_organisation_by_abbreviation() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["add", "Borgia", "--list", "noire", "--organisation", "CdL"])
        .assert()
        .success();

    let roster = world.read_roster().unwrap();
    let created = roster.entries.iter().find(|e| e.name == "Borgia").unwrap();
    assert_eq!(created.organisation_id.as_deref(), Some("o1"));
}

#[test]
fn add_without_a_name_is_refused_before_any_write() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["add", "   ", "--list", "noire"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Le nom IG est requis."));

    assert_eq!(world.read_roster().unwrap().entries.len(), 5);
}

#[test]
fn edit_replaces_the_whole_record() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["edit", "b5", "--name", "Gaspard le Rangé", "--list", "archives"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brigand modifié !"));

    let roster = world.read_roster().unwrap();
    let edited = roster.entries.iter().find(|e| e.id == "b5").unwrap();
    assert_eq!(edited.name, "Gaspard le Rangé");
    assert_eq!(edited.facts, "");
}

#[test]
fn rm_strikes_the_entry() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["rm", "b2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brigand supprimé !"));

    let roster = world.read_roster().unwrap();
    assert!(roster.entries.iter().all(|e| e.id != "b2"));
}

#[test]
fn search_finds_by_substring() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["search", "gaspard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vieux Gaspard"))
        .stdout(predicate::str::contains("Archives"));
}

#[test]
fn search_miss_is_an_error() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["search", "Fantôme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aucun brigand trouvé."));
}

#[test]
fn report_applies_crown_color_and_mention_order() {
    let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());

    world
        .command()
        .args(["report", "noire"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[color=darkorange]Mandrin[/color] - Recherché par la couronne de France - CdL - Contrebande de sel",
        ));
}

#[test]
fn report_honors_the_palette_setting() {
    let world = TestWorld::new()
        .with_roster(&fixtures::sample_snapshot())
        .with_settings("[palette]\nhors = \"maroon\"\n");

    world
        .command()
        .args(["report", "hors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[color=maroon]Éloi le Borgne[/color]"));
}

//! Startup path: config file -> dropfile -> catalogs -> welcome screen.

mod common;

use common::{fixture_root, node_dir, write_dropfile, TRADER_JANE};
use spacejunk::catalog::{Catalog, CatalogError, DropItem};
use spacejunk::config::Config;
use spacejunk::door::{DoorError, DoorSession};
use spacejunk::dropfile::DropfileError;

fn fixture_config() -> Config {
    let mut config = Config::default();
    config.data.data_dir = fixture_root().to_str().unwrap().to_string();
    config
}

#[test]
fn catalog_loads_fixture_data() {
    let config = fixture_config();
    let catalog = Catalog::load(&config.data.data_dir, &config.data.catalog).unwrap();
    assert_eq!(catalog.enemies.len(), 2);
    assert_eq!(catalog.weapons.len(), 2);
    assert_eq!(catalog.gear.len(), 2);
    assert_eq!(catalog.implants.len(), 3);
    assert!(catalog.locations.is_empty());

    let pirate = catalog.find_enemy("void pirate").unwrap();
    assert!(pirate.initiative);
    assert_eq!(catalog.find_weapon("Rivet Gun").unwrap().ammo, Some(12));

    let drops = catalog.drop_table();
    assert_eq!(drops.len(), 4);
    assert!(drops
        .iter()
        .any(|d| matches!(d, DropItem::Gear(g) if g.name == "Medkit")));
}

#[test]
fn configured_locations_are_loaded() {
    let mut config = fixture_config();
    config.data.catalog.locations = Some("locations.json".to_string());
    let catalog = Catalog::load(&config.data.data_dir, &config.data.catalog).unwrap();
    assert_eq!(catalog.locations.len(), 2);
    assert_eq!(catalog.locations[0].name, "Salvage Yard");
    assert_eq!(catalog.locations[1].desc, "");

    config.data.catalog.locations = Some("nowhere.json".to_string());
    assert!(matches!(
        Catalog::load(&config.data.data_dir, &config.data.catalog),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn drop_table_items_report_inventory_slots() {
    let catalog = Catalog::load(&fixture_config().data.data_dir, &Default::default()).unwrap();
    let slots: u32 = catalog.drop_table().iter().map(DropItem::slots).sum();
    let expected: u32 = catalog.weapons.iter().map(|w| w.slots).sum::<u32>()
        + catalog.gear.iter().map(|g| g.slots).sum::<u32>();
    assert_eq!(slots, expected);
    let boots = catalog
        .drop_table()
        .into_iter()
        .find(|d| d.name() == "Mag Boots")
        .unwrap();
    assert_eq!(boots.slots(), 2);
}

#[test]
fn malformed_catalog_reports_parse_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("enemies.json"), "{ not json").unwrap();
    match spacejunk::catalog::load_enemies(dir.path().join("enemies.json")) {
        Err(CatalogError::Parse { path, .. }) => assert!(path.ends_with("enemies.json")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        spacejunk::catalog::load_weapons(dir.path().join("weapons.json")),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn bootstrap_builds_session_and_welcome() {
    let node = node_dir("bootstrap");
    let mut lines = TRADER_JANE;
    lines[9] = "1";
    write_dropfile(node.path(), &lines, "\r\n");

    let door = DoorSession::bootstrap(node.path().to_str().unwrap(), &fixture_config()).unwrap();
    assert_eq!(door.session.alias, "Trader_Jane");
    assert_eq!(door.catalog.implants.len(), 3);

    let screen = door.welcome_screen();
    assert!(screen.contains("Trader_Jane"));
    assert!(screen.contains("3 implants"));
}

#[test]
fn bootstrap_surfaces_dropfile_error() {
    let node = node_dir("bootstrap-missing");
    let err = DoorSession::bootstrap(node.path().to_str().unwrap(), &fixture_config()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DropfileError>(),
        Some(DropfileError::NotFound { .. })
    ));
}

#[test]
fn bootstrap_refuses_caller_without_time() {
    let node = node_dir("bootstrap-notime");
    let mut lines = TRADER_JANE;
    lines[8] = "0";
    write_dropfile(node.path(), &lines, "\n");

    let err = DoorSession::bootstrap(node.path().to_str().unwrap(), &fixture_config()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DoorError>(),
        Some(DoorError::OutOfTime { minutes: 0, .. })
    ));
}

#[tokio::test]
async fn default_config_file_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    Config::create_default(path).await.unwrap();
    let config = Config::load(path).await.unwrap();
    assert_eq!(config.door.name, "SpaceJunk 3000");
    assert_eq!(config.data.catalog.implants, "implants.json");
}

#[tokio::test]
async fn config_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[tokio::test]
async fn load_or_default_uses_defaults_only_when_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");
    let config = Config::load_or_default(absent.to_str().unwrap()).await.unwrap();
    assert_eq!(config.door.name, "SpaceJunk 3000");

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[door]\ndropfile_dir = \"/bbs/node1\"\nname = ").unwrap();
    let err = Config::load_or_default(broken.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

use tempfile::tempdir;

use concentra::{PrefStore, RgbaColor, ThemeStore, FORMAT_VERSION};

#[test]
fn pref_store_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut prefs = PrefStore::open(&path).expect("open");
    assert!(!prefs.contains("answer"));
    prefs.set("answer", &42u32).expect("set");
    prefs.save().expect("save");

    let reopened = PrefStore::open(&path).expect("reopen");
    assert_eq!(reopened.get::<u32>("answer").expect("get"), Some(42));
}

#[test]
fn unsaved_mutations_stay_in_memory() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut prefs = PrefStore::open(&path).expect("open");
    prefs.set("answer", &42u32).expect("set");
    assert!(!path.exists(), "nothing hits the disk before save()");

    let reopened = PrefStore::open(&path).expect("reopen");
    assert_eq!(reopened.get::<u32>("answer").expect("get"), None);
}

#[test]
fn catalog_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut store = ThemeStore::new("default");
    store.insert(
        "Custom",
        vec!["x".to_string(), "y".to_string(), "z".to_string()],
        3,
        RgbaColor::opaque(1.0, 2.0, 3.0),
    );

    let mut prefs = PrefStore::open(&path).expect("open");
    store.save_to(&mut prefs).expect("encode");
    prefs.save().expect("save");

    let reopened = PrefStore::open(&path).expect("reopen");
    let loaded = ThemeStore::load_from(&reopened, "default")
        .expect("load")
        .expect("stored catalog");
    assert_eq!(loaded, store);

    // Ids assigned after a reload continue where the snapshot left off.
    let mut loaded = loaded;
    let id = loaded.insert(
        "Later",
        vec!["p".to_string(), "q".to_string()],
        2,
        RgbaColor::opaque(0.0, 0.0, 0.0),
    );
    assert_eq!(id.0, 8);
}

#[test]
fn missing_catalog_loads_as_none_and_defaults_seed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let prefs = PrefStore::open(&path).expect("open");
    assert!(ThemeStore::load_from(&prefs, "default")
        .expect("load")
        .is_none());

    let store = ThemeStore::load_or_default(&prefs, "default").expect("load_or_default");
    assert_eq!(store.len(), 6);
    assert!(!path.exists(), "load_or_default never writes");
}

#[test]
fn version_mismatch_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut prefs = PrefStore::open(&path).expect("open");
    prefs
        .set(
            &ThemeStore::store_key("bad"),
            &serde_json::json!({
                "version": FORMAT_VERSION + 1,
                "name": "bad",
                "next_id": 1,
                "themes": [],
            }),
        )
        .expect("set");

    assert!(ThemeStore::load_from(&prefs, "bad").is_err());
}

#[test]
fn removed_keys_disappear_after_save() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut prefs = PrefStore::open(&path).expect("open");
    prefs.set("a", &1u8).expect("set");
    prefs.set("b", &2u8).expect("set");
    prefs.save().expect("save");

    assert!(prefs.remove("a"));
    assert!(!prefs.remove("a"));
    prefs.save().expect("save");

    let reopened = PrefStore::open(&path).expect("reopen");
    assert_eq!(reopened.get::<u8>("a").expect("get"), None);
    assert_eq!(reopened.get::<u8>("b").expect("get"), Some(2));
    assert_eq!(reopened.keys().collect::<Vec<_>>(), vec!["b"]);
}

use concentra::{RgbaColor, ThemeStore};

fn tokens(s: &[&str]) -> Vec<String> {
    s.iter().map(|t| (*t).to_string()).collect()
}

const COLOR: RgbaColor = RgbaColor::opaque(240.0, 23.0, 50.0);

#[test]
fn fresh_store_is_seeded_with_defaults() {
    let store = ThemeStore::new("test");
    assert_eq!(store.len(), 6);
    assert!(store.iter().all(concentra::Theme::is_playable));

    // Each insert lands at the front, so the first seeded theme lists last.
    assert_eq!(store.theme_at(0).expect("first").name, "Fruits");
    assert_eq!(store.theme_at(5).expect("last").name, "Vehicles");

    let mut ids: Vec<u32> = store.iter().map(|t| t.id().0).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn pair_count_clamps_up_to_two() {
    let mut store = ThemeStore::empty("test");
    let id = store.insert("Tiny", tokens(&["a", "b", "c", "d", "e"]), 1, COLOR);
    assert_eq!(store.get(id).expect("theme").number_of_pairs, 2);
}

#[test]
fn pair_count_clamps_down_to_pool_size() {
    let mut store = ThemeStore::empty("test");
    let id = store.insert("Small", tokens(&["a", "b", "c", "d"]), 99, COLOR);
    assert_eq!(store.get(id).expect("theme").number_of_pairs, 4);
}

#[test]
fn edit_reclamps_pair_count() {
    let mut store = ThemeStore::empty("test");
    let id = store.insert("T", tokens(&["a", "b", "c"]), 3, COLOR);
    assert!(store.edit(id, |t| t.number_of_pairs = 100));
    assert_eq!(store.get(id).expect("theme").number_of_pairs, 3);
}

#[test]
fn last_theme_cannot_be_removed() {
    let mut store = ThemeStore::empty("test");
    let id = store.insert("Only", tokens(&["a", "b"]), 2, COLOR);
    assert!(store.remove(id).is_none());
    assert_eq!(store.len(), 1);

    store.insert("Second", tokens(&["c", "d"]), 2, COLOR);
    assert!(store.remove(id).is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn removed_ids_are_never_reused() {
    let mut store = ThemeStore::new("test");
    let id = store.insert("Custom", tokens(&["a", "b"]), 2, COLOR);
    assert_eq!(id.0, 7);
    store.remove(id);
    let next = store.insert("Another", tokens(&["c", "d"]), 2, COLOR);
    assert_eq!(next.0, 8);
}

#[test]
fn theme_at_clamps_the_index() {
    let store = ThemeStore::new("test");
    let last = store.theme_at(usize::MAX).expect("clamped");
    assert_eq!(last.name, "Vehicles");
    assert!(ThemeStore::empty("none").theme_at(0).is_none());
}

#[test]
fn unplayable_themes_are_filtered() {
    let mut store = ThemeStore::new("test");
    store.insert("Empty", Vec::new(), 2, COLOR);
    assert_eq!(store.len(), 7);
    assert_eq!(store.playable().count(), 6);
}

#[test]
fn content_editing_round_trip() {
    let mut store = ThemeStore::empty("test");
    let id = store.insert("T", tokens(&["a", "b", "c"]), 3, COLOR);

    assert!(store.edit(id, |t| {
        assert!(t.remove_content("c"));
    }));
    let theme = store.get(id).expect("theme");
    assert_eq!(theme.contents, tokens(&["a", "b"]));
    assert_eq!(theme.removed_contents, tokens(&["c"]));
    assert_eq!(theme.number_of_pairs, 2, "pair count follows the pool");

    // Two contents left: further removal is refused.
    assert!(store.edit(id, |t| {
        assert!(!t.remove_content("b"));
    }));

    assert!(store.edit(id, |t| {
        assert!(t.restore_content("c"));
        t.add_content("d");
        t.add_content("d"); // duplicates are dropped
    }));
    let theme = store.get(id).expect("theme");
    assert_eq!(theme.contents, tokens(&["a", "b", "c", "d"]));
    assert!(theme.removed_contents.is_empty());
}

#[test]
fn move_theme_reorders_the_catalog() {
    let mut store = ThemeStore::empty("test");
    store.insert("C", tokens(&["a", "b"]), 2, COLOR);
    store.insert("B", tokens(&["a", "b"]), 2, COLOR);
    store.insert("A", tokens(&["a", "b"]), 2, COLOR);

    assert!(store.move_theme(0, 2));
    let names: Vec<&str> = store.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A"]);
    assert!(!store.move_theme(5, 0));
}

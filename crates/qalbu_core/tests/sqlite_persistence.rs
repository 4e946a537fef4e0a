use qalbu_core::db::open_db;
use qalbu_core::store::{CHECKLIST_SLOT, FAVORITES_SLOT, MOOD_HISTORY_SLOT};
use qalbu_core::{
    ChecklistStore, FavoriteItem, FavoritesStore, HadithEntry, ManualClock, MoodLogStore,
    MoodType, SlotRepository, SqliteSlotRepository,
};

#[test]
fn stores_survive_reopening_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.sqlite3");

    let (entry_id, favorite_id) = {
        let conn = open_db(&path).unwrap();
        let repo = SqliteSlotRepository::new(&conn);

        let mut log = MoodLogStore::load(repo, ManualClock::new(42)).unwrap();
        let entry = log.append(MoodType::Disappointed).unwrap();
        log.attach_note(&entry.id, "it will pass").unwrap();

        let mut favorites = FavoritesStore::load(repo).unwrap();
        let item = FavoriteItem::hadith(
            HadithEntry {
                source: "HR. Ahmad".to_string(),
                text: "Ketahuilah, kemenangan bersama kesabaran.".to_string(),
                reflection: String::new(),
            },
            MoodType::Disappointed,
            43,
        );
        favorites.save(item.clone()).unwrap();

        let mut checklist = ChecklistStore::load(repo).unwrap();
        checklist.toggle("tilawah_quran").unwrap();

        (entry.id, item.id().to_string())
    };

    let conn = open_db(&path).unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    let log = MoodLogStore::load(repo, ManualClock::new(0)).unwrap();
    let entry = log.get(&entry_id).unwrap();
    assert_eq!(entry.timestamp, 42);
    assert_eq!(entry.note.as_deref(), Some("it will pass"));

    assert!(FavoritesStore::load(repo).unwrap().is_saved(&favorite_id));
    assert!(ChecklistStore::load(repo).unwrap().is_checked("tilawah_quran"));
}

#[test]
fn each_store_owns_its_own_slot() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("slots.sqlite3")).unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    MoodLogStore::load(repo, ManualClock::new(0))
        .unwrap()
        .append(MoodType::Happy)
        .unwrap();
    ChecklistStore::load(repo)
        .unwrap()
        .toggle("sedekah_harian")
        .unwrap();

    assert!(repo.read_slot(MOOD_HISTORY_SLOT).unwrap().is_some());
    assert!(repo.read_slot(CHECKLIST_SLOT).unwrap().is_some());
    assert!(repo.read_slot(FAVORITES_SLOT).unwrap().is_none());
}

#[test]
fn corrupt_sqlite_slot_recovers_to_empty_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("corrupt.sqlite3")).unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    repo.write_slot(CHECKLIST_SLOT, "[\"unterminated").unwrap();

    let mut checklist = ChecklistStore::load(repo).unwrap();
    assert!(checklist.list_checked().is_empty());

    checklist.toggle("shalawat_nabi").unwrap();
    assert_eq!(
        repo.read_slot(CHECKLIST_SLOT).unwrap().as_deref(),
        Some("[\"shalawat_nabi\"]")
    );
}

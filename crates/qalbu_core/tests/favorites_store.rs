use qalbu_core::store::FAVORITES_SLOT;
use qalbu_core::{
    verse_id, FavoriteItem, FavoriteKind, FavoritesStore, HadithEntry, MemorySlotRepository,
    MoodType, QuranVerse,
};

fn ayat_al_kursi(translation: &str) -> QuranVerse {
    QuranVerse {
        surah_name: "Al-Baqarah".to_string(),
        surah_number: 2,
        ayah_number: 255,
        arabic_text: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ".to_string(),
        translation: translation.to_string(),
        reflection: "Allah menjaga segalanya.".to_string(),
    }
}

fn hadith(text: &str) -> HadithEntry {
    HadithEntry {
        source: "HR. Bukhari".to_string(),
        text: text.to_string(),
        reflection: "Niat menentukan nilai amal.".to_string(),
    }
}

#[test]
fn save_then_is_saved_and_remove_then_not_saved() {
    let mut store = FavoritesStore::load(MemorySlotRepository::new()).unwrap();
    let item = FavoriteItem::hadith(hadith("Amal tergantung niat."), MoodType::Confused, 1);

    store.save(item.clone()).unwrap();
    assert!(store.is_saved(item.id()));

    store.remove(item.id()).unwrap();
    assert!(!store.is_saved(item.id()));
    assert!(store.is_empty());
}

#[test]
fn same_verse_with_reworded_translation_stays_single_entry() {
    let mut store = FavoritesStore::load(MemorySlotRepository::new()).unwrap();
    let derived = verse_id(2, 255);

    store
        .save(FavoriteItem::verse(
            ayat_al_kursi("Allah, tidak ada tuhan selain Dia."),
            MoodType::Anxious,
            10,
        ))
        .unwrap();
    assert!(store.is_saved(&derived));

    store
        .save(FavoriteItem::verse(
            ayat_al_kursi("Allah, tiada Tuhan melainkan Dia Yang Hidup kekal."),
            MoodType::Lonely,
            20,
        ))
        .unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), derived);
    assert_eq!(listed[0].mood_context, MoodType::Lonely);
    assert_eq!(listed[0].timestamp, 20);
    match listed[0].content() {
        qalbu_core::FavoriteContent::Quran(verse) => {
            assert_eq!(
                verse.translation,
                "Allah, tiada Tuhan melainkan Dia Yang Hidup kekal."
            );
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn hadith_with_whitespace_variance_dedups() {
    let mut store = FavoritesStore::load(MemorySlotRepository::new()).unwrap();
    store
        .save(FavoriteItem::hadith(
            hadith("Senyummu kepada saudaramu adalah sedekah."),
            MoodType::Happy,
            1,
        ))
        .unwrap();
    store
        .save(FavoriteItem::hadith(
            hadith("  Senyummu kepada  saudaramu adalah sedekah. "),
            MoodType::Happy,
            2,
        ))
        .unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn list_is_newest_first_across_kinds() {
    let mut store = FavoritesStore::load(MemorySlotRepository::new()).unwrap();
    let verse = FavoriteItem::verse(ayat_al_kursi("t"), MoodType::Sad, 100);
    let saying = FavoriteItem::hadith(hadith("Jangan marah."), MoodType::Angry, 200);
    store.save(verse.clone()).unwrap();
    store.save(saying.clone()).unwrap();

    let listed = store.list();
    assert_eq!(listed[0].id(), saying.id());
    assert_eq!(listed[0].kind(), FavoriteKind::Hadith);
    assert_eq!(listed[1].id(), verse.id());
    assert_eq!(listed[1].kind(), FavoriteKind::Quran);
}

#[test]
fn remove_absent_id_is_noop() {
    let repo = MemorySlotRepository::new();
    let mut store = FavoritesStore::load(repo.clone()).unwrap();
    let kept = FavoriteItem::hadith(hadith("Sabar itu cahaya."), MoodType::Tired, 3);
    store.save(kept.clone()).unwrap();
    let before = repo.raw(FAVORITES_SLOT);

    store.remove("quran-1-1").unwrap();

    assert_eq!(repo.raw(FAVORITES_SLOT), before);
    assert!(store.is_saved(kept.id()));
}

#[test]
fn favorites_reload_with_persisted_shape() {
    let repo = MemorySlotRepository::new();
    let item = FavoriteItem::verse(ayat_al_kursi("t"), MoodType::Grateful, 55);
    {
        let mut store = FavoritesStore::load(repo.clone()).unwrap();
        store.save(item.clone()).unwrap();
    }

    let raw: serde_json::Value =
        serde_json::from_str(&repo.raw(FAVORITES_SLOT).unwrap()).unwrap();
    assert_eq!(raw[0]["type"], "quran");
    assert_eq!(raw[0]["content"]["surahNumber"], 2);
    assert_eq!(raw[0]["moodContext"], "Grateful");

    let reloaded = FavoritesStore::load(repo).unwrap();
    assert_eq!(reloaded.get(item.id()), Some(&item));
}

#[test]
fn malformed_favorites_slot_loads_as_empty() {
    let repo = MemorySlotRepository::new();
    repo.put_raw(FAVORITES_SLOT, "not even close to json");
    let store = FavoritesStore::load(repo).unwrap();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn blob_holding_same_hadith_under_foreign_id_does_not_double_store() {
    let repo = MemorySlotRepository::new();
    let genuine = FavoriteItem::hadith(hadith("Malu adalah sebagian dari iman."), MoodType::Sad, 1);
    let mut forged = serde_json::to_value(&genuine).unwrap();
    forged["id"] = serde_json::json!("random-token");
    forged["timestamp"] = serde_json::json!(2);
    repo.put_raw(
        FAVORITES_SLOT,
        serde_json::to_string(&serde_json::json!([genuine, forged])).unwrap(),
    );

    let mut store = FavoritesStore::load(repo.clone()).unwrap();
    assert!(!store.is_saved("random-token"));

    store.save(genuine.clone()).unwrap();
    store
        .save(FavoriteItem::hadith(
            hadith("malu adalah  sebagian dari iman."),
            MoodType::Sad,
            3,
        ))
        .unwrap();
    assert_eq!(store.len(), 1);
    assert!(!repo.raw(FAVORITES_SLOT).unwrap().contains("random-token"));
}

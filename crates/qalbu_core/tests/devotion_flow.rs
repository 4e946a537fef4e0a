use qalbu_core::db::open_db_in_memory;
use qalbu_core::{
    parse_generated_content, ApprovalStatus, ContentGenerator, DevotionError, DevotionService,
    GenerationError, HealingContent, ManualClock, MemorySlotRepository, MoodType,
    SqliteSlotRepository, StaticAccessGate,
};
use std::cell::Cell;

const SAMPLE_CONTENT: &str = r#"{
    "mood": "Sedih",
    "summary": "Allah dekat denganmu.",
    "quran": {
        "surahName": "Ash-Sharh",
        "surahNumber": 94,
        "ayahNumber": 6,
        "arabicText": "إِنَّ مَعَ الْعُسْرِ يُسْرًا",
        "translation": "Sesungguhnya bersama kesulitan ada kemudahan.",
        "reflection": "Kesulitan tidak datang sendirian."
    },
    "hadith": {
        "source": "HR. Muslim",
        "text": "Tidaklah seorang muslim ditimpa kelelahan melainkan Allah menghapus dosanya.",
        "reflection": "Lelahmu bernilai."
    },
    "wisdom": "Sabar adalah kunci.",
    "practicalSteps": ["Wudhu", "Shalat dua rakaat", "Tulis syukur"],
    "reflectionQuestions": ["Apa yang kau syukuri?", "Siapa yang bisa kau hubungi?"]
}"#;

struct FixedGenerator {
    calls: Cell<usize>,
}

impl FixedGenerator {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl ContentGenerator for FixedGenerator {
    fn generate(&self, _mood: MoodType) -> Result<HealingContent, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        parse_generated_content(SAMPLE_CONTENT)
    }
}

struct FailingGenerator;

impl ContentGenerator for FailingGenerator {
    fn generate(&self, _mood: MoodType) -> Result<HealingContent, GenerationError> {
        Err(GenerationError::Upstream("quota exhausted".to_string()))
    }
}

#[test]
fn select_mood_logs_then_generates() {
    let clock = ManualClock::new(1_000);
    let generator = FixedGenerator::new();
    let mut service = DevotionService::open(
        &generator,
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        &clock,
    )
    .unwrap();

    let selected = service.select_mood(MoodType::Sad).unwrap();
    let content = selected.content.unwrap();

    assert_eq!(content.quran.surah_number, 94);
    assert_eq!(selected.entry.mood, MoodType::Sad);
    assert_eq!(selected.entry.timestamp, 1_000);
    assert_eq!(service.mood_log().list()[0].id, selected.entry.id);
    assert_eq!(generator.calls.get(), 1);
}

#[test]
fn generation_failure_still_logs_selection() {
    let mut service = DevotionService::open(
        FailingGenerator,
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        ManualClock::new(0),
    )
    .unwrap();

    let selected = service.select_mood(MoodType::Anxious).unwrap();
    let err = selected.content.unwrap_err();

    assert!(matches!(err, GenerationError::Upstream(_)));
    assert!(!err.user_message().is_empty());
    assert_eq!(service.mood_log().len(), 1);
    assert!(service
        .save_journal(&selected.entry.id, "still anxious")
        .unwrap());
}

#[test]
fn pending_account_cannot_select_or_refresh() {
    let generator = FixedGenerator::new();
    let mut service = DevotionService::open(
        &generator,
        StaticAccessGate(ApprovalStatus::Pending),
        MemorySlotRepository::new(),
        ManualClock::new(0),
    )
    .unwrap();

    let err = service.select_mood(MoodType::Happy).unwrap_err();
    assert!(matches!(
        err,
        DevotionError::AccessDenied(ApprovalStatus::Pending)
    ));
    assert!(matches!(
        service.refresh(MoodType::Happy).unwrap_err(),
        DevotionError::AccessDenied(_)
    ));
    assert!(service.mood_log().is_empty());
    assert_eq!(generator.calls.get(), 0);
}

#[test]
fn refresh_does_not_log() {
    let generator = FixedGenerator::new();
    let service = DevotionService::open(
        &generator,
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        ManualClock::new(0),
    )
    .unwrap();

    service.refresh(MoodType::Tired).unwrap();
    assert!(service.mood_log().is_empty());
    assert_eq!(generator.calls.get(), 1);
}

#[test]
fn blank_journal_is_ignored() {
    let mut service = DevotionService::open(
        FixedGenerator::new(),
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        ManualClock::new(0),
    )
    .unwrap();
    let selected = service.select_mood(MoodType::Lonely).unwrap();

    assert!(!service.save_journal(&selected.entry.id, "   \n ").unwrap());
    assert!(service.save_journal(&selected.entry.id, "  call mom  ").unwrap());
    assert_eq!(
        service.mood_log().list()[0].note.as_deref(),
        Some("call mom")
    );
}

#[test]
fn favorite_toggles_follow_content_identity() {
    let clock = ManualClock::new(500);
    let mut service = DevotionService::open(
        FixedGenerator::new(),
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        &clock,
    )
    .unwrap();
    let content = service.select_mood(MoodType::Sad).unwrap().content.unwrap();

    assert!(service.toggle_verse_favorite(&content, MoodType::Sad).unwrap());
    assert!(service.toggle_hadith_favorite(&content, MoodType::Sad).unwrap());
    assert!(service.is_verse_saved(&content));
    assert!(service.is_hadith_saved(&content));
    assert_eq!(service.favorites().len(), 2);

    let mut reworded = content.clone();
    reworded.quran.translation = "Karena sesungguhnya sesudah kesulitan itu ada kemudahan.".to_string();
    assert!(service.is_verse_saved(&reworded));

    assert!(!service.toggle_verse_favorite(&reworded, MoodType::Sad).unwrap());
    assert!(!service.is_verse_saved(&content));
    assert_eq!(service.favorites().len(), 1);
}

#[test]
fn stats_reflect_logged_history() {
    let clock = ManualClock::new(10_000);
    let mut service = DevotionService::open(
        FixedGenerator::new(),
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        &clock,
    )
    .unwrap();
    assert!(service.all_time_stats().is_none());

    service.select_mood(MoodType::Grateful).unwrap();
    clock.advance(1);
    service.select_mood(MoodType::Grateful).unwrap();
    clock.advance(1);
    service.select_mood(MoodType::Sad).unwrap();

    let all_time = service.all_time_stats().unwrap();
    assert_eq!(all_time.total, 3);
    assert_eq!(all_time.dominant, MoodType::Grateful);

    let monthly = service.monthly_stats();
    assert_eq!(monthly.total, 3);
    assert_eq!(monthly.max, 2);
}

#[test]
fn practice_toggle_uses_checklist_store() {
    let mut service = DevotionService::open(
        FixedGenerator::new(),
        StaticAccessGate::demo(),
        MemorySlotRepository::new(),
        ManualClock::new(0),
    )
    .unwrap();
    assert!(service.toggle_practice("sholat_5_waktu").unwrap());
    assert!(service.checklist().is_checked("sholat_5_waktu"));
}

#[test]
fn service_runs_on_sqlite_slots() {
    let conn = open_db_in_memory().unwrap();
    let mut service = DevotionService::open(
        FixedGenerator::new(),
        StaticAccessGate::demo(),
        SqliteSlotRepository::new(&conn),
        ManualClock::new(0),
    )
    .unwrap();

    let selected = service.select_mood(MoodType::Optimistic).unwrap();
    service.save_journal(&selected.entry.id, "bismillah").unwrap();

    let slots: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(slots, 1);
}

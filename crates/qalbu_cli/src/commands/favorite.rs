use super::{format_timestamp, open_profile};
use anyhow::{Context, Result};
use clap::ValueEnum;
use qalbu_core::{
    parse_generated_content, Clock, CoreConfig, FavoriteContent, FavoriteItem, FavoritesStore,
    MoodType, SqliteSlotRepository, SystemClock,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SaveKind {
    Verse,
    Hadith,
}

pub fn save(config: &CoreConfig, content_path: &Path, kind: SaveKind, mood: &str) -> Result<()> {
    let mood = MoodType::parse(mood)?;
    let raw = std::fs::read_to_string(content_path)
        .with_context(|| format!("failed to read {}", content_path.display()))?;
    let content = parse_generated_content(&raw)?;

    let now = SystemClock.now_ms();
    let item = match kind {
        SaveKind::Verse => FavoriteItem::verse(content.quran, mood, now),
        SaveKind::Hadith => FavoriteItem::hadith(content.hadith, mood, now),
    };

    let conn = open_profile(config)?;
    let mut store = FavoritesStore::load(SqliteSlotRepository::new(&conn))?;
    let replaced = store.is_saved(item.id());
    let id = item.id().to_string();
    store.save(item)?;
    if replaced {
        println!("{id} (replaced)");
    } else {
        println!("{id}");
    }
    Ok(())
}

pub fn remove(config: &CoreConfig, id: &str) -> Result<()> {
    let conn = open_profile(config)?;
    let mut store = FavoritesStore::load(SqliteSlotRepository::new(&conn))?;
    let existed = store.is_saved(id);
    store.remove(id)?;
    if existed {
        println!("Removed {id}.");
    } else {
        println!("{id} was not saved; nothing changed.");
    }
    Ok(())
}

pub fn list(config: &CoreConfig) -> Result<()> {
    let conn = open_profile(config)?;
    let store = FavoritesStore::load(SqliteSlotRepository::new(&conn))?;
    let items = store.list();
    if items.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for item in items {
        let title = match item.content() {
            FavoriteContent::Quran(verse) => format!(
                "QS. {} {}:{}  {}",
                verse.surah_name,
                verse.surah_number,
                verse.ayah_number,
                verse.audio_url()
            ),
            FavoriteContent::Hadith(hadith) => hadith.source.clone(),
        };
        println!(
            "{}  {:<6} {:<13} {}  {}",
            item.id(),
            item.kind().as_str(),
            item.mood_context.label(),
            format_timestamp(item.timestamp),
            title
        );
    }
    Ok(())
}

use super::{format_timestamp, open_profile};
use anyhow::Result;
use qalbu_core::{
    all_time_stats, journal_note, monthly_stats, Clock, CoreConfig, MoodLogStore, MoodType,
    SqliteSlotRepository, SystemClock,
};

pub fn catalog() {
    for mood in MoodType::ALL {
        println!("{:<13} {}", mood.label(), mood.description());
    }
}

pub fn log(config: &CoreConfig, mood: &str) -> Result<()> {
    let mood = MoodType::parse(mood)?;
    let conn = open_profile(config)?;
    let mut store = MoodLogStore::load(SqliteSlotRepository::new(&conn), SystemClock)?;
    let entry = store.append(mood)?;
    println!("{}", entry.id);
    Ok(())
}

pub fn note(config: &CoreConfig, id: &str, text: &str) -> Result<()> {
    let Some(note) = journal_note(text) else {
        println!("Note is blank; nothing changed.");
        return Ok(());
    };
    let conn = open_profile(config)?;
    let mut store = MoodLogStore::load(SqliteSlotRepository::new(&conn), SystemClock)?;
    if store.attach_note(id, note)? {
        println!("Note saved.");
    } else {
        println!("No entry with id {id}; nothing changed.");
    }
    Ok(())
}

pub fn history(config: &CoreConfig) -> Result<()> {
    let conn = open_profile(config)?;
    let store = MoodLogStore::load(SqliteSlotRepository::new(&conn), SystemClock)?;
    let entries = store.list();
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {:<13} {}  {}",
            entry.id,
            entry.mood.label(),
            format_timestamp(entry.timestamp),
            entry.note.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub fn clear(config: &CoreConfig) -> Result<()> {
    let conn = open_profile(config)?;
    let mut store = MoodLogStore::load(SqliteSlotRepository::new(&conn), SystemClock)?;
    let removed = store.len();
    store.clear()?;
    println!("Cleared {removed} entries.");
    Ok(())
}

pub fn stats(config: &CoreConfig) -> Result<()> {
    let conn = open_profile(config)?;
    let store = MoodLogStore::load(SqliteSlotRepository::new(&conn), SystemClock)?;
    let history = store.list();

    let Some(all_time) = all_time_stats(&history) else {
        println!("No history yet.");
        return Ok(());
    };
    println!(
        "total={} dominant={}",
        all_time.total,
        all_time.dominant.label()
    );

    let monthly = monthly_stats(&history, SystemClock.now_ms());
    println!("last 30 days: total={} max={}", monthly.total, monthly.max);
    for (mood, count) in monthly.counts.iter().filter(|(_, count)| **count > 0) {
        println!("  {:<13} {count}", mood.label());
    }
    Ok(())
}

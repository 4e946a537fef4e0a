use super::open_profile;
use anyhow::Result;
use qalbu_core::{find_practice, ChecklistStore, CoreConfig, SqliteSlotRepository, DAILY_PRACTICES};

pub fn toggle(config: &CoreConfig, id: &str) -> Result<()> {
    let conn = open_profile(config)?;
    let mut store = ChecklistStore::load(SqliteSlotRepository::new(&conn))?;
    let checked = store.toggle(id)?;
    let label = find_practice(id).map_or(id, |practice| practice.label);
    println!("{} {label}", if checked { "[x]" } else { "[ ]" });
    Ok(())
}

pub fn list(config: &CoreConfig) -> Result<()> {
    let conn = open_profile(config)?;
    let store = ChecklistStore::load(SqliteSlotRepository::new(&conn))?;
    for practice in DAILY_PRACTICES {
        let mark = if store.is_checked(practice.id) { "[x]" } else { "[ ]" };
        println!("{mark} {:<20} {}  {}", practice.id, practice.label, practice.description);
    }
    let progress = store.progress(DAILY_PRACTICES);
    println!("{}/{} done", progress.done, progress.total);
    Ok(())
}

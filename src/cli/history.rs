use anyhow::Result;

use daynote::clock::SystemClock;
use daynote::config::DaynoteConfig;
use daynote::note::cache::DailyCache;
use daynote::note::history::{last7, seed_if_missing};

/// Display the last 7 days of notes, backfilling days the app never saw.
pub fn run(config: &DaynoteConfig, json: bool) -> Result<()> {
    let storage = super::open_storage(config)?;
    let table = super::load_table(config)?;
    let cache = DailyCache::new(storage);
    let clock = SystemClock;

    seed_if_missing(&cache, &table, &clock)?;
    let records = last7(&cache, &clock);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        println!("{}", record.label);
        println!("  {}", record.note);
        println!();
    }
    Ok(())
}

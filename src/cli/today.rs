use anyhow::Result;

use daynote::clock::SystemClock;
use daynote::config::DaynoteConfig;
use daynote::note::cache::DailyCache;
use daynote::note::history::date_label;
use daynote::note::todays_note;

/// Display today's note, assigning it on the first access of the day.
pub fn run(config: &DaynoteConfig) -> Result<()> {
    let storage = super::open_storage(config)?;
    let table = super::load_table(config)?;
    let cache = DailyCache::new(storage);

    let (date, note) = todays_note(&cache, &table, &SystemClock)?;

    println!("{note}");
    println!();
    println!("{}", date_label(date));
    Ok(())
}

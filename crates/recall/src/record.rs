use anyhow::Result;

use recall_core::history::SearchHistory;

use crate::config::Config;
use crate::db;
use crate::sqlite_slot::SqliteSlot;

pub async fn run_record(config: &Config, query: &str) -> Result<()> {
    let normalized = query.trim();
    if normalized.is_empty() {
        println!("Nothing to record.");
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let history = SearchHistory::with_limits(
        SqliteSlot::new(pool.clone()),
        config.history.max_items,
        config.history.seed.clone(),
    );

    history.record(query).await?;
    println!("Recorded \"{}\".", normalized);

    pool.close().await;
    Ok(())
}

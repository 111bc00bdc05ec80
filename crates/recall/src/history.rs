use anyhow::Result;

use recall_core::history::SearchHistory;

use crate::config::Config;
use crate::db;
use crate::sqlite_slot::SqliteSlot;

pub async fn run_history(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let history = SearchHistory::with_limits(
        SqliteSlot::new(pool.clone()),
        config.history.max_items,
        config.history.seed.clone(),
    );

    let entries = history.all().await;
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry);
    }

    pool.close().await;
    Ok(())
}

pub async fn run_clear(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let history = SearchHistory::with_limits(
        SqliteSlot::new(pool.clone()),
        config.history.max_items,
        config.history.seed.clone(),
    );

    history.clear().await?;
    println!(
        "History reset to {} default searches.",
        history.seed().len()
    );

    pool.close().await;
    Ok(())
}

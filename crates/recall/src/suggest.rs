use anyhow::Result;

use recall_core::highlight::highlight;
use recall_core::history::SearchHistory;
use recall_core::suggest::suggest;

use crate::config::Config;
use crate::db;
use crate::sqlite_slot::SqliteSlot;

pub async fn run_suggest(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    plain: bool,
    json: bool,
    record: bool,
) -> Result<()> {
    let pool = db::connect(config).await?;
    let history = SearchHistory::with_limits(
        SqliteSlot::new(pool.clone()),
        config.history.max_items,
        config.history.seed.clone(),
    );

    let entries = history.all().await;
    let limit = limit.unwrap_or(config.history.suggestion_limit);
    let suggestions = suggest(&entries, query, limit);

    if json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        for suggestion in &suggestions {
            if plain {
                println!("{}", suggestion);
            } else {
                println!("{}", render_markers(suggestion, query));
            }
        }
    }

    // The submit path of the original search box: suggest on keystroke,
    // record on submit.
    if record {
        history.record(query).await?;
    }

    pool.close().await;
    Ok(())
}

/// Wrap matched spans in `>>>`/`<<<` markers for terminal display.
fn render_markers(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                format!(">>>{}<<<", segment.text)
            } else {
                segment.text
            }
        })
        .collect()
}

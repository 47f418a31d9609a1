use std::io;
use std::path::Path;

use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// Directory under the web root holding one subdirectory per game.
pub const GAMES_DIR: &str = "games";

/// Marker file whose presence makes a subdirectory count as installed.
pub const CONFIG_MARKER: &str = "data/config.json";

/// Scan `<root>/games` for installed games.
///
/// A game is a directory (symlinks followed) containing `data/config.json`.
/// Names come back sorted; entries with non-UTF-8 names are skipped since
/// they cannot appear in the JSON payload. The scan is fresh on every call,
/// nothing is cached between requests.
pub async fn installed_games(root: &Path) -> io::Result<Vec<String>> {
    let games_dir = root.join(GAMES_DIR);
    let mut entries = tokio::fs::read_dir(&games_dir).await?;
    let mut games = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        // metadata() follows symlinks, so a symlinked game directory counts
        let Ok(meta) = tokio::fs::metadata(entry.path()).await else {
            continue;
        };
        if !meta.is_dir() {
            continue;
        }
        let marker = entry.path().join(CONFIG_MARKER);
        if tokio::fs::try_exists(&marker).await.unwrap_or(false) {
            games.push(name);
        }
    }

    games.sort_unstable();
    Ok(games)
}

/// GET `/list-games` (path prefix): JSON array of installed game names.
///
/// Enumeration failure, including an absent `games` directory, is a 500. An
/// empty array here would hide a misconfigured web root from the client.
pub(crate) async fn list_games(state: &AppState) -> Result<Json<Vec<String>>, AppError> {
    match installed_games(state.web_root()).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            tracing::error!(
                error = %e,
                root = %state.config.web_root,
                "Failed to enumerate games"
            );
            Err(AppError::Internal("failed to list games".to_string()))
        },
    }
}

//! Fetching the published data tree.
use avalon_core::{GameRecord, GameSummary, GamesFile, TournamentInfo};
use avalon_core::partition::MANIFEST_FILE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::paths::data_path;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch `{base}/data/{relative}` as text.
///
/// # Errors
/// Fails on network errors, non-2xx statuses and non-string bodies.
#[allow(clippy::future_not_send)]
pub async fn fetch_text(relative: &str) -> Result<String, LoadError> {
    let url = data_path(relative);
    let request_err =
        |err: JsValue| LoadError::Request(format!("{url}: {}", dom::js_error_message(&err)));

    let response = dom::fetch(&url).await.map_err(request_err)?;
    if !response.ok() {
        return Err(LoadError::Request(format!(
            "{url}: HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    dom::response_text(&response)
        .await
        .map_err(request_err)?
        .as_string()
        .ok_or(LoadError::Utf8)
}

#[allow(clippy::future_not_send)]
async fn fetch_json<T: DeserializeOwned>(relative: &str) -> Result<T, LoadError> {
    let text = fetch_text(relative).await?;
    Ok(serde_json::from_str(&text)?)
}

/// # Errors
/// See [`fetch_text`]; also fails when the manifest does not parse.
#[allow(clippy::future_not_send)]
pub async fn load_manifest() -> Result<Vec<TournamentInfo>, LoadError> {
    fetch_json(MANIFEST_FILE).await
}

/// # Errors
/// See [`fetch_text`]; also fails when the index does not parse.
#[allow(clippy::future_not_send)]
pub async fn load_index(info: &TournamentInfo) -> Result<Vec<GameSummary>, LoadError> {
    fetch_json(&info.index_path()).await
}

/// Fetch a tournament's full records and pick out one game.
///
/// # Errors
/// See [`find_game`].
#[allow(clippy::future_not_send)]
pub async fn load_game(
    info: &TournamentInfo,
    game_id: &str,
) -> Result<Option<GameRecord>, LoadError> {
    let text = fetch_text(&info.games_path()).await?;
    find_game(&text, game_id)
}

/// First game in an `all_games.json` body whose `game_id` matches.
///
/// Only the matching game is decoded as a [`GameRecord`], so an odd record
/// elsewhere in the bundle does not block the rest.
///
/// # Errors
/// Fails when the body is not a games envelope or the matching game does not
/// decode.
pub fn find_game(text: &str, game_id: &str) -> Result<Option<GameRecord>, LoadError> {
    let bundle: GamesFile<Value> = serde_json::from_str(text)?;
    bundle
        .games
        .into_iter()
        .find(|game| game.get("game_id").and_then(Value::as_str) == Some(game_id))
        .map(serde_json::from_value)
        .transpose()
        .map_err(LoadError::from)
}

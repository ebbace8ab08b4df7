//! Deep-link bookkeeping between the query string and the viewer cursor.
use avalon_core::{DeepLink, ViewerCursor};

/// Tournament to open once the manifest has `manifest_len` entries.
///
/// The link is consumed unless it also names a game, in which case it stays
/// pending until that tournament's index arrives. Out-of-range links are
/// dropped.
pub fn take_tournament_link(
    pending: &mut Option<DeepLink>,
    manifest_len: usize,
) -> Option<usize> {
    let link = pending.take()?;
    let tournament = link.tournament_within(manifest_len)?;
    if link.game.is_some() {
        *pending = Some(link);
    }
    Some(tournament)
}

/// Game to open once the selected tournament's index has `index_len` entries.
pub fn take_game_link(pending: &mut Option<DeepLink>, index_len: usize) -> Option<usize> {
    pending.take()?.game_within(index_len)
}

/// Query string to write back after a game is opened.
pub fn query_for(cursor: &ViewerCursor) -> Option<String> {
    cursor.game.map(|_| cursor.deep_link().to_query_string())
}

/// Deep link carried by the page URL on first load.
#[cfg(target_arch = "wasm32")]
pub fn initial_deep_link() -> Option<DeepLink> {
    match crate::dom::location_search() {
        Ok(search) => Some(DeepLink::from_query_str(&search)).filter(|link| !link.is_empty()),
        Err(err) => {
            log::warn!(
                "could not read location: {}",
                crate::dom::js_error_message(&err)
            );
            None
        }
    }
}

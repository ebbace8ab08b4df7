use avalon_core::{GameCursor, GameSummary, TournamentInfo, ViewerCursor};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::loader;
use crate::app::routing;
use crate::app::state::AppState;
use crate::dom;
use crate::router::Route;

#[derive(Clone)]
pub struct AppHandlers {
    pub select_tournament: Callback<usize>,
    pub back: Callback<()>,
    pub select_game: Callback<usize>,
    pub navigate: Callback<GameCursor>,
    pub toggle_sidebar: Callback<()>,
    pub go_home: Callback<()>,
    pub open_guide: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            select_tournament: build_select_tournament(state),
            back: build_back(state),
            select_game: build_select_game(state),
            navigate: build_navigate(state),
            toggle_sidebar: build_toggle_sidebar(state),
            go_home: build_push(navigator.clone(), Route::Home),
            open_guide: build_push(navigator, Route::Players),
        }
    }
}

fn build_select_tournament(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |idx: usize| {
        state.pending_link.borrow_mut().take();
        open_tournament(&state, Rc::clone(&*state.manifest), idx);
    })
}

fn build_back(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.pending_link.borrow_mut().take();
        state.index_fetches.borrow_mut().invalidate();
        clear_game(&state);
        state.cursor.set(ViewerCursor::default());
        state.games.set(Rc::new(Vec::new()));
        state.index_loading.set(false);
    })
}

fn build_select_game(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |idx: usize| {
        state.pending_link.borrow_mut().take();
        let (Some(tournament), Some(info)) = (state.cursor.tournament, state.tournament()) else {
            return;
        };
        let Some(summary) = state.games.get(idx) else {
            return;
        };
        open_game(&state, tournament, info.clone(), idx, summary.clone());
    })
}

fn build_navigate(state: &AppState) -> Callback<GameCursor> {
    let cursor = state.cursor.clone();
    Callback::from(move |game_view: GameCursor| {
        cursor.set(ViewerCursor {
            game_view,
            ..*cursor
        });
    })
}

fn build_toggle_sidebar(state: &AppState) -> Callback<()> {
    let collapsed = state.sidebar_collapsed.clone();
    Callback::from(move |()| collapsed.set(!*collapsed))
}

fn build_push(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

fn clear_game(state: &AppState) {
    state.record_fetches.borrow_mut().invalidate();
    state.record.set(None);
    state.record_loading.set(false);
}

/// Select a tournament and fetch its index.
///
/// A pending deep link naming a game in this tournament is honoured once the
/// index arrives.
pub(crate) fn open_tournament(state: &AppState, manifest: Rc<Vec<TournamentInfo>>, idx: usize) {
    let Some(info) = manifest.get(idx).cloned() else {
        return;
    };
    let mut cursor = ViewerCursor::default();
    cursor.select_tournament(idx);
    state.cursor.set(cursor);
    clear_game(state);
    state.games.set(Rc::new(Vec::new()));
    state.index_loading.set(true);

    let ticket = state.index_fetches.borrow_mut().issue();
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match loader::load_index(&info).await {
            Ok(games) => {
                if !state.index_fetches.borrow().is_current(ticket) {
                    log::debug!("dropping superseded index for {}", info.path);
                    return;
                }
                let games = Rc::new(games);
                state.games.set(Rc::clone(&games));
                state.index_loading.set(false);
                let linked =
                    routing::take_game_link(&mut state.pending_link.borrow_mut(), games.len());
                if let Some(game) = linked {
                    open_game(&state, idx, info, game, games[game].clone());
                }
            }
            Err(err) => {
                if state.index_fetches.borrow().is_current(ticket) {
                    state.pending_link.borrow_mut().take();
                }
                dom::console_error(&format!("Failed to load games for {}: {err}", info.path));
            }
        }
    });
}

/// Select a game, rewrite the query string and fetch the full record.
///
/// A failed fetch leaves the loading indicator up.
pub(crate) fn open_game(
    state: &AppState,
    tournament: usize,
    info: TournamentInfo,
    idx: usize,
    summary: GameSummary,
) {
    let mut cursor = ViewerCursor::default();
    cursor.select_tournament(tournament);
    cursor.select_game(idx);
    state.cursor.set(cursor);
    if let Some(query) = routing::query_for(&cursor) {
        if let Err(err) = dom::replace_query(&query) {
            log::warn!("could not update the URL: {}", dom::js_error_message(&err));
        }
    }
    state.record_loading.set(true);

    let ticket = state.record_fetches.borrow_mut().issue();
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match loader::load_game(&info, &summary.id).await {
            Ok(found) => {
                if !state.record_fetches.borrow().is_current(ticket) {
                    log::debug!("dropping superseded record {}", summary.id);
                    return;
                }
                match found {
                    Some(record) => state.record.set(Some(Rc::new(record))),
                    None => log::warn!("{} is not in {}", summary.id, info.games_path()),
                }
                state.record_loading.set(false);
            }
            Err(err) => {
                dom::console_error(&format!("Failed to load game {}: {err}", summary.id));
            }
        }
    });
}

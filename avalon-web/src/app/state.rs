use avalon_core::{
    DeepLink, FetchGeneration, GameRecord, GameSummary, TournamentInfo, ViewerCursor,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub manifest: UseStateHandle<Rc<Vec<TournamentInfo>>>,
    pub games: UseStateHandle<Rc<Vec<GameSummary>>>,
    pub record: UseStateHandle<Option<Rc<GameRecord>>>,
    pub cursor: UseStateHandle<ViewerCursor>,
    pub manifest_loading: UseStateHandle<bool>,
    pub index_loading: UseStateHandle<bool>,
    pub record_loading: UseStateHandle<bool>,
    pub sidebar_collapsed: UseStateHandle<bool>,
    /// Query-string selection still waiting for its data.
    pub pending_link: Rc<RefCell<Option<DeepLink>>>,
    pub index_fetches: Rc<RefCell<FetchGeneration>>,
    pub record_fetches: Rc<RefCell<FetchGeneration>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        manifest: use_state(|| Rc::new(Vec::<TournamentInfo>::new())),
        games: use_state(|| Rc::new(Vec::<GameSummary>::new())),
        record: use_state(|| None::<Rc<GameRecord>>),
        cursor: use_state(ViewerCursor::default),
        manifest_loading: use_state(|| true),
        index_loading: use_state(|| false),
        record_loading: use_state(|| false),
        sidebar_collapsed: use_state(|| false),
        pending_link: use_mut_ref(|| None::<DeepLink>),
        index_fetches: use_mut_ref(FetchGeneration::new),
        record_fetches: use_mut_ref(FetchGeneration::new),
    }
}

impl AppState {
    /// Manifest entry for the selected tournament.
    #[must_use]
    pub fn tournament(&self) -> Option<&TournamentInfo> {
        self.cursor.tournament.and_then(|idx| self.manifest.get(idx))
    }
}

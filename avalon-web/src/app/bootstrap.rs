#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::app::{handlers, routing};
#[cfg(any(target_arch = "wasm32", test))]
use avalon_core::TournamentInfo;
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

/// Publish the manifest and follow a pending tournament deep link.
#[cfg(any(target_arch = "wasm32", test))]
fn apply_manifest(state: &AppState, manifest: Vec<TournamentInfo>) {
    let manifest = Rc::new(manifest);
    state.manifest.set(Rc::clone(&manifest));
    state.manifest_loading.set(false);
    let linked =
        routing::take_tournament_link(&mut state.pending_link.borrow_mut(), manifest.len());
    if let Some(idx) = linked {
        handlers::open_tournament(state, manifest, idx);
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();

    use_effect_with((), move |()| {
        *state.pending_link.borrow_mut() = routing::initial_deep_link();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::app::loader::load_manifest().await {
                Ok(manifest) => apply_manifest(&state, manifest),
                Err(err) => {
                    crate::dom::console_error(&format!("Failed to load tournaments: {err}"));
                }
            }
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalon_core::{DeepLink, ReasoningLevel};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn manifest() -> Vec<TournamentInfo> {
        vec![TournamentInfo {
            name: "A: Cross-Game Learning (50 games)".to_string(),
            path: "datasets/A_cross_game_learning".to_string(),
            players: 5,
            games: 50,
            reasoning: ReasoningLevel::Low,
            has_memory: true,
        }]
    }

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            *app_state.pending_link.borrow_mut() =
                Some(DeepLink::from_query_str("?tournament=4"));
            apply_manifest(&app_state, manifest());
            assert!(app_state.pending_link.borrow().is_none());
        }
        Html::default()
    }

    #[test]
    fn manifest_drops_out_of_range_links() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
    }
}

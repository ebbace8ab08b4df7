//! One recorded game: header, players, mission bar, phase tabs and the
//! content pane for the current cursor.
mod panes;

use avalon_core::{GameCursor, GameRecord, ViewPhase};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::player_card::PlayerCard;
use crate::i18n;

#[derive(Properties)]
pub struct Props {
    pub record: Rc<GameRecord>,
    pub cursor: GameCursor,
    pub on_navigate: Callback<GameCursor>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        // Records are immutable once loaded, so identity is enough.
        Rc::ptr_eq(&self.record, &other.record)
            && self.cursor == other.cursor
            && self.on_navigate == other.on_navigate
    }
}

/// Callback that applies a cursor move and emits the result when it changed.
fn navigate_with<F>(props: &Props, apply: F) -> Callback<MouseEvent>
where
    F: Fn(&mut GameCursor, &GameRecord) -> bool + 'static,
{
    let record = Rc::clone(&props.record);
    let cursor = props.cursor;
    let on_navigate = props.on_navigate.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = cursor;
        if apply(&mut next, &record) {
            on_navigate.emit(next);
        }
    })
}

#[function_component(GameViewer)]
pub fn game_viewer(props: &Props) -> Html {
    let on_select_proposal = {
        let record = Rc::clone(&props.record);
        let cursor = props.cursor;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |idx: usize| {
            let mut next = cursor;
            if next.select_proposal(&record, idx) {
                on_navigate.emit(next);
            }
        })
    };

    html! {
        <section class="game-viewer">
            { render_header(&props.record) }
            { render_navigation(props) }
            <div class="game-viewer__content" data-phase={props.cursor.phase.key()}>
                { panes::render_pane(&props.record, props.cursor.view(&props.record), &on_select_proposal) }
            </div>
        </section>
    }
}

fn render_header(record: &GameRecord) -> Html {
    let count = record.players.len().to_string();
    let mut player_vars = BTreeMap::new();
    player_vars.insert("count", count.as_str());
    let reasoning = record.config.reasoning_effort.as_str();
    let mut reasoning_vars = BTreeMap::new();
    reasoning_vars.insert("level", reasoning);
    let mut winner_vars = BTreeMap::new();
    winner_vars.insert("team", record.winner.key());

    html! {
        <header class="game-header">
            <div class="game-header__title">
                <h1>{ &record.game_id }</h1>
                <p class="game-header__meta">
                    <span class="game-header__players">{ i18n::tr("viewer.players", Some(&player_vars)) }</span>
                    if !reasoning.is_empty() {
                        <>
                            { " · " }
                            <span class="game-header__reasoning">{ i18n::tr("viewer.reasoning", Some(&reasoning_vars)) }</span>
                        </>
                    }
                </p>
            </div>
            <div class={classes!("winner-badge", format!("team-{}", record.winner.key()))}>
                { i18n::tr("viewer.winner", Some(&winner_vars)) }
            </div>
            <div class="game-header__players-list">
                { for record.players.iter().map(|player| html! {
                    <PlayerCard key={player.name.clone()} player={player.clone()} />
                }) }
            </div>
        </header>
    }
}

fn render_navigation(props: &Props) -> Html {
    let record = &props.record;
    let cursor = props.cursor;

    let mission_buttons = record.missions.iter().enumerate().map(|(idx, mission)| {
        let status = mission.mission_result.map_or("not-played", |r| r.key());
        let title = mission
            .mission_result
            .map_or_else(|| i18n::t("viewer.not_played"), |r| i18n::t(&format!("results.{}", r.key())));
        let current = cursor.phase.is_mission_phase() && cursor.mission == idx;
        let onclick = navigate_with(props, move |next, record| next.select_mission(record, idx));
        html! {
            <button
                type="button"
                key={idx}
                class={classes!("mission-button", format!("mission-{status}"), current.then_some("is-current"))}
                {title}
                {onclick}
            >
                { (idx + 1).to_string() }
            </button>
        }
    });

    let assassin_button = record.assassin_phase.as_ref().map(|_| {
        let current = cursor.phase == ViewPhase::Assassin;
        let onclick = navigate_with(props, |next, record| next.select_assassin(record));
        html! {
            <button
                type="button"
                class={classes!("assassin-button", current.then_some("is-current"))}
                title={i18n::t("viewer.assassin_control")}
                aria-label={i18n::t("viewer.assassin_control")}
                {onclick}
            >
                { "⚔" }
            </button>
        }
    });

    let phase_tabs = cursor.phase_tabs_visible().then(|| {
        html! {
            <div class="phase-tabs" role="tablist">
                { for ViewPhase::MISSION_TABS.into_iter().map(|phase| {
                    let active = cursor.phase == phase;
                    let onclick = navigate_with(props, move |next, _| next.select_phase(phase));
                    html! {
                        <button
                            type="button"
                            role="tab"
                            key={phase.key()}
                            aria-selected={active.to_string()}
                            class={classes!("phase-tab", active.then_some("is-active"))}
                            {onclick}
                        >
                            { i18n::t(&format!("phases.{}", phase.key())) }
                        </button>
                    }
                }) }
            </div>
        }
    });

    html! {
        <nav class="mission-bar">
            <span class="mission-bar__label">{ i18n::t("viewer.mission") }</span>
            <div class="mission-bar__buttons">
                { for mission_buttons }
                { assassin_button }
            </div>
            { phase_tabs }
        </nav>
    }
}

use avalon_core::{
    GameCursor, GameRecord, GameSummary, ReasoningLevel, Team, TournamentInfo, ViewPhase,
    VoteChoice,
};
use avalon_web::components::game_selector::{GameSelector, Props as SelectorProps};
use avalon_web::components::game_viewer::{GameViewer, Props as ViewerProps};
use avalon_web::components::player_card::{PlayerCard, Props as PlayerCardProps};
use futures::executor::block_on;
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

const GOOD_WIN: &str = include_str!("../../avalon-core/tests/fixtures/good_win_5p.json");
const ASSASSIN_WIN: &str = include_str!("../../avalon-core/tests/fixtures/assassin_win_6p.json");
const EVIL_FAILS: &str = include_str!("../../avalon-core/tests/fixtures/evil_fails_5p.json");

fn record(json: &str) -> Rc<GameRecord> {
    Rc::new(GameRecord::from_json(json).unwrap())
}

fn render_viewer(record: &Rc<GameRecord>, cursor: GameCursor) -> String {
    let props = ViewerProps {
        record: Rc::clone(record),
        cursor,
        on_navigate: Callback::noop(),
    };
    block_on(LocalServerRenderer::<GameViewer>::with_props(props).render())
}

fn tournament(name: &str, path: &str, players: usize, games: usize) -> TournamentInfo {
    TournamentInfo {
        name: name.to_string(),
        path: path.to_string(),
        players,
        games,
        reasoning: ReasoningLevel::Low,
        has_memory: true,
    }
}

fn manifest() -> Rc<Vec<TournamentInfo>> {
    Rc::new(vec![
        tournament(
            "A: Cross-Game Learning (50 games)",
            "datasets/A_cross_game_learning",
            5,
            50,
        ),
        tournament("B: Tournament 5p (10 games)", "datasets/B_tournament_5p", 5, 10),
        tournament("B: Tournament 6p (10 games)", "datasets/B_tournament_6p", 6, 10),
        tournament("C: Individual 7p (3 games)", "datasets/C_individual_7p", 7, 3),
    ])
}

fn selector_props() -> SelectorProps {
    SelectorProps {
        manifest: manifest(),
        games: Rc::new(Vec::new()),
        selected_tournament: None,
        selected_game: None,
        manifest_loading: false,
        index_loading: false,
        collapsed: false,
        on_select_tournament: Callback::noop(),
        on_select_game: Callback::noop(),
        on_back: Callback::noop(),
        on_toggle: Callback::noop(),
    }
}

#[test]
fn player_card_shows_role_and_team() {
    let game = record(ASSASSIN_WIN);
    let props = PlayerCardProps {
        player: game.players[4].clone(),
    };
    let html = block_on(LocalServerRenderer::<PlayerCard>::with_props(props).render());
    assert!(html.contains("Eve"));
    assert!(html.contains("Morgana"));
    assert!(html.contains("team-evil"));
}

#[test]
fn selector_groups_tournaments_by_prefix() {
    let html = block_on(LocalServerRenderer::<GameSelector>::with_props(selector_props()).render());
    let a = html.find("A: Cross-Game Learning<").unwrap();
    let b = html.find("B: Tournaments (Memory)").unwrap();
    let c = html.find("C: Individual Games (No Memory)").unwrap();
    assert!(a < b && b < c);
    assert!(html.contains("Tournament 5p (10 games)"));
    assert!(html.contains("Tournament 6p (10 games)"));
    assert_eq!(html.matches("class=\"tournament-button\"").count(), 4);
    assert!(!html.contains("D: Reasoning Comparison"));
}

#[test]
fn selector_shows_loading_until_manifest_arrives() {
    let props = SelectorProps {
        manifest: Rc::new(Vec::new()),
        manifest_loading: true,
        ..selector_props()
    };
    let html = block_on(LocalServerRenderer::<GameSelector>::with_props(props).render());
    assert!(html.contains("Loading..."));
}

#[test]
fn selector_lists_games_of_the_selected_tournament() {
    let games = vec![
        GameSummary {
            id: "g1".to_string(),
            winner: Some(Team::Good),
            players: 6,
        },
        GameSummary {
            id: "g2".to_string(),
            winner: Some(Team::Evil),
            players: 6,
        },
        GameSummary {
            id: "g3".to_string(),
            winner: None,
            players: 6,
        },
    ];
    let props = SelectorProps {
        games: Rc::new(games),
        selected_tournament: Some(2),
        selected_game: Some(1),
        ..selector_props()
    };
    let html = block_on(LocalServerRenderer::<GameSelector>::with_props(props).render());
    assert!(html.contains("6p · 10g · low · mem"));
    assert!(html.contains("Select Game"));
    assert!(html.contains("Back"));
    assert!(html.contains("game-button winner-good"));
    assert!(html.contains("game-button winner-evil is-selected"));
    assert!(html.contains("Game 2 - evil wins"));
    assert!(html.contains("game-button winner-undecided"));
    assert!(html.contains("Game 3 - no winner recorded"));
    assert!(!html.contains("tournament-button"));
}

#[test]
fn selector_shows_spinner_while_index_loads() {
    let props = SelectorProps {
        selected_tournament: Some(0),
        index_loading: true,
        ..selector_props()
    };
    let html = block_on(LocalServerRenderer::<GameSelector>::with_props(props).render());
    assert!(html.contains("Loading..."));
    assert!(!html.contains("game-grid"));
}

#[test]
fn collapsed_selector_only_offers_expand() {
    let props = SelectorProps {
        collapsed: true,
        ..selector_props()
    };
    let html = block_on(LocalServerRenderer::<GameSelector>::with_props(props).render());
    assert!(html.contains("Expand sidebar"));
    assert!(!html.contains("Tournaments"));
}

#[test]
fn overview_shows_header_without_phase_tabs() {
    let game = record(GOOD_WIN);
    let html = render_viewer(&game, GameCursor::default());
    assert!(html.contains("game_good_5p_001"));
    assert!(html.contains(&format!("{} players", game.config.num_players)));
    assert!(html.contains("low reasoning"));
    assert!(html.contains("Select a mission to view gameplay"));
    assert!(!html.contains("phase-tabs"));
    assert!(html.contains("assassin-button"));
    assert_eq!(html.matches("mission-button mission-success").count(), 3);
}

#[test]
fn header_omits_reasoning_when_not_recorded() {
    let mut stripped = GameRecord::from_json(GOOD_WIN).unwrap();
    stripped.config.model.clear();
    stripped.config.reasoning_effort.clear();
    let html = render_viewer(&Rc::new(stripped), GameCursor::default());
    assert!(html.contains("game_good_5p_001"));
    assert!(!html.contains("game-header__reasoning"));
    assert!(!html.contains("reasoning</span>"));
}

#[test]
fn winner_badge_follows_the_assassin_verdict() {
    let hit = record(ASSASSIN_WIN);
    assert!(hit.assassin_phase.as_ref().unwrap().correct);
    let html = render_viewer(&hit, GameCursor::default());
    assert!(html.contains("winner-badge team-evil"));
    assert!(html.contains("evil wins"));

    let miss = record(GOOD_WIN);
    assert!(!miss.assassin_phase.as_ref().unwrap().correct);
    let html = render_viewer(&miss, GameCursor::default());
    assert!(html.contains("winner-badge team-good"));
    assert!(html.contains("good wins"));
}

#[test]
fn assassin_pane_shows_guess_and_verdict() {
    let game = record(ASSASSIN_WIN);
    let mut cursor = GameCursor::default();
    assert!(cursor.select_assassin(&game));
    let html = render_viewer(&game, cursor);
    assert!(html.contains("Evil Team Discussion"));
    assert!(html.contains("Finn"));
    assert!(html.contains("Alice never picked an evil player."));
    assert!(html.contains("Correct - Evil Wins"));
    assert!(!html.contains("phase-tabs"));
    assert!(html.contains("assassin-button is-current"));

    let game = record(GOOD_WIN);
    let mut cursor = GameCursor::default();
    cursor.select_assassin(&game);
    let html = render_viewer(&game, cursor);
    assert!(html.contains("Wrong - Good Wins"));
}

#[test]
fn voting_pane_shows_the_selected_proposals_votes() {
    let game = record(EVIL_FAILS);
    let mut cursor = GameCursor::default();
    assert!(cursor.select_mission(&game, 2));
    assert!(cursor.select_phase(ViewPhase::Voting));
    assert!(cursor.select_proposal(&game, 1));
    let html = render_viewer(&game, cursor);

    let votes = &game.missions[2].proposals[1].votes;
    let approvals = votes
        .iter()
        .filter(|v| v.vote == VoteChoice::Approve)
        .count();
    assert_eq!(approvals, 4);
    assert_eq!(html.matches("vote-row vote-approve").count(), approvals);
    assert_eq!(
        html.matches("vote-row vote-reject").count(),
        votes.len() - approvals
    );
    assert!(html.contains("phase-tab is-active"));
    assert!(html.contains("proposal-chip is-active"));
    assert!(html.contains("mission-button mission-fail is-current"));
}

#[test]
fn forced_proposal_shows_auto_approved_notice() {
    let game = record(EVIL_FAILS);
    let mut cursor = GameCursor::default();
    cursor.select_mission(&game, 1);
    cursor.select_phase(ViewPhase::Voting);
    assert!(cursor.select_proposal(&game, 4));
    let html = render_viewer(&game, cursor);
    assert!(html.contains("5th proposal - auto-approved"));
    assert!(!html.contains("vote-row"));
    assert_eq!(html.matches("class=\"proposal-chip").count(), 5);
}

#[test]
fn proposal_pane_skips_unknown_team_members() {
    let mut game = GameRecord::from_json(GOOD_WIN).unwrap();
    game.missions[0].proposals[0]
        .team_members
        .push("Zed".to_string());
    let game = Rc::new(game);
    let mut cursor = GameCursor::default();
    cursor.select_mission(&game, 0);
    cursor.select_phase(ViewPhase::Proposal);
    let html = render_viewer(&game, cursor);
    assert!(html.contains("Leader"));
    assert!(html.contains("result-badge result-approved"));
    assert!(!html.contains("Zed"));
    let team = html.split("proposal-card__team").nth(1).unwrap();
    assert_eq!(team.matches("class=\"player-card team-").count(), 2);
}

#[test]
fn execution_pane_shows_result_and_cards() {
    let game = record(EVIL_FAILS);
    let mut cursor = GameCursor::default();
    cursor.select_mission(&game, 0);
    cursor.select_phase(ViewPhase::Execution);
    let html = render_viewer(&game, cursor);
    assert!(html.contains("FAIL"));
    assert!(html.contains("1 fail card"));
    assert!(html.contains("quest-action quest-fail"));
}

#[test]
fn discussion_pane_keeps_recorded_order() {
    let game = record(GOOD_WIN);
    let mut cursor = GameCursor::default();
    cursor.select_mission(&game, 1);
    let html = render_viewer(&game, cursor);
    let messages = &game.missions[1].discussion;
    assert_eq!(messages.len(), 2);
    let first = html.find(messages[0].content.as_str()).unwrap();
    let second = html.rfind(messages[1].content.as_str()).unwrap();
    assert!(first < second);
    assert_eq!(html.matches("class=\"message team-").count(), 2);
}

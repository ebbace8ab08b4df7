//! Deployment base path, read from `PUBLIC_URL` at compile time.
//!
//! The published data tree lives at `{base}/data/` and the router is mounted at
//! `{base}`. An unset or blank `PUBLIC_URL` means the site root.

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

fn normalized(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

/// URL of a file in the published data tree, e.g. `tournaments.json` or
/// `datasets/C_individual_5p/index.json`.
#[must_use]
pub fn data_path(relative: &str) -> String {
    join_data(PUBLIC_URL.unwrap_or_default(), relative)
}

/// Router basename, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    Some(normalized(PUBLIC_URL.unwrap_or_default()))
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

fn join_data(base: &str, relative: &str) -> String {
    format!(
        "{}/data/{}",
        normalized(base),
        relative.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_fetch_from_slash_data() {
        assert_eq!(data_path("tournaments.json"), "/data/tournaments.json");
        assert_eq!(router_base(), None);
    }

    #[test]
    fn sub_path_deployments_prefix_every_fetch() {
        assert_eq!(
            join_data("/avalon-viewer", "datasets/B_tournament_6p/index.json"),
            "/avalon-viewer/data/datasets/B_tournament_6p/index.json"
        );
        assert_eq!(
            join_data(" /avalon-viewer/ ", "/datasets/A_cross_game_learning/all_games.json"),
            "/avalon-viewer/data/datasets/A_cross_game_learning/all_games.json"
        );
        assert_eq!(normalized("   "), "");
    }
}

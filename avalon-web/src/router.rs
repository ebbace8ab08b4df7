use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/players")]
    Players,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use std::collections::HashMap;
    use yew_router::Routable;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Players.to_path(), "/players");
        let params = HashMap::new();
        assert_eq!(Route::from_path("/players", &params), Some(Route::Players));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}

//! Navigation boundary between the home and results screens.
//!
//! The username travels as the `username` query parameter of `/results`.

use url::form_urlencoded;

pub const RESULTS_PATH: &str = "/results";
pub const USERNAME_PARAM: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Results { username: Option<String> },
}

impl Route {
    /// `/results?username=<id>`; the identifier is passed through as typed.
    pub fn results_location(username: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(USERNAME_PARAM, username)
            .finish();
        format!("{RESULTS_PATH}?{query}")
    }

    pub fn parse(location: &str) -> Route {
        let (path, query) = match location.split_once('?') {
            Some((p, q)) => (p, q),
            None => (location, ""),
        };
        if path != RESULTS_PATH {
            return Route::Home;
        }
        let username = form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == USERNAME_PARAM)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty());
        Route::Results { username }
    }

    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn location(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Results {
                username: Some(name),
            } => Self::results_location(name),
            Route::Results { username: None } => RESULTS_PATH.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/route_tests.rs"]
mod tests;

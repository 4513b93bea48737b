//! Navigation collaborator: routes and the arguments they carry.

use std::collections::HashMap;

/// Route argument holding the coin id on the detail screen.
pub const PARAM_COIN_ID: &str = "coinId";

/// The two screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CoinList,
    CoinDetail,
}

impl Screen {
    pub fn route(&self) -> &'static str {
        match self {
            Screen::CoinList => "coin_list_screen",
            Screen::CoinDetail => "coin_detail_screen",
        }
    }

    /// Concrete detail route for one coin, e.g. `coin_detail_screen/btc-bitcoin`.
    pub fn detail_route(coin_id: &str) -> String {
        format!("{}/{}", Screen::CoinDetail.route(), urlencoding::encode(coin_id))
    }
}

/// String arguments handed to a screen by navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavArgs {
    args: HashMap<String, String>,
}

impl NavArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Match a concrete route against the known screens.
    ///
    /// `coin_detail_screen/<id>` yields `coinId = <id>`; a bare
    /// `coin_detail_screen` (or an empty id segment) yields no arguments.
    pub fn from_route(route: &str) -> Option<(Screen, NavArgs)> {
        let route = route.trim_matches('/');
        if route == Screen::CoinList.route() {
            return Some((Screen::CoinList, NavArgs::new()));
        }

        let rest = route.strip_prefix(Screen::CoinDetail.route())?;
        if rest.is_empty() {
            return Some((Screen::CoinDetail, NavArgs::new()));
        }
        let segment = rest.strip_prefix('/')?;
        if segment.is_empty() {
            return Some((Screen::CoinDetail, NavArgs::new()));
        }
        let coin_id = urlencoding::decode(segment).ok()?.into_owned();
        Some((Screen::CoinDetail, NavArgs::new().with(PARAM_COIN_ID, coin_id)))
    }
}

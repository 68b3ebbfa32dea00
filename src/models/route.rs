use std::fmt;

/// Navigation targets the core can ask the presentation layer to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Favorites,
    Offer(String),
    NotFound,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Favorites => "/favorites".to_string(),
            AppRoute::Offer(id) => format!("/offer/{}", id),
            AppRoute::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Screens of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Articles,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Login => "/",
            Screen::Articles => "/articles",
        }
    }

    /// Unknown paths land on the login screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/articles" => Screen::Articles,
            _ => Screen::Login,
        }
    }
}

/// What a controller action asks the navigation layer to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Stay on the current screen; the message says what happened
    Stay,
    /// Rejected because another action is still in flight
    Busy,
    Navigate(Screen),
}

impl Outcome {
    pub fn target(&self) -> Option<Screen> {
        match self {
            Outcome::Navigate(screen) => Some(*screen),
            Outcome::Stay | Outcome::Busy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_paths() {
        assert_eq!(Screen::from_path("/"), Screen::Login);
        assert_eq!(Screen::from_path("/articles"), Screen::Articles);
        assert_eq!(Screen::from_path("/articles/"), Screen::Articles);
        assert_eq!(Screen::from_path("/nope"), Screen::Login);
        assert_eq!(Screen::from_path(Screen::Articles.path()), Screen::Articles);
    }

    #[test]
    fn test_outcome_target() {
        assert_eq!(Outcome::Stay.target(), None);
        assert_eq!(Outcome::Busy.target(), None);
        assert_eq!(
            Outcome::Navigate(Screen::Login).target(),
            Some(Screen::Login)
        );
    }
}

//! The fixed set of kiosk screens

/// Screens of the kiosk flow, in the order a standard order walks them.
/// Each one maps to exactly one route and one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Main,
    Welcome,
    PhoneDialer,
    CustomizeDrink,
    Waiting,
    Complete,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Main,
        Screen::Welcome,
        Screen::PhoneDialer,
        Screen::CustomizeDrink,
        Screen::Waiting,
        Screen::Complete,
    ];

    /// Route the kiosk browser requests for this screen
    pub fn route(self) -> &'static str {
        match self {
            Screen::Main => "/",
            Screen::Welcome => "/welcome",
            Screen::PhoneDialer => "/phoneDialer",
            Screen::CustomizeDrink => "/customizeDrink",
            Screen::Waiting => "/waiting",
            Screen::Complete => "/complete",
        }
    }

    /// Template file served for this screen
    pub fn template(self) -> &'static str {
        match self {
            Screen::Main => "main.html",
            Screen::Welcome => "welcome.html",
            Screen::PhoneDialer => "phoneDialer.html",
            Screen::CustomizeDrink => "customizeDrink.html",
            Screen::Waiting => "waiting.html",
            Screen::Complete => "complete.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_give_every_screen_its_own_route() {
        let routes: HashSet<&str> = Screen::ALL.iter().map(|screen| screen.route()).collect();
        assert_eq!(Screen::ALL.len(), routes.len());
    }

    #[test]
    fn should_give_every_screen_its_own_template() {
        let templates: HashSet<&str> = Screen::ALL.iter().map(|screen| screen.template()).collect();
        assert_eq!(Screen::ALL.len(), templates.len());
    }

    #[test]
    fn should_serve_the_main_screen_from_the_root_route() {
        assert_eq!("/", Screen::Main.route());
        assert_eq!("main.html", Screen::Main.template());
    }
}

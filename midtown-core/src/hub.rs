//! Applet hub - tracks which panel is on screen

use std::fmt;

use serde::{Deserialize, Serialize};

/// A panel the hub can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Home,
    RockPaperScissors,
    MultiplicationTable,
    CaesarCipher,
}

impl Panel {
    /// Applet panels in menu order
    pub const APPLETS: [Panel; 3] = [
        Panel::RockPaperScissors,
        Panel::MultiplicationTable,
        Panel::CaesarCipher,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Home => "MidTown IT Training Solutions",
            Panel::RockPaperScissors => "Rock Paper Scissors",
            Panel::MultiplicationTable => "Multiplication Table",
            Panel::CaesarCipher => "Caesar Cipher",
        }
    }

    /// Short name used in logs
    pub fn slug(&self) -> &'static str {
        match self {
            Panel::Home => "home",
            Panel::RockPaperScissors => "rps",
            Panel::MultiplicationTable => "table",
            Panel::CaesarCipher => "cipher",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Panel> {
        [Panel::Home]
            .into_iter()
            .chain(Panel::APPLETS)
            .find(|p| p.slug() == slug)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Navigation state: exactly one panel is visible at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hub {
    current: Panel,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    pub fn new() -> Self {
        Self {
            current: Panel::Home,
        }
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn title(&self) -> &'static str {
        self.current.title()
    }

    /// Show `panel`, returning the one it replaced
    pub fn select(&mut self, panel: Panel) -> Panel {
        std::mem::replace(&mut self.current, panel)
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.current == panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        assert_eq!(Panel::from_slug("cipher"), Some(Panel::CaesarCipher));
        assert_eq!(Panel::from_slug("home"), Some(Panel::Home));
        assert_eq!(Panel::from_slug("chess"), None);
    }

    #[test]
    fn test_starts_on_home() {
        let hub = Hub::new();
        assert_eq!(hub.current(), Panel::Home);
        assert_eq!(hub.title(), "MidTown IT Training Solutions");
    }

    #[test]
    fn test_select_switches_single_panel() {
        let mut hub = Hub::new();
        assert_eq!(hub.select(Panel::CaesarCipher), Panel::Home);
        assert_eq!(hub.select(Panel::RockPaperScissors), Panel::CaesarCipher);

        let visible: Vec<_> = Panel::APPLETS
            .iter()
            .filter(|p| hub.is_visible(**p))
            .collect();
        assert_eq!(visible, vec![&Panel::RockPaperScissors]);
    }

    #[test]
    fn test_reselecting_same_panel() {
        let mut hub = Hub::new();
        hub.select(Panel::MultiplicationTable);
        assert_eq!(hub.select(Panel::MultiplicationTable), Panel::MultiplicationTable);
        assert_eq!(hub.title(), "Multiplication Table");
    }
}

//! Project name validation.
//!
//! A project name becomes a directory, an xmake target, and a C++ string
//! literal, so it is restricted to ASCII letters, digits and underscores.

use regex::Regex;
use std::sync::OnceLock;

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid project name regex"))
}

/// True if `name` is a valid project name.
pub fn is_valid_project_name(name: &str) -> bool {
    name_regex().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_alnum_and_underscore() {
        assert!(is_valid_project_name("demo"));
        assert!(is_valid_project_name("my_game_2"));
        assert!(is_valid_project_name("_"));
        assert!(is_valid_project_name("Game42"));
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("bad name!"));
        assert!(!is_valid_project_name("my-game"));
        assert!(!is_valid_project_name("../escape"));
        assert!(!is_valid_project_name("game.cpp"));
        assert!(!is_valid_project_name("demo\n"));
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert!(!is_valid_project_name("游戏"));
        assert!(!is_valid_project_name("café"));
    }
}

use crossterm::event::KeyCode;

/// Keys the menus react to. Everything unrecognised collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Char(char),
    Other,
}

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Char(c) => NavKey::Char(c),
            _ => NavKey::Other,
        }
    }
}

/// Parses a script token such as `UP`, `enter` or `q`.
pub fn parse_key_token(token: &str) -> Option<NavKey> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let key = match trimmed.to_ascii_uppercase().as_str() {
        "UP" => NavKey::Up,
        "DOWN" => NavKey::Down,
        "ENTER" | "RETURN" => NavKey::Enter,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => NavKey::Char(c.to_ascii_lowercase()),
                _ => NavKey::Other,
            }
        }
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_crossterm_codes() {
        assert_eq!(NavKey::from(KeyCode::Up), NavKey::Up);
        assert_eq!(NavKey::from(KeyCode::Enter), NavKey::Enter);
        assert_eq!(NavKey::from(KeyCode::Char('q')), NavKey::Char('q'));
        assert_eq!(NavKey::from(KeyCode::Esc), NavKey::Other);
    }

    #[test]
    fn parses_script_tokens() {
        assert_eq!(parse_key_token(" down "), Some(NavKey::Down));
        assert_eq!(parse_key_token("Return"), Some(NavKey::Enter));
        assert_eq!(parse_key_token("Q"), Some(NavKey::Char('q')));
        assert_eq!(parse_key_token("PAGEUP"), Some(NavKey::Other));
        assert_eq!(parse_key_token(""), None);
    }
}

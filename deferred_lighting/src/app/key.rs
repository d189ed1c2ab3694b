/// Keys the demo distinguishes

use winit::keyboard::{Key as WinitKey, NamedKey};

/// Pressed key, as seen by `FrameHandler::on_key`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Character(char),
    Other,
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        if c == '\u{1b}' {
            Key::Escape
        } else {
            Key::Character(c)
        }
    }
}

impl From<&WinitKey> for Key {
    fn from(key: &WinitKey) -> Self {
        match key {
            WinitKey::Named(NamedKey::Escape) => Key::Escape,
            WinitKey::Character(text) => text.chars().next().map(Key::from).unwrap_or(Key::Other),
            _ => Key::Other,
        }
    }
}

//! Keyboard input primitives.
use std::{ops::Add, str::FromStr};

use crate::error::{Error, Result};

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Tab key.
    Tab,
    /// Shift + Tab key, as reported by terminals that fold the modifier in.
    BackTab,
    /// Escape key.
    Esc,
    /// A character.
    Char(char),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Ok(match lower.as_str() {
            "enter" | "return" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "tab" => Self::Tab,
            "backtab" => Self::BackTab,
            "esc" | "escape" => Self::Esc,
            "space" => Self::Char(' '),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return Err(Error::Invalid(format!("unknown key: {s}"))),
                }
            }
        })
    }
}

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Forward tab: the Tab key without shift.
    pub fn is_tab(&self) -> bool {
        self.key == KeyCode::Tab && !self.mods.shift
    }

    /// Backward tab: Shift+Tab, or a folded `BackTab` code.
    pub fn is_shift_tab(&self) -> bool {
        self.key == KeyCode::BackTab || (self.key == KeyCode::Tab && self.mods.shift)
    }

    /// Either direction of tab navigation.
    pub fn is_tabbing(&self) -> bool {
        self.is_tab() || self.is_shift_tab()
    }

    /// The escape key, with any modifiers.
    pub fn is_escape(&self) -> bool {
        self.key == KeyCode::Esc
    }
}

/// Parses dash-separated key specifications such as `tab`, `shift-tab`,
/// `ctrl-a` or `esc`.
impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Invalid("empty key".into()));
        }
        if s == "-" {
            return Ok('-'.into());
        }
        let mut parts: Vec<&str> = s.split('-').collect();
        let Some(last) = parts.pop() else {
            return Err(Error::Invalid(format!("unknown key: {s}")));
        };
        let mut mods = Empty;
        for m in parts {
            mods = mods
                + match m.to_ascii_lowercase().as_str() {
                    "shift" => Shift,
                    "ctrl" => Ctrl,
                    "alt" => Alt,
                    _ => return Err(Error::Invalid(format!("unknown modifier: {m}"))),
                };
        }
        Ok(mods + last.parse::<KeyCode>()?)
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // If there are modifiers, we never match.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Result, event::key::*};

    #[test]
    fn tab_direction() {
        assert!(Key::from(KeyCode::Tab).is_tab());
        assert!(!Key::from(KeyCode::Tab).is_shift_tab());
        assert!((Shift + KeyCode::Tab).is_shift_tab());
        assert!(!(Shift + KeyCode::Tab).is_tab());
        assert!(Key::from(KeyCode::BackTab).is_shift_tab());
        assert!((Ctrl + KeyCode::Tab).is_tab());
        assert!(!Key::from('a').is_tabbing());
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("tab".parse::<Key>()?, KeyCode::Tab);
        assert_eq!("shift-tab".parse::<Key>()?, Shift + KeyCode::Tab);
        assert_eq!("Esc".parse::<Key>()?, KeyCode::Esc);
        assert_eq!("ctrl-alt-x".parse::<Key>()?, Ctrl + Alt + 'x');
        assert_eq!("up".parse::<Key>()?, KeyCode::Up);
        assert!("f5".parse::<Key>().is_err());
        assert_eq!("f".parse::<Key>()?, 'f');
        assert_eq!("-".parse::<Key>()?, '-');
        assert!("hyper-q".parse::<Key>().is_err());
        assert!("nonsense".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        Ok(())
    }

    #[test]
    fn modifiers_never_match_bare_codes() {
        assert_ne!(Shift + KeyCode::Esc, KeyCode::Esc);
        assert!((Shift + KeyCode::Esc).is_escape());
    }
}

//! Keyboard shortcuts for canvas actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modifier keys (combinations) used for hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

/// A single hotkey: optional modifier(s) plus a character key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self {
            modifier,
            key: key.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    /// Accepts `"A"`, `"Ctrl+S"`, `"shift + ctrl + x"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<String> = s.split('+').map(|p| p.trim().to_lowercase()).collect();
        let (key_part, mods) = match parts.split_last() {
            Some((last, mods)) if !last.is_empty() => (last, mods),
            _ => return Err(format!("invalid hotkey '{}'", s.trim())),
        };
        let mut chars = key_part.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c,
            _ => return Err(format!("key must be a single letter or digit, got '{}'", key_part)),
        };
        let (mut ctrl, mut alt, mut shift) = (false, false, false);
        for m in mods {
            match m.as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => shift = true,
                other => return Err(format!("unknown modifier '{}'", other)),
            }
        }
        let modifier = match (ctrl, alt, shift) {
            (false, false, false) => Modifier::None,
            (true, false, false) => Modifier::Ctrl,
            (false, true, false) => Modifier::Alt,
            (false, false, true) => Modifier::Shift,
            (true, false, true) => Modifier::CtrlShift,
            _ => return Err(format!("unsupported modifier combo '{}'", mods.join("+"))),
        };
        Ok(Hotkey::new(modifier, key))
    }
}

/// Name of a hotkey entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    AutoDraw,
    Clear,
    Stop,
    ResetSlide,
    SaveFunction,
    Help,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 6] = [
        HotkeyName::AutoDraw,
        HotkeyName::Clear,
        HotkeyName::Stop,
        HotkeyName::ResetSlide,
        HotkeyName::SaveFunction,
        HotkeyName::Help,
    ];
}

/// All configurable hotkeys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub auto_draw: Hotkey,
    pub clear: Hotkey,
    pub stop: Hotkey,
    pub reset_slide: Hotkey,
    pub save_function: Hotkey,
    pub help: Hotkey,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            auto_draw: Hotkey::new(Modifier::Ctrl, 'D'),
            clear: Hotkey::new(Modifier::Ctrl, 'L'),
            stop: Hotkey::new(Modifier::Ctrl, 'K'),
            reset_slide: Hotkey::new(Modifier::Ctrl, 'R'),
            save_function: Hotkey::new(Modifier::Ctrl, 'S'),
            help: Hotkey::new(Modifier::Ctrl, 'H'),
        }
    }
}

impl Hotkeys {
    pub fn get(&self, name: HotkeyName) -> &Hotkey {
        match name {
            HotkeyName::AutoDraw => &self.auto_draw,
            HotkeyName::Clear => &self.clear,
            HotkeyName::Stop => &self.stop,
            HotkeyName::ResetSlide => &self.reset_slide,
            HotkeyName::SaveFunction => &self.save_function,
            HotkeyName::Help => &self.help,
        }
    }
}

/// Button tooltip text, with the bound key in brackets when there is one.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

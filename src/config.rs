//! User configuration: selector key bindings and persistence.
//!
//! Bindings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/jired/config.toml` (default `~/.config/jired/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// Bindable selector actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Cancel,
    Confirm,
    MoveUp,
    MoveDown,
}

impl Action {
    /// Ordered list of all actions (used when writing the config file).
    pub const ALL: &[Action] = &[
        Action::Cancel,
        Action::Confirm,
        Action::MoveUp,
        Action::MoveDown,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Cancel => "Quit",
            Action::Confirm => "Select",
            Action::MoveUp => "Move Up",
            Action::MoveDown => "Move Down",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::Cancel => "cancel",
            Action::Confirm => "confirm",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "cancel" => Some(Action::Cancel),
            "confirm" => Some(Action::Confirm),
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Keys with a written name.  The first entry for a code is the one written
/// back; later entries are accepted aliases.  Punctuation that the config
/// format itself uses is only ever written by name.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Space", KeyCode::Char(' ')),
    ("Comma", KeyCode::Char(',')),
    ("Plus", KeyCode::Char('+')),
    ("Quote", KeyCode::Char('"')),
    ("Hash", KeyCode::Char('#')),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("Backspace", KeyCode::Backspace),
    ("Delete", KeyCode::Delete),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Return", KeyCode::Enter),
    ("Escape", KeyCode::Esc),
];

/// Reduce a key to the form bindings are stored and compared in.
///
/// Only CTRL/ALT/SHIFT survive.  On character keys SHIFT is folded into the
/// character itself: terminals report Shift+j as `J`, some with the SHIFT
/// flag and some without, so `J`, `Shift+j` and `Shift+J` are one key.
fn canonical(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    let mut modifiers = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers.remove(KeyModifiers::SHIFT);
            (KeyCode::Char(c.to_ascii_uppercase()), modifiers)
        }
        _ => (code, modifiers),
    }
}

/// A single key binding, kept in [`canonical`] form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let (code, modifiers) = canonical(code, modifiers);
        Self { code, modifiers }
    }

    pub fn matches(&self, event: KeyEvent) -> bool {
        (self.code, self.modifiers) == canonical(event.code, event.modifiers)
    }

    /// User-facing form, e.g. `"Ctrl+c"`, `"↑"`, `"q"`.
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            _ => self.code_name(),
        };
        self.modifier_prefix() + &key
    }

    /// Config-file form, e.g. `"Ctrl+c"`, `"Up"`, `"Comma"`.
    fn to_config_string(&self) -> String {
        self.modifier_prefix() + &self.code_name()
    }

    fn modifier_prefix(&self) -> String {
        [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ]
        .iter()
        .filter(|(flag, _)| self.modifiers.contains(*flag))
        .map(|(_, prefix)| *prefix)
        .collect()
    }

    fn code_name(&self) -> String {
        if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, code)| *code == self.code) {
            return name.to_string();
        }
        match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    /// Parse `"Ctrl+c"`, `"alt+up"`, `"J"`, `"Shift+j"`, `"Comma"`, `"F5"`.
    fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('+');
        let code = code_from_name(parts.next_back()?.trim())?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }
        Some(Self::new(code, modifiers))
    }
}

fn code_from_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    if let Some((_, code)) = NAMED_KEYS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
        return Some(*code);
    }
    let n = name.strip_prefix(|c: char| c == 'f' || c == 'F')?.parse().ok()?;
    Some(KeyCode::F(n))
}

// ───────────────────────────────────────── config ────────────

/// Selector key bindings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    /// Built-in bindings: `q`/`Ctrl+c` quit, `Enter` selects, arrows and
    /// `k`/`j` move.  Everything else, `Esc` included, is ignored.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(Cancel, vec![KeyBind::new(Char('q'), n), KeyBind::new(Char('c'), ctrl)]);
        m.insert(Confirm, vec![KeyBind::new(Enter, n)]);
        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);

        m
    }

    /// Find the action bound to a key event.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binds)| binds.iter().any(|b| b.matches(event)))
            .map(|(&action, _)| action)
    }

    /// Bind `bind` to `action`, removing it from any other action first.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    /// Format the binding list for an action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        let shown: Vec<String> = self
            .bindings
            .get(&action)
            .into_iter()
            .flatten()
            .map(KeyBind::display)
            .collect();
        if shown.is_empty() {
            "unbound".into()
        } else {
            shown.join("/")
        }
    }

    /// The help line shown under the option list.
    pub fn help_line(&self) -> String {
        match self.bindings.get(&Action::Cancel).and_then(|b| b.first()) {
            Some(bind) => format!("Press {} to quit.", bind.display()),
            None => "Press Ctrl+c to quit.".into(),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path`, falling back to defaults when it is missing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Ok(Self::parse_config(&contents))
    }

    /// Persist current config to `path`.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.serialise())
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut bindings = Self::default_bindings();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(line = lineno + 1, "ignoring config line without `=`");
                continue;
            };
            let key = key.trim();

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(line = lineno + 1, key, "ignoring unknown config key");
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => tracing::warn!(line = lineno + 1, key = part, "ignoring unparsable key"),
                }
            }
            if !parsed.is_empty() {
                bindings.insert(action, parsed);
            }
        }

        Self { bindings }
    }

    fn serialise(&self) -> String {
        let mut out = String::from(
            "# jired configuration\n\
             #\n\
             # action = Key, Key, ...\n\
             # Modifiers prefix the key: Ctrl+, Alt+, Shift+.\n\
             # Named keys: Up Down Left Right Enter Esc Tab Backspace Delete Home End\n\
             #   PageUp PageDown Space Comma Plus Quote Hash F1-F12\n\n",
        );
        for &action in Action::ALL {
            let Some(binds) = self.bindings.get(&action) else {
                continue;
            };
            let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
            out.push_str(&format!("{} = {}\n", action.config_key(), keys.join(", ")));
        }
        out
    }
}

/// `$XDG_CONFIG_HOME/jired/config.toml`, falling back to `~/.config`.
pub fn default_config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

//! Terminal mode flags and tri-state binding mode predicates.

use crate::parser::ParseError;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Snapshot of the terminal modes that can gate a binding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeFlags: u8 {
        const ALTERNATE_SCREEN = 1 << 0;
        const APP_CURSOR = 1 << 1;
        const APP_KEYPAD = 1 << 2;
        const SELECT = 1 << 3;
        const INSERT = 1 << 4;
        const SEARCH = 1 << 5;
        const TRACE = 1 << 6;
    }
}

impl ModeFlags {
    /// Document names of every flag, in display order.
    pub const NAMES: [(ModeFlags, &'static str); 7] = [
        (ModeFlags::ALTERNATE_SCREEN, "AlternateScreen"),
        (ModeFlags::APP_CURSOR, "AppCursor"),
        (ModeFlags::APP_KEYPAD, "AppKeypad"),
        (ModeFlags::SELECT, "Select"),
        (ModeFlags::INSERT, "Insert"),
        (ModeFlags::SEARCH, "Search"),
        (ModeFlags::TRACE, "Trace"),
    ];

    /// Parse a single flag name (case-insensitive).
    pub fn from_doc_name(name: &str) -> Result<ModeFlags, ParseError> {
        let name = name.trim();
        Self::NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(flag, _)| *flag)
            .ok_or_else(|| ParseError::UnknownMode(name.to_string()))
    }
}

/// Requirement a binding places on a single mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// The flag must be set.
    Enabled,
    /// The flag must be clear.
    Disabled,
    /// The flag is ignored.
    #[default]
    Any,
}

/// Per-flag tri-state requirements attached to a binding.
///
/// Flags present in neither set are `Any`. The two sets are kept disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchModes {
    enabled: ModeFlags,
    disabled: ModeFlags,
}

impl MatchModes {
    /// A predicate that accepts every mode combination.
    pub const fn any() -> Self {
        Self {
            enabled: ModeFlags::empty(),
            disabled: ModeFlags::empty(),
        }
    }

    /// Builder-style variant of [`MatchModes::set`].
    pub fn with(mut self, flag: ModeFlags, mode: MatchMode) -> Self {
        self.set(flag, mode);
        self
    }

    /// Set the requirement for one or more flags.
    pub fn set(&mut self, flag: ModeFlags, mode: MatchMode) {
        match mode {
            MatchMode::Enabled => {
                self.enabled.insert(flag);
                self.disabled.remove(flag);
            }
            MatchMode::Disabled => {
                self.disabled.insert(flag);
                self.enabled.remove(flag);
            }
            MatchMode::Any => {
                self.enabled.remove(flag);
                self.disabled.remove(flag);
            }
        }
    }

    /// Requirement for a single flag.
    pub fn status(&self, flag: ModeFlags) -> MatchMode {
        if self.enabled.contains(flag) {
            MatchMode::Enabled
        } else if self.disabled.contains(flag) {
            MatchMode::Disabled
        } else {
            MatchMode::Any
        }
    }

    /// Flags that must be set.
    pub fn enabled(&self) -> ModeFlags {
        self.enabled
    }

    /// Flags that must be clear.
    pub fn disabled(&self) -> ModeFlags {
        self.disabled
    }

    /// True if no flag carries a requirement.
    pub fn is_any(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty()
    }

    /// Parse a predicate string such as `"Select|~Insert"`.
    ///
    /// Flags are separated by `|`; a `~` prefix marks the flag as
    /// disabled. An empty string is the match-all predicate.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut modes = Self::any();
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            match part.strip_prefix('~') {
                Some(name) => modes.set(ModeFlags::from_doc_name(name)?, MatchMode::Disabled),
                None => modes.set(ModeFlags::from_doc_name(part)?, MatchMode::Enabled),
            }
        }
        Ok(modes)
    }
}

impl fmt::Display for MatchModes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = ModeFlags::NAMES
            .iter()
            .filter_map(|(flag, name)| match self.status(*flag) {
                MatchMode::Enabled => Some((*name).to_string()),
                MatchMode::Disabled => Some(format!("~{name}")),
                MatchMode::Any => None,
            })
            .collect();
        write!(f, "{}", parts.join("|"))
    }
}

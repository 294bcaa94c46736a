//! Ordered, closed-vocabulary parameter store
//!
//! A [`ParameterSet`] holds one slot per [`Flag`]. Slots are never added or
//! removed; only their value changes between absent, present and a string
//! argument. Iteration always follows the flags' declared order, which is the
//! order they appear on a rendered command line.

use crate::flag::{Direction, Flag};

/// Value held by one flag slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlagValue {
    /// Not on the command line
    #[default]
    Absent,
    /// On the command line with no argument
    Present,
    /// On the command line followed by this argument
    Value(String),
}

impl FlagValue {
    /// Whether the flag appears on the command line
    pub fn is_set(&self) -> bool {
        !matches!(self, FlagValue::Absent)
    }

    /// Text rendered after the flag; present flags render as the empty string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Absent => None,
            FlagValue::Present => Some(""),
            FlagValue::Value(value) => Some(value),
        }
    }
}

/// One value slot per declared flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    values: [FlagValue; Flag::COUNT],
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    /// Create a set with every flag absent
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| FlagValue::Absent),
        }
    }

    /// Current value of a flag by name; unknown names read as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        name.parse::<Flag>()
            .ok()
            .and_then(|flag| self.get_flag(flag))
    }

    /// Store `value` for the flag called `name`.
    ///
    /// Returns `false`, leaving the set untouched, if `name` is not a declared
    /// flag. The value is stored verbatim; an empty string renders the flag
    /// with no argument.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<Flag>() {
            Ok(flag) => {
                self.set_flag(flag, value);
                true
            }
            Err(_) => {
                tracing::debug!("Ignoring set of unknown flag {}", name);
                false
            }
        }
    }

    /// Reset the flag called `name` to absent.
    ///
    /// Returns `false` if `name` is not a declared flag.
    pub fn unset(&mut self, name: &str) -> bool {
        match name.parse::<Flag>() {
            Ok(flag) => {
                self.unset_flag(flag);
                true
            }
            Err(_) => {
                tracing::debug!("Ignoring unset of unknown flag {}", name);
                false
            }
        }
    }

    /// Current value of a flag
    pub fn get_flag(&self, flag: Flag) -> Option<&str> {
        self.slot(flag).as_str()
    }

    /// Raw three-state slot of a flag
    pub fn slot(&self, flag: Flag) -> &FlagValue {
        &self.values[flag.index()]
    }

    /// Store an argument for a flag
    pub fn set_flag(&mut self, flag: Flag, value: impl Into<String>) {
        self.values[flag.index()] = FlagValue::Value(value.into());
    }

    /// Mark a flag present with no argument
    pub fn enable_flag(&mut self, flag: Flag) {
        self.values[flag.index()] = FlagValue::Present;
    }

    /// Reset a flag to absent
    pub fn unset_flag(&mut self, flag: Flag) {
        self.values[flag.index()] = FlagValue::Absent;
    }

    /// Whether a flag appears on the command line
    pub fn is_set(&self, flag: Flag) -> bool {
        self.slot(flag).is_set()
    }

    /// Whether a flag holds a non-empty argument
    pub fn has_value(&self, flag: Flag) -> bool {
        self.get_flag(flag).is_some_and(|v| !v.is_empty())
    }

    /// Set flags with their rendered text, in declared order
    pub fn iter(&self) -> impl Iterator<Item = (Flag, &str)> + '_ {
        Flag::ALL
            .iter()
            .copied()
            .filter_map(|flag| self.get_flag(flag).map(|value| (flag, value)))
    }

    /// Set flags rendered by commands of `direction`, in declared order
    pub fn iter_for(&self, direction: Direction) -> impl Iterator<Item = (Flag, &str)> + '_ {
        self.iter().filter(move |(flag, _)| flag.applies_to(direction))
    }

    /// Whether every flag is absent
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Fill every absent slot from `defaults`; slots already set are kept
    pub fn inherit(&mut self, defaults: &ParameterSet) {
        for (slot, default) in self.values.iter_mut().zip(defaults.values.iter()) {
            if !slot.is_set() {
                *slot = default.clone();
            }
        }
    }
}

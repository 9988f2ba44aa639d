use crate::utils::error::{EssenceError, Result};

/// A USSD screen of the cycle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Month report `n` calendar months from the current month.
    Month(i32),
    CurrentCycle,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Month(0)
    }
}

impl Screen {
    /// `n` moves forward a month. `p` from the current month opens the
    /// current cycle info, from any other month it steps back one month.
    pub fn apply(self, key: &str) -> Result<Self> {
        let key = key.trim();
        match (key.to_ascii_lowercase().as_str(), self) {
            ("n", Screen::Month(offset)) => Ok(Screen::Month(offset.saturating_add(1))),
            ("n", Screen::CurrentCycle) => Ok(Screen::Month(0)),
            ("p", Screen::Month(0)) | ("p", Screen::CurrentCycle) => Ok(Screen::CurrentCycle),
            ("p", Screen::Month(offset)) => Ok(Screen::Month(offset.saturating_sub(1))),
            _ => Err(EssenceError::InvalidSelection {
                key: key.to_string(),
            }),
        }
    }

    /// Replays a `*`-separated USSD input string from the start screen.
    pub fn from_keys(keys: &str) -> Result<Self> {
        keys.split('*')
            .filter(|segment| !segment.trim().is_empty())
            .try_fold(Screen::default(), |screen, key| screen.apply(key))
    }
}

use serde::{Deserialize, Serialize};

use super::AppError;

/// A validated catalog option identifier.
///
/// The only local constraint is non-emptiness; uniqueness is checked by the
/// catalog. Ids may contain spaces, since they never reach the shell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionId(String);

impl OptionId {
    /// Validate and create a new `OptionId`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if is_valid_option_id(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidOptionId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_option_id(id: &str) -> bool {
    !id.trim().is_empty()
}

impl TryFrom<String> for OptionId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<OptionId> for String {
    fn from(id: OptionId) -> Self {
        id.0
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

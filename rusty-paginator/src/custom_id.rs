//! Button custom ID encoding: `<prefix>:<session id>:<action>`.

use std::fmt;
use std::str::FromStr;

use crate::error::PaginatorError;

/// Separator between custom ID segments. Session IDs may not contain it.
pub const SEPARATOR: char = ':';

/// Longest custom ID Discord accepts on a component.
pub const MAX_CUSTOM_ID_LEN: usize = 100;

/// Length of the longest action name.
const MAX_ACTION_LEN: usize = 5;

/// Navigation or control operation carried by a paginator button.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    First,
    Back,
    Stop,
    Next,
    Last,
}

impl Action {
    /// All actions in the order their buttons appear in the control row.
    pub const ALL: [Action; 5] = [
        Action::First,
        Action::Back,
        Action::Stop,
        Action::Next,
        Action::Last,
    ];

    /// Wire name used in custom IDs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::First => "first",
            Action::Back => "back",
            Action::Stop => "stop",
            Action::Next => "next",
            Action::Last => "last",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = PaginatorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "first" => Ok(Action::First),
            "back" => Ok(Action::Back),
            "stop" => Ok(Action::Stop),
            "next" => Ok(Action::Next),
            "last" => Ok(Action::Last),
            other => Err(PaginatorError::UnknownAction(other.to_owned())),
        }
    }
}

/// Decoded paginator button press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedCustomId {
    pub session_id: String,
    pub action: Action,
}

/// Build the custom ID for one paginator button.
pub fn build_custom_id(prefix: &str, session_id: &str, action: Action) -> String {
    format!("{prefix}{SEPARATOR}{session_id}{SEPARATOR}{action}")
}

/// Parse a paginator custom ID.
///
/// Returns `Ok(None)` when `custom_id` does not start with `prefix` followed
/// by the separator; such buttons belong to another handler. The prefix may
/// itself contain separators. A matching prefix with missing, empty or extra
/// segments is an integration fault and yields an error.
pub fn parse_custom_id(
    custom_id: &str,
    prefix: &str,
) -> Result<Option<ParsedCustomId>, PaginatorError> {
    let malformed = || PaginatorError::MalformedCustomId(custom_id.to_owned());

    if custom_id == prefix {
        return Err(malformed());
    }

    let Some(rest) = custom_id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
    else {
        return Ok(None);
    };

    let mut parts = rest.split(SEPARATOR);

    let session_id = parts.next().filter(|id| !id.is_empty()).ok_or_else(malformed)?;
    let action = parts.next().ok_or_else(malformed)?;

    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(Some(ParsedCustomId {
        session_id: session_id.to_owned(),
        action: action.parse()?,
    }))
}

/// Whether `session_id` can be embedded in a custom ID.
pub fn is_valid_session_id(session_id: &str) -> bool {
    !session_id.is_empty() && !session_id.contains(SEPARATOR)
}

/// Longest session ID whose custom IDs still fit Discord's limit under `prefix`.
pub fn max_session_id_len(prefix: &str) -> usize {
    MAX_CUSTOM_ID_LEN.saturating_sub(prefix.len() + 2 + MAX_ACTION_LEN)
}

//! Error taxonomy for paginator sessions.

/// Errors raised by the paginator core.
///
/// An unknown session is not an error: the router treats it as an expired
/// paginator and answers the click by clearing the buttons. Ownership
/// mismatches are answered with a denial message and reported as
/// [`RouteOutcome::Denied`](crate::RouteOutcome::Denied).
#[derive(Debug, thiserror::Error)]
pub enum PaginatorError {
    /// A custom ID carried the paginator prefix but not `<prefix>:<session>:<action>`.
    #[error("malformed paginator custom ID `{0}`")]
    MalformedCustomId(String),

    /// The action segment is not one of `first`, `back`, `stop`, `next`, `last`.
    #[error("unknown paginator action `{0}`")]
    UnknownAction(String),

    /// Sessions must have at least one page.
    #[error("a paginator needs at least one page")]
    NoPages,

    /// Session IDs are embedded in custom IDs and may not be empty or contain `:`.
    #[error("invalid paginator session ID `{0}`")]
    InvalidSessionId(String),

    /// The caller-supplied page renderer failed.
    #[error("failed to render page {page} of paginator `{session_id}`")]
    Render {
        session_id: String,
        page: usize,
        #[source]
        source: anyhow::Error,
    },

    /// Sending or updating the paginator message failed.
    #[error("failed to deliver paginator message")]
    Transport(#[source] anyhow::Error),
}

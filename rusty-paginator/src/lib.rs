//! Button paginator sessions for twilight bots.
//!
//! A [`PaginatorManager`] keeps one [`Session`] per paginated message in a
//! shared [`Registry`], routes button presses to it and evicts idle sessions
//! from a background sweeper.

pub mod config;
pub mod custom_id;
pub mod error;
mod manager;
pub mod registry;
pub mod render;
pub mod respond;
mod router;
pub mod session;
pub mod sweeper;

pub use config::{ButtonOptions, ButtonsConfig, PaginatorConfig};
pub use custom_id::Action;
pub use error::PaginatorError;
pub use manager::PaginatorManager;
pub use registry::Registry;
pub use respond::{
    ChannelResponder, InteractionResponder, MessageUpdate, OutboundMessage, Responder,
};
pub use router::RouteOutcome;
pub use session::{NewSession, PageRenderer, Session};
pub use sweeper::{Sweeper, SweeperHandle, spawn_sweeper};

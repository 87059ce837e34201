use std::sync::Arc;

use rusty_paginator::PaginatorManager;
use twilight_http::Client;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Button paginator sessions opened by commands.
    pub paginator: PaginatorManager,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, paginator: PaginatorManager) -> Self {
        Self { http, paginator }
    }
}

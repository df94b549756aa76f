// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Budget for the creator lookup behind the moderator listing.
    pub directory_timeout: Duration,
    /// Cancelled when the server starts shutting down.
    pub shutdown: CancellationToken,
}

//! Handler state

use std::sync::Arc;

use jiff::Timestamp;
use thali_app::context::AppContext;

/// Services plus process facts shared by every handler.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// When this process started serving. All data is in memory, so this is
    /// also the age of every stored record.
    pub(crate) started_at: Timestamp,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            app,
            started_at: Timestamp::now(),
        })
    }
}

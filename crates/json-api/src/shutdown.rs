//! Graceful shutdown
//!
//! Ctrl+C or SIGTERM stops the listener and gives in-flight requests a grace
//! period. Orders, accounts and sessions live only in memory and are gone once
//! the process exits.

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::{info, warn};

/// Signal that ended the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to install {signal} handler: {source}")]
    Install {
        signal: ShutdownSignal,
        #[source]
        source: io::Error,
    },
}

async fn interrupt() -> Result<ShutdownSignal, ShutdownError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownError::Install {
            signal: ShutdownSignal::Interrupt,
            source,
        })?;

    Ok(ShutdownSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<ShutdownSignal, ShutdownError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(|source| ShutdownError::Install {
            signal: ShutdownSignal::Terminate,
            source,
        })?
        .recv()
        .await;

    Ok(ShutdownSignal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> Result<ShutdownSignal, ShutdownError> {
    std::future::pending().await
}

/// Wait for a shutdown signal, then stop `handle` within `grace`.
pub(crate) async fn listen(handle: ServerHandle, grace: Duration) -> Result<(), ShutdownError> {
    let received = tokio::select! {
        received = interrupt() => received?,
        received = terminate() => received?,
    };

    info!(signal = %received, grace_secs = grace.as_secs(), "shutting down");
    warn!("in-memory orders, accounts and sessions will be discarded");

    handle.stop_graceful(grace);

    Ok(())
}

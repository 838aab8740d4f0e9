use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    Route { path: String },
    Search { path: String, query: String },
}

impl NavigationTarget {
    /// Location string handed to the router, query percent-encoded.
    pub fn href(&self) -> String {
        match self {
            NavigationTarget::Route { path } => path.clone(),
            NavigationTarget::Search { path, query } => {
                format!("{path}?q={}", urlencoding::encode(query))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: NavigationTarget,
    /// Zero means navigate now.
    pub delay: Duration,
}

/// Navigation collaborator. Implementations must not block the caller.
pub trait Navigator: Send + Sync {
    fn navigate(&self, request: NavigationRequest);
}

/// Fire-and-forget navigator that releases targets into a channel after
/// their delay. Pending delayed targets can be dropped with
/// [`DelayedNavigator::cancel_pending`].
pub struct DelayedNavigator {
    sender: mpsc::UnboundedSender<NavigationTarget>,
    cancel: Mutex<CancellationToken>,
}

impl DelayedNavigator {
    /// The navigator plus the receiving end its targets are released into.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavigationTarget>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let navigator = Self {
            sender,
            cancel: Mutex::new(CancellationToken::new()),
        };
        (navigator, receiver)
    }

    /// Drop every navigation still waiting on its timer.
    pub fn cancel_pending(&self) {
        let mut guard = self.cancel.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.cancel();
        *guard = CancellationToken::new();
    }

    fn current_token(&self) -> CancellationToken {
        self.cancel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn send(sender: &mpsc::UnboundedSender<NavigationTarget>, target: NavigationTarget) {
        if sender.send(target).is_err() {
            tracing::debug!("navigation receiver dropped");
        }
    }
}

impl Navigator for DelayedNavigator {
    fn navigate(&self, request: NavigationRequest) {
        if request.delay.is_zero() {
            Self::send(&self.sender, request.target);
            return;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("no async runtime, navigating without delay");
                Self::send(&self.sender, request.target);
                return;
            }
        };

        let token = self.current_token();
        let sender = self.sender.clone();
        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(href = %request.target.href(), "navigation cancelled");
                }
                _ = tokio::time::sleep(request.delay) => {
                    Self::send(&sender, request.target);
                }
            }
        });
    }
}

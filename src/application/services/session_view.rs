//! Session view derivation.

use tokio::sync::watch;
use tracing::debug;

use crate::application::dto::SessionView;
use crate::domain::connection::ConnectionState;
use crate::domain::entities::format_units;

/// Derives the display-ready [`SessionView`] from state snapshots.
///
/// Whenever the account or provider change, one balance query is issued
/// against the session's RPC provider. A result is applied only if no newer
/// login or logout happened while the query was in flight; superseded
/// results are discarded rather than shown as stale data. Balance-query
/// failures clear the balance instead of surfacing as connection errors.
pub struct SessionViewModel {
    states: watch::Receiver<ConnectionState>,
    decimals: u32,
    view_tx: watch::Sender<SessionView>,
}

impl SessionViewModel {
    /// Creates view model over a state subscription.
    #[must_use]
    pub fn new(states: watch::Receiver<ConnectionState>, decimals: u32) -> Self {
        let (view_tx, _) = watch::channel(SessionView::default());
        Self {
            states,
            decimals,
            view_tx,
        }
    }

    /// Subscribes to derived views.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view_tx.subscribe()
    }

    /// Returns the current derived view.
    #[must_use]
    pub fn view(&self) -> SessionView {
        self.view_tx.borrow().clone()
    }

    /// Recomputes the view from the latest state snapshot.
    pub async fn refresh(&self) {
        let snapshot = self.states.borrow().clone();
        self.apply(snapshot).await;
    }

    /// Drives the view model until the session is dropped.
    pub async fn run(mut self) {
        loop {
            let snapshot = self.states.borrow_and_update().clone();
            self.apply(snapshot).await;

            if self.states.changed().await.is_err() {
                break;
            }
        }
    }

    async fn apply(&self, snapshot: ConnectionState) {
        let balance = match (&snapshot.account, &snapshot.provider) {
            (Some(account), Some(provider)) => match provider.get_balance(account).await {
                Ok(raw) => format_units(raw, self.decimals),
                Err(e) => {
                    debug!(error = %e, account = %account.short(), "Balance query failed");
                    String::new()
                }
            },
            _ => String::new(),
        };

        // A newer login or logout bumped the attempt counter while the
        // balance query was in flight; that state will drive its own view.
        if self.states.borrow().attempt != snapshot.attempt {
            debug!(
                attempt = snapshot.attempt,
                "Discarding superseded balance result"
            );
            return;
        }

        self.view_tx
            .send_replace(SessionView::from_state(&snapshot, balance));
    }
}

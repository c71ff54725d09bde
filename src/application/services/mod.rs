//! Stateful application services.

/// Network registration fallback.
pub mod network_bootstrap;
/// Balance and view derivation.
pub mod session_view;
/// Connection state machine.
pub mod wallet_session;

pub use network_bootstrap::NetworkBootstrap;
pub use session_view::SessionViewModel;
pub use wallet_session::WalletSession;

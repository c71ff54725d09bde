//! Use case implementations.

/// Silent startup reconnection.
pub mod reconnect_use_case;

pub use reconnect_use_case::ReconnectUseCase;

//! Application layer with session services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful session services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::SessionView;
pub use services::{NetworkBootstrap, SessionViewModel, WalletSession};
pub use use_cases::ReconnectUseCase;

//! Application DTOs.

/// Session view DTO.
pub mod session_dto;

pub use session_dto::SessionView;

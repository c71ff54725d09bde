//! Domain entities and value objects.

/// Account address value object.
pub mod address;
/// Chain metadata.
pub mod chain;
/// Fixed-point unit formatting.
pub mod units;

pub use address::Address;
pub use chain::{AddChainParams, ChainSpec, NativeCurrency};
pub use units::{format_units, parse_hex_quantity};

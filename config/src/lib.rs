//! # Config Crate
//!
//! Centralized configuration for the hexagonify pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! traversal, the exporters, the CLI and the WASM surface agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HEX_POS_TEXTURE, MAX_TRAVERSAL_STEPS, UNASSIGNED_CELL_ID};
//! use config::traversal::HexagonifyConfig;
//!
//! let config = HexagonifyConfig::default();
//! assert_eq!(config.max_steps, MAX_TRAVERSAL_STEPS);
//! assert_eq!(HEX_POS_TEXTURE, "_HexPos");
//! assert!(UNASSIGNED_CELL_ID < 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Shader Compatible**: Channel values and binding names match the hex shader

pub mod constants;
pub mod traversal;

//! Prelude module re-exporting the types most callers need.
//!
//! # Usage
//!
//! ```rust
//! use pillars_core::prelude::*;
//! ```

pub use crate::engine::{ZAKAT_RATE, calculate};
pub use crate::input::{GoldDeclaration, GoldHolding, GoldPurity, ZakatInput};
pub use crate::nisab::{NisabBasis, NisabThreshold, NisabWeights};
pub use crate::normalize::{amount_or_zero, parse_amount};
pub use crate::result::{Breakdown, GoldValuation, ZakatResult};

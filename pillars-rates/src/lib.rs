//! Metal price providers for the Zakat calculator.
//!
//! The core [`RateProvider`] trait supports async price fetching; the
//! calculator never depends on it for correctness — a fetched quote only
//! pre-fills the manual rate field. One attempt per lookup: no caching, no
//! retry, no backoff.

pub mod error;
pub mod metalpriceapi;
pub mod provider;
pub mod quote;

pub use error::RateError;
pub use metalpriceapi::MetalPriceApiProvider;
pub use provider::{RateProvider, StaticRateProvider};
pub use quote::{OUNCE_TO_GRAM, RateQuote, metal_code, per_gram_from_rate};

pub mod engine;
pub mod input;
pub mod nisab;
pub mod normalize;
pub mod prelude;
pub mod result;

pub use engine::{ZAKAT_RATE, calculate};
pub use input::{GoldDeclaration, GoldHolding, GoldPurity, ZakatInput};
pub use nisab::{NisabBasis, NisabThreshold, NisabWeights};
pub use result::{Breakdown, GoldValuation, ZakatResult};

//! Reservation Pricing Engine
//!
//! Pure, stateless calculators for coworking reservations:
//!
//! - **Price Calculator** (`price_calculator`): tiered, per-person, threshold
//!   and simple hourly pricing, plus daily/weekly/monthly kinds
//! - **Cancellation Fee Calculator** (`cancellation`): deposit capture policy
//! - **Validation** (`validation`): strict checks for the submission path
//! - **Lifecycle** (`lifecycle`): create/update and cancel side computations
//!
//! No I/O and no clock reads: every input, including the evaluation date,
//! is passed explicitly.

mod cancellation;
mod duration;
mod error;
mod lifecycle;
mod money;
mod price_calculator;
pub mod tier;
mod validation;

pub use cancellation::*;
pub use duration::*;
pub use error::*;
pub use lifecycle::*;
pub use money::*;
pub use price_calculator::*;
pub use validation::*;

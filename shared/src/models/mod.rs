//! Data models
//!
//! Shared between the pricing engine, booking-server and the admin frontend (via API).
//! Wire format is camelCase JSON; monetary fields are `f64` rounded to cents.

pub mod booking;
pub mod cancellation;
pub mod price;
pub mod reservation;
pub mod space;

// Re-exports
pub use booking::*;
pub use cancellation::*;
pub use price::*;
pub use reservation::*;
pub use space::*;

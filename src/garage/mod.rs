pub mod barcode;
pub mod error;
pub mod pricing;
pub mod receipt;
pub mod store;

pub use error::GarageError;
pub use store::Garage;

/// Number of parking spaces in the garage.
pub const PARKING_CAPACITY: usize = 54;

/// Price of every started hour, in euros.
pub const HOURLY_RATE: i64 = 2;

/// How long a payment keeps a ticket in the PAID state, in seconds.
pub const GRACE_PERIOD_SECS: i64 = 15 * 60;

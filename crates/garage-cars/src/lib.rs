//! Garage Car Registry
//!
//! The cars table and its CRUD store.

mod car;
mod error;
mod store;

pub use car::{Car, NewCar};
pub use error::CarError;
pub use store::CarStore;

pub type Result<T> = std::result::Result<T, CarError>;

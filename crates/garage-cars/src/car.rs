//! Car data structures

use serde::{Deserialize, Serialize};

/// A registered car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Rowid assigned by SQLite on insert
    pub id: i64,
    pub brand: String,
    pub model: String,
    /// Horsepower
    pub hp: i64,
}

/// Field values for an insert or update. The id is always chosen by the
/// database, so it never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub hp: i64,
}

//! Car registry commands
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use garage_core::NewCar;

#[derive(Debug, Serialize, Deserialize)]
pub struct CarInfo {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub hp: i64,
}

impl From<garage_core::Car> for CarInfo {
    fn from(car: garage_core::Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            hp: car.hp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[tauri::command]
pub fn create_car(
    state: State<AppState>,
    brand: String,
    model: String,
    hp: i64,
) -> CommandResult<i64> {
    let car = NewCar { brand, model, hp };

    match state.with_garage(|garage| garage.create_car(&car)) {
        Ok(id) => CommandResult::ok(id),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn update_car(
    state: State<AppState>,
    id: i64,
    brand: String,
    model: String,
    hp: i64,
) -> CommandResult<usize> {
    let car = NewCar { brand, model, hp };

    match state.with_garage(|garage| garage.update_car(id, &car)) {
        Ok(affected) => CommandResult::ok(affected),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_car(state: State<AppState>, id: i64) -> CommandResult<CarInfo> {
    match state.with_garage(|garage| garage.find_car(id)) {
        Ok(car) => CommandResult::ok(car.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn find_cars_by_brand(state: State<AppState>, brand: String) -> CommandResult<Vec<CarInfo>> {
    match state.with_garage(|garage| garage.find_cars_by_brand(&brand)) {
        Ok(cars) => CommandResult::ok(cars.into_iter().map(CarInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn list_cars(state: State<AppState>) -> CommandResult<Vec<CarInfo>> {
    match state.with_garage(|garage| garage.list_cars()) {
        Ok(cars) => CommandResult::ok(cars.into_iter().map(CarInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn remove_car(state: State<AppState>, id: i64) -> CommandResult<usize> {
    match state.with_garage(|garage| garage.remove_car(id)) {
        Ok(deleted) => CommandResult::ok(deleted),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

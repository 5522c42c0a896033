//! Data models for the equipment tracker

pub mod equipment;

pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};

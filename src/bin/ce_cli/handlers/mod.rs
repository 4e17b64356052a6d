#![deny(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod elements;
pub mod formulas;
pub mod instances;
pub mod platform;

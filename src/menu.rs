//! Menu fixtures

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::NewFoodItem,
    validation::{Validate, ValidationErrors},
};

/// The bundled reference menu.
pub const REFERENCE_MENU: &str = include_str!("../fixtures/menu.yml");

/// Menu fixture errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A dish failed validation
    #[error("Invalid dish {name:?}: {source}")]
    InvalidDish {
        /// Dish name as written in the fixture
        name: String,

        /// What is wrong with it
        source: ValidationErrors,
    },
}

#[derive(Debug, Deserialize)]
struct MenuFixture {
    dishes: Vec<NewFoodItem>,
}

/// Parse and validate a menu document.
///
/// # Errors
///
/// Returns [`FixtureError`] if the YAML is malformed or any dish is invalid.
pub fn parse_menu(yaml: &str) -> Result<Vec<NewFoodItem>, FixtureError> {
    let fixture: MenuFixture = serde_norway::from_str(yaml)?;

    for dish in &fixture.dishes {
        dish.validate().map_err(|source| FixtureError::InvalidDish {
            name: dish.name.clone(),
            source,
        })?;
    }

    Ok(fixture.dishes)
}

/// Load a menu document from disk.
///
/// # Errors
///
/// Returns [`FixtureError`] if the file cannot be read or parsed.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Vec<NewFoodItem>, FixtureError> {
    parse_menu(&fs::read_to_string(path)?)
}

/// The 18 reference dishes.
///
/// # Errors
///
/// Returns [`FixtureError`] if the bundled fixture is broken.
pub fn reference_menu() -> Result<Vec<NewFoodItem>, FixtureError> {
    parse_menu(REFERENCE_MENU)
}

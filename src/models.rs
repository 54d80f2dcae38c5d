use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Longest color the UI accepts, counted in characters.
pub const MAX_PET_COLOR_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalType {
    Cat,
    Dog,
    Cow,
    Hamster,
}

impl AnimalType {
    pub const ALL: [AnimalType; 4] = [AnimalType::Cat, AnimalType::Dog, AnimalType::Cow, AnimalType::Hamster];

    pub fn label(&self) -> &'static str {
        match self {
            AnimalType::Cat => "Cat",
            AnimalType::Dog => "Dog",
            AnimalType::Cow => "Cow",
            AnimalType::Hamster => "Hamster",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationRequest {
    pub animal_type: String,
    #[serde(default)]
    pub pet_color: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationResult {
    pub pet_name_suggestions: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("pet color must be at most {max} characters, got {len}")]
    ColorTooLong { len: usize, max: usize },
}

impl GenerationRequest {
    pub fn new(animal_type: impl Into<String>, pet_color: impl Into<String>) -> Self {
        Self { animal_type: animal_type.into(), pet_color: pet_color.into() }
    }

    /// Enforces the color length cap. Nothing else is checked: empty values
    /// still make a (degenerate) prompt.
    pub fn validate(&self) -> Result<(), RequestError> {
        let len = self.pet_color.chars().count();
        if len > MAX_PET_COLOR_CHARS {
            return Err(RequestError::ColorTooLong { len, max: MAX_PET_COLOR_CHARS });
        }
        Ok(())
    }
}

//! Raw dimension input as typed by the user

use dumper_types::Field;
use serde::{Deserialize, Serialize};

/// Length, width and height as entered, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionInput {
    pub length: String,
    pub width: String,
    pub height: String,
}

impl DimensionInput {
    pub fn new(length: impl Into<String>, width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Length => &self.length,
            Field::Width => &self.width,
            Field::Height => &self.height,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Length => &mut self.length,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        self.length.clear();
        self.width.clear();
        self.height.clear();
    }
}

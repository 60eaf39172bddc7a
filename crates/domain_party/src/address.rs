//! Address types

use serde::{Deserialize, Serialize};

use core_kernel::text::format_postal_code;

/// A Japanese postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Seven half-width digits, without hyphen
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    /// Block and lot number
    #[serde(rename = "address")]
    pub street: Option<String>,
    pub building: Option<String>,
}

impl Address {
    /// Creates a new address
    pub fn new(
        postal_code: impl Into<String>,
        prefecture: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            prefecture: prefecture.into(),
            city: city.into(),
            street: None,
            building: None,
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Formats address for display, e.g. `〒100-0001 東京都千代田区千代田1-1`
    pub fn format(&self) -> String {
        let mut line = format!(
            "〒{} {}{}",
            format_postal_code(&self.postal_code),
            self.prefecture,
            self.city
        );
        if let Some(street) = &self.street {
            line.push_str(street);
        }
        if let Some(building) = &self.building {
            line.push(' ');
            line.push_str(building);
        }
        line
    }
}

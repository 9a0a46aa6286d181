use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_core::ValueObject;

/// Delivery address of an order. Compared by every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreetAddress {
    id: Uuid,
    street: String,
    postal_code: String,
    city: String,
}

impl ValueObject for StreetAddress {}

impl StreetAddress {
    pub fn new(
        id: Uuid,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

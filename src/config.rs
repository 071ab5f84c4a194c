//! Service contact configuration.
//!
//! Provides the deployment-level contact details that are merged into the
//! contact block of every description document. These fields come from the
//! hosting service's configuration rather than from the dataset itself.

use serde::{Deserialize, Serialize};

/// Name, email, and phone fields for one configured contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    /// Display name of the contact (person or organisation)
    pub name: String,

    /// Electronic mail address
    pub email: String,

    /// Voice phone number
    pub phone: String,
}

impl ContactFields {
    /// Create contact fields from the three components
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True when every field is empty; blank contacts are omitted from the
    /// document rather than emitted as empty nodes
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// Global configuration for description requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Inventory contact, emitted under the operator role
    pub inventory_contact: ContactFields,

    /// Data contact, emitted under the publisher role
    pub data_contact: ContactFields,
}

impl ServiceConfig {
    /// Create configuration with the given inventory contact
    pub fn with_inventory_contact(mut self, contact: ContactFields) -> Self {
        self.inventory_contact = contact;
        self
    }

    /// Create configuration with the given data contact
    pub fn with_data_contact(mut self, contact: ContactFields) -> Self {
        self.data_contact = contact;
        self
    }
}

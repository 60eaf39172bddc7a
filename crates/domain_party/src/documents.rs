//! Identity document upload slots
//!
//! The identity verification step asks for photos of one document. Each
//! document kind needs a fixed number of sides, and the upload widget is
//! driven by an `UploadSlots` plan. Construction refuses a plan that could
//! never be completed.

use serde::{Deserialize, Serialize};

use crate::error::EnrollmentError;

/// Accepted identity documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityDocument {
    DriversLicense,
    MyNumberCard,
    HealthInsuranceCard,
    Passport,
    ResidenceCard,
}

impl IdentityDocument {
    pub fn label(&self) -> &'static str {
        match self {
            IdentityDocument::DriversLicense => "運転免許証",
            IdentityDocument::MyNumberCard => "マイナンバーカード",
            IdentityDocument::HealthInsuranceCard => "健康保険証",
            IdentityDocument::Passport => "パスポート",
            IdentityDocument::ResidenceCard => "在留カード",
        }
    }

    /// Number of sides to photograph
    ///
    /// Only the front of a My Number card may be collected; the back carries
    /// the individual number.
    pub fn sides(&self) -> usize {
        match self {
            IdentityDocument::MyNumberCard | IdentityDocument::Passport => 1,
            IdentityDocument::DriversLicense
            | IdentityDocument::HealthInsuranceCard
            | IdentityDocument::ResidenceCard => 2,
        }
    }
}

/// An upload plan: a fixed number of slots, some of which must be filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSlots {
    required: usize,
    slots: Vec<Option<String>>,
}

impl UploadSlots {
    /// Upper bound on slots the upload widget can render
    pub const MAX_CAPACITY: usize = 4;

    /// Creates a plan with `capacity` slots of which `required` must be filled
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `capacity` is zero or above
    /// `MAX_CAPACITY`, when `required` is zero, or when `required` exceeds
    /// `capacity`.
    pub fn new(required: usize, capacity: usize) -> Result<Self, EnrollmentError> {
        if capacity == 0 || capacity > Self::MAX_CAPACITY {
            return Err(EnrollmentError::invalid_configuration(format!(
                "upload capacity must be between 1 and {}, got {capacity}",
                Self::MAX_CAPACITY
            )));
        }
        if required == 0 || required > capacity {
            return Err(EnrollmentError::invalid_configuration(format!(
                "required uploads must be between 1 and capacity {capacity}, got {required}"
            )));
        }

        Ok(Self {
            required,
            slots: vec![None; capacity],
        })
    }

    /// A plan requiring every side of `document`
    pub fn for_document(document: IdentityDocument) -> Result<Self, EnrollmentError> {
        Self::new(document.sides(), document.sides())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn required(&self) -> usize {
        self.required
    }

    /// Places `file_name` in slot `index`, replacing any earlier upload
    pub fn fill(
        &mut self,
        index: usize,
        file_name: impl Into<String>,
    ) -> Result<(), EnrollmentError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EnrollmentError::SlotOutOfRange { index, capacity })?;
        *slot = Some(file_name.into());
        Ok(())
    }

    /// Empties slot `index`, returning what it held
    pub fn clear(&mut self, index: usize) -> Result<Option<String>, EnrollmentError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EnrollmentError::SlotOutOfRange { index, capacity })?;
        Ok(slot.take())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Indices of the required slots still empty
    pub fn missing(&self) -> Vec<usize> {
        self.slots[..self.required]
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

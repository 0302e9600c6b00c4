//! Customer domain model.
//!
//! # Responsibility
//! - Define the canonical customer record persisted by the repository.
//! - Provide status helpers used by the active-count query.
//!
//! # Invariants
//! - `customer_id` is unique across all records and never reused.
//! - A customer is active exactly when `status == ACTIVE_STATUS`.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// Stable identifier for a customer record.
///
/// Kept as a type alias to make semantic intent explicit in signatures. Ids
/// are caller-supplied account codes, never generated by this crate.
pub type CustomerId = String;

/// Status literal that marks a customer as active.
///
/// Status is free-form text in storage; only this exact value participates in
/// the active-count query.
pub const ACTIVE_STATUS: &str = "Active";

/// Canonical customer record.
///
/// This is the full field set persisted in the `customers` table. The record
/// is plain data; all persistence rules live in the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Primary key used for every lookup and mutation.
    pub customer_id: CustomerId,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// Postal address free text.
    pub home_address: String,
    /// Contact phone number, stored as entered.
    pub phone_number: String,
    /// Contact email, stored as entered.
    pub email_address: String,
    /// Account status text. Compared against [`ACTIVE_STATUS`].
    pub status: String,
    /// Maximum credit extended to this customer.
    pub credit_limit: f64,
}

impl Customer {
    /// Creates a customer record from the full field set.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        name: impl Into<String>,
        last_name: impl Into<String>,
        home_address: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
        status: impl Into<String>,
        credit_limit: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            last_name: last_name.into(),
            home_address: home_address.into(),
            phone_number: phone_number.into(),
            email_address: email_address.into(),
            status: status.into(),
            credit_limit,
        }
    }

    /// Returns whether this customer counts as active.
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

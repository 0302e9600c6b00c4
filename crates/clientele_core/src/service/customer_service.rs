//! Customer use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{CustomerRepository, RepoResult};

/// Use-case service wrapper for customer CRUD operations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new customer through repository persistence.
    ///
    /// Returns `Ok(false)` without touching storage when the id is already
    /// taken.
    pub fn add_customer(&mut self, customer: &Customer) -> RepoResult<bool> {
        self.repo.add_customer(customer)
    }

    /// Gets one customer by id, or `None` when absent.
    pub fn search_customer(&self, customer_id: &str) -> RepoResult<Option<Customer>> {
        self.repo.search_customer(customer_id)
    }

    /// Deletes a customer by id. Absent ids are a reported no-op.
    pub fn delete_customer(&self, customer_id: &str) -> RepoResult<bool> {
        self.repo.delete_customer(customer_id)
    }

    /// Updates the credit limit of an existing customer.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_customer_credit(&self, customer_id: &str, new_limit: f64) -> RepoResult<()> {
        self.repo.update_customer_credit(customer_id, new_limit)
    }

    /// Returns the number of active customers.
    pub fn count_active_customers(&self) -> RepoResult<u32> {
        self.repo.count_active_customers()
    }
}

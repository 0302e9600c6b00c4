//! Domain model for customer records.
//!
//! # Responsibility
//! - Define the canonical data structure used by core business logic.
//! - Keep one plain record shape shared by repository and service layers.
//!
//! # Invariants
//! - Every customer is identified by a unique `CustomerId`.
//! - Deletion is a hard delete; no tombstone state is kept.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod customer;

//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `customers` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A duplicate insert never clobbers the existing record.
//! - Zero-row credit updates surface as `NotFound`, never silent success.
//! - Repositories reject connections that are not migrated to the latest
//!   schema version.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::{migrations, DbError};
use crate::model::customer::{Customer, CustomerId, ACTIVE_STATUS};
use log::{info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOMERS_TABLE: &str = "customers";

const REQUIRED_COLUMNS: &[&str] = &[
    "customer_id",
    "name",
    "last_name",
    "home_address",
    "phone_number",
    "email_address",
    "status",
    "credit_limit",
];

const CUSTOMER_SELECT_SQL: &str = "SELECT
    customer_id,
    name,
    last_name,
    home_address,
    phone_number,
    email_address,
    status,
    credit_limit
FROM customers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for customer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(CustomerId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "customer not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for customer CRUD operations.
pub trait CustomerRepository {
    /// Inserts a new customer inside a transaction scope.
    ///
    /// Returns `Ok(true)` when the row was inserted. A duplicate
    /// `customer_id` is reported via warning log and `Ok(false)`; the
    /// existing record is left unchanged.
    fn add_customer(&mut self, customer: &Customer) -> RepoResult<bool>;

    /// Returns the full record for `customer_id`, or `None` when absent.
    fn search_customer(&self, customer_id: &str) -> RepoResult<Option<Customer>>;

    /// Removes the record for `customer_id` if present.
    ///
    /// Deleting an absent id is a non-fatal no-op reported via warning log
    /// and `Ok(false)`.
    fn delete_customer(&self, customer_id: &str) -> RepoResult<bool>;

    /// Sets `credit_limit` for an existing customer.
    ///
    /// Returns `NotFound` when no record carries `customer_id`.
    fn update_customer_credit(&self, customer_id: &str, new_limit: f64) -> RepoResult<()>;

    /// Returns the number of customers whose status equals `Active`.
    fn count_active_customers(&self) -> RepoResult<u32>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known to this binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the customers
    ///   table shape does not match what queries expect.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn add_customer(&mut self, customer: &Customer) -> RepoResult<bool> {
        let tx = self.conn.transaction()?;

        let insert_result = tx.execute(
            "INSERT INTO customers (
                customer_id,
                name,
                last_name,
                home_address,
                phone_number,
                email_address,
                status,
                credit_limit
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                customer.customer_id.as_str(),
                customer.name.as_str(),
                customer.last_name.as_str(),
                customer.home_address.as_str(),
                customer.phone_number.as_str(),
                customer.email_address.as_str(),
                customer.status.as_str(),
                customer.credit_limit,
            ],
        );

        let inserted = match insert_result {
            Ok(_) => true,
            Err(err) if is_duplicate_id(&err) => {
                warn!(
                    "event=customer_add module=repo status=duplicate customer_id={}",
                    customer.customer_id
                );
                false
            }
            Err(err) => return Err(err.into()),
        };

        tx.commit()?;

        if inserted {
            info!(
                "event=customer_add module=repo status=ok customer_id={}",
                customer.customer_id
            );
        }
        Ok(inserted)
    }

    fn search_customer(&self, customer_id: &str) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE customer_id = ?1;"))?;

        let mut rows = stmt.query([customer_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_customer_row(row)?));
        }

        Ok(None)
    }

    fn delete_customer(&self, customer_id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM customers WHERE customer_id = ?1;",
            [customer_id],
        )?;

        if changed == 0 {
            warn!("event=customer_delete module=repo status=missing customer_id={customer_id}");
            return Ok(false);
        }

        info!("event=customer_delete module=repo status=ok customer_id={customer_id}");
        Ok(true)
    }

    fn update_customer_credit(&self, customer_id: &str, new_limit: f64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE customers SET credit_limit = ?2 WHERE customer_id = ?1;",
            params![customer_id, new_limit],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(customer_id.to_string()));
        }

        info!(
            "event=credit_update module=repo status=ok customer_id={customer_id} credit_limit={new_limit}"
        );
        Ok(())
    }

    fn count_active_customers(&self) -> RepoResult<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM customers WHERE status = ?1;",
            [ACTIVE_STATUS],
            |row| row.get::<_, u32>(0),
        )?;

        info!("event=customer_count module=repo status=ok active={count}");
        Ok(count)
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        customer_id: row.get("customer_id")?,
        name: row.get("name")?,
        last_name: row.get("last_name")?,
        home_address: row.get("home_address")?,
        phone_number: row.get("phone_number")?,
        email_address: row.get("email_address")?,
        status: row.get("status")?,
        credit_limit: row.get("credit_limit")?,
    })
}

fn is_duplicate_id(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [CUSTOMERS_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(CUSTOMERS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([CUSTOMERS_TABLE])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for &column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name.as_str() == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: CUSTOMERS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

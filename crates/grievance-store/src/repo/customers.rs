use crate::db::immediate_transaction;
use crate::error::{Result, StoreError};
use grievance_core::domain::{customer_name_key, Customer, CustomerId};
use rusqlite::{params, Connection, OptionalExtension};

pub struct CustomersRepo<'a> {
    conn: &'a Connection,
}

impl<'a> CustomersRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the customer matching `name` (case-insensitively) and
    /// `contact` (exactly), inserting it first when absent.
    ///
    /// The insert and the lookup hit the `(name_key, contact)` unique index,
    /// so concurrent callers with the same identity always share one row.
    pub fn resolve_or_create(&self, name: &str, contact: &str) -> Result<Customer> {
        if self.conn.is_autocommit() {
            let tx = immediate_transaction(self.conn)?;
            let customer = resolve_or_create_inner(&tx, name, contact)?;
            tx.commit()?;
            Ok(customer)
        } else {
            resolve_or_create_inner(self.conn, name, contact)
        }
    }

    pub fn get(&self, id: CustomerId) -> Result<Option<Customer>> {
        let customer = self
            .conn
            .query_row(
                "SELECT id, name, contact FROM customers WHERE id = ?1;",
                [id.get()],
                customer_from_row,
            )
            .optional()?;
        Ok(customer)
    }

    pub fn find(&self, name: &str, contact: &str) -> Result<Option<Customer>> {
        find_by_key(self.conn, &customer_name_key(name), contact)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn resolve_or_create_inner(conn: &Connection, name: &str, contact: &str) -> Result<Customer> {
    let name_key = customer_name_key(name);

    conn.execute(
        "INSERT INTO customers (name, name_key, contact) VALUES (?1, ?2, ?3)
         ON CONFLICT(name_key, contact) DO NOTHING;",
        params![name, name_key, contact],
    )?;

    find_by_key(conn, &name_key, contact)?
        .ok_or_else(|| StoreError::InvalidData("missing customer after upsert".to_string()))
}

fn find_by_key(conn: &Connection, name_key: &str, contact: &str) -> Result<Option<Customer>> {
    let customer = conn
        .query_row(
            "SELECT id, name, contact FROM customers WHERE name_key = ?1 AND contact = ?2;",
            params![name_key, contact],
            customer_from_row,
        )
        .optional()?;
    Ok(customer)
}

fn customer_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: CustomerId(row.get(0)?),
        name: row.get(1)?,
        contact: row.get(2)?,
    })
}

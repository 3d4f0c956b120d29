use crate::error::Result;
use grievance_core::domain::{
    customer_name_key, Complaint, ComplaintId, ComplaintStatus, ComplaintWithCustomer,
    CustomerId,
};
use grievance_core::sentiment::Sentiment;
use rusqlite::{params, Connection};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ComplaintNew {
    pub customer_id: CustomerId,
    pub category: String,
    pub description: String,
    pub sentiment: Sentiment,
    pub created_at: i64,
}

pub struct ComplaintsRepo<'a> {
    conn: &'a Connection,
}

const COMPLAINT_COLUMNS: &str =
    "c.id, c.customer_id, c.category, c.description, c.status, c.created_at, c.sentiment";

impl<'a> ComplaintsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a new complaint in the `Open` state.
    pub fn insert(&self, input: ComplaintNew) -> Result<Complaint> {
        let status = ComplaintStatus::Open;
        self.conn.execute(
            "INSERT INTO complaints (customer_id, category, description, status, created_at, sentiment)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                input.customer_id.get(),
                input.category,
                input.description,
                status.as_str(),
                input.created_at,
                input.sentiment.as_str(),
            ],
        )?;
        let id = ComplaintId(self.conn.last_insert_rowid());

        Ok(Complaint {
            id,
            customer_id: input.customer_id,
            category: input.category,
            description: input.description,
            status,
            created_at: input.created_at,
            sentiment: input.sentiment,
        })
    }

    pub fn get(&self, id: ComplaintId) -> Result<Option<Complaint>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints c WHERE c.id = ?1;"
        ))?;
        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(complaint_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn get_with_customer(&self, id: ComplaintId) -> Result<Option<ComplaintWithCustomer>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS}, cu.name, cu.contact
             FROM complaints c
             INNER JOIN customers cu ON cu.id = c.customer_id
             WHERE c.id = ?1;"
        ))?;
        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(complaint_with_customer_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Complaints of every customer whose name matches case-insensitively,
    /// in storage order.
    pub fn list_for_customer_name(&self, name: &str) -> Result<Vec<Complaint>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS}
             FROM complaints c
             INNER JOIN customers cu ON cu.id = c.customer_id
             WHERE cu.name_key = ?1
             ORDER BY c.id ASC;"
        ))?;
        let mut rows = stmt.query([customer_name_key(name)])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(complaint_from_row(row)?);
        }
        Ok(items)
    }

    /// Complaints whose stored sentiment equals `label` ignoring case. Labels
    /// outside the known set simply match nothing.
    pub fn list_by_sentiment(&self, label: &str) -> Result<Vec<ComplaintWithCustomer>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS}, cu.name, cu.contact
             FROM complaints c
             INNER JOIN customers cu ON cu.id = c.customer_id
             WHERE lower(c.sentiment) = lower(?1)
             ORDER BY c.id ASC;"
        ))?;
        let mut rows = stmt.query([label])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(complaint_with_customer_from_row(row)?);
        }
        Ok(items)
    }

    /// Overwrites the status. Returns `false` when no complaint has `id`.
    pub fn set_status(&self, id: ComplaintId, status: ComplaintStatus) -> Result<bool> {
        let updated = self.conn.execute(
            "UPDATE complaints SET status = ?2 WHERE id = ?1;",
            params![id.get(), status.as_str()],
        )?;
        Ok(updated > 0)
    }
}

fn complaint_from_row(row: &rusqlite::Row<'_>) -> Result<Complaint> {
    let status_raw: String = row.get(4)?;
    let sentiment_raw: String = row.get(6)?;
    Ok(Complaint {
        id: ComplaintId(row.get(0)?),
        customer_id: CustomerId(row.get(1)?),
        category: row.get(2)?,
        description: row.get(3)?,
        status: ComplaintStatus::from_str(&status_raw)?,
        created_at: row.get(5)?,
        sentiment: Sentiment::from_str(&sentiment_raw)?,
    })
}

fn complaint_with_customer_from_row(row: &rusqlite::Row<'_>) -> Result<ComplaintWithCustomer> {
    Ok(ComplaintWithCustomer {
        complaint: complaint_from_row(row)?,
        customer_name: row.get(7)?,
        customer_contact: row.get(8)?,
    })
}

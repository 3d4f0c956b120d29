use crate::error::Result;
use grievance_core::domain::{ComplaintId, CustomerId, Interaction, InteractionId};
use grievance_core::sentiment::Sentiment;
use rusqlite::{params, Connection};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct InteractionNew {
    pub customer_id: CustomerId,
    pub complaint_id: Option<ComplaintId>,
    pub message: String,
    pub sender: String,
    pub sentiment: Sentiment,
    pub timestamp: i64,
}

pub struct InteractionsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> InteractionsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Appends one interaction. Rows are never updated or removed.
    pub fn add(&self, input: InteractionNew) -> Result<Interaction> {
        self.conn.execute(
            "INSERT INTO interactions (customer_id, complaint_id, message, sender, sentiment, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                input.customer_id.get(),
                input.complaint_id.map(|id| id.get()),
                input.message,
                input.sender,
                input.sentiment.as_str(),
                input.timestamp,
            ],
        )?;

        Ok(Interaction {
            id: InteractionId(self.conn.last_insert_rowid()),
            customer_id: input.customer_id,
            complaint_id: input.complaint_id,
            message: input.message,
            sender: input.sender,
            sentiment: input.sentiment,
            timestamp: input.timestamp,
        })
    }

    pub fn list_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Interaction>> {
        self.list_where("customer_id = ?1", customer_id.get())
    }

    pub fn list_for_complaint(&self, complaint_id: ComplaintId) -> Result<Vec<Interaction>> {
        self.list_where("complaint_id = ?1", complaint_id.get())
    }

    fn list_where(&self, predicate: &'static str, value: i64) -> Result<Vec<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, customer_id, complaint_id, message, sender, sentiment, timestamp
             FROM interactions
             WHERE {predicate}
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([value])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(interaction_from_row(row)?);
        }
        Ok(items)
    }
}

fn interaction_from_row(row: &rusqlite::Row<'_>) -> Result<Interaction> {
    let sentiment_raw: String = row.get(5)?;
    Ok(Interaction {
        id: InteractionId(row.get(0)?),
        customer_id: CustomerId(row.get(1)?),
        complaint_id: row.get::<_, Option<i64>>(2)?.map(ComplaintId),
        message: row.get(3)?,
        sender: row.get(4)?,
        sentiment: Sentiment::from_str(&sentiment_raw)?,
        timestamp: row.get(6)?,
    })
}

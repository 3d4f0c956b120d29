use crate::db::immediate_transaction;
use crate::error::{Result, StoreError};
use grievance_core::domain::{DailyMetrics, DailyMetricsId, MetricField};
use rusqlite::{Connection, OptionalExtension};

pub struct MetricsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> MetricsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Adds one to `field` on the row for `date`, creating the row with zeroed
    /// counters first when the day has no events yet.
    ///
    /// Creation and increment are one upsert statement on the unique `date`
    /// column, so concurrent increments are never lost and a day never gets
    /// a second row.
    pub fn increment(&self, field: MetricField, date: &str) -> Result<DailyMetrics> {
        if self.conn.is_autocommit() {
            let tx = immediate_transaction(self.conn)?;
            let metrics = increment_inner(&tx, field, date)?;
            tx.commit()?;
            Ok(metrics)
        } else {
            increment_inner(self.conn, field, date)
        }
    }

    pub fn get(&self, date: &str) -> Result<Option<DailyMetrics>> {
        get_inner(self.conn, date)
    }
}

fn increment_inner(conn: &Connection, field: MetricField, date: &str) -> Result<DailyMetrics> {
    let column = field.column();
    conn.execute(
        &format!(
            "INSERT INTO daily_metrics (date, {column}) VALUES (?1, 1)
             ON CONFLICT(date) DO UPDATE SET {column} = {column} + 1;"
        ),
        [date],
    )?;

    get_inner(conn, date)?
        .ok_or_else(|| StoreError::InvalidData(format!("missing metrics row for {date}")))
}

fn get_inner(conn: &Connection, date: &str) -> Result<Option<DailyMetrics>> {
    let metrics = conn
        .query_row(
            "SELECT id, date, total_complaints, resolved_complaints, escalations
             FROM daily_metrics WHERE date = ?1;",
            [date],
            |row| {
                Ok(DailyMetrics {
                    id: DailyMetricsId(row.get(0)?),
                    date: row.get(1)?,
                    total_complaints: row.get(2)?,
                    resolved_complaints: row.get(3)?,
                    escalations: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(metrics)
}

//! Insight repository: whole-set replacement and ordered reads.

use pulse_core::entities::Insight;

use crate::PulseDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_date, parse_enum};

const SELECT_COLUMNS: &str = "SELECT headline, activity, classification_code, category, location,
        trend_score, growth_forecast, composite_index, date FROM insights";

fn row_to_insight(row: &libsql::Row) -> Result<Insight, DatabaseError> {
    Ok(Insight {
        headline: row.get::<String>(0)?,
        activity: row.get::<String>(1)?,
        classification_code: row.get::<String>(2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        location: row.get::<String>(4)?,
        trend_score: row.get::<f64>(5)?,
        growth_forecast: row.get::<f64>(6)?,
        composite_index: row.get::<f64>(7)?,
        date: parse_date(&row.get::<String>(8)?)?,
    })
}

async fn insert_all(conn: &libsql::Connection, insights: &[Insight]) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM insights", ()).await?;
    for insight in insights {
        conn.execute(
            "INSERT INTO insights (headline, activity, classification_code, category, location,
                trend_score, growth_forecast, composite_index, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            libsql::params![
                insight.headline.as_str(),
                insight.activity.as_str(),
                insight.classification_code.as_str(),
                insight.category.as_str(),
                insight.location.as_str(),
                insight.trend_score,
                insight.growth_forecast,
                insight.composite_index,
                insight.date.format("%Y-%m-%d").to_string()
            ],
        )
        .await?;
    }
    Ok(())
}

impl PulseDb {
    /// Replace the stored insight set with `insights` in one transaction.
    ///
    /// On any failure the transaction is rolled back and the previous set
    /// stays visible.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement or the commit fails.
    pub async fn replace_insights(&self, insights: &[Insight]) -> Result<(), DatabaseError> {
        let tx = self.conn().transaction().await?;
        match insert_all(&tx, insights).await {
            Ok(()) => {
                tx.commit().await?;
                tracing::debug!(count = insights.len(), "insights replaced");
                Ok(())
            }
            Err(error) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(%rollback, "rollback after failed insight replace also failed");
                }
                Err(error)
            }
        }
    }

    /// Every stored insight in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_insights(&self) -> Result<Vec<Insight>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_COLUMNS} ORDER BY id"), ())
            .await?;

        let mut insights = Vec::new();
        while let Some(row) = rows.next().await? {
            insights.push(row_to_insight(&row)?);
        }
        Ok(insights)
    }

    /// Number of stored insights.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_insights(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM insights", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::InvalidState(format!("row count: {e}")))
    }
}

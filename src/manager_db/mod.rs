pub mod errors;

use rusqlite::{params, Connection};
use crate::manager_db::errors::DBError;
use crate::summary::WeatherSummary;

/// Append-only store for weather summaries.
///
/// Holds the database path rather than an open connection; each write
/// acquires its own connection and releases it when done, so a cycle
/// never depends on a long-lived shared handle.
#[derive(Clone)]
pub struct DB {
    db_path: String,
}

impl DB {
    /// Creates a new instance of DB and makes sure the summary table
    /// exists
    ///
    /// # Arguments
    ///
    /// * 'db_path' - full path to db file
    pub fn new(db_path: &str) -> Result<Self, DBError> {
        let db_conn = Connection::open(db_path)?;
        db_conn.execute(
           "CREATE TABLE IF NOT EXISTS weather_summary (
                id integer primary key autoincrement,
                city text,
                date text,
                main_weather text,
                current_temp real,
                feels_like real,
                avg_temp real,
                min_temp real,
                max_temp real,
                update_time text
           )",
           [],
        )?;

        Ok(DB { db_path: db_path.to_string() })
    }

    /// Appends a summary row. There is no uniqueness constraint, a
    /// repeated fetch for the same city and date simply adds another row.
    ///
    /// # Arguments
    ///
    /// * 'summary' - the summary of one fetch cycle
    pub fn insert_summary(&self, summary: &WeatherSummary) -> Result<(), DBError> {
        let db_conn = Connection::open(&self.db_path)?;

        db_conn.execute(
            "INSERT INTO weather_summary (city, date, main_weather, current_temp, feels_like, avg_temp, min_temp, max_temp, update_time)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                summary.city,
                summary.date,
                summary.main_weather,
                summary.current_temp,
                summary.feels_like,
                summary.avg_temp,
                summary.min_temp,
                summary.max_temp,
                summary.update_time
            ],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn summary(city: &str) -> WeatherSummary {
        WeatherSummary {
            city: city.to_string(),
            date: "2024-01-01".to_string(),
            main_weather: "Clear".to_string(),
            current_temp: 26.85,
            feels_like: 25.85,
            avg_temp: 29.35,
            min_temp: 26.85,
            max_temp: 31.85,
            update_time: "2024-01-01 09:00:00".to_string(),
        }
    }

    #[test]
    fn inserts_summary_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.db");
        let db = DB::new(path.to_str().unwrap()).unwrap();

        db.insert_summary(&summary("Delhi")).unwrap();
        db.insert_summary(&summary("Delhi")).unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM weather_summary WHERE city = 'Delhi'", [], |row| row.get(0))
            .unwrap();

        // duplicates are allowed by design
        assert_eq!(count, 2);
    }

    #[test]
    fn stored_row_matches_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.db");
        let db = DB::new(path.to_str().unwrap()).unwrap();

        db.insert_summary(&summary("Mumbai")).unwrap();

        let conn = Connection::open(&path).unwrap();
        let (city, main_weather, avg_temp, update_time): (String, String, f64, String) = conn
            .query_row(
                "SELECT city, main_weather, avg_temp, update_time FROM weather_summary",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();

        assert_eq!(city, "Mumbai");
        assert_eq!(main_weather, "Clear");
        assert_eq!(avg_temp, 29.35);
        assert_eq!(update_time, "2024-01-01 09:00:00");
    }
}

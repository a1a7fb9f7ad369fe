use crate::Database;
use crate::StoreError;
use crate::models::SubmissionRow;

impl Database {
    /// Insert a submission and return the store-assigned id. The caller has
    /// already validated the fields and substituted the service sentinel.
    pub fn insert_submission(
        &self,
        name: &str,
        email: &str,
        service: &str,
        message: &str,
    ) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (name, email, service, message) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, email, service, message],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// All submissions, newest first. Id breaks ties within one clock second.
    pub fn list_submissions(&self) -> Result<Vec<SubmissionRow>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, service, message, created_at
                 FROM messages
                 ORDER BY created_at DESC, id DESC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(SubmissionRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        service: row.get(3)?,
                        message: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?
                .collect::<Result<Vec<_>, rusqlite::Error>>()?;

            Ok(rows)
        })
    }

    /// Deleting an id that does not exist is a no-op, not an error.
    pub fn delete_submission(&self, id: i64) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    fn backdate(db: &Database, id: i64, stamp: &str) {
        db.with_conn(|conn| {
            conn.execute(
                "UPDATE messages SET created_at = ?1 WHERE id = ?2",
                rusqlite::params![stamp, id],
            )?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let (_dir, db) = open_test_db();

        let first = db
            .insert_submission("Ann", "ann@x.com", "CAD", "Need drawings")
            .unwrap();
        let second = db
            .insert_submission("Ben", "ben@x.com", "Not Specified", "Quote please")
            .unwrap();

        assert!(second > first);
    }

    #[test]
    fn list_orders_by_timestamp_descending() {
        let (_dir, db) = open_test_db();

        let old = db.insert_submission("Old", "old@x.com", "CAD", "first").unwrap();
        let new = db.insert_submission("New", "new@x.com", "CAD", "second").unwrap();
        backdate(&db, old, "2024-01-01 08:00:00");
        backdate(&db, new, "2024-06-01 08:00:00");

        let rows = db.list_submissions().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "New");
        assert_eq!(rows[1].name, "Old");
    }

    #[test]
    fn list_breaks_timestamp_ties_by_id() {
        let (_dir, db) = open_test_db();

        // Both inserts land within the same clock second.
        db.insert_submission("First", "a@x.com", "CAD", "one").unwrap();
        db.insert_submission("Second", "b@x.com", "CAD", "two").unwrap();

        let rows = db.list_submissions().unwrap();
        assert_eq!(rows[0].name, "Second");
        assert_eq!(rows[1].name, "First");
    }

    #[test]
    fn persisted_row_keeps_submitted_fields() {
        let (_dir, db) = open_test_db();

        let id = db
            .insert_submission("Ann", "ann@x.com", "3D Modeling", "Need a 3D model")
            .unwrap();

        let rows = db.list_submissions().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name, "Ann");
        assert_eq!(rows[0].email, "ann@x.com");
        assert_eq!(rows[0].service, "3D Modeling");
        assert_eq!(rows[0].message, "Need a 3D model");
        assert!(!rows[0].created_at.is_empty());
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let (_dir, db) = open_test_db();

        let keep = db.insert_submission("Keep", "k@x.com", "CAD", "keep me").unwrap();
        let drop = db.insert_submission("Drop", "d@x.com", "CAD", "drop me").unwrap();

        db.delete_submission(drop).unwrap();

        let rows = db.list_submissions().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, keep);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let (_dir, db) = open_test_db();

        db.insert_submission("Ann", "ann@x.com", "CAD", "hello").unwrap();
        db.delete_submission(9999).unwrap();

        assert_eq!(db.list_submissions().unwrap().len(), 1);
    }

    #[test]
    fn reopen_preserves_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_submission("Ann", "ann@x.com", "CAD", "hello").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.list_submissions().unwrap().len(), 1);
    }
}

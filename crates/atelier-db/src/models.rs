/// Database row types — these map directly to SQLite rows.

pub struct SubmissionRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
    pub created_at: String,
}

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params, params_from_iter};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

/// SQLite caps host parameters per statement; batch lookups are chunked below it.
const MAX_BATCH_PARAMS: usize = 500;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Maps a UNIQUE violation to `Error::Conflict` with `message`.
fn map_insert_error(err: rusqlite::Error, message: &str) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            Error::Conflict(message.to_string())
        }
        e => Error::from(e),
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        student_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
    })
}

fn assignment_from_row(row: &Row<'_>) -> rusqlite::Result<AssignmentMeta> {
    Ok(AssignmentMeta {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: parse_datetime(&row.get::<_, String>(3)?),
        created_by: row.get(4)?,
    })
}

fn submission_from_row(row: &Row<'_>) -> rusqlite::Result<AssignmentSubmission> {
    Ok(AssignmentSubmission {
        id: row.get(0)?,
        student_id: row.get(1)?,
        assignment_id: row.get(2)?,
        content: row.get(3)?,
        version: row.get(4)?,
        timestamp: parse_datetime(&row.get::<_, String>(5)?),
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Student operations

    fn create_student(&self, student: &Student) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO students (id, student_id, name, email) VALUES (?1, ?2, ?3, ?4)",
                params![student.id, student.student_id, student.name, student.email],
            )
            .map_err(|e| {
                map_insert_error(
                    e,
                    &format!("student '{}' already exists", student.student_id),
                )
            })?;
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id, student_id, name, email FROM students ORDER BY seq")?;

        let rows = stmt.query_map([], student_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Assignment operations

    fn create_assignment(&self, assignment: &AssignmentMeta) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO assignments (id, title, description, due_date, created_by)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    assignment.id,
                    assignment.title,
                    assignment.description,
                    format_datetime(&assignment.due_date),
                    assignment.created_by,
                ],
            )
            .map_err(|e| map_insert_error(e, "assignment already exists"))?;
        Ok(())
    }

    fn list_assignments(&self) -> Result<Vec<AssignmentMeta>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, description, due_date, created_by FROM assignments ORDER BY seq",
        )?;

        let rows = stmt.query_map([], assignment_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_assignments_by_ids(&self, ids: &[String]) -> Result<Vec<AssignmentMeta>> {
        let conn = self.conn();
        let mut found = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_BATCH_PARAMS) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT id, title, description, due_date, created_by
                 FROM assignments WHERE id IN ({placeholders})"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(chunk.iter()), assignment_from_row)?;
            for row in rows {
                found.push(row?);
            }
        }

        Ok(found)
    }

    // Submission operations

    fn create_submission(&self, submission: &AssignmentSubmission) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO submissions (id, student_id, assignment_id, content, version, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    submission.id,
                    submission.student_id,
                    submission.assignment_id,
                    submission.content,
                    submission.version,
                    format_datetime(&submission.timestamp),
                ],
            )
            .map_err(|e| {
                map_insert_error(
                    e,
                    &format!(
                        "version {} of assignment '{}' already submitted by student '{}'",
                        submission.version, submission.assignment_id, submission.student_id
                    ),
                )
            })?;
        Ok(())
    }

    fn list_submissions(&self) -> Result<Vec<AssignmentSubmission>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, student_id, assignment_id, content, version, timestamp
             FROM submissions ORDER BY seq",
        )?;

        let rows = stmt.query_map([], submission_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }
}

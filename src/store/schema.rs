pub const SCHEMA: &str = r#"
-- Students are registered once and never mutated
CREATE TABLE IF NOT EXISTS students (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    student_id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    email TEXT NOT NULL
);

-- Assignment metadata
CREATE TABLE IF NOT EXISTS assignments (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    due_date TEXT NOT NULL,
    created_by TEXT NOT NULL
);

-- Submissions reference students and assignments by id only; neither
-- reference is a foreign key, dangling assignment ids resolve to NULL on read
CREATE TABLE IF NOT EXISTS submissions (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    student_id TEXT NOT NULL,
    assignment_id TEXT NOT NULL,
    content TEXT NOT NULL,
    version INTEGER NOT NULL,
    timestamp TEXT NOT NULL,

    UNIQUE(student_id, assignment_id, version)
);

CREATE INDEX IF NOT EXISTS idx_submissions_assignment ON submissions(assignment_id);
"#;

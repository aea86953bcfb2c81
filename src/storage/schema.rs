//! Database schema definitions

/// Name of the single backing table
pub const FILES_TABLE: &str = "files";

/// SQL to create the files table
pub const CREATE_FILES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    content TEXT NOT NULL
)
"#;

/// SQL to check whether the files table is already present
pub const FILES_TABLE_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)";

pub const INSERT_FILE: &str = "INSERT INTO files (name, content) VALUES (?1, ?2)";
pub const DELETE_FILE: &str = "DELETE FROM files WHERE id = ?1";
pub const FILE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM files WHERE id = ?1)";
pub const SELECT_ALL_FILES: &str = "SELECT id, name, content FROM files ORDER BY id";
pub const SELECT_CONTENT: &str = "SELECT content FROM files WHERE id = ?1";
pub const COUNT_FILES: &str = "SELECT COUNT(*) FROM files";

/// Update statements, one per updatable column
pub const UPDATE_NAME: &str = "UPDATE files SET name = ?1 WHERE id = ?2";
pub const UPDATE_CONTENT: &str = "UPDATE files SET content = ?1 WHERE id = ?2";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_FILES_TABLE]
}

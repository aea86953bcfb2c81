use crate::record::FileRecord;
use tabled::{settings::Style, Table, Tabled};

/// Lines of content shown per record before the DATA cell is cut short
pub const MAX_PREVIEW_LINES: usize = 100;

#[derive(Tabled)]
pub struct RecordRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "DATA")]
    pub data: String,
}

impl From<&FileRecord> for RecordRow {
    fn from(record: &FileRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            data: preview(&record.content),
        }
    }
}

/// Bordered `ID | NAME | DATA` table, rebuilt on every `show`
pub struct RecordTable {
    rows: Vec<RecordRow>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    pub fn add_record(&mut self, record: &FileRecord) {
        self.rows.push(RecordRow::from(record));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(&self) -> String {
        Table::new(&self.rows).with(Style::ascii()).to_string()
    }
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(content: &str) -> String {
    let mut lines = content.lines();
    let shown: Vec<&str> = lines.by_ref().take(MAX_PREVIEW_LINES).collect();
    let mut text = shown.join("\n");
    if lines.next().is_some() {
        text.push_str("\n…");
    }
    text
}

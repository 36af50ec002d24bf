use {
    crate::error::{self, Result},
    def::{Row, Schema, Value},
    snafu::prelude::*,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

pub(crate) const EXTENSION: &str = "tab";
const TEMP_EXTENSION: &str = "tab.tmp";

/// The `.tab` file of one table.
///
/// The first line is the tab separated header, every following line is
/// `id<TAB>field...`. Tabs, newlines and backslashes inside cells are escaped
/// with a backslash.
#[derive(Debug, Clone)]
pub(crate) struct TableFile {
    path: PathBuf,
}

impl TableFile {
    pub(crate) fn new(dir: &Path, table: &str) -> Self {
        Self {
            path: dir.join(format!("{}.{}", table, EXTENSION)),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the schema and the rows. Blank lines and lines with an empty id
    /// are skipped, ids outside `1..=Row::MAX_ID` are corrupt.
    pub(crate) fn read(&self) -> Result<(Schema, Vec<Row>)> {
        let content = fs::read_to_string(&self.path).context(error::ReadSnafu { path: &self.path })?;
        let mut lines = content.lines().enumerate();

        let schema = lines
            .next()
            .and_then(|(_, header)| Schema::from_header(header.split('\t')).ok())
            .context(error::CorruptFileSnafu {
                path: &self.path,
                line: 1_usize,
            })?;

        let mut rows = vec![];
        for (i, line) in lines {
            let mut cells = line.split('\t');
            let id = match cells.next() {
                Some(id) if !id.trim().is_empty() => id.trim(),
                _ => continue,
            };

            let corrupt = error::CorruptFileSnafu {
                path: &self.path,
                line: i + 1,
            };
            let id = id
                .parse::<u64>()
                .ok()
                .filter(|id| (1..=Row::MAX_ID).contains(id))
                .context(corrupt.clone())?;
            let fields: Vec<_> = cells.map(|cell| Value::from_cell(&unescape(cell))).collect();
            ensure!(fields.len() == schema.field_count(), corrupt);

            rows.push(Row::new(id, fields));
        }

        Ok((schema, rows))
    }

    /// Rewrites the whole file through a sibling temporary file.
    pub(crate) fn write(&self, schema: &Schema, rows: &[Row]) -> Result<()> {
        let mut content = schema.columns().join("\t");
        content.push('\n');

        for row in rows {
            content.push_str(&row.id().to_string());
            for value in &row.fields {
                content.push('\t');
                content.push_str(&escape(&value.to_string()));
            }
            content.push('\n');
        }

        let temp = self.path.with_extension(TEMP_EXTENSION);
        fs::write(&temp, content).context(error::WriteSnafu { path: &temp })?;
        fs::rename(&temp, &self.path).context(error::WriteSnafu { path: &self.path })
    }

    pub(crate) fn remove(&self) -> Result<()> {
        fs::remove_file(&self.path).context(error::RemoveSnafu { path: &self.path })
    }
}

fn escape(cell: &str) -> String {
    let mut escaped = String::with_capacity(cell.len());
    for c in cell.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn unescape(cell: &str) -> String {
    let mut unescaped = String::with_capacity(cell.len());
    let mut chars = cell.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => unescaped.push('\t'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some(other) => unescaped.push(other),
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

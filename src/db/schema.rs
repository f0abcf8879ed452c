//! Shape of the "Cafe Data" table and the parameterized statements run against it.
//!
//! Statements use `$N` placeholders, which both PostgreSQL and SQLite accept.

use crate::constants::CAFE_TABLE;

/// Columns of the café table, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    CafeName,
    Location,
    OpenTime,
    CloseTime,
    CoffeeRating,
    WifiRating,
    PowerRating,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::CafeName,
        Column::Location,
        Column::OpenTime,
        Column::CloseTime,
        Column::CoffeeRating,
        Column::WifiRating,
        Column::PowerRating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::CafeName => "cafe_name",
            Column::Location => "location",
            Column::OpenTime => "open_time",
            Column::CloseTime => "close_time",
            Column::CoffeeRating => "coffee_rating",
            Column::WifiRating => "wifi_rating",
            Column::PowerRating => "power_rating",
        }
    }

    /// Whether the store enforces uniqueness on this column
    pub fn is_unique(self) -> bool {
        matches!(self, Column::CafeName | Column::Location)
    }

    /// Columns that carry a uniqueness constraint
    pub fn unique() -> impl Iterator<Item = Column> {
        Self::ALL.into_iter().filter(|c| c.is_unique())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn table() -> String {
    format!("\"{}\"", CAFE_TABLE)
}

fn column_list() -> String {
    Column::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// DDL creating the table if it is absent
pub fn create_table_sql() -> String {
    let columns = Column::ALL
        .iter()
        .map(|c| {
            if c.is_unique() {
                format!("    {} TEXT NOT NULL UNIQUE", c)
            } else {
                format!("    {} TEXT NOT NULL", c)
            }
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n)", table(), columns)
}

/// INSERT of a full row; binds follow [`Column::ALL`]
pub fn insert_sql() -> String {
    let placeholders = (1..=Column::ALL.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table(),
        column_list(),
        placeholders
    )
}

/// SELECT of every row in the store's natural order
pub fn select_all_sql() -> String {
    format!("SELECT {} FROM {}", column_list(), table())
}

/// DELETE of every row whose `column` equals `$1`
pub fn delete_where_sql(column: Column) -> String {
    format!("DELETE FROM {} WHERE {} = $1", table(), column)
}

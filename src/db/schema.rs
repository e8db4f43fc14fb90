/// Tables keep the loose column types of databases created by earlier
/// versions of the tracker, so an existing `expenses.db` opens in place.
/// Budgets written by those versions may hold duplicate or mixed-case rows;
/// they are normalized before the unique index is created.
pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    date     TEXT,
    category TEXT,
    amount   REAL
);

CREATE TABLE IF NOT EXISTS budgets (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    month    TEXT,
    category TEXT,
    amount   REAL
);

UPDATE budgets SET category = LOWER(category) WHERE category != LOWER(category);
DELETE FROM budgets WHERE id NOT IN (
    SELECT MAX(id) FROM budgets GROUP BY month, category
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_budgets_month_category ON budgets(month, category);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];

mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

const UPSERT_BUDGET: &str = "INSERT INTO budgets (month, category, amount)
     VALUES (?1, LOWER(?2), ?3)
     ON CONFLICT(month, category) DO UPDATE SET amount = excluded.amount";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        tracing::debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database, or one created before versioning existed
            let tx = self.conn.transaction()?;
            tx.execute_batch(schema::SCHEMA_V1)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            tx.commit()?;
            tracing::info!(version = schema::CURRENT_VERSION, "Applied initial schema");
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                tracing::info!(from = from_version, to = from_version + 1, "Migrating schema");
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn add_expense(&self, expense: &Expense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (date, category, amount) VALUES (?1, LOWER(?2), ?3)",
            params![expense.date, expense.category, expense.amount.to_string()],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(
            id,
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "Expense added"
        );
        Ok(id)
    }

    /// Expenses whose date falls in `month` ("YYYY-MM"), oldest first.
    pub(crate) fn get_expenses_for_month(&self, month: &str) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, COALESCE(date, ''), COALESCE(category, ''), COALESCE(CAST(amount AS TEXT), '0')
             FROM expenses
             WHERE strftime('%Y-%m', date) = ?1
             ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![month.trim()], |row| {
            let amount_str: String = row.get(3)?;
            Ok(Expense {
                id: Some(row.get(0)?),
                date: row.get(1)?,
                category: row.get(2)?,
                amount: parse_stored_amount(&amount_str),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_expense_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }

    /// Spend per lower-cased category for `month`.
    pub(crate) fn spending_by_category(&self, month: &str) -> Result<BTreeMap<String, Decimal>> {
        let expenses = self.get_expenses_for_month(month)?;
        Ok(spend_by_category(&expenses)?)
    }

    pub(crate) fn spent_in_category(&self, month: &str, category: &str) -> Result<Decimal> {
        let mut stmt = self.conn.prepare(
            "SELECT COALESCE(CAST(amount AS TEXT), '0') FROM expenses
             WHERE strftime('%Y-%m', date) = ?1 AND LOWER(category) = LOWER(?2)",
        )?;
        let rows = stmt.query_map(params![month.trim(), category], |row| {
            row.get::<_, String>(0)
        })?;
        let amounts = rows
            .map(|r| r.map(|amount| parse_stored_amount(&amount)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(checked_total(amounts, &Category::display_name(category))?)
    }

    // ── Budgets ───────────────────────────────────────────────

    /// Insert or replace the budget for (month, category) in one statement.
    pub(crate) fn set_budget(&self, budget: &Budget) -> Result<()> {
        self.conn.execute(
            UPSERT_BUDGET,
            params![budget.month.trim(), budget.category, budget.amount.to_string()],
        )?;
        tracing::info!(
            month = %budget.month,
            category = %budget.category,
            amount = %budget.amount,
            "Budget set"
        );
        Ok(())
    }

    /// Writes every budget or none of them.
    pub(crate) fn set_budgets(&mut self, budgets: &[Budget]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for budget in budgets {
            tx.execute(
                UPSERT_BUDGET,
                params![budget.month.trim(), budget.category, budget.amount.to_string()],
            )?;
        }
        tx.commit()?;
        tracing::info!(count = budgets.len(), "Budgets saved");
        Ok(budgets.len())
    }

    pub(crate) fn get_budgets(&self, month: &str) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, COALESCE(month, ''), COALESCE(category, ''), COALESCE(CAST(amount AS TEXT), '0')
             FROM budgets WHERE month = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![month.trim()], |row| {
            let amt_str: String = row.get(3)?;
            Ok(Budget {
                id: Some(row.get(0)?),
                month: row.get(1)?,
                category: row.get(2)?,
                amount: parse_stored_amount(&amt_str),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_budget(&self, month: &str, category: &str) -> Result<Option<Decimal>> {
        let result = self.conn.query_row(
            "SELECT COALESCE(CAST(amount AS TEXT), '0') FROM budgets
             WHERE month = ?1 AND LOWER(category) = LOWER(?2)",
            params![month.trim(), category],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(amt) => Ok(Some(parse_stored_amount(&amt))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // ── Analytics ─────────────────────────────────────────────

    pub(crate) fn monthly_summary(&self, month: &str) -> Result<MonthlySummary> {
        let expenses = self.get_expenses_for_month(month)?;
        let budgets = self.get_budgets(month)?;
        Ok(MonthlySummary::build(month.trim(), expenses, &budgets)?)
    }

    pub(crate) fn check_budget_alerts(&self, month: &str) -> Result<Vec<BudgetAlert>> {
        let spending = self.spending_by_category(month)?;
        let budgets = self.get_budgets(month)?;
        let alerts = evaluate_alerts(&spending, &budgets);
        tracing::debug!(month = month.trim(), count = alerts.len(), "Budget alerts computed");
        Ok(alerts)
    }

    /// Checks a planned expense against what is left of its month's budget.
    /// Nothing is written.
    pub(crate) fn check_plan(&self, plan: &PlannedExpense) -> Result<PlanOutcome> {
        let month = plan.month();
        let category = plan.category.key();
        let budget = self.get_budget(&month, category)?;
        let spent = match budget {
            Some(_) => self.spent_in_category(&month, category)?,
            None => Decimal::ZERO,
        };
        Ok(PlanOutcome::evaluate(plan, budget, spent))
    }
}

/// Amount columns are REAL; values come back through `CAST(... AS TEXT)`,
/// which uses exponent notation for very large or small values.
fn parse_stored_amount(s: &str) -> Decimal {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or_default()
}

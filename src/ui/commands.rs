use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, View};
use crate::db::Database;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("p", "Go to Plan Expense", cmd_plan, r);
    register_command!("plan", "Go to Plan Expense", cmd_plan, r);
    register_command!("a", "Go to Add Expense", cmd_add, r);
    register_command!("add", "Go to Add Expense", cmd_add, r);
    register_command!("b", "Go to Set Budget", cmd_budget, r);
    register_command!("budget", "Go to Set Budget", cmd_budget, r);
    register_command!("s", "Go to Monthly Summary", cmd_summary, r);
    register_command!("summary", "Go to Monthly Summary", cmd_summary, r);
    register_command!("al", "Go to Budget Alerts", cmd_alerts, r);
    register_command!("alerts", "Go to Budget Alerts", cmd_alerts, r);
    register_command!("split", "Go to Split Expense", cmd_split, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("month", "Set month (e.g. :month 2024-05)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2024-05)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "clear-plan",
        "Clear this session's planned expenses",
        cmd_clear_plan,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.end_session();
    Ok(())
}

fn cmd_plan(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::Plan)
}

fn cmd_add(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::AddExpense)
}

fn cmd_budget(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::SetBudget)
}

fn cmd_summary(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::MonthlySummary)
}

fn cmd_alerts(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::BudgetAlerts)
}

fn cmd_split(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.switch_view(db, View::Split)
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :month <YYYY-MM>");
        return Ok(());
    }

    // Accept "2024-05", "2024-5", "05" and "5"
    let month = if args.len() <= 2 {
        let base = app.summary_form.value(0).to_string();
        let year = base
            .get(..4)
            .map(str::to_string)
            .unwrap_or_else(|| chrono::Local::now().format("%Y").to_string());
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    match chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(date) => {
            let m = date.format("%Y-%m").to_string();
            app.set_month(db, &m)?;
            app.set_status(format!("Switched to month: {m}"));
        }
        Err(_) => app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-05)"),
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    advance_month(app, db, 1)
}

fn cmd_prev_month(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    advance_month(app, db, -1)
}

fn cmd_clear_plan(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    let count = app.planned.items().len();
    app.planned.clear();
    app.set_status(format!("Cleared {count} planned expense(s)"));
    Ok(())
}

fn advance_month(app: &mut App, db: &mut Database, delta: i32) -> anyhow::Result<()> {
    let base = app
        .view_month()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(crate::models::current_month);
    let Ok(date) = chrono::NaiveDate::parse_from_str(&format!("{base}-01"), "%Y-%m-%d") else {
        app.set_status(format!("Cannot step from month '{base}'"));
        return Ok(());
    };

    let new_date = if delta > 0 {
        date.checked_add_months(chrono::Months::new(1))
    } else {
        date.checked_sub_months(chrono::Months::new(1))
    };

    if let Some(d) = new_date {
        let m = d.format("%Y-%m").to_string();
        app.set_month(db, &m)?;
        app.set_status(format!("Month: {m}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("split", "split"), 0);
        assert_eq!(levenshtein("sumary", "summary"), 1);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_find_closest_suggests_long_names() {
        assert_eq!(find_closest("sumary"), "summary");
        assert_eq!(find_closest("alrets"), "alerts");
        assert_eq!(find_closest("clear-plna"), "clear-plan");
    }

    #[test]
    fn test_every_alias_has_description() {
        assert!(COMMANDS.values().all(|c| !c.description.is_empty()));
        assert!(COMMANDS.contains_key("q"));
        assert!(COMMANDS.contains_key("month"));
    }
}

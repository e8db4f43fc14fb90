use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::db::Database;
use crate::models::*;

#[derive(Parser, Debug)]
#[command(
    name = "expensetui",
    version,
    about = "Local expense tracker and monthly budget planner",
    long_about = "Local expense tracker and monthly budget planner.\n\nRun without a command to open the interactive terminal UI."
)]
pub(crate) struct Cli {
    /// Path to the SQLite database (default: platform data directory)
    #[arg(long, global = true, env = "EXPENSETUI_DB")]
    pub(crate) db: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// Record an expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        /// Food, Shopping, Transportation, Entertainment, Utilities, Healthcare or Other
        #[arg(value_parser = parse_category)]
        category: Category,
        /// Amount spent
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
    },
    /// Set (or replace) one category's budget for a month
    Budget {
        /// Month (YYYY-MM)
        month: String,
        #[arg(value_parser = parse_category)]
        category: Category,
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
    },
    /// List the budgets stored for a month
    Budgets {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,
    },
    /// Show a month's expenses, total and remaining budgets
    Summary {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,
    },
    /// Show categories that are over or close to their budget
    Alerts {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,
    },
    /// Check whether a planned expense fits the remaining budget
    Plan {
        /// Planned date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        #[arg(value_parser = parse_category)]
        category: Category,
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
    },
    /// Divide a shared expense evenly
    Split {
        /// Total amount to divide
        #[arg(value_parser = parse_amount)]
        total: Decimal,
        /// Number of people sharing it
        #[arg(allow_negative_numbers = true)]
        people: i64,
        /// What the expense was for
        #[arg(short, long)]
        description: Option<String>,
    },
}

pub(crate) fn as_cli(command: Commands, db: &mut Database) -> Result<()> {
    match command {
        Commands::Add {
            date,
            category,
            amount,
        } => cli_add(db, date, category, amount),
        Commands::Budget {
            month,
            category,
            amount,
        } => cli_budget(db, &month, category, amount),
        Commands::Budgets { month } => cli_budgets(db, &month_or_current(month)),
        Commands::Summary { month } => cli_summary(db, &month_or_current(month)),
        Commands::Alerts { month } => cli_alerts(db, &month_or_current(month)),
        Commands::Plan {
            date,
            category,
            amount,
        } => cli_plan(db, date, category, amount),
        Commands::Split {
            total,
            people,
            description,
        } => {
            cli_split(total, people, description.as_deref());
            Ok(())
        }
    }
}

fn month_or_current(month: Option<String>) -> String {
    month
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(current_month)
}

fn cli_add(db: &Database, date: NaiveDate, category: Category, amount: Decimal) -> Result<()> {
    let expense = Expense::new(date, category, amount);
    db.add_expense(&expense)?;
    println!("Expense added successfully!");

    for alert in db.check_budget_alerts(&expense.month())? {
        if alert.category == category.key() {
            println!("{}", alert.message());
        }
    }
    Ok(())
}

fn cli_budget(db: &Database, month: &str, category: Category, amount: Decimal) -> Result<()> {
    let budget = Budget::new(month, category, amount);
    if budget.month.is_empty() {
        anyhow::bail!("Month cannot be empty");
    }
    db.set_budget(&budget)?;
    println!(
        "Budget for {category} in {} set to ${:.2}",
        budget.month, budget.amount
    );
    Ok(())
}

fn cli_budgets(db: &Database, month: &str) -> Result<()> {
    let budgets = db.get_budgets(month)?;
    if budgets.is_empty() {
        println!("No budgets set for {month}");
        return Ok(());
    }

    let spending = db.spending_by_category(month)?;
    println!("Budgets for {month}");
    println!("{:<18} {:>12} {:>12}", "Category", "Budget", "Spent");
    println!("{}", "─".repeat(44));
    for b in &budgets {
        let spent = spending
            .get(&b.category.to_lowercase())
            .copied()
            .unwrap_or(Decimal::ZERO);
        println!(
            "{:<18} {:>12} {:>12}",
            b.category_label(),
            format!("${:.2}", b.amount),
            format!("${spent:.2}")
        );
    }
    Ok(())
}

fn cli_summary(db: &Database, month: &str) -> Result<()> {
    let summary = db.monthly_summary(month)?;

    println!("Monthly Spending Summary — {month}");
    println!("{}", "─".repeat(44));
    if summary.has_expenses() {
        println!("{:<12} {:<18} {:>12}", "Date", "Category", "Amount");
        for e in &summary.expenses {
            println!(
                "{:<12} {:<18} {:>12}",
                e.date,
                e.category_label(),
                format!("${:.2}", e.amount)
            );
        }
    } else {
        println!("No expenses recorded for this month.");
    }
    println!();
    println!("Total Spent: ${:.2}", summary.total);

    let reminders = summary.shown_reminders();
    if !reminders.is_empty() {
        println!();
        println!("Remaining Budgets:");
        println!(
            "{:<18} {:>12} {:>12} {:>12}",
            "Category", "Budget", "Spent", "Remaining"
        );
        for r in reminders {
            println!(
                "{:<18} {:>12} {:>12} {:>12}",
                r.category_label(),
                format!("${:.2}", r.budget),
                format!("${:.2}", r.spent),
                format!("${:.2}", r.remaining)
            );
        }
    }
    Ok(())
}

fn cli_alerts(db: &Database, month: &str) -> Result<()> {
    let alerts = db.check_budget_alerts(month)?;
    if alerts.is_empty() {
        println!("All spending is within budget!");
    }
    for alert in &alerts {
        println!("{}", alert.message());
    }
    Ok(())
}

fn cli_plan(db: &Database, date: NaiveDate, category: Category, amount: Decimal) -> Result<()> {
    let plan = PlannedExpense::new(date, category, amount);
    let outcome = db.check_plan(&plan)?;
    println!("{}", outcome.message(&plan));
    Ok(())
}

fn cli_split(total: Decimal, people: i64, description: Option<&str>) {
    match (split_evenly(total, people), description) {
        (Ok(share), Some(desc)) if !desc.trim().is_empty() => {
            println!("{}: each person should pay ${:.2}", desc.trim(), share.round_dp(2));
        }
        (Ok(share), _) => println!("Each person should pay: ${:.2}", share.round_dp(2)),
        (Err(e), _) => println!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("expensetui").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_command_means_tui() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_db_flag() {
        let cli = parse(&["--db", "/tmp/x.db", "summary"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(cli.command, Some(Commands::Summary { month: None }));
    }

    #[test]
    fn test_add_parses_typed_values() {
        let cli = parse(&["add", "2024-05-02", "food", "$12.345"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                category: Category::Food,
                amount: dec!(12.34),
            })
        );
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        assert!(parse(&["add", "2024-05-02", "rent", "10"]).is_err());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        assert!(parse(&["add", "05/02/2024", "food", "10"]).is_err());
    }

    #[test]
    fn test_split_accepts_negative_people() {
        let cli = parse(&["split", "100", "-2"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Split {
                total: dec!(100),
                people: -2,
                description: None,
            })
        );
    }

    #[test]
    fn test_split_description() {
        let cli = parse(&["split", "90", "4", "--description", "Dinner"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Split { description: Some(ref d), .. }) if d == "Dinner"
        ));
    }

    #[test]
    fn test_month_defaults_to_current() {
        assert_eq!(month_or_current(Some(" 2024-05 ".into())), "2024-05");
        assert_eq!(month_or_current(None), current_month());
        assert_eq!(month_or_current(Some("  ".into())), current_month());
    }

    #[test]
    fn test_commands_write_through_to_store() {
        let mut db = Database::open_in_memory().unwrap();
        as_cli(
            Commands::Budget {
                month: "2024-05".into(),
                category: Category::Food,
                amount: dec!(100),
            },
            &mut db,
        )
        .unwrap();
        as_cli(
            Commands::Add {
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                category: Category::Food,
                amount: dec!(95),
            },
            &mut db,
        )
        .unwrap();
        as_cli(
            Commands::Plan {
                date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                category: Category::Food,
                amount: dec!(5),
            },
            &mut db,
        )
        .unwrap();

        assert_eq!(db.get_budget("2024-05", "food").unwrap(), Some(dec!(100)));
        assert_eq!(db.get_expense_count().unwrap(), 1);
        assert_eq!(db.spent_in_category("2024-05", "food").unwrap(), dec!(95));
    }

    #[test]
    fn test_blank_budget_month_is_an_error() {
        let mut db = Database::open_in_memory().unwrap();
        let result = as_cli(
            Commands::Budget {
                month: " ".into(),
                category: Category::Other,
                amount: dec!(1),
            },
            &mut db,
        );
        assert!(result.is_err());
    }
}

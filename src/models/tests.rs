#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense(d: &str, category: &str, amount: Decimal) -> Expense {
    Expense {
        id: None,
        date: d.into(),
        category: category.into(),
        amount,
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse_case_insensitive() {
    assert_eq!(Category::parse("food"), Some(Category::Food));
    assert_eq!(Category::parse("FOOD"), Some(Category::Food));
    assert_eq!(Category::parse(" Healthcare "), Some(Category::Healthcare));
    assert_eq!(Category::parse("groceries"), None);
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 7);
    assert_eq!(Category::labels().len(), all.len());
    for (c, label) in all.iter().zip(Category::labels()) {
        assert_eq!(c.as_str(), *label);
        assert_eq!(c.key(), label.to_lowercase());
    }
}

#[test]
fn test_category_display_name() {
    assert_eq!(Category::display_name("transportation"), "Transportation");
    assert_eq!(Category::display_name("pet supplies"), "Pet Supplies");
    assert_eq!(format!("{}", Category::Utilities), "Utilities");
}

// ── Expense / Budget ──────────────────────────────────────────

#[test]
fn test_expense_new_lowercases_category() {
    let e = Expense::new(date("2024-05-02"), Category::Food, dec!(40));
    assert!(e.id.is_none());
    assert_eq!(e.date, "2024-05-02");
    assert_eq!(e.category, "food");
    assert_eq!(e.month(), "2024-05");
    assert_eq!(e.category_label(), "Food");
}

#[test]
fn test_budget_new_trims_month() {
    let b = Budget::new(" 2024-05 ", Category::Shopping, dec!(250));
    assert!(b.id.is_none());
    assert_eq!(b.month, "2024-05");
    assert_eq!(b.category, "shopping");
    assert_eq!(b.amount, dec!(250));
}

#[test]
fn test_month_key_zero_pads() {
    assert_eq!(month_key(date("2024-01-31")), "2024-01");
    assert_eq!(month_key(date("2023-12-01")), "2023-12");
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_remaining_can_go_negative() {
    let expenses = vec![
        expense("2024-05-02", "food", dec!(40)),
        expense("2024-05-15", "food", dec!(70)),
    ];
    let budgets = vec![Budget::new("2024-05", Category::Food, dec!(100))];
    let summary = MonthlySummary::build("2024-05", expenses, &budgets).unwrap();

    assert_eq!(summary.total, dec!(110));
    assert_eq!(summary.reminders.len(), 1);
    let r = &summary.reminders[0];
    assert_eq!(r.category_label(), "Food");
    assert_eq!(r.spent, dec!(110));
    assert_eq!(r.remaining, dec!(-10));
}

#[test]
fn test_summary_omits_unbudgeted_categories_from_reminders() {
    let expenses = vec![
        expense("2024-05-02", "food", dec!(10)),
        expense("2024-05-03", "transportation", dec!(25)),
    ];
    let budgets = vec![Budget::new("2024-05", Category::Food, dec!(100))];
    let summary = MonthlySummary::build("2024-05", expenses, &budgets).unwrap();

    assert_eq!(summary.expenses.len(), 2);
    assert_eq!(summary.total, dec!(35));
    assert!(summary.reminders.iter().all(|r| r.category != "transportation"));
}

#[test]
fn test_summary_budget_without_spend_defaults_to_zero() {
    let budgets = vec![Budget::new("2024-05", Category::Utilities, dec!(80))];
    let summary = MonthlySummary::build("2024-05", Vec::new(), &budgets).unwrap();

    assert!(!summary.has_expenses());
    assert_eq!(summary.total, Decimal::ZERO);
    assert_eq!(summary.reminders[0].spent, Decimal::ZERO);
    assert_eq!(summary.reminders[0].remaining, dec!(80));
    assert!(summary.shown_reminders().is_empty());
}

#[test]
fn test_summary_shows_reminders_only_with_expenses() {
    let budgets = vec![Budget::new("2024-05", Category::Food, dec!(100))];
    let expenses = vec![expense("2024-05-02", "food", dec!(30))];
    let summary = MonthlySummary::build("2024-05", expenses, &budgets).unwrap();

    assert_eq!(summary.shown_reminders().len(), 1);
    assert_eq!(summary.shown_reminders()[0].remaining, dec!(70));
}

#[test]
fn test_summary_reports_overflowing_totals() {
    let huge = dec!(50000000000000000000000000000);
    let expenses = vec![
        expense("2024-05-02", "food", huge),
        expense("2024-05-03", "food", huge),
    ];
    let budgets = vec![Budget::new("2024-05", Category::Food, dec!(100))];

    assert!(spend_by_category(&expenses).is_err());
    let err = MonthlySummary::build("2024-05", expenses, &budgets).unwrap_err();
    assert_eq!(err, AmountOverflow("Food".into()));
}

#[test]
fn test_checked_total() {
    assert_eq!(
        checked_total([dec!(1.10), dec!(2.20)], "food").unwrap(),
        dec!(3.30)
    );
    assert_eq!(checked_total(Vec::<Decimal>::new(), "food").unwrap(), Decimal::ZERO);
    assert!(checked_total([Decimal::MAX, dec!(1)], "food").is_err());
}

#[test]
fn test_spend_by_category_matches_case_insensitively() {
    let expenses = vec![
        expense("2024-05-02", "Food", dec!(1.10)),
        expense("2024-05-03", "food", dec!(2.20)),
        expense("2024-05-04", "FOOD", dec!(3.30)),
    ];
    let totals = spend_by_category(&expenses).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals["food"], dec!(6.60));
}

// ── Alerts ────────────────────────────────────────────────────

#[test]
fn test_alert_classification() {
    let budget = dec!(100);
    assert_eq!(
        AlertStatus::classify(dec!(95), budget),
        Some(AlertStatus::AlmostOverBudget)
    );
    assert_eq!(
        AlertStatus::classify(dec!(110), budget),
        Some(AlertStatus::OverBudget)
    );
    assert_eq!(AlertStatus::classify(dec!(50), budget), None);
}

#[test]
fn test_alert_ties_fall_to_lower_tier() {
    let budget = dec!(100);
    // Exactly at the threshold: not above 90, no alert.
    assert_eq!(AlertStatus::classify(dec!(90), budget), None);
    // Exactly at the budget: not over, but above 90.
    assert_eq!(
        AlertStatus::classify(dec!(100), budget),
        Some(AlertStatus::AlmostOverBudget)
    );
}

#[test]
fn test_alert_threshold_constant() {
    assert_eq!(ALERT_THRESHOLD, dec!(0.9));
}

#[test]
fn test_evaluate_alerts_requires_budget_and_spend() {
    let mut spending = std::collections::BTreeMap::new();
    spending.insert("food".to_string(), dec!(110));
    spending.insert("shopping".to_string(), dec!(10));
    spending.insert("other".to_string(), dec!(500));
    let budgets = vec![
        Budget::new("2024-05", Category::Food, dec!(100)),
        Budget::new("2024-05", Category::Shopping, dec!(100)),
        Budget::new("2024-05", Category::Healthcare, dec!(1)),
    ];

    let alerts = evaluate_alerts(&spending, &budgets);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].category, "food");
    assert_eq!(alerts[0].status, AlertStatus::OverBudget);
    assert_eq!(
        alerts[0].message(),
        "Over Budget in Food: Spent $110.00 / Budget $100.00"
    );
}

// ── Plan ──────────────────────────────────────────────────────

#[test]
fn test_plan_outcomes() {
    let over = PlannedExpense::new(date("2024-05-20"), Category::Food, dec!(25));
    let under = PlannedExpense::new(date("2024-05-20"), Category::Food, dec!(15));
    let exact = PlannedExpense::new(date("2024-05-20"), Category::Food, dec!(20));

    assert_eq!(
        PlanOutcome::evaluate(&over, Some(dec!(50)), dec!(30)),
        PlanOutcome::ExceedsBudget { remaining: dec!(20) }
    );
    assert!(PlanOutcome::evaluate(&under, Some(dec!(50)), dec!(30)).is_feasible());
    assert!(PlanOutcome::evaluate(&exact, Some(dec!(50)), dec!(30)).is_feasible());
}

#[test]
fn test_plan_without_budget() {
    let plan = PlannedExpense::new(date("2024-05-20"), Category::Entertainment, dec!(5));
    let outcome = PlanOutcome::evaluate(&plan, None, Decimal::ZERO);
    assert_eq!(
        outcome,
        PlanOutcome::NoBudget {
            month: "2024-05".into()
        }
    );
    assert_eq!(
        outcome.message(&plan),
        "No budget set for Entertainment in 2024-05."
    );
}

#[test]
fn test_plan_messages() {
    let plan = PlannedExpense::new(date("2024-05-20"), Category::Food, dec!(25));
    let outcome = PlanOutcome::ExceedsBudget { remaining: dec!(20) };
    assert_eq!(
        outcome.message(&plan),
        "Planned expense of $25.00 exceeds remaining budget of $20.00 in Food category."
    );
}

#[test]
fn test_plan_session_accumulates_and_clears() {
    let mut session = PlanSession::new();
    assert!(session.is_empty());
    session.push(PlannedExpense::new(date("2024-05-20"), Category::Food, dec!(15)));
    session.push(PlannedExpense::new(date("2024-05-21"), Category::Other, dec!(4.50)));
    assert_eq!(session.items().len(), 2);
    assert_eq!(session.total(), dec!(19.50));
    session.clear();
    assert!(session.is_empty());
}

// ── Split ─────────────────────────────────────────────────────

#[test]
fn test_split_evenly() {
    assert_eq!(split_evenly(dec!(90), 3).unwrap(), dec!(30));
    assert_eq!(split_evenly(dec!(0), 4).unwrap(), Decimal::ZERO);
    assert_eq!(split_evenly(dec!(10), 1).unwrap(), dec!(10));
    assert_eq!(split_evenly(dec!(10), 3).unwrap().round_dp(2), dec!(3.33));
}

#[test]
fn test_split_rejects_non_positive_counts() {
    assert_eq!(split_evenly(dec!(10), 0), Err(SplitError::InvalidPeople(0)));
    assert_eq!(split_evenly(dec!(10), -2), Err(SplitError::InvalidPeople(-2)));
    assert_eq!(
        SplitError::InvalidPeople(0).to_string(),
        "Please enter a valid number of people."
    );
}

// ── Input parsing ─────────────────────────────────────────────

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("12.5").unwrap(), dec!(12.5));
    assert_eq!(parse_amount("$7").unwrap(), dec!(7));
    assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount("1.005").unwrap(), dec!(1.00));
    assert!(matches!(parse_amount("abc"), Err(InputError::InvalidAmount(_))));
    assert!(matches!(parse_amount("-3"), Err(InputError::NegativeAmount(_))));
}

#[test]
fn test_parse_amount_rejects_above_max() {
    assert_eq!(parse_amount("1000000000").unwrap(), MAX_AMOUNT);
    assert!(matches!(
        parse_amount("1000000000.01"),
        Err(InputError::AmountTooLarge(_))
    ));
    assert!(matches!(
        parse_amount("50000000000000000000000000000"),
        Err(InputError::AmountTooLarge(_))
    ));
}

#[test]
fn test_parse_date_and_category() {
    assert_eq!(parse_date("2024-05-02").unwrap(), date("2024-05-02"));
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("05/02/2024").is_err());
    assert_eq!(parse_category("utilities").unwrap(), Category::Utilities);
    assert!(matches!(
        parse_category("rent"),
        Err(InputError::UnknownCategory(_))
    ));
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("4").unwrap(), 4);
    assert_eq!(parse_count("0").unwrap(), 0);
    assert!(parse_count("2.5").is_err());
}

//! Terminal output and interaction for the expense commands

use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};
use spendboard_core::format::{format_amount, format_money};
use spendboard_core::Prompt;
use spendboard_types::{Expense, ExpenseSummary};
use std::io::{self, BufRead, Write};

// ============================================================================
// Prompt
// ============================================================================

/// y/N confirmation on stdin; errors go to stderr
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// ============================================================================
// Formatters
// ============================================================================

fn header(table: &mut Table, columns: &[&str], no_color: bool) {
    if no_color {
        table.set_header(columns.to_vec());
    } else {
        table.set_header(
            columns
                .iter()
                .map(|c| Cell::new(c).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format expenses as table (human) or JSON
pub fn format_expense_table(expenses: &[Expense], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(expenses).unwrap_or_else(|_| "[]".to_string());
    }

    if expenses.is_empty() {
        return "No expenses yet. Add one with `spendboard add`.".to_string();
    }

    let mut table = new_table();
    header(
        &mut table,
        &["ID", "Date", "Amount", "Category", "Merchant"],
        no_color,
    );

    for expense in expenses {
        table.add_row(Row::from(vec![
            Cell::new(expense.id),
            Cell::new(expense.date),
            Cell::new(expense.amount_display()).set_alignment(CellAlignment::Right),
            Cell::new(expense.category.as_str()),
            Cell::new(expense.merchant().unwrap_or("—")),
        ]));
    }

    table.to_string()
}

/// Format a single expense (human or JSON)
pub fn format_expense_info(expense: &Expense, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(expense).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![];
    lines.push(format!("Expense ID:   {}", expense.id));
    lines.push(format!("Amount:       {}", expense.amount_display()));
    lines.push(format!("Category:     {}", expense.category.label()));
    lines.push(format!("Date:         {}", expense.date));
    lines.push(format!(
        "Merchant:     {}",
        expense.merchant().unwrap_or("-")
    ));
    lines.push(format!(
        "Description:  {}",
        expense.description().unwrap_or("-")
    ));
    if !expense.created_at.is_empty() {
        lines.push(format!("Created:      {}", expense.created_at));
    }
    if !expense.updated_at.is_empty() {
        lines.push(format!("Updated:      {}", expense.updated_at));
    }
    lines.join("\n")
}

/// Totals followed by category, month and (when present) currency tables
pub fn format_summary(
    summary: &ExpenseSummary,
    requested: Option<&str>,
    json: bool,
    no_color: bool,
) -> String {
    if json {
        return serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
    }

    if summary.is_empty() {
        return "No expenses to summarize.".to_string();
    }

    // Totals are only comparable once converted; otherwise they mix currencies
    let currency = summary
        .display_currency
        .as_deref()
        .or(requested.map(str::trim).filter(|code| !code.is_empty()))
        .unwrap_or("mixed currencies");

    let mut sections = vec![];
    sections.push(format!("Summary ({})", currency));
    sections.push(format!(
        "  Total spent:         {}",
        format_money(summary.totals.total, currency)
    ));
    sections.push(format!(
        "  Number of expenses:  {}",
        summary.totals.count
    ));
    sections.push(format!(
        "  Average:             {}",
        format_money(summary.totals.average, currency)
    ));

    if !summary.by_category.is_empty() {
        let mut table = new_table();
        header(&mut table, &["Category", "Total", "Count"], no_color);
        for row in &summary.by_category {
            table.add_row(Row::from(vec![
                Cell::new(&row.category),
                Cell::new(format_amount(row.total)).set_alignment(CellAlignment::Right),
                Cell::new(row.count).set_alignment(CellAlignment::Right),
            ]));
        }
        sections.push(String::new());
        sections.push(format!("By category ({})", currency));
        sections.push(table.to_string());
    }

    if !summary.by_month.is_empty() {
        let mut table = new_table();
        header(&mut table, &["Month", "Total", "Count"], no_color);
        for row in &summary.by_month {
            table.add_row(Row::from(vec![
                Cell::new(row.month_label()),
                Cell::new(format_amount(row.total)).set_alignment(CellAlignment::Right),
                Cell::new(row.count).set_alignment(CellAlignment::Right),
            ]));
        }
        sections.push(String::new());
        sections.push(format!("By month ({})", currency));
        sections.push(table.to_string());
    }

    let by_currency = summary.currencies();
    if !by_currency.is_empty() {
        let mut table = new_table();
        header(
            &mut table,
            &["Currency", "Total", "Count", "Average"],
            no_color,
        );
        for row in by_currency {
            table.add_row(Row::from(vec![
                Cell::new(&row.currency),
                Cell::new(format_amount(row.total)).set_alignment(CellAlignment::Right),
                Cell::new(row.count).set_alignment(CellAlignment::Right),
                Cell::new(format_amount(row.average)).set_alignment(CellAlignment::Right),
            ]));
        }
        sections.push(String::new());
        sections.push("By original currency".to_string());
        sections.push(table.to_string());
    }

    sections.join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expense(id: u64, merchant: &str) -> Expense {
        serde_json::from_value(json!({
            "id": id,
            "amount": "1234.50",
            "currency": "EUR",
            "category": "bills",
            "date": "2024-03-05",
            "merchant": merchant,
            "description": "",
            "created_at": "2024-03-05T10:00:00Z",
            "updated_at": "2024-03-06T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_assume_yes_skips_stdin() {
        assert!(TerminalPrompt::new(true).confirm("Delete this expense?"));
    }

    #[test]
    fn test_expense_table() {
        let output = format_expense_table(&[expense(1, "Utility Co"), expense(2, "")], false, true);
        assert!(output.contains("Merchant"));
        assert!(output.contains("1234.50 EUR"));
        assert!(output.contains("Utility Co"));
        assert!(output.contains("—"));
        // No ANSI escapes when colors are off
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_expense_table_empty_and_json() {
        assert!(format_expense_table(&[], false, true).starts_with("No expenses yet"));

        let json = format_expense_table(&[expense(7, "")], true, true);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], 7);
        assert_eq!(parsed[0]["date"], "2024-03-05");
    }

    #[test]
    fn test_expense_info() {
        let info = format_expense_info(&expense(3, ""), false);
        assert!(info.contains("Expense ID:   3"));
        assert!(info.contains("Category:     Bills"));
        assert!(info.contains("Merchant:     -"));
        assert!(info.contains("Updated:      2024-03-06T10:00:00Z"));
    }

    #[test]
    fn test_summary_in_display_currency() {
        let summary: ExpenseSummary = serde_json::from_value(json!({
            "by_category": [{"category": "food", "total": 1500.0, "count": 2}],
            "by_month": [{"month": "2024-01-01", "total": 1500.0, "count": 2}],
            "totals": {"total": 1500.0, "count": 2, "average": 750.0},
            "display_currency": "EUR"
        }))
        .unwrap();

        let output = format_summary(&summary, Some("USD"), false, true);
        assert!(output.starts_with("Summary (EUR)"));
        assert!(output.contains("1,500.00 EUR"));
        assert!(output.contains("750.00 EUR"));
        assert!(output.contains("2024-01"));
        assert!(!output.contains("By original currency"));
    }

    #[test]
    fn test_summary_with_currency_breakdown() {
        let summary: ExpenseSummary = serde_json::from_value(json!({
            "by_category": [],
            "by_month": [],
            "by_currency": [
                {"currency": "USD", "total": 10.0, "count": 1, "average": 10.0},
                {"currency": "JPY", "total": 1200.0, "count": 1, "average": 1200.0}
            ],
            "totals": {"total": 1210.0, "count": 2, "average": 605.0}
        }))
        .unwrap();

        let output = format_summary(&summary, None, false, true);
        assert!(output.starts_with("Summary (mixed currencies)"));
        assert!(output.contains("By original currency"));
        assert!(output.contains("JPY"));
        assert!(output.contains("1,200.00"));
    }

    #[test]
    fn test_summary_blank_currency_is_unconverted() {
        let summary: ExpenseSummary = serde_json::from_value(json!({
            "by_category": [{"category": "food", "total": 12.0, "count": 1}],
            "by_month": [],
            "totals": {"total": 12.0, "count": 1, "average": 12.0}
        }))
        .unwrap();

        let output = format_summary(&summary, Some("  "), false, true);
        assert!(output.starts_with("Summary (mixed currencies)"));
        assert!(!output.contains("Summary ()"));
    }

    #[test]
    fn test_empty_summary() {
        let output = format_summary(&ExpenseSummary::default(), None, false, true);
        assert_eq!(output, "No expenses to summarize.");
    }
}

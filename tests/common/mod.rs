// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use expense_tracker::application::{ExpenseTracker, Settings};
use expense_tracker::domain::{DateMode, Expense};
use expense_tracker::io::BufferedConsole;

pub type TestConsole = BufferedConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// The menu exactly as printed before every choice prompt
pub const MENU: &str = "\nExpense Tracker Menu:\n\
1. Add Expense\n\
2. View All Expenses\n\
3. Filter Expenses by Date Range\n\
4. Filter Expenses by Category\n\
5. View Summary\n\
6. Exit\n\
Enter choice: ";

/// Prompts printed by a successful "Add Expense"
pub const ADD_PROMPTS: &str =
    "Enter date (YYYY-MM-DD): Enter amount: Enter category: Enter description: ";

/// Everything a finished session left behind
pub struct SessionResult {
    pub output: String,
    pub expenses: Vec<Expense>,
}

/// Helper to create a tracker reading the given input
pub fn test_tracker(settings: Settings, input: impl AsRef<[u8]>) -> ExpenseTracker<TestConsole> {
    let console = BufferedConsole::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
    ExpenseTracker::new(console, settings)
}

/// Helper to read back what a tracker has written so far
pub fn transcript(tracker: ExpenseTracker<TestConsole>) -> Result<String> {
    Ok(String::from_utf8(tracker.into_console().into_writer())?)
}

/// Run the menu loop over `input` with default settings
pub fn run_session(input: &[&str]) -> Result<SessionResult> {
    run_session_with(Settings::default(), input)
}

/// Run the menu loop over `input` with calendar-checked dates
pub fn run_strict_session(input: &[&str]) -> Result<SessionResult> {
    run_session_with(
        Settings {
            date_mode: DateMode::Calendar,
        },
        input,
    )
}

pub fn run_session_with(settings: Settings, input: &[&str]) -> Result<SessionResult> {
    let mut tracker = test_tracker(settings, lines(input));
    tracker.run()?;

    let expenses = tracker.ledger().expenses().to_vec();
    Ok(SessionResult {
        output: transcript(tracker)?,
        expenses,
    })
}

/// Join input lines, each terminated by a newline
pub fn lines(input: &[&str]) -> String {
    input.iter().map(|line| format!("{}\n", line)).collect()
}

use tracing::{debug, warn};

use crate::domain::{parse_amount, DateMode, Expense, ExpenseDate, ExpenseFilter, Ledger};
use crate::io::Console;

use super::{AppError, Summary};

const MENU: [&str; 7] = [
    "Expense Tracker Menu:",
    "1. Add Expense",
    "2. View All Expenses",
    "3. Filter Expenses by Date Range",
    "4. Filter Expenses by Category",
    "5. View Summary",
    "6. Exit",
];

/// Session-wide options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub date_mode: DateMode,
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    FilterByDateRange,
    FilterByCategory,
    ViewSummary,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddExpense),
            2 => Ok(MenuChoice::ViewAll),
            3 => Ok(MenuChoice::FilterByDateRange),
            4 => Ok(MenuChoice::FilterByCategory),
            5 => Ok(MenuChoice::ViewSummary),
            6 => Ok(MenuChoice::Exit),
            other => Err(AppError::ChoiceOutOfRange(other)),
        }
    }
}

/// An interactive expense-tracking session.
///
/// Owns the ledger for the lifetime of the session and talks to the user
/// only through its [`Console`]. Invalid input aborts the current operation
/// with a message and leaves the ledger untouched; only console failures
/// are returned as errors. [`AppError::EndOfInput`] is passed through so the
/// menu loop can end the session.
pub struct ExpenseTracker<C: Console> {
    console: C,
    ledger: Ledger,
    settings: Settings,
}

impl<C: Console> ExpenseTracker<C> {
    pub fn new(console: C, settings: Settings) -> Self {
        Self {
            console,
            ledger: Ledger::new(),
            settings,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_console(self) -> C {
        self.console
    }

    // ========================
    // Menu loop
    // ========================

    /// Show the menu and dispatch choices until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        debug!(date_mode = ?self.settings.date_mode, "session started");

        loop {
            self.print_menu()?;

            let choice = match self.read_choice() {
                Ok(choice) => choice,
                Err(AppError::EndOfInput) => break,
                Err(AppError::InvalidNumber(input)) => {
                    warn!(%input, "menu choice is not a number");
                    self.console
                        .write_line("Invalid choice. Please enter a number.")?;
                    continue;
                }
                Err(AppError::ChoiceOutOfRange(choice)) => {
                    warn!(choice, "menu choice out of range");
                    self.console
                        .write_line("Invalid choice. Please select a number between 1 and 6.")?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let outcome = match choice {
                MenuChoice::AddExpense => self.add_expense(),
                MenuChoice::ViewAll => self.view_expenses(&ExpenseFilter::all()),
                MenuChoice::FilterByDateRange => self.filter_by_date_range(),
                MenuChoice::FilterByCategory => self.filter_by_category(),
                MenuChoice::ViewSummary => self.show_summary(),
                MenuChoice::Exit => break,
            };

            match outcome {
                Ok(()) => {}
                Err(AppError::EndOfInput) => break,
                Err(err) => return Err(err),
            }
        }

        debug!(expenses = self.ledger.len(), "session ended");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        self.console.write_line("")?;
        for line in MENU {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<MenuChoice, AppError> {
        let number = self.console.read_number("Enter choice: ")?;
        MenuChoice::try_from(number)
    }

    // ========================
    // Operations
    // ========================

    /// Prompt for an expense and append it to the ledger.
    pub fn add_expense(&mut self) -> Result<(), AppError> {
        match self.read_expense() {
            Ok(expense) => {
                debug!(
                    date = %expense.date,
                    amount = expense.amount,
                    category = %expense.category,
                    "expense added"
                );
                self.ledger.push(expense);
                self.console.write_line("Expense added successfully.")?;
            }
            Err(AppError::InvalidDate { input, source }) => {
                warn!(%input, %source, "rejected expense date");
                self.console
                    .write_line("Invalid date format. Please use YYYY-MM-DD.")?;
            }
            Err(AppError::InvalidAmount { input, source }) => {
                warn!(%input, %source, "rejected expense amount");
                self.console
                    .write_line("Invalid amount. Please enter a number.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn read_expense(&mut self) -> Result<Expense, AppError> {
        let date = self.console.read_line("Enter date (YYYY-MM-DD): ")?;
        let date = self.parse_date(date)?;

        let amount = self.console.read_line("Enter amount: ")?;
        let amount = parse_amount(&amount)
            .map_err(|source| AppError::InvalidAmount { input: amount, source })?;

        let category = self.console.read_line("Enter category: ")?;
        let description = self.console.read_line("Enter description: ")?;

        Ok(Expense::new(date, amount, category, description))
    }

    /// Print every expense matching `filter`, in ledger order.
    pub fn view_expenses(&mut self, filter: &ExpenseFilter) -> Result<(), AppError> {
        let matched = self.ledger.filter(filter);
        debug!(
            matched = matched.len(),
            total = self.ledger.len(),
            "viewing expenses"
        );

        if matched.is_empty() {
            self.console.write_line("No expenses found.")?;
            return Ok(());
        }

        self.console.write_line("")?;
        self.console.write_line("Expenses:")?;
        for expense in matched {
            self.console.write_line(&expense.to_string())?;
        }
        Ok(())
    }

    /// Prompt for a start and an end date, then view the expenses between
    /// them (inclusive). Both dates are checked before anything is filtered.
    pub fn filter_by_date_range(&mut self) -> Result<(), AppError> {
        let start = self.console.read_line("Enter start date (YYYY-MM-DD): ")?;
        let end = self.console.read_line("Enter end date (YYYY-MM-DD): ")?;

        let range = self
            .parse_date(start)
            .and_then(|start| Ok((start, self.parse_date(end)?)));

        match range {
            Ok((start, end)) => {
                let filter = ExpenseFilter::all().with_start(start).with_end(end);
                self.view_expenses(&filter)
            }
            Err(AppError::InvalidDate { input, source }) => {
                warn!(%input, %source, "rejected date range");
                self.console.write_line("Invalid date format.")
            }
            Err(err) => Err(err),
        }
    }

    /// Prompt for a category and view the expenses filed under exactly that name.
    pub fn filter_by_category(&mut self) -> Result<(), AppError> {
        let category = self.console.read_line("Enter category: ")?;
        self.view_expenses(&ExpenseFilter::all().with_category(category))
    }

    /// Print the overall total followed by the totals per category.
    pub fn show_summary(&mut self) -> Result<(), AppError> {
        let Some(summary) = Summary::from_ledger(&self.ledger) else {
            self.console.write_line("No expenses to summarize.")?;
            return Ok(());
        };
        debug!(
            total = summary.total,
            categories = summary.categories.len(),
            "summarized expenses"
        );

        self.console.write_line("")?;
        for line in summary.lines() {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    fn parse_date(&self, input: String) -> Result<ExpenseDate, AppError> {
        ExpenseDate::parse_with_mode(&input, self.settings.date_mode)
            .map_err(|source| AppError::InvalidDate { input, source })
    }
}

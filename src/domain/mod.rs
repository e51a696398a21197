mod date;
mod expense;
mod ledger;
mod money;
mod scan;

pub use date::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
pub(crate) use scan::{decimal_len, integer_len};

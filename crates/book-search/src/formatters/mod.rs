//! Output formatters for console text and money amounts.

mod money;
mod text;

pub use money::MoneyFormat;
pub use text::*;

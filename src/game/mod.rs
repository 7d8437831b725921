mod history;
mod rules;
mod types;

pub use history::{History, Snapshot};
pub use rules::{LINES, Verdict, evaluate};
pub use types::{Cell, Mark, Token, Winner};

pub mod assemble;
pub mod file_check;
pub mod file_state;

pub use assemble::assemble;
pub use file_check::{CheckReport, FileCheck};
pub use file_state::FileState;

pub mod check;
pub mod publish;

pub mod check;
pub mod send;

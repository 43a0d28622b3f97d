pub mod jumplists;
pub mod records;
pub mod shortcuts;

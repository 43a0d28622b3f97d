pub(crate) mod automatic;
pub(crate) mod custom;
pub(crate) mod destlist;
pub mod error;
pub mod parser;
pub mod signature;

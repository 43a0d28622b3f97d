pub mod csv;
pub mod dump;
pub mod error;
pub mod html;
pub mod json;
pub mod xml;

pub(crate) mod fields;

pub mod jumplists;
pub mod normalize;
pub mod output;
pub mod runner;

pub(crate) mod filesystem;
pub(crate) mod ole;
pub(crate) mod shellitems;
pub(crate) mod shortcuts;
pub(crate) mod utils;

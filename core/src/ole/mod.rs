pub(crate) mod directory;
pub(crate) mod header;
pub(crate) mod olecf;
pub(crate) mod sat;
pub(crate) mod sectors;
pub(crate) mod ssat;

pub(crate) mod nom_helper;
pub(crate) mod strings;
pub(crate) mod time;
pub(crate) mod uuid;

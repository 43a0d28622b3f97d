pub(crate) mod extras;
pub(crate) mod header;
pub(crate) mod location;
pub(crate) mod network;
pub(crate) mod shellitems;
pub(crate) mod shortcut;
pub(crate) mod strings;
pub(crate) mod volume;

pub(crate) mod beef0004;
pub(crate) mod delegate;
pub(crate) mod directory;
pub(crate) mod items;
pub(crate) mod root;
pub(crate) mod variable;
pub(crate) mod volume;

pub(crate) mod ios;
pub(crate) mod template;

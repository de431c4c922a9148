pub(crate) mod discover;
pub(crate) mod input;
pub(crate) mod output;

pub(crate) mod build;
pub(crate) mod classify;
pub(crate) mod element;
pub(crate) mod lexer;
pub(crate) mod node;
pub(crate) mod optimize;
pub(crate) mod postfix;

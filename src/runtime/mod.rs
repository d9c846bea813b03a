pub(crate) mod compiler;
pub(crate) mod functions;
pub(crate) mod variables;

/// Node creation command.
pub mod create;
/// DAG hierarchy query command.
pub mod dag;
/// Node listing command.
pub mod ls;
/// Plug-name builder command.
pub mod plug;
/// Plug connection and element query command.
pub mod plugs;
/// Plug-name split command.
pub mod split;
#[cfg(test)]
mod test_support;
mod util;

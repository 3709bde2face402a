//! Scene-graph helpers and plug-path grammar for DAG content-creation hosts.

/// Plug-path grammar, scene host abstraction, and DAG/plug/attribute/node helpers.
pub mod scene;

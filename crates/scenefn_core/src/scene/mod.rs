/// Attribute creation helpers.
pub mod attr;
/// DAG hierarchy helpers.
pub mod dag;
mod error;
mod host;
mod memory;
/// Node creation and filtering helpers.
pub mod node;
/// Plug traversal helpers.
pub mod plug;
mod plug_path;
mod select;
mod value;

/// Error and result aliases.
pub use error::{Result, SceneError};
/// Host abstraction and handle types.
pub use host::{AttrInfo, NodeId, NodeKind, PlugRef, SceneHost, Selection};
/// In-memory host and its serialized document.
pub use memory::{ConnectionDocument, MemoryScene, NodeDocument, SceneDocument};
/// Plug-path grammar.
pub use plug_path::{PlugPath, PlugToken, SegmentParts, plug, segment_parts, split_plug};
/// Identifier resolution helpers.
pub use select::{dag_node, display_name, object, plug_name, plug_ref};
/// Attribute and value types.
pub use value::{AttrDef, AttrType, NodeValue, PlugValue};

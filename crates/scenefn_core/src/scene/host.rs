use std::fmt;

use crate::scene::{AttrDef, AttrType, PlugPath, PlugValue, Result, SceneError};

/// Opaque node handle issued by a scene host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Coarse node classification relevant to hierarchy queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// DAG node that may parent other DAG nodes.
	Transform,
	/// DAG leaf carrying geometry or other shape data.
	Shape,
	/// Dependency-graph node outside the hierarchy.
	Dependency,
}

impl NodeKind {
	/// Whether nodes of this kind live in the DAG hierarchy.
	pub fn is_dag(self) -> bool {
		matches!(self, Self::Transform | Self::Shape)
	}
}

/// Plug handle: owning node plus the attribute part of the plug name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlugRef {
	/// Owning node.
	pub node: NodeId,
	/// Attribute path after the node, e.g. `values[3]` or `translate.translateX`.
	pub attr: PlugPath,
}

impl PlugRef {
	/// Plug on `node` at `attr`.
	pub fn new(node: NodeId, attr: PlugPath) -> Self {
		Self { node, attr }
	}
}

/// Result of resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	/// Identifier names a node.
	Node(NodeId),
	/// Identifier names a plug.
	Plug(PlugRef),
}

impl Selection {
	/// Node itself, or the node owning the plug.
	pub fn node(&self) -> NodeId {
		match self {
			Self::Node(node) => *node,
			Self::Plug(plug) => plug.node,
		}
	}
}

/// Attribute introspection answered by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrInfo {
	/// Long attribute name.
	pub name: String,
	/// Data type.
	pub attr_type: AttrType,
	/// Whether the attribute holds sparse indexed elements.
	pub multi: bool,
	/// Whether values may be set or connected into it.
	pub writable: bool,
	/// Child attribute long names in declaration order.
	pub children: Vec<String>,
}

/// Scene-graph and attribute-connection API of a host application.
///
/// Helpers in this crate are written against this trait only; they never
/// assume a particular host.
pub trait SceneHost {
	/// Resolve a node name, DAG path, or plug name.
	fn resolve(&self, identifier: &str) -> Result<Selection>;

	/// Whether `identifier` resolves.
	fn exists(&self, identifier: &str) -> bool {
		self.resolve(identifier).is_ok()
	}

	/// Short node name without any path.
	fn node_name(&self, node: NodeId) -> Result<String>;

	/// Host node type, e.g. `transform` or `network`.
	fn node_type(&self, node: NodeId) -> Result<String>;

	/// Node classification.
	fn node_kind(&self, node: NodeId) -> Result<NodeKind>;

	/// DAG parent, or `None` for roots and dependency nodes.
	fn parent_of(&self, node: NodeId) -> Result<Option<NodeId>>;

	/// DAG children in order.
	fn children_of(&self, node: NodeId) -> Result<Vec<NodeId>>;

	/// Root DAG nodes in order.
	fn roots(&self) -> Vec<NodeId>;

	/// Every node in creation order.
	fn nodes(&self) -> Vec<NodeId>;

	/// Segment names from the root down to `node`.
	fn hierarchy_path(&self, node: NodeId) -> Result<Vec<String>> {
		if !self.node_kind(node)?.is_dag() {
			return Err(SceneError::NotDagNode {
				identifier: self.node_name(node)?,
			});
		}

		let mut out = vec![self.node_name(node)?];
		let mut cursor = self.parent_of(node)?;
		while let Some(parent) = cursor {
			out.push(self.node_name(parent)?);
			cursor = self.parent_of(parent)?;
		}
		out.reverse();
		Ok(out)
	}

	/// Attribute named `name` (long or short) on `node`, if present.
	fn attribute(&self, node: NodeId, name: &str) -> Result<Option<AttrInfo>>;

	/// Existing logical indices of an array plug, ascending.
	fn existing_indices(&self, plug: &PlugRef) -> Result<Vec<u32>>;

	/// Stored value of a plug, if any.
	fn value(&self, plug: &PlugRef) -> Result<Option<PlugValue>>;

	/// Upstream plug connected into `plug`.
	fn source_of(&self, plug: &PlugRef) -> Result<Option<PlugRef>>;

	/// Downstream plugs fed by `plug`, in connection order.
	fn destinations_of(&self, plug: &PlugRef) -> Result<Vec<PlugRef>>;

	/// Connect `src` into `dst`.
	fn connect(&mut self, src: &PlugRef, dst: &PlugRef) -> Result<()>;

	/// Store `value` on `plug`.
	fn set_value(&mut self, plug: &PlugRef, value: &PlugValue) -> Result<()>;

	/// Create a node; `#` in `name` is replaced by a unique number.
	fn create_node(&mut self, node_type: &str, name: &str, parent: Option<NodeId>) -> Result<NodeId>;

	/// Add an attribute to `node`.
	fn add_attribute(&mut self, node: NodeId, def: &AttrDef) -> Result<()>;
}

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scene::{
	AttrDef, AttrInfo, AttrType, NodeId, NodeKind, PlugPath, PlugRef, PlugToken, PlugValue, Result, SceneError, SceneHost, Selection, display_name, plug_name,
	segment_parts, split_plug,
};

/// Serialized form of a [`MemoryScene`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
	/// Nodes in creation order; parents precede their children.
	#[serde(default)]
	pub nodes: Vec<NodeDocument>,
	/// Connections as plug-name pairs.
	#[serde(default)]
	pub connections: Vec<ConnectionDocument>,
}

/// One serialized node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
	/// Short node name.
	pub name: String,
	/// Host node type.
	#[serde(rename = "type")]
	pub node_type: String,
	/// Full path of the DAG parent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
	/// Attributes beyond the built-in set for the node kind.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<AttrDef>,
	/// Stored plug values keyed by attribute path.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub values: BTreeMap<String, PlugValue>,
}

/// One serialized connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDocument {
	/// Source plug name.
	pub src: String,
	/// Destination plug name.
	pub dst: String,
}

#[derive(Debug, Clone)]
struct NodeRecord {
	name: String,
	node_type: String,
	kind: NodeKind,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	attributes: Vec<AttrDef>,
	builtin_count: usize,
	values: BTreeMap<PlugPath, PlugValue>,
}

impl NodeRecord {
	fn find_attr(&self, name: &str) -> Option<&AttrDef> {
		self.attributes.iter().find(|def| def.answers_to(name))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Connection {
	src: PlugRef,
	dst: PlugRef,
}

/// Minimal in-memory scene host.
///
/// Plug references handed out by this host are canonical: every segment uses
/// the long attribute name and compound children are spelled out from the
/// top-level parent down.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
	nodes: Vec<NodeRecord>,
	connections: Vec<Connection>,
}

impl MemoryScene {
	/// Empty scene.
	pub fn new() -> Self {
		Self::default()
	}

	/// Scene seeded with the four default cameras `persp`, `top`, `front`, `side`.
	pub fn with_default_cameras() -> Result<Self> {
		let mut scene = Self::new();
		for name in ["persp", "top", "front", "side"] {
			let transform = scene.create_node("transform", name, None)?;
			scene.create_node("camera", &format!("{name}Shape"), Some(transform))?;
		}
		Ok(scene)
	}

	/// Load a JSON scene document from disk.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		let document: SceneDocument = serde_json::from_str(&text)?;
		Self::from_document(&document)
	}

	/// Write the scene as a pretty-printed JSON document.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let text = serde_json::to_string_pretty(&self.to_document()?)?;
		std::fs::write(path, text)?;
		Ok(())
	}

	/// Build a scene from an already-parsed JSON value.
	pub fn from_json(value: serde_json::Value) -> Result<Self> {
		let document: SceneDocument = serde_json::from_value(value)?;
		Self::from_document(&document)
	}

	/// Build a scene from a document.
	pub fn from_document(document: &SceneDocument) -> Result<Self> {
		let mut scene = Self::new();

		for item in &document.nodes {
			let parent = match item.parent.as_deref() {
				Some(path) => Some(scene.resolve_node(path)?),
				None => None,
			};
			if scene.unique_name(&item.name, kind_for_type(&item.node_type), parent) != item.name {
				return Err(SceneError::InvalidArgument {
					identifier: item.name.clone(),
					reason: "duplicate or templated node name in document",
				});
			}
			let node = scene.create_node(&item.node_type, &item.name, parent)?;
			for def in &item.attributes {
				scene.add_attribute(node, def)?;
			}
			for (attr, value) in &item.values {
				let plug = PlugRef::new(node, PlugPath::parse(attr)?);
				scene.set_value(&plug, value)?;
			}
		}

		for item in &document.connections {
			let src = scene.resolve_plug(&item.src)?;
			let dst = scene.resolve_plug(&item.dst)?;
			scene.connect(&src, &dst)?;
		}

		Ok(scene)
	}

	/// Snapshot the scene as a document.
	pub fn to_document(&self) -> Result<SceneDocument> {
		let mut nodes = Vec::with_capacity(self.nodes.len());
		for record in &self.nodes {
			let parent = match record.parent {
				Some(parent) => Some(display_name(self, parent)?),
				None => None,
			};
			nodes.push(NodeDocument {
				name: record.name.clone(),
				node_type: record.node_type.clone(),
				parent,
				attributes: record.attributes[record.builtin_count..].to_vec(),
				values: record.values.iter().map(|(attr, value)| (attr.to_string(), value.clone())).collect(),
			});
		}

		let mut connections = Vec::with_capacity(self.connections.len());
		for item in &self.connections {
			connections.push(ConnectionDocument {
				src: plug_name(self, &item.src)?,
				dst: plug_name(self, &item.dst)?,
			});
		}

		Ok(SceneDocument { nodes, connections })
	}

	fn record(&self, node: NodeId) -> Result<&NodeRecord> {
		self.nodes.get(node.0 as usize).ok_or(SceneError::UnknownNode { id: node.0 })
	}

	fn record_mut(&mut self, node: NodeId) -> Result<&mut NodeRecord> {
		self.nodes.get_mut(node.0 as usize).ok_or(SceneError::UnknownNode { id: node.0 })
	}

	fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		(0..self.nodes.len()).map(|idx| NodeId(idx as u32))
	}

	/// Names a new node of `kind` under `parent` must not reuse.
	///
	/// DAG siblings share a namespace. Dependency node names are global, so they
	/// clash with every node and every DAG node clashes with them.
	fn namespace(&self, kind: NodeKind, parent: Option<NodeId>) -> Vec<&str> {
		self.nodes
			.iter()
			.filter(|record| match kind {
				NodeKind::Dependency => true,
				_ => record.kind == NodeKind::Dependency || record.parent == parent,
			})
			.map(|record| record.name.as_str())
			.collect()
	}

	fn unique_name(&self, requested: &str, kind: NodeKind, parent: Option<NodeId>) -> String {
		let taken = self.namespace(kind, parent);
		if !requested.contains('#') && !taken.contains(&requested) {
			return requested.to_owned();
		}

		let template = if requested.contains('#') {
			requested.to_owned()
		} else {
			format!("{}#", requested.trim_end_matches(|ch: char| ch.is_ascii_digit()))
		};

		let mut number = 1_u32;
		loop {
			let candidate = template.replace('#', &number.to_string());
			if !taken.contains(&candidate.as_str()) {
				return candidate;
			}
			number += 1;
		}
	}

	fn resolve_node(&self, path: &str) -> Result<NodeId> {
		let invalid = |reason| SceneError::InvalidArgument {
			identifier: path.to_owned(),
			reason,
		};
		let not_found = || SceneError::NotFound { identifier: path.to_owned() };

		if let Some(absolute) = path.strip_prefix('|') {
			let segments: Vec<&str> = absolute.split('|').collect();
			if segments.iter().any(|segment| segment.is_empty()) {
				return Err(invalid("empty path segment"));
			}

			let mut level = self.roots();
			let mut found = None;
			for segment in segments {
				let node = level
					.iter()
					.copied()
					.find(|node| self.nodes[node.0 as usize].name == segment)
					.ok_or_else(not_found)?;
				level = self.nodes[node.0 as usize].children.clone();
				found = Some(node);
			}
			return found.ok_or_else(not_found);
		}

		let segments: Vec<&str> = path.split('|').collect();
		if segments.iter().any(|segment| segment.is_empty()) {
			return Err(invalid("empty path segment"));
		}

		let wanted: Vec<String> = segments.iter().map(|item| (*item).to_owned()).collect();
		let mut matches = Vec::new();
		for node in self.ids() {
			let record = &self.nodes[node.0 as usize];
			let hit = if wanted.len() == 1 {
				record.name == wanted[0]
			} else {
				record.kind.is_dag() && self.hierarchy_path(node)?.ends_with(&wanted)
			};
			if hit {
				matches.push(node);
			}
		}

		match matches.as_slice() {
			[] => Err(not_found()),
			[node] => Ok(*node),
			_ => Err(SceneError::Ambiguous {
				identifier: path.to_owned(),
				matches: matches.len(),
			}),
		}
	}

	fn resolve_plug(&self, identifier: &str) -> Result<PlugRef> {
		match self.resolve(identifier)? {
			Selection::Plug(plug) => Ok(plug),
			Selection::Node(_) => Err(SceneError::NotPlug {
				identifier: identifier.to_owned(),
			}),
		}
	}

	/// Canonical attribute path on `node`, or `None` when the path names no plug.
	fn canonical_attr(&self, node: NodeId, attr: &PlugPath) -> Option<PlugPath> {
		let record = self.record(node).ok()?;

		let mut given: Vec<(&AttrDef, Vec<u32>)> = Vec::new();
		for segment in attr.segments() {
			let parts = segment_parts(segment)?;
			let def = record.find_attr(parts.name)?;
			if parts.indices.len() > 1 || (!parts.indices.is_empty() && !def.multi) {
				return None;
			}
			given.push((def, parts.indices));
		}

		let mut cursor: &AttrDef = given.last()?.0;
		let mut chain = vec![cursor];
		while let Some(parent) = cursor.parent.as_deref() {
			cursor = record.find_attr(parent)?;
			chain.push(cursor);
		}
		chain.reverse();

		if given.iter().any(|(def, _)| !chain.iter().any(|item| item.long_name == def.long_name)) {
			return None;
		}

		let mut out = PlugPath::new();
		for def in chain {
			out.push(PlugToken::Name(def.long_name.clone())).ok()?;
			if let Some((_, indices)) = given.iter().find(|(item, _)| item.long_name == def.long_name) {
				for index in indices {
					out.push(*index).ok()?;
				}
			}
		}
		Some(out)
	}

	fn canonical(&self, plug: &PlugRef) -> Result<PlugRef> {
		match self.canonical_attr(plug.node, &plug.attr) {
			Some(attr) => Ok(PlugRef::new(plug.node, attr)),
			None => Err(SceneError::AttributeNotFound {
				node: display_name(self, plug.node)?,
				attr: plug.attr.to_string(),
			}),
		}
	}

	fn leaf_def(&self, plug: &PlugRef) -> Result<&AttrDef> {
		let record = self.record(plug.node)?;
		plug.attr
			.leaf()
			.and_then(|leaf| record.find_attr(leaf.name))
			.ok_or_else(|| SceneError::AttributeNotFound {
				node: record.name.clone(),
				attr: plug.attr.to_string(),
			})
	}
}

fn kind_for_type(node_type: &str) -> NodeKind {
	match node_type {
		"transform" | "joint" => NodeKind::Transform,
		"mesh" | "locator" | "camera" | "nurbsCurve" => NodeKind::Shape,
		_ => NodeKind::Dependency,
	}
}

fn builtin_attributes(node_type: &str, kind: NodeKind) -> Vec<AttrDef> {
	let mut out = vec![AttrDef::new("message").with_short_name("msg").with_type(AttrType::Message).read_only()];
	match node_type {
		"script" => {
			out.push(AttrDef::new("before").with_short_name("b").with_type(AttrType::String));
			out.push(AttrDef::new("after").with_short_name("a").with_type(AttrType::String));
			out.push(AttrDef::new("scriptType").with_short_name("st").with_type(AttrType::Long));
		}
		"plusMinusAverage" => {
			out.push(AttrDef::new("operation").with_short_name("op").with_type(AttrType::Long));
			out.push(AttrDef::new("input1D").with_short_name("i1").multi());
			out.push(AttrDef::new("output1D").with_short_name("o1").read_only());
		}
		_ => {}
	}
	if !kind.is_dag() {
		return out;
	}

	out.push(AttrDef::new("visibility").with_short_name("v").with_type(AttrType::Bool));
	out.push(
		AttrDef::new("worldMatrix")
			.with_short_name("wm")
			.with_type(AttrType::Matrix)
			.multi()
			.read_only(),
	);
	if kind != NodeKind::Transform {
		return out;
	}

	for (parent, short) in [("translate", "t"), ("rotate", "r"), ("scale", "s")] {
		out.push(AttrDef::new(parent).with_short_name(short).with_type(AttrType::Compound));
		for axis in ["X", "Y", "Z"] {
			out.push(
				AttrDef::new(format!("{parent}{axis}"))
					.with_short_name(format!("{short}{}", axis.to_ascii_lowercase()))
					.with_parent(parent),
			);
		}
	}
	out.push(AttrDef::new("matrix").with_short_name("m").with_type(AttrType::Matrix).read_only());
	out.push(AttrDef::new("offsetParentMatrix").with_short_name("opm").with_type(AttrType::Matrix));
	out
}

impl SceneHost for MemoryScene {
	fn resolve(&self, identifier: &str) -> Result<Selection> {
		tracing::trace!(identifier, "resolve");
		if identifier.is_empty() {
			return Err(SceneError::InvalidArgument {
				identifier: identifier.to_owned(),
				reason: "empty identifier",
			});
		}
		if identifier.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
			return Err(SceneError::InvalidArgument {
				identifier: identifier.to_owned(),
				reason: "identifier contains whitespace",
			});
		}

		let (node_part, attr_part) = match split_plug(identifier) {
			Ok(parts) => parts,
			Err(_) if identifier.contains('.') => {
				return Err(SceneError::InvalidArgument {
					identifier: identifier.to_owned(),
					reason: "malformed plug name",
				});
			}
			Err(_) => return self.resolve_node(identifier).map(Selection::Node),
		};

		let node = self.resolve_node(node_part)?;
		let not_found = || SceneError::NotFound {
			identifier: identifier.to_owned(),
		};
		let attr = PlugPath::parse(attr_part).map_err(|_| not_found())?;
		let attr = self.canonical_attr(node, &attr).ok_or_else(not_found)?;
		Ok(Selection::Plug(PlugRef::new(node, attr)))
	}

	fn node_name(&self, node: NodeId) -> Result<String> {
		Ok(self.record(node)?.name.clone())
	}

	fn node_type(&self, node: NodeId) -> Result<String> {
		Ok(self.record(node)?.node_type.clone())
	}

	fn node_kind(&self, node: NodeId) -> Result<NodeKind> {
		Ok(self.record(node)?.kind)
	}

	fn parent_of(&self, node: NodeId) -> Result<Option<NodeId>> {
		Ok(self.record(node)?.parent)
	}

	fn children_of(&self, node: NodeId) -> Result<Vec<NodeId>> {
		Ok(self.record(node)?.children.clone())
	}

	fn roots(&self) -> Vec<NodeId> {
		self.ids()
			.filter(|node| {
				let record = &self.nodes[node.0 as usize];
				record.kind.is_dag() && record.parent.is_none()
			})
			.collect()
	}

	fn nodes(&self) -> Vec<NodeId> {
		self.ids().collect()
	}

	fn attribute(&self, node: NodeId, name: &str) -> Result<Option<AttrInfo>> {
		let record = self.record(node)?;
		let Some(def) = record.find_attr(name) else {
			return Ok(None);
		};

		let children = record
			.attributes
			.iter()
			.filter(|item| item.parent.as_deref() == Some(def.long_name.as_str()))
			.map(|item| item.long_name.clone())
			.collect();

		Ok(Some(AttrInfo {
			name: def.long_name.clone(),
			attr_type: def.attr_type,
			multi: def.multi,
			writable: def.writable,
			children,
		}))
	}

	fn existing_indices(&self, plug: &PlugRef) -> Result<Vec<u32>> {
		let plug = self.canonical(plug)?;
		let record = self.record(plug.node)?;
		let depth = plug.attr.segments().len();
		let prefix = &plug.attr.segments()[..depth - 1];
		let leaf_name = self.leaf_def(&plug)?.long_name.as_str();

		let connected = self
			.connections
			.iter()
			.flat_map(|item| [&item.src, &item.dst])
			.filter(|end| end.node == plug.node)
			.map(|end| &end.attr);

		let mut out = BTreeSet::new();
		for attr in record.values.keys().chain(connected) {
			let segments = attr.segments();
			if segments.len() < depth || segments[..depth - 1] != *prefix {
				continue;
			}
			let Some(parts) = segment_parts(&segments[depth - 1]) else {
				continue;
			};
			if let (true, [index]) = (parts.name == leaf_name, parts.indices.as_slice()) {
				out.insert(*index);
			}
		}

		Ok(out.into_iter().collect())
	}

	fn value(&self, plug: &PlugRef) -> Result<Option<PlugValue>> {
		let plug = self.canonical(plug)?;
		Ok(self.record(plug.node)?.values.get(&plug.attr).cloned())
	}

	fn source_of(&self, plug: &PlugRef) -> Result<Option<PlugRef>> {
		let plug = self.canonical(plug)?;
		Ok(self.connections.iter().find(|item| item.dst == plug).map(|item| item.src.clone()))
	}

	fn destinations_of(&self, plug: &PlugRef) -> Result<Vec<PlugRef>> {
		let plug = self.canonical(plug)?;
		Ok(self
			.connections
			.iter()
			.filter(|item| item.src == plug)
			.map(|item| item.dst.clone())
			.collect())
	}

	fn connect(&mut self, src: &PlugRef, dst: &PlugRef) -> Result<()> {
		let src = self.canonical(src)?;
		let dst = self.canonical(dst)?;

		let dst_name = plug_name(&*self, &dst)?;

		if src == dst {
			return Err(SceneError::InvalidArgument {
				identifier: dst_name,
				reason: "cannot connect a plug to itself",
			});
		}
		if !self.leaf_def(&dst)?.writable {
			return Err(SceneError::NotWritable { plug: dst_name });
		}
		if self.connections.iter().any(|item| item.dst == dst) {
			return Err(SceneError::AlreadyConnected { dst: dst_name });
		}

		let src_name = plug_name(&*self, &src)?;
		tracing::debug!(src = %src_name, dst = %dst_name, "connect");
		self.connections.push(Connection { src, dst });
		Ok(())
	}

	fn set_value(&mut self, plug: &PlugRef, value: &PlugValue) -> Result<()> {
		let plug = self.canonical(plug)?;
		let plug_text = plug_name(&*self, &plug)?;
		let def = self.leaf_def(&plug)?;

		if !def.writable {
			return Err(SceneError::NotWritable { plug: plug_text });
		}
		if def.multi && !plug.attr.is_element() {
			return Err(SceneError::InvalidArgument {
				identifier: plug_text,
				reason: "array plug needs an element index",
			});
		}
		if !value.fits(def.attr_type) {
			return Err(SceneError::TypeMismatch {
				plug: plug_text,
				expected: def.attr_type.label(),
				got: value.kind(),
			});
		}

		tracing::debug!(plug = %plug_text, kind = value.kind(), "set value");
		self.record_mut(plug.node)?.values.insert(plug.attr, value.clone());
		Ok(())
	}

	fn create_node(&mut self, node_type: &str, name: &str, parent: Option<NodeId>) -> Result<NodeId> {
		let kind = kind_for_type(node_type);
		let invalid = |reason| SceneError::InvalidArgument {
			identifier: name.to_owned(),
			reason,
		};

		if name.is_empty() || name.contains(['|', '.']) || name.chars().any(char::is_whitespace) {
			return Err(invalid("invalid node name"));
		}
		match (kind, parent) {
			(NodeKind::Dependency, Some(_)) => return Err(invalid("dependency nodes have no DAG parent")),
			(NodeKind::Shape, None) => return Err(invalid("shape nodes need a transform parent")),
			(_, Some(parent)) if self.record(parent)?.kind != NodeKind::Transform => {
				return Err(invalid("DAG parent must be a transform"));
			}
			_ => {}
		}

		let node = NodeId(u32::try_from(self.nodes.len()).map_err(|_| invalid("scene is full"))?);
		let final_name = self.unique_name(name, kind, parent);
		let attributes = builtin_attributes(node_type, kind);

		self.nodes.push(NodeRecord {
			name: final_name,
			node_type: node_type.to_owned(),
			kind,
			parent,
			children: Vec::new(),
			builtin_count: attributes.len(),
			attributes,
			values: BTreeMap::new(),
		});
		if let Some(parent) = parent {
			self.record_mut(parent)?.children.push(node);
		}

		let created = display_name(&*self, node)?;
		tracing::debug!(node_type, node = %created, "create node");
		Ok(node)
	}

	fn add_attribute(&mut self, node: NodeId, def: &AttrDef) -> Result<()> {
		if def.long_name.is_empty() {
			return Err(SceneError::MissingAttributeName);
		}

		let node_name = display_name(&*self, node)?;
		let record = self.record(node)?;
		let names = std::iter::once(def.long_name.as_str()).chain(def.short_name.as_deref());
		for name in names {
			if record.find_attr(name).is_some() {
				return Err(SceneError::AttributeExists {
					node: node_name,
					attr: name.to_owned(),
				});
			}
		}
		if let Some(parent) = def.parent.as_deref() {
			let Some(parent_def) = record.find_attr(parent) else {
				return Err(SceneError::AttributeNotFound {
					node: node_name,
					attr: parent.to_owned(),
				});
			};
			if parent_def.attr_type != AttrType::Compound {
				return Err(SceneError::InvalidArgument {
					identifier: format!("{node_name}.{parent}"),
					reason: "parent attribute is not compound",
				});
			}
		}

		let mut def = def.clone();
		if let Some(parent) = def.parent.take() {
			let long = record.find_attr(&parent).map_or(parent, |item| item.long_name.clone());
			def.parent = Some(long);
		}

		tracing::debug!(node = %node_name, attr = %def.long_name, "add attribute");
		self.record_mut(node)?.attributes.push(def);
		Ok(())
	}
}

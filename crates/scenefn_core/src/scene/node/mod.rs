use std::collections::BTreeMap;

use crate::scene::{
	AttrInfo, AttrType, NodeId, NodeValue, PlugPath, PlugRef, PlugToken, PlugValue, Result, SceneError, SceneHost, dag_node, display_name, object, plug_name, plug_ref,
};

/// Display names of the nodes in `nodes` whose type is `node_type`.
pub fn of_type<H: SceneHost + ?Sized>(host: &H, nodes: &[&str], node_type: &str) -> Result<Vec<String>> {
	let mut out = Vec::new();
	for identifier in nodes {
		let node = object(host, identifier)?;
		if host.node_type(node)? == node_type {
			out.push(display_name(host, node)?);
		}
	}
	Ok(out)
}

/// Naming and placement for [`create`].
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
	/// Requested name; defaults to `<type>#`.
	pub name: Option<String>,
	/// DAG parent identifier.
	pub parent: Option<String>,
}

/// Create a node, then set or connect each `(attribute, value)` pair.
///
/// Writable attributes take values or incoming connections; read-only
/// attributes connect outward to the plugs named by the value.
pub fn create<H, I, S>(host: &mut H, node_type: &str, options: &CreateOptions, values: I) -> Result<String>
where
	H: SceneHost + ?Sized,
	I: IntoIterator<Item = (S, NodeValue)>,
	S: AsRef<str>,
{
	let parent = match options.parent.as_deref() {
		Some(identifier) => Some(dag_node(&*host, identifier)?),
		None => None,
	};
	let name = options.name.clone().unwrap_or_else(|| format!("{node_type}#"));

	let node = host.create_node(node_type, &name, parent)?;
	let created = display_name(&*host, node)?;
	tracing::debug!(node_type, node = %created, "created node");

	for (attr, value) in values {
		let target = Target::lookup(&*host, node, PlugPath::parse(attr.as_ref())?)?;
		if target.info.writable {
			set_or_connect(host, &target, &value)?;
		} else {
			connect_out(host, &target, &value)?;
		}
	}

	Ok(created)
}

/// Value shapes recognized against a target attribute.
enum Shape<'a> {
	Scalar(PlugValue),
	Text(&'a str),
	Sequence(&'a [NodeValue]),
	Keyed(&'a BTreeMap<String, NodeValue>),
	Matrix16([f64; 16]),
}

impl Shape<'_> {
	fn label(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Text(_) => "text",
			Self::Sequence(_) => "sequence",
			Self::Keyed(_) => "keyed",
			Self::Matrix16(_) => "matrix",
		}
	}
}

fn classify<'a>(value: &'a NodeValue, info: &AttrInfo) -> Shape<'a> {
	match value {
		NodeValue::Bool(flag) => Shape::Scalar(PlugValue::Bool(*flag)),
		NodeValue::Int(number) => Shape::Scalar(PlugValue::Int(*number)),
		NodeValue::Float(number) => Shape::Scalar(PlugValue::Float(*number)),
		NodeValue::Text(text) => Shape::Text(text),
		NodeValue::Keyed(items) => Shape::Keyed(items),
		NodeValue::Sequence(items) => match matrix16(items) {
			Some(matrix) if info.attr_type == AttrType::Matrix => Shape::Matrix16(matrix),
			_ => Shape::Sequence(items),
		},
	}
}

fn matrix16(items: &[NodeValue]) -> Option<[f64; 16]> {
	if items.len() != 16 {
		return None;
	}
	let mut out = [0.0_f64; 16];
	for (slot, item) in out.iter_mut().zip(items) {
		*slot = item.as_f64()?;
	}
	Some(out)
}

/// Plug being assigned, with the introspection of its leaf attribute.
struct Target {
	plug: PlugRef,
	info: AttrInfo,
	array: bool,
}

impl Target {
	fn lookup<H: SceneHost + ?Sized>(host: &H, node: NodeId, attr: PlugPath) -> Result<Self> {
		let found = match attr.leaf() {
			Some(leaf) => host.attribute(node, leaf.name)?.map(|info| (info, !leaf.indices.is_empty())),
			None => None,
		};
		let Some((info, element)) = found else {
			return Err(SceneError::AttributeNotFound {
				node: display_name(host, node)?,
				attr: attr.to_string(),
			});
		};

		let array = info.multi && !element;
		Ok(Self {
			plug: PlugRef::new(node, attr),
			info,
			array,
		})
	}

	fn child<H: SceneHost + ?Sized>(&self, host: &H, token: PlugToken) -> Result<Self> {
		Self::lookup(host, self.plug.node, self.plug.attr.join(token)?)
	}

	fn element<H: SceneHost + ?Sized>(&self, host: &H, index: usize) -> Result<Self> {
		let index = u32::try_from(index).map_err(|_| SceneError::InvalidPlugPath {
			path: format!("{}[{index}]", self.plug.attr),
		})?;
		Self::lookup(host, self.plug.node, self.plug.attr.join(index)?)
	}

	fn matches_children(&self, items: &[NodeValue]) -> bool {
		!self.info.children.is_empty() && items.len() == self.info.children.len()
	}

	fn unsupported<H: SceneHost + ?Sized>(&self, host: &H, shape: &Shape<'_>) -> SceneError {
		SceneError::UnsupportedValue {
			plug: plug_name(host, &self.plug).unwrap_or_else(|_| self.plug.attr.to_string()),
			shape: shape.label(),
		}
	}
}

fn set_or_connect<H: SceneHost + ?Sized>(host: &mut H, target: &Target, value: &NodeValue) -> Result<()> {
	let shape = classify(value, &target.info);
	match &shape {
		Shape::Keyed(items) => {
			for (key, item) in items.iter() {
				let child = target.child(&*host, PlugToken::from(key.as_str()))?;
				set_or_connect(host, &child, item)?;
			}
			Ok(())
		}
		Shape::Matrix16(matrix) => host.set_value(&target.plug, &PlugValue::Matrix(*matrix)),
		Shape::Sequence(items) if target.matches_children(items) => {
			for (name, item) in target.info.children.iter().zip(items.iter()) {
				let child = target.child(&*host, PlugToken::Name(name.clone()))?;
				set_or_connect(host, &child, item)?;
			}
			Ok(())
		}
		Shape::Sequence(items) if target.array => {
			for (index, item) in items.iter().enumerate() {
				let element = target.element(&*host, index)?;
				set_or_connect(host, &element, item)?;
			}
			Ok(())
		}
		Shape::Text(text) if host.exists(text) => {
			let src = plug_ref(&*host, text)?;
			tracing::debug!(src = %text, "connecting input");
			host.connect(&src, &target.plug)
		}
		Shape::Text(text) if target.info.attr_type == AttrType::String => host.set_value(&target.plug, &PlugValue::Text((*text).to_owned())),
		Shape::Scalar(scalar) => host.set_value(&target.plug, scalar),
		Shape::Sequence(_) | Shape::Text(_) => Err(target.unsupported(&*host, &shape)),
	}
}

fn connect_out<H: SceneHost + ?Sized>(host: &mut H, target: &Target, value: &NodeValue) -> Result<()> {
	let shape = classify(value, &target.info);
	match &shape {
		Shape::Keyed(items) => {
			for (key, item) in items.iter() {
				let child = target.child(&*host, PlugToken::from(key.as_str()))?;
				connect_out(host, &child, item)?;
			}
			Ok(())
		}
		Shape::Sequence(items) if target.matches_children(items) => {
			for (name, item) in target.info.children.iter().zip(items.iter()) {
				let child = target.child(&*host, PlugToken::Name(name.clone()))?;
				connect_out(host, &child, item)?;
			}
			Ok(())
		}
		Shape::Sequence(items) if target.array => {
			for (index, item) in items.iter().enumerate() {
				let element = target.element(&*host, index)?;
				connect_out(host, &element, item)?;
			}
			Ok(())
		}
		Shape::Sequence(items) => {
			for item in items.iter() {
				connect_out(host, target, item)?;
			}
			Ok(())
		}
		Shape::Text(text) if host.exists(text) => {
			let dst = plug_ref(&*host, text)?;
			tracing::debug!(dst = %text, "connecting output");
			host.connect(&target.plug, &dst)
		}
		Shape::Text(_) | Shape::Scalar(_) | Shape::Matrix16(_) => Err(target.unsupported(&*host, &shape)),
	}
}

#[cfg(test)]
mod tests;

use crate::scene::{NodeId, PlugRef, Result, SceneError, SceneHost, Selection};

/// Resolve `identifier` to a node, or to the node owning a plug.
pub fn object<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<NodeId> {
	Ok(host.resolve(identifier)?.node())
}

/// Resolve `identifier` to a DAG node.
pub fn dag_node<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<NodeId> {
	let node = object(host, identifier)?;
	if !host.node_kind(node)?.is_dag() {
		return Err(SceneError::NotDagNode {
			identifier: identifier.to_owned(),
		});
	}
	Ok(node)
}

/// Resolve `identifier` to a plug.
pub fn plug_ref<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<PlugRef> {
	match host.resolve(identifier)? {
		Selection::Plug(plug) => Ok(plug),
		Selection::Node(_) => Err(SceneError::NotPlug {
			identifier: identifier.to_owned(),
		}),
	}
}

/// Full `|a|b` path for DAG nodes, plain name otherwise.
pub fn display_name<H: SceneHost + ?Sized>(host: &H, node: NodeId) -> Result<String> {
	if !host.node_kind(node)?.is_dag() {
		return host.node_name(node);
	}

	let mut out = String::new();
	for segment in host.hierarchy_path(node)? {
		out.push('|');
		out.push_str(&segment);
	}
	Ok(out)
}

/// Plug name using the owning node's display name.
pub fn plug_name<H: SceneHost + ?Sized>(host: &H, plug: &PlugRef) -> Result<String> {
	Ok(format!("{}.{}", display_name(host, plug.node)?, plug.attr))
}

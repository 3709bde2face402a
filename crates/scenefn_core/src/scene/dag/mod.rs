use crate::scene::{NodeId, NodeKind, Result, SceneError, SceneHost, Selection, dag_node, display_name};

/// Limits for recursive descendant listing.
#[derive(Debug, Clone, Default)]
pub struct DescendOptions {
	/// Deepest level to list below the start node (`Some(0)` lists nothing); `None` lists everything.
	pub max_depth: Option<u32>,
}

/// Full paths of the ancestors of `dag_node`, root first.
pub fn ancestors<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	let node = dag_node(host, dag_node_name)?;

	let mut out = Vec::new();
	let mut cursor = host.parent_of(node)?;
	while let Some(parent) = cursor {
		out.push(display_name(host, parent)?);
		cursor = host.parent_of(parent)?;
	}
	out.reverse();
	Ok(out)
}

/// Path of the child `name` below `dag_path`.
pub fn child(dag_path: &str, name: &str) -> String {
	format!("{dag_path}|{name}")
}

/// Full paths of the child transforms of a DAG node.
pub fn children<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	let node = dag_node(host, dag_node_name)?;
	children_of_kind(host, node, NodeKind::Transform)
}

/// Full paths of the child shapes of a DAG node.
pub fn shapes<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	let node = dag_node(host, dag_node_name)?;
	children_of_kind(host, node, NodeKind::Shape)
}

fn children_of_kind<H: SceneHost + ?Sized>(host: &H, node: NodeId, kind: NodeKind) -> Result<Vec<String>> {
	let mut out = Vec::new();
	for item in transform_or_shape_children(host, node, kind)? {
		out.push(display_name(host, item)?);
	}
	Ok(out)
}

fn transform_or_shape_children<H: SceneHost + ?Sized>(host: &H, node: NodeId, kind: NodeKind) -> Result<Vec<NodeId>> {
	let mut out = Vec::new();
	for item in host.children_of(node)? {
		if host.node_kind(item)? == kind {
			out.push(item);
		}
	}
	Ok(out)
}

/// Full paths of all descendant transforms, depth first.
pub fn descendants<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	descendants_with(host, dag_node_name, &DescendOptions::default())
}

/// Full paths of descendant transforms, depth first, bounded by `options`.
pub fn descendants_with<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str, options: &DescendOptions) -> Result<Vec<String>> {
	let root = dag_node(host, dag_node_name)?;

	let mut out = Vec::new();
	let mut stack: Vec<(NodeId, u32)> = Vec::new();
	if options.max_depth.is_none_or(|max| max >= 1) {
		push_children(host, &mut stack, root, 1)?;
	}

	while let Some((node, depth)) = stack.pop() {
		let path = display_name(host, node)?;
		tracing::trace!(path = %path, depth, "descendant");
		out.push(path);

		if options.max_depth.is_none_or(|max| depth < max) {
			push_children(host, &mut stack, node, depth + 1)?;
		}
	}

	Ok(out)
}

fn push_children<H: SceneHost + ?Sized>(host: &H, stack: &mut Vec<(NodeId, u32)>, node: NodeId, depth: u32) -> Result<()> {
	let items = transform_or_shape_children(host, node, NodeKind::Transform)?;
	stack.extend(items.into_iter().rev().map(|item| (item, depth)));
	Ok(())
}

/// Full `|a|b|c` path of a DAG node.
pub fn full_path<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<String> {
	let node = dag_node(host, dag_node_name)?;
	display_name(host, node)
}

/// Segment names from the root down to the DAG node.
pub fn hierarchy_path<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	let node = dag_node(host, dag_node_name)?;
	host.hierarchy_path(node)
}

/// Short name of a DAG node.
pub fn name<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<String> {
	// Taken from the full path; partial paths may not be unique.
	let segments = hierarchy_path(host, dag_node_name)?;
	segments.last().cloned().ok_or_else(|| SceneError::NotFound {
		identifier: dag_node_name.to_owned(),
	})
}

/// Full path of the parent, or `None` for root nodes.
pub fn parent<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Option<String>> {
	let node = dag_node(host, dag_node_name)?;
	host.parent_of(node)?.map(|parent| display_name(host, parent)).transpose()
}

/// Shortest trailing sub-path that still resolves to the same node.
pub fn partial_path<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<String> {
	let node = dag_node(host, dag_node_name)?;
	let segments = host.hierarchy_path(node)?;

	for start in (0..segments.len()).rev() {
		let candidate = segments[start..].join("|");
		match host.resolve(&candidate) {
			Ok(Selection::Node(found)) if found == node => return Ok(candidate),
			Ok(_) | Err(SceneError::Ambiguous { .. }) => {}
			Err(err) => return Err(err),
		}
	}

	display_name(host, node)
}

/// Full paths of the other children of the parent; root nodes list the other roots.
pub fn siblings<H: SceneHost + ?Sized>(host: &H, dag_node_name: &str) -> Result<Vec<String>> {
	let node = dag_node(host, dag_node_name)?;

	let peers = match host.parent_of(node)? {
		Some(parent) => host.children_of(parent)?,
		None => host.roots(),
	};

	let mut out = Vec::new();
	for peer in peers {
		if peer != node {
			out.push(display_name(host, peer)?);
		}
	}
	Ok(out)
}

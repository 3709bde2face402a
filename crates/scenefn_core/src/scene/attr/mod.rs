use crate::scene::{AttrDef, PlugPath, PlugToken, Result, SceneError, SceneHost, display_name, object};

/// Add `def` to every node and return the new plug names in input order.
///
/// Names follow the plug grammar: `node.parent.name` when `def.parent` is set,
/// `node.name` otherwise. Every identifier is resolved before the first attribute
/// is added.
pub fn add<H: SceneHost + ?Sized>(host: &mut H, nodes: &[&str], def: &AttrDef) -> Result<Vec<String>> {
	if def.long_name.is_empty() {
		return Err(SceneError::MissingAttributeName);
	}

	let mut targets = Vec::with_capacity(nodes.len());
	for identifier in nodes {
		targets.push(object(&*host, identifier)?);
	}

	let mut out = Vec::with_capacity(targets.len());
	for node in targets {
		host.add_attribute(node, def)?;

		let node_name = display_name(&*host, node)?;
		tracing::debug!(node = %node_name, attr = %def.long_name, "added attribute");

		let mut tokens = vec![PlugToken::Name(node_name)];
		if let Some(parent) = &def.parent {
			tokens.push(PlugToken::from(parent.as_str()));
		}
		tokens.push(PlugToken::from(def.long_name.as_str()));
		out.push(PlugPath::build(tokens)?.to_string());
	}

	Ok(out)
}

#[cfg(test)]
mod tests;

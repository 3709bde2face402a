use crate::scene::{PlugRef, Result, SceneError, SceneHost, plug_name, plug_ref};

/// Whether `plug` is an array plug: a multi attribute not narrowed to one element.
pub fn is_array<H: SceneHost + ?Sized>(host: &H, plug: &PlugRef) -> Result<bool> {
	let Some(leaf) = plug.attr.leaf() else {
		return Ok(false);
	};
	if !leaf.indices.is_empty() {
		return Ok(false);
	}
	Ok(host.attribute(plug.node, leaf.name)?.is_some_and(|info| info.multi))
}

fn array_plug<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<PlugRef> {
	let plug = plug_ref(host, identifier)?;
	if !is_array(host, &plug)? {
		return Err(SceneError::NotArrayPlug {
			plug: plug_name(host, &plug)?,
		});
	}
	Ok(plug)
}

/// Existing logical indices of an array plug, ascending.
pub fn indices<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<Vec<u32>> {
	let plug = array_plug(host, identifier)?;
	host.existing_indices(&plug)
}

/// Plug names of the existing elements of an array plug.
pub fn elements<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<Vec<String>> {
	let plug = array_plug(host, identifier)?;

	let mut out = Vec::new();
	for index in host.existing_indices(&plug)? {
		let element = PlugRef::new(plug.node, plug.attr.join(index)?);
		out.push(plug_name(host, &element)?);
	}
	Ok(out)
}

/// Plug name of the upstream connection, if any.
pub fn source<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<Option<String>> {
	let plug = plug_ref(host, identifier)?;
	host.source_of(&plug)?.map(|src| plug_name(host, &src)).transpose()
}

/// Plug names of the downstream connections.
pub fn destinations<H: SceneHost + ?Sized>(host: &H, identifier: &str) -> Result<Vec<String>> {
	let plug = plug_ref(host, identifier)?;
	host.destinations_of(&plug)?.iter().map(|dst| plug_name(host, dst)).collect()
}

#[cfg(test)]
mod tests;

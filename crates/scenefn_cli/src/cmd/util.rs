use scenefn::scene::{NodeValue, PlugToken, Result, SceneError};

/// Classify a CLI token: non-negative integers become indices.
pub(crate) fn parse_token(text: &str) -> PlugToken {
	match text.parse::<u32>() {
		Ok(index) => PlugToken::Index(index),
		Err(_) => PlugToken::from_text(text),
	}
}

/// Parse `ATTR=VALUE`; VALUE is JSON, or plain text when it is not valid JSON.
pub(crate) fn parse_assignment(text: &str) -> Result<(String, NodeValue)> {
	let Some((attr, raw)) = text.split_once('=') else {
		return Err(SceneError::InvalidArgument {
			identifier: text.to_owned(),
			reason: "expected ATTR=VALUE",
		});
	};
	if attr.is_empty() {
		return Err(SceneError::MissingAttributeName);
	}

	let value = serde_json::from_str::<NodeValue>(raw).unwrap_or_else(|_| NodeValue::Text(raw.to_owned()));
	Ok((attr.to_owned(), value))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Result of a scene query, printed one item per line or as JSON.
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub(crate) enum QueryOutput {
	One(String),
	Maybe(Option<String>),
	Many(Vec<String>),
	Indices(Vec<u32>),
}

impl QueryOutput {
	pub(crate) fn print_lines(&self) {
		match self {
			Self::One(item) => println!("{item}"),
			Self::Maybe(item) => println!("{}", item.as_deref().unwrap_or("-")),
			Self::Many(items) => {
				for item in items {
					println!("{item}");
				}
			}
			Self::Indices(items) => {
				for item in items {
					println!("{item}");
				}
			}
		}
	}
}

#[derive(serde::Serialize)]
pub(crate) struct QueryJson<'a> {
	pub(crate) scene: String,
	pub(crate) query: &'a str,
	pub(crate) target: &'a str,
	pub(crate) result: &'a QueryOutput,
}

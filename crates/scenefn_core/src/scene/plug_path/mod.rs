use std::fmt;

use crate::scene::{Result, SceneError};

/// One token consumed by the plug-path builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlugToken {
	/// Name starting a new segment. Any length except exactly one character.
	Name(String),
	/// Single character fused onto the previous segment.
	Suffix(char),
	/// Logical array index appended to the previous segment as `[i]`.
	Index(u32),
}

impl PlugToken {
	/// Classify a string token: exactly one character is a suffix, anything else a name.
	pub fn from_text(text: &str) -> Self {
		single_char(text).map_or_else(|| Self::Name(text.to_owned()), Self::Suffix)
	}
}

fn single_char(text: &str) -> Option<char> {
	let mut chars = text.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Some(ch),
		_ => None,
	}
}

impl From<&str> for PlugToken {
	fn from(text: &str) -> Self {
		Self::from_text(text)
	}
}

impl From<&String> for PlugToken {
	fn from(text: &String) -> Self {
		Self::from_text(text)
	}
}

impl From<String> for PlugToken {
	fn from(text: String) -> Self {
		match single_char(&text) {
			Some(ch) => Self::Suffix(ch),
			None => Self::Name(text),
		}
	}
}

impl From<char> for PlugToken {
	fn from(ch: char) -> Self {
		Self::Suffix(ch)
	}
}

impl From<u32> for PlugToken {
	fn from(index: u32) -> Self {
		Self::Index(index)
	}
}

impl fmt::Display for PlugToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => f.write_str(name),
			Self::Suffix(ch) => write!(f, "{ch}"),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

/// Dotted/bracketed attribute path, stored as already-fused segment strings.
///
/// A segment is a name, optionally followed by `[index]` selectors and fused
/// single-character suffixes. Rendering joins segments with `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlugPath {
	segments: Vec<String>,
}

/// Base name and index selectors of one parsed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentParts<'a> {
	/// Attribute name before any `[`.
	pub name: &'a str,
	/// Index selectors in order of appearance.
	pub indices: Vec<u32>,
}

impl PlugPath {
	/// Empty path with no segments.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a path from tokens consumed left to right.
	pub fn build<I>(tokens: I) -> Result<Self>
	where
		I: IntoIterator,
		I::Item: Into<PlugToken>,
	{
		let mut path = Self::new();
		for token in tokens {
			path.push(token)?;
		}
		Ok(path)
	}

	/// Apply one token: names open a segment, suffixes and indices extend the last one.
	pub fn push(&mut self, token: impl Into<PlugToken>) -> Result<()> {
		let token = token.into();
		match token {
			PlugToken::Name(name) => self.segments.push(name),
			PlugToken::Suffix(ch) => self.last_segment(PlugToken::Suffix(ch))?.push(ch),
			PlugToken::Index(index) => {
				let last = self.last_segment(PlugToken::Index(index))?;
				last.push('[');
				last.push_str(&index.to_string());
				last.push(']');
			}
		}
		Ok(())
	}

	/// Copy of this path extended by one token.
	pub fn join(&self, token: impl Into<PlugToken>) -> Result<Self> {
		let mut out = self.clone();
		out.push(token)?;
		Ok(out)
	}

	fn last_segment(&mut self, token: PlugToken) -> Result<&mut String> {
		self.segments
			.last_mut()
			.ok_or_else(|| SceneError::DanglingPlugToken { token: token.to_string() })
	}

	/// Parse attribute text of the form `name[i].child[j][k].leaf`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || SceneError::InvalidPlugPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut segments = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
				idx += 1;
			}
			if idx == start {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}
				input[n_start..idx].parse::<u32>().map_err(|_| invalid())?;
				idx += 1;
			}

			segments.push(input[start..idx].to_owned());

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { segments })
	}

	/// Fused segment strings in order.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Whether the path has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Parts of the last segment, if it has the `name[i]...` form.
	pub fn leaf(&self) -> Option<SegmentParts<'_>> {
		self.segments.last().and_then(|segment| segment_parts(segment))
	}

	/// Whether the last segment selects an array element.
	pub fn is_element(&self) -> bool {
		self.leaf().is_some_and(|parts| !parts.indices.is_empty())
	}
}

/// Split one segment into base name and index selectors.
///
/// Returns `None` for segments with text after a closing bracket, such as the
/// builder output `attr[1]X`.
pub fn segment_parts(segment: &str) -> Option<SegmentParts<'_>> {
	let (name, mut rest) = match segment.find('[') {
		Some(at) => segment.split_at(at),
		None => (segment, ""),
	};

	let mut indices = Vec::new();
	while !rest.is_empty() {
		let body = rest.strip_prefix('[')?;
		let close = body.find(']')?;
		indices.push(body[..close].parse::<u32>().ok()?);
		rest = &body[close + 1..];
	}

	Some(SegmentParts { name, indices })
}

impl fmt::Display for PlugPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, segment) in self.segments.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			f.write_str(segment)?;
		}
		Ok(())
	}
}

/// Build the plug name for a token sequence.
pub fn plug(tokens: &[PlugToken]) -> Result<String> {
	PlugPath::build(tokens.iter().cloned()).map(|path| path.to_string())
}

/// Partition a plug name at its first top-level `.` into node and attribute parts.
pub fn split_plug(path: &str) -> Result<(&str, &str)> {
	let mut depth = 0_u32;
	for (idx, byte) in path.bytes().enumerate() {
		match byte {
			b'[' => depth += 1,
			b']' => depth = depth.saturating_sub(1),
			b'.' if depth == 0 => {
				let (node, attr) = (&path[..idx], &path[idx + 1..]);
				if node.is_empty() || attr.is_empty() {
					break;
				}
				return Ok((node, attr));
			}
			_ => {}
		}
	}

	Err(SceneError::InvalidPlugPath { path: path.to_owned() })
}

/// Build a plug name from mixed string, character, and integer tokens.
///
/// Expands to a [`Result<String>`](crate::scene::Result).
#[macro_export]
macro_rules! plug {
	($($token:expr),+ $(,)?) => {
		$crate::scene::PlugPath::build([$($crate::scene::PlugToken::from($token)),+]).map(|path| path.to_string())
	};
}

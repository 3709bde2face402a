use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute data type understood by scene hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrType {
	/// Boolean flag.
	Bool,
	/// Signed integer.
	Long,
	/// Double-precision float.
	#[default]
	Double,
	/// UTF-8 string.
	String,
	/// 4x4 matrix stored row-major as 16 doubles.
	Matrix,
	/// Parent of child attributes; holds no value itself.
	Compound,
	/// Connection-only attribute.
	Message,
}

impl AttrType {
	/// Lowercase type label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Long => "long",
			Self::Double => "double",
			Self::String => "string",
			Self::Matrix => "matrix",
			Self::Compound => "compound",
			Self::Message => "message",
		}
	}
}

/// Definition of an attribute added to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrDef {
	/// Long attribute name; required.
	#[serde(rename = "name")]
	pub long_name: String,
	/// Optional short alias.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub short_name: Option<String>,
	/// Data type.
	#[serde(default, rename = "type")]
	pub attr_type: AttrType,
	/// Whether the attribute holds sparse indexed elements.
	#[serde(default)]
	pub multi: bool,
	/// Whether values may be set or connected into the attribute.
	#[serde(default = "default_writable")]
	pub writable: bool,
	/// Parent compound attribute, for child attributes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
}

fn default_writable() -> bool {
	true
}

impl AttrDef {
	/// Writable double attribute named `long_name`.
	pub fn new(long_name: impl Into<String>) -> Self {
		Self {
			long_name: long_name.into(),
			short_name: None,
			attr_type: AttrType::default(),
			multi: false,
			writable: true,
			parent: None,
		}
	}

	/// Set the data type.
	pub fn with_type(mut self, attr_type: AttrType) -> Self {
		self.attr_type = attr_type;
		self
	}

	/// Set the short alias.
	pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
		self.short_name = Some(short_name.into());
		self
	}

	/// Mark as a multi (array) attribute.
	pub fn multi(mut self) -> Self {
		self.multi = true;
		self
	}

	/// Mark as read-only (output) attribute.
	pub fn read_only(mut self) -> Self {
		self.writable = false;
		self
	}

	/// Nest under a compound parent.
	pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}

	/// Whether `name` matches the long or short name.
	pub fn answers_to(&self, name: &str) -> bool {
		self.long_name == name || self.short_name.as_deref() == Some(name)
	}
}

/// Value stored on a plug by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlugValue {
	/// Boolean scalar.
	Bool(bool),
	/// Integer scalar.
	Int(i64),
	/// Float scalar.
	Float(f64),
	/// String value.
	Text(String),
	/// Row-major 4x4 matrix.
	Matrix([f64; 16]),
}

impl PlugValue {
	/// Value kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Text(_) => "text",
			Self::Matrix(_) => "matrix",
		}
	}

	/// Whether this value may be stored on an attribute of `attr_type`.
	pub fn fits(&self, attr_type: AttrType) -> bool {
		matches!(
			(self, attr_type),
			(Self::Bool(_), AttrType::Bool)
				| (Self::Int(_) | Self::Float(_), AttrType::Bool | AttrType::Long | AttrType::Double)
				| (Self::Text(_), AttrType::String)
				| (Self::Matrix(_), AttrType::Matrix)
		)
	}
}

/// Input value for node creation, classified by shape against the target attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
	/// Boolean scalar.
	Bool(bool),
	/// Integer scalar.
	Int(i64),
	/// Float scalar.
	Float(f64),
	/// String: a plug name to connect, or a string value.
	Text(String),
	/// Ordered items: matrix entries, compound children, multi elements, or fan-out targets.
	Sequence(Vec<NodeValue>),
	/// Compound children by name.
	Keyed(BTreeMap<String, NodeValue>),
}

impl NodeValue {
	/// Numeric view of scalar values.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Int(value) => Some(*value as f64),
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}
}

impl From<bool> for NodeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for NodeValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for NodeValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for NodeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl<T: Into<NodeValue>> From<Vec<T>> for NodeValue {
	fn from(items: Vec<T>) -> Self {
		Self::Sequence(items.into_iter().map(Into::into).collect())
	}
}

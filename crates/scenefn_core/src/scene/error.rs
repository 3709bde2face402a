use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while building plug paths and querying or editing a scene host.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Filesystem failure while loading or saving a scene document.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Scene document was not valid JSON or did not match the document schema.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Index or suffix token appeared before any name segment.
	#[error("plug token {token:?} has no preceding segment to attach to")]
	DanglingPlugToken {
		/// Rendered offending token.
		token: String,
	},
	/// Plug path text is malformed.
	#[error("invalid plug path: {path:?}")]
	InvalidPlugPath {
		/// Original path text.
		path: String,
	},
	/// Identifier does not resolve to anything in the scene.
	#[error("object '{identifier}' does not exist")]
	NotFound {
		/// Identifier that failed to resolve.
		identifier: String,
	},
	/// Identifier is not a selectable name, path, or plug.
	#[error("cannot select '{identifier}': {reason}")]
	InvalidArgument {
		/// Rejected identifier.
		identifier: String,
		/// Short description of the problem.
		reason: &'static str,
	},
	/// Identifier matches more than one object.
	#[error("object '{identifier}' is ambiguous ({matches} matches)")]
	Ambiguous {
		/// Identifier that resolved more than once.
		identifier: String,
		/// Number of matching objects.
		matches: usize,
	},
	/// Object exists but is not part of the DAG hierarchy.
	#[error("object '{identifier}' is not a DAG node")]
	NotDagNode {
		/// Offending identifier.
		identifier: String,
	},
	/// Object exists but is a node, not a plug.
	#[error("object '{identifier}' is not a plug")]
	NotPlug {
		/// Offending identifier.
		identifier: String,
	},
	/// Plug exists but is not an array plug.
	#[error("'{plug}' is not an array plug")]
	NotArrayPlug {
		/// Plug name.
		plug: String,
	},
	/// Attribute definition has no long name.
	#[error("an attribute name was not specified")]
	MissingAttributeName,
	/// Attribute is not present on the node.
	#[error("attribute '{attr}' not found on '{node}'")]
	AttributeNotFound {
		/// Node display name.
		node: String,
		/// Requested attribute name.
		attr: String,
	},
	/// Attribute with the same name is already present on the node.
	#[error("attribute '{attr}' already exists on '{node}'")]
	AttributeExists {
		/// Node display name.
		node: String,
		/// Duplicate attribute name.
		attr: String,
	},
	/// Plug is read-only.
	#[error("plug '{plug}' is not writable")]
	NotWritable {
		/// Plug name.
		plug: String,
	},
	/// Value kind does not fit the attribute type.
	#[error("type mismatch on '{plug}': expected {expected}, got {got}")]
	TypeMismatch {
		/// Plug name.
		plug: String,
		/// Attribute type label.
		expected: &'static str,
		/// Value kind label.
		got: &'static str,
	},
	/// Value shape cannot be set on or connected to the plug.
	#[error("cannot apply {shape} value to '{plug}'")]
	UnsupportedValue {
		/// Plug name.
		plug: String,
		/// Classified value shape label.
		shape: &'static str,
	},
	/// Destination plug already has an incoming connection.
	#[error("'{dst}' is already connected")]
	AlreadyConnected {
		/// Destination plug name.
		dst: String,
	},
	/// Node handle is not known to the host.
	#[error("unknown node handle {id}")]
	UnknownNode {
		/// Raw handle value.
		id: u32,
	},
}

//! Declarative shape rules for workflow documents.
//!
//! The schema is data: a `Shape` tree describing what a well-formed
//! document looks like, interpreted generically by [`check`]. Consistency
//! rules (duplicate IDs, dangling connections) belong to the validate
//! stages, not here.

mod check;

pub use check::check;

/// Allowed values for a node's `onError` mode.
pub const ON_ERROR_MODES: &[&str] = &[
    "continueErrorOutput",
    "continueRegularOutput",
    "stopWorkflow",
];

/// One declared field of an object shape.
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Field {
            name,
            shape,
            required: true,
        }
    }

    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Field {
            name,
            shape,
            required: false,
        }
    }
}

/// A composable shape rule for a JSON value.
pub enum Shape {
    String,
    Number,
    Bool,
    /// Homogeneous array.
    Array(Box<Shape>),
    /// Fixed-length array with per-position shapes.
    Tuple(Vec<Shape>),
    /// String-keyed map with a uniform value shape.
    Map(Box<Shape>),
    /// Object with declared fields. Undeclared fields pass unchecked.
    Object(Vec<Field>),
    /// String restricted to a fixed set of literals.
    OneOf(&'static [&'static str]),
    /// Either `null` or the inner shape.
    Nullable(Box<Shape>),
    /// Any JSON value.
    Any,
}

/// A single connection entry: target node name, connection-type label,
/// input-slot index.
pub fn connection_schema() -> Shape {
    Shape::Object(vec![
        Field::required("node", Shape::String),
        Field::required("type", Shape::String),
        Field::required("index", Shape::Number),
    ])
}

/// Connection-type label -> ordered output slots; a `null` slot marks an
/// output port with no connections.
pub fn node_connections_schema() -> Shape {
    Shape::Map(Box::new(Shape::Array(Box::new(Shape::Nullable(
        Box::new(Shape::Array(Box::new(connection_schema()))),
    )))))
}

/// Source node name -> that node's outgoing connections.
pub fn connections_schema() -> Shape {
    Shape::Map(Box::new(node_connections_schema()))
}

fn credentials_schema() -> Shape {
    Shape::Map(Box::new(Shape::Object(vec![
        Field::optional("id", Shape::String),
        Field::required("name", Shape::String),
    ])))
}

pub fn node_schema() -> Shape {
    Shape::Object(vec![
        Field::required("id", Shape::String),
        Field::required("name", Shape::String),
        Field::required("type", Shape::String),
        Field::required("typeVersion", Shape::Number),
        Field::required("position", Shape::Tuple(vec![Shape::Number, Shape::Number])),
        Field::required("parameters", Shape::Map(Box::new(Shape::Any))),
        Field::optional("disabled", Shape::Bool),
        Field::optional("notes", Shape::String),
        Field::optional("notesInFlow", Shape::Bool),
        Field::optional("retryOnFail", Shape::Bool),
        Field::optional("maxTries", Shape::Number),
        Field::optional("waitBetweenTries", Shape::Number),
        Field::optional("alwaysOutputData", Shape::Bool),
        Field::optional("executeOnce", Shape::Bool),
        Field::optional("onError", Shape::OneOf(ON_ERROR_MODES)),
        Field::optional("continueOnFail", Shape::Bool),
        Field::optional("webhookId", Shape::String),
        Field::optional("credentials", credentials_schema()),
    ])
}

/// The root document: `nodes` and `connections` are required; any other
/// root metadata (id, name, active, settings, ...) passes through unchecked.
pub fn workflow_schema() -> Shape {
    Shape::Object(vec![
        Field::required("nodes", Shape::Array(Box::new(node_schema()))),
        Field::required("connections", connections_schema()),
    ])
}

//! Generic interpreter applying a `Shape` to an untyped JSON value.

use serde_json::Value;

use super::{Field, Shape};
use crate::report::Issue;

/// Check `value` against `shape`, appending one error per violation.
///
/// `path` is the root-relative location of `value`; callers pass `"root"`
/// for the document itself. Nested locations are dotted and indexed
/// (`nodes[0].typeVersion`, `connections.Start.main[0][0].node`).
pub fn check(value: &Value, shape: &Shape, path: &str, issues: &mut Vec<Issue>) {
    match shape {
        Shape::Any => {}
        Shape::String => {
            if !value.is_string() {
                issues.push(mismatch(path, "string", value));
            }
        }
        Shape::Number => {
            if !value.is_number() {
                issues.push(mismatch(path, "number", value));
            }
        }
        Shape::Bool => {
            if !value.is_boolean() {
                issues.push(mismatch(path, "boolean", value));
            }
        }
        Shape::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            Some(s) => issues.push(Issue::error(
                path,
                format!("expected one of {:?}, found '{}'", allowed, s),
            )),
            None => issues.push(mismatch(path, "string", value)),
        },
        Shape::Nullable(inner) => {
            if !value.is_null() {
                check(value, inner, path, issues);
            }
        }
        Shape::Array(element) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check(item, element, &format!("{}[{}]", path, i), issues);
                }
            }
            None => issues.push(mismatch(path, "array", value)),
        },
        Shape::Tuple(shapes) => match value.as_array() {
            Some(items) => {
                if items.len() != shapes.len() {
                    issues.push(Issue::error(
                        path,
                        format!(
                            "expected array of {} elements, found {}",
                            shapes.len(),
                            items.len()
                        ),
                    ));
                } else {
                    for (i, (item, element)) in items.iter().zip(shapes).enumerate() {
                        check(item, element, &format!("{}[{}]", path, i), issues);
                    }
                }
            }
            None => issues.push(mismatch(path, "array", value)),
        },
        Shape::Map(value_shape) => match value.as_object() {
            Some(entries) => {
                for (key, entry) in entries {
                    check(entry, value_shape, &join(path, key), issues);
                }
            }
            None => issues.push(mismatch(path, "object", value)),
        },
        Shape::Object(fields) => match value.as_object() {
            Some(entries) => {
                for field in fields {
                    check_field(entries, field, path, issues);
                }
            }
            None => issues.push(mismatch(path, "object", value)),
        },
    }
}

fn check_field(
    entries: &serde_json::Map<String, Value>,
    field: &Field,
    path: &str,
    issues: &mut Vec<Issue>,
) {
    match entries.get(field.name) {
        Some(value) => check(value, &field.shape, &join(path, field.name), issues),
        None if field.required => issues.push(Issue::error(
            join(path, field.name),
            format!("missing required field '{}'", field.name),
        )),
        None => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path == "root" {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> Issue {
    Issue::error(path, format!("expected {}, found {}", expected, kind_of(value)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

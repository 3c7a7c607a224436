//! Admission policy: decides whether a criterion participates at all.
//!
//! A leaf whose inputs are not admitted compiles to no condition. These
//! checks are pure and never fail.

use tracing::trace;

use crate::path::Fields;
use crate::value::Value;

/// Field reference is non-empty and has no blank segment.
pub fn fields(fields: &Fields) -> bool {
    let ok = fields.is_well_formed();
    if !ok {
        trace!(fields = %fields, "field reference not admitted");
    }
    ok
}

/// Scalar value is present: not null, not blank when it is text, finite
/// when it is a float.
pub fn value(value: &Value) -> bool {
    let ok = match value {
        Value::Null => false,
        Value::Text(s) => !s.trim().is_empty(),
        Value::Float(x) => x.is_finite(),
        _ => true,
    };
    if !ok {
        trace!(?value, "value not admitted");
    }
    ok
}

/// Collection is non-empty and holds at least one non-null element.
pub fn values(values: &[Value]) -> bool {
    let ok = values.iter().any(|v| !v.is_null());
    if !ok {
        trace!(len = values.len(), "value collection not admitted");
    }
    ok
}

/// Both the field reference and the scalar value are admitted.
pub fn admits(f: &Fields, v: &Value) -> bool {
    fields(f) && value(v)
}

/// Both the field reference and the collection are admitted.
pub fn admits_all(f: &Fields, vs: &[Value]) -> bool {
    fields(f) && values(vs)
}

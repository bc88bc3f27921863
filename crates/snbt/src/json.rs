//! Conversion of parsed tags into `serde_json` values

use serde_json::{Map, Number, Value as JsonValue};

use crate::value::{Compound, Value};

fn float_to_json(f: f64) -> JsonValue {
    Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}

fn compound_to_json(c: &Compound) -> JsonValue {
    let mut map = Map::with_capacity(c.len());
    for (k, v) in c.iter() {
        map.insert(k.to_string(), v.to_json());
    }
    JsonValue::Object(map)
}

impl Value {
    /// JSON view of the tree. Tag widths are lost; non-finite floats become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Byte(b) => JsonValue::from(*b),
            Value::Short(s) => JsonValue::from(*s),
            Value::Int(i) => JsonValue::from(*i),
            Value::Long(l) => JsonValue::from(*l),
            Value::Float(f) => float_to_json(f64::from(*f)),
            Value::Double(d) => float_to_json(*d),
            Value::String(s) => JsonValue::String(s.to_string()),
            Value::ByteArray(v) => v.iter().copied().map(JsonValue::from).collect(),
            Value::IntArray(v) => v.iter().copied().map(JsonValue::from).collect(),
            Value::LongArray(v) => v.iter().copied().map(JsonValue::from).collect(),
            Value::List(l) => l.iter().map(Value::to_json).collect(),
            Value::Compound(c) => compound_to_json(c),
        }
    }
}

impl Compound {
    pub fn to_json(&self) -> JsonValue {
        compound_to_json(self)
    }
}

impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        v.to_json()
    }
}

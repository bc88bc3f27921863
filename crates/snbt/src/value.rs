use std::sync::Arc;

use indexmap::IndexMap;

use crate::tag::TagType;

/// One node of a parsed tag tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(Arc<str>),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(List),
    Compound(Compound),
}

impl Value {
    pub fn tag_type(&self) -> TagType {
        match self {
            Value::Byte(_) => TagType::Byte,
            Value::Short(_) => TagType::Short,
            Value::Int(_) => TagType::Int,
            Value::Long(_) => TagType::Long,
            Value::Float(_) => TagType::Float,
            Value::Double(_) => TagType::Double,
            Value::String(_) => TagType::String,
            Value::ByteArray(_) => TagType::ByteArray,
            Value::IntArray(_) => TagType::IntArray,
            Value::LongArray(_) => TagType::LongArray,
            Value::List(_) => TagType::List,
            Value::Compound(_) => TagType::Compound,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.tag_type().is_numeric() || matches!(self, Value::String(_))
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Byte(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Short(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Compound> for Value {
    fn from(c: Compound) -> Self {
        Value::Compound(c)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

/// Ordered, key-unique map of named tags.
///
/// Iteration follows insertion order. Re-inserting an existing key replaces
/// its value and moves the key to the end.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: IndexMap<Arc<str>, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: Value) -> Option<Value> {
        let key = key.into();
        let previous = self.entries.shift_remove(&key);
        self.entries.insert(key, value);
        previous
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| &**k)
    }

    pub fn get_compound(&self, key: &str) -> Option<&Compound> {
        self.get(key).and_then(Value::as_compound)
    }

    pub fn get_list(&self, key: &str) -> Option<&List> {
        self.get(key).and_then(Value::as_list)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_byte(&self, key: &str) -> Option<i8> {
        self.get(key).and_then(Value::as_i8)
    }

    pub fn get_short(&self, key: &str) -> Option<i16> {
        self.get(key).and_then(Value::as_i16)
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(Value::as_i32)
    }

    /// Int lookup that falls back to `default` when the key is missing or not an int.
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Value::as_f32)
    }

    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (Arc<str>, Value)> {
        self.entries.into_iter()
    }
}

// IndexMap equality ignores order; compounds compare in iteration order.
impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Ordered sequence of tags with a nominal content type.
///
/// The content type is taken from the first element pushed and is not
/// checked against later elements.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    content_type: TagType,
    items: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self {
            content_type: TagType::End,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, value: Value) {
        if self.items.is_empty() && self.content_type == TagType::End {
            self.content_type = value.tag_type();
        }
        self.items.push(value);
    }

    pub fn content_type(&self) -> TagType {
        self.content_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_compound(&self, index: usize) -> Option<&Compound> {
        self.get(index).and_then(Value::as_compound)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn into_items(self) -> Vec<Value> {
        self.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

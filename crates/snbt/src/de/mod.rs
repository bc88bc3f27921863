//! serde::Deserializer implementation backed by a parsed [`Value`]

use std::sync::Arc;

use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, SeqAccess};

use crate::value::Value;
use crate::{Result, options::Options};

#[derive(Debug)]
pub struct DeError {
    msg: String,
}

impl core::fmt::Display for DeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl de::Error for DeError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        DeError {
            msg: format!("{}", t),
        }
    }
}

impl core::error::Error for DeError {}

impl From<DeError> for crate::error::Error {
    fn from(e: DeError) -> Self {
        crate::error::Error::Message(e.msg)
    }
}

pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }
}

struct SeqDeserializer<I> {
    elems: I,
}

impl<'de, I> SeqAccess<'de> for SeqDeserializer<I>
where
    I: Iterator<Item = Value>,
{
    type Error = DeError;

    fn next_element_seed<T>(&mut self, seed: T) -> core::result::Result<Option<T::Value>, Self::Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.elems.next() {
            Some(v) => seed.deserialize(Deserializer { value: v }).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.elems.size_hint() {
            (lo, Some(hi)) if lo == hi => Some(lo),
            _ => None,
        }
    }
}

struct MapDeserializer<I> {
    entries: I,
    next_val: Option<Value>,
}

impl<'de, I> MapAccess<'de> for MapDeserializer<I>
where
    I: Iterator<Item = (Arc<str>, Value)>,
{
    type Error = DeError;

    fn next_key_seed<K>(&mut self, seed: K) -> core::result::Result<Option<K::Value>, Self::Error>
    where
        K: de::DeserializeSeed<'de>,
    {
        let Some((key, val)) = self.entries.next() else {
            return Ok(None);
        };
        self.next_val = Some(val);
        let de_key: de::value::StringDeserializer<DeError> = key.to_string().into_deserializer();
        seed.deserialize(de_key).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let v = self
            .next_val
            .take()
            .ok_or_else(|| <DeError as de::Error>::custom("value requested before key"))?;
        seed.deserialize(Deserializer { value: v })
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Byte(b) => visitor.visit_i8(b),
            Value::Short(s) => visitor.visit_i16(s),
            Value::Int(i) => visitor.visit_i32(i),
            Value::Long(l) => visitor.visit_i64(l),
            Value::Float(f) => visitor.visit_f32(f),
            Value::Double(d) => visitor.visit_f64(d),
            Value::String(s) => visitor.visit_str(&s),
            Value::ByteArray(v) => visitor.visit_seq(SeqDeserializer {
                elems: v.into_iter().map(Value::Byte),
            }),
            Value::IntArray(v) => visitor.visit_seq(SeqDeserializer {
                elems: v.into_iter().map(Value::Int),
            }),
            Value::LongArray(v) => visitor.visit_seq(SeqDeserializer {
                elems: v.into_iter().map(Value::Long),
            }),
            Value::List(l) => visitor.visit_seq(SeqDeserializer {
                elems: l.into_items().into_iter(),
            }),
            Value::Compound(c) => visitor.visit_map(MapDeserializer {
                entries: c.into_entries(),
                next_val: None,
            }),
        }
    }

    // Any present tag is `Some`; absence is handled by serde's missing-field logic.
    fn deserialize_option<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    // NBT has no boolean tag; bytes stand in for them.
    fn deserialize_bool<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Byte(b) => visitor.visit_bool(b != 0),
            other => de::Deserializer::deserialize_any(Deserializer { value: other }, visitor),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    // Unit variants are written as plain strings.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => {
                let variant: de::value::StringDeserializer<DeError> = s.to_string().into_deserializer();
                visitor.visit_enum(variant)
            }
            other => de::Deserializer::deserialize_any(Deserializer { value: other }, visitor),
        }
    }

    serde::forward_to_deserialize_any! {
        i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string bytes byte_buf
        unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Parse SNBT text and deserialize it into `T`.
pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let v = crate::decode::parser::parse_to_value(s, options)?;
    let t = T::deserialize(Deserializer::from_value(v))?;
    Ok(t)
}

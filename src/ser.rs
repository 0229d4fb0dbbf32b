//! The dynamically-typed embedding layer.
//!
//! [`TomlBuilder`] dispatches over the closed [`Value`] union, which makes an
//! unsupported type unreachable for well-typed callers. This module is where
//! values of unknown runtime shape enter the crate: [`ValueSerializer`]
//! implements [`serde::Serializer`] to convert any `T: Serialize` into a
//! [`Value`], and rejects shapes TOML key-values cannot carry.
//!
//! ## Usage
//!
//! ```rust
//! use toml_builder::{to_value, Value};
//!
//! assert_eq!(to_value(&25u8).unwrap(), Value::Integer(25));
//! assert_eq!(to_value("mail").unwrap(), Value::String("mail".to_string()));
//! assert_eq!(
//!     to_value(&[1, 2, 3]).unwrap(),
//!     Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
//! );
//! ```
//!
//! Maps and structs are rejected rather than flattened: TOML tables are
//! keygroups, opened with [`TomlBuilder::add_group`], not values.
//!
//! [`TomlBuilder`]: crate::TomlBuilder
//! [`TomlBuilder::add_group`]: crate::TomlBuilder::add_group

use crate::{Error, Result, Value};
use serde::{ser, Serialize};

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use toml_builder::{to_value, Value};
///
/// let value = to_value(&vec![true, false]).unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Boolean(true), Value::Boolean(false)]));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] when the value's runtime shape has no
/// TOML key-value representation: `None`, unit, bytes, maps, structs,
/// data-carrying enum variants, and `u64` values above `i64::MAX`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// A [`serde::Serializer`] whose output is a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<Value, Error>;
    type SerializeMap = ser::Impossible<Value, Error>;
    type SerializeStruct = ser::Impossible<Value, Error>;
    type SerializeStructVariant = ser::Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Integer(v as i64))
        } else {
            Err(Error::unsupported_type("an integer beyond the i64 range"))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value> {
        Err(Error::unsupported_type("raw bytes"))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type("a missing value (TOML has no null)"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("the unit value (TOML has no null)"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type(&format!("the unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype enum variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple enum variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type(
            "a map (open a keygroup for nested tables)",
        ))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(&format!(
            "the struct {} (open a keygroup for nested tables)",
            name
        )))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct enum variants"))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    enum Mode {
        Fast,
        Careful(u8),
    }

    #[test]
    fn test_primitives() {
        assert_eq!(to_value(&true).unwrap(), Value::Boolean(true));
        assert_eq!(to_value(&42i32).unwrap(), Value::Integer(42));
        assert_eq!(to_value(&42u64).unwrap(), Value::Integer(42));
        assert_eq!(to_value(&2.5f32).unwrap(), Value::Float(2.5));
        assert_eq!(to_value(&'x').unwrap(), Value::String("x".to_string()));
        assert_eq!(to_value("str").unwrap(), Value::String("str".to_string()));
    }

    #[test]
    fn test_u64_beyond_i64_range_is_rejected() {
        let err = to_value(&u64::MAX).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn test_sequences_and_tuples_become_arrays() {
        assert_eq!(
            to_value(&vec![1, 2]).unwrap(),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
        assert_eq!(
            to_value(&(1, "a")).unwrap(),
            Value::Array(vec![Value::Integer(1), Value::String("a".to_string())])
        );
    }

    #[test]
    fn test_some_unwraps_none_fails() {
        assert_eq!(to_value(&Some(5)).unwrap(), Value::Integer(5));
        assert!(to_value(&Option::<i32>::None).is_err());
    }

    #[test]
    fn test_unit_variant_is_its_name() {
        assert_eq!(to_value(&Mode::Fast).unwrap(), Value::String("Fast".to_string()));
    }

    #[test]
    fn test_data_carrying_variant_is_rejected() {
        assert!(matches!(
            to_value(&Mode::Careful(3)).unwrap_err(),
            Error::UnsupportedType(_)
        ));
    }

    #[test]
    fn test_maps_and_structs_are_rejected() {
        let map = serde_json::json!({"a": 1});
        assert!(matches!(to_value(&map).unwrap_err(), Error::UnsupportedType(_)));

        #[derive(Serialize)]
        struct Nested {
            a: i32,
        }
        assert!(matches!(
            to_value(&Nested { a: 1 }).unwrap_err(),
            Error::UnsupportedType(_)
        ));
    }

    #[test]
    fn test_json_array_crosses_the_boundary() {
        let json = serde_json::json!([1, 2, 3]);
        assert_eq!(
            to_value(&json).unwrap(),
            Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        );
    }
}

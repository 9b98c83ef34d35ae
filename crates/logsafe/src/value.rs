use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::number::canonical_f64;
use crate::opaque::OpaqueValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(x) => f.write_str(&canonical_f64(*x)),
        }
    }
}

/// Mapping key: any hashable primitive. Keys are stringified on output, so
/// `Key::Bool(true)` and `Key::Int(42)` become the JSON keys `"true"` and
/// `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

/// A value as it arrives from a logging call site: a closed union of the
/// shapes the serializer knows, plus [`Opaque`](Value::Opaque) for
/// everything else. Containers are shared and interiorly mutable, so value
/// graphs may be cyclic; the serializer tolerates that rather than assuming
/// it away.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Ordered sequence.
    Array(List),
    /// Fixed-size ordered composite; immutable once built.
    Tuple(Rc<[Value]>),
    /// Unordered unique elements; serialized in a deterministic order.
    Set(List),
    /// Insertion-ordered mapping.
    Object(Map),
    /// Anything outside the closed union: sockets, locks, callables.
    Opaque(Rc<dyn OpaqueValue>),
}

impl Value {
    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn set<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Set(items.into_iter().collect())
    }

    pub fn tuple<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().collect())
    }

    pub fn opaque<T: OpaqueValue + 'static>(handle: T) -> Self {
        Value::Opaque(Rc::new(handle))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    pub fn as_array(&self) -> Option<&List> {
        match self {
            Value::Array(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

// Containers print by identity, not contents; contents may be cyclic.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Array(list) => write!(f, "Array@{:#x}", list.identity()),
            Value::Tuple(items) => write!(f, "Tuple(len={})", items.len()),
            Value::Set(list) => write!(f, "Set@{:#x}", list.identity()),
            Value::Object(map) => write!(f, "Object@{:#x}", map.identity()),
            Value::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::I64(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::I64(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::U64(u))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(Number::F64(x))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(node: serde_json::Value) -> Self {
        match node {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(number_from_json(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (Key::Str(k), Value::from(v))))
            }
        }
    }
}

fn number_from_json(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let node = crate::encode::value_to_json(self, &crate::options::Options::default());
        serde::Serialize::serialize(&node, serializer)
    }
}

/// Shared sequence storage. Cloning shares the same allocation; `identity`
/// distinguishes allocations, so cycle checks compare addresses rather than
/// contents.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Clones of the current elements, detached from the borrow so callers
    /// may traverse (and re-enter this list) freely.
    pub fn items(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List(Rc::new(RefCell::new(iter.into_iter().collect())))
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List@{:#x}(len={})", self.identity(), self.len())
    }
}

/// Shared insertion-ordered mapping storage. Duplicate keys replace in
/// place, keeping the original position.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<Vec<(Key, Value)>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<Key>, value: Value) {
        let key = key.into();
        let mut entries = self.0.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<Key> {
        self.0.borrow().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Clones of the current entries, in insertion order, detached from the
    /// borrow.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0.borrow().clone()
    }

    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map@{:#x}(len={})", self.identity(), self.len())
    }
}

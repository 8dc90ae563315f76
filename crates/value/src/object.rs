//! [`Object`] - shared handle to a string-keyed property map.
//!
//! Properties are kept in insertion order. Every property is own and
//! enumerable; inherited lookups go through the optional prototype.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::Value;

/// Own properties of an object, in insertion order.
pub type Props = IndexMap<String, Value>;

#[derive(Default)]
struct ObjectData {
    proto: Option<Object>,
    props: Props,
}

/// A reference-counted, mutable plain object.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proto(proto: Option<Object>) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            proto,
            props: Props::new(),
        })))
    }

    pub fn proto(&self) -> Option<Object> {
        self.0.borrow().proto.clone()
    }

    pub fn set_proto(&self, proto: Option<Object>) {
        self.0.borrow_mut().proto = proto;
    }

    /// Looks up `key` on the object, then along its prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.get_own(key) {
            return Some(value);
        }
        self.proto()?.get(key)
    }

    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0.borrow().props.get(key).cloned()
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.borrow().props.contains_key(key)
    }

    /// Sets an own property, returning the previous own value.
    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().props.insert(key.into(), value)
    }

    /// Removes an own property, keeping the order of the remaining keys.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().props.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().props.is_empty()
    }

    /// Own keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().props.keys().cloned().collect()
    }

    /// Snapshot of the own properties in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .props
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Borrows the own properties.
    ///
    /// Panics if the object is currently borrowed mutably.
    pub fn props(&self) -> Ref<'_, Props> {
        Ref::map(self.0.borrow(), |data| &data.props)
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared storage, stable for the allocation's lifetime.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let object = Object::new();
        {
            let mut data = object.0.borrow_mut();
            for (key, value) in iter {
                data.props.insert(key.into(), value);
            }
        }
        object
    }
}

// Prototype is not printed; does not guard against cycles.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().props.iter()).finish()
    }
}

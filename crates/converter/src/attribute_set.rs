use std::fmt;

use indexmap::{map::Iter, IndexMap};

use crate::{Converter, Property, Value};

/// An ordered set of converted attributes, keyed by property.
///
/// Lookups are independent of order; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet(IndexMap<Property, Value>);

impl AttributeSet {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, property: Property) -> Option<&Value> {
        self.0.get(&property)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.0.contains_key(&property)
    }

    /// Store `value` under `property`, returning the value it replaces.
    ///
    /// A replaced attribute keeps its original position.
    pub fn add(&mut self, property: Property, value: Value) -> Option<Value> {
        self.0.insert(property, value)
    }

    /// Remove `property`, keeping the order of the remaining attributes
    pub fn remove(&mut self, property: Property) -> Option<Value> {
        self.0.shift_remove(&property)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Convert `raw` and store the result. Returns `false`, leaving the set
    /// untouched, if the converter produced nothing.
    pub fn add_css_attribute(
        &mut self,
        converter: &Converter<'_>,
        property: Property,
        raw: &str,
    ) -> bool {
        match converter.convert(property, raw) {
            Some(value) => {
                self.add(property, value);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_, Property, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a Property, &'a Value);
    type IntoIter = Iter<'a, Property, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Property, Value)> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = (Property, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for AttributeSet {
    /// Serializes as a declaration block, e.g. `width: 10pt; color: red;`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (property, value)) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }

        Ok(())
    }
}

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{value::Value, Mode, Property};

use super::{Fallback, PropertyDescriptor};

/// Rejects anything outside a property's grammar
pub(crate) static STRICT_RULES: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::new(Mode::Strict, |_| Fallback::Reject));

/// Applies each property's compatibility fallback
pub(crate) static LENIENT_RULES: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::new(Mode::Lenient, Property::lenient_fallback));

/// Descriptor for every known property, in a fixed order
#[derive(Debug)]
pub(crate) struct RuleTable {
    mode: Mode,
    descriptors: IndexMap<Property, PropertyDescriptor>,
}

impl RuleTable {
    fn new(mode: Mode, fallback: impl Fn(Property) -> Fallback) -> Self {
        let descriptors = Property::ALL
            .iter()
            .map(|&property| {
                (
                    property,
                    PropertyDescriptor {
                        property,
                        rule: property.rule(),
                        fallback: fallback(property),
                    },
                )
            })
            .collect();

        Self { mode, descriptors }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn descriptor(&self, property: Property) -> &PropertyDescriptor {
        &self.descriptors[&property]
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.descriptors.values()
    }

    /// The value to store in place of one that failed validation, if any
    pub fn fallback(&self, descriptor: &PropertyDescriptor, raw: &str) -> Option<Value> {
        match descriptor.fallback {
            Fallback::Reject => None,
            Fallback::Raw => Some(Value::raw(raw)),
            Fallback::Default(default) => descriptor.rule.apply(default).ok(),
        }
    }
}

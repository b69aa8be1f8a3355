use crate::{
    rule::{PropertyDescriptor, Rejection, RejectionKind, RuleTable, LENIENT_RULES, STRICT_RULES},
    Logger, Mode, Options, Property, Value,
};

/// Turns raw declaration values into validated [`Value`]s.
///
/// A converter holds one of two immutable rule tables, chosen from
/// [`Options::mode`] at construction. Converting has no side effects apart
/// from logging.
///
/// ```
/// # use cssattr_converter as cssattr;
/// use cssattr::{Converter, Mode, Options, Property};
///
/// let strict = Converter::new(&Options::default());
/// assert_eq!(strict.convert(Property::Width, "-11.1pt"), None);
///
/// let lenient = Converter::new(&Options::default().mode(Mode::Lenient).quiet(true));
/// let value = lenient.convert(Property::ListStyleType, "bogus").unwrap();
/// assert_eq!(value.to_string(), "disc");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    rules: &'static RuleTable,
    logger: &'a dyn Logger,
    quiet: bool,
}

impl<'a> Converter<'a> {
    pub fn new(options: &Options<'a>) -> Self {
        let rules: &'static RuleTable = match options.mode {
            Mode::Strict => &*STRICT_RULES,
            Mode::Lenient => &*LENIENT_RULES,
        };

        Self {
            rules,
            logger: options.logger,
            quiet: options.quiet,
        }
    }

    pub fn mode(&self) -> Mode {
        self.rules.mode()
    }

    /// The rule and fallback this converter applies to `property`
    pub fn descriptor(&self, property: Property) -> &'static PropertyDescriptor {
        self.rules.descriptor(property)
    }

    /// Every property this converter knows, in a stable order
    pub fn descriptors(&self) -> impl Iterator<Item = &'static PropertyDescriptor> {
        self.rules.descriptors()
    }

    /// Convert `raw`, returning `None` if nothing should be stored
    pub fn convert(&self, property: Property, raw: &str) -> Option<Value> {
        self.try_convert(property, raw).ok()
    }

    /// Like [`Converter::convert`], but resolving the property by name
    pub fn convert_named(&self, name: &str, raw: &str) -> Option<Value> {
        self.try_convert_named(name, raw).ok()
    }

    /// Convert `raw`, returning why it was rejected on failure.
    ///
    /// In lenient mode a value that fails validation but has a fallback is
    /// returned as `Ok`.
    pub fn try_convert(&self, property: Property, raw: &str) -> Result<Value, Rejection> {
        let raw = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        let descriptor = self.rules.descriptor(property);

        let rejection = match descriptor.rule.apply(raw) {
            Ok(value) => return Ok(value),
            Err(rejection) => rejection,
        };

        // empty input never produces a value, not even a fallback
        if raw.is_empty() {
            return Err(rejection);
        }

        match self.rules.fallback(descriptor, raw) {
            Some(value) => {
                if !self.quiet {
                    self.logger.debug(&format!(
                        "{}: {} Using \"{}\".",
                        property, rejection, value
                    ));
                }
                Ok(value)
            }
            None => Err(rejection),
        }
    }

    pub fn try_convert_named(&self, name: &str, raw: &str) -> Result<Value, Rejection> {
        let property = Property::from_name(name).ok_or_else(|| {
            Rejection::new(
                RejectionKind::UnknownProperty,
                format!("Unknown property \"{}\".", name),
            )
        })?;

        self.try_convert(property, raw)
    }
}

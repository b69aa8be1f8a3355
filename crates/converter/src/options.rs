use crate::{Fs, Logger, StdFs, StdLogger};

/// Configuration for attribute conversion
///
/// The simplest usage is `cssattr::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) mode: Mode,
    pub(crate) unicode_error_messages: bool,
    pub(crate) quiet: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            mode: Mode::Strict,
            unicode_error_messages: true,
            quiet: false,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to control the file system that
    /// [`from_path`](crate::from_path) will see.
    ///
    /// By default, it uses [`StdFs`], which is backed by [`std::fs`].
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// How values that fail validation are treated
    ///
    ///  - [`Mode::Strict`] drops them.
    ///  - [`Mode::Lenient`] stores a per-property fallback: usually the raw
    ///    text, sometimes a fixed default.
    ///
    /// By default, conversion is strict.
    #[must_use]
    #[inline]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// This flag stops all events from reaching the [`crate::Logger`].
    ///
    /// By default, this value is `false` and events are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// This flag tells the declaration parser only to emit ASCII characters
    /// as part of error messages.
    ///
    /// By default non-ASCII characters are emitted for these messages.
    #[must_use]
    #[inline]
    pub const fn unicode_error_messages(mut self, unicode_error_messages: bool) -> Self {
        self.unicode_error_messages = unicode_error_messages;
        self
    }
}

/// Validation policy, fixed when a [`Converter`](crate::Converter) is built
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Reject any value outside the property's grammar.
    ///
    /// This is the default.
    #[default]
    Strict,

    /// Store a fallback instead of rejecting, for compatibility with
    /// consumers that tolerate malformed styles.
    Lenient,
}

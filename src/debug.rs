bitflags::bitflags! {
    /// Severities the logging shim is allowed to emit
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DebugFlags: u8 {
        const ERROR   = 0b0000_0001;
        const WARNING = 0b0000_0010;
        const INFO    = 0b0000_0100;
    }
}

impl Default for DebugFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Console-like output channel the logging shim writes to
///
/// `Message` is whatever the host passes around as a log value; in the browser it is
/// a `JsValue`, so strings, numbers and objects all go through untouched.
pub trait OutputSink {
    type Message: ?Sized;

    fn warn(&self, msg: &Self::Message);

    fn info(&self, msg: &Self::Message);

    fn error(&self, msg: &Self::Message);
}

/// Logging shim: forwards each message to its sink channel when the matching flag is set
#[derive(Debug, Clone)]
pub struct DebugLog<S> {
    flags: DebugFlags,
    sink: S,
}

impl<S: OutputSink> DebugLog<S> {
    #[must_use]
    pub fn new(flags: DebugFlags, sink: S) -> Self {
        Self { flags, sink }
    }

    #[must_use]
    pub fn flags(&self) -> DebugFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut DebugFlags {
        &mut self.flags
    }

    /// Turn a single severity on or off, leaving the others as they are
    pub fn set_flag(&mut self, flag: DebugFlags, enabled: bool) {
        self.flags.set(flag, enabled);
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn warn(&self, msg: &S::Message) {
        if self.flags.contains(DebugFlags::WARNING) {
            self.sink.warn(msg);
        }
    }

    pub fn info(&self, msg: &S::Message) {
        if self.flags.contains(DebugFlags::INFO) {
            self.sink.info(msg);
        }
    }

    pub fn error(&self, msg: &S::Message) {
        if self.flags.contains(DebugFlags::ERROR) {
            self.sink.error(msg);
        }
    }
}

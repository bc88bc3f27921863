/// Parse-time switches threaded through every recursive read.
///
/// Interning only changes how string storage is shared inside one parse call;
/// parsed trees compare equal regardless of these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Share storage between equal compound keys
    pub intern_names: bool,
    /// Share storage between equal string values
    pub intern_values: bool,
}

impl Options {
    pub fn with_intern_names(mut self, intern: bool) -> Self {
        self.intern_names = intern;
        self
    }

    pub fn with_intern_values(mut self, intern: bool) -> Self {
        self.intern_values = intern;
        self
    }
}

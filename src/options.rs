//! Compile configuration.

/// Options accepted by [`compile`](crate::compile) and
/// [`generate`](crate::generate), with chainable setters.
///
/// ```
/// use json2ts_rs::CompileOptions;
///
/// let opts = CompileOptions::new().required(false).semicolon(true);
/// assert!(!opts.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Hoist each nested object type into its own named top-level
    /// declaration instead of inlining it. Default `true`.
    pub spilt_type: bool,
    /// Inspect array contents and emit a union of element types.
    /// When `false`, every array renders as `Array<any>`. Default
    /// `false`.
    pub parse_array: bool,
    /// Render fields without the optional `?` marker. Default `true`.
    pub required: bool,
    /// Terminate each field line with `;`. Default `false`.
    pub semicolon: bool,
    /// Prepended to every generated declaration name. Default empty.
    pub type_prefix: String,
    /// Appended to every generated declaration name. Default
    /// `"Type"`.
    pub type_suffix: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            spilt_type: true,
            parse_array: false,
            required: true,
            semicolon: false,
            type_prefix: String::new(),
            type_suffix: "Type".to_string(),
        }
    }
}

impl CompileOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn spilt_type(mut self, value: bool) -> Self {
        self.spilt_type = value;
        self
    }

    #[must_use]
    pub const fn parse_array(mut self, value: bool) -> Self {
        self.parse_array = value;
        self
    }

    #[must_use]
    pub const fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    #[must_use]
    pub const fn semicolon(mut self, value: bool) -> Self {
        self.semicolon = value;
        self
    }

    #[must_use]
    pub fn type_prefix(mut self, value: impl Into<String>) -> Self {
        self.type_prefix = value.into();
        self
    }

    #[must_use]
    pub fn type_suffix(mut self, value: impl Into<String>) -> Self {
        self.type_suffix = value.into();
        self
    }
}

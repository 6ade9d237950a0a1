use std::borrow::Cow;

/// Market Identifier Code (ISO 10383) - mostly static
pub type Mic = Cow<'static, str>;

/// Currency code (ISO 4217) - mostly static
pub type Currency = Cow<'static, str>;

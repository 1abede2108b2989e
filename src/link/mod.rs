//! Replace live configuration paths with links to theme sources.

mod apply;
mod kind;

pub use apply::{AppliedBinding, ApplyReport, apply_theme};
pub use kind::{LinkKind, LinkOptions, ParseLinkKindError};

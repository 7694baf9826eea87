//! Resource symbol naming.
//!
//! The embedded image resources are produced by an external bundler that turns
//! a filename into an identifier. The rules here have to agree with it by
//! construction; nothing checks that the resulting symbol actually exists.

/// Derive the bundler's symbol suffix for an image filename.
///
/// Steps run in this order: drop `_`, drop `.`, then `png` -> `Png` everywhere.
/// Because the dots go first, `"x.png"` and `"xpng"` both end up as `"xPng"`.
pub fn symbol_name(file: &str) -> String {
    file.replace('_', "").replace('.', "").replace("png", "Png")
}

/// Full reference to the embedded resource, e.g. `resource1006412Png`
pub fn resource_reference(prefix: &str, file: &str) -> String {
    format!("{}{}", prefix, symbol_name(file))
}

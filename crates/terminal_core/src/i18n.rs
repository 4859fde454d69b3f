//! Text lookup seam for localized strings.

/// Resolves dotted message keys such as `cmds.help.description`.
///
/// Returned strings are treated opaquely. Implementations fall back to returning the key itself
/// when no message exists.
pub trait Translator {
    /// Returns the message for `key`.
    fn t(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

/// Looks `key` up in a static `(key, message)` table, falling back to the key.
pub fn lookup(table: &[(&str, &str)], key: &str) -> String {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| key.to_string())
}

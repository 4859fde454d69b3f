//! Converts raw prompt input into structured [`CommandEntry`] values.

use terminal_contract::{CommandEntry, EntryTimestamp};

use crate::{registry::CommandRegistry, time::next_entry_timestamp};

/// Parses `raw` against `registry`, stamping the entry with the session clock.
pub fn parse_entry(registry: &CommandRegistry, raw: &str) -> CommandEntry {
    parse_entry_at(registry, raw, next_entry_timestamp())
}

/// Parses `raw` against `registry` with an explicit timestamp.
///
/// Input never fails to parse. A first token that matches no registered command yields an entry
/// whose `cmd_name` is that token verbatim (possibly empty) and whose view is unset. For a
/// recognized command, a `--name=value` token right after the name becomes the argument pair;
/// anything else up to the next whitespace becomes the option. Because only the first whitespace
/// character separates the name from the rest, `"set-lang  en"` produces an empty option.
pub fn parse_entry_at(
    registry: &CommandRegistry,
    raw: &str,
    timestamp: EntryTimestamp,
) -> CommandEntry {
    let (head, rest) = split_head(raw);
    let Some(spec) = registry.find(head) else {
        return CommandEntry::unrecognized(head, timestamp);
    };

    let token = rest.filter(|rest| !rest.is_empty()).map(first_token);
    let (option, arg_name, arg_value) = match token.and_then(split_argument) {
        Some((name, value)) => (None, Some(name.to_string()), Some(value.to_string())),
        None => (token.map(str::to_string), None, None),
    };

    CommandEntry {
        timestamp,
        cmd_name: spec.name.as_str().to_string(),
        view: spec.view,
        option,
        arg_name,
        arg_value,
    }
}

/// Splits at the first whitespace character. `rest` is `None` when no separator exists.
fn split_head(raw: &str) -> (&str, Option<&str>) {
    match raw.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((idx, ch)) => (&raw[..idx], Some(&raw[idx + ch.len_utf8()..])),
        None => (raw, None),
    }
}

fn first_token(rest: &str) -> &str {
    rest.split(char::is_whitespace).next().unwrap_or_default()
}

fn split_argument(token: &str) -> Option<(&str, &str)> {
    let body = token.strip_prefix("--")?;
    body.split_once('=')
}

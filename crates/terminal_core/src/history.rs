//! Session scrollback of submitted entries.

use terminal_contract::CommandEntry;

/// Insertion-ordered log of submitted entries.
///
/// Entries are never edited, reordered, or deduplicated. The only removal is [`clear`], used by
/// the `clear` command.
///
/// [`clear`]: CommandHistory::clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<CommandEntry>,
}

impl CommandHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` after every existing entry.
    pub fn append(&mut self, entry: CommandEntry) {
        self.entries.push(entry);
    }

    /// Returns every entry, oldest first.
    pub fn all(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    /// Returns the newest entry.
    pub fn last(&self) -> Option<&CommandEntry> {
        self.entries.last()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Rebuilds the input line that produced `entry`, for history recall.
///
/// An empty option is skipped. An argument without a value renders as `--name=`.
pub fn reconstruct_input(entry: &CommandEntry) -> String {
    let mut input = entry.cmd_name.clone();
    match (&entry.option, &entry.arg_name) {
        (Some(option), _) if !option.is_empty() => {
            input.push(' ');
            input.push_str(option);
        }
        (_, Some(arg_name)) => {
            input.push_str(" --");
            input.push_str(arg_name);
            input.push('=');
            input.push_str(entry.arg_value.as_deref().unwrap_or_default());
        }
        _ => {}
    }
    input
}

//! Dump options

/// Options controlling the textual rendering of a statement tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Number of spaces per indentation level (ignored when using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Indentation level of the dumped statement itself
    pub base_indent: usize,
    /// Reorder module-level statements into canonical YANG section order
    pub canonical: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
            base_indent: 0,
            canonical: false,
        }
    }
}

impl DumpOptions {
    /// Canonical ordering with default indentation.
    pub fn canonical() -> Self {
        Self {
            canonical: true,
            ..Self::default()
        }
    }

    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}

// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// Where scripts are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[default]
    Atlas,
    Local,
}

impl Source {
    pub const ALL: [Self; 2] = [Self::Atlas, Self::Local];

    pub fn toggled(self) -> Self {
        match self {
            Self::Atlas => Self::Local,
            Self::Local => Self::Atlas,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Atlas => "Atlas",
            Self::Local => "Local",
        }
    }
}

/// Kind of Atlas identifier typed by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtlasIdType {
    #[default]
    War,
    Quest,
    Script,
}

impl AtlasIdType {
    pub const ALL: [Self; 3] = [Self::War, Self::Quest, Self::Script];

    /// Next type in the list, clamped at the end.
    pub fn next(self) -> Self {
        match self {
            Self::War => Self::Quest,
            Self::Quest | Self::Script => Self::Script,
        }
    }

    /// Previous type in the list, clamped at the start.
    pub fn prev(self) -> Self {
        match self {
            Self::War | Self::Quest => Self::War,
            Self::Script => Self::Quest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::War => "War",
            Self::Quest => "Quest",
            Self::Script => "Script",
        }
    }

    /// Lower-case noun used in messages ("war", "quest", "script").
    pub fn noun(self) -> &'static str {
        match self {
            Self::War => "war",
            Self::Quest => "quest",
            Self::Script => "script",
        }
    }
}

/// Output formatting flags. They never change what is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Options {
    pub skip_file_output: bool,
    pub include_word_count: bool,
    pub unique_output_name: bool,
}

impl Options {
    /// Skipping the file also clears the unique-name flag, which only applies to files.
    pub fn with_skip_file_output(self, skip: bool) -> Self {
        Self {
            skip_file_output: skip,
            unique_output_name: if skip { false } else { self.unique_output_name },
            ..self
        }
    }

    pub fn with_include_word_count(self, include: bool) -> Self {
        Self { include_word_count: include, ..self }
    }

    /// Ignored while file output is skipped.
    pub fn with_unique_output_name(self, unique: bool) -> Self {
        if self.skip_file_output {
            return self;
        }
        Self { unique_output_name: unique, ..self }
    }
}

/// Snapshot of the wizard selections handed to the parse pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub source: Source,
    pub id_type: AtlasIdType,
    pub raw_input: String,
    pub options: Options,
}

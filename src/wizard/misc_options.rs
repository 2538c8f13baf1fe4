// src/wizard/misc_options.rs
use script_lines_domain::Options;

/// Rows of the options step, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MiscOption {
    #[default]
    IncludeWordCount,
    SkipFileOutput,
    UniqueOutputName,
}

impl MiscOption {
    pub const ALL: [Self; 3] = [Self::IncludeWordCount, Self::SkipFileOutput, Self::UniqueOutputName];

    pub fn title(self) -> &'static str {
        match self {
            Self::IncludeWordCount => "Include word count",
            Self::SkipFileOutput => "No output file",
            Self::UniqueOutputName => "Don't overwrite output file",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::IncludeWordCount => {
                "Calculates the approximate English word count per result.\nEnglish word count is conventionally half the character count."
            }
            Self::SkipFileOutput => {
                "Print results only to the terminal.\nIf unchecked, also writes the results to a file in the output directory."
            }
            Self::UniqueOutputName => {
                "Append a random string to the output file name to prevent overwriting previous results."
            }
        }
    }

    pub fn is_checked(self, options: &Options) -> bool {
        match self {
            Self::IncludeWordCount => options.include_word_count,
            Self::SkipFileOutput => options.skip_file_output,
            Self::UniqueOutputName => options.unique_output_name,
        }
    }

    /// Unique file names mean nothing without a file.
    pub fn is_enabled(self, options: &Options) -> bool {
        !(self == Self::UniqueOutputName && options.skip_file_output)
    }

    pub fn toggle(self, options: Options) -> Options {
        match self {
            Self::IncludeWordCount => options.with_include_word_count(!options.include_word_count),
            Self::SkipFileOutput => options.with_skip_file_output(!options.skip_file_output),
            Self::UniqueOutputName => options.with_unique_output_name(!options.unique_output_name),
        }
    }

    /// Next enabled row, or `self` at the end of the list.
    pub fn next(self, options: &Options) -> Self {
        self.step(options, 1)
    }

    /// Previous enabled row, or `self` at the start of the list.
    pub fn prev(self, options: &Options) -> Self {
        self.step(options, -1)
    }

    fn step(self, options: &Options, delta: isize) -> Self {
        let index = Self::ALL.iter().position(|o| *o == self).unwrap_or_default();
        index
            .checked_add_signed(delta)
            .and_then(|i| Self::ALL.get(i).copied())
            .filter(|candidate| candidate.is_enabled(options))
            .unwrap_or(self)
    }
}

// src/wizard/state.rs
use script_lines_domain::Source;

/// Wizard steps. `Parsing` is only reachable by confirming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardState {
    #[default]
    SourceSelect,
    AtlasTypeSelect,
    IdInput,
    MiscOptions,
    Confirm,
    Parsing,
    Results,
}

impl WizardState {
    /// Steps listed in the side pane. `Parsing` shares the "Parse" entry with `Confirm`.
    pub const STEPS: [Self; 6] =
        [Self::SourceSelect, Self::AtlasTypeSelect, Self::IdInput, Self::MiscOptions, Self::Confirm, Self::Results];

    pub fn title(self) -> &'static str {
        match self {
            Self::SourceSelect => "Source",
            Self::AtlasTypeSelect => "Type",
            Self::IdInput => "IDs",
            Self::MiscOptions => "Options",
            Self::Confirm | Self::Parsing => "Parse",
            Self::Results => "Results",
        }
    }

    /// Step reached by moving forward. `Confirm` only advances when results exist.
    pub fn next(self, source: Source, has_results: bool) -> Self {
        match self {
            Self::SourceSelect if source == Source::Local => Self::IdInput,
            Self::SourceSelect => Self::AtlasTypeSelect,
            Self::AtlasTypeSelect => Self::IdInput,
            Self::IdInput => Self::MiscOptions,
            Self::MiscOptions => Self::Confirm,
            Self::Confirm if has_results => Self::Results,
            other => other,
        }
    }

    /// Step reached by moving back.
    pub fn prev(self, source: Source) -> Self {
        match self {
            Self::AtlasTypeSelect => Self::SourceSelect,
            Self::IdInput if source == Source::Local => Self::SourceSelect,
            Self::IdInput => Self::AtlasTypeSelect,
            Self::MiscOptions => Self::IdInput,
            Self::Confirm => Self::MiscOptions,
            Self::Results => Self::Confirm,
            other => other,
        }
    }
}

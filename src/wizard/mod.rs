// src/wizard/mod.rs
//! Wizard controller.
//!
//! [`Wizard::update`] is a pure transition: it consumes the current wizard and one
//! [`WizardEvent`] and returns the next wizard plus the [`Effect`]s the runtime must
//! carry out (start a parse, arm a timer, touch the clipboard, quit). Nothing in
//! this module performs I/O, so every transition is unit-testable.

mod misc_options;
mod state;
mod text_input;

use std::time::Duration;

use script_lines_domain::{AtlasIdType, Options, ParseRequest, ParseResult, ReportTable, Source, input};
use script_lines_ports::ReportDestination;
use script_lines_shared_kernel::DomainError;

pub use misc_options::MiscOption;
pub use state::WizardState;
pub use text_input::{InputEdit, TextInput};

pub const COPIED_MESSAGE: &str = "Row copied to clipboard!";
pub const NO_RESULTS_MESSAGE: &str = "No scripts found";

/// How long transient messages stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub error: Duration,
    pub notification: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { error: Duration::from_secs(5), notification: Duration::from_secs(2) }
    }
}

/// What a finished run reports back to the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSuccess {
    pub results: Vec<ParseResult>,
    pub elapsed: Duration,
    pub destination: Option<ReportDestination>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    NextStep,
    PrevStep,
    NextOption,
    PrevOption,
    Toggle,
    Confirm,
    FocusInput,
    BlurInput,
    ClearInput,
    Edit(InputEdit),
    CopyRow,
    Quit,
    ParseFinished(Result<ParseSuccess, String>),
    ClipboardFinished(Result<(), String>),
    ClearError(u64),
    ClearNotification(u64),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartParse(ParseRequest),
    ClearErrorAfter { generation: u64, after: Duration },
    ClearNotificationAfter { generation: u64, after: Duration },
    CopyToClipboard(String),
    Quit,
}

/// A message that disappears once the clear event with the same generation arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transient {
    pub message: String,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    source: Source,
    id_type: AtlasIdType,
    input: TextInput,
    options: Options,
    option_cursor: MiscOption,
    results: Vec<ParseResult>,
    table: ReportTable,
    selected_row: usize,
    destination: Option<ReportDestination>,
    error: Option<Transient>,
    notification: Option<Transient>,
    generation: u64,
    timeouts: Timeouts,
    quitting: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Timeouts::default())
    }
}

impl Wizard {
    pub fn new(timeouts: Timeouts) -> Self {
        Self {
            state: WizardState::default(),
            source: Source::default(),
            id_type: AtlasIdType::default(),
            input: TextInput::default(),
            options: Options::default(),
            option_cursor: MiscOption::default(),
            results: Vec::new(),
            table: ReportTable::default(),
            selected_row: 0,
            destination: None,
            error: None,
            notification: None,
            generation: 0,
            timeouts,
            quitting: false,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn id_type(&self) -> AtlasIdType {
        self.id_type
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn option_cursor(&self) -> MiscOption {
        self.option_cursor
    }

    pub fn results(&self) -> &[ParseResult] {
        &self.results
    }

    pub fn table(&self) -> &ReportTable {
        &self.table
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn destination(&self) -> Option<&ReportDestination> {
        self.destination.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|t| t.message.as_str())
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_ref().map(|t| t.message.as_str())
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Snapshot of the current selections.
    pub fn request(&self) -> ParseRequest {
        ParseRequest {
            source: self.source,
            id_type: self.id_type,
            raw_input: self.input.value(),
            options: self.options,
        }
    }

    pub fn update(mut self, event: WizardEvent) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        match event {
            WizardEvent::Quit => {
                self.quitting = true;
                effects.push(Effect::Quit);
            }
            WizardEvent::NextStep => {
                let next = self.state.next(self.source, !self.results.is_empty());
                self.enter(next);
            }
            WizardEvent::PrevStep => {
                let prev = self.state.prev(self.source);
                self.enter(prev);
            }
            WizardEvent::NextOption => self.move_option(true),
            WizardEvent::PrevOption => self.move_option(false),
            WizardEvent::Toggle => match self.state {
                WizardState::SourceSelect => self.source = self.source.toggled(),
                WizardState::MiscOptions => self.options = self.option_cursor.toggle(self.options),
                _ => {}
            },
            WizardEvent::Confirm => self.confirm(&mut effects),
            WizardEvent::FocusInput if self.state == WizardState::IdInput => {
                self.input.focus();
                self.input.move_to_end();
            }
            WizardEvent::BlurInput => self.input.blur(),
            WizardEvent::ClearInput if self.state == WizardState::IdInput => {
                self.input.clear();
                self.input.focus();
            }
            WizardEvent::Edit(edit) if self.state == WizardState::IdInput && self.input.is_focused() => {
                self.input.apply(edit);
            }
            WizardEvent::CopyRow if self.state == WizardState::Results => {
                if let Some(row) = self.table.rows.get(self.selected_row) {
                    effects.push(Effect::CopyToClipboard(row.to_clipboard_text()));
                }
            }
            WizardEvent::ParseFinished(outcome) if self.state == WizardState::Parsing => {
                self.finish_parse(outcome, &mut effects);
            }
            WizardEvent::ClipboardFinished(Ok(())) => self.notify(COPIED_MESSAGE.to_string(), &mut effects),
            WizardEvent::ClipboardFinished(Err(reason)) => {
                self.fail(format!("Clipboard unavailable: {reason}"), &mut effects);
            }
            WizardEvent::ClearError(generation) => {
                if self.error.as_ref().is_some_and(|t| t.generation == generation) {
                    self.error = None;
                }
            }
            WizardEvent::ClearNotification(generation) => {
                if self.notification.as_ref().is_some_and(|t| t.generation == generation) {
                    self.notification = None;
                }
            }
            _ => {}
        }

        (self, effects)
    }

    fn enter(&mut self, next: WizardState) {
        if next == self.state {
            return;
        }
        if next == WizardState::IdInput {
            self.input.focus();
            self.input.move_to_end();
        } else {
            self.input.blur();
        }
        self.state = next;
    }

    fn move_option(&mut self, forward: bool) {
        match self.state {
            WizardState::SourceSelect => self.source = self.source.toggled(),
            WizardState::AtlasTypeSelect => {
                self.id_type = if forward { self.id_type.next() } else { self.id_type.prev() };
            }
            WizardState::MiscOptions => {
                self.option_cursor = if forward {
                    self.option_cursor.next(&self.options)
                } else {
                    self.option_cursor.prev(&self.options)
                };
            }
            WizardState::Results => {
                let last = self.table.rows.len().saturating_sub(1);
                self.selected_row =
                    if forward { (self.selected_row + 1).min(last) } else { self.selected_row.saturating_sub(1) };
            }
            _ => {}
        }
    }

    fn confirm(&mut self, effects: &mut Vec<Effect>) {
        if self.state != WizardState::Confirm {
            return;
        }
        if input::parse_entries(&self.input.value()).is_empty() {
            self.fail(DomainError::EmptyInput.to_string(), effects);
            return;
        }
        self.state = WizardState::Parsing;
        self.error = None;
        effects.push(Effect::StartParse(self.request()));
    }

    fn finish_parse(&mut self, outcome: Result<ParseSuccess, String>, effects: &mut Vec<Effect>) {
        match outcome {
            Ok(success) if success.results.is_empty() => {
                self.state = WizardState::Confirm;
                self.notify(NO_RESULTS_MESSAGE.to_string(), effects);
            }
            Ok(success) => {
                self.table = ReportTable::from_results(&success.results, self.options.include_word_count);
                self.results = success.results;
                self.destination = success.destination;
                self.selected_row = 0;
                self.state = WizardState::Results;
                self.notify(format!("Parsing completed in {:.2?}", success.elapsed), effects);
            }
            Err(message) => {
                self.state = WizardState::Confirm;
                self.fail(message, effects);
            }
        }
    }

    fn fail(&mut self, message: String, effects: &mut Vec<Effect>) {
        self.generation += 1;
        self.error = Some(Transient { message, generation: self.generation });
        effects.push(Effect::ClearErrorAfter { generation: self.generation, after: self.timeouts.error });
    }

    fn notify(&mut self, message: String, effects: &mut Vec<Effect>) {
        self.generation += 1;
        self.notification = Some(Transient { message, generation: self.generation });
        effects
            .push(Effect::ClearNotificationAfter { generation: self.generation, after: self.timeouts.notification });
    }
}

#[cfg(test)]
mod tests {
    use script_lines_domain::Count;

    use super::*;

    fn run(wizard: Wizard, events: impl IntoIterator<Item = WizardEvent>) -> (Wizard, Vec<Effect>) {
        events.into_iter().fold((wizard, Vec::new()), |(wizard, mut all), event| {
            let (wizard, effects) = wizard.update(event);
            all.extend(effects);
            (wizard, all)
        })
    }

    fn typed(text: &str) -> Vec<WizardEvent> {
        text.chars()
            .map(|c| WizardEvent::Edit(if c == '\n' { InputEdit::Newline } else { InputEdit::Char(c) }))
            .collect()
    }

    /// Atlas source, war ids typed, standing on Confirm.
    fn at_confirm(ids: &str) -> Wizard {
        let mut events = vec![WizardEvent::NextStep, WizardEvent::NextStep];
        events.extend(typed(ids));
        events.extend([WizardEvent::NextStep, WizardEvent::NextStep]);
        let (wizard, _) = run(Wizard::default(), events);
        assert_eq!(wizard.state(), WizardState::Confirm);
        wizard
    }

    fn success(results: Vec<ParseResult>) -> WizardEvent {
        WizardEvent::ParseFinished(Ok(ParseSuccess {
            results,
            elapsed: Duration::from_millis(1500),
            destination: Some(ReportDestination::Console),
        }))
    }

    #[test]
    fn atlas_walk_visits_every_step() {
        let (wizard, _) = run(Wizard::default(), [WizardEvent::NextStep]);
        assert_eq!(wizard.state(), WizardState::AtlasTypeSelect);

        let (wizard, _) = run(wizard, [WizardEvent::NextStep]);
        assert_eq!(wizard.state(), WizardState::IdInput);
        assert!(wizard.input().is_focused());

        let (wizard, _) = run(wizard, [WizardEvent::NextStep]);
        assert_eq!(wizard.state(), WizardState::MiscOptions);
        assert!(!wizard.input().is_focused());
    }

    #[test]
    fn local_source_skips_type_selection() {
        let (wizard, _) = run(Wizard::default(), [WizardEvent::NextOption, WizardEvent::NextStep]);
        assert_eq!(wizard.source(), Source::Local);
        assert_eq!(wizard.state(), WizardState::IdInput);

        let (wizard, _) = run(wizard, [WizardEvent::PrevStep]);
        assert_eq!(wizard.state(), WizardState::SourceSelect);
    }

    #[test]
    fn id_type_selection_is_clamped() {
        let (wizard, _) = run(
            Wizard::default(),
            [WizardEvent::NextStep, WizardEvent::PrevOption, WizardEvent::NextOption, WizardEvent::NextOption],
        );
        assert_eq!(wizard.id_type(), AtlasIdType::Script);
        let (wizard, _) = run(wizard, [WizardEvent::NextOption]);
        assert_eq!(wizard.id_type(), AtlasIdType::Script);
    }

    #[test]
    fn returning_to_input_puts_cursor_at_end() {
        let mut events = vec![WizardEvent::NextStep, WizardEvent::NextStep];
        events.extend(typed("100\n200"));
        events.extend([
            WizardEvent::Edit(InputEdit::Up),
            WizardEvent::Edit(InputEdit::Home),
            WizardEvent::NextStep,
            WizardEvent::PrevStep,
        ]);
        let (wizard, _) = run(Wizard::default(), events);
        assert_eq!(wizard.state(), WizardState::IdInput);
        assert!(wizard.input().is_focused());
        assert_eq!(wizard.input().cursor(), (1, 3));
    }

    #[test]
    fn edits_are_ignored_when_input_is_blurred() {
        let mut events = vec![WizardEvent::NextStep, WizardEvent::NextStep, WizardEvent::BlurInput];
        events.extend(typed("100"));
        let (wizard, _) = run(Wizard::default(), events);
        assert_eq!(wizard.input().value(), "");

        let mut events = vec![WizardEvent::FocusInput];
        events.extend(typed("7"));
        events.push(WizardEvent::ClearInput);
        let (wizard, _) = run(wizard, events);
        assert_eq!(wizard.input().value(), "");
        assert!(wizard.input().is_focused());
    }

    #[test]
    fn empty_input_at_confirm_reports_error_without_starting() {
        let wizard = at_confirm("  \n");

        let (wizard, effects) = wizard.update(WizardEvent::Confirm);

        assert_eq!(wizard.state(), WizardState::Confirm);
        assert_eq!(wizard.error(), Some("IDs cannot be empty"));
        assert!(!effects.iter().any(|e| matches!(e, Effect::StartParse(_))));
        assert!(
            effects.contains(&Effect::ClearErrorAfter { generation: 1, after: Duration::from_secs(5) }),
            "{effects:?}"
        );
    }

    #[test]
    fn confirm_starts_exactly_one_parse_with_a_snapshot() {
        let wizard = at_confirm("100\n301");

        let (wizard, effects) = wizard.update(WizardEvent::Confirm);
        assert_eq!(wizard.state(), WizardState::Parsing);
        let [Effect::StartParse(request)] = effects.as_slice() else { panic!("unexpected effects {effects:?}") };
        assert_eq!(request.raw_input, "100\n301");
        assert_eq!(request.source, Source::Atlas);
        assert_eq!(request.id_type, AtlasIdType::War);

        let (wizard, effects) = wizard.update(WizardEvent::Confirm);
        assert_eq!(wizard.state(), WizardState::Parsing);
        assert!(effects.is_empty());
    }

    #[test]
    fn confirm_is_ignored_outside_the_confirm_step() {
        let (wizard, effects) = Wizard::default().update(WizardEvent::Confirm);
        assert_eq!(wizard.state(), WizardState::SourceSelect);
        assert!(effects.is_empty());
    }

    #[test]
    fn success_moves_to_results_and_notifies() {
        let (wizard, _) = at_confirm("100").update(WizardEvent::Confirm);
        let results = vec![ParseResult::new("100", "Fuyuki", Count::new(10, 21))];

        let (wizard, effects) = wizard.update(success(results));

        assert_eq!(wizard.state(), WizardState::Results);
        assert_eq!(wizard.results().len(), 1);
        assert_eq!(wizard.notification(), Some("Parsing completed in 1.50s"));
        assert_eq!(wizard.destination(), Some(&ReportDestination::Console));
        assert!(matches!(effects.as_slice(), [Effect::ClearNotificationAfter { .. }]));
    }

    #[test]
    fn success_without_rows_returns_to_confirm() {
        let (wizard, _) = at_confirm("100").update(WizardEvent::Confirm);

        let (wizard, _) = wizard.update(success(Vec::new()));

        assert_eq!(wizard.state(), WizardState::Confirm);
        assert_eq!(wizard.notification(), Some(NO_RESULTS_MESSAGE));
        let (wizard, _) = wizard.update(WizardEvent::NextStep);
        assert_eq!(wizard.state(), WizardState::Confirm);
    }

    #[test]
    fn failure_returns_to_confirm_with_error() {
        let (wizard, _) = at_confirm("99999").update(WizardEvent::Confirm);

        let (wizard, effects) =
            wizard.update(WizardEvent::ParseFinished(Err("Could not find war with ID 99999".to_string())));

        assert_eq!(wizard.state(), WizardState::Confirm);
        assert_eq!(wizard.error(), Some("Could not find war with ID 99999"));
        assert!(wizard.results().is_empty());
        let [Effect::ClearErrorAfter { generation, .. }] = effects.as_slice() else { panic!("{effects:?}") };

        let (wizard, _) = wizard.update(WizardEvent::ClearError(*generation));
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn stale_clear_events_do_not_remove_newer_messages() {
        let wizard = at_confirm("");
        let (wizard, _) = wizard.update(WizardEvent::Confirm);
        let (wizard, _) = wizard.update(WizardEvent::Confirm);
        assert_eq!(wizard.error(), Some("IDs cannot be empty"));

        let (wizard, _) = wizard.update(WizardEvent::ClearError(1));
        assert!(wizard.error().is_some(), "generation 1 is stale");
        let (wizard, _) = wizard.update(WizardEvent::ClearError(2));
        assert!(wizard.error().is_none());
    }

    #[test]
    fn results_rows_can_be_selected_and_copied() {
        let (wizard, _) = at_confirm("100\n101").update(WizardEvent::Confirm);
        let results = vec![
            ParseResult::new("100", "Fuyuki", Count::new(10, 21)),
            ParseResult::new("101", "Orleans", Count::new(3, 9)),
        ];
        let (wizard, _) = wizard.update(success(results));

        let (wizard, _) = run(wizard, [WizardEvent::NextOption, WizardEvent::NextOption]);
        assert_eq!(wizard.selected_row(), 1);

        let (wizard, effects) = wizard.update(WizardEvent::CopyRow);
        assert_eq!(effects, vec![Effect::CopyToClipboard("101, Orleans, 3, 9".to_string())]);

        let (wizard, _) = wizard.update(WizardEvent::ClipboardFinished(Ok(())));
        assert_eq!(wizard.notification(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn copied_row_includes_words_when_enabled() {
        let mut events = vec![WizardEvent::NextStep, WizardEvent::NextStep];
        events.extend(typed("100"));
        events.extend([WizardEvent::NextStep, WizardEvent::Toggle, WizardEvent::NextStep, WizardEvent::Confirm]);
        let (wizard, _) = run(Wizard::default(), events);
        assert!(wizard.options().include_word_count);

        let (wizard, _) = wizard.update(success(vec![ParseResult::new("100", "Fuyuki", Count::new(10, 21))]));
        let (_, effects) = wizard.update(WizardEvent::CopyRow);
        assert_eq!(effects, vec![Effect::CopyToClipboard("100, Fuyuki, 10, 21, 10".to_string())]);
    }

    #[test]
    fn results_step_goes_back_to_confirm_and_forward_again() {
        let (wizard, _) = at_confirm("100").update(WizardEvent::Confirm);
        let (wizard, _) = wizard.update(success(vec![ParseResult::new("100", "Fuyuki", Count::new(1, 1))]));

        let (wizard, _) = wizard.update(WizardEvent::PrevStep);
        assert_eq!(wizard.state(), WizardState::Confirm);
        let (wizard, _) = wizard.update(WizardEvent::NextStep);
        assert_eq!(wizard.state(), WizardState::Results);
    }

    #[test]
    fn quit_is_accepted_in_every_state() {
        let (parsing, _) = at_confirm("100").update(WizardEvent::Confirm);
        for wizard in [Wizard::default(), at_confirm("1"), parsing] {
            let (wizard, effects) = wizard.update(WizardEvent::Quit);
            assert!(wizard.is_quitting());
            assert_eq!(effects, vec![Effect::Quit]);
        }
    }

    #[test]
    fn late_parse_results_are_ignored_outside_parsing() {
        let wizard = at_confirm("100");
        let (wizard, effects) = wizard.update(success(vec![ParseResult::new("1", "x", Count::ZERO)]));
        assert_eq!(wizard.state(), WizardState::Confirm);
        assert!(wizard.results().is_empty());
        assert!(effects.is_empty());
    }
}

// src/tui/keymap.rs
//! Translates terminal input into wizard events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::{InputEdit, Wizard, WizardEvent, WizardState};

/// Help line shown in the footer for the current step.
pub fn help(wizard: &Wizard) -> &'static str {
    match wizard.state() {
        WizardState::IdInput if wizard.input().is_focused() => {
            "enter newline • esc done editing • ctrl+l clear • tab next • shift+tab back • ctrl+c quit"
        }
        WizardState::IdInput => "enter edit • tab next • shift+tab back • ctrl+c quit",
        WizardState::MiscOptions => "↑/↓ move • space toggle • tab next • shift+tab back • ctrl+c quit",
        WizardState::Confirm => "enter parse • tab results • shift+tab back • ctrl+c quit",
        WizardState::Parsing => "ctrl+c quit",
        WizardState::Results => "↑/↓ select • c copy row • shift+tab back • ctrl+c quit",
        WizardState::SourceSelect | WizardState::AtlasTypeSelect => {
            "↑/↓ select • tab next • shift+tab back • ctrl+c quit"
        }
    }
}

pub fn translate(key: KeyEvent, wizard: &Wizard) -> Option<WizardEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => return Some(WizardEvent::Quit),
        KeyCode::Tab => return Some(WizardEvent::NextStep),
        KeyCode::BackTab => return Some(WizardEvent::PrevStep),
        _ => {}
    }

    if wizard.state() == WizardState::IdInput {
        return translate_input(key, wizard, ctrl);
    }

    match key.code {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => Some(WizardEvent::NextOption),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => Some(WizardEvent::PrevOption),
        KeyCode::Char(' ') => Some(WizardEvent::Toggle),
        KeyCode::Enter if wizard.state() == WizardState::Confirm => Some(WizardEvent::Confirm),
        KeyCode::Enter => Some(WizardEvent::NextStep),
        KeyCode::Char('c') if wizard.state() == WizardState::Results => Some(WizardEvent::CopyRow),
        _ => None,
    }
}

/// Bracketed paste goes straight into the focused input.
pub fn paste(text: String, wizard: &Wizard) -> Option<WizardEvent> {
    (wizard.state() == WizardState::IdInput && wizard.input().is_focused())
        .then(|| WizardEvent::Edit(InputEdit::Paste(text)))
}

fn translate_input(key: KeyEvent, wizard: &Wizard, ctrl: bool) -> Option<WizardEvent> {
    if !wizard.input().is_focused() {
        return match key.code {
            KeyCode::Enter => Some(WizardEvent::FocusInput),
            _ => None,
        };
    }

    let edit = match key.code {
        KeyCode::Char('l') if ctrl => return Some(WizardEvent::ClearInput),
        KeyCode::Esc => return Some(WizardEvent::BlurInput),
        KeyCode::Char(c) if !ctrl => InputEdit::Char(c),
        KeyCode::Enter => InputEdit::Newline,
        KeyCode::Backspace => InputEdit::Backspace,
        KeyCode::Delete => InputEdit::Delete,
        KeyCode::Left => InputEdit::Left,
        KeyCode::Right => InputEdit::Right,
        KeyCode::Up => InputEdit::Up,
        KeyCode::Down => InputEdit::Down,
        KeyCode::Home => InputEdit::Home,
        KeyCode::End => InputEdit::End,
        _ => return None,
    };
    Some(WizardEvent::Edit(edit))
}

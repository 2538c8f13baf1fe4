// src/tui/view.rs
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use script_lines_domain::{AtlasIdType, Source};

use super::keymap;
use crate::wizard::{MiscOption, Wizard, WizardState};

pub const TITLE: &str = "FGO Script Parser";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const ACCENT: Color = Color::Magenta;
const MUTED: Color = Color::DarkGray;

pub(crate) fn draw(f: &mut Frame, wizard: &Wizard, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
        .split(f.area());

    render_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[1]);
    render_steps(f, body[0], wizard);
    render_step(f, body[1], wizard, tick);

    render_footer(f, chunks[2], wizard);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED)));
    f.render_widget(header, area);
}

fn render_steps(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let current = wizard.state().title();
    let lines: Vec<Line> = WizardState::STEPS
        .iter()
        .filter(|step| !(wizard.source() == Source::Local && **step == WizardState::AtlasTypeSelect))
        .map(|step| {
            let style = if step.title() == current {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            Line::from(Span::styled(step.title(), style))
        })
        .collect();

    let steps = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::RIGHT).border_style(Style::default().fg(MUTED)));
    f.render_widget(steps, area);
}

fn render_step(f: &mut Frame, area: Rect, wizard: &Wizard, tick: usize) {
    let area = Rect { x: area.x + 2, width: area.width.saturating_sub(2), ..area };
    match wizard.state() {
        WizardState::SourceSelect => {
            let items = Source::ALL.map(|s| (s.label(), source_description(s), s == wizard.source()));
            render_radio(f, area, &items);
        }
        WizardState::AtlasTypeSelect => {
            let items =
                AtlasIdType::ALL.map(|t| (t.label(), id_type_description(t), t == wizard.id_type()));
            render_radio(f, area, &items);
        }
        WizardState::IdInput => render_input(f, area, wizard),
        WizardState::MiscOptions => render_options(f, area, wizard),
        WizardState::Confirm => render_confirm(f, area, wizard),
        WizardState::Parsing => {
            let spinner = SPINNER[tick % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(ACCENT)),
                Span::raw(" Parsing..."),
            ]);
            f.render_widget(Paragraph::new(line), area);
        }
        WizardState::Results => render_results(f, area, wizard),
    }
}

pub fn source_description(source: Source) -> &'static str {
    match source {
        Source::Atlas => "Parse from scripts fetched from Atlas DB",
        Source::Local => "Parse from local files on your computer",
    }
}

pub fn id_type_description(id_type: AtlasIdType) -> &'static str {
    match id_type {
        AtlasIdType::War => "Parse every script in a war (story chapter or event).\nEx: 100 for Fuyuki",
        AtlasIdType::Quest => {
            "Parse every script in a quest (war section or interlude etc).\nEx: 1000001 for Fuyuki Chapter 1"
        }
        AtlasIdType::Script => "Parse a list of specific scripts.\nEx: 0100000111 for the first Fuyuki script",
    }
}

pub fn input_description(wizard: &Wizard) -> String {
    match wizard.source() {
        Source::Local => "Enter the paths of files or folders to parse.\nOnly one path per line.".to_string(),
        Source::Atlas => format!("Enter the {} IDs to parse from.\nOnly one ID per line.", wizard.id_type().noun()),
    }
}

fn render_radio(f: &mut Frame, area: Rect, items: &[(&str, &str, bool)]) {
    let mut lines = Vec::new();
    for (label, description, selected) in items {
        let (prefix, style) = if *selected {
            ("◉ ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            ("◌ ", Style::default())
        };
        lines.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
        lines.extend(description.lines().map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(MUTED)))));
        lines.push(Line::default());
    }
    f.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), area);
}

fn render_input(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let description = input_description(wizard);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    f.render_widget(Paragraph::new(description).style(Style::default().fg(MUTED)), chunks[0]);

    let input = wizard.input();
    let border = if input.is_focused() { ACCENT } else { MUTED };
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(border));
    let inner = block.inner(chunks[1]);
    let (row, col) = input.cursor();
    let scroll = (row as u16).saturating_sub(inner.height.saturating_sub(1));

    let lines: Vec<Line> = input.lines().iter().map(|l| Line::from(l.as_str())).collect();
    f.render_widget(Paragraph::new(Text::from(lines)).block(block).scroll((scroll, 0)), chunks[1]);

    if input.is_focused() {
        f.set_cursor_position((inner.x + col as u16, inner.y + row as u16 - scroll));
    }
}

fn render_options(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let options = wizard.options();
    let cursor = wizard.option_cursor();
    let mut lines = Vec::new();

    for option in MiscOption::ALL {
        let mark = if option.is_checked(options) { "☑ " } else { "☐ " };
        let style = if !option.is_enabled(options) {
            Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT)
        } else if option == cursor {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{mark}{}", option.title()), style)));
    }

    lines.push(Line::default());
    lines.extend(
        cursor.description().lines().map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(MUTED)))),
    );
    f.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), area);
}

fn render_confirm(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let request = wizard.request();
    let ids = script_lines_domain::input::parse_entries(&request.raw_input);
    let target = match request.source {
        Source::Atlas => format!("{} {} ID(s)", ids.len(), request.id_type.noun()),
        Source::Local => format!("{} path(s)", ids.len()),
    };

    let mut lines = vec![
        Line::from(format!("Source: {}", request.source.label())),
        Line::from(format!("Parsing: {target}")),
        Line::from(format!("Word count: {}", yes_no(request.options.include_word_count))),
        Line::from(format!("Write file: {}", yes_no(!request.options.skip_file_output))),
        Line::default(),
        Line::from(Span::styled("Press enter to start parsing.", Style::default().fg(ACCENT))),
    ];
    if let Some(destination) = wizard.destination() {
        lines.push(Line::from(Span::styled(format!("Last output: {destination}"), Style::default().fg(MUTED))));
    }
    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn render_results(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let table = wizard.table();
    let header = Row::new(table.header().into_iter().map(Cell::from))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let rows = table.rows.iter().map(|row| Row::new(row.cells().into_iter().map(Cell::from)));

    let mut widths = vec![Constraint::Length(12), Constraint::Min(16), Constraint::Length(8), Constraint::Length(12)];
    if table.include_word_count {
        widths.push(Constraint::Length(8));
    }

    let title = wizard.destination().map(|d| format!(" Output: {d} ")).unwrap_or_default();
    let widget = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(wizard.selected_row()));
    f.render_stateful_widget(widget, area, &mut state);
}

fn render_footer(f: &mut Frame, area: Rect, wizard: &Wizard) {
    let mut lines = vec![Line::from(Span::styled(keymap::help(wizard), Style::default().fg(MUTED)))];
    if let Some(error) = wizard.error() {
        lines.push(Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))));
    }
    if let Some(notification) = wizard.notification() {
        lines.push(Line::from(Span::styled(notification.to_string(), Style::default().fg(Color::Green))));
    }

    let footer = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)));
    f.render_widget(footer, area);
}

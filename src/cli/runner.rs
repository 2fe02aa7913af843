//! Terminal runner for the wizard
//!
//! Owns raw mode and the alternate screen, draws the wizard with ratatui and
//! feeds crossterm events into `Wizard::handle_input` until it finishes.

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use super::events::WizardEvent;
use super::screen::{ListScreen, Screen, TextInput};
use super::theme::Theme;
use super::wizard::{help_text, Step, Wizard, WizardOutcome};
use crate::cluster::ResourceLister;

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard in the terminal until it completes or is cancelled
pub fn run_wizard(lister: Box<dyn ResourceLister>, theme: &Theme) -> Result<WizardOutcome> {
    let mut wizard = Wizard::start(lister);

    let mut terminal = setup_terminal()?;
    if let Ok(size) = terminal.size() {
        wizard.handle_input(WizardEvent::Resize { width: size.width });
    }

    let result = run_wizard_loop(&mut terminal, &mut wizard, theme);

    teardown_terminal();

    result
}

fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    wizard: &mut Wizard,
    theme: &Theme,
) -> Result<WizardOutcome> {
    loop {
        terminal.draw(|f| render_wizard(f, wizard, theme))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Some(input) = WizardEvent::from_crossterm(event::read()?) else {
            continue;
        };

        if let Some(outcome) = wizard.handle_input(input) {
            return Ok(outcome);
        }
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Semantic border color for a step
fn step_color(step: Step, theme: &Theme) -> Color {
    match step {
        Step::PickingMode => theme.accent,
        Step::PickingNamespaceFrom | Step::PickingPodFrom | Step::TypingRemoteUri => {
            Color::Magenta
        }
        Step::PickingNamespaceTo | Step::PickingPodTo => Color::Green,
        Step::TypingPort => Color::Yellow,
        Step::Done => Color::Cyan,
    }
}

// ============================================================================
// Main Rendering Functions
// ============================================================================

/// Render the wizard shell: titled box, step content, count and help bar
fn render_wizard(f: &mut Frame, wizard: &Wizard, theme: &Theme) {
    let area = f.area();

    let box_width = 66u16.min(area.width);
    let list_rows = theme.list_height as u16;
    let ideal_box_height = list_rows + 8;
    let box_height = ideal_box_height.min(area.height.saturating_sub(2)).max(6);

    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(box_height + 1) / 2;
    let box_area = Rect::new(x, y, box_width, box_height.min(area.height));
    f.render_widget(Clear, box_area);

    let step = wizard.state().current_step;
    let color = step_color(step, theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", wizard.step_heading()))
        .title_style(theme.title.fg(color))
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    match wizard.screen() {
        Screen::List(list) => render_list(f, chunks[0], list, theme, color),
        Screen::Text(input) => render_text_input(f, chunks[0], wizard, input, theme, color),
    }

    if let Some(notice) = wizard.notice() {
        let notice_line = Paragraph::new(Line::from(Span::styled(
            format!("  {}", notice),
            theme.notice,
        )));
        f.render_widget(notice_line, chunks[1]);
    }

    if let Screen::List(list) = wizard.screen() {
        if list.visible_len() > 0 {
            let ct = format!(" {}/{} ", list.selected() + 1, list.visible_len());
            let ct_len = ct.chars().count() as u16;
            if box_area.width > ct_len + 1 && box_area.height > 0 {
                let ct_area = Rect::new(
                    box_area.x + box_area.width - ct_len - 1,
                    box_area.y + box_area.height - 1,
                    ct_len,
                    1,
                );
                f.render_widget(Paragraph::new(Span::styled(ct, theme.muted)), ct_area);
            }
        }
    }

    let hint_y = box_area.y + box_area.height;
    if hint_y < area.height {
        let hint_area = Rect::new(x, hint_y, box_width, 1);
        let help = Paragraph::new(Line::from(Span::styled(
            help_text(wizard.screen()),
            theme.muted,
        )))
        .alignment(Alignment::Center);
        f.render_widget(help, hint_area);
    }
}

// ============================================================================
// Screen Renderers
// ============================================================================

fn render_list(f: &mut Frame, area: Rect, list: &ListScreen, theme: &Theme, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted)
        .title(" Filter ")
        .title_style(theme.muted);
    let search_para = Paragraph::new(Line::from(vec![
        Span::styled(list.filter().to_string(), theme.item),
        Span::styled(theme.cursor, Style::default().fg(color)),
    ]))
    .block(search_block);
    f.render_widget(search_para, chunks[0]);

    let visible = list.visible_items();
    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("{}No matches", " ".repeat(theme.item_indent)),
            theme.muted,
        )));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let max_visible = (chunks[1].height as usize).min(theme.list_height);
    let window = list.window(max_visible);
    let start_idx = window.start;

    let marker_pad = " ".repeat(theme.item_indent.saturating_sub(2));
    let item_pad = " ".repeat(theme.item_indent);
    let items: Vec<ListItem> = window
        .map(|i| {
            let text = format!("{}. {}", i + 1, visible[i].label());
            if i == list.selected() {
                ListItem::new(format!("{}{}{}", marker_pad, theme.marker, text))
                    .style(theme.highlight)
            } else {
                ListItem::new(format!("{} {}", item_pad, text)).style(theme.item)
            }
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(list.selected().saturating_sub(start_idx)));
    f.render_stateful_widget(List::new(items), chunks[1], &mut list_state);
}

fn render_text_input(
    f: &mut Frame,
    area: Rect,
    wizard: &Wizard,
    input: &TextInput,
    theme: &Theme,
    color: Color,
) {
    let prompt = wizard.state().current_step.text_prompt();

    let (before, after) = input.split_at_cursor();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", prompt), theme.muted.bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Value: ", theme.muted),
            Span::styled(before.to_string(), theme.item.bold()),
            Span::styled(theme.cursor, Style::default().fg(color)),
            Span::styled(after.to_string(), theme.item.bold()),
        ]),
    ];

    f.render_widget(Paragraph::new(content), area);
}

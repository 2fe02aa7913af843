//! Transfer configuration wizard
//!
//! Walks the user through choosing a transfer mode and then the source and
//! destination endpoints, one screen per step. The flow is forward-only: the
//! mode picked on the first screen selects a fixed schedule of steps, and
//! each confirmed answer moves the wizard exactly one entry along it.
//!
//! # Architecture
//!
//! - `Step`: typed identifier of each screen, ordered by a per-mode schedule
//! - `WizardState`: the single source of truth for mode, step and answers
//! - `Wizard`: controller that feeds events to the active `Screen` and
//!   advances `WizardState`
//! - `WizardOutcome`: terminal signal, either a completed `TransferConfig`
//!   or a cancellation
//!
//! Quit is checked before anything else on every key, so cancellation works
//! from any screen regardless of local state.

use std::fmt::Write as _;

use super::events::{Key, WizardEvent};
use super::screen::{ListScreen, Screen, TextInput};
use super::theme::Theme;
use crate::cluster::ResourceLister;
use crate::transfer::{PodTarget, TransferConfig, TransferMode, TransferSource};

/// Narrowest layout width accepted from resize events
pub const MIN_WIDTH: u16 = 20;

// ============================================================================
// Step Definitions
// ============================================================================

/// One screen in the wizard's linear flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    PickingMode,
    PickingNamespaceFrom,
    PickingPodFrom,
    TypingRemoteUri,
    PickingNamespaceTo,
    PickingPodTo,
    TypingPort,
    Done,
}

const MODE_ONLY: &[Step] = &[Step::PickingMode];

const POD_TO_POD: &[Step] = &[
    Step::PickingMode,
    Step::PickingNamespaceFrom,
    Step::PickingPodFrom,
    Step::PickingNamespaceTo,
    Step::PickingPodTo,
    Step::TypingPort,
    Step::Done,
];

const POD_TO_REMOTE: &[Step] = &[
    Step::PickingMode,
    Step::TypingRemoteUri,
    Step::PickingNamespaceTo,
    Step::PickingPodTo,
    Step::TypingPort,
    Step::Done,
];

/// Ordered steps for `mode`; only `PickingMode` until a mode is chosen
pub fn schedule(mode: Option<TransferMode>) -> &'static [Step] {
    match mode {
        None => MODE_ONLY,
        Some(TransferMode::PodToPod) => POD_TO_POD,
        Some(TransferMode::PodToRemote) => POD_TO_REMOTE,
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::PickingMode => "Pick a mode",
            Step::PickingNamespaceFrom => "Source namespace",
            Step::PickingPodFrom => "Source pod",
            Step::TypingRemoteUri => "Remote URI",
            Step::PickingNamespaceTo => "Destination namespace",
            Step::PickingPodTo => "Destination pod",
            Step::TypingPort => "Destination port",
            Step::Done => "Done",
        }
    }

    /// Answer field written when this step is confirmed
    pub fn field(&self) -> Option<Field> {
        match self {
            Step::PickingNamespaceFrom => Some(Field::NamespaceFrom),
            Step::PickingPodFrom => Some(Field::PodFrom),
            Step::TypingRemoteUri => Some(Field::RemoteUri),
            Step::PickingNamespaceTo => Some(Field::NamespaceTo),
            Step::PickingPodTo => Some(Field::PodTo),
            Step::TypingPort => Some(Field::PortTo),
            Step::PickingMode | Step::Done => None,
        }
    }

    /// Whether the step normally shows a selectable list
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Step::PickingMode
                | Step::PickingNamespaceFrom
                | Step::PickingPodFrom
                | Step::PickingNamespaceTo
                | Step::PickingPodTo
        )
    }

    /// Prompt shown above a text buffer for this step
    pub fn text_prompt(&self) -> &'static str {
        match self {
            Step::TypingRemoteUri => "Remote URI to transfer from (e.g. s3://bucket/path)",
            Step::TypingPort => "Port on the destination pod",
            Step::PickingNamespaceFrom | Step::PickingNamespaceTo => "Namespace name",
            Step::PickingPodFrom | Step::PickingPodTo => "Pod name",
            Step::PickingMode | Step::Done => "",
        }
    }
}

// ============================================================================
// Answers
// ============================================================================

/// Answer slot in `WizardState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NamespaceFrom,
    PodFrom,
    RemoteUri,
    NamespaceTo,
    PodTo,
    PortTo,
}

/// Typed value produced by confirming a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Mode(TransferMode),
    Field(Field, String),
}

// ============================================================================
// Wizard State
// ============================================================================

/// Everything the wizard has learned so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub mode: Option<TransferMode>,
    pub current_step: Step,
    pub cancelled: bool,
    pub namespace_from: Option<String>,
    pub pod_from: Option<String>,
    pub remote_uri: Option<String>,
    pub namespace_to: Option<String>,
    pub pod_to: Option<String>,
    pub port_to: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            mode: None,
            current_step: Step::PickingMode,
            cancelled: false,
            namespace_from: None,
            pod_from: None,
            remote_uri: None,
            namespace_to: None,
            pod_to: None,
            port_to: None,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::NamespaceFrom => self.namespace_from.as_deref(),
            Field::PodFrom => self.pod_from.as_deref(),
            Field::RemoteUri => self.remote_uri.as_deref(),
            Field::NamespaceTo => self.namespace_to.as_deref(),
            Field::PodTo => self.pod_to.as_deref(),
            Field::PortTo => self.port_to.as_deref(),
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::NamespaceFrom => &mut self.namespace_from,
            Field::PodFrom => &mut self.pod_from,
            Field::RemoteUri => &mut self.remote_uri,
            Field::NamespaceTo => &mut self.namespace_to,
            Field::PodTo => &mut self.pod_to,
            Field::PortTo => &mut self.port_to,
        };
        *slot = Some(value);
    }

    /// Step after the current one in the active schedule
    pub fn next_step(&self) -> Step {
        let steps = schedule(self.mode);
        steps
            .iter()
            .position(|s| *s == self.current_step)
            .and_then(|i| steps.get(i + 1))
            .copied()
            .unwrap_or(Step::Done)
    }

    /// 1-based position of the current step and the number of input steps,
    /// which is unknown until a mode is chosen
    pub fn position(&self) -> (usize, Option<usize>) {
        let steps = schedule(self.mode);
        let index = steps
            .iter()
            .position(|s| *s == self.current_step)
            .unwrap_or(0);
        let total = self.mode.map(|_| steps.len() - 1);
        (index + 1, total)
    }

    /// Assemble the final configuration; `None` until every field the mode
    /// needs has been written
    pub fn to_config(&self) -> Option<TransferConfig> {
        let mode = self.mode?;
        let source = match mode {
            TransferMode::PodToPod => TransferSource::Pod {
                namespace: self.namespace_from.clone()?,
                pod: self.pod_from.clone()?,
            },
            TransferMode::PodToRemote => TransferSource::Remote {
                uri: self.remote_uri.clone()?,
            },
        };
        Some(TransferConfig {
            mode,
            source,
            destination: PodTarget {
                namespace: self.namespace_to.clone()?,
                pod: self.pod_to.clone()?,
                port: self.port_to.clone()?,
            },
        })
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Terminal signal emitted by `Wizard::handle_input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(TransferConfig),
    Cancelled,
}

/// Drives the step sequence over a resource lister
pub struct Wizard {
    state: WizardState,
    screen: Screen,
    notice: Option<String>,
    width: u16,
    finished: bool,
    lister: Box<dyn ResourceLister>,
}

impl Wizard {
    /// Fresh wizard on the mode picker. Does not touch the lister.
    pub fn start(lister: Box<dyn ResourceLister>) -> Self {
        Self {
            state: WizardState::new(),
            screen: mode_screen(),
            notice: None,
            width: 80,
            finished: false,
            lister,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Message about the current step, e.g. why a list fell back to typing
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// True once the wizard reached `Done` or was cancelled
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume one event. Returns the outcome when this event ends the wizard.
    pub fn handle_input(&mut self, event: WizardEvent) -> Option<WizardOutcome> {
        if self.finished {
            return None;
        }

        match event {
            WizardEvent::Resize { width } => {
                self.width = width.max(MIN_WIDTH);
                None
            }
            WizardEvent::Key(Key::Quit) => {
                self.state.cancelled = true;
                self.finished = true;
                self.notice = None;
                Some(WizardOutcome::Cancelled)
            }
            WizardEvent::Key(Key::Enter) => self.confirm(),
            WizardEvent::Key(key) => {
                self.screen.handle_key(key);
                None
            }
        }
    }

    /// Typed answer the active screen would commit on Enter
    pub fn pending_answer(&self) -> Option<Answer> {
        let value = self.screen.confirmed_value()?;
        match self.state.current_step.field() {
            Some(field) => Some(Answer::Field(field, value)),
            None => TransferMode::from_label(&value).map(Answer::Mode),
        }
    }

    fn confirm(&mut self) -> Option<WizardOutcome> {
        let answer = self.pending_answer()?;
        match answer {
            Answer::Mode(mode) => self.state.mode = Some(mode),
            Answer::Field(field, value) => self.state.set(field, value),
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<WizardOutcome> {
        let next = self.state.next_step();
        self.state.current_step = next;
        self.notice = None;

        if next == Step::Done {
            self.finished = true;
            // Every field on the schedule was written on the way here
            return self.state.to_config().map(WizardOutcome::Completed);
        }

        self.screen = self.build_screen(next);
        None
    }

    fn build_screen(&mut self, step: Step) -> Screen {
        if !step.is_list() {
            return Screen::Text(TextInput::new());
        }

        let listing = match step {
            Step::PickingNamespaceFrom | Step::PickingNamespaceTo => {
                self.lister.list_namespaces()
            }
            Step::PickingPodFrom => self
                .lister
                .list_pods(self.state.namespace_from.as_deref().unwrap_or_default()),
            Step::PickingPodTo => self
                .lister
                .list_pods(self.state.namespace_to.as_deref().unwrap_or_default()),
            _ => return mode_screen(),
        };

        match listing {
            Ok(names) if !names.is_empty() => Screen::List(ListScreen::new(names)),
            Ok(_) => {
                self.notice = Some(format!(
                    "Nothing to choose for {}; type a name instead",
                    step.title().to_lowercase()
                ));
                Screen::Text(TextInput::new())
            }
            Err(e) => {
                self.notice = Some(format!("{}; type a name instead", e));
                Screen::Text(TextInput::new())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Text View
    // ------------------------------------------------------------------------

    /// Render the current state as a plain text frame
    pub fn view(&self, theme: &Theme) -> String {
        let mut out = String::new();

        if self.state.cancelled {
            out.push_str("\n  Transfer cancelled. Nothing was configured.\n");
            return out;
        }
        if self.state.current_step == Step::Done {
            let mode = self.state.mode.map(|m| m.label()).unwrap_or_default();
            let _ = writeln!(out, "\n  {}? Sounds good to me.", mode);
            return out;
        }

        let _ = writeln!(out, "\n  {}", self.step_heading());
        let rule_width = usize::from(self.width).saturating_sub(4).max(1);
        let _ = writeln!(out, "  {}", "─".repeat(rule_width));

        match &self.screen {
            Screen::List(list) => write_list(&mut out, list, theme),
            Screen::Text(input) => {
                let (before, after) = input.split_at_cursor();
                let _ = writeln!(out, "  {}", self.state.current_step.text_prompt());
                let _ = writeln!(out, "  > {}{}{}", before, theme.cursor, after);
            }
        }

        if let Some(notice) = &self.notice {
            let _ = writeln!(out, "\n  ! {}", notice);
        }

        let _ = writeln!(out, "\n  {}", help_text(&self.screen));
        out
    }

    /// `Step n/m · Title`, or `Step 1 · Title` before the mode is known
    pub fn step_heading(&self) -> String {
        let (current, total) = self.state.position();
        match total {
            Some(total) => format!(
                "Step {}/{} \u{00b7} {}",
                current, total, self.state.current_step
            ),
            None => format!("Step {} \u{00b7} {}", current, self.state.current_step),
        }
    }
}

fn mode_screen() -> Screen {
    Screen::List(ListScreen::new(TransferMode::ALL.iter().map(|m| m.label())))
}

fn write_list(out: &mut String, list: &ListScreen, theme: &Theme) {
    if list.is_filtering() && !list.filter().is_empty() {
        let _ = writeln!(out, "  Filter: {}{}", list.filter(), theme.cursor);
    }

    let visible = list.visible_items();
    if visible.is_empty() {
        let _ = writeln!(out, "{}No matches", " ".repeat(theme.item_indent));
        return;
    }

    let window = list.window(theme.list_height);
    let marker_pad = theme.item_indent.saturating_sub(2);
    for index in window {
        let line = format!("{}. {}", index + 1, visible[index].label());
        if index == list.selected() {
            let _ = writeln!(out, "{}{}{}", " ".repeat(marker_pad), theme.marker, line);
        } else {
            let _ = writeln!(out, "{} {}", " ".repeat(theme.item_indent), line);
        }
    }

    if visible.len() > theme.list_height {
        let _ = writeln!(out, "  {}/{}", list.selected() + 1, visible.len());
    }
}

/// Key hints for the active screen
pub fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::List(_) => "↑/↓ move · type to filter · enter select · esc quit",
        Screen::Text(_) => "type to edit · ←/→ move · enter confirm · esc quit",
    }
}

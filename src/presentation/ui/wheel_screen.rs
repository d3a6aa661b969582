use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, ListState, Paragraph, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::services::WheelService;
use crate::domain::SpinTick;
use crate::domain::keybinding::{Action, Keybind, default_keybindings, resolve};
use crate::domain::ports::ClockPort;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FocusContext, FooterBar, FooterBarStyle, OptionList, OptionListStyle, ResultPanel,
    ResultPanelStyle, StatusBar, StatusBarStyle, TextInput, Wheel, WheelStyle,
};

const TITLE: &str = "Spinning Wheel of Options";
const SPIN_LABEL: &str = "Spin the Wheel";
const SPINNING_LABEL: &str = "Spinning...";
const OPTIONS_WIDTH_PERCENT: u16 = 35;
const OPTIONS_MIN_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKeyResult {
    /// Key changed screen state.
    Consumed,
    /// Key had no meaning here.
    Ignored,
    Quit,
    /// A spin began; the caller should start driving frames.
    SpinStarted,
}

pub struct WheelScreenState {
    wheel: WheelService,
    input: TextInput,
    list_state: ListState,
    focus: FocusContext,
    keybindings: Vec<Keybind>,
    theme: Theme,
    show_key_hints: bool,
}

impl WheelScreenState {
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>, theme: Theme, show_key_hints: bool) -> Self {
        let mut input = TextInput::new(" Add Option ")
            .placeholder("Enter an option")
            .accent(theme.accent);
        input.set_focused(true);

        Self {
            wheel: WheelService::new(clock),
            input,
            list_state: ListState::default(),
            focus: FocusContext::Input,
            keybindings: default_keybindings(),
            theme,
            show_key_hints,
        }
    }

    #[must_use]
    pub const fn wheel(&self) -> &WheelService {
        &self.wheel
    }

    #[must_use]
    pub const fn focus(&self) -> FocusContext {
        self.focus
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn set_focus(&mut self, focus: FocusContext) {
        self.focus = focus;
        self.input.set_focused(focus == FocusContext::Input);
    }

    /// Advances a running spin by one frame.
    pub fn tick(&mut self) -> SpinTick {
        self.wheel.tick()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WheelKeyResult {
        if key.kind != KeyEventKind::Press {
            return WheelKeyResult::Ignored;
        }

        match resolve(&self.keybindings, self.focus.key_scope(), &key) {
            Some(action) => self.apply(action),
            None if self.focus == FocusContext::Input => self.handle_input_key(key),
            None => WheelKeyResult::Ignored,
        }
    }

    fn apply(&mut self, action: Action) -> WheelKeyResult {
        match action {
            Action::Quit => return WheelKeyResult::Quit,
            Action::ToggleFocus => self.set_focus(self.focus.toggled()),
            Action::Spin => {
                return if self.wheel.spin() {
                    WheelKeyResult::SpinStarted
                } else {
                    WheelKeyResult::Ignored
                };
            }
            Action::NavigateUp => self.select_previous(),
            Action::NavigateDown => self.select_next(),
            Action::RemoveOption => self.remove_selected(),
            Action::AddOption => self.submit_input(),
        }
        WheelKeyResult::Consumed
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> WheelKeyResult {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.input.input_char(c),
            (KeyCode::Backspace, _) => self.input.backspace(),
            (KeyCode::Delete, _) => self.input.delete(),
            (KeyCode::Left, _) => self.input.move_left(),
            (KeyCode::Right, _) => self.input.move_right(),
            (KeyCode::Home, _) => self.input.move_start(),
            (KeyCode::End, _) => self.input.move_end(),
            _ => return WheelKeyResult::Ignored,
        }
        WheelKeyResult::Consumed
    }

    fn submit_input(&mut self) {
        if self.wheel.add_option(self.input.value()) {
            self.input.clear();
            self.sync_selection();
        }
    }

    fn remove_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        if let Some(removed) = self.wheel.remove_option(index) {
            debug!(index, label = %removed, "Removed selected option");
            self.sync_selection();
        }
    }

    fn select_next(&mut self) {
        let len = self.wheel.options().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let len = self.wheel.options().len();
        if len == 0 {
            return;
        }
        let previous = self
            .list_state
            .selected()
            .map_or(len - 1, |i| (i + len - 1) % len);
        self.list_state.select(Some(previous));
    }

    fn sync_selection(&mut self) {
        let len = self.wheel.options().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    fn spin_status(&self) -> StatusBar {
        if self.wheel.is_spinning() {
            StatusBar::disabled(SPINNING_LABEL)
        } else if self.wheel.can_spin() {
            StatusBar::info(SPIN_LABEL)
        } else {
            StatusBar::disabled(SPIN_LABEL)
        }
    }
}

pub struct WheelScreen;

impl WheelScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WheelScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for WheelScreen {
    type State = WheelScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let footer_height = u16::from(state.show_key_hints);
        let [title_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        render_title(state, title_area, buf);

        let [options_area, wheel_area] = content_columns(content_area);

        render_options_column(state, options_area, buf);
        render_wheel_column(state, wheel_area, buf);

        if state.show_key_hints {
            render_footer(state, footer_area, buf);
        }
    }
}

/// Splits the content row into the options column and the wheel column.
fn content_columns(area: Rect) -> [Rect; 2] {
    Layout::horizontal([
        Constraint::Min(OPTIONS_MIN_WIDTH),
        Constraint::Percentage(100 - OPTIONS_WIDTH_PERCENT),
    ])
    .areas(area)
}

fn render_title(state: &WheelScreenState, area: Rect, buf: &mut Buffer) {
    let style = state.theme.accent_style().add_modifier(Modifier::BOLD);
    Paragraph::new(Line::styled(TITLE, style).centered()).render(area, buf);
}

fn render_options_column(state: &mut WheelScreenState, area: Rect, buf: &mut Buffer) {
    let [input_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    state.input.render(input_area, buf);

    let list = OptionList::new(state.wheel.options().as_slice())
        .focused(state.focus == FocusContext::Options)
        .style(OptionListStyle::from_theme(&state.theme));
    StatefulWidget::render(list, list_area, buf, &mut state.list_state);
}

fn render_wheel_column(state: &WheelScreenState, area: Rect, buf: &mut Buffer) {
    let [wheel_area, spin_area, result_area] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(" Wheel ");
    let inner = block.inner(wheel_area);
    block.render(wheel_area, buf);

    let wheel_state = state.wheel.wheel();
    Wheel::new(state.wheel.options().as_slice(), wheel_state.angle())
        .style(WheelStyle::from_theme(&state.theme))
        .render(inner, buf);

    state
        .spin_status()
        .style(StatusBarStyle::from_theme(&state.theme))
        .render(spin_area, buf);

    let result_style = ResultPanelStyle {
        result: state.theme.result_style,
        ..ResultPanelStyle::default()
    };
    ResultPanel::new(wheel_state.result())
        .style(result_style)
        .render(result_area, buf);
}

fn render_footer(state: &WheelScreenState, area: Rect, buf: &mut Buffer) {
    FooterBar::new(&state.keybindings, state.focus)
        .style(FooterBarStyle::from_theme(&state.theme))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::ManualClock;
    use crate::domain::wheel::SPIN_DURATION;
    use std::f64::consts::PI;
    use std::time::Duration;
    use test_case::test_case;

    fn screen() -> (Arc<ManualClock>, WheelScreenState) {
        let clock = Arc::new(ManualClock::new());
        let state = WheelScreenState::new(clock.clone(), Theme::default(), true);
        (clock, state)
    }

    fn press(state: &mut WheelScreenState, code: KeyCode) -> WheelKeyResult {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut WheelScreenState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn add(state: &mut WheelScreenState, label: &str) {
        type_text(state, label);
        press(state, KeyCode::Enter);
    }

    fn labels(state: &WheelScreenState) -> Vec<&str> {
        state.wheel().options().iter().collect()
    }

    fn render_text(state: &mut WheelScreenState) -> String {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        WheelScreen::new().render(area, &mut buf, state);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_enter_adds_and_clears_input() {
        let (_, mut state) = screen();
        add(&mut state, "  Pizza ");

        assert_eq!(labels(&state), vec!["Pizza"]);
        assert!(state.input_value().is_empty());
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_blank_input_is_kept_and_not_added() {
        let (_, mut state) = screen();
        add(&mut state, "   ");

        assert!(state.wheel().options().is_empty());
        assert_eq!(state.input_value(), "   ");
    }

    #[test_case(KeyCode::Char('q') ; "q")]
    #[test_case(KeyCode::Char('s') ; "s")]
    #[test_case(KeyCode::Char(' ') ; "space")]
    fn test_letters_are_text_while_typing(code: KeyCode) {
        let (_, mut state) = screen();
        assert_eq!(press(&mut state, code), WheelKeyResult::Consumed);
        assert_eq!(state.input_value().chars().count(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let (_, mut state) = screen();
        assert_eq!(press(&mut state, KeyCode::Esc), WheelKeyResult::Quit);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus(), FocusContext::Options);
        assert_eq!(press(&mut state, KeyCode::Char('q')), WheelKeyResult::Quit);
    }

    #[test]
    fn test_navigation_wraps() {
        let (_, mut state) = screen();
        for label in ["A", "B", "C"] {
            add(&mut state, label);
        }
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.selected(), Some(0));

        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected(), Some(2));
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.selected(), Some(0));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_remove_clamps_selection() {
        let (_, mut state) = screen();
        for label in ["A", "B"] {
            add(&mut state, label);
        }
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected(), Some(1));

        press(&mut state, KeyCode::Char('d'));
        assert_eq!(labels(&state), vec!["A"]);
        assert_eq!(state.selected(), Some(0));

        press(&mut state, KeyCode::Delete);
        assert!(state.wheel().options().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_spin_with_no_options_is_ignored() {
        let (_, mut state) = screen();
        assert_eq!(press(&mut state, KeyCode::F(5)), WheelKeyResult::Ignored);
        assert!(!state.wheel().is_spinning());
    }

    #[test]
    fn test_edits_blocked_while_spinning() {
        let (_, mut state) = screen();
        add(&mut state, "A");
        assert_eq!(press(&mut state, KeyCode::F(5)), WheelKeyResult::SpinStarted);

        add(&mut state, "B");
        assert_eq!(labels(&state), vec!["A"]);
        assert_eq!(state.input_value(), "B");

        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Delete);
        assert_eq!(labels(&state), vec!["A"]);

        assert_eq!(press(&mut state, KeyCode::Char('s')), WheelKeyResult::Ignored);
    }

    #[test]
    fn test_spin_runs_to_result() {
        let (clock, mut state) = screen();
        add(&mut state, "A");
        add(&mut state, "B");

        assert!(state.wheel.spin_by(10.5 * PI));
        clock.advance(Duration::from_millis(100));
        assert!(matches!(state.tick(), SpinTick::Frame { .. }));

        clock.advance(SPIN_DURATION);
        assert!(matches!(
            state.tick(),
            SpinTick::Finished { index: Some(1), .. }
        ));
        assert_eq!(state.wheel().wheel().result(), Some("B"));
        assert_eq!(state.tick(), SpinTick::Idle);
    }

    #[test]
    fn test_render_empty_screen() {
        let (_, mut state) = screen();
        let text = render_text(&mut state);

        assert!(text.contains(TITLE));
        assert!(text.contains("No options added yet."));
        assert!(text.contains("Enter an option"));
        assert!(text.contains(SPIN_LABEL));
        assert!(text.contains("Result:"));
    }

    #[test]
    fn test_render_spinning_and_result() {
        let (clock, mut state) = screen();
        add(&mut state, "Tacos");
        add(&mut state, "Ramen");
        assert!(state.wheel.spin_by(11.5 * PI));

        assert!(render_text(&mut state).contains(SPINNING_LABEL));

        clock.advance(SPIN_DURATION);
        state.tick();
        let text = render_text(&mut state);
        assert!(text.contains(SPIN_LABEL));
        assert!(text.contains("Tacos"));
        assert_eq!(state.wheel().wheel().result(), Some("Tacos"));
    }

    #[test_case(100, 35 ; "wide")]
    #[test_case(50, OPTIONS_MIN_WIDTH ; "narrow")]
    fn test_content_columns_do_not_overlap(width: u16, options_width: u16) {
        let [options, wheel] = content_columns(Rect::new(0, 0, width, 20));

        assert_eq!(options.width, options_width);
        assert_eq!(options.right(), wheel.x);
        assert_eq!(wheel.right(), width);
    }

    #[test]
    fn test_footer_hidden_when_disabled() {
        let clock = Arc::new(ManualClock::new());
        let mut state = WheelScreenState::new(clock, Theme::default(), false);
        assert!(!render_text(&mut state).contains("INPUT"));
    }
}

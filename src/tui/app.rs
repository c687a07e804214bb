use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::read_config;
use crate::io::store::{DEFAULT_STORE_FILE, Store};
use crate::model::plan::Plan;
use crate::model::task::TaskColor;
use crate::ops::plan_ops;

use super::drag::DragSession;
use super::input;
use super::render;
use super::theme::Theme;

/// Bounds for the draggable divider between the name panel and the chart.
pub const LIST_WIDTH_MIN: u16 = 14;
pub const LIST_WIDTH_MAX: u16 = 60;

/// Current interaction mode. Edit and Menu each carry session state on the
/// App; the mode decides which handler owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The add-task input bar is focused.
    AddInput,
    /// An inline rename session is live.
    Edit,
    /// The right-click context menu is open.
    Menu,
}

/// The one live inline-rename session.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub index: usize,
    /// Pre-edit name, restored on cancel or empty commit.
    pub original: String,
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`.
    pub cursor: usize,
}

/// Context-menu entries, in display order.
pub const MENU_ITEMS: [&str; 2] = ["Delete", "Rename"];

/// The open right-click menu: the clicked row plus screen position.
#[derive(Debug, Clone, Copy)]
pub struct ContextMenu {
    pub index: usize,
    pub x: u16,
    pub y: u16,
    pub cursor: usize,
}

/// Screen regions captured during render so input handlers can hit-test
/// mouse events against the previous frame's layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panes {
    pub add_bar: Rect,
    pub palette: Rect,
    pub ruler: Rect,
    pub list: Rect,
    pub divider: Rect,
    pub chart: Rect,
    pub status: Rect,
    /// Context-menu popup, zero-sized unless the menu is open.
    pub menu: Rect,
}

/// Main application state.
pub struct App {
    pub plan: Plan,
    pub store: Store,
    pub theme: Theme,
    pub day_width: u16,
    pub list_width: u16,
    pub mode: Mode,
    pub should_quit: bool,

    // Add bar
    pub add_input: String,
    pub current_color: TaskColor,

    // Ephemeral sessions: at most one of each, drag and edit mutually
    // exclusive (a press is refused while editing).
    pub drag: Option<DragSession>,
    pub edit: Option<EditSession>,
    pub menu: Option<ContextMenu>,
    pub divider_drag: bool,

    // Scroll state. The two vertical offsets are mirrored on every scroll
    // so the panels stay in lockstep; horizontal scroll is shared by the
    // chart and the ruler above it.
    pub list_scroll: usize,
    pub chart_scroll: usize,
    pub h_scroll: usize,

    pub panes: Panes,
}

impl App {
    pub fn new(plan: Plan, store: Store) -> Self {
        let config = read_config(store.path().parent().unwrap_or(Path::new(".")));
        let theme = Theme::from_config(&config.ui);
        App {
            plan,
            store,
            theme,
            day_width: config.ui.day_width(),
            list_width: config.ui.list_width.clamp(LIST_WIDTH_MIN, LIST_WIDTH_MAX),
            mode: Mode::Navigate,
            should_quit: false,
            add_input: String::new(),
            current_color: TaskColor::default(),
            drag: None,
            edit: None,
            menu: None,
            divider_drag: false,
            list_scroll: 0,
            chart_scroll: 0,
            h_scroll: 0,
            panes: Panes::default(),
        }
    }

    /// Persist the plan. Storage failures are deliberately swallowed: a
    /// full disk must not interrupt the interaction flow.
    pub fn persist(&self) {
        let _ = self.store.save(self.plan.tasks());
    }

    // -----------------------------------------------------------------
    // Inline edit session
    // -----------------------------------------------------------------

    /// Idle → Editing. Refused while a drag is live or the index is stale.
    pub fn begin_edit(&mut self, index: usize) {
        if self.drag.is_some() {
            return;
        }
        let Some(task) = self.plan.get(index) else {
            return;
        };
        let name = task.name.clone();
        self.edit = Some(EditSession {
            index,
            original: name.clone(),
            cursor: name.len(),
            buffer: name,
        });
        self.mode = Mode::Edit;
    }

    /// Editing → Idle, committing the buffer. A value that trims to empty
    /// is discarded and the original name kept.
    pub fn commit_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            if plan_ops::rename_task(&mut self.plan, session.index, &session.buffer) {
                self.persist();
            }
        }
        self.mode = Mode::Navigate;
    }

    /// Editing → Idle, discarding the buffer unconditionally.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------
    // Context menu
    // -----------------------------------------------------------------

    pub fn open_menu(&mut self, index: usize, x: u16, y: u16) {
        self.menu = Some(ContextMenu {
            index,
            x,
            y,
            cursor: 0,
        });
        self.mode = Mode::Menu;
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
        if self.mode == Mode::Menu {
            self.mode = Mode::Navigate;
        }
    }

    // -----------------------------------------------------------------
    // Scroll sync
    // -----------------------------------------------------------------

    /// Highest vertical offset that still shows a full page.
    pub fn max_v_scroll(&self) -> usize {
        let visible = self.panes.chart.height as usize;
        self.plan.len().saturating_sub(visible.max(1))
    }

    /// Scroll the task-name panel and mirror the chart to it.
    pub fn scroll_list_to(&mut self, offset: usize) {
        self.list_scroll = offset.min(self.max_v_scroll());
        self.chart_scroll = self.list_scroll;
    }

    /// Scroll the chart and mirror the task-name panel to it.
    pub fn scroll_chart_to(&mut self, offset: usize) {
        self.chart_scroll = offset.min(self.max_v_scroll());
        self.list_scroll = self.chart_scroll;
    }

    /// Highest horizontal offset that still shows a full chart page.
    pub fn max_h_scroll(&self) -> usize {
        let total = crate::model::task::DAYS_TOTAL as usize * self.day_width as usize;
        total.saturating_sub(self.panes.chart.width as usize)
    }

    /// Scroll the chart horizontally; the ruler renders from the same
    /// offset, so the two stay aligned by construction.
    pub fn scroll_h_to(&mut self, offset: usize) {
        self.h_scroll = offset.min(self.max_h_scroll());
    }

    /// Keep the selected row inside both viewports after keyboard moves.
    pub fn ensure_selection_visible(&mut self) {
        let Some(selected) = self.plan.selected() else {
            return;
        };
        let visible = (self.panes.chart.height as usize).max(1);
        if selected < self.chart_scroll {
            self.scroll_chart_to(selected);
        } else if selected >= self.chart_scroll + visible {
            self.scroll_chart_to(selected + 1 - visible);
        }
    }
}

/// Run the TUI against the given blob path (default `tasks.json`).
pub fn run(file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::new(file.unwrap_or(DEFAULT_STORE_FILE));
    let plan = Plan::new(store.load());
    let mut app = App::new(plan, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::mouse::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

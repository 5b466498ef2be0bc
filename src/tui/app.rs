use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{ColorOverrides, Config, SortKey, Task, TaskId, ThemePreference};
use crate::ops::{Projection, SortState, TaskStore, parse_due_date, project};

use super::input;
use super::render;
use super::theme::Palette;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add/edit form has keyboard focus
    Form,
}

/// Which list the cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Date,
    Priority,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Text => FormField::Date,
            FormField::Date => FormField::Priority,
            FormField::Priority => FormField::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Text => FormField::Priority,
            FormField::Date => FormField::Text,
            FormField::Priority => FormField::Date,
        }
    }
}

/// In-progress add or edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub kind: FormKind,
    pub field: FormField,
    pub text: String,
    pub date: String,
    pub priority: String,
    /// Carried through an edit unchanged
    pub completed: bool,
}

impl Form {
    pub fn add() -> Self {
        Form {
            kind: FormKind::Add,
            field: FormField::Text,
            text: String::new(),
            date: String::new(),
            priority: String::new(),
            completed: false,
        }
    }

    pub fn edit(task: &Task) -> Self {
        Form {
            kind: FormKind::Edit(task.id),
            field: FormField::Text,
            text: task.text.clone(),
            date: task.date.clone(),
            priority: task.priority.clone(),
            completed: task.completed,
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub theme: ThemePreference,
    pub palette: Palette,
    pub colors: ColorOverrides,
    pub sort: SortState,
    pub mode: Mode,
    pub focus: Focus,
    /// Cursor index into the sorted task list
    pub cursor: usize,
    /// Cursor index into the completed list
    pub completed_cursor: usize,
    /// First visible content row
    pub scroll_offset: usize,
    pub form: Option<Form>,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// One-shot message for the status row
    pub message: Option<String>,
    pub should_quit: bool,
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut store = TaskStore::new();
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));

        let ui = &config.ui;
        App {
            store,
            theme: ui.theme,
            palette: Palette::for_preference(ui.theme, &ui.colors),
            colors: ui.colors.clone(),
            sort: SortState::new(ui.sort, ui.order),
            mode: Mode::Navigate,
            focus: Focus::Tasks,
            cursor: 0,
            completed_cursor: 0,
            scroll_offset: 0,
            form: None,
            show_help: false,
            show_key_hints: ui.show_key_hints,
            message: None,
            should_quit: false,
            needs_redraw,
        }
    }

    /// Sorted view of the store for the current sort state
    pub fn projection(&self) -> Projection<'_> {
        project(self.store.tasks(), self.sort)
    }

    /// Id of the task under the cursor in the focused list
    pub fn selected_id(&self) -> Option<TaskId> {
        let view = self.projection();
        match self.focus {
            Focus::Tasks => view.tasks.get(self.cursor).map(|t| t.id),
            Focus::Completed => view.completed.get(self.completed_cursor).map(|t| t.id),
        }
    }

    /// Put the task-list cursor on `id` if it is visible
    pub fn select_task(&mut self, id: TaskId) {
        let position = self.projection().tasks.iter().position(|t| t.id == id);
        if let Some(index) = position {
            self.focus = Focus::Tasks;
            self.cursor = index;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = {
            let view = self.projection();
            match self.focus {
                Focus::Tasks => view.tasks.len(),
                Focus::Completed => view.completed.len(),
            }
        };
        let cursor = match self.focus {
            Focus::Tasks => &mut self.cursor,
            Focus::Completed => &mut self.completed_cursor,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn cursor_to_start(&mut self) {
        match self.focus {
            Focus::Tasks => self.cursor = 0,
            Focus::Completed => self.completed_cursor = 0,
        }
    }

    pub fn cursor_to_end(&mut self) {
        self.move_cursor(isize::MAX);
    }

    /// Switch between the task list and the completed list. The completed
    /// list only takes focus when it has rows.
    pub fn switch_focus(&mut self) {
        let has_completed = !self.projection().completed.is_empty();
        self.focus = match self.focus {
            Focus::Tasks if has_completed => Focus::Completed,
            _ => Focus::Tasks,
        };
    }

    /// Keep cursors inside their lists after the store changed
    pub fn clamp_cursors(&mut self) {
        let (tasks, completed) = {
            let view = self.projection();
            (view.tasks.len(), view.completed.len())
        };
        self.cursor = self.cursor.min(tasks.saturating_sub(1));
        self.completed_cursor = self.completed_cursor.min(completed.saturating_sub(1));
        if completed == 0 {
            self.focus = Focus::Tasks;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.palette = Palette::for_preference(self.theme, &self.colors);
        info!(theme = %self.theme, "theme changed");
        self.request_redraw();
    }

    /// Sort by `key`, keeping the cursor on the same task
    pub fn select_sort(&mut self, key: SortKey) {
        let selected = self.selected_id();
        self.sort.select(key);
        debug!(key = %self.sort.key, order = self.sort.order.label(), "sort changed");
        if let Some(id) = selected
            && self.focus == Focus::Tasks
        {
            self.select_task(id);
        }
        self.request_redraw();
    }

    pub fn toggle_selected(&mut self) {
        if self.focus != Focus::Tasks {
            return;
        }
        if let Some(id) = self.selected_id() {
            self.store.toggle_complete(id);
            self.clamp_cursors();
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let text = self.store.get(id).map(|t| t.text.clone()).unwrap_or_default();
        if self.store.delete(id) {
            self.message = Some(format!("Deleted \"{text}\""));
        }
        self.clamp_cursors();
    }

    pub fn open_add_form(&mut self) {
        self.form = Some(Form::add());
        self.mode = Mode::Form;
    }

    /// Edit the selected task in place (task list only)
    pub fn open_edit_form(&mut self) {
        if self.focus != Focus::Tasks {
            return;
        }
        let Some(task) = self.selected_id().and_then(|id| self.store.get(id)) else {
            return;
        };
        self.form = Some(Form::edit(task));
        self.mode = Mode::Form;
    }

    /// Apply the form to the store. A blank add leaves the form open.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            self.mode = Mode::Navigate;
            return;
        };
        let date_unrecognized =
            !form.date.trim().is_empty() && parse_due_date(&form.date).is_none();
        match form.kind {
            FormKind::Add => match self.store.add(&form.text, &form.date, &form.priority) {
                Some(id) => {
                    self.select_task(id);
                    self.mode = Mode::Navigate;
                }
                None => {
                    self.message = Some("Task text is required".into());
                    self.form = Some(form);
                    return;
                }
            },
            FormKind::Edit(id) => {
                let task = Task {
                    id,
                    text: form.text,
                    completed: form.completed,
                    date: form.date,
                    priority: form.priority,
                };
                self.store.update(task);
                self.select_task(id);
                self.mode = Mode::Navigate;
            }
        }
        if date_unrecognized {
            self.message = Some("Date not recognized; task sorts last by date".into());
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Whether anything changed since the last call
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the panic message prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!(tasks = app.store.len(), "tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    app.request_redraw();
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

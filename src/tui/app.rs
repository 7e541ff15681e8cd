use super::ui;
use activity_board::{FormInput, Repository, form};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tui_textarea::TextArea;

/// The three entry-form fields, in the order they appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    ImageUrl,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::ImageUrl];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => " Title ",
            Field::Description => " Description ",
            Field::ImageUrl => " Image URL ",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Title => "Name the activity",
            Field::Description => "A few words about it",
            Field::ImageUrl => "https://example.com/photo.jpg",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Title => Field::Description,
            Field::Description => Field::ImageUrl,
            Field::ImageUrl => Field::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Title => Field::ImageUrl,
            Field::Description => Field::Title,
            Field::ImageUrl => Field::Description,
        }
    }
}

pub struct App<'a> {
    pub fields: [TextArea<'a>; 3],
    pub focus: Field,
    pub repository: Repository,
    /// Index into `repository.list()` of the highlighted card, if any.
    pub selected: Option<usize>,
    /// Modal notification text, the terminal analogue of a blocking alert.
    /// While set, every key except the dismiss keys is swallowed.
    pub notice: Option<String>,
    pub exit: bool,
}

impl<'a> App<'a> {
    pub fn new(repository: Repository) -> Self {
        Self {
            fields: [
                Self::new_field(Field::Title),
                Self::new_field(Field::Description),
                Self::new_field(Field::ImageUrl),
            ],
            focus: Field::Title,
            repository,
            selected: None,
            notice: None,
            exit: false,
        }
    }

    fn new_field(field: Field) -> TextArea<'a> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(field.placeholder());
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea
    }

    /// Drop whatever was typed and hand an empty form back to the user.
    fn reset_fields(&mut self) {
        self.fields = [
            Self::new_field(Field::Title),
            Self::new_field(Field::Description),
            Self::new_field(Field::ImageUrl),
        ];
        self.focus = Field::Title;
    }

    pub fn field_text(&self, field: Field) -> String {
        self.fields[field.index()].lines().join("\n")
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res?;
        Ok(())
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            // Full rebuild every pass: the first draw shows the startup
            // state, every later one reflects whatever the last key changed.
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(key);
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // The notification is modal: nothing else reacts until dismissed.
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.exit = true,
            // Enter is the submit control; it never reaches the text areas.
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_selected();
            }
            _ => {
                self.fields[self.focus.index()].input(key);
            }
        }
    }

    /// Gather the raw field text and hand it to the form bridge. On success
    /// the form is cleared; on rejection the notification goes up and the
    /// typed text stays. Rendering needs no explicit trigger, since the next
    /// pass of the loop rebuilds the card list from the repository.
    fn submit(&mut self) {
        let input = FormInput {
            title: self.field_text(Field::Title),
            description: self.field_text(Field::Description),
            image_url: self.field_text(Field::ImageUrl),
        };

        match form::submit(&mut self.repository, input) {
            Ok(activity) => {
                tracing::debug!(id = activity.id, "activity added from form");
                self.reset_fields();
            }
            Err(error) => self.notice = Some(error.to_string()),
        }
    }

    fn select_next(&mut self) {
        let count = self.repository.len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |index| (index + 1) % count));
    }

    fn select_previous(&mut self) {
        let count = self.repository.len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(
            self.selected
                .map_or(count - 1, |index| (index + count - 1) % count),
        );
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(id) = self.repository.list().get(index).map(|a| a.id) else {
            self.selected = None;
            return;
        };

        self.repository.delete(id);

        // Keep the highlight near where it was.
        let count = self.repository.len();
        self.selected = if count == 0 {
            None
        } else {
            Some(index.min(count - 1))
        };
    }
}

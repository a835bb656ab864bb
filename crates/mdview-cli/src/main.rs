use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdview_config::Config;
use mdview_engine::{io, parse_document};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

mod render;

struct App {
    documents_path: PathBuf,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(documents_path: PathBuf) -> Result<Self> {
        let files = io::scan_markdown_files(&documents_path)?
            .iter()
            .filter_map(|path| path.strip_prefix(&documents_path).ok())
            .filter_map(|path| RelativePathBuf::from_path(path).ok())
            .collect();

        let mut app = Self {
            documents_path,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        self.current_content = match io::read_file(file, &self.documents_path) {
            Ok(content) => render::render_blocks(&parse_document(&content)),
            Err(e) => {
                log::warn!("could not read {file}: {e}");
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    // Determine documents path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let documents_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        documents_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                documents_path = config.documents_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No documents path provided and no config file found");
                eprintln!("Usage: {} <documents-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <documents-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [documents-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_documents_dir(&documents_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Documents path '{}'{} is invalid: {e}",
            documents_path.display(),
            source
        );
        process::exit(1);
    }

    if !from_config {
        remember_documents_path(&config_path, &documents_path);
    }

    log::info!("viewing documents in {}", documents_path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(documents_path)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Saves a directory given on the command line as the default for later runs,
/// unless a config file already exists.
fn remember_documents_path(config_path: &Path, documents_path: &Path) {
    let absolute =
        std::path::absolute(documents_path).unwrap_or_else(|_| documents_path.to_path_buf());
    match Config::remember_documents_path(config_path, &absolute) {
        Ok(true) => log::info!(
            "saved {} as the default documents path in {}",
            absolute.display(),
            config_path.display()
        ),
        Ok(false) => {}
        Err(e) => log::warn!("could not write config file {}: {e}", config_path.display()),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(format!("📄 {file}"))])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

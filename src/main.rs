mod ui;

use std::{
    error::Error,
    io::{self, stdin},
    time::Instant,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use wordsprint::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, MAX_DURATION_SECS, MIN_DURATION_SECS},
    logging,
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    theme::Theme,
    typing_test::TypingTest,
    words::{Language, PromptWords, RandomWords, WordSource},
};

/// timed word-by-word typing test with gross/net wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed typing test: type the shuffled words, press space after each one, and watch gross wpm, net wpm and accuracy update every second."
)]
pub struct Cli {
    /// number of seconds the test runs for
    #[clap(short = 's', long, value_parser = clap::value_parser!(u64).range(MIN_DURATION_SECS..=MAX_DURATION_SECS))]
    seconds: Option<u64>,

    /// number of words to generate
    #[clap(short = 'w', long)]
    words: Option<usize>,

    /// bundled word list to draw from (see --list-languages)
    #[clap(short = 'l', long)]
    language: Option<String>,

    /// custom text to type instead of random words
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// color theme
    #[clap(long, value_enum)]
    theme: Option<Theme>,

    /// print the bundled word lists and exit
    #[clap(long)]
    list_languages: bool,
}

impl Cli {
    /// Flags override whatever was stored
    fn apply_to(&self, config: Config) -> Config {
        Config {
            duration_secs: self.seconds.unwrap_or(config.duration_secs),
            number_of_words: self.words.unwrap_or(config.number_of_words),
            language: self.language.clone().unwrap_or(config.language),
            theme: self.theme.unwrap_or(config.theme),
        }
    }

    fn word_source(&self, config: &Config) -> wordsprint::Result<Box<dyn WordSource>> {
        if let Some(ref prompt) = self.prompt {
            return Ok(Box::new(PromptWords::new(prompt)));
        }
        let language = Language::load(&config.language)?;
        Ok(Box::new(RandomWords::new(language, config.number_of_words)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub test: TypingTest,
    pub config: Config,
    pub now: Instant,
    config_store: Box<dyn ConfigStore>,
}

impl App {
    pub fn new(cli: &Cli, config_store: Box<dyn ConfigStore>) -> wordsprint::Result<Self> {
        let config = cli.apply_to(config_store.load());
        let source = cli.word_source(&config)?;
        Ok(Self::from_parts(source, config, config_store))
    }

    pub fn from_parts(
        source: Box<dyn WordSource>,
        config: Config,
        config_store: Box<dyn ConfigStore>,
    ) -> Self {
        Self {
            test: TypingTest::new(source, config.duration_secs),
            config,
            now: Instant::now(),
            config_store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        // only the theme is written back; flags for this run stay out of the file
        let mut stored = self.config_store.load();
        stored.theme = self.config.theme;
        if let Err(err) = self.config_store.save(&stored) {
            warn!(%err, "failed to persist theme");
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.test.tick(now);
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        self.now = now;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::F(5) => self.test.restart(),
            KeyCode::Char('r') if ctrl => self.test.restart(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('w') if ctrl => self.test.delete_word(now),
            KeyCode::Backspace if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                self.test.delete_word(now)
            }
            KeyCode::Backspace => self.test.backspace(now),
            KeyCode::Tab => self.test.autocomplete(now),
            KeyCode::Char(c) if !ctrl => self.test.type_char(c, now),
            _ => {}
        }

        Control::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list_languages {
        for name in Language::available() {
            println!("{name}");
        }
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // a second subscriber or an unwritable log file must not stop the test
    let _ = logging::init(&AppDirs::log_path());

    let mut app = match App::new(&cli, Box::new(FileConfigStore::new())) {
        Ok(app) => app,
        Err(err) => Cli::command()
            .error(ErrorKind::InvalidValue, err.to_string())
            .exit(),
    };
    info!(
        secs = app.config.duration_secs,
        words = app.test.engine().words().len(),
        "starting"
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        let now = Instant::now();
        match runner.step() {
            AppEvent::Tick => app.tick(now),
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if app.on_key(key, now) == Control::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

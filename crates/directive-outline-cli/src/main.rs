mod app;

use anyhow::Result;
use app::{App, Mode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directive_outline_config::Config;
use directive_outline_engine::{DirectiveType, Outline, io, render_plain_text};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

fn usage(program: &str) {
    eprintln!("Usage: {program} <outline-file>");
    eprintln!("       {program} --check <outline-file>");
    eprintln!("       {program} --list");
}

fn main() -> Result<()> {
    // Quiet by default so log lines do not draw over the TUI; RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("directive-outline");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match args.get(1..).unwrap_or_default() {
        [flag, file] if flag == "--check" => {
            let path = resolve(config.as_ref(), file);
            let outline = io::read_outline_at(&path)?;
            let (text, warnings) = check_report(&outline);
            print!("{text}");
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            if !warnings.is_empty() {
                process::exit(1);
            }
            Ok(())
        }
        [flag] if flag == "--list" => {
            let Some(config) = config else {
                eprintln!(
                    "Error: --list needs outlines_path in {}",
                    Config::config_path().display()
                );
                process::exit(1);
            };
            for line in list_outlines(&config.outlines_path)? {
                println!("{line}");
            }
            Ok(())
        }
        [file] if !file.starts_with("--") => {
            let path = resolve(config.as_ref(), file);
            let directive = default_directive(config.as_ref());
            run_tui(App::open(path, directive)?)
        }
        _ => {
            usage(program);
            process::exit(1);
        }
    }
}

fn resolve(config: Option<&Config>, file: &str) -> PathBuf {
    match config {
        Some(config) => config.resolve_outline(Path::new(file)),
        None => PathBuf::from(file),
    }
}

fn default_directive(config: Option<&Config>) -> DirectiveType {
    let Some(name) = config.and_then(|c| c.directive.as_deref()) else {
        return DirectiveType::Default;
    };
    name.parse().unwrap_or_else(|e| {
        log::warn!("{e}; using the default template");
        DirectiveType::Default
    })
}

/// Plain-text body plus every advisory warning, structural first
fn check_report(outline: &Outline) -> (String, Vec<String>) {
    let text = render_plain_text(&outline.export());

    let mut warnings: Vec<String> = outline
        .structure_warnings()
        .iter()
        .map(ToString::to_string)
        .collect();
    for (paragraph, citation) in outline.paragraphs().iter().zip(outline.citations()) {
        if let Some(error) = &paragraph.acronym_error {
            warnings.push(format!("{citation}: {error}"));
        }
    }

    (text, warnings)
}

/// Outline files under the outlines directory, as paths relative to it
fn list_outlines(outlines_path: &Path) -> Result<Vec<RelativePathBuf>> {
    io::validate_outlines_dir(outlines_path)?;
    let files = io::scan_outline_files(outlines_path)?;

    let mut relative = Vec::new();
    for file in files {
        let stripped = file.strip_prefix(outlines_path)?;
        relative.push(RelativePathBuf::from_path(stripped)?);
    }
    Ok(relative)
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)?
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let snapshot = app.snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(2)].as_ref())
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(rows[0]);

    // Outline panel
    let items: Vec<ListItem> = snapshot
        .paragraphs
        .iter()
        .map(|p| {
            let indent = "  ".repeat(usize::from(p.level.get() - 1));
            let mut spans = vec![
                Span::raw(indent),
                Span::styled(
                    format!("{:<8}", p.citation),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(title) = &p.title {
                spans.push(Span::styled(
                    format!("{title}: "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            match &p.placeholder {
                Some(placeholder) => spans.push(Span::styled(
                    placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                None => spans.push(Span::raw(p.content.clone())),
            }
            if p.acronym_error.is_some() {
                spans.push(Span::styled(" !", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.dirty { " [modified]" } else { "" }
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, columns[0], &mut app.list_state);

    // Warnings panel: acronym problem on the selected paragraph, then structure
    let selected = &snapshot.paragraphs[app.selected_index()];
    let mut warning_lines: Vec<Line> = Vec::new();
    if let Some(error) = &selected.acronym_error {
        warning_lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        warning_lines.push(Line::from(""));
    }
    for warning in &snapshot.warnings {
        warning_lines.push(Line::styled(
            warning.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }
    if warning_lines.is_empty() {
        warning_lines.push(Line::from("No warnings"));
    }

    let warnings = Paragraph::new(warning_lines)
        .block(Block::default().borders(Borders::ALL).title("Warnings"))
        .wrap(Wrap { trim: true });
    f.render_widget(warnings, columns[1]);

    // Input line
    let (input_title, input_text) = match &app.mode {
        Mode::Normal => ("Selected", selected.content.clone()),
        Mode::Editing { buffer } => (
            "Edit text (Enter to apply, Esc to cancel)",
            format!("{buffer}_"),
        ),
        Mode::Goto { buffer } => ("Go to citation", format!("{buffer}_")),
    };
    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title(input_title));
    f.render_widget(input, rows[1]);

    // Status and help
    let help = match &app.status {
        Some(status) => Line::styled(status.clone(), Style::default().fg(Color::Red)),
        None => Line::from(
            "q: Quit | w: Save | e: Edit | m/o/s/u: Insert main/same/sub/up | d: Delete | J/K: Move | </>: Level | g: Go to",
        ),
    };
    f.render_widget(Paragraph::new(vec![help]), rows[2]);
}

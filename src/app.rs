use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame, Terminal,
};

use log::{error, warn};

use crate::alerts::{AlertKind, Thresholds, LOOKAHEAD_HOURS};
use crate::codes;
use crate::errors::SearchError;
use crate::notify::{Capability, Notifier};
use crate::weather::{self, WeatherReport};

const MISSING: &str = "--";

pub struct App {
    input: String,
    report: Option<WeatherReport>,
    error: Option<String>,
    status: Option<String>,
    thresholds: Thresholds,
    notifier: Notifier,
}

impl App {
    pub fn new(thresholds: Thresholds, notifier: Notifier) -> App {
        App {
            input: String::new(),
            report: None,
            error: None,
            status: None,
            thresholds,
            notifier,
        }
    }
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    initial_city: Option<String>,
) -> io::Result<()> {
    if let Some(city) = initial_city {
        app.input = city;
        perform_search(terminal, &mut app)?;
    }

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => perform_search(terminal, &mut app)?,
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.notifier
                        .send("Weather: test", "Notifications are working.", "test");
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }
}

fn perform_search<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let query = app.input.trim().to_string();
    if query.is_empty() {
        return Ok(());
    }

    // One frame with the status line up before the fetch blocks the loop.
    app.status = Some(format!("Searching for {query}..."));
    app.error = None;
    terminal.draw(|f| ui(f, app))?;

    match weather::search(&query, &app.thresholds) {
        Ok(report) => {
            notify_alerts(&app.notifier, &report);
            app.report = Some(report);
        }
        Err(e) => {
            match &e {
                SearchError::CityNotFound(_) => warn!("{}", e),
                SearchError::Transport(_) => error!("{}", e),
            }
            app.error = Some(e.to_string());
        }
    }
    app.status = None;
    Ok(())
}

fn notify_alerts(notifier: &Notifier, report: &WeatherReport) {
    let title = format!("Weather: {}", report.city);
    for alert in &report.alerts {
        notifier.send(&title, &alert.message, alert.kind.tag());
    }
}

fn display_search<'a>(app: &'a App) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Search ", Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            " type a city name",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![Span::raw(" "), Span::raw(app.input.as_str())])
    };

    Paragraph::new(line).block(block)
}

fn display_current_conditions(report: Option<&WeatherReport>) -> Table {
    let title = match report {
        Some(r) => format!(" {} ", r.city),
        None => " Current Conditions ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let current = report.map(|r| &r.current);

    let mut rows = vec![];
    rows.push(Row::new(vec![Cell::from("")]));

    let temp = match current {
        Some(c) => format!("{}°C", c.temperature.round() as i32),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Temperature"),
        Cell::from(temp).style(Style::default().fg(Color::Green)),
    ]));

    let feels = match current {
        Some(c) => format!("{}°C", c.apparent.round() as i32),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Feels like"),
        Cell::from(feels).style(Style::default().fg(Color::Green)),
    ]));

    let humidity = match current {
        Some(c) => format!("{:.0} %", c.humidity),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Humidity"),
        Cell::from(humidity).style(Style::default().fg(Color::Green)),
    ]));

    let wind = match current {
        Some(c) => format!("{:.0} km/h", c.wind_speed),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Wind"),
        Cell::from(wind).style(Style::default().fg(Color::Green)),
    ]));

    let conditions = match current {
        Some(c) => format!(
            "{} {}",
            codes::glyph(c.weather_code),
            codes::description(c.weather_code)
        ),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Conditions"),
        Cell::from(conditions).style(Style::default().fg(Color::Green)),
    ]));

    let updated = match report {
        Some(r) => r.fetched_at.format("%H:%M").to_string(),
        None => MISSING.to_string(),
    };
    rows.push(Row::new(vec![
        Cell::from(" Updated"),
        Cell::from(updated).style(Style::default().fg(Color::Green)),
    ]));

    Table::new(rows, [Constraint::Length(13), Constraint::Length(26)]).block(block)
}

fn display_alerts<'a>(report: Option<&'a WeatherReport>) -> List<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Alerts ", Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let mut list_items = vec![];
    match report {
        None => list_items.push(ListItem::new(format!("\n  {MISSING}"))),
        Some(r) if r.alerts.is_empty() => {
            list_items.push(ListItem::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" Nothing within the next {LOOKAHEAD_HOURS} hours"),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ]));
        }
        Some(r) => {
            for alert in &r.alerts {
                let glyph = match alert.kind {
                    AlertKind::Rain => "🌧",
                    AlertKind::Temp => "🌡",
                };
                list_items.push(ListItem::new(vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::raw(format!(" {glyph} ")),
                        Span::styled(alert.message.as_str(), Style::default().fg(Color::Green)),
                    ]),
                ]));
            }
        }
    }

    List::new(list_items).block(block)
}

fn display_upcoming(report: Option<&WeatherReport>) -> List {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Next Hours ",
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let mut list_items = vec![];
    match report {
        Some(r) if !r.upcoming.is_empty() => {
            for hour in &r.upcoming {
                list_items.push(ListItem::new(vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(
                            format!(" {:>2}:00", hour.hour),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  {}  ", codes::glyph(hour.weather_code))),
                        Span::styled(
                            format!("{:>3}°C", hour.temperature.round() as i32),
                            Style::default().fg(Color::Green),
                        ),
                        Span::raw(format!("  {}", codes::description(hour.weather_code))),
                    ]),
                ]));
            }
        }
        _ => list_items.push(ListItem::new(format!("\n  {MISSING}"))),
    }

    List::new(list_items).block(block)
}

fn display_footer<'a>(app: &'a App) -> Paragraph<'a> {
    let line = if let Some(err) = &app.error {
        Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Green)),
            Span::raw(" search   "),
            Span::styled("Ctrl-N", Style::default().fg(Color::Green)),
            Span::raw(" test notification   "),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::raw(" quit   "),
            Span::styled(
                notifications_label(app.notifier.capability()),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    };

    Paragraph::new(line)
}

fn notifications_label(capability: Capability) -> &'static str {
    match capability {
        Capability::Granted => "notifications on",
        Capability::Denied => "notifications muted",
        Capability::Unsupported => "notifications unavailable",
    }
}

fn ui(f: &mut Frame, app: &App) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(display_search(app), vert_layout[0]);
    let cursor_x = (vert_layout[0].x + 2 + app.input.chars().count() as u16)
        .min(vert_layout[0].right().saturating_sub(2));
    f.set_cursor_position(Position::new(cursor_x, vert_layout[0].y + 1));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vert_layout[1]);

    let lchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    f.render_widget(display_current_conditions(app.report.as_ref()), lchunks[0]);
    f.render_widget(display_alerts(app.report.as_ref()), lchunks[1]);
    f.render_widget(display_upcoming(app.report.as_ref()), chunks[1]);
    f.render_widget(display_footer(app), vert_layout[2]);
}

//! TUI views and rendering
//!
//! Stateless rendering from [`AppState`] to a frame. Nothing here mutates
//! state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::state::{AppState, InteractionMode, View};

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match state.view() {
        View::Loading => render_loading(frame, chunks[1]),
        View::Empty => render_content(state, frame, chunks[1], true),
        View::Populated => render_content(state, frame, chunks[1], false),
    }

    render_footer(state, frame, chunks[2]);

    // Modal overlays on top of whatever the view drew
    match &state.interaction_mode {
        InteractionMode::Confirm(dialog) => render_confirm_dialog(frame, chunks[1], &dialog.message, dialog.selected_button),
        InteractionMode::Help => render_help_overlay(frame, chunks[1]),
        _ => {}
    }
}

/// Render the header bar with title and stats
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        "Daily List",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if state.view() == View::Populated {
        let stats = &state.stats;
        spans.extend([
            Span::raw(" │ "),
            Span::styled(format!("{} total", stats.total), Style::default().fg(Color::Yellow)),
            Span::raw(" │ "),
            Span::styled(
                format!("{} completed", stats.completed),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" │ "),
            Span::styled(
                format!("{}% done", stats.progress_percent),
                Style::default().fg(Color::Blue),
            ),
        ]);
    }

    let header =
        Paragraph::new(vec![Line::from(spans)]).block(Block::default().borders(Borders::ALL).title(" Today "));

    frame.render_widget(header, area);
}

/// Render the loading screen
fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading your tasks...",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(loading, area);
}

/// Render the main content: optional input bar plus the task list or the
/// empty placeholder
fn render_content(state: &AppState, frame: &mut Frame, area: Rect, empty: bool) {
    let list_area = if let Some(buffer) = state.interaction_mode.input_buffer() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        render_input_bar(frame, chunks[0], buffer);
        chunks[1]
    } else {
        area
    };

    if empty {
        render_empty_placeholder(frame, list_area);
    } else {
        render_task_list(state, frame, list_area);
    }
}

/// Render the new-task input bar
fn render_input_bar(frame: &mut Frame, area: Rect, buffer: &str) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(buffer),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New task (Enter to add, Esc to cancel) "),
    );

    frame.render_widget(input, area);
}

/// Render the empty-state placeholder
fn render_empty_placeholder(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No tasks yet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Add your first task to get started!",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Tasks "));

    frame.render_widget(placeholder, area);
}

/// Render the task list
fn render_task_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            let text_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(checkbox, Style::default().fg(Color::Green)),
                Span::styled(task.text.clone(), text_style),
            ]);

            if i == state.selection.selected_index {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Tasks "));

    frame.render_widget(list, area);
}

/// Render the confirmation dialog overlay
fn render_confirm_dialog(frame: &mut Frame, area: Rect, message: &str, selected_button: bool) {
    let popup_area = centered_rect(50, 25, area);
    frame.render_widget(Clear, popup_area);

    let yes_style = if selected_button {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let no_style = if !selected_button {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };

    let content = vec![
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(vec![
            Span::styled(" No ", no_style),
            Span::raw("    "),
            Span::styled(" Yes ", yes_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Tab/←→: switch  Enter: confirm  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(dialog, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]),
        Line::from(""),
        Line::from(vec![key("q, Ctrl+c    "), Span::raw("Quit")]),
        Line::from(vec![key("?, F1        "), Span::raw("Toggle help")]),
        Line::from(""),
        Line::from(vec![key("↑/↓, j/k     "), Span::raw("Navigate tasks")]),
        Line::from(vec![key("g / G        "), Span::raw("First / last task")]),
        Line::from(vec![key("Space, Enter "), Span::raw("Toggle completion")]),
        Line::from(""),
        Line::from(vec![key("n            "), Span::raw("New task")]),
        Line::from(vec![key("d            "), Span::raw("Delete selected task")]),
        Line::from(vec![key("c            "), Span::raw("Clear completed tasks")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Render the footer bar: error message when present, key hints otherwise
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(error) = &state.error_message {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        match &state.interaction_mode {
            InteractionMode::TaskInput(_) => Line::from(vec![
                key(" Enter"),
                Span::raw(" Add "),
                key(" Esc"),
                Span::raw(" Cancel "),
            ]),
            InteractionMode::Confirm(_) => Line::from(vec![
                key(" ←→"),
                Span::raw(" Select "),
                key(" Enter"),
                Span::raw(" Choose "),
                key(" y/n"),
                Span::raw(" Yes/No "),
                key(" Esc"),
                Span::raw(" Cancel "),
            ]),
            _ => {
                let mut spans = vec![
                    key(" q"),
                    Span::raw(" Quit "),
                    key(" ?"),
                    Span::raw(" Help "),
                    key(" n"),
                    Span::raw(" New "),
                    key(" Space"),
                    Span::raw(" Toggle "),
                    key(" d"),
                    Span::raw(" Delete "),
                ];
                if state.stats.completed > 0 {
                    spans.push(key(" c"));
                    spans.push(Span::raw(" Clear completed "));
                }
                Line::from(spans)
            }
        }
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

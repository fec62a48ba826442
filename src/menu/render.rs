// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::MenuState;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Title area
            Constraint::Min(8),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    // Draw ASCII art title
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            " ____   _    ____  ____  _     _____ ____   ___ _____ ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "|  _ \\ / \\  |  _ \\|  _ \\| |   | ____| __ ) / _ \\_   _|",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "| |_) / _ \\ | | | | | | | |   |  _| |  _ \\| | | || |  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "|  __/ ___ \\| |_| | |_| | |___| |___| |_) | |_| || |  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "|_| /_/   \\_\\____/|____/|_____|_____|____/ \\___/ |_|  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = format!("{}{}", prefix, item.display_text());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);

    if menu_state.in_difficulty_select {
        render_difficulty_dialog(frame, menu_state);
    }
}

/// Render the difficulty selection dialog overlay
fn render_difficulty_dialog(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    let dialog_width = 52.min(area.width.saturating_sub(4));
    let dialog_height = (menu_state.difficulties.len() as u16 + 4).min(area.height);
    let dialog_area = Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Select Difficulty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    frame.render_widget(block, dialog_area);

    let inner = dialog_area.inner(ratatui::layout::Margin::new(2, 1));

    let lines: Vec<Line> = menu_state
        .difficulties
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let is_selected = i == menu_state.difficulty_index;
            let prefix = if is_selected { "> " } else { "  " };
            let text = format!(
                "{}{:<8} {}",
                prefix,
                tier.display_name(),
                tier.description()
            );

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let list = Paragraph::new(lines);
    frame.render_widget(list, inner);
}

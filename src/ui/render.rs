// Game rendering with the Ratatui canvas widget

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::GameState;

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Render one frame: score header, bordered field, optional overlay.
pub fn render(
    frame: &mut Frame,
    state: &GameState,
    display: &DisplayConfig,
    overlay: Option<&OverlayMessage>,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Score header
            Constraint::Min(5),    // Field
        ])
        .split(area);

    let score = Line::from(vec![
        Span::styled(
            format!("{:>3}", state.left_score),
            Style::default()
                .fg(rgb(display.score_color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  :  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<3}", state.right_score),
            Style::default()
                .fg(rgb(display.score_color))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let hint = Line::from(Span::styled(
        "W/S: Move   R: Rematch   Q: Quit",
        Style::default().fg(Color::DarkGray),
    ));

    let header = ratatui::widgets::Paragraph::new(vec![score, hint]).alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    // The canvas y axis points up while the field's grows downward, so
    // every y is flipped before drawing.
    let field_height = state.field_height as f64;
    let flip = |y: f32| field_height - y as f64;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, state.field_width as f64])
        .y_bounds([0.0, field_height])
        .paint(|ctx| {
            // Center line
            ctx.draw(&CanvasLine {
                x1: state.field_width as f64 / 2.0,
                y1: 0.0,
                x2: state.field_width as f64 / 2.0,
                y2: field_height,
                color: rgb(display.center_line_color),
            });

            for paddle in [&state.left_paddle, &state.right_paddle] {
                ctx.draw(&Rectangle {
                    x: (paddle.x - paddle.width / 2.0) as f64,
                    y: flip(paddle.bottom()),
                    width: paddle.width as f64,
                    height: paddle.height as f64,
                    color: rgb(display.paddle_color),
                });
            }

            ctx.draw(&Circle {
                x: state.ball.x as f64,
                y: flip(state.ball.y),
                radius: state.ball.radius as f64,
                color: rgb(display.ball_color),
            });
        });

    frame.render_widget(canvas, chunks[1]);

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

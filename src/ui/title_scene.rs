use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the title screen with the start and sound hints
pub fn draw_title(frame: &mut Frame, area: Rect, sound_enabled: bool, coins: u64, level: u32) {
    let sound_label = if sound_enabled { "Sound On" } else { "Sound Off" };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Dragon Math",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Feed the dragon by solving math problems!"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Level "),
            Span::styled(format!("{}", level), Style::default().fg(Color::Cyan)),
            Span::raw("    Coins "),
            Span::styled(format!("{}", coins), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter] Start",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("[S] {}", sound_label),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("    "),
            Span::styled("[Q] Quit", Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

use super::dragon::{dragon_art, mood_color};
use dragon_math::constants::COMBO_BADGE_THRESHOLD;
use dragon_math::save_manager::CounterStore;
use dragon_math::DragonGame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the playing screen: status bar, dragon, and problem panel
pub fn draw_game<S: CounterStore>(frame: &mut Frame, area: Rect, game: &DragonGame<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(area);

    draw_status_bar(frame, chunks[0], game);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_dragon(frame, body[0], game);
    draw_problem_panel(frame, body[1], game);
    draw_controls(frame, chunks[2]);

    if game.is_reward_banner_visible() {
        draw_reward_banner(frame, area);
    }
}

fn draw_status_bar<S: CounterStore>(frame: &mut Frame, area: Rect, game: &DragonGame<S>) {
    let progress = game.engine().progress();

    let mut spans = vec![
        Span::styled(
            format!(" Coins: {} ", progress.coins),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "Level {} ({})",
                progress.level.number(),
                progress.level.name()
            ),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ];

    if progress.combo >= COMBO_BADGE_THRESHOLD {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("* x{}", progress.combo),
            Style::default().fg(Color::LightRed),
        ));
    }

    if game.sound_enabled() {
        spans.push(Span::styled("  [sound]", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_dragon<S: CounterStore>(frame: &mut Frame, area: Rect, game: &DragonGame<S>) {
    let mood = game.engine().mood();
    let style = Style::default().fg(mood_color(mood));

    let mut lines: Vec<Line> = dragon_art(mood)
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("The dragon is {}", mood.name()),
        style,
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Dragon "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_problem_panel<S: CounterStore>(frame: &mut Frame, area: Rect, game: &DragonGame<S>) {
    let engine = game.engine();
    let mut lines = vec![Line::from("")];

    if let Some(problem) = engine.problem() {
        lines.push(Line::from(Span::styled(
            problem.question(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        let typed = if game.input().is_empty() {
            "?"
        } else {
            game.input().as_str()
        };
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                format!("[ {:>3} ]", typed),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(""));

        match engine.last_correct() {
            Some(true) => {
                lines.push(Line::from(Span::styled(
                    "Correct!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    problem.explanation.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            Some(false) => {
                lines.push(Line::from(Span::styled(
                    format!("Oops! The answer is {}", problem.answer),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    problem.explanation.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            None => {}
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Problem "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[0-9]", Style::default().fg(Color::Cyan)),
        Span::raw(" Type  "),
        Span::styled("[Backspace]", Style::default().fg(Color::Cyan)),
        Span::raw(" Delete  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Check  "),
        Span::styled("[P]", Style::default().fg(Color::Yellow)),
        Span::raw(" Pause  "),
        Span::styled("[S]", Style::default().fg(Color::Yellow)),
        Span::raw(" Sound"),
    ]);

    let paragraph = Paragraph::new(hints)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_reward_banner(frame: &mut Frame, area: Rect) {
    let width = 30.min(area.width);
    let height = 3.min(area.height);
    let banner_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, banner_area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "* SUPER COMBO! *",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, banner_area);
}

/// Draws the pause dialog as an overlay
pub fn draw_pause_overlay(frame: &mut Frame) {
    let size = frame.size();

    let dialog_width = 36.min(size.width.saturating_sub(4));
    let dialog_height = 7.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[P] Resume",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[H] Home",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Game Paused ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

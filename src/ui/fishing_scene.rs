//! Fishing scene rendering: the water, the bobber, and the fight gauges.
//!
//! The water sketch keys off the fight phase:
//!
//! ```text
//!     ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~
//!       ~~~~~~ O ~~~~~~            <- bobber: calm while waiting,
//!     ~ ~ ~ ~ ~|~ ~ ~ ~ ~ ~        dipping red while the fish fights
//!              |
//! ```

use crate::fishing::logic::FishFight;
use crate::fishing::types::FishingPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the ASCII water scene with the bobber.
pub fn draw_water_scene(frame: &mut Frame, area: Rect, fight: &FishFight) {
    let lines = match fight.phase() {
        FishingPhase::NotStarted => calm_scene("o", Color::White, "The water is quiet."),
        FishingPhase::WaitingFish => {
            if fight.is_bait_in_water() {
                calm_scene("O", Color::White, "The bobber drifts...")
            } else {
                calm_scene("o", Color::Yellow, "The bait sails out...")
            }
        }
        FishingPhase::Pulling => fighting_scene("FLICK THE ROD!"),
        FishingPhase::Reeling => fighting_scene("CRANK THE REEL!"),
        FishingPhase::Win => calm_scene("><>", Color::Green, "A beaten fish floats belly-up."),
    };

    let title = format!(
        " {} — {} ",
        fight.phase().name(),
        fight.difficulty().name()
    );
    let scene = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);
    frame.render_widget(scene, area);
}

fn calm_scene(bobber: &str, bobber_color: Color, caption: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~",
            Style::default().fg(Color::Blue),
        )),
        Line::from(vec![
            Span::styled("  ~~~~~~ ", Style::default().fg(Color::Blue)),
            Span::styled(
                bobber.to_string(),
                Style::default().fg(bobber_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ~~~~~~", Style::default().fg(Color::Blue)),
        ]),
        Line::from(Span::styled(
            "~ ~ ~ ~ ~ | ~ ~ ~ ~ ~ ~ ~",
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ]
}

fn fighting_scene(caption: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "~~ ~ ~~~ ~ ~~ ~~~ ~ ~~ ~~",
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(vec![
            Span::styled(" ~~~", Style::default().fg(Color::Blue)),
            Span::styled("~~~ ", Style::default().fg(Color::LightBlue)),
            Span::styled(
                "O",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ~~~", Style::default().fg(Color::LightBlue)),
            Span::styled("~~~", Style::default().fg(Color::Blue)),
        ]),
        Line::from(Span::styled(
            "~ ~~~ ~ ~ | ~ ~~ ~ ~~~ ~~",
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Draws the per-phase progress gauges.
pub fn draw_fight_progress(frame: &mut Frame, area: Rect, fight: &FishFight) {
    let block = Block::default().borders(Borders::ALL).title(" Fight ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match fight.phase() {
        FishingPhase::NotStarted | FishingPhase::Win => {
            let message = if fight.phase() == FishingPhase::Win {
                "Victory! Grab the fish before casting again."
            } else {
                "No fish on the line. Cast into a fishing spot."
            };
            let idle = Paragraph::new(message).alignment(Alignment::Center);
            frame.render_widget(idle, inner);
        }
        FishingPhase::WaitingFish => {
            let (current, needed) = fight.wait_progress();
            draw_gauge(
                frame,
                inner,
                "Waiting",
                format!("{current:.1}s / {needed:.1}s"),
                ratio(current, needed),
                Color::Cyan,
            );
        }
        FishingPhase::Pulling => {
            let rows = split_rows(inner);
            let (pulls, needed_pulls) = fight.pull_progress();
            draw_gauge(
                frame,
                rows.0,
                "Pulls",
                format!("{pulls} / {needed_pulls}"),
                ratio(pulls as f32, needed_pulls as f32),
                Color::Yellow,
            );
            draw_shared_fight_rows(frame, rows, fight);
        }
        FishingPhase::Reeling => {
            let rows = split_rows(inner);
            let (reel, needed_reel) = fight.reel_progress();
            draw_gauge(
                frame,
                rows.0,
                "Reel",
                format!("{reel:.2} / {needed_reel:.2}"),
                ratio(reel, needed_reel),
                Color::Green,
            );
            draw_shared_fight_rows(frame, rows, fight);
        }
    }
}

/// Time-to-lose and sub-phase counters, shared by Pulling and Reeling.
fn draw_shared_fight_rows(frame: &mut Frame, rows: (Rect, Rect, Rect), fight: &FishFight) {
    let (time, limit) = fight.phase_time();
    let remaining = (limit - time).max(0.0);
    draw_gauge(
        frame,
        rows.1,
        "Escape",
        format!("{remaining:.1}s left"),
        ratio(time, limit),
        Color::Red,
    );

    let (phases, needed_phases) = fight.win_phases();
    draw_gauge(
        frame,
        rows.2,
        "Fight",
        format!("{phases} / {needed_phases} rounds"),
        ratio(phases as f32, needed_phases as f32),
        Color::Magenta,
    );
}

fn split_rows(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn draw_gauge(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text: String,
    ratio: f64,
    color: Color,
) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{label}: {text}"));
    frame.render_widget(gauge, area);
}

fn ratio(current: f32, needed: f32) -> f64 {
    if needed <= 0.0 {
        return 0.0;
    }
    (current as f64 / needed as f64).clamp(0.0, 1.0)
}

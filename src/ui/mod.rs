//! Terminal UI rendering.

pub mod fishing_scene;

use crate::core::game_state::GameState;
use crate::fishing::logic::FishFight;
use crate::fishing::reel::ReelCrank;
use crate::fishing::rod::RodCaster;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(
    frame: &mut Frame,
    fight: &FishFight,
    state: &GameState,
    rod: &RodCaster,
    crank: &ReelCrank,
) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status header
            Constraint::Min(8),     // Water scene
            Constraint::Length(7),  // Fight progress
            Constraint::Length(8),  // Message log
            Constraint::Length(1),  // Key hints
        ])
        .split(size);

    draw_status_header(frame, chunks[0], state, rod, crank);
    fishing_scene::draw_water_scene(frame, chunks[1], fight);
    fishing_scene::draw_fight_progress(frame, chunks[2], fight);
    draw_log(frame, chunks[3], state);
    draw_key_hints(frame, chunks[4], fight);
}

fn draw_status_header(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &GameState,
    rod: &RodCaster,
    crank: &ReelCrank,
) {
    let bait = &state.equipped_bait;
    let bait_text = if bait.is_default() {
        bait.name.to_string()
    } else {
        format!("{} (S{}, {} uses)", bait.name, bait.strength, bait.durability)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.rod.name),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("| Bait: "),
        Span::styled(bait_text, Style::default().fg(Color::Green)),
        Span::raw(format!(
            " | Bucket: {} | Coins: {} | Caught: {} | Line: {:.1}m{}",
            state.bucket_value,
            state.money,
            state.total_fish_caught(),
            crank.line_length(),
            if rod.is_bait_cast() { " (out)" } else { "" },
        )),
    ]);

    let header = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title(" HOOKLINE "))
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn draw_log(frame: &mut Frame, area: ratatui::layout::Rect, state: &GameState) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.starts_with("Larry:") {
                Style::default().fg(Color::Cyan)
            } else if entry.starts_with('*') || entry.starts_with('~') {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(Span::styled(entry.clone(), style))
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(log, area);
}

fn draw_key_hints(frame: &mut Frame, area: ratatui::layout::Rect, fight: &FishFight) {
    use crate::fishing::types::FishingPhase;

    let hints = match fight.phase() {
        FishingPhase::NotStarted => {
            "[1/2/3] cast easy/medium/hard  [r] reel in  [b] buy bait  [u] buy rod  [s] sell bucket  [q] quit"
        }
        FishingPhase::WaitingFish => "[x] yank bait out of the spot  [q] quit",
        FishingPhase::Pulling => "[space] flick the rod!  [q] quit",
        FishingPhase::Reeling => "[r] crank the reel!  [q] quit",
        FishingPhase::Win => "[g] grab the fish  [q] quit",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

mod constants;
mod core;
mod fishing;
mod ui;

use crate::core::bait::{EquippedBait, BAIT_PRESETS};
use crate::core::game_state::GameState;
use crate::fishing::types::FishingPhase;
use constants::*;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fishing::area::FishingArea;
use fishing::logic::FishFight;
use fishing::reel::{CrankOutcome, ReelCrank};
use fishing::rod::RodCaster;
use fishing::tuning::FishingTuning;
use fishing::types::Difficulty;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let mut tuning = FishingTuning::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tuning" => {
                if i + 1 >= args.len() {
                    eprintln!("--tuning needs a path to a JSON file");
                    std::process::exit(1);
                }
                tuning = FishingTuning::load(&args[i + 1])?;
                i += 1;
            }
            "--help" | "-h" => {
                println!("Hookline - Terminal Fishing\n");
                println!("Usage: hookline [OPTIONS]\n");
                println!("Options:");
                println!("  --tuning <path>  Load fight tuning from a JSON file");
                println!("  --help           Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'hookline --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, tuning);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tuning: FishingTuning,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    let mut state = GameState::new();
    let mut fight = FishFight::new(tuning);
    let mut rod = RodCaster::new();
    let mut crank = ReelCrank::new();

    let areas = [
        FishingArea::new(Difficulty::Easy),
        FishingArea::new(Difficulty::Medium),
        FishingArea::new(Difficulty::Hard),
    ];
    // The area the bait currently floats in, if any.
    let mut bait_area: Option<usize> = None;

    rod.grab();
    state.add_log("Larry: Grab the rod and cast into a fishing spot!");

    let mut last_tick = Instant::now();

    loop {
        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();

        let bait = state.equipped_bait;
        rod.update(dt, &mut fight, &bait, &mut rng);
        fight.update(dt, &bait, &mut rng);

        let events = fight.drain_events();
        state.apply_fishing_events(&events);

        terminal.draw(|frame| ui::draw_ui(frame, &fight, &state, &rod, &crank))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    KeyCode::Char(c @ '1'..='3') => {
                        let index = c as usize - '1' as usize;
                        cast_into_area(
                            index,
                            &areas,
                            &mut bait_area,
                            &mut fight,
                            &mut rod,
                            &mut crank,
                            &mut state,
                            &mut rng,
                        );
                    }
                    KeyCode::Char(' ') => {
                        rod.record_pitch(FLICK_PITCH_SPEED);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        let bait = state.equipped_bait;
                        let outcome = crank.turn(
                            CRANK_DEGREES_PER_PRESS,
                            &state.rod,
                            &mut fight,
                            &bait,
                            &mut rng,
                        );
                        if outcome == CrankOutcome::BaitRecalled {
                            rod.on_bait_recalled();
                            bait_area = None;
                        }
                    }
                    KeyCode::Char('x') | KeyCode::Char('X') => {
                        // Mid-fight the yank is refused and the bait stays
                        // registered in its spot.
                        if let Some(index) = bait_area {
                            if areas[index].on_bait_exit(&mut fight) {
                                bait_area = None;
                            }
                        }
                    }
                    KeyCode::Char('g') | KeyCode::Char('G') => {
                        if fight.can_grab_fish() {
                            let difficulty = fight.difficulty();
                            fight.reset_after_fish_grabbed();
                            state.record_catch(difficulty);
                            bait_area = None;
                        }
                    }
                    KeyCode::Char('b') | KeyCode::Char('B') => {
                        buy_next_bait(&mut state, &fight, &rod);
                    }
                    KeyCode::Char('u') | KeyCode::Char('U') => {
                        if idle_at_the_shop(&mut state, &fight, &rod) {
                            state.buy_next_rod();
                        }
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') => {
                        state.cash_in_bucket();
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cast_into_area(
    index: usize,
    areas: &[FishingArea; 3],
    bait_area: &mut Option<usize>,
    fight: &mut FishFight,
    rod: &mut RodCaster,
    crank: &mut ReelCrank,
    state: &mut GameState,
    rng: &mut impl rand::Rng,
) {
    if !rod.cast(fight) {
        return;
    }
    crank.on_cast(&state.rod);
    // The gate opens the moment the bait is a free body.
    fight.set_can_start(true);

    let area = &areas[index];
    *bait_area = Some(index);
    state.add_log(format!(
        "Cast into the {} spot.",
        area.difficulty.name().to_lowercase()
    ));

    let bait = state.equipped_bait;
    area.on_bait_enter(fight, &bait, rng);
}

/// Shop trades happen only between attempts, so a hooked fish can't have
/// its difficulty rolled with one bait and its durability charged to
/// another (or its reel force re-rated mid-crank).
fn idle_at_the_shop(state: &mut GameState, fight: &FishFight, rod: &RodCaster) -> bool {
    if fight.phase() != FishingPhase::NotStarted || rod.is_bait_cast() {
        state.add_log("Larry: Reel in before visiting the shop!");
        return false;
    }
    true
}

/// Buys the preset one tier above the equipped bait; from the top tier,
/// reverts to the free plain worm (discarding leftover uses).
fn buy_next_bait(state: &mut GameState, fight: &FishFight, rod: &RodCaster) {
    if !idle_at_the_shop(state, fight, rod) {
        return;
    }

    let next = if state.equipped_bait.is_default() {
        Some(0)
    } else {
        BAIT_PRESETS
            .iter()
            .position(|preset| preset.name == state.equipped_bait.name)
            .map(|at| at + 1)
            .filter(|&at| at < BAIT_PRESETS.len())
    };

    match next {
        Some(at) => {
            state.buy_bait(at);
        }
        None => {
            state.equipped_bait = EquippedBait::default_bait();
            state.add_log("Larry: Back to the plain worm, then.");
        }
    }
}

use anyhow::{Context, Result};
use crossterm::style::{style, Stylize};
use itertools::Itertools;
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs,
    io::{stdin, stdout, Write},
};
use voca_rs::Voca;

use core_logic::*;

mod config;
use config::Config;

mod grid_display;
use grid_display::render_boards;

const PROMPT: &str = "\n> ";
const INDENT: &str = "  ";
const DEFAULT_DIALOG: &str = include_str!("dialog.xml");
const HUMAN_TOKEN: &str = "you";
const COMPUTER_TOKEN: &str = "computer";

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    debug!("Config: {config:?}");
    let dialog = load_dialog(&config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let human = PlayerToken::from(HUMAN_TOKEN);
    let computer = PlayerToken::from(COMPUTER_TOKEN);
    let mut game = Game::new(human.clone(), computer.clone());
    place_fleet_randomly(&mut game.view(&computer)?, &mut rng)
        .context("Failed to place the computer's fleet")?;

    print_message(dialog.get(DialogKey::Greeting));
    print_next_step(&game, &human, &dialog)?;

    let mut input_buf = String::new();
    loop {
        print!("{PROMPT}");
        stdout().flush()?;

        input_buf.clear();
        if stdin().read_line(&mut input_buf)? == 0 {
            debug!("Input closed");
            return Ok(());
        }
        debug!("Raw input: {input_buf:?}");

        let command = match parse_input(&input_buf) {
            Ok(c) => c,
            Err(e) => {
                print_error(&e.to_string());
                continue;
            }
        };
        debug!("Parsed command: {command:?}");

        match command {
            Command::Quit => {
                println!("ok bye");
                return Ok(());
            }
            Command::Help => println!("{}", help_text()),
            Command::Board => print_boards(&game, &human, &computer)?,
            Command::Place {
                top_left,
                orientation,
            } => match game.place_ship(&human, top_left, orientation) {
                Ok(()) => {
                    print_boards(&game, &human, &computer)?;
                    print_next_step(&game, &human, &dialog)?;
                }
                Err(e) => print_error(&e.to_string()),
            },
            Command::Shoot(coord) => {
                match take_turn(&mut game, &human, &computer, coord, &dialog, &mut rng) {
                    Ok(lines) => {
                        for line in lines {
                            println!("{line}");
                        }
                        print_boards(&game, &human, &computer)?;
                    }
                    Err(e) => print_error(&e.to_string()),
                }
            }
        }

        if let Some(message) = game_over_message(&game, &human, &dialog)? {
            info!("Game over for {human}: {}", game.game_state(&human)?);
            print_message(message);
            return Ok(());
        }
    }
}

/// Loads the dialog document from the configured path, or the built-in one if none is configured.
fn load_dialog(config: &Config) -> Result<Dialog> {
    match &config.dialog_path {
        Some(path) => {
            let xml = fs::read_to_string(path)
                .with_context(|| format!("Failed to read dialog from {}", path.display()))?;
            Dialog::parse(&xml)
                .with_context(|| format!("Failed to parse dialog from {}", path.display()))
        }
        None => Dialog::parse(DEFAULT_DIALOG).context("Failed to parse built-in dialog"),
    }
}

/// Has the human shoot at the provided field, and then lets the computer shoot back if it's its turn.
///
/// Returns the lines to show the human. If the human still has ships to place, nothing is shot.
fn take_turn(
    game: &mut Game,
    human: &PlayerToken,
    computer: &PlayerToken,
    coord: Coord,
    dialog: &Dialog,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GameError> {
    if let Some(ship) = game.ship_to_place(human)? {
        return Ok(vec![place_message(dialog, ship)]);
    }

    let result = game.shoot_field(human, coord)?;
    let description = describe_shot(game, computer, coord, result, dialog)?;
    let mut lines = vec![description._capitalize(false)];

    if game.game_state(computer)? != GameState::CanPlay {
        return Ok(lines);
    }

    let target = choose_target(game.grid(human)?, game.moves_done(computer)?, rng);
    if let Some(target) = target {
        let result = game.shoot_field(computer, target)?;
        info!("{computer} shot at {target}: {result}");
        if let Some(last_move) = game.last_opponent_move(human)? {
            let description = describe_shot(game, human, last_move.coord, result, dialog)?;
            lines.push(opponent_line(&description));
        }
    }

    Ok(lines)
}

/// Formats a description of the computer's shot.
fn opponent_line(description: &str) -> String {
    format!(
        "{} {}",
        style("Opponent:").yellow(),
        description._capitalize(false)
    )
}

/// Builds the message asking the human to place the provided ship.
fn place_message(dialog: &Dialog, ship: &Ship) -> String {
    format!(
        "{} {}",
        dialog.render(DialogKey::Place, Some(ship.kind), &[]),
        style(format!("({} fields)", ship.size())).dark_grey()
    )
}

/// Builds the message describing a shot at the target player's grid.
fn describe_shot(
    game: &Game,
    target: &PlayerToken,
    coord: Coord,
    result: ShotResult,
    dialog: &Dialog,
) -> Result<String, GameError> {
    let message = match result {
        ShotResult::Hit => dialog.render(DialogKey::Hit, None, &[coord]),
        ShotResult::Miss => dialog.render(DialogKey::Miss, None, &[coord]),
        ShotResult::AlreadyShot => dialog.render(DialogKey::AlreadyShot, None, &[coord]),
        ShotResult::Sunk => {
            match game
                .ships(target)?
                .iter()
                .find(|ship| ship.coords.contains(&coord))
            {
                Some(ship) => dialog.render(DialogKey::Sunk, Some(ship.kind), &ship.coords),
                None => dialog.render(DialogKey::Sunk, None, &[coord]),
            }
        }
    };

    Ok(message)
}

/// Tells the human what to do next, if anything.
fn print_next_step(game: &Game, human: &PlayerToken, dialog: &Dialog) -> Result<(), GameError> {
    if let Some(ship) = game.ship_to_place(human)? {
        print_message(&place_message(dialog, ship));
        return Ok(());
    }

    match game.game_state(human)? {
        GameState::CanPlay => print_message(dialog.get(DialogKey::Shoot)),
        GameState::Wait => print_message(dialog.get(DialogKey::Wait)),
        GameState::Won | GameState::Lost => (),
    }

    Ok(())
}

/// Finds the message to end the game with, if it's over.
fn game_over_message<'d>(
    game: &Game,
    human: &PlayerToken,
    dialog: &'d Dialog,
) -> Result<Option<&'d str>, GameError> {
    let message = match game.game_state(human)? {
        GameState::Won => Some(dialog.get(DialogKey::Won)),
        GameState::Lost => Some(dialog.get(DialogKey::Lost)),
        GameState::CanPlay | GameState::Wait => None,
    };

    Ok(message)
}

fn print_boards(game: &Game, human: &PlayerToken, computer: &PlayerToken) -> Result<(), GameError> {
    println!(
        "{}",
        render_boards(
            game.grid(human)?,
            game.moves_done(human)?,
            game.moves_done(computer)?
        )
    );

    Ok(())
}

fn print_message(message: &str) {
    println!("{}", message._capitalize(false));
}

fn print_error(message: &str) {
    println!("{}", style(message._capitalize(false)).red());
}

/// Builds the text shown for the help command.
fn help_text() -> String {
    let fleet = AVAILABLE_SHIPS
        .iter()
        .map(|(kind, count)| format!("{INDENT}{count} x {kind} ({} fields)", kind.size()))
        .join("\n");

    [
        "Commands:".to_string(),
        format!("{INDENT}place <field> <h|v>   place your next ship, e.g. \"place A1 h\""),
        format!("{INDENT}shoot <field>         shoot at a field, e.g. \"shoot C4\" or just \"C4\""),
        format!("{INDENT}board                 show both grids"),
        format!("{INDENT}help                  show this message"),
        format!("{INDENT}quit                  leave the game"),
        "Fleet:".to_string(),
        fleet,
    ]
    .join("\n")
}

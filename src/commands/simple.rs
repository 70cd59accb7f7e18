//! Simple line-based mode
//!
//! Plays the same game as the TUI, one typed word per line, without the
//! alternate screen.

use crate::core::Word;
use crate::game::{Game, GameConfig, InputEvent, Settings, Step};
use crate::output::{write_board, write_result};
use crate::wordlists::WordStore;
use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<R: Rng>(
    store: &WordStore,
    config: GameConfig,
    settings: Settings,
    rng: &mut R,
) -> Result<()> {
    let game = Game::new(store, config, settings, rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(game, rng, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Drive a game from lines of `input`, writing everything to `out`
///
/// Returns when the player quits, declines a rematch, or input runs out.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn play_session<Rd, W, R>(mut game: Game<'_>, rng: &mut R, mut input: Rd, out: &mut W) -> io::Result<()>
where
    Rd: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "{}", "WORDLE".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Commands: :hard, :quit",
        game.board().word_len(),
        game.board().row_count()
    )?;
    write_board(out, &game.snapshot())?;

    let mut line = String::new();
    loop {
        let prompt = if game.state().is_terminal() {
            "Press r to play again, anything else to exit:"
        } else {
            ">"
        };
        write!(out, "{prompt} ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let entry = line.trim();

        if game.state().is_terminal() {
            if !entry.eq_ignore_ascii_case("r") {
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            game = game.restart(rng);
            writeln!(out, "{}", "New game started!".bright_cyan())?;
            write_board(out, &game.snapshot())?;
            continue;
        }

        match entry {
            "" => {}
            ":q" | ":quit" => {
                game.handle(InputEvent::Quit);
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            ":hard" => {
                toggle_hard_mode(&mut game);
                let status = if game.settings().hard_mode { "on" } else { "off" };
                writeln!(out, "Hard mode {status}")?;
            }
            word => submit_word(&mut game, word, out)?,
        }
    }
}

/// Flip hard mode the same way the TUI settings panel does
fn toggle_hard_mode(game: &mut Game) {
    game.handle(InputEvent::ToggleSettings);
    game.handle(InputEvent::Commit);
    game.handle(InputEvent::ToggleSettings);
    info!("hard mode set to {}", game.settings().hard_mode);
}

fn submit_word<W: Write>(game: &mut Game, word: &str, out: &mut W) -> io::Result<()> {
    if let Err(err) = Word::with_len(word, game.board().word_len()) {
        writeln!(out, "{}", err.to_string().red())?;
        return Ok(());
    }

    for _ in 0..game.board().word_len() {
        game.handle(InputEvent::Backspace);
    }
    for c in word.chars() {
        game.handle(InputEvent::Letter(c));
    }

    match game.handle(InputEvent::Commit) {
        Step::Rejected(err) => writeln!(out, "{}", err.to_string().red())?,
        Step::Finished(_) => {
            let snapshot = game.snapshot();
            write_board(out, &snapshot)?;
            write_result(out, &snapshot)?;
        }
        Step::Continue | Step::Ignored | Step::Quit => write_board(out, &game.snapshot())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(store: &WordStore, secret: &str, settings: Settings, script: &str) -> String {
        colored::control::set_override(false);
        let game = Game::with_secret(store, GameConfig::default(), settings, Word::new(secret).unwrap());
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        play_session(game, &mut rng, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_then_exit() {
        let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
        let text = run(&store, "crane", Settings::default(), "trace\ncrane\nn\n");
        assert!(text.contains("You won in 2 attempts!"));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn rejections_are_reported_and_leave_the_game_running() {
        let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
        let text = run(&store, "crane", Settings::default(), "cr\nzzzzz\ncr4ne\n:q\n");
        assert!(text.contains("Word must be exactly 5 letters, got 2"));
        assert!(text.contains("'ZZZZZ' is not in the word list"));
        assert!(text.contains("Thanks for playing!"));
        assert!(!text.contains("You won"));
    }

    #[test]
    fn rejected_word_does_not_leak_into_next_guess() {
        let store = WordStore::from_words(&["crane", "trace"], 5).unwrap();
        let text = run(&store, "crane", Settings::default(), "zzzzz\ncrane\nq\n");
        assert!(text.contains("You won in 1 attempt!"));
    }

    #[test]
    fn hard_command_toggles_and_enforces() {
        let store = WordStore::from_words(&["brute", "trash", "touch", "truth"], 5).unwrap();
        let text = run(&store, "brute", Settings::default(), ":hard\ntrash\ntouch\ntruth\n:quit\n");
        assert!(text.contains("Hard mode on"));
        assert!(text.contains("Position 2 must be 'R'"));
        assert!(text.contains(" T   R   U   T   H "));
    }

    #[test]
    fn loss_then_restart() {
        let store = WordStore::from_words(&["crane", "slate"], 5).unwrap();
        let script = "slate\n".repeat(6) + "r\n:q\n";
        let text = run(&store, "crane", Settings::default(), &script);
        assert!(text.contains("You lost! The word was CRANE"));
        assert!(text.contains("New game started!"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let store = WordStore::from_words(&["crane"], 5).unwrap();
        let text = run(&store, "crane", Settings::default(), "");
        assert!(!text.contains("Thanks for playing!"));
    }

    #[test]
    fn toggle_returns_to_idle() {
        let store = WordStore::from_words(&["crane"], 5).unwrap();
        let mut game = Game::with_secret(
            &store,
            GameConfig::default(),
            Settings::default(),
            Word::new("crane").unwrap(),
        );
        toggle_hard_mode(&mut game);
        assert_eq!(game.state(), GameState::Idle);
        assert!(game.settings().hard_mode);
    }
}

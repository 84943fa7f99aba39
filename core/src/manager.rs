//! The turn/round state machine. `GameManager` owns every piece of game state
//! and talks to the operator only through its input and output providers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::game_states::initialize::SetupAnswer;
use crate::game_states::turn::{parse_letter, TurnAction, TurnOutcome};
use crate::game_states::GameState;
use crate::io::{InputProvider, IoError, OutputProvider};
use crate::types::{
    LetterGuess, Player, PlayerID, Players, Puzzle, Scoreboard, SpinWheel, WheelSegment,
};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0}")]
    Io(#[from] IoError),
}

/// Final standings, returned once the game is over.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct GameSummary {
    pub rounds_played: u32,
    /// `(name, banked total)`, highest first.
    pub standings: Vec<(String, u32)>,
    pub winners: Vec<String>,
}

/// Assembles a `GameManager`. Both providers are required; `build` fails
/// immediately if either is missing.
#[derive(Debug)]
pub struct GameManagerBuilder<I, O> {
    input: Option<I>,
    output: Option<O>,
    config: GameConfig,
    wheel: SpinWheel,
}

impl<I: InputProvider, O: OutputProvider> GameManagerBuilder<I, O> {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            config: GameConfig::default(),
            wheel: SpinWheel::new(),
        }
    }

    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    pub fn output(mut self, output: O) -> Self {
        self.output = Some(output);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn wheel(mut self, wheel: SpinWheel) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn build(self) -> Result<GameManager<I, O>, ConfigError> {
        let input = self.input.ok_or(ConfigError::MissingInput)?;
        let output = self.output.ok_or(ConfigError::MissingOutput)?;
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(GameManager {
            input,
            output,
            puzzle: Puzzle::new(self.config.puzzle_for_round(0)),
            config: self.config,
            wheel: self.wheel,
            rng,
            players: Players::new(),
            scoreboard: Scoreboard::new(),
            current_player: None,
            round_winner: None,
            rounds_played: 0,
            state: GameState::WaitingToStart,
        })
    }
}

impl<I: InputProvider, O: OutputProvider> Default for GameManagerBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GameManager<I, O> {
    input: I,
    output: O,
    config: GameConfig,
    wheel: SpinWheel,
    rng: StdRng,
    players: Players,
    scoreboard: Scoreboard,
    puzzle: Puzzle,
    current_player: Option<PlayerID>,
    /// Whoever solved the current round, until it is banked.
    round_winner: Option<PlayerID>,
    rounds_played: u32,
    state: GameState,
}

impl<I: InputProvider, O: OutputProvider> GameManager<I, O> {
    pub fn new(input: I, output: O, config: GameConfig) -> Result<Self, ConfigError> {
        GameManagerBuilder::new()
            .input(input)
            .output(output)
            .config(config)
            .build()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn players(&self) -> &'_ Players {
        &self.players
    }

    pub fn scoreboard(&self) -> &'_ Scoreboard {
        &self.scoreboard
    }

    pub fn puzzle(&self) -> &'_ Puzzle {
        &self.puzzle
    }

    pub fn current_player(&self) -> Option<&'_ Player> {
        self.current_player
            .and_then(|id| self.players.player(id).ok())
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn input(&self) -> &'_ I {
        &self.input
    }

    pub fn output(&self) -> &'_ O {
        &self.output
    }

    /// Run a whole game: setup, then rounds until the configured number has
    /// been solved.
    pub fn start_game(&mut self) -> Result<GameSummary, GameError> {
        self.init_game()?;

        loop {
            self.perform_turns()?;

            if self.state == GameState::RoundOver {
                self.end_round()?;
            }

            if self.state.is_terminal() {
                return self.finish_game();
            }
        }
    }

    pub fn init_game(&mut self) -> Result<(), GameError> {
        self.output.write_line("Welcome to Wheel of Fortune!")?;
        self.game_setup()?;
        self.start_new_round()
    }

    /// Register players until the operator says there are no more. The first
    /// name is always asked for, so there is at least one player.
    pub fn game_setup(&mut self) -> Result<(), GameError> {
        self.add_player()?;

        loop {
            self.set_state(GameState::WaitingForUserInput);
            self.output.write_line("Add another player? (y/n): ")?;
            let answer = self.input.read_line()?;

            match SetupAnswer::parse(&answer) {
                Some(SetupAnswer::AddAnother) => {
                    self.add_player()?;
                }
                Some(SetupAnswer::Done) => break,
                None => {
                    self.output.write_line(
                        "Invalid option. Please choose 'y' to add another player or 'n' to proceed.",
                    )?;
                }
            }
        }

        self.scoreboard.display_scores(&mut self.output)?;
        Ok(())
    }

    /// Prompt for a name until one is accepted, then register it.
    pub fn add_player(&mut self) -> Result<PlayerID, GameError> {
        loop {
            self.set_state(GameState::WaitingForUserInput);
            self.output.write_line("Please enter a new player name: ")?;
            let line = self.input.read_line()?;
            let name = line.trim();

            match self.players.add_player(name.to_string()) {
                Ok((players, player_id)) => {
                    self.players = players;
                    self.scoreboard.add_player(name);
                    debug!(player = name, ?player_id, "player added");
                    return Ok(player_id);
                }
                Err(e) => {
                    self.output.write_line(&format!("{}. Please try again.", e))?;
                }
            }
        }
    }

    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        self.puzzle = Puzzle::new(self.config.puzzle_for_round(self.rounds_played));
        self.round_winner = None;
        info!(
            round = self.rounds_played + 1,
            letters = self.puzzle.solution().len(),
            "round started"
        );
        self.set_state(GameState::RoundStarted);
        self.output
            .write_line(&format!("Round {} begins!", self.rounds_played + 1))?;
        Ok(())
    }

    /// Give every player a turn, in registration order. Stops early once the
    /// round has been solved.
    pub fn perform_turns(&mut self) -> Result<(), GameError> {
        let player_ids = self.players.player_ids().to_vec();
        for player_id in player_ids {
            let name = match self.players.player(player_id) {
                Ok(player) => player.name().to_string(),
                Err(_) => continue,
            };
            self.output.write_line(&format!("Player {}'s turn.", name))?;
            self.current_player = Some(player_id);

            let outcome = self.perform_single_turn()?;
            debug!(
                player = name.as_str(),
                ?outcome,
                points = outcome.points_earned(),
                "turn finished"
            );

            if self.state == GameState::RoundOver {
                break;
            }
        }
        Ok(())
    }

    /// Show the puzzle and ask the active player to spin or solve. Invalid
    /// menu answers re-prompt the same player.
    pub fn perform_single_turn(&mut self) -> Result<TurnOutcome, GameError> {
        self.draw_puzzle()?;

        loop {
            self.output.write_line("Type 1 to spin, 2 to solve")?;
            self.set_state(GameState::WaitingForUserInput);
            let action = self.input.read_line()?;

            match TurnAction::parse(&action) {
                Some(TurnAction::Spin) => return self.spin(),
                Some(TurnAction::Solve) => return self.solve(),
                None => {
                    self.output
                        .write_line("Invalid option. Please choose 1 to spin or 2 to solve.")?;
                }
            }
        }
    }

    pub fn spin(&mut self) -> Result<TurnOutcome, GameError> {
        self.output.write_line("Spinning the wheel...")?;
        let segment = self.wheel.spin(&mut self.rng);
        self.resolve_spin(segment)
    }

    /// Apply a wheel outcome to the active player.
    pub fn resolve_spin(&mut self, segment: WheelSegment) -> Result<TurnOutcome, GameError> {
        debug!(%segment, "wheel stopped");
        self.output
            .write_line(&format!("The wheel landed on {}.", segment))?;
        let name = self.current_name();

        match segment {
            WheelSegment::Bankrupt => {
                self.scoreboard.bankrupt(&name, &mut self.output)?;
                Ok(TurnOutcome::Bankrupt)
            }
            WheelSegment::LoseATurn => {
                self.output
                    .write_line(&format!("Sorry, {}, you lose a turn.", name))?;
                Ok(TurnOutcome::LostTurn)
            }
            WheelSegment::Points(points) => self.guess_letter(points),
        }
    }

    /// Ask for one letter worth `points`, re-prompting until the input is a
    /// single letter.
    pub fn guess_letter(&mut self, points: u32) -> Result<TurnOutcome, GameError> {
        self.set_state(GameState::GuessingLetter);
        self.output.write("Please guess a letter: ")?;

        let letter = loop {
            let line = self.input.read_line()?;
            match parse_letter(&line) {
                Some(letter) => break letter,
                None => {
                    self.output
                        .write_line("Invalid input. Please guess a single letter.")?;
                }
            }
        };

        let result = self.puzzle.guess_letter(letter);
        debug!(%letter, ?result, points, "letter guessed");

        match result {
            LetterGuess::Revealed { occurrences } => {
                let name = self.current_name();
                self.scoreboard.update_score(&name, points);
                self.output.write_line(&format!(
                    "Good guess! The letter {} appears {} {}. You have earned ${}!",
                    letter,
                    occurrences,
                    if occurrences == 1 { "time" } else { "times" },
                    points
                ))?;
            }
            LetterGuess::AlreadyGuessed => {
                self.output.write_line(&format!(
                    "Sorry, the letter {} was already correctly guessed.",
                    letter
                ))?;
            }
            LetterGuess::Miss => {
                self.output.write_line(&format!(
                    "Sorry, the letter {} is not in the puzzle.",
                    letter
                ))?;
            }
        }

        self.output.write_line(&format!(
            "Letters guessed: {}",
            self.puzzle.guessed_letters()
        ))?;
        self.draw_puzzle()?;

        Ok(TurnOutcome::Guessed {
            letter,
            result,
            points,
        })
    }

    /// One attempt at the whole phrase. A miss ends the turn but not the round.
    pub fn solve(&mut self) -> Result<TurnOutcome, GameError> {
        self.output.write("Please enter your solution: ")?;
        let attempt = self.input.read_line()?;

        if self.puzzle.is_solution(&attempt) {
            let bonus = self.config.solve_bonus;
            let name = self.current_name();
            self.puzzle.clear_guesses();
            self.scoreboard.update_score(&name, bonus);
            self.round_winner = self.current_player;
            self.output.write_line(&format!(
                "You are correct! You have solved the puzzle and earned ${}!",
                bonus
            ))?;
            info!(player = name.as_str(), "puzzle solved");
            self.set_state(GameState::RoundOver);
            Ok(TurnOutcome::Solved { bonus })
        } else {
            debug!("solve attempt missed");
            self.output.write_line("Incorrect solution.")?;
            self.set_state(GameState::GuessingLetter);
            Ok(TurnOutcome::FailedSolve)
        }
    }

    /// Bank the winner's round score, reset the scoreboard, and either start
    /// the next round or end the game.
    pub fn end_round(&mut self) -> Result<(), GameError> {
        self.puzzle.clear_guesses();
        self.rounds_played += 1;

        if let Some(winner) = self.round_winner.take() {
            let winner_name = self.players.player(winner).map(|p| p.name().to_string());
            if let Ok(name) = winner_name {
                let round_score = self.scoreboard.score(&name);
                if let Ok(players) = self.players.bank_score(winner, round_score) {
                    self.players = players;
                }
                self.output.write_line(&format!(
                    "{} banks ${} this round.",
                    name, round_score
                ))?;
            }
        }
        self.scoreboard.reset_all();
        info!(rounds_played = self.rounds_played, "round over");

        if self.rounds_played >= self.config.rounds {
            self.set_state(GameState::GameOver);
            Ok(())
        } else {
            self.start_new_round()
        }
    }

    fn finish_game(&mut self) -> Result<GameSummary, GameError> {
        self.output.write_line("Game over")?;

        let standings: Vec<(String, u32)> = self
            .players
            .standings()
            .into_iter()
            .map(|p| (p.name().to_string(), p.total_score()))
            .collect();
        for (name, total) in &standings {
            self.output.write_line(&format!("{}: ${}", name, total))?;
        }

        let winners: Vec<String> = self
            .players
            .winners()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();
        self.output
            .write_line(&format!("Congratulations, {}!", winners.join(" and ")))?;
        info!(?winners, rounds_played = self.rounds_played, "game over");

        Ok(GameSummary {
            rounds_played: self.rounds_played,
            standings,
            winners,
        })
    }

    fn draw_puzzle(&mut self) -> Result<(), GameError> {
        self.output.write_line("The puzzle is:")?;
        self.output.write_line(&self.puzzle.display())?;
        self.output.write_line("")?;
        Ok(())
    }

    fn current_name(&self) -> String {
        self.current_player()
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            debug!(from = ?self.state, to = ?state, "state transition");
            self.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameError, GameManager, GameManagerBuilder};
    use crate::config::{ConfigError, GameConfig};
    use crate::game_states::turn::TurnOutcome;
    use crate::game_states::GameState;
    use crate::io::{IoError, RecordingOutput, ScriptedInput};
    use crate::types::{LetterGuess, SpinWheel, WheelSegment};

    type TestManager = GameManager<ScriptedInput, RecordingOutput>;

    fn config(puzzles: &[&str], rounds: u32) -> GameConfig {
        GameConfig {
            rounds,
            puzzles: puzzles.iter().map(|p| p.to_string()).collect(),
            seed: Some(42),
            ..GameConfig::default()
        }
    }

    fn manager_with(lines: &[&str], wheel: SpinWheel, config: GameConfig) -> TestManager {
        GameManagerBuilder::new()
            .input(ScriptedInput::new(lines.to_vec()))
            .output(RecordingOutput::new())
            .config(config)
            .wheel(wheel)
            .build()
            .unwrap()
    }

    fn fixed_wheel(segment: WheelSegment) -> SpinWheel {
        SpinWheel::with_segments(vec![segment]).unwrap()
    }

    /// A manager with `names` registered, a round started, and the first
    /// player up. `lines` is what the players type after that.
    fn started(names: &[&str], lines: &[&str], wheel: SpinWheel) -> TestManager {
        let mut script = vec![];
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                script.push("y");
            }
            script.push(*name);
        }
        script.push("n");
        script.extend_from_slice(lines);

        let mut manager = manager_with(&script, wheel, GameConfig::default());
        manager.game_setup().unwrap();
        manager.start_new_round().unwrap();
        manager.current_player = Some(manager.players.player_ids()[0]);
        manager
    }

    #[test]
    pub fn test_build_requires_both_providers() {
        let missing_input = GameManagerBuilder::<ScriptedInput, RecordingOutput>::new()
            .output(RecordingOutput::new())
            .build();
        assert!(matches!(missing_input, Err(ConfigError::MissingInput)));

        let missing_output = GameManagerBuilder::<ScriptedInput, RecordingOutput>::new()
            .input(ScriptedInput::default())
            .build();
        assert!(matches!(missing_output, Err(ConfigError::MissingOutput)));

        let bad_config = GameManager::new(
            ScriptedInput::default(),
            RecordingOutput::new(),
            config(&[], 1),
        );
        assert!(matches!(bad_config, Err(ConfigError::NoPuzzles)));

        let manager = GameManager::new(
            ScriptedInput::default(),
            RecordingOutput::new(),
            GameConfig::default(),
        )
        .unwrap();
        assert_eq!(manager.state(), GameState::WaitingToStart);
        assert!(manager.current_player().is_none());
    }

    #[test]
    pub fn test_setup_rejects_bad_answers() {
        let mut manager = manager_with(
            &["", "Alice", "maybe", "y", "Alice", "Bob", "n"],
            SpinWheel::new(),
            GameConfig::default(),
        );
        manager.game_setup().unwrap();

        let names: Vec<_> = manager.players().players().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(manager.state(), GameState::WaitingForUserInput);
        assert_eq!(manager.input().remaining(), 0);

        let output = manager.output();
        assert!(output.contains("Player name can't be empty"));
        assert!(output.contains("Invalid option. Please choose 'y'"));
        assert!(output.contains("A player named Alice is already playing"));
        assert_eq!(output.count("Please enter a new player name"), 4);

        let lines = output.lines();
        assert_eq!(&lines[lines.len() - 2..], &["Alice: 0", "Bob: 0"]);
    }

    #[test]
    pub fn test_start_new_round() {
        let mut manager = started(&["Alice"], &[], SpinWheel::new());
        manager.puzzle.guess_letter('p');
        manager.start_new_round().unwrap();

        assert_eq!(manager.state(), GameState::RoundStarted);
        assert!(manager.puzzle().guessed().is_empty());
        assert_eq!(manager.puzzle().display(), "_ _ _ _ _ _ _ _ _ _");
    }

    #[test]
    pub fn test_correct_letter_awards_points() {
        let mut manager = started(&["Alice"], &["p"], SpinWheel::new());

        let outcome = manager.guess_letter(300).unwrap();

        assert_eq!(
            outcome,
            TurnOutcome::Guessed {
                letter: 'p',
                result: LetterGuess::Revealed { occurrences: 3 },
                points: 300,
            }
        );
        assert_eq!(manager.state(), GameState::GuessingLetter);
        assert_eq!(manager.scoreboard().score("Alice"), 300);
        assert_eq!(manager.puzzle().guessed_letters(), "p");
        assert_eq!(manager.puzzle().display(), "p _ _ _ _ p p _ _ _");
        assert!(manager.output().contains("p _ _ _ _ p p _ _ _"));
        assert!(manager.output().contains("You have earned $300!"));
    }

    #[test]
    pub fn test_repeated_and_missed_letters_score_nothing() {
        let mut manager = started(&["Alice"], &["p", "P", "z"], SpinWheel::new());

        manager.guess_letter(500).unwrap();
        let repeat = manager.guess_letter(500).unwrap();
        let miss = manager.guess_letter(500).unwrap();

        assert_eq!(repeat.points_earned(), 0);
        assert!(matches!(
            repeat,
            TurnOutcome::Guessed {
                result: LetterGuess::AlreadyGuessed,
                ..
            }
        ));
        assert!(matches!(
            miss,
            TurnOutcome::Guessed {
                result: LetterGuess::Miss,
                ..
            }
        ));
        assert_eq!(manager.scoreboard().score("Alice"), 500);
        assert_eq!(manager.puzzle().guessed_letters(), "p z");
        assert!(manager.output().contains("already correctly guessed"));
        assert!(manager.output().contains("the letter z is not in the puzzle"));
    }

    #[test]
    pub fn test_guess_reprompts_on_malformed_input() {
        let mut manager = started(&["Alice"], &["", "ab", "4", "e"], SpinWheel::new());

        let outcome = manager.guess_letter(100).unwrap();

        assert_eq!(outcome.points_earned(), 100);
        assert_eq!(
            manager
                .output()
                .count("Invalid input. Please guess a single letter."),
            3
        );
        assert_eq!(manager.input().remaining(), 0);
    }

    #[test]
    pub fn test_bankrupt_zeroes_score_without_a_guess() {
        let mut manager = started(&["Alice"], &["z"], SpinWheel::new());
        manager.scoreboard.update_score("Alice", 500);

        let outcome = manager.resolve_spin(WheelSegment::Bankrupt).unwrap();

        assert_eq!(outcome, TurnOutcome::Bankrupt);
        assert_eq!(manager.scoreboard().score("Alice"), 0);
        assert_eq!(manager.input().remaining(), 1);
        assert!(manager.puzzle().guessed().is_empty());
        assert!(manager.output().contains("Bankrupt! Alice"));
    }

    #[test]
    pub fn test_lose_a_turn() {
        let mut manager = started(&["Alice"], &["z"], SpinWheel::new());
        manager.scoreboard.update_score("Alice", 200);

        let outcome = manager.resolve_spin(WheelSegment::LoseATurn).unwrap();

        assert_eq!(outcome, TurnOutcome::LostTurn);
        assert_eq!(manager.scoreboard().score("Alice"), 200);
        assert_eq!(manager.input().remaining(), 1);
        assert!(manager.output().contains("Sorry, Alice, you lose a turn."));
    }

    #[test]
    pub fn test_spin_uses_the_wheel() {
        let mut manager = started(
            &["Alice"],
            &["1", "n"],
            fixed_wheel(WheelSegment::Points(700)),
        );

        let outcome = manager.perform_single_turn().unwrap();

        assert_eq!(outcome.points_earned(), 700);
        assert_eq!(manager.scoreboard().score("Alice"), 700);
        assert!(manager.output().contains("The wheel landed on $700."));
    }

    #[test]
    pub fn test_invalid_menu_choice_reprompts_same_player() {
        let mut manager = started(&["Alice", "Bob"], &["3"], SpinWheel::new());

        let err = manager.perform_single_turn().unwrap_err();

        assert!(matches!(err, GameError::Io(IoError::InputClosed)));
        assert_eq!(manager.state(), GameState::WaitingForUserInput);
        assert_eq!(manager.current_player().unwrap().name(), "Alice");
        assert_eq!(manager.scoreboard().score("Alice"), 0);
        assert!(manager
            .output()
            .contains("Invalid option. Please choose 1 to spin or 2 to solve."));
        assert_eq!(manager.output().count("Type 1 to spin, 2 to solve"), 2);
    }

    #[test]
    pub fn test_invalid_menu_choice_then_spin() {
        let mut manager = started(
            &["Alice"],
            &["3", "1", "p"],
            fixed_wheel(WheelSegment::Points(300)),
        );

        let outcome = manager.perform_single_turn().unwrap();

        assert_eq!(outcome.points_earned(), 300);
        assert_eq!(manager.scoreboard().score("Alice"), 300);
    }

    #[test]
    pub fn test_correct_solve_ends_round() {
        let mut manager = started(&["Alice"], &["p", "Pineapples"], SpinWheel::new());
        manager.guess_letter(100).unwrap();

        let outcome = manager.solve().unwrap();

        assert_eq!(outcome, TurnOutcome::Solved { bonus: 800 });
        assert_eq!(manager.state(), GameState::RoundOver);
        assert!(manager.puzzle().guessed().is_empty());
        assert_eq!(manager.scoreboard().score("Alice"), 900);
    }

    #[test]
    pub fn test_failed_solve_keeps_round_going() {
        let mut manager = started(&["Alice"], &["pineapple"], SpinWheel::new());

        let outcome = manager.solve().unwrap();

        assert_eq!(outcome, TurnOutcome::FailedSolve);
        assert_eq!(manager.state(), GameState::GuessingLetter);
        assert_eq!(manager.scoreboard().score("Alice"), 0);
        assert!(manager.output().contains("Incorrect solution."));
    }

    #[test]
    pub fn test_turns_rotate_and_stop_when_solved() {
        let mut manager = started(
            &["Alice", "Bob", "Carol"],
            &["1", "e", "2", "pineapples"],
            fixed_wheel(WheelSegment::Points(200)),
        );

        manager.perform_turns().unwrap();

        assert_eq!(manager.state(), GameState::RoundOver);
        assert_eq!(manager.current_player().unwrap().name(), "Bob");
        assert_eq!(manager.scoreboard().score("Alice"), 200);
        assert_eq!(manager.scoreboard().score("Bob"), 800);
        assert!(!manager.output().contains("Player Carol's turn."));
    }

    #[test]
    pub fn test_end_round_banks_the_winner() {
        let mut manager = started(
            &["Alice", "Bob"],
            &["1", "p", "2", "pineapples"],
            fixed_wheel(WheelSegment::Points(500)),
        );
        manager.perform_turns().unwrap();
        manager.end_round().unwrap();

        let totals: Vec<_> = manager
            .players()
            .players()
            .map(|p| (p.name(), p.total_score()))
            .collect();
        assert_eq!(totals, vec![("Alice", 0), ("Bob", 800)]);
        assert_eq!(manager.scoreboard().score("Alice"), 0);
        assert_eq!(manager.scoreboard().score("Bob"), 0);
        assert_eq!(manager.rounds_played(), 1);
        assert_eq!(manager.state(), GameState::RoundStarted);
    }

    #[test]
    pub fn test_full_game() {
        let mut manager = manager_with(
            &[
                "Alice", "y", "Bob", "n", // setup
                "1", "c", // Alice spins and hits
                "2", "dog", // Bob misses the solve
                "2", "CAT", // Alice solves
            ],
            fixed_wheel(WheelSegment::Points(500)),
            config(&["cat"], 1),
        );

        let summary = manager.start_game().unwrap();

        assert_eq!(manager.state(), GameState::GameOver);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.winners, vec!["Alice".to_string()]);
        assert_eq!(
            summary.standings,
            vec![("Alice".to_string(), 1300), ("Bob".to_string(), 0)]
        );
        assert_eq!(manager.input().remaining(), 0);
        assert!(manager.output().contains("Game over"));
        assert!(manager.output().contains("Congratulations, Alice!"));
    }

    #[test]
    pub fn test_puzzles_cycle_across_rounds() {
        let mut manager = manager_with(
            &["Alice", "n", "2", "cat", "2", "dog", "2", "cat"],
            SpinWheel::new(),
            config(&["cat", "dog"], 3),
        );

        let summary = manager.start_game().unwrap();

        assert_eq!(summary.rounds_played, 3);
        assert_eq!(summary.standings, vec![("Alice".to_string(), 2400)]);
        assert_eq!(manager.output().count("You are correct!"), 3);
        assert!(manager.output().contains("Round 3 begins!"));
    }

    #[test]
    pub fn test_closed_input_is_fatal() {
        let mut manager =
            manager_with(&["Alice", "n", "1"], SpinWheel::new(), config(&["cat"], 1));

        let err = manager.start_game().unwrap_err();

        assert!(matches!(err, GameError::Io(IoError::InputClosed)));
        assert!(!manager.state().is_terminal());
    }
}

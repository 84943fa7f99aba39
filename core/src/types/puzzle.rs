use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Shown in place of a letter that hasn't been guessed yet.
pub const PLACEHOLDER: char = '_';

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Render `solution` for display: letters whose lowercase form is in
/// `revealed` are shown, other letters become `PLACEHOLDER`, and anything that
/// isn't a letter passes through. Positions are separated by a single space.
pub fn hide_puzzle_solution(solution: &str, revealed: &BTreeSet<char>) -> String {
    let mut display = String::with_capacity(solution.len() * 2);
    for (i, c) in solution.chars().enumerate() {
        if i > 0 {
            display.push(' ');
        }
        if !c.is_alphabetic() || revealed.contains(&fold_case(c)) {
            display.push(c);
        } else {
            display.push(PLACEHOLDER);
        }
    }
    display
}

/// How a single letter guess resolved against the puzzle.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum LetterGuess {
    /// The letter is in the solution and hadn't been guessed this round.
    Revealed { occurrences: usize },
    /// The letter is in the solution but was already guessed this round.
    AlreadyGuessed,
    Miss,
}

/// The hidden phrase for the current round along with the letters guessed so
/// far. Guessed letters are stored lowercase.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Puzzle {
    solution: String,
    guessed: BTreeSet<char>,
}

impl Puzzle {
    #[must_use]
    pub fn new(solution: &str) -> Self {
        Self {
            solution: solution.trim().to_string(),
            guessed: BTreeSet::new(),
        }
    }

    pub fn solution(&self) -> &'_ str {
        &self.solution
    }

    pub fn guessed(&self) -> &'_ BTreeSet<char> {
        &self.guessed
    }

    /// The guessed letters, alphabetically, separated by spaces.
    pub fn guessed_letters(&self) -> String {
        self.guessed
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn display(&self) -> String {
        hide_puzzle_solution(&self.solution, &self.guessed)
    }

    /// Resolve a guess and record the letter as guessed, whatever the result.
    pub fn guess_letter(&mut self, letter: char) -> LetterGuess {
        let letter = fold_case(letter);
        let occurrences = self
            .solution
            .chars()
            .filter(|c| fold_case(*c) == letter)
            .count();

        let result = if occurrences == 0 {
            LetterGuess::Miss
        } else if self.guessed.contains(&letter) {
            LetterGuess::AlreadyGuessed
        } else {
            LetterGuess::Revealed { occurrences }
        };
        self.guessed.insert(letter);
        result
    }

    /// Case-insensitive comparison against the solution, ignoring surrounding
    /// whitespace.
    pub fn is_solution(&self, attempt: &str) -> bool {
        attempt.trim().to_lowercase() == self.solution.to_lowercase()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.solution
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.guessed.contains(&fold_case(c)))
    }

    pub fn clear_guesses(&mut self) {
        self.guessed.clear();
    }
}

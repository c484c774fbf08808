//! Single-letter rover commands and the table that maps letters to them.
//!
//! [`Command`] is a closed set of behaviors dispatched through one `match`.
//! A [`CommandSet`] is built once per mission and decides which letter runs
//! which behavior; [`CommandSet::register`] binds extra letters.

use std::collections::HashMap;

use crate::error::Result;
use crate::rover::{Rover, RoverState};
use crate::types::CommandKind;

/// A behavior a rover can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rotate 90 degrees left (`L`).
    Left,
    /// Rotate 90 degrees right (`R`).
    Right,
    /// Move one cell forward (`F`).
    Forward,
    /// Move two cells forward (`H`), as two forward steps.
    Hop,
    /// Store position and heading in the rover memory (`P`).
    Photo,
    /// Store position in the rover memory (`S`).
    Sample,
    /// Letter with no registered behavior. Executes as a no-op.
    Unknown(char),
}

impl Command {
    /// Scent class this command records and checks scents under.
    ///
    /// Hop shares the forward class.
    pub fn kind(self) -> Option<CommandKind> {
        match self {
            Command::Left => Some(CommandKind::Left),
            Command::Right => Some(CommandKind::Right),
            Command::Forward | Command::Hop => Some(CommandKind::Forward),
            Command::Photo => Some(CommandKind::Photo),
            Command::Sample => Some(CommandKind::Sample),
            Command::Unknown(_) => None,
        }
    }

    /// Runs the command against `rover` and returns the state it is left in.
    pub fn execute(self, rover: &mut Rover<'_>) -> Result<RoverState> {
        match self {
            Command::Left => Ok(rover.turn_left()),
            Command::Right => Ok(rover.turn_right()),
            Command::Forward => rover.move_forward(CommandKind::Forward),
            Command::Hop => match rover.move_forward(CommandKind::Forward)? {
                RoverState::Active => rover.move_forward(CommandKind::Forward),
                RoverState::Lost => Ok(RoverState::Lost),
            },
            Command::Photo => Ok(rover.record_photo()),
            Command::Sample => Ok(rover.record_sample()),
            Command::Unknown(_) => Ok(rover.state()),
        }
    }
}

/// Letter to [`Command`] table used while executing instruction strings.
///
/// Letters are matched case-insensitively. Anything not in the table resolves
/// to [`Command::Unknown`].
#[derive(Clone, Debug)]
pub struct CommandSet {
    commands: HashMap<char, Command>,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandSet {
    /// Table with no letters bound. Every letter resolves to `Unknown`.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// The standard alphabet: `L R F H P S`.
    pub fn standard() -> Self {
        let mappings = [
            ('L', Command::Left),
            ('R', Command::Right),
            ('F', Command::Forward),
            ('H', Command::Hop),
            ('P', Command::Photo),
            ('S', Command::Sample),
        ];

        let mut set = Self::empty();
        for (letter, command) in mappings {
            set.register(letter, command);
        }
        set
    }

    /// Binds `letter` to `command`, replacing any previous binding.
    pub fn register(&mut self, letter: char, command: Command) {
        self.commands.insert(letter.to_ascii_uppercase(), command);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, letter: char, command: Command) -> Self {
        self.register(letter, command);
        self
    }

    pub fn resolve(&self, letter: char) -> Command {
        self.commands
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(Command::Unknown(letter))
    }

    /// Resolves every letter of `instructions`, in order. Whitespace is not
    /// part of the alphabet and resolves to [`Command::Unknown`].
    pub fn parse<'a>(&'a self, instructions: &'a str) -> impl Iterator<Item = Command> + 'a {
        instructions.chars().map(|c| self.resolve(c))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_letters_resolve() {
        let set = CommandSet::standard();
        assert_eq!(set.resolve('L'), Command::Left);
        assert_eq!(set.resolve('R'), Command::Right);
        assert_eq!(set.resolve('F'), Command::Forward);
        assert_eq!(set.resolve('H'), Command::Hop);
        assert_eq!(set.resolve('P'), Command::Photo);
        assert_eq!(set.resolve('S'), Command::Sample);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn letters_are_case_insensitive() {
        let set = CommandSet::standard();
        assert_eq!(set.resolve('f'), Command::Forward);
        assert_eq!(set.resolve('h'), Command::Hop);
    }

    #[test]
    fn unknown_letters_keep_the_offending_char() {
        let set = CommandSet::standard();
        assert_eq!(set.resolve('X'), Command::Unknown('X'));
        assert_eq!(set.resolve('?'), Command::Unknown('?'));
        assert!(CommandSet::empty().is_empty());
        assert_eq!(CommandSet::empty().resolve('F'), Command::Unknown('F'));
    }

    #[test]
    fn registered_letters_extend_the_alphabet() {
        let set = CommandSet::standard().with('b', Command::Hop);
        assert_eq!(set.resolve('B'), Command::Hop);
        assert_eq!(set.resolve('b'), Command::Hop);
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn hop_shares_the_forward_scent_class() {
        assert_eq!(Command::Hop.kind(), Command::Forward.kind());
        assert_eq!(Command::Left.kind(), Some(CommandKind::Left));
        assert_eq!(Command::Unknown('Z').kind(), None);
    }

    #[test]
    fn parse_keeps_whitespace_as_unknown() {
        let set = CommandSet::standard();
        let commands: Vec<Command> = set.parse("F L\tx").collect();
        assert_eq!(
            commands,
            vec![
                Command::Forward,
                Command::Unknown(' '),
                Command::Left,
                Command::Unknown('\t'),
                Command::Unknown('x'),
            ]
        );
    }
}

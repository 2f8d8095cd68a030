//! Line-oriented front end: reads commands, drives the engine, prints what happened.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use prismatch_core::{PlayEngine, RandomTokens, SelectOutcome, TokenSource};

use crate::command::{Command, HELP};
use crate::leaderboard::Leaderboard;
use crate::render::{describe_step, render_board, render_falls};
use crate::share::share_text;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Screen {
    Playing,
    AwaitingNickname,
    Finished,
}

pub struct App<W, S = RandomTokens> {
    engine: PlayEngine<S>,
    leaderboard: Leaderboard,
    top: usize,
    out: W,
    screen: Screen,
}

impl<W: Write, S: TokenSource + Clone> App<W, S> {
    pub fn new(engine: PlayEngine<S>, top: usize, out: W) -> Self {
        Self {
            engine,
            leaderboard: Leaderboard::new(),
            top,
            out,
            screen: Screen::Playing,
        }
    }

    pub fn engine(&self) -> &PlayEngine<S> {
        &self.engine
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.show_status()?;
        for line in input.lines() {
            let line = line.context("reading command")?;
            self.handle_line(&line)?;
            if self.screen == Screen::Finished {
                break;
            }
        }
        self.out.flush().context("flushing output")
    }

    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        if self.screen == Screen::AwaitingNickname {
            if line.parse::<Command>() == Ok(Command::Quit) {
                self.screen = Screen::Finished;
                return Ok(());
            }
            return self.submit_nickname(line);
        }

        match line.parse::<Command>() {
            Ok(command) => self.update(command),
            Err(err) => {
                log::debug!("Bad command {line:?}: {err}");
                writeln!(self.out, "{err}")?;
                Ok(())
            }
        }
    }

    fn update(&mut self, command: Command) -> Result<()> {
        log::debug!("Command: {command:?}");
        match command {
            Command::Select(pos) => {
                let outcome = self.engine.select(pos);
                self.show_outcome(outcome)
            }
            Command::Swap(from, to) => {
                let outcome = self.engine.swap(from, to);
                self.show_outcome(outcome)
            }
            Command::Hint => {
                match self.engine.session().hint() {
                    Some((from, to)) => writeln!(self.out, "try swapping {from} with {to}")?,
                    None => writeln!(self.out, "no swap on this board makes a match")?,
                }
                Ok(())
            }
            Command::Reset => {
                self.engine.reset();
                writeln!(self.out, "new game")?;
                self.show_status()
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => {
                self.screen = Screen::Finished;
                Ok(())
            }
        }
    }

    fn show_outcome(&mut self, outcome: SelectOutcome) -> Result<()> {
        match outcome {
            SelectOutcome::Ignored => {
                writeln!(self.out, "ignored")?;
            }
            SelectOutcome::Selected(pos) => {
                writeln!(self.out, "selected {pos}")?;
                self.show_board()?;
            }
            SelectOutcome::Rejected { from, to } => {
                writeln!(self.out, "swapping {from} with {to} makes no match")?;
                self.show_board()?;
            }
            SelectOutcome::Accepted { report, game_over } => {
                let (from, to) = report.swap;
                writeln!(self.out, "swapped {from} with {to}")?;
                for step in &report.steps {
                    writeln!(self.out, "{}", describe_step(step))?;
                    log::debug!("Fall distances:\n{}", render_falls(step));
                }
                writeln!(self.out, "+{} points", report.points())?;
                self.show_status()?;
                if game_over {
                    self.finish_game()?;
                }
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let board = render_board(self.engine.board(), self.engine.selection());
        write!(self.out, "{board}")?;
        Ok(())
    }

    fn show_status(&mut self) -> Result<()> {
        self.show_board()?;
        writeln!(
            self.out,
            "score {} | moves left {} | combo {}",
            self.engine.score(),
            self.engine.moves_remaining(),
            self.engine.combo()
        )?;
        if !self.engine.is_game_over() && !self.engine.session().has_legal_move() {
            writeln!(self.out, "no swap on this board makes a match, `reset` to start over")?;
        }
        Ok(())
    }

    fn finish_game(&mut self) -> Result<()> {
        writeln!(self.out, "game over! final score {}", self.engine.score())?;
        writeln!(self.out, "enter a nickname for the leaderboard (blank to skip, `quit` to leave):")?;
        self.screen = Screen::AwaitingNickname;
        Ok(())
    }

    fn submit_nickname(&mut self, nickname: &str) -> Result<()> {
        let Some(score) = self.engine.session().final_score() else {
            self.screen = Screen::Playing;
            return Ok(());
        };

        if self.leaderboard.submit(nickname, score) {
            log::info!("Recorded {score} for {:?}", nickname.trim());
        }
        if let Some(rank) = self.leaderboard.rank(nickname) {
            writeln!(self.out, "{} is ranked #{rank}", nickname.trim())?;
        }
        writeln!(self.out, "leaderboard:")?;
        for (rank, entry) in self.leaderboard.top(self.top).iter().enumerate() {
            writeln!(self.out, "{:>3}. {:<16} {}", rank + 1, entry.identifier, entry.score)?;
        }
        writeln!(self.out, "{}", share_text(score))?;
        writeln!(self.out, "type `reset` to play again or `quit` to leave")?;
        self.screen = Screen::Playing;
        Ok(())
    }
}

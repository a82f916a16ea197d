//! Terminal presentation: banners, prompts and pauses

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use rpsls_logic::{GameError, MoveKind, Participant, Presentation, Prompt, RoundResult, Side};
use thiserror::Error;

const TITLE: &str = "rock-paper-scissors-spock-lizard";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Plays the game over a line-based reader and a writer
pub struct ConsolePresenter<I, O> {
    input: I,
    output: O,
    clear_screen: bool,
    winning_score: u32,
}

impl<I: BufRead, O: Write> ConsolePresenter<I, O> {
    pub fn new(input: I, output: O, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
            winning_score: 0,
        }
    }

    /// Ask until a non-blank name is typed
    pub fn ask_name(&mut self) -> Result<String, ConsoleError> {
        loop {
            self.prompt("What's your name?");
            let name = self.read_line()?;
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.prompt("Sorry, you must enter a value.\n");
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }

    /// Wait for Enter; a closed input is noticed at the next prompt
    fn pause(&mut self, message: &str) {
        self.say(message);
        if let Err(err) = self.read_line() {
            tracing::debug!(%err, "pause ended without input");
        }
    }

    fn prompt(&mut self, message: &str) {
        self.say(&format!("=> {}", message));
    }

    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{}", line) {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    fn banner(&mut self, title: &str) {
        let rule = "#".repeat(title.len() + 6);
        self.say(&rule);
        self.say(&format!("## {} ##", title.to_uppercase()));
        self.say(&rule);
    }

    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(err) = crossterm::execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::warn!(%err, "failed to clear screen");
        }
    }

    fn selection_menu(&mut self) {
        for kind in MoveKind::ALL {
            self.say(&format!("      * {} ({})", kind.title(), kind.short_code()));
        }
    }
}

impl<I: BufRead, O: Write> Presentation for ConsolePresenter<I, O> {
    type Error = ConsoleError;

    fn request_token(&mut self, prompt: Prompt) -> Result<String, Self::Error> {
        match prompt {
            Prompt::Move => {
                self.selection_menu();
                self.prompt("Choose one, you also can type abbreviations:");
            }
            Prompt::Replay => self.say("Would you like to play again? (yes/y or no/n)"),
        }
        self.read_line()
    }

    fn report_invalid_input(&mut self, reason: &GameError) {
        self.prompt(&format!("Sorry, invalid choice: {}", reason));
    }

    fn report_round_outcome(
        &mut self,
        round: &RoundResult,
        human: &Participant,
        computer: &Participant,
    ) {
        self.say("");
        self.say(&format!("{} chose {}.", human.name(), round.human_move));
        self.say(&format!("{} chose {}.", computer.name(), round.computer_move));

        let winner = match round.winner() {
            None => {
                self.say("It's a tie!");
                None
            }
            Some(Side::Human) => Some(human),
            Some(Side::Computer) => Some(computer),
        };
        if let Some(winner) = winner {
            if let Some(message) = &round.message {
                self.say(&format!("===>  {}   <===", message));
            }
            self.say("");
            self.say(&format!("{} won this round!", winner.name()));
        }
        if let Some(quip) = &round.quip {
            self.say(&format!("{}: \"{}\"", computer.name(), quip));
        }

        let decided = round.human_score.max(round.computer_score) >= self.winning_score;
        if !decided {
            self.say("");
            self.pause("Hit 'Enter' to play the next round...");
        }
    }

    fn report_session_winner(&mut self, winner: &Participant) {
        self.say("");
        self.say("================================");
        self.say("           GAME OVER            ");
        self.say("");
        self.say(&format!("   {} won the game! ", winner.name()));
        self.say("================================");
    }

    fn report_goodbye(&mut self) {
        self.say("");
        self.say("Thanks for playing, good bye!");
    }

    fn display_text(&mut self, text: &str) {
        self.say(&format!("  \"{}\"", text));
    }

    fn report_welcome(&mut self, human: &Participant, computer: &Participant) {
        self.clear();
        self.say("");
        self.say(&format!(
            "Welcome to Rock, Paper, Scissors, Spock, Lizard, {}!",
            human.name()
        ));
        self.say(&format!("Today, you are playing against ## {} ##", computer.name()));
        if let Some(persona) = computer.persona() {
            self.say(persona.describe().as_str());
        }
        self.say("");
        self.pause("Press Enter to start the game...");
    }

    fn report_scoreboard(&mut self, human: &Participant, computer: &Participant, winning_score: u32) {
        self.winning_score = winning_score;
        self.clear();
        self.banner(TITLE);
        self.say("");
        self.say("================================");
        self.say("           SCOREBOARD           ");
        self.say(&format!("   (Player reaching {} wins)", winning_score));
        self.say("");
        self.say(&format!(
            "  {} | {} - {} | {}",
            human.name(),
            human.score(),
            computer.score(),
            computer.name()
        ));
        self.say("================================");
    }

    fn report_move_history(&mut self, human: &Participant, computer: &Participant) {
        self.say("");
        for participant in [human, computer] {
            self.say(&format!(
                "{}'s moves so far: {}",
                participant.name(),
                participant.history_names().join(" - ")
            ));
        }
        self.say("");
    }
}

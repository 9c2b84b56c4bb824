//! Terminal front-end for the card duel.
//!
//! Commands: a slot number picks that card, `i <slot>` previews it, an
//! empty line continues, `r` asks for a restart, `reset` zeroes the score,
//! `q` quits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use card_duel::logging::init_logging;
use card_duel::{
    Acknowledgement, ActionLabel, CardCatalog, CardDefinition, CardId, ConfigError, DuelConfig,
    DuelFeedback, DuelOutcome, FeedbackError, RoundController, RoundPhase, Score, Selection, Side,
    UniformPicker,
};

#[derive(Debug, Parser)]
#[command(name = "duel", about = "Pick a face-down card and duel the computer")]
struct Args {
    /// JSON config file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Cards per hand, overrides the config file.
    #[arg(long, value_name = "CARDS")]
    hand_size: Option<usize>,

    /// Log level (RUST_LOG takes precedence).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: Level,
}

struct Terminal<W: Write> {
    out: W,
    /// Set once a write fails; the session loop stops on it.
    closed: bool,
}

impl<W: Write> Terminal<W> {
    fn new(out: W) -> Self {
        Self { out, closed: false }
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        if self.closed {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::debug!(error = %err, "output closed");
            self.closed = true;
        }
    }
}

impl<W: Write> DuelFeedback for Terminal<W> {
    fn render_hand(&mut self, side: Side, cards: &[CardId]) {
        let slots: Vec<String> = (1..=cards.len()).map(|slot| format!("[{slot}]")).collect();
        match side {
            Side::Player => self.line(format_args!("Your hand:     {}", slots.join(" "))),
            Side::Computer => self.line(format_args!("Opponent hand: {} face-down cards", cards.len())),
        }
    }

    fn clear_hands(&mut self) {
        self.line("");
    }

    fn reveal_cards(&mut self, player: &CardDefinition, computer: &CardDefinition) {
        self.line(format_args!("You played {} ({})", player.name, player.card_type));
        self.line(format_args!("Computer played {} ({})", computer.name, computer.card_type));
    }

    fn play_feedback(&mut self, outcome: DuelOutcome) -> Result<(), FeedbackError> {
        if let Err(err) = write!(self.out, "\x07").and_then(|()| self.out.flush()) {
            self.closed = true;
            return Err(err.into());
        }
        tracing::debug!(cue = outcome.as_str(), "cue played");
        Ok(())
    }

    fn display_score(&mut self, score: &Score) {
        self.line(score);
    }

    fn display_outcome_message(&mut self, label: &ActionLabel) {
        self.line(format_args!("[ {label} ]  press enter to continue"));
    }

    fn show_card_details(&mut self, card: &CardDefinition) {
        self.line(format_args!("{} | {} | {}", card.name, card.attribute_line(), card.art));
    }
}

fn load_config(args: &Args) -> Result<DuelConfig> {
    let config = match &args.config {
        Some(path) => DuelConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DuelConfig::default(),
    };
    apply_overrides(config, args.seed, args.hand_size).context("validating command-line overrides")
}

/// Layer command-line values over a loaded config and re-validate.
fn apply_overrides(
    mut config: DuelConfig,
    seed: Option<u64>,
    hand_size: Option<usize>,
) -> Result<DuelConfig, ConfigError> {
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(hand_size) = hand_size {
        config.hand_size = hand_size;
    }
    config.validate()?;
    Ok(config)
}

/// Map a 1-based slot typed by the user to the card in that slot.
fn parse_slot(hand: &[CardId], slot: &str) -> Option<CardId> {
    let slot: usize = slot.trim().parse().ok()?;
    hand.get(slot.checked_sub(1)?).copied()
}

fn slot_card<W: Write>(ctl: &RoundController<UniformPicker, Terminal<W>>, slot: &str) -> Option<CardId> {
    parse_slot(ctl.hand(Side::Player), slot)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    let config = load_config(&args)?;
    let catalog = CardCatalog::standard().context("building card catalog")?;
    let terminal = Terminal::new(io::stdout());
    let mut ctl = RoundController::with_config(catalog, config, terminal)
        .context("creating session")?;

    ctl.on_session_ready();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if ctl.feedback().closed {
            break;
        }
        let line = line.context("reading input")?;
        let command = line.trim();

        match command {
            "q" | "quit" => break,
            "r" => {
                if !ctl.prompt_restart() {
                    ctl.feedback_mut().line("Nothing to restart yet.");
                }
            }
            "reset" => {
                ctl.reset_session();
                ctl.start_round();
            }
            "" | "c" => match ctl.on_user_acknowledge() {
                Acknowledgement::NextRound => {
                    ctl.start_round();
                }
                Acknowledgement::Restarted => {}
                Acknowledgement::Ignored if ctl.phase() == RoundPhase::Idle => {
                    ctl.start_round();
                }
                Acknowledgement::Ignored => {}
            },
            _ if command.starts_with('i') => {
                let shown = slot_card(&ctl, &command[1..]).is_some_and(|id| ctl.on_user_hover(id));
                if !shown {
                    ctl.feedback_mut().line("No card in that slot.");
                }
            }
            _ => match slot_card(&ctl, command) {
                Some(id) => {
                    if let Selection::Ignored = ctl.on_user_select(id) {
                        ctl.feedback_mut().line("Wait for the next deal.");
                    }
                }
                None => ctl.feedback_mut().line("Pick a slot number, `i <slot>`, enter, `r`, `reset` or `q`."),
            },
        }
    }

    Ok(())
}

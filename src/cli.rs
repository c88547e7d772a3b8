//! Command-line interface for strictly_minimax.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_minimax::{Board, ConfigOverrides, Mark};

/// Strictly Minimax - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Score every move of a position
    Suggest {
        /// Board as nine cells, e.g. "XO./.X./..O"
        board: Board,

        /// Mark to analyse for (defaults to the side to move)
        #[arg(long, value_enum)]
        mark: Option<MarkArg>,

        /// Search depth
        #[arg(long, default_value_t = strictly_minimax::DEFAULT_DEPTH)]
        depth: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options for an interactive game
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Two humans share the keyboard
    #[arg(long)]
    pub vs_human: bool,

    /// The computer opens as X
    #[arg(long)]
    pub computer_first: bool,

    /// Search depth for the computer
    #[arg(long)]
    pub depth: Option<u32>,
}

impl From<PlayArgs> for ConfigOverrides {
    fn from(args: PlayArgs) -> Self {
        Self {
            vs_human: args.vs_human,
            computer_first: args.computer_first,
            depth: args.depth,
        }
    }
}

/// Mark selector for the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_twenty48::core::Game;
use tui_twenty48::input::{handle_key_event, should_quit};
use tui_twenty48::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_twenty48::types::{GameAction, DEFAULT_BOARD_SIZE, DEFAULT_WIN_TILE};

#[derive(Parser, Debug)]
struct Args {
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Tile value that ends the game in a win (a power of two).
    #[arg(long, default_value_t = DEFAULT_WIN_TILE)]
    target: u32,
    /// Seed for a reproducible tile stream (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    // Build the game before touching the terminal so argument errors print
    // on the normal screen.
    let mut game = Game::with_target(args.size, args.target, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    draw_frame(term, &view, game, &mut fb)?;

    loop {
        // Block until the next event; the board only changes on input.
        let redraw = match event::read()? {
            Event::Key(key) => {
                // Terminal auto-repeat counts as input, so held arrows keep
                // sliding tiles.
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }

                if should_quit(key) {
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => game.apply(direction).moved,
                    Some(GameAction::Restart) => {
                        game.restart();
                        true
                    }
                    None => false,
                }
            }
            Event::Resize(..) => true,
            _ => false,
        };

        if redraw {
            draw_frame(term, &view, game, &mut fb)?;
        }
    }
}

fn draw_frame(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(game, Viewport::new(w, h), fb);
    term.draw(fb)
}

//! Terminal Connect Four runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Player colors are configurable with `--p1-color`/`--p2-color`; the
//! default palette is the classic red vs yellow.

use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_connect_four::core::GameState;
use tui_connect_four::input::{handle_key_event, should_quit, InputHandler};
use tui_connect_four::term::{parse_color, GameView, Palette, TerminalRenderer, Viewport, COLOR_NAMES};
use tui_connect_four::types::{GameAction, TICK_MS};

fn usage() -> String {
    format!(
        "usage: tui-connect-four [--p1-color <name>] [--p2-color <name>]\n\
         colors: {}",
        COLOR_NAMES.join(", ")
    )
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Palette> {
    let mut palette = Palette::default();
    let mut args = args;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--p1-color" | "--p2-color" => {
                let name = args
                    .next()
                    .ok_or_else(|| anyhow!("{arg} needs a value\n{}", usage()))?;
                let color = parse_color(&name)
                    .ok_or_else(|| anyhow!("unknown color `{name}`\n{}", usage()))?;
                if arg == "--p1-color" {
                    palette.one = color;
                } else {
                    palette.two = color;
                }
            }
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            _ => bail!("unknown argument `{arg}`\n{}", usage()),
        }
    }

    if palette.one == palette.two {
        bail!("players need distinct colors\n{}", usage());
    }
    Ok(palette)
}

fn main() -> Result<()> {
    let palette = parse_args(std::env::args().skip(1))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, palette);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, palette: Palette) -> Result<()> {
    let mut game = GameState::new();

    // Chunkier cells than the 2x1 default read better for a 7x6 grid.
    let view = GameView::new(4, 2).with_palette(palette);
    let mut input_handler = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            game.apply_action(action);
                        }

                        if let Some(action) = handle_key_event(key) {
                            match action {
                                GameAction::MoveLeft | GameAction::MoveRight => {
                                    // Handled by the DAS input handler above.
                                }
                                GameAction::SelectColumn(col) => {
                                    // Digit keys both select and drop, like
                                    // clicking a column header.
                                    if game.apply_action(GameAction::SelectColumn(col)) {
                                        game.apply_action(GameAction::Drop);
                                    }
                                }
                                _ => {
                                    game.apply_action(action);
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                game.apply_action(action);
            }
        }
    }
}

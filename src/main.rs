use anyhow::{Result, anyhow};
use clap::Parser;
use slider_solver::{
    SolveError, SolveResult, Strategy,
    action::format_actions,
    board::Puzzle,
    solve,
};
use std::io::{IsTerminal, Write, stderr};
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file: a `<width>x<height>` line, then the initial and desired states
    file: PathBuf,
    /// Search strategy: BFS, G or A*
    strategy: String,
    /// Heuristic for G and A*: mt, mt-tiles, md or md-legacy
    heuristic: Option<String>,
    /// Print the board after every move of the solution
    #[arg(long)]
    steps: bool,
    /// Do not draw a progress spinner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let strategy = Strategy::resolve(&cli.strategy, cli.heuristic.as_deref())?;
    let puzzle = Puzzle::from_file(&cli.file)?;

    let result = with_spinner("Solving the puzzle...", cli.quiet, || {
        solve(&puzzle.initial, &puzzle.desired, strategy)
    })
    .map_err(|err| match err {
        SolveError::TileNotFound(tile) => anyhow!(
            "tile '{}' does not exist in state; initial and desired boards hold different tiles",
            puzzle.labels.name(tile)
        ),
        err => err.into(),
    })?;

    print_report(&cli, &result);
    if cli.steps {
        print_steps(&puzzle, &result)?;
    }
    Ok(())
}

fn print_report(cli: &Cli, result: &SolveResult) {
    let heuristic = cli.heuristic.as_deref().unwrap_or("none");
    println!("time taken: {} secs", format_elapsed(result.elapsed));
    println!("file: {}", cli.file.display());
    println!(
        "strategy: {} (heuristic: {})",
        cli.strategy.to_uppercase(),
        heuristic.to_lowercase()
    );
    println!("nodes followed: {}", result.nodes_closed);
    println!("solution:");
    match &result.actions {
        Some(actions) => println!("{}", format_actions(actions)),
        None => println!("no solution found."),
    }
}

fn print_steps(puzzle: &Puzzle, result: &SolveResult) -> Result<()> {
    let Some(actions) = &result.actions else {
        return Ok(());
    };
    let mut board = puzzle.initial.clone();
    println!("\n===== STEPS =====");
    println!("{}", board.pretty_print(&puzzle.labels));
    let total = actions.len();
    for (index, &action) in actions.iter().enumerate() {
        board = board
            .apply_move(action)?
            .ok_or_else(|| anyhow!("Move {action} leaves the board at step {}", index + 1))?;
        println!("{:03}/{total:03} {action}", index + 1);
        println!("{}", board.pretty_print(&puzzle.labels));
    }
    Ok(())
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, quiet: bool, f: F) -> T {
    if quiet || !stderr().is_terminal() {
        return f();
    }

    let spinning = Arc::new(AtomicBool::new(true));
    let spinning_clone = Arc::clone(&spinning);
    let message = message.to_string();

    let handle = std::thread::spawn(move || {
        let spinner_chars = ['|', '/', '-', '\\'];
        let mut i = 0;
        // stderr is shared with the logger; lock per write.
        let draw = |text: &str| {
            let mut handle = stderr().lock();
            let _ = write!(handle, "{text}");
            let _ = handle.flush();
        };

        draw("\x1b[?25l"); // hide cursor
        while spinning_clone.load(Ordering::Relaxed) {
            let spinner_char = spinner_chars[i % spinner_chars.len()];
            draw(&format!("\r{spinner_char} {message}"));
            std::thread::sleep(Duration::from_millis(100));
            i += 1;
        }
        draw("\r\x1b[2K\r\x1b[?25h"); // clear line and show cursor
    });

    let result = f();
    spinning.store(false, Ordering::Relaxed);
    let _ = handle.join();
    result
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.5}", elapsed.as_secs_f64())
}

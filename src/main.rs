//! Neon Jump headless runner
//!
//! Loads a level and plays it at a fixed 60 Hz frame rate, jumping at the
//! given x positions, then reports how the attempt went.
//!
//! ```text
//! neon-jump <level.json> [--tuning <file>] [--jump-at <x>]... [--seconds <n>] [--dump-frame]
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use neon_jump::{
    Session, Tuning,
    consts::SIM_DT,
    sim::{GameEvent, TickInput},
};

/// Command line problems
#[cfg(not(target_arch = "wasm32"))]
#[derive(thiserror::Error, Debug)]
enum ArgsError {
    #[error("usage: neon-jump <level.json> [--tuning <file>] [--jump-at <x>]... [--seconds <n>] [--dump-frame]")]
    Usage,
    #[error("{flag} expects a number, got {value:?}")]
    NotANumber { flag: &'static str, value: String },
    #[error("{0} expects a value")]
    MissingValue(&'static str),
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct RunOptions {
    level: String,
    tuning: Option<String>,
    /// Player x positions to jump at, ascending
    jump_at: Vec<f32>,
    seconds: f32,
    dump_frame: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl RunOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut level = None;
        let mut options = Self {
            level: String::new(),
            tuning: None,
            jump_at: Vec::new(),
            seconds: 60.0,
            dump_frame: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tuning" => {
                    options.tuning = Some(args.next().ok_or(ArgsError::MissingValue("--tuning"))?);
                }
                "--jump-at" => options.jump_at.push(number("--jump-at", args.next())?),
                "--seconds" => options.seconds = number("--seconds", args.next())?,
                "--dump-frame" => options.dump_frame = true,
                other if level.is_none() && !other.starts_with("--") => {
                    level = Some(other.to_string());
                }
                _ => return Err(ArgsError::Usage),
            }
        }

        options.level = level.ok_or(ArgsError::Usage)?;
        options.jump_at.sort_by(f32::total_cmp);
        Ok(options)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn number(flag: &'static str, value: Option<String>) -> Result<f32, ArgsError> {
    let value = value.ok_or(ArgsError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ArgsError::NotANumber { flag, value })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let options = match RunOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    log::info!("Neon Jump (headless) starting...");

    let tuning = options
        .tuning
        .as_deref()
        .map(Tuning::load)
        .unwrap_or_default();
    let mut session = Session::new(tuning);

    if !session.load_level(&options.level) {
        if let Some(e) = session.last_load_error() {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    }

    let max_frames = (options.seconds / SIM_DT).ceil() as u64;
    let mut next_jump = 0;
    let mut frames = 0;

    while frames < max_frames && !session.is_level_finished() {
        let jump = session.state().is_some_and(|state| {
            options
                .jump_at
                .get(next_jump)
                .is_some_and(|&x| state.player.can_jump && state.player.pos.x >= x)
        });
        if jump {
            next_jump += 1;
        }

        session.update(
            &TickInput {
                jump,
                pause: false,
            },
            SIM_DT,
        );
        frames += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::Died { cause } => println!("died ({cause:?}) after {frames} frames"),
                GameEvent::Restarted { deaths } => {
                    println!("restart #{deaths}");
                    next_jump = 0;
                }
                _ => {}
            }
        }
    }

    if options.dump_frame {
        if let Some(view) = session.frame_view() {
            match serde_json::to_string_pretty(&view) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("Could not serialize frame: {e}"),
            }
        }
    }

    let seconds = frames as f32 * SIM_DT;
    if session.is_level_finished() {
        println!("finished in {seconds:.2}s with {} deaths", session.score());
        ExitCode::SUCCESS
    } else {
        println!("gave up after {seconds:.2}s with {} deaths", session.score());
        ExitCode::FAILURE
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; embed the library instead
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RunOptions, ArgsError> {
        RunOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let options = parse(&[
            "level.json",
            "--jump-at",
            "900",
            "--jump-at",
            "250.5",
            "--seconds",
            "5",
        ])
        .unwrap();
        assert_eq!(options.level, "level.json");
        assert_eq!(options.jump_at, vec![250.5, 900.0]);
        assert_eq!(options.seconds, 5.0);
        assert!(options.tuning.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(&[]), Err(ArgsError::Usage)));
        assert!(matches!(
            parse(&["a.json", "--seconds", "soon"]),
            Err(ArgsError::NotANumber { .. })
        ));
        assert!(matches!(
            parse(&["a.json", "--tuning"]),
            Err(ArgsError::MissingValue("--tuning"))
        ));
        assert!(matches!(parse(&["a.json", "b.json"]), Err(ArgsError::Usage)));
    }
}

use std::path::PathBuf;

use cubie_core::{CubeState, Face, ScrambleParams, Twist, format_twists, parse_twists};
use cubie_prefs::Preferences;
use cubie_view::{CubeSimulation, KeyInput, Status};
use eyre::{Context, Result, eyre};
use itertools::Itertools;
use serde::Serialize;
use web_time::{Duration, Instant};

/// Simulated frame length for headless runs.
const FRAME: Duration = Duration::from_micros(16_667);
/// Frames after which a headless run is considered stuck.
const MAX_FRAMES: u64 = 1_000_000;

#[derive(Debug, clap::Parser)]
#[command(version, about = "3x3x3 twisty puzzle simulator", long_about = None)]
pub(crate) struct Args {
    /// Preferences file to load
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a random scramble
    Scramble {
        /// Number of twists (default from preferences)
        #[arg(short, long)]
        length: Option<u32>,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<String>,
        /// Print the scramble parameters as JSON
        #[arg(long)]
        json: bool,
    },
    /// Animate twists on a cube and print the session as JSON
    Apply {
        /// Twists in standard notation, such as `R U' F2`
        #[arg(required = true)]
        moves: Vec<String>,
        /// Scramble the cube with this seed first
        #[arg(long)]
        from_scramble: Option<String>,
    },
    /// Simulate typed keys and print the session as JSON
    ///
    /// Face letters twist clockwise (uppercase counterclockwise), `2` doubles
    /// the previous twist, and `'` undoes it. Each key is pressed once the
    /// previous twist has finished.
    Keys {
        /// Keys to press, in order
        keys: String,
    },
    /// Apply the checkerboard pattern and print each face
    Checkerboard,
}

/// Result of a headless session.
#[derive(Serialize, Debug)]
struct SessionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    scramble: Option<ScrambleOutput>,
    history: Vec<String>,
    status: Status,
    solved: bool,
    elapsed_frames: u64,
}

#[derive(Serialize, Debug)]
struct ScrambleOutput {
    #[serde(flatten)]
    params: ScrambleParams,
    twists: String,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Scramble { length, seed, json } => {
            let length = length.unwrap_or(prefs.scramble.length);
            let params = match seed {
                Some(seed) => ScrambleParams::from_seed(length, seed),
                None => ScrambleParams::new(length),
            };
            let twists = format_twists(&params.generate());
            if json {
                write_json_output(&ScrambleOutput { params, twists })?;
            } else {
                println!("{twists}");
            }
        }

        Subcommand::Apply {
            moves,
            from_scramble,
        } => {
            let twists = parse_twists(&moves.join(" ")).context("error parsing moves")?;
            let mut session = HeadlessSession::new(prefs);
            let scramble = from_scramble
                .map(|seed| {
                    session.scramble(ScrambleParams::from_seed(prefs.scramble.length, seed))
                })
                .transpose()?;
            for twist in twists {
                session.twist(twist)?;
            }
            write_json_output(&session.into_output(scramble))?;
        }

        Subcommand::Keys { keys } => {
            let mut session = HeadlessSession::new(prefs);
            for c in keys.chars().filter(|c| !c.is_whitespace()) {
                let input =
                    KeyInput::from_char(c).ok_or_else(|| eyre!("no binding for key {c:?}"))?;
                session.press(input)?;
            }
            write_json_output(&session.into_output(None))?;
        }

        Subcommand::Checkerboard => {
            let mut session = HeadlessSession::new(prefs);
            if !session.sim.checkerboard() {
                return Err(eyre!("cube is busy"));
            }
            session.settle()?;
            let cube = session.sim.cube();
            println!("{}", session.sim.status());
            println!("solved: {}", cube.is_solved());
            print_faces(cube);
        }
    }

    Ok(())
}

/// Simulation driven by fixed-length frames instead of the wall clock.
struct HeadlessSession<'a> {
    prefs: &'a Preferences,
    sim: CubeSimulation,
    now: Instant,
    elapsed_frames: u64,
}
impl<'a> HeadlessSession<'a> {
    fn new(prefs: &'a Preferences) -> Self {
        Self {
            prefs,
            sim: CubeSimulation::new(),
            now: Instant::now(),
            elapsed_frames: 0,
        }
    }

    /// Steps until no twist is in progress.
    fn settle(&mut self) -> Result<()> {
        while self.sim.advance(FRAME, self.now, self.prefs) {
            self.now += FRAME;
            self.elapsed_frames += 1;
            if self.elapsed_frames > MAX_FRAMES {
                return Err(eyre!("simulation did not settle"));
            }
        }
        Ok(())
    }

    fn scramble(&mut self, params: ScrambleParams) -> Result<ScrambleOutput> {
        let twists = self
            .sim
            .scramble(params.clone())
            .ok_or_else(|| eyre!("cube is busy"))?;
        self.settle()?;
        log::info!("scrambled with seed {:?}", params.seed);
        Ok(ScrambleOutput {
            params,
            twists: format_twists(&twists),
        })
    }

    fn twist(&mut self, twist: Twist) -> Result<()> {
        if !self.sim.twist(twist) {
            return Err(eyre!("twist {twist} was rejected"));
        }
        self.settle()
    }

    fn press(&mut self, input: KeyInput) -> Result<()> {
        if !self.sim.handle_key_at(input, self.now, self.prefs) {
            log::warn!("key {input:?} had no effect");
        }
        self.settle()
    }

    fn into_output(self, scramble: Option<ScrambleOutput>) -> SessionOutput {
        SessionOutput {
            scramble,
            history: self.sim.history().to_vec(),
            status: self.sim.status(),
            solved: self.sim.is_solved(),
            elapsed_frames: self.elapsed_frames,
        }
    }
}

fn print_faces(cube: &CubeState) {
    for face in Face::ALL {
        println!("{} ({}):", face.name(), face.symbol());
        for row in cube.face_grid(face) {
            let row = row
                .iter()
                .map(|sticker| sticker.map_or('.', |f| f.symbol()))
                .join(" ");
            println!("  {row}");
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_apply() {
        let args = Args::try_parse_from([
            "cubiecube",
            "apply",
            "R",
            "U'",
            "--from-scramble",
            "abc",
            "--prefs",
            "prefs.yaml",
        ])
        .unwrap();
        assert_eq!(args.prefs, Some(PathBuf::from("prefs.yaml")));
        let Subcommand::Apply {
            moves,
            from_scramble,
        } = args.subcommand
        else {
            panic!("wrong subcommand");
        };
        assert_eq!(moves, ["R", "U'"]);
        assert_eq!(from_scramble.as_deref(), Some("abc"));

        assert!(Args::try_parse_from(["cubiecube", "apply"]).is_err());
    }

    #[test]
    fn test_headless_session() {
        let prefs = cubie_prefs::DEFAULT_PREFS.clone();
        let mut session = HeadlessSession::new(&prefs);
        for twist in parse_twists("R U R' U'").unwrap() {
            session.twist(twist).unwrap();
        }
        let u = KeyInput::Face {
            face: Face::U,
            shift: false,
        };
        session.press(u).unwrap();
        session.press(KeyInput::Prime).unwrap();
        // Nothing left to modify.
        session.press(KeyInput::Prime).unwrap();
        let output = session.into_output(None);
        assert_eq!(output.history, ["R", "U", "R'", "U'", "U", "U'"]);
        assert_eq!(output.status, Status::InProgress);
        assert!(!output.solved);
        assert!(output.elapsed_frames > 0);
    }
}

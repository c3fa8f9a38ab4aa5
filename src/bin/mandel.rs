extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{Action, Outcome, Session, Viewport};
use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const LEFT: &str = "left";
const TOP: &str = "top";
const SCALE: &str = "scale";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Interactive Mandelbrot explorer.  Reads one action per line from stdin: + - up down left right q")
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("640x480")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse viewport size"))
                .help("Size of the viewport in pixels"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Starting number of iterations per point"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to draw with (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(LEFT)
                .required(false)
                .long(LEFT)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse left coordinate"))
                .help("Real coordinate of the left edge"),
        )
        .arg(
            Arg::with_name(TOP)
                .required(false)
                .long(TOP)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse top coordinate"))
                .help("Top coordinate; the first row is drawn at -top"),
        )
        .arg(
            Arg::with_name(SCALE)
                .required(false)
                .long(SCALE)
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| validate_number::<f64>(&s, "Could not parse scale"))
                .help("Starting scale; the window is 1.25/scale wide"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).and_then(|s| T::from_str(s).ok()) {
        Some(v) => v,
        None => fail(&format!("Could not parse {}", name)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn draw_and_flip(session: &Session) {
    println!("{}", session.status());
    if let Err(e) = io::stdout().flush() {
        fail(&format!("Could not write output: {}", e));
    }

    let start = Instant::now();
    match session.draw() {
        Ok(frame) => {
            let elapsed = start.elapsed();
            let image = frame.into_image();
            debug!("Flipped {}x{} frame", image.width(), image.height());
            println!("done in {:.2} seconds.", elapsed.as_secs_f64());
        }
        Err(e) => fail(&format!("Render failure: {}", e)),
    }
}

fn main() {
    env_logger::init();
    let matches = args();

    let (width, height) = match parse_pair::<usize>(matches.value_of(SIZE).unwrap_or(""), 'x') {
        Some(size) => size,
        None => fail("Error parsing viewport size"),
    };
    let viewport = Viewport::new(
        width,
        height,
        value(&matches, LEFT),
        value(&matches, TOP),
        value(&matches, SCALE),
    )
    .unwrap_or_else(|e| fail(&format!("{}", e)));
    let threads = match matches.value_of(THREADS) {
        Some(_) => value(&matches, THREADS),
        None => num_cpus::get(),
    };
    let mut session = Session::new(viewport, value(&matches, ITERATIONS), threads)
        .unwrap_or_else(|e| fail(&format!("{}", e)));

    println!("Scale with + and -. Move with arrows.");
    draw_and_flip(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => fail(&format!("Could not read input: {}", e)),
        };
        if line.trim().is_empty() {
            continue;
        }
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match session.apply(action) {
            Ok(Outcome::Quit) => return,
            Ok(Outcome::Ignored) => {}
            Ok(Outcome::Redraw) => draw_and_flip(&session),
            Err(e) => fail(&format!("{}", e)),
        }
    }
}

#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate multibrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use multibrot::animation::{DELAY, LOOP_COUNT};
use multibrot::escape::{CONTRAST, ITERATIONS};
use multibrot::sweep::START;
use multibrot::{Animation, Evaluator, FrameRenderer, Palette, PlaneMapper, Sweep};
use num::Complex;
use std::str::FromStr;

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

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
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

fn validate_finite(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

/// Single-dash long flags (`-pow=3.5`) become their double-dash equivalents.
fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| {
            if arg == "-pow" || arg.starts_with("-pow=") {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

const POW: &str = "pow";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS_ARG: &str = "iterations";
const CONTRAST_ARG: &str = "contrast";
const STEP_ARG: &str = "step";
const DELAY_ARG: &str = "delay";
const LOOP_COUNT_ARG: &str = "loop-count";
const PALETTE: &str = "palette";
const STILL: &str = "still";

fn args<'a>(argv: Vec<String>) -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("gifbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders an animated GIF of the Multibrot set over a sweep of exponents")
        .arg(
            Arg::with_name(POW)
                .long(POW)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.0")
                .validator(|s| validate_finite(&s, "Could not parse the exponent bound"))
                .help("Exponents are swept from 1.0 up to (but not including) this value"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("out.gif")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the complex plane"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2.0,2.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the complex plane"),
        )
        .arg(
            Arg::with_name(THREADS)
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
                .help("Number of threads rendering each frame [default: number of CPUs]"),
        )
        .arg(
            Arg::with_name(ITERATIONS_ARG)
                .long(ITERATIONS_ARG)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range(
                        &s,
                        1u32,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Iterations before a point is considered inside the set"),
        )
        .arg(
            Arg::with_name(CONTRAST_ARG)
                .long(CONTRAST_ARG)
                .takes_value(true)
                .default_value("15")
                .validator(|s| {
                    validate_range(
                        &s,
                        0u8,
                        255,
                        "Could not parse contrast",
                        "Contrast must be between 0 and 255",
                    )
                })
                .help("Grey levels lost per iteration"),
        )
        .arg(
            Arg::with_name(STEP_ARG)
                .long(STEP_ARG)
                .takes_value(true)
                .default_value("0.02")
                .validator(|s| {
                    validate_range(
                        &s,
                        1e-6_f64,
                        1e6,
                        "Could not parse exponent step",
                        "Exponent step must be positive",
                    )
                })
                .help("Increment between successive exponents"),
        )
        .arg(
            Arg::with_name(DELAY_ARG)
                .long(DELAY_ARG)
                .takes_value(true)
                .default_value("8")
                .validator(|s| {
                    validate_range(
                        &s,
                        0u16,
                        ::std::u16::MAX,
                        "Could not parse delay",
                        "Delay must fit in 16 bits",
                    )
                })
                .help("Delay between frames, in hundredths of a second"),
        )
        .arg(
            Arg::with_name(LOOP_COUNT_ARG)
                .long(LOOP_COUNT_ARG)
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range(
                        &s,
                        0u16,
                        ::std::u16::MAX,
                        "Could not parse loop count",
                        "Loop count must fit in 16 bits",
                    )
                })
                .help("Value of the GIF loop-count field"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .possible_values(&["gray", "grey", "mono"])
                .default_value("gray")
                .help("Palette of the output frames"),
        )
        .arg(
            Arg::with_name(STILL)
                .long(STILL)
                .takes_value(true)
                .help("Also write the last frame to this file as a PGM graymap"),
        )
        .get_matches_from(argv)
}

fn pair_of<T: FromStr>(matches: &ArgMatches, name: &str, separator: char) -> (T, T) {
    match matches.value_of(name).and_then(|s| parse_pair(s, separator)) {
        Some(pair) => pair,
        None => clap::Error::value_validation_auto(format!("Could not parse {}", name)).exit(),
    }
}

fn corner_of(matches: &ArgMatches, name: &str) -> Complex<f64> {
    match matches.value_of(name).and_then(parse_complex) {
        Some(point) => point,
        None => clap::Error::value_validation_auto(format!("Could not parse {}", name)).exit(),
    }
}

fn run(matches: &ArgMatches) -> multibrot::Result<()> {
    let image_size: (u16, u16) = pair_of(matches, SIZE, 'x');
    let leftlower = corner_of(matches, LEFTLOWER);
    let rightupper = corner_of(matches, RIGHTUPPER);
    let bound = value_t!(matches, POW, f64).unwrap_or_else(|e| e.exit());
    let step = value_t!(matches, STEP_ARG, f64).unwrap_or_else(|e| e.exit());
    let threads = if matches.is_present(THREADS) {
        value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit())
    } else {
        num_cpus::get()
    };
    let iterations = value_t!(matches, ITERATIONS_ARG, u32).unwrap_or(ITERATIONS);
    let contrast = value_t!(matches, CONTRAST_ARG, u8).unwrap_or(CONTRAST);
    let delay = value_t!(matches, DELAY_ARG, u16).unwrap_or(DELAY);
    let loop_count = value_t!(matches, LOOP_COUNT_ARG, u16).unwrap_or(LOOP_COUNT);
    let palette = value_t!(matches, PALETTE, Palette).unwrap_or_else(|e| e.exit());
    let output = matches.value_of(OUTPUT).unwrap_or("out.gif");

    let plane = PlaneMapper::new(
        usize::from(image_size.0),
        usize::from(image_size.1),
        leftlower,
        rightupper,
    )?;
    let renderer = FrameRenderer::new(plane, Evaluator::new(iterations, contrast), palette);
    let sweep = Sweep::new(START, bound, step)?;
    info!(
        "rendering {} frames of {}x{} on {} threads, palette {}",
        sweep.len(),
        image_size.0,
        image_size.1,
        threads,
        palette
    );

    let animation = Animation::assemble(&renderer, sweep, threads, delay, loop_count)?;
    multibrot::save_gif(output, &animation)?;

    if let Some(still) = matches.value_of(STILL) {
        match animation.last_frame() {
            Some(frame) => multibrot::save_graymap(still, frame, palette)?,
            None => warn!("the sweep was empty; no still frame written to {}", still),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args(normalize_args(std::env::args()));
    if let Err(e) = run(&matches) {
        eprintln!("gifbrot: {}", e);
        std::process::exit(1);
    }
}

//! Console driver: reads a polynomial degree from stdin, interpolates the
//! exponential-ratio sample (e^x - 1)/x, and prints the evaluation table
//! with the absolute error against the reference function.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use divdiff::interpolation::centering::clamp_degree;
use divdiff::interpolation::config::NewtonCfg;
use divdiff::interpolation::newton::NewtonPolynomial;
use divdiff::sampling::{grid, SampleCfg};
use divdiff::Interpolator;

const EVAL_STEP: f64 = 0.25;

/// (e^x - 1) / x, the sampled reference function.
fn exp_ratio(x: f64) -> f64 {
    x.exp_m1() / x
}

/// Prompt/re-prompt loop for the polynomial degree.
///
/// Negative or unparseable input prints the invalid-degree notice and
/// asks again; values above `max_degree` are clamped silently.
fn read_degree<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_degree: usize,
) -> Result<usize> {
    loop {
        write!(output, "Enter the polynomial degree: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a degree was entered");
        }

        let requested: i64 = match line.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "Invalid polynomial degree entered")?;
                continue;
            }
        };

        match clamp_degree(requested, max_degree) {
            Ok(degree) => {
                if degree as i64 != requested {
                    debug!("requested degree {requested} clamped to {degree}");
                }
                return Ok(degree);
            }
            Err(_) => {
                writeln!(output, "Invalid polynomial degree entered")?;
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let sample = SampleCfg::new().generate(exp_ratio);
    let max_degree = sample.x.len() - 1;

    let degree = read_degree(&mut input, &mut output, max_degree)?;

    let cfg = NewtonCfg::new()
        .set_x(&sample.x)?
        .set_y(&sample.y)?
        .set_degree(degree);
    let poly = NewtonPolynomial::fit(cfg).context("fitting the Newton polynomial")?;

    writeln!(
        output,
        "{:>10}\t{:>17}\t{:>19}",
        "New grid", "Polynomial values", "Interpolation error"
    )?;

    let x_max = sample.x[sample.x.len() - 1];
    for xq in grid(sample.x[0], EVAL_STEP, x_max) {
        let yq  = poly.eval(xq);
        let err = (yq - exp_ratio(xq)).abs();
        writeln!(output, "{xq:>10.5}{yq:>19.5}{err:>27.5e}")?;
    }

    // terminal hold
    write!(output, "Press Enter to exit...")?;
    output.flush()?;
    let mut discard = String::new();
    input.read_line(&mut discard)?;

    Ok(())
}

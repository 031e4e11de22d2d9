use std::path::Path;

use colored::Colorize;
use zy_canon::Reading;
use zy_cast::{Figure, Line, Toss};

use crate::render;

pub fn run(data: &Path, seed: Option<u64>) -> Result<(), String> {
    let canon = super::load_canon(data)?;
    let mut rng = super::rng_from_seed(seed);

    println!("  {} the coins\n", "Casting".bold());
    let mut figure = Figure::new();
    while !figure.is_complete() {
        let toss = Toss::random(&mut rng);
        let position = figure
            .cast(Line::from_toss(toss))
            .map_err(|e| e.to_string())?;
        println!("  line {position}: {toss}");
    }

    let reading = Reading::resolve(&figure, &canon).map_err(|e| e.to_string())?;
    let focus: Vec<u8> = reading.focus_line().into_iter().collect();

    println!();
    render::print_figure(&figure, &focus);
    println!();
    render::print_reading(&reading);
    Ok(())
}

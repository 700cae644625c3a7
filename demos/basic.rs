//! Standalone demo: prints a color's representations and shade ramps.
//!
//! `cargo run --example basic -- "#3b82f6"`; set `RUST_LOG=rgba_color=trace`
//! to see parse diagnostics.

use rgba_color::constants::{DEFAULT_SHADE_COUNT, DEFAULT_SHADE_START};
use rgba_color::{Color, InvalidColorInput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InvalidColorInput> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "#3b82f6".to_string());
    let color: Color = input.parse()?;

    println!("hex     {color}");
    println!("int     {}", color.int_value());
    println!("rgba255 {:?}", color.rgba255());
    println!("rgba1   {:?}", color.rgba1());
    println!("hsva    {:?}", color.hsva());
    println!("hsla    {:?}", color.hsla());
    println!("dark    {}", color.is_dark());
    println!("invert  {}", color.inverted());

    println!("\nshades");
    for shade in color.shades(DEFAULT_SHADE_COUNT) {
        println!("  {shade}");
    }

    println!("\nshades by percentage");
    for shade in color.shades_by_percentage(DEFAULT_SHADE_COUNT, DEFAULT_SHADE_START) {
        println!("  {shade}");
    }

    Ok(())
}

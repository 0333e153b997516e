//! Geohash cells in your terminal!
//!
//! Draws how the 32 characters of the geohash alphabet subdivide a cell,
//! which makes the Z-shaped Morton ordering of geohashes visible. Set
//! `RUST_LOG=trace` to see the codec's own diagnostics.

use geohash_codec::{decode_bounds, Result, ALPHABET};
use tracing_subscriber::EnvFilter;

// Display the 32 sub-cells of a geohash cell, north up
fn print_children(parent: &str) -> Result<()> {
    // Print header
    let name = if parent.is_empty() { "the world" } else { parent };
    println!("--- Inside {name} ---\n");

    // Compute the cells of the children
    let outer = decode_bounds(parent)?;
    let children = ALPHABET
        .iter()
        .map(|&byte| {
            let symbol = char::from(byte);
            let child = format!("{parent}{symbol}");
            decode_bounds(&child).map(|bounds| (symbol, bounds))
        })
        .collect::<Result<Vec<_>>>()?;

    // Children either split the parent into 8 columns and 4 rows or the
    // other way around, depending on which axis the parent ended on.
    let (lat_span, lng_span) = children[0].1.size();
    let (outer_lat_span, outer_lng_span) = outer.size();
    let num_rows = (outer_lat_span / lat_span).round() as usize;
    let num_cols = (outer_lng_span / lng_span).round() as usize;

    // This character is a placeholder that should not persist in the final
    // program output.
    let mut display = vec![vec!['@'; num_cols]; num_rows];
    for (symbol, bounds) in children {
        let row = ((outer.lat_max - bounds.lat_max) / lat_span).round() as usize;
        let col = ((bounds.lng_min - outer.lng_min) / lng_span).round() as usize;
        display[row][col] = symbol;
    }

    // Display the cells
    for line in display {
        let line = line
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }
    println!();
    Ok(())
}

// Zoom into a few levels of geohash cells
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    for parent in ["", "d", "dn"] {
        print_children(parent)?;
    }

    let (lat, lng) = (38.05339909138269, -84.70121386485815);
    println!("({lat}, {lng}) is {}", geohash_codec::encode(lat, lng));
    println!("...or, more precisely, {}", geohash_codec::encode_high_precision(lat, lng, 20));
    Ok(())
}

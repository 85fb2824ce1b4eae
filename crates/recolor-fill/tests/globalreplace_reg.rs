//! Global substitution regression test
//!
//! Covers table ordering semantics (first-entry-wins, update-in-place)
//! and the single-sweep property of a whole-buffer substitution.

use recolor_core::{Raster, color::compose_rgb};
use recolor_fill::{SubstitutionTable, apply_table, global_matches};
use recolor_test::{RegParams, solid_raster};

#[test]
fn globalreplace_reg() {
    let mut rp = RegParams::new("globalreplace");

    let black = compose_rgb(0, 0, 0);
    let gray = compose_rgb(128, 128, 128);
    let white = compose_rgb(255, 255, 255);
    let near_black = compose_rgb(4, 0, 0);

    // First qualifying entry wins even when a later entry is closer
    let mut table = SubstitutionTable::new();
    table.insert(compose_rgb(8, 0, 0), white);
    table.insert(compose_rgb(4, 0, 0), gray);
    rp.compare_bool(
        true,
        table.first_match(near_black, 10.0) == Some(white),
        "first entry wins",
    );

    // Update in place keeps the entry's position
    table.insert(compose_rgb(8, 0, 0), black);
    rp.compare_values(2.0, table.len() as f64, 0.0);
    rp.compare_bool(
        true,
        table.first_match(near_black, 10.0) == Some(black),
        "updated entry keeps its slot",
    );

    // Selection is computed before any write: black -> gray plus
    // gray -> white on an all-black buffer yields gray, never white
    let mut cascade = SubstitutionTable::new();
    cascade.insert(black, gray);
    cascade.insert(gray, white);
    let mut rm = solid_raster(3, 3, black).to_mut();
    let count = apply_table(&mut rm, &cascade, 0.0);
    let swept: Raster = rm.into();
    rp.compare_values(9.0, count as f64, 0.0);
    rp.compare_raster(&swept, &solid_raster(3, 3, gray));

    // Unmatched pixels are skipped
    let mixed = Raster::from_data(2, 1, vec![black, white]).unwrap();
    let mut only_black = SubstitutionTable::new();
    only_black.insert(black, gray);
    let matches = global_matches(&mixed, &only_black, 0.0);
    rp.compare_values(1.0, matches.len() as f64, 0.0);
    rp.compare_bool(true, matches[0].0 == (0, 0), "matched coordinate");

    // Empty table selects nothing
    rp.compare_values(
        0.0,
        global_matches(&mixed, &SubstitutionTable::new(), 100.0).len() as f64,
        0.0,
    );

    assert!(rp.cleanup());
}

//! Posterization regression test
//!
//! Verifies the per-channel quantization values, alpha preservation,
//! idempotence, and parameter validation.

use recolor_core::{
    Raster,
    color::{alpha, blue, compose_argb, compose_rgb, green, red},
};
use recolor_fill::{FillError, posterize};
use recolor_test::{RegParams, solid_raster};

#[test]
fn posterize_reg() {
    let mut rp = RegParams::new("posterize");

    // levels = 4: step 85, channel 200 rounds to 170
    let src = solid_raster(2, 2, compose_argb(200, 200, 10, 250));
    let quant = posterize(&src, 4).unwrap();
    let p = quant.get_pixel_unchecked(0, 0);
    rp.compare_values(170.0, red(p) as f64, 0.0);
    rp.compare_values(0.0, green(p) as f64, 0.0);
    rp.compare_values(255.0, blue(p) as f64, 0.0);
    rp.compare_values(200.0, alpha(p) as f64, 0.0);

    // Source buffer untouched
    rp.compare_raster(&src, &solid_raster(2, 2, compose_argb(200, 200, 10, 250)));

    // Every output channel lands on a level boundary
    let allowed = [0u8, 85, 170, 255];
    let ramp: Vec<u32> = (0..=255u32).map(|v| compose_rgb(v as u8, v as u8, v as u8)).collect();
    let ramp_raster = Raster::from_data(16, 16, ramp).unwrap();
    let ramp_quant = posterize(&ramp_raster, 4).unwrap();
    rp.compare_bool(
        true,
        ramp_quant.data().iter().all(|&p| allowed.contains(&red(p))),
        "channels quantized to level set",
    );

    // Idempotence: quantizing a quantized buffer is a no-op
    for levels in [2u32, 3, 4, 8] {
        let once = posterize(&ramp_raster, levels).unwrap();
        let twice = posterize(&once, levels).unwrap();
        rp.compare_raster(&once, &twice);
    }

    // Fewer than two levels is rejected
    rp.compare_bool(
        true,
        matches!(posterize(&src, 1), Err(FillError::InvalidLevels(1))),
        "levels below two rejected",
    );

    assert!(rp.cleanup());
}

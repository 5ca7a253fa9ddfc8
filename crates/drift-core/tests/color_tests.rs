use drift_core::color::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(hex_to_rgb("#48f7e4"), Some(Rgb::new(0x48, 0xf7, 0xe4)));
    assert_eq!(hex_to_rgb("48f7e4"), Some(Rgb::new(0x48, 0xf7, 0xe4)));
    assert_eq!(hex_to_rgb("#FFFFFF"), Some(Rgb::new(255, 255, 255)));
    assert_eq!(hex_to_rgb("#000000"), Some(Rgb::new(0, 0, 0)));
}

#[test]
fn hex_rejects_malformed_input() {
    assert_eq!(hex_to_rgb(""), None);
    assert_eq!(hex_to_rgb("#fff"), None, "shorthand form is not supported");
    assert_eq!(hex_to_rgb("#gggggg"), None);
    assert_eq!(hex_to_rgb("#1234567"), None);
    assert_eq!(hex_to_rgb("not a color"), None);
}

#[test]
fn css_strings_match_canvas_syntax() {
    let c = Rgb::new(72, 247, 228);
    assert_eq!(c.css(), "rgb(72, 247, 228)");
    assert_eq!(c.css_with_alpha(0.5), "rgba(72, 247, 228, 0.5)");
    // Opacity above 1.0 is passed through; the canvas clamps it.
    assert_eq!(c.css_with_alpha(1.2), "rgba(72, 247, 228, 1.2)");
}

#[test]
fn single_color_never_yields_per_particle_pick() {
    let spec = ColorSpec::Single(Rgb::new(1, 2, 3));
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(spec.primary(), Rgb::new(1, 2, 3));
    for _ in 0..10 {
        assert_eq!(spec.pick(&mut rng), None);
    }
}

#[test]
fn palette_picks_stay_inside_the_palette() {
    let colors = vec![Rgb::new(10, 0, 0), Rgb::new(0, 20, 0), Rgb::new(0, 0, 30)];
    let spec = ColorSpec::Palette(colors.clone());
    assert_eq!(spec.primary(), colors[0]);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let picked = spec.pick(&mut rng).expect("palette must yield a color");
        assert!(colors.contains(&picked), "picked color not in palette");
    }
}

use fixbrot_compute::{
    get_preset, intensity, EscapeIterator, EscapeTimeRenderer, Preset, Renderer, Termination,
    RASTER_HEIGHT, RASTER_WIDTH,
};

fn render_intensities(preset: &Preset) -> Vec<u8> {
    let renderer = EscapeTimeRenderer::new(preset.max_iterations);
    renderer
        .render(&preset.viewport(), (RASTER_WIDTH, RASTER_HEIGHT))
        .iter()
        .map(|r| intensity(r.iterations, preset.divisor))
        .collect()
}

fn spot(preset: &Preset, px: u32, py: u32) -> (u32, Termination) {
    let result =
        EscapeIterator::new(preset.max_iterations).iterate(preset.viewport().plane_coordinate(px, py));
    (result.iterations, result.termination)
}

#[test]
fn image1_full_grid_matches_reference() {
    let preset = get_preset("image1.ppm").unwrap();
    let samples = render_intensities(preset);

    assert_eq!(samples.len(), (RASTER_WIDTH * RASTER_HEIGHT) as usize);
    assert_eq!(samples.iter().map(|&s| u32::from(s)).sum::<u32>(), 936_404);

    // Anchor pixel and far corner.
    assert_eq!(samples[0], 3);
    assert_eq!(samples[(150 * RASTER_WIDTH + 200) as usize], 15);
    assert_eq!(samples[(299 * RASTER_WIDTH + 399) as usize], 12);
}

#[test]
fn image2_full_grid_matches_reference() {
    let preset = get_preset("image2.ppm").unwrap();
    let samples = render_intensities(preset);

    assert_eq!(samples.iter().map(|&s| u32::from(s)).sum::<u32>(), 116_612);
    assert_eq!(&samples[..8], &[3, 4, 7, 3, 4, 2, 2, 1]);
}

#[test]
fn image1_spot_iteration_counts() {
    let preset = get_preset("image1.ppm").unwrap();

    assert_eq!(spot(preset, 0, 0), (13, Termination::Escaped));
    assert_eq!(spot(preset, 200, 150), (63, Termination::Exhausted));
    assert_eq!(spot(preset, 399, 299), (48, Termination::Escaped));
    assert_eq!(spot(preset, 120, 150), (22, Termination::Escaped));
}

#[test]
fn image3_deep_budget_spot_pixels() {
    let preset = get_preset("image3.ppm").unwrap();

    // Escape timing does not depend on the budget once escaped.
    assert_eq!(spot(preset, 0, 0), (13, Termination::Escaped));
    assert_eq!(spot(preset, 200, 150), (2, Termination::Escaped));
    // An orbit that collapses long before the 65536 budget.
    assert_eq!(spot(preset, 17, 210), (118, Termination::Stagnated));

    let (n, _) = spot(preset, 17, 210);
    assert_eq!(intensity(n, preset.divisor), 0);
}

#[test]
fn image4_logarithmic_spot_pixels() {
    let preset = get_preset("image4.ppm").unwrap();

    let cases = [((0, 0), 4), ((200, 150), 2), ((399, 299), 1), ((17, 210), 7)];
    for ((px, py), expected) in cases {
        let (n, _) = spot(preset, px, py);
        assert_eq!(intensity(n, preset.divisor), expected);
    }
}

#[test]
fn identical_windows_differ_only_in_budget_and_policy() {
    // image2 and image3 share scale and offset; pixels that escape within
    // the small budget report the same count under the large one.
    let shallow = get_preset("image2.ppm").unwrap();
    let deep = get_preset("image3.ppm").unwrap();

    for (px, py) in [(0, 0), (200, 150), (399, 299), (120, 150)] {
        let (n, t) = spot(shallow, px, py);
        if t == Termination::Escaped {
            assert_eq!(spot(deep, px, py), (n, Termination::Escaped));
        }
    }
}

use std::ops::Range;

use num_complex::Complex;
use plotters::prelude::*;
use signals::dsp::{Hz, Spectrum};
use signals::psd::Psd;
use signals::{SamplePath, TimeGrid};

/// Colours for successive series on one chart
pub const SERIES_COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];

/// y range covering the values, with a little headroom (and never empty)
fn value_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    let pad = if hi > lo { (hi - lo) * 0.1 } else { lo.abs().max(1e-12) };
    (lo - pad)..(hi + pad)
}

/// Plot the part of each (labelled) path that falls in `window` (seconds)
pub fn build_signal_chart<DB: DrawingBackend>(
    mut builder: ChartBuilder<DB>,
    paths: &[(&str, &SamplePath)],
    window: Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let y_range = value_range(
        paths
            .iter()
            .flat_map(|(_, p)| p.window(window.start, window.end).map(|(_, y)| y)),
    );
    let mut chart = builder
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(window.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_max_light_lines(0)
        .y_max_light_lines(0)
        .x_desc("Time (s)")
        .y_desc("Amplitude")
        .draw()?;

    for (i, (label, path)) in paths.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                path.window(window.start, window.end),
                &color,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Plot an estimated spectrum (e.g. an averaged periodogram) against the
/// PSD it should match, over 0..max_frequency.
pub fn build_psd_chart<DB: DrawingBackend, P: Psd>(
    mut builder: ChartBuilder<DB>,
    spectrum: &Spectrum,
    psd: &P,
    max_frequency: Hz,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let max_omega = max_frequency.angular();
    let estimate: Vec<(f64, f64)> = spectrum
        .iter()
        .filter(|(omega, _)| *omega <= max_omega)
        .map(|(omega, d)| (Hz::from_angular(omega).0, d))
        .collect();
    let theory: Vec<(f64, f64)> = spectrum
        .frequencies()
        .filter(|omega| *omega <= max_omega)
        .map(|omega| (Hz::from_angular(omega).0, psd.density(omega)))
        .collect();
    let y_max = estimate
        .iter()
        .chain(theory.iter())
        .fold(0f64, |acc, (_, d)| acc.max(*d));
    let y_max = if y_max > 0. { y_max * 1.1 } else { 1. };

    let mut chart = builder
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_frequency.0, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_max_light_lines(0)
        .y_max_light_lines(0)
        .y_desc("PSD")
        .x_desc("Frequency (Hz)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(estimate, &RED))?
        .label("Periodogram")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(theory, &BLUE))?
        .label("PSD")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Plot the real and imaginary parts of a complex signal
pub fn build_phasor_chart<DB: DrawingBackend>(
    mut builder: ChartBuilder<DB>,
    grid: &TimeGrid,
    values: &[Complex<f64>],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let y_range = value_range(values.iter().flat_map(|z| [z.re, z.im]));
    let mut chart = builder
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(grid.start()..grid.end(), y_range)?;

    chart
        .configure_mesh()
        .x_max_light_lines(0)
        .y_max_light_lines(0)
        .x_desc("Time (s)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            grid.iter().zip(values.iter()).map(|(t, z)| (t, z.re)),
            &RED,
        ))?
        .label("Re")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            grid.iter().zip(values.iter()).map(|(t, z)| (t, z.im)),
            &BLUE,
        ))?
        .label("Im")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

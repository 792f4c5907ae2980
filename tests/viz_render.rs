use std::fs;
use periodviz::config::{ChartConfig, FontSizes};
use periodviz::models::Observation;
use periodviz::viz::{self, LegendMode, LinePlot};
use tempfile::tempdir;

fn sample_observations() -> Vec<Observation> {
    let mut out = Vec::new();
    for (p, v) in [(202311, 10.0), (202312, 12.0), (202401, 9.0), (202402, 14.0)] {
        out.push(Observation::new(p, v, "south"));
    }
    for (p, v) in [(202311, 4.0), (202312, 6.5), (202401, 7.0), (202402, 5.0)] {
        out.push(Observation::new(p, v, "north"));
    }
    out
}

#[test]
fn svg_contains_year_labels_and_title() {
    let data = sample_observations();
    let plot = LinePlot::builder(&data)
        .title("Monthly orders")
        .x_axis_label("Month")
        .y_axis_label("Orders")
        .build()
        .unwrap();
    let svg = plot.to_svg_string().unwrap();
    assert!(svg.contains("Monthly orders"));
    assert!(svg.contains("2023"), "year label 2023 missing");
    assert!(svg.contains("2024"), "year label 2024 missing");
    assert!(svg.contains("Month"));
    assert!(svg.contains("north"));
    assert!(svg.contains("south"));
    // Raw period codes are never printed as tick labels.
    assert!(!svg.contains("202311"));
}

#[test]
fn legend_modes_produce_files() {
    let data = sample_observations();
    let dir = tempdir().unwrap();
    let modes = [
        LegendMode::Inside,
        LegendMode::Right,
        LegendMode::TopRight,
        LegendMode::Bottom,
    ];
    for (i, mode) in modes.iter().enumerate() {
        let path = dir.path().join(format!("legend{i}.svg"));
        let plot = LinePlot::builder(&data)
            .title("Legend test")
            .config(ChartConfig::default().with_legend(*mode))
            .build()
            .unwrap();
        plot.render_to_file(&path).unwrap();
        let meta = fs::metadata(&path).expect("file created");
        assert!(meta.len() > 0, "svg has content");
    }
}

#[test]
fn png_output_is_written() {
    let data = sample_observations();
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.png");
    viz::plot_lines(
        &data,
        &path,
        "PNG chart",
        ChartConfig::default().with_size(640, 400),
    )
    .unwrap();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn custom_fonts_and_locale_render() {
    let data: Vec<Observation> = (1..=12)
        .map(|m| Observation::new(202200 + m, 1500.0 * m as f64, "total"))
        .collect();
    let cfg = ChartConfig::default()
        .with_fonts(FontSizes::from_tiers(10, 12, 14))
        .with_locale("de");
    let plot = LinePlot::builder(&data)
        .title("Einnahmen")
        .config(cfg)
        .build()
        .unwrap();
    let svg = plot.to_svg_string().unwrap();
    assert!(svg.contains("2022"));
    assert!(svg.contains(".000"), "german thousands separator on y ticks");
    assert!(!svg.contains(",000"));
}

#[test]
fn empty_data_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let e = viz::plot_lines(&[], &path, "Empty", ChartConfig::default());
    assert!(e.is_err());
    assert!(!path.exists());
}

use periodviz::segment::{SegmentMode, segment, segment_with};

fn samples() -> Vec<Vec<i64>> {
    vec![
        vec![202301],
        vec![202501, 202502],
        vec![202301, 202302, 202303, 202401, 202402],
        vec![201952, 202001, 202002, 202101, 202201, 202202, 202203],
        (1..=12).map(|m| 202400 + m).collect(),
        (2000..2010).flat_map(|y| (1..=4).map(move |q| y * 100 + q)).collect(),
    ]
}

#[test]
fn one_more_boundary_than_groups() {
    for labels in samples() {
        let seg = segment(&labels).unwrap();
        assert_eq!(seg.boundaries().len(), seg.groups().len() + 1, "{labels:?}");
    }
}

#[test]
fn boundaries_strictly_increase() {
    for labels in samples() {
        let seg = segment(&labels).unwrap();
        assert!(
            seg.boundaries().windows(2).all(|w| w[0] < w[1]),
            "{labels:?}"
        );
        assert_eq!(seg.boundaries()[0], -0.5);
        assert_eq!(*seg.boundaries().last().unwrap(), labels.len() as f64 - 0.5);
    }
}

#[test]
fn anchors_fall_inside_their_segment() {
    for labels in samples() {
        let seg = segment(&labels).unwrap();
        for (a, w) in seg.anchors().iter().zip(seg.boundaries().windows(2)) {
            assert!(w[0] < *a && *a < w[1], "{labels:?}");
        }
    }
}

#[test]
fn segments_cover_every_label_once() {
    for labels in samples() {
        let seg = segment(&labels).unwrap();
        let covered: usize = seg.segments().map(|s| s.len()).sum();
        assert_eq!(covered, labels.len());
        for s in seg.segments() {
            assert!(labels[s.start..s.end].iter().all(|l| l / 100 == s.group));
        }
    }
}

#[test]
fn segmentation_is_pure() {
    for labels in samples() {
        assert_eq!(segment(&labels).unwrap(), segment(&labels).unwrap());
    }
}

#[test]
fn weekly_codes_group_by_year() {
    let seg = segment(&[202351, 202352, 202401]).unwrap();
    assert_eq!(seg.groups(), &[2023, 2024]);
    assert_eq!(seg.anchors(), vec![0.5, 2.0]);
}

#[test]
fn merge_mode_yields_one_segment_per_year() {
    let labels = [202301, 202401, 202302, 202402, 202303];
    let split = segment(&labels).unwrap();
    assert_eq!(split.groups(), &[2023, 2024, 2023, 2024, 2023]);

    let merged = segment_with(&labels, SegmentMode::Merged).unwrap();
    assert_eq!(merged.groups(), &[2023, 2024]);
    assert_eq!(merged.boundaries(), &[-0.5, 2.5, 4.5]);
    assert_eq!(merged.labels(), &[202301, 202302, 202303, 202401, 202402]);
}

#[test]
fn merge_mode_matches_default_on_chronological_input() {
    for labels in samples() {
        assert_eq!(
            segment(&labels).unwrap(),
            segment_with(&labels, SegmentMode::Merged).unwrap()
        );
    }
}

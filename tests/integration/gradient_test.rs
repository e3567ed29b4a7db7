//! Integration tests for color trackers and gradients

use mirrorgrid::cell::tokenize;
use mirrorgrid::color::{ColorTracker, Gradient};
use mirrorgrid::grid::Compositor;
use mirrorgrid::{gradient_text, Color, Error, GradientConfig, GradientSpec};

use crate::helpers::{rows, temp_grid};

fn take(tracker: &mut ColorTracker, n: usize) -> Vec<u8> {
    (0..n).map(|_| tracker.advance()).collect()
}

#[test]
fn tracker_stays_within_bounds() {
    for bounce in [false, true] {
        for increment in [-37.5, -3.0, 0.4, 7.0, 90.0] {
            let mut tracker = ColorTracker::new(120, increment, 40, 200, bounce).unwrap();
            for value in take(&mut tracker, 200) {
                assert!(
                    (40..=200).contains(&value),
                    "{value} escaped bounds (increment {increment}, bounce {bounce})"
                );
            }
        }
    }
}

#[test]
fn tracker_bounces_back_from_the_top() {
    let mut tracker = ColorTracker::new(250, 10.0, 0, 255, true).unwrap();
    assert_eq!(take(&mut tracker, 4), vec![250, 255, 245, 235]);
}

#[test]
fn tracker_saturates_without_bounce() {
    let mut tracker = ColorTracker::new(250, 10.0, 0, 255, false).unwrap();
    assert_eq!(take(&mut tracker, 4), vec![250, 255, 255, 255]);
}

#[test]
fn tracker_rejects_inverted_bounds() {
    assert!(matches!(
        ColorTracker::new(10, 1.0, 200, 100, false),
        Err(Error::InvalidBounds { min: 200, max: 100 })
    ));
}

#[test]
fn gradient_rows_start_from_vertical_tracker() {
    let spec = GradientSpec {
        start: [10, 20, 30],
        horizontal: [5.0, 0.0, 0.0],
        vertical: [0.0, 10.0, 0.0],
        ..Default::default()
    };
    let mut gradient = Gradient::new(&spec).unwrap();

    assert_eq!(gradient.next_cell_color(), (10, 20, 30));
    assert_eq!(gradient.next_cell_color(), (15, 20, 30));
    gradient.next_row();
    assert_eq!(gradient.next_cell_color(), (10, 30, 30));
    assert_eq!(gradient.next_cell_color(), (15, 30, 30));
}

#[test]
fn gradient_text_produces_one_cell_per_character() {
    let config = GradientConfig {
        foreground: Some(GradientSpec {
            start: [0, 0, 255],
            horizontal: [32.0, 0.0, -32.0],
            ..Default::default()
        }),
        background: Some(GradientSpec::solid([20, 20, 20])),
    };

    let out = gradient_text("abcd\nef", &config).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 2);

    let first = tokenize(lines[0]);
    assert_eq!(
        first.iter().map(|c| c.character).collect::<String>(),
        "abcd"
    );
    assert_eq!(first[3].foreground, Some(Color::Rgb(96, 0, 159)));
    assert!(first
        .iter()
        .all(|c| c.background == Some(Color::Rgb(20, 20, 20))));

    let second = tokenize(lines[1]);
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].foreground, Some(Color::Rgb(0, 0, 255)));
}

#[test]
fn gradient_block_survives_compositing() {
    let (_dir, config) = temp_grid(6, 2);
    let block = gradient_text(
        "ab\ncd",
        &GradientConfig {
            foreground: Some(GradientSpec {
                start: [100, 100, 100],
                horizontal: [10.0, 0.0, 0.0],
                vertical: [0.0, 0.0, 10.0],
                ..Default::default()
            }),
            background: None,
        },
    )
    .unwrap();

    Compositor::new(config.clone())
        .splice(&block, 4, 0, 2, 2)
        .unwrap();

    let stored = rows(&config.path);
    let top = tokenize(&stored[0]);
    let bottom = tokenize(&stored[1]);
    assert_eq!(top.len(), 6);
    assert_eq!(top[5].character, 'b');
    assert_eq!(top[5].foreground, Some(Color::Rgb(110, 100, 100)));
    assert_eq!(bottom[4].foreground, Some(Color::Rgb(100, 100, 110)));
    assert!(stored[0].starts_with("    "));
}

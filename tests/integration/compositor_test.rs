//! Integration tests for compositing blocks into a grid on disk

use mirrorgrid::cell::{self, tokenize};
use mirrorgrid::grid::{compose, initialize_grid, Compositor, GridConfig, Region};
use mirrorgrid::{Color, Error};

use crate::helpers::{rows, temp_grid};

#[test]
fn splice_places_block_and_pads_short_lines() {
    let (_dir, config) = temp_grid(10, 3);
    let compositor = Compositor::new(config.clone());

    compositor.splice("AB\nC", 2, 1, 3, 2).unwrap();

    assert_eq!(
        rows(&config.path),
        vec!["          ", "  AB      ", "  C       "]
    );
}

#[test]
fn splice_is_idempotent() {
    let (_dir, config) = temp_grid(8, 4);
    let compositor = Compositor::new(config.clone());
    let block = cell::format_text(
        mirrorgrid::ColorMode::Rgb,
        "hey\nyou",
        Some(Color::Rgb(255, 128, 0)),
        Some(Color::Rgb(0, 0, 40)),
    )
    .unwrap();

    compositor.splice(&block, 3, 1, 4, 2).unwrap();
    let once = std::fs::read_to_string(&config.path).unwrap();
    compositor.splice(&block, 3, 1, 4, 2).unwrap();
    let twice = std::fs::read_to_string(&config.path).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn later_splice_overwrites_earlier_one() {
    let (_dir, config) = temp_grid(6, 2);
    let compositor = Compositor::new(config.clone());

    compositor.splice("xxxx\nxxxx", 0, 0, 4, 2).unwrap();
    compositor.splice("o", 1, 0, 2, 1).unwrap();

    assert_eq!(rows(&config.path), vec!["xo x  ", "xxxx  "]);
}

#[test]
fn splice_leaves_cells_outside_rectangle_untouched() {
    let width = 7;
    let height = 5;
    let background: Vec<String> = (0..height)
        .map(|r| {
            (0..width)
                .map(|c| cell::format('#', Some(Color::Palette((r * width + c) as u8)), None))
                .collect()
        })
        .collect();
    let grid = background.join("\n");

    let regions = [
        Region::new(0, 0, 1, 1),
        Region::new(2, 1, 3, 2),
        Region::new(5, 3, 10, 10),
        Region::new(0, 4, 7, 1),
        Region::new(6, 0, 1, 5),
    ];
    for region in regions {
        let out = compose(&grid, "ab\ncd\nef", region, width);
        let new_rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(new_rows.len(), height);

        for (r, row) in new_rows.iter().enumerate() {
            let before = tokenize(&background[r]);
            let after = tokenize(row);
            assert_eq!(after.len(), width, "row {r} in {region:?}");
            for c in 0..width {
                let inside = (region.row..region.row + region.height).contains(&r)
                    && (region.column..region.column + region.width).contains(&c);
                if !inside {
                    assert_eq!(after[c], before[c], "cell ({c}, {r}) in {region:?}");
                }
            }
        }
    }
}

#[test]
fn splice_keeps_colored_neighbours_intact() {
    let (_dir, config) = temp_grid(4, 1);
    let compositor = Compositor::new(config.clone());
    let red = cell::format('r', Some(Color::Rgb(255, 0, 0)), None);
    let blue = cell::format('b', None, Some(Color::Rgb(0, 0, 255)));

    compositor
        .splice(&format!("{red}{red}{red}{red}"), 0, 0, 4, 1)
        .unwrap();
    compositor.splice(&blue, 1, 0, 2, 1).unwrap();

    assert_eq!(rows(&config.path), vec![format!("{red}{blue} {red}")]);
}

#[test]
fn reinitializing_clears_the_grid() {
    let (_dir, config) = temp_grid(3, 2);
    Compositor::new(config.clone())
        .splice("abc\ndef", 0, 0, 3, 2)
        .unwrap();

    initialize_grid(&config).unwrap();

    assert_eq!(rows(&config.path), vec!["   ", "   "]);
}

#[test]
fn splice_into_missing_grid_fails_without_creating_it() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("term.txt");
    let compositor = Compositor::new(GridConfig::new(&path, 4, 2));

    let err = compositor.splice("x", 0, 0, 1, 1).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
    assert!(!path.exists());
}

#[test]
fn zero_sized_grid_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = GridConfig::new(dir.path().join("term.txt"), 0, 3);

    assert!(matches!(
        initialize_grid(&config),
        Err(Error::EmptyGrid { width: 0, height: 3 })
    ));
}

#[test]
fn inferred_dimensions_match_initialized_grid() {
    let (_dir, config) = temp_grid(12, 5);
    Compositor::new(config.clone())
        .splice(&cell::format('x', Some(Color::Palette(9)), None), 11, 4, 1, 1)
        .unwrap();

    let inferred = GridConfig::infer(&config.path).unwrap();
    assert_eq!((inferred.width, inferred.height), (12, 5));
}

#[test]
fn splice_into_last_row_keeps_height_with_trailing_newline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("term.txt");
    std::fs::write(&path, "....\n....\n").unwrap();

    let config = GridConfig::infer(&path).unwrap();
    assert_eq!((config.width, config.height), (4, 2));

    Compositor::new(config).splice("ab\ncd\nef", 1, 1, 2, 3).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "....\n.ab.\n");
}

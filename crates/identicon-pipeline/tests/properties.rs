//! Integration test: check the pipeline invariants over a spread of inputs.

use identicon_pipeline::{CANVAS_SIZE, CELL_COUNT, CELL_SIZE, Color, DIGEST_LEN, process};

fn inputs() -> Vec<String> {
    let mut inputs: Vec<String> = ["", " ", "asdf", "ASDF", "ein", "日本語", "a\0b"]
        .iter()
        .map(ToString::to_string)
        .collect();
    inputs.extend((0..200).map(|i| format!("user-{i}")));
    inputs
}

#[test]
fn invariants_hold_for_many_inputs() {
    for input in inputs() {
        let state = process(&input);

        assert_eq!(state.digest.as_bytes().len(), DIGEST_LEN, "{input:?}");
        assert_eq!(state.color, Color::from_digest(&state.digest), "{input:?}");
        assert_eq!(state.grid.len(), CELL_COUNT, "{input:?}");
        assert!(state.filtered.iter().all(|c| c.value % 2 == 0), "{input:?}");
        assert_eq!(state.pixel_map.len(), state.filtered.len(), "{input:?}");
        assert_eq!(state.image.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));

        for (cell, rect) in state.filtered.iter().zip(&state.pixel_map) {
            let idx = u32::try_from(cell.index).unwrap_or(u32::MAX);
            assert_eq!(rect.top_left.x, idx % 5 * CELL_SIZE);
            assert_eq!(rect.top_left.y, idx / 5 * CELL_SIZE);
            assert_eq!(rect.bottom_right.x, idx % 5 * CELL_SIZE + CELL_SIZE);
            assert_eq!(rect.bottom_right.y, idx / 5 * CELL_SIZE + CELL_SIZE);
        }
    }
}

#[test]
fn drawn_pixels_match_drawn_cells() {
    for input in inputs() {
        let state = process(&input);
        let fill = state.color.to_rgb();
        for cell in 0..CELL_COUNT {
            let (column, row) = (cell % 5, cell / 5);
            let x = u32::try_from(column).unwrap_or(0) * CELL_SIZE + CELL_SIZE / 2;
            let y = u32::try_from(row).unwrap_or(0) * CELL_SIZE + CELL_SIZE / 2;
            let drawn = state.filtered.iter().any(|c| c.index == cell);
            if drawn {
                assert_eq!(*state.image.get_pixel(x, y), fill, "{input:?} cell {cell}");
            }
        }
    }
}

#[test]
fn rendered_image_is_left_right_symmetric() {
    for input in inputs() {
        let image = process(&input).image;
        for y in 0..CANVAS_SIZE {
            for x in 0..CANVAS_SIZE / 2 {
                assert_eq!(
                    image.get_pixel(x, y),
                    image.get_pixel(CANVAS_SIZE - 1 - x, y),
                    "{input:?} at ({x}, {y})",
                );
            }
        }
    }
}

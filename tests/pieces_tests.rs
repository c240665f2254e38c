//! Piece catalog and rotation tests

use falling_blocks::core::{create_piece, kick_offsets, Shape};
use falling_blocks::types::PieceKind;

#[test]
fn test_four_clockwise_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let original = create_piece(kind);
        let mut shape = original.clone();
        for turn in 1..=4 {
            shape.rotate(true);
            if turn < 4 && kind != PieceKind::O {
                assert_ne!(shape, original, "{kind:?} after {turn} turns");
            }
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_four_counter_clockwise_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let mut shape = create_piece(kind);
        for _ in 0..4 {
            shape.rotate(false);
        }
        assert_eq!(shape, create_piece(kind), "{kind:?}");
    }
}

#[test]
fn test_clockwise_equals_three_counter_clockwise() {
    for kind in PieceKind::ALL {
        let mut cw = create_piece(kind);
        cw.rotate(true);

        let mut ccw = create_piece(kind);
        for _ in 0..3 {
            ccw.rotate(false);
        }
        assert_eq!(cw, ccw, "{kind:?}");
    }
}

#[test]
fn test_rotation_keeps_cell_count_and_value() {
    for kind in PieceKind::ALL {
        let mut shape = create_piece(kind);
        shape.rotate(true);
        let cells: Vec<_> = shape.cells().collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|&(_, _, v)| v == kind.cell_value()));
    }
}

#[test]
fn test_l_and_j_geometry() {
    let l = create_piece(PieceKind::L);
    let l_rows: Vec<&[u8]> = l.rows().collect();
    assert_eq!(l_rows, vec![&[0, 2, 0][..], &[0, 2, 0][..], &[0, 2, 2][..]]);

    let j = create_piece(PieceKind::J);
    let j_rows: Vec<&[u8]> = j.rows().collect();
    assert_eq!(j_rows, vec![&[0, 3, 0][..], &[0, 3, 0][..], &[3, 3, 0][..]]);
}

#[test]
fn test_cells_are_local_offsets() {
    let z = create_piece(PieceKind::Z);
    let cells: Vec<_> = z.cells().collect();
    assert_eq!(cells, vec![(0, 0, 5), (1, 0, 5), (1, 1, 5), (2, 1, 5)]);
}

#[test]
fn test_get_outside_matrix_is_none() {
    let o = create_piece(PieceKind::O);
    assert_eq!(o.get(1, 1), Some(4));
    assert_eq!(o.get(2, 0), None);
    assert_eq!(o.get(0, 2), None);
}

#[test]
fn test_custom_shape_kind_lookup() {
    let shape = Shape::from_rows([[0, 0], [0, 7]]);
    assert_eq!(shape.kind(), Some(PieceKind::T));
    assert_eq!(Shape::from_rows([[0]]).kind(), None);
}

#[test]
fn test_kick_offsets_by_width() {
    assert_eq!(kick_offsets(1).collect::<Vec<_>>(), vec![1]);
    assert_eq!(kick_offsets(2).collect::<Vec<_>>(), vec![1]);
    assert_eq!(kick_offsets(3).collect::<Vec<_>>(), vec![1, -1, 2]);
    assert_eq!(kick_offsets(4).collect::<Vec<_>>(), vec![1, -1, 2]);
}

#[test]
fn test_shape_serializes_as_nested_rows() {
    let o = create_piece(PieceKind::O);
    let json = serde_json::to_value(&o).unwrap();
    assert_eq!(json, serde_json::json!({ "rows": [[4, 4], [4, 4]] }));

    let back: Shape = serde_json::from_value(json).unwrap();
    assert_eq!(back, o);
}

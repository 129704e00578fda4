use trellis::widgets::hex::{ByteRange, HexView, format};

#[test]
fn test_hex_cells_uppercase_two_digit() {
    let bytes = [0x00, 0x0f, 0xab, 0xff];
    assert_eq!(format::hex_cells(&bytes, 0, 4), ["00", "0F", "AB", "FF"]);
}

#[test]
fn test_hex_cells_clamp_to_length() {
    let bytes = [0x01, 0x02];
    assert_eq!(format::hex_cells(&bytes, 0, 16), ["01", "02"]);
    assert!(format::hex_cells(&bytes, 5, 16).is_empty());
}

#[test]
fn test_ascii_cells_replace_line_breaks() {
    let bytes = [b'H', b'i', b'\r', b'\n', b'!'];
    assert_eq!(format::ascii_cells(&bytes, 0, 5), ["H", "i", ".", ".", "!"]);
}

#[test]
fn test_row_addresses() {
    assert_eq!(format::row_address(0), "000000");
    assert_eq!(format::row_address(1), "000010");
    assert_eq!(format::row_address(256), "001000");
}

#[test]
fn test_header_cells() {
    let header = format::header_cells();
    assert_eq!(header.len(), 16);
    assert_eq!(header[0], "00");
    assert_eq!(header[15], "0F");
}

#[test]
fn test_row_count() {
    assert_eq!(format::row_count(0), 0);
    assert_eq!(format::row_count(16), 1);
    assert_eq!(format::row_count(17), 2);

    let view = HexView::with_data(vec![0u8; 33]);
    assert_eq!(view.row_count(), 3);
}

#[test]
fn test_byte_range_contains_either_direction() {
    let range = ByteRange::new(9, 3);
    assert!(range.contains(3));
    assert!(range.contains(6));
    assert!(range.contains(9));
    assert!(!range.contains(2));
    assert!(!range.contains(10));
    assert_eq!(range.normalized(), ByteRange::new(3, 9));
}

#[test]
fn test_drag_selection() {
    let view = HexView::with_data(vec![0u8; 64]);

    view.mouse_down(5);
    assert!(view.is_selecting());
    assert_eq!(view.selection(), Some(ByteRange::new(5, 5)));

    view.mouse_enter(9);
    assert_eq!(view.selection(), Some(ByteRange::new(5, 9)));
    assert!(view.cell_flags(7).selected);
    assert!(!view.cell_flags(10).selected);

    let committed = view.mouse_up().unwrap();
    assert_eq!(committed, ByteRange::new(5, 9));
    assert!(!view.is_selecting());
    assert!(view.cell_flags(9).active);
}

#[test]
fn test_drag_selection_backwards() {
    let view = HexView::with_data(vec![0u8; 64]);
    view.mouse_down(9);
    view.mouse_enter(3);
    let committed = view.mouse_up().unwrap();
    assert_eq!(committed, ByteRange::new(3, 9));
    assert!(view.cell_flags(3).active);
}

#[test]
fn test_hover_without_drag_does_not_select() {
    let view = HexView::with_data(vec![0u8; 16]);
    view.mouse_enter(4);
    assert!(view.selection().is_none());
    assert!(view.cell_flags(4).hovered);
    assert!(!view.cell_flags(4).selected);
}

#[test]
fn test_highlight_range_is_independent_of_selection() {
    let view = HexView::with_data(vec![0u8; 32]);
    view.set_highlight(Some(ByteRange::new(8, 12)));
    assert!(view.cell_flags(10).highlighted);
    assert!(!view.cell_flags(10).selected);

    view.set_highlight(None);
    assert!(!view.cell_flags(10).highlighted);
}

#[test]
fn test_set_data_resets_pointer_state() {
    let view = HexView::with_data(vec![0u8; 16]);
    view.mouse_down(2);
    view.mouse_enter(5);
    view.mouse_up();

    view.set_data(vec![0u8; 8]);
    assert!(view.selection().is_none());
    assert!(!view.cell_flags(5).hovered);
    assert!(!view.cell_flags(5).active);
}

use trellis::engine::sticky::FixedSide;
use trellis::widgets::table::{Column, SCROLLBAR_KEY, Table, TableRow};

#[derive(Clone)]
struct Host {
    name: String,
    addr: String,
}

impl Host {
    fn new(name: &str, addr: &str) -> Self {
        Self {
            name: name.into(),
            addr: addr.into(),
        }
    }
}

impl TableRow for Host {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, column_key: &str) -> String {
        match column_key {
            "name" => self.name.clone(),
            "addr" => self.addr.clone(),
            _ => String::new(),
        }
    }
}

/// A(left, 80) | B(100) | C(right, 60), body viewport 200, content 240.
fn pinned_table() -> Table<Host> {
    let table = Table::with_rows(
        vec![
            Column::new("A").key("a").fixed(FixedSide::Left).width(80.0),
            Column::new("B").key("b").width(100.0),
            Column::new("C").key("c").fixed(FixedSide::Right).width(60.0),
        ],
        vec![Host::new("web-1", "10.0.0.1"), Host::new("web-2", "10.0.0.2")],
    );
    table.set_viewport_size(200.0, 100.0);
    table
}

#[test]
fn test_keys_are_assigned_and_deduplicated() {
    let table: Table<Host> = Table::new(vec![
        Column::new("A"),
        Column::new("B"),
        Column::new("C").key("x"),
        Column::new("D").key("x"),
    ]);
    assert_eq!(
        table.column_keys(),
        vec!["__inner_key", "__inner_key_next", "x", "x_next"]
    );
}

#[test]
fn test_head_columns_append_scrollbar_stub() {
    let table = pinned_table();
    let head = table.head_columns();
    assert_eq!(head.len(), 4);
    assert_eq!(head[3].key.as_deref(), Some(SCROLLBAR_KEY));
    assert_eq!(head[3].width, Some(17.0));
    assert!(head[3].fixed.is_none());
}

#[test]
fn test_width_reports_batch_into_one_commit() {
    let table = pinned_table();
    let stale = table.report_column_width("a", 96.0);
    let fresh = table.report_column_width("b", 120.0);

    // A superseded flush commits nothing.
    assert!(!table.commit_widths(stale));
    assert!(table.measured_widths().is_empty());

    // The newest flush drains both reports at once.
    assert!(table.commit_widths(fresh));
    let widths = table.measured_widths();
    assert_eq!(widths.get("a"), Some(&96.0));
    assert_eq!(widths.get("b"), Some(&120.0));
}

#[test]
fn test_commit_pending_widths() {
    let table = pinned_table();
    table.report_column_width("a", 96.0);
    table.report_column_width("a", 97.0);
    assert!(table.commit_pending_widths());
    assert_eq!(table.measured_widths().get("a"), Some(&97.0));
}

#[test]
fn test_measured_width_overrides_declared() {
    let table: Table<Host> = Table::new(vec![
        Column::new("A").key("a").fixed(FixedSide::Left).width(80.0),
        Column::new("B").key("b").fixed(FixedSide::Left).width(100.0),
        Column::new("C").key("c"),
    ]);
    table.set_viewport_size(200.0, 100.0);

    // B sits after A's declared width until a measurement lands.
    assert_eq!(table.fixed_style(1).unwrap().offset, 80.0);

    let token = table.report_column_width("a", 96.0);
    assert!(table.commit_widths(token));
    assert_eq!(table.fixed_style(1).unwrap().offset, 96.0);
}

#[test]
fn test_fixed_styles() {
    let table = pinned_table();
    let left = table.fixed_style(0).unwrap();
    assert_eq!(left.side, FixedSide::Left);
    assert_eq!(left.offset, 0.0);

    assert!(table.fixed_style(1).is_none());

    let right = table.fixed_style(2).unwrap();
    assert_eq!(right.side, FixedSide::Right);
    assert_eq!(right.offset, 0.0);
}

#[test]
fn test_seam_boundaries_mid_scroll() {
    let table = pinned_table();
    table.on_body_scroll(20.0, 0.0, 240.0);

    assert_eq!(table.fixed_boundary(0), Some(FixedSide::Left));
    assert_eq!(table.fixed_boundary(1), None);
    assert_eq!(table.fixed_boundary(2), Some(FixedSide::Right));
}

#[test]
fn test_left_seam_empty_when_unscrolled() {
    let table = pinned_table();
    table.on_body_scroll(0.0, 0.0, 240.0);
    assert_eq!(table.fixed_boundary(0), None);
    assert!(table.seams().left.is_empty());
}

#[test]
fn test_right_seam_empty_at_max_scroll() {
    let table = pinned_table();
    table.on_body_scroll(40.0, 0.0, 240.0);
    assert!(table.seams().right.is_empty());
    assert_eq!(table.fixed_boundary(0), Some(FixedSide::Left));
}

#[test]
fn test_head_sync_writes_only_on_difference() {
    let table = pinned_table();
    table.on_body_scroll(50.0, 0.0, 240.0);
    assert_eq!(table.take_head_sync(), Some(50.0));
    // Already mirrored: no write, no feedback loop.
    assert_eq!(table.take_head_sync(), None);

    table.on_body_scroll(50.0, 0.0, 240.0);
    assert_eq!(table.take_head_sync(), None);

    table.on_body_scroll(60.0, 0.0, 240.0);
    assert_eq!(table.take_head_sync(), Some(60.0));
}

#[test]
fn test_visible_row_range() {
    let table: Table<Host> = Table::with_rows(
        vec![Column::new("Name").key("name")],
        (0..20)
            .map(|i| Host::new(&format!("h{i}"), "10.0.0.1"))
            .collect(),
    );
    table.set_row_height(24.0);
    table.set_viewport_size(200.0, 200.0);
    table.on_body_scroll(0.0, 100.0, 200.0);
    assert_eq!(table.visible_row_range(), (4, 13));
}

#[test]
fn test_scroll_coalesces_to_derivation_changes() {
    let table = pinned_table();
    table.on_body_scroll(20.0, 0.0, 240.0);
    table.clear_dirty();

    // Same seams, same row range: no re-render.
    table.on_body_scroll(21.0, 0.0, 240.0);
    assert!(!table.is_dirty());
    assert_eq!(table.scroll_left(), 21.0);

    // Scrolling back to zero empties the left seam.
    table.on_body_scroll(0.0, 0.0, 240.0);
    assert!(table.is_dirty());
}

#[test]
fn test_rows_and_cells() {
    let table = pinned_table();
    assert_eq!(table.len(), 2);
    let (index, row) = table.find_row("web-2").unwrap();
    assert_eq!(index, 1);
    assert_eq!(row.cell("addr"), "10.0.0.2");
    assert_eq!(row.cell("unknown"), "");
}

#[test]
fn test_sort_state_is_app_controlled() {
    let table: Table<Host> = Table::new(vec![
        Column::new("Name").key("name").sortable(),
        Column::new("Addr").key("addr"),
    ]);

    assert_eq!(table.toggle_sort(0), Some((0, true)));
    assert_eq!(table.toggle_sort(0), Some((0, false)));

    // Non-sortable and out-of-range columns are ignored.
    assert_eq!(table.toggle_sort(1), None);
    assert_eq!(table.toggle_sort(9), None);
    assert_eq!(table.sort(), Some((0, false)));

    table.clear_sort();
    assert_eq!(table.sort(), None);
}

#[test]
fn test_set_columns_resets_scroll_and_prunes_measurements() {
    let table = pinned_table();
    table.on_body_scroll(30.0, 0.0, 240.0);
    let token = table.report_column_width("a", 96.0);
    table.commit_widths(token);

    table.set_columns(vec![Column::new("B").key("b").width(100.0)]);
    assert_eq!(table.scroll_left(), 0.0);
    assert!(table.measured_widths().is_empty());
    assert_eq!(table.column_count(), 1);
}

//! Data grid example
//!
//! Drives the Table widget headlessly:
//! - batched column-width measurement (one commit per layout pass)
//! - sticky pin offsets and the scroll-dependent seam set
//! - head/body scroll mirroring and row windowing

use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use trellis::engine::sticky::FixedSide;
use trellis::widgets::table::{Column, Table, TableRow};

#[derive(Clone)]
struct Service {
    name: String,
    region: String,
    status: String,
}

impl TableRow for Service {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, column_key: &str) -> String {
        match column_key {
            "name" => self.name.clone(),
            "region" => self.region.clone(),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).ok();

    let rows: Vec<Service> = (0..40)
        .map(|i| Service {
            name: format!("svc-{i:02}"),
            region: if i % 2 == 0 { "eu-1" } else { "us-1" }.into(),
            status: if i % 7 == 0 { "degraded" } else { "ok" }.into(),
        })
        .collect();

    let table = Table::with_rows(
        vec![
            Column::new("Name").key("name").fixed(FixedSide::Left).width(80.0),
            Column::new("Region").key("region").width(100.0),
            Column::new("Status").key("status").fixed(FixedSide::Right).width(60.0),
        ],
        rows,
    );
    table.set_row_height(24.0);
    table.set_viewport_size(200.0, 240.0);

    // A layout pass measures every column; the reports merge into one commit.
    table.report_column_width("name", 88.0);
    table.report_column_width("region", 104.0);
    table.report_column_width("status", 64.0);
    table.commit_pending_widths();
    println!("measured widths: {:?}", table.measured_widths());

    // Scroll the body: the header mirrors it, the seam set updates.
    table.on_body_scroll(30.0, 120.0, 256.0);
    if let Some(head_left) = table.take_head_sync() {
        println!("head pane scrolled to {head_left}");
    }

    for index in 0..table.column_count() {
        let style = table.fixed_style(index);
        let boundary = table.fixed_boundary(index);
        println!("column {index}: fixed {style:?}, boundary {boundary:?}");
    }

    let (start, end) = table.visible_row_range();
    println!("visible rows [{start}, {end}):");
    for index in start..end {
        if let Some(row) = table.row(index) {
            println!("  {} | {} | {}", row.cell("name"), row.cell("region"), row.cell("status"));
        }
    }
}

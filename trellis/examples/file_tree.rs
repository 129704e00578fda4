//! File tree example
//!
//! Drives the Tree state machine the way a rendering host would:
//! - expand/collapse and default expansion
//! - tri-state checking with propagation
//! - fuzzy filtering without rebuilding the flattened arena

use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use trellis::widgets::tree::{ExpandDefault, Tree, TreeRow, TreeSource};

#[derive(Clone)]
struct FileNode {
    /// Unique path (used as key)
    path: String,
    /// Display name
    name: String,
    /// Child nodes (only for directories)
    children: Vec<FileNode>,
}

impl FileNode {
    fn file(path: &str, name: &str) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            children: vec![],
        }
    }

    fn dir(path: &str, name: &str, children: Vec<FileNode>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            children,
        }
    }
}

fn sample() -> Vec<FileNode> {
    vec![FileNode::dir(
        "/",
        "/",
        vec![
            FileNode::dir(
                "/src",
                "src",
                vec![
                    FileNode::file("/src/lib.rs", "lib.rs"),
                    FileNode::file("/src/main.rs", "main.rs"),
                ],
            ),
            FileNode::dir(
                "/tests",
                "tests",
                vec![FileNode::file("/tests/smoke.rs", "smoke.rs")],
            ),
            FileNode::file("/Cargo.toml", "Cargo.toml"),
        ],
    )]
}

fn print_rows(rows: &[TreeRow<FileNode>]) {
    for row in rows {
        let indent = "  ".repeat(row.level);
        let switcher = if row.is_leaf {
            " "
        } else if row.expanded {
            "-"
        } else {
            "+"
        };
        let check = if row.checked {
            "[x]"
        } else if row.half_checked {
            "[~]"
        } else {
            "[ ]"
        };
        println!("{indent}{switcher} {check} {}", row.data.name);
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).ok();

    let source = TreeSource::new(|n: &FileNode| {
        if n.children.is_empty() {
            None
        } else {
            Some(n.children.clone())
        }
    })
    .with_key(|n: &FileNode| n.path.clone());

    let tree = Tree::with_expand(source, sample(), ExpandDefault::All);

    println!("expanded:");
    print_rows(&tree.rows());

    tree.check("/src");
    tree.uncheck("/src/main.rs");
    println!("\nafter checking /src and unchecking main.rs:");
    print_rows(&tree.rows());

    let mask = tree.fuzzy_filter_keys("rs", |n| n.name.clone());
    tree.set_filter(Some(mask));
    println!("\nfiltered to *rs*:");
    print_rows(&tree.rows());
}

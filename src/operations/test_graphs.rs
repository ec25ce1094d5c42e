//! Graphs shared by the operation tests.

#![allow(clippy::unwrap_used)]

use crate::graph::NavGraph;
use crate::math::Point3;

/// Installs a test subscriber once. Defaults to WARN, overridable with
/// `RUST_LOG` (e.g. `RUST_LOG=navgraph=trace`).
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

/// Three vertices on the space diagonal: `[1,1,1]`, `[2,2,2]`, `[3,3,3]`.
pub fn line_graph() -> NavGraph {
    NavGraph::new(
        vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        ],
        vec![[0, 1], [1, 2]],
    )
    .unwrap()
}

/// Lattice of `cols` x `rows` vertices at `[x, y, 1]`, index `y * cols + x`,
/// with edges between axis-adjacent neighbours only.
pub fn grid_graph(cols: usize, rows: usize) -> NavGraph {
    let mut vertices = Vec::with_capacity(cols * rows);
    let mut edges = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            #[allow(clippy::cast_precision_loss)]
            vertices.push(Point3::new(x as f64, y as f64, 1.0));
            let i = y * cols + x;
            if x + 1 < cols {
                edges.push([i, i + 1]);
            }
            if y + 1 < rows {
                edges.push([i, i + cols]);
            }
        }
    }
    NavGraph::new(vertices, edges).unwrap()
}

/// Two unit segments with no connection: `0-1` along x at `z = 0`, `2-3`
/// along x at `z = 10`.
pub fn two_islands() -> NavGraph {
    NavGraph::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(1.0, 0.0, 10.0),
        ],
        vec![[0, 1], [2, 3]],
    )
    .unwrap()
}

//! Summarize a polygon and classify a grid of query points; prints JSON.
//!
//! Usage: `cargo run -p geometry-utils --example inside_report`

use anyhow::Result;
use geometry_utils::prelude::*;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let mut poly = Polygon::from_flat(&[
        -5.0, -2.0, 3.0, -1.0, 5.0, -1.0, 5.0, 4.0, 3.0, 0.0, 0.0, 0.0, -2.0, 2.0, -5.0, 2.0,
    ])?;
    poly.metadata_mut().insert("name".into(), json!("notched"));

    let bbox = poly.bounding_box()?;
    let mut queries = Vec::new();
    for i in 0..=10 {
        for j in 0..=6 {
            queries.push(vector(
                bbox.left() + bbox.width() * i as f64 / 10.0,
                bbox.bottom() + bbox.height() * j as f64 / 6.0,
            ));
        }
    }
    let inside = poly.contains_points(&queries)?;
    let n_inside = inside.iter().filter(|b| **b).count();
    tracing::info!(queries = queries.len(), inside = n_inside, "classified grid");

    let thin = poly.thin(vector(0.5, 0.5));
    let centroid = poly.centroid()?;
    let report = json!({
        "version": geometry_utils::VERSION,
        "polygon": poly,
        "bbox": bbox.corners().iter().map(|c| [c.x, c.y]).collect::<Vec<_>>(),
        "area": poly.area()?,
        "clockwise": poly.is_clockwise()?,
        "centroid": [centroid.x, centroid.y],
        "centroid_inside": poly.contains_point(centroid)?,
        "simple": poly.is_simple()?,
        "thinned_len": thin.len(),
        "inside": queries
            .iter()
            .zip(&inside)
            .filter(|(_, b)| **b)
            .map(|(q, _)| [q.x, q.y])
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

//! Render the CSC candidates for a query to an SVG file.
//!
//! Plans all feasible Dubins families between two poses, samples each
//! candidate, and draws them with the shortest one highlighted.
//!
//! Run with: `cargo run --example dubins_svg`
//! Output: `dubins_paths.svg` in the working directory

use svg::node::element::{Circle, Polyline};
use svg::Document;

use marga_dubins::{DubinsConfig, DubinsPlanner, Pose2, TurnDirection};

/// Colorblind-friendly family colors (Okabe-Ito).
fn family_color(dir1: TurnDirection, dir2: TurnDirection) -> &'static str {
    use TurnDirection::{Clockwise as Cw, CounterClockwise as Ccw};
    match (dir1, dir2) {
        (Cw, Cw) => "#0072B2",
        (Ccw, Ccw) => "#E69F00",
        (Ccw, Cw) => "#009E73",
        (Cw, Ccw) => "#D55E00",
    }
}

/// 100 pixels per meter, y flipped into screen coordinates.
fn to_screen(pose: &Pose2) -> (f64, f64) {
    (pose.pos.x * 100.0, -pose.pos.y * 100.0)
}

fn polyline_points(poses: &[Pose2]) -> String {
    poses
        .iter()
        .map(|p| {
            let (x, y) = to_screen(p);
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    env_logger::init();

    let planner = DubinsPlanner::new(DubinsConfig {
        turning_radius: 1.0,
        sample_resolution: 0.02,
    })
    .expect("valid config");

    let start = Pose2::new(0.0, 0.0, 0.0);
    let goal = Pose2::new(6.0, 3.0, 2.2);

    log::info!("1. Planning Dubins candidates...");
    let paths = planner.plan(start, goal);
    log::info!("   {} of 4 families feasible", paths.len());

    let shortest = planner
        .shortest(start, goal)
        .expect("at least one family feasible");

    log::info!("2. Rendering SVG...");
    let mut document = Document::new().set("viewBox", (-150, -550, 950, 800));

    for path in &paths {
        let is_shortest = path == &shortest;
        let line = Polyline::new()
            .set("points", polyline_points(&planner.sample(path)))
            .set("fill", "none")
            .set("stroke", family_color(path.dir1, path.dir2))
            .set("stroke-width", if is_shortest { 6 } else { 2 })
            .set("stroke-opacity", if is_shortest { 1.0 } else { 0.6 });
        document = document.add(line);

        log::info!(
            "   {}{}: {:.3} m{}",
            path.dir1,
            path.dir2,
            path.length(),
            if is_shortest { "  <- shortest" } else { "" }
        );
    }

    for pose in [&start, &goal] {
        let (x, y) = to_screen(pose);
        document = document.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", 8)
                .set("fill", "#000000"),
        );
    }

    svg::save("dubins_paths.svg", &document).expect("Failed to save SVG");
    log::info!("3. Wrote dubins_paths.svg");
}

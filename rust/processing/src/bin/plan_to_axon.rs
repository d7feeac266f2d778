// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert wall centerlines into an axonometric drawing
//!
//! Reads a JSON array of walls, runs the scene pipeline and writes either
//! the ordered face list (JSON) or a finished SVG drawing.
//!
//! Usage:
//!   plan-to-axon <walls.json> [options]

use axon_lite_processing::{generate_test_scene, render_scene, FaceStyle, SceneResult, WallSpec};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut input_path: Option<String> = None;
    let mut output_path = String::from("drawing.svg");
    let mut margin: f64 = 500.0;
    let mut use_demo = false;
    let mut as_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--demo" => {
                use_demo = true;
            }
            "--output" => {
                i += 1;
                output_path = args[i].clone();
            }
            "--json" => {
                as_json = true;
            }
            "--margin" => {
                i += 1;
                margin = args[i].parse().expect("Invalid margin value");
            }
            other if !other.starts_with("--") && input_path.is_none() => {
                input_path = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== Plan to Axonometric Drawing ===");
    println!();

    // Step 1: Load walls
    let walls: Vec<WallSpec> = if use_demo {
        println!("[1/4] Using built-in demo scene");
        generate_test_scene()
    } else {
        let path = input_path.unwrap_or_else(|| {
            eprintln!("Error: No input file given (or use --demo).");
            std::process::exit(1);
        });
        println!("[1/4] Loading walls: {}", path);
        let content = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error: Cannot read '{}': {}", path, e);
            std::process::exit(1);
        });
        serde_json::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Error: Cannot parse '{}': {}", path, e);
            std::process::exit(1);
        })
    };
    println!("  Walls: {}", walls.len());

    // Step 2: Render the scene
    println!("[2/4] Rendering scene...");
    let result = match render_scene(&walls) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error rendering scene: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "  Faces: {} ({} walls rendered, {} failed)",
        result.stats.face_count, result.stats.rendered_walls, result.stats.failed_walls
    );
    for failure in &result.failures {
        println!("  Wall {} skipped: {}", failure.wall_index, failure.message);
    }

    // Step 3: Serialize
    println!("[3/4] Writing output: {}", output_path);
    let content = if as_json || output_path.ends_with(".json") {
        serde_json::to_string_pretty(&result.faces).unwrap()
    } else {
        render_svg(&result, margin)
    };

    fs::write(&output_path, content).unwrap_or_else(|e| {
        eprintln!("Error: Cannot write '{}': {}", output_path, e);
        std::process::exit(1);
    });

    // Step 4: Summary
    println!("[4/4] Done");
    println!();
    println!("=== Drawing Summary ===");
    println!("  Walls:    {}", result.stats.wall_count);
    println!("  Faces:    {}", result.stats.face_count);
    println!(
        "  Timing:   geometry {}ms, sort {}ms, total {}ms",
        result.stats.geometry_time_ms, result.stats.sort_time_ms, result.stats.total_time_ms
    );
    println!();
    println!("Open {} in a viewer.", output_path);
}

/// Build the SVG document; faces appear in draw order so later elements
/// overpaint earlier ones
fn render_svg(result: &SceneResult, margin: f64) -> String {
    // Drawing bounds across all projected faces
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for face in &result.faces {
        for [x, y] in &face.points {
            min_x = min_x.min(*x);
            min_y = min_y.min(*y);
            max_x = max_x.max(*x);
            max_y = max_y.max(*y);
        }
    }

    if min_x > max_x {
        min_x = 0.0;
        min_y = 0.0;
        max_x = 1.0;
        max_y = 1.0;
    }

    let w = (max_x - min_x) + 2.0 * margin;
    let h = (max_y - min_y) + 2.0 * margin;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.1} {h:.1}">
<defs>
  <style>
    .face {{ stroke: #1a1a1a; stroke-width: 8; stroke-linejoin: round; }}
    .face-top {{ fill: #f2efe9; }}
    .face-side {{ fill: #d8d2c4; fill-rule: evenodd; }}
  </style>
</defs>
"#
    ));

    for face in &result.faces {
        let class = match face.style {
            FaceStyle::Top => "face face-top",
            FaceStyle::Side => "face face-side",
        };

        let mut points = String::new();
        for [x, y] in &face.points {
            // Flip y so heights point up on screen
            let sx = x - min_x + margin;
            let sy = (max_y - y) + margin;
            if !points.is_empty() {
                points.push(' ');
            }
            points.push_str(&format!("{:.1},{:.1}", sx, sy));
        }

        svg.push_str(&format!(
            "<polygon points=\"{}\" class=\"{}\"/>\n",
            points, class
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn print_usage() {
    println!(
        r#"Plan to Axonometric Drawing
===========================

Converts wall centerlines (JSON) into a depth-sorted axonometric drawing.

USAGE:
  plan-to-axon <walls.json> [OPTIONS]
  plan-to-axon --demo [OPTIONS]

INPUT:
  JSON array of walls, millimeter coordinates:
    [{{"centerline": [[0, 0], [4000, 0]], "thickness": 200, "height": 2700}}]

OPTIONS:
  --demo             Render the built-in 10m x 8m demo building
  --output <path>    Output file path (default: drawing.svg)
  --json             Write the ordered face list as JSON instead of SVG
  --margin <mm>      Blank border around the drawing (default: 500)
  -h, --help         Show this help message

EXAMPLES:
  # Quick check with the demo scene
  plan-to-axon --demo --output demo.svg

  # Render extracted walls and keep the raw face order
  plan-to-axon walls.json --json --output faces.json
"#
    );
}

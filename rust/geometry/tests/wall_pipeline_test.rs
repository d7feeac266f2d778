// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-stage scenario tests: a single 4m x 3m room extrusion and a
//! four-wall rectangular building run through the full stage chain.

use axon_lite_geometry::{
    build_footprint, cull_faces, depth_sort, extrude, is_depth_sorted, offset_centerline,
    project_faces, FaceKind, Footprint, Point2, Polyline, Wall,
};

fn room_centerline() -> Polyline {
    Polyline::new(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4000.0, 0.0),
            Point2::new(4000.0, 3000.0),
            Point2::new(0.0, 3000.0),
            Point2::new(0.0, 0.0),
        ],
        true,
    )
    .unwrap()
}

#[test]
fn test_room_outline_extrusion_counts() {
    // The room outline taken directly as a plan polygon: 4 corners give
    // 6 faces over 8 distinct vertices
    let footprint = Footprint::new(room_centerline().points().to_vec()).unwrap();
    let volume = extrude(&footprint, 2700.0).unwrap();

    assert_eq!(volume.faces.len(), 6);
    assert_eq!(volume.vertex_count(), 8);
    assert_eq!(
        volume
            .faces
            .iter()
            .filter(|f| f.kind == FaceKind::Side)
            .count(),
        4
    );

    // Culling only removes the bottom cap
    let visible = cull_faces(volume.faces, None);
    assert_eq!(visible.len(), 5);
    assert!(visible.iter().all(|f| f.kind != FaceKind::Bottom));
}

#[test]
fn test_closed_loop_full_stage_chain() {
    let wall = Wall::new(room_centerline(), 200.0, 2700.0).unwrap();

    let pair = offset_centerline(&wall.centerline, wall.thickness).unwrap();
    let footprint = build_footprint(&pair).unwrap();
    assert!(footprint.hole.is_some());

    let volume = extrude(&footprint, wall.height).unwrap();
    assert_eq!(volume.faces.len(), 10);

    let visible = cull_faces(volume.faces, None);
    let projected = project_faces(&visible);
    let ordered = depth_sort(projected);

    // Bottom cap gone, 9 faces left in a stable back-to-front order
    assert_eq!(ordered.len(), 9);
    assert!(is_depth_sorted(&ordered));
    assert!(ordered.iter().all(|f| f.kind != FaceKind::Bottom));

    // The first face drawn is the far outer side, not the top ring
    assert_eq!(ordered[0].kind, FaceKind::Side);
}

/// Four independent straight walls around a 10m x 8m plan
fn building_walls() -> Vec<Wall> {
    let corners = [
        (0.0, 0.0),
        (10_000.0, 0.0),
        (10_000.0, 8000.0),
        (0.0, 8000.0),
    ];

    (0..4)
        .map(|i| {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % 4];
            let centerline = Polyline::new(
                vec![Point2::new(x0, y0), Point2::new(x1, y1)],
                false,
            )
            .unwrap();
            Wall::new(centerline, 200.0, 2700.0).unwrap()
        })
        .collect()
}

#[test]
fn test_mock_building_vertex_and_edge_totals() {
    let walls = building_walls();
    assert_eq!(walls.len(), 4);

    let mut total_vertices = 0;
    let mut total_edges = 0;

    for wall in &walls {
        let pair = offset_centerline(&wall.centerline, wall.thickness).unwrap();
        let footprint = build_footprint(&pair).unwrap();
        assert_eq!(footprint.outer.len(), 4);

        let volume = extrude(&footprint, wall.height).unwrap();
        assert_eq!(volume.vertex_count(), 8);
        assert_eq!(volume.edge_count(), 12);

        total_vertices += volume.vertex_count();
        total_edges += volume.edge_count();
    }

    assert_eq!(total_vertices, 4 * 8);
    assert_eq!(total_edges, 4 * 12);
}

#[test]
fn test_mock_building_cross_wall_draw_order() {
    let walls = building_walls();

    let mut all_faces = Vec::new();
    for wall in &walls {
        let pair = offset_centerline(&wall.centerline, wall.thickness).unwrap();
        let footprint = build_footprint(&pair).unwrap();
        let volume = extrude(&footprint, wall.height).unwrap();
        let visible = cull_faces(volume.faces, None);
        all_faces.extend(project_faces(&visible));
    }

    // 5 visible faces per wall after the bottom caps are gone
    assert_eq!(all_faces.len(), 4 * 5);

    let ordered = depth_sort(all_faces);
    assert!(is_depth_sorted(&ordered));

    // Sorting again changes nothing
    let depths: Vec<f64> = ordered.iter().map(|f| f.depth).collect();
    let again = depth_sort(ordered);
    let depths_again: Vec<f64> = again.iter().map(|f| f.depth).collect();
    assert_eq!(depths, depths_again);
}

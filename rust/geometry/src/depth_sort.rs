// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Painter's-algorithm ordering of projected faces

use crate::projection::AxonFace;

/// Order faces back-to-front for overpainting.
///
/// The key is each face's camera-axis depth, ascending, so faces nearer the
/// camera are drawn after farther ones. The sort is stable: equal-depth
/// faces keep their input order, and re-sorting an ordered list is a no-op,
/// so repeated renders of the same scene never flicker.
pub fn depth_sort(mut faces: Vec<AxonFace>) -> Vec<AxonFace> {
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

/// Whether a face sequence is already in draw order
pub fn is_depth_sorted(faces: &[AxonFace]) -> bool {
    faces.windows(2).all(|w| w[0].depth <= w[1].depth)
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-level pipeline over the wall geometry stages.
//!
//! This crate owns everything that crosses the product boundary: the serde
//! types exchanged with the upstream topology extractor and the downstream
//! renderer, the parallel per-wall fan-out with failure isolation, and the
//! single cross-wall depth sort that fixes the draw order.

pub mod paths;
pub mod scene;
pub mod types;

pub use paths::{clean_paths, smooth_paths};
pub use scene::{generate_test_scene, render_scene, render_wall, SceneError};
pub use types::{
    FaceStyle, RawPathSpec, SceneFace, SceneResult, SceneStats, WallFailure, WallSpec,
};

//! WASM-facing entry points for hexagonal cell extraction.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `hexagonify_internal` to avoid depending on a JS host.
//!
//! ```
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let normals = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
//! let handle = hexagonify_wasm::hexagonify_internal(&positions, &normals, None).unwrap();
//! assert_eq!(handle.cell_count(), 1);
//! ```

use config::constants::{HEX_NORMAL_TEXTURE, HEX_POS_TEXTURE, MAX_TRAVERSAL_STEPS};
use config::traversal::HexagonifyConfig;
use hexagonify::{HexError, TraversalStatus, TriangleSoup};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "hexagonify_wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Default traversal step budget.
#[wasm_bindgen]
pub fn default_max_steps() -> u32 {
    u32::try_from(MAX_TRAVERSAL_STEPS).unwrap_or(u32::MAX)
}

/// Shader binding names, in `[positions, normals]` order.
#[wasm_bindgen]
pub fn binding_names() -> js_sys::Array {
    js_sys::Array::of2(
        &JsValue::from_str(HEX_POS_TEXTURE),
        &JsValue::from_str(HEX_NORMAL_TEXTURE),
    )
}

/// Result of a traversal, with every buffer flattened for upload.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = hexagonify(positions, normals);
/// // geometry.setAttribute("uv", new THREE.BufferAttribute(result.uvs(), 2));
/// // const size = result.texture_width();
/// // const hexPos = new THREE.DataTexture(result.hex_pos(), size, size, THREE.RGBAFormat, THREE.FloatType);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct HexagonifyHandle {
    uvs: Vec<f32>,
    hex_pos: Vec<f32>,
    hex_normal: Vec<f32>,
    texture_width: u32,
    cell_count: u32,
    steps: usize,
    truncated: bool,
}

#[wasm_bindgen]
impl HexagonifyHandle {
    /// Per-vertex `[cell id, outline]` pairs as a Float32Array.
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// `_HexPos` texels, RGBA row-major.
    pub fn hex_pos(&self) -> Vec<f32> {
        self.hex_pos.clone()
    }

    /// `_HexNormal` texels, RGBA row-major.
    pub fn hex_normal(&self) -> Vec<f32> {
        self.hex_normal.clone()
    }

    pub fn texture_width(&self) -> u32 {
        self.texture_width
    }

    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// True when the step budget ran out before the queue drained.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Extracts hexagonal cells from flat `xyz` position and normal buffers.
///
/// `max_steps` falls back to the default budget when omitted.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the buffers do not form a valid triangle soup.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const result = hexagonify(mesh.positions, mesh.normals);
/// // console.log("cells:", result.cell_count());
/// ```
#[wasm_bindgen]
pub fn hexagonify(
    positions: &[f32],
    normals: &[f32],
    max_steps: Option<u32>,
) -> Result<HexagonifyHandle, JsValue> {
    hexagonify_internal(positions, normals, max_steps.map(|steps| steps as usize))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that runs the traversal and returns Rust error types.
pub fn hexagonify_internal(
    positions: &[f32],
    normals: &[f32],
    max_steps: Option<usize>,
) -> Result<HexagonifyHandle, HexError> {
    let config = match max_steps {
        Some(steps) => HexagonifyConfig::default().with_max_steps(steps)?,
        None => HexagonifyConfig::default(),
    };
    let soup = TriangleSoup::from_flat(positions, normals)?;
    let output = hexagonify::hexagonify(&soup, &config)?;

    Ok(HexagonifyHandle {
        uvs: output.channels.uvs().into_iter().flatten().collect(),
        hex_pos: output.hex_pos.to_rgba_f32(),
        hex_normal: output.hex_normal.to_rgba_f32(),
        texture_width: output.hex_pos.width(),
        cell_count: u32::try_from(output.cells.cell_count()).unwrap_or(u32::MAX),
        steps: output.stats.steps,
        truncated: output.stats.status == TraversalStatus::Truncated,
    })
}

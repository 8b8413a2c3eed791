//! Scene serialization and file output

pub mod element;
pub mod emit;
pub mod error;
pub mod serialize;

pub use element::{AttrValue, Element};
pub use emit::{ensure_dir, SceneEmitter};
pub use error::{EmitError, Result};
pub use serialize::{render_scene, scene_element, BodyElement};

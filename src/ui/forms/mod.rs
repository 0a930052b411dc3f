//! Form rendering module
//!
//! - `field_renderer`: single-field rendering with inline errors
//! - `stage_form`: a full wizard stage with its navigation row

mod field_renderer;
mod stage_form;

pub use stage_form::draw_stage;

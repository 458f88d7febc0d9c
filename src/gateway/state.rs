use std::sync::Arc;

use crate::pipeline::CheckPipeline;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct HandlerState {
    pub pipeline: Arc<CheckPipeline>,
}

impl HandlerState {
    pub fn new(pipeline: Arc<CheckPipeline>) -> Self {
        Self { pipeline }
    }
}

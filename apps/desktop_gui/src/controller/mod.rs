//! Controller layer: worker events and command orchestration around the
//! session's `RequestController`.

pub mod events;
pub mod orchestration;

//! Live email-format validation over a reactive subject.
//!
//! The display layer forwards raw text into [`EmailFormModel::on_input`] and
//! reads the continuously updated [`EmailFormModel::is_valid`] flag to pick
//! its "valid" / "invalid" rendering. The model works over either subject
//! flavour from the `subjects` crate:
//!
//! - [`EmailFormModel::latest_value`] tracks the latest input and replays it,
//!   which suits a form field that always has a current state.
//! - [`EmailFormModel::event_driven`] treats each keystroke as a discrete
//!   event with no memory.
//!
//! Delivery of the derived boolean is marshalled onto an injected
//! single-threaded [`Executor`], standing in for the display toolkit's main
//! loop, so the model is testable without a UI runtime.

pub mod executor;
pub mod validation;
pub mod view_model;

pub use executor::{Executor, ImmediateExecutor, QueuedExecutor, Task};
pub use validation::is_likely_email;
pub use view_model::EmailFormModel;

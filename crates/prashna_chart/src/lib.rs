//! Chart aggregation and the question-answering interface.
//!
//! This crate orchestrates the lower layers into one [`Chart`] per query:
//! time conversion → ephemeris lookup (all 9 grahas + ascendant) → Moon
//! classification → Manglik → Vimshottari. A chart never partially fails:
//! only invalid time input or an out-of-range location aborts, and every
//! provider fallback still yields a complete, consistent object.
//!
//! Free-text questions route through [`classify_question`] to one or more
//! intents and render as text via [`answer_question`].

pub mod answer;
pub mod birth;
pub mod chart;
pub mod error;
pub mod intent;

pub use answer::{answer_question, chart_summary, run_question};
pub use birth::BirthInput;
pub use chart::{Chart, GrahaPosition, compute_chart};
pub use error::ChartError;
pub use intent::{Intent, classify_question};

//! The Clickforge studio: three model-backed jobs over a title and thumbnail.
//!
//! Data flows one way per job:
//!
//! ```text
//! user input → prompts → ModelDriver call → contract validation → Studio → Session
//! ```
//!
//! - [`encode_image`] validates and base64-encodes the thumbnail
//! - [`prompts`] builds the instruction text for each job
//! - [`Schema`] and [`StructuredResponse`] declare and enforce response shapes
//! - [`Studio`] runs [`Studio::analyze`], [`Studio::generate_combos`] and
//!   [`Studio::generate_script`]
//! - [`Session`] holds what a presentation shell displays, discarding results
//!   from superseded runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contract;
mod encoder;
pub mod prompts;
mod schema;
mod session;
mod settings;
mod studio;

pub use contract::{StructuredResponse, parse_structured};
pub use encoder::{ImageInput, MAX_IMAGE_BYTES, encode_image};
pub use schema::Schema;
pub use session::{JobKind, JobSlot, Session, SlotState, Ticket};
pub use settings::StudioSettings;
pub use studio::{COMBO_COUNT, Studio};

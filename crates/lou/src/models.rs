//! These models represent the objects that flow through a single chat turn
//!
//! There are two formats we need to interact with:
//! - the loosely shaped history sent by the browser client, normalized into [`turn::Turn`]
//! - the Gemini `generateContent` payload, built from [`content::Content`] and [`request`]
//!
//! Client data is converted into the internal structs as early as possible; the
//! provider payload is only built right before the outbound call.
pub mod content;
pub mod request;
pub mod role;
pub mod turn;

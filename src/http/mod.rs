//! HTTP utility module
//!
//! Path decoding, HTML escaping and response construction shared by the
//! request handler.

pub mod escape;
pub mod percent;
pub mod response;

pub use escape::escape_html;
pub use percent::decode_path;
pub use response::build_text_response;

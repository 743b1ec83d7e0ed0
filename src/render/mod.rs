mod escape;
mod linkify;

pub use escape::encode_html_entities;
pub use linkify::linkify;

pub mod defaults;
pub mod error;
pub mod extract;
pub mod renderer;
pub mod source;
pub mod text;

#[cfg(test)]
mod testing;

pub use error::{RenderError, RenderResult};
pub use extract::{TimestampStyle, extract};
pub use renderer::{DEFAULT_BASE_URL, DynForecastRenderer, ForecastRenderer};
pub use source::{ForecastSource, HttpForecastSource, SourceError};
pub use text::render_text;

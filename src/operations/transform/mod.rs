mod boxify;
mod translate;

pub use boxify::Boxify;
pub use translate::Translate;

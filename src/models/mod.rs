pub mod letter;
pub mod session;

pub use letter::*;
pub use session::*;

pub mod ambient;
pub mod constants;
pub mod parallax;
pub mod particles;
pub mod typing;
pub mod viewport;

pub use ambient::*;
pub use constants::*;
pub use parallax::*;
pub use particles::*;
pub use typing::*;
pub use viewport::*;

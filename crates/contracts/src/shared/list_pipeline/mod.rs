pub mod aggregate;
pub mod filter_state;
pub mod predicate;
pub mod record;
pub mod view;

pub use aggregate::*;
pub use filter_state::*;
pub use predicate::*;
pub use record::*;
pub use view::*;

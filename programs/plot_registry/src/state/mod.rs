pub mod plot_registry;
pub mod plot_map;
pub mod owner_record;

pub use plot_registry::*;
pub use plot_map::*;
pub use owner_record::*;

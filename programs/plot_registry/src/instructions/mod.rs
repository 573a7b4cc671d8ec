#![allow(ambiguous_glob_reexports)]

pub mod create_plot_map;
pub mod initialize;
pub mod claim_plot;
pub mod reset_plot;
pub mod change_max_plots_per_person;
pub mod transfer_plot;
pub mod read_plot;
pub mod get_owner_plot_count;

pub use create_plot_map::*;
pub use initialize::*;
pub use claim_plot::*;
pub use reset_plot::*;
pub use change_max_plots_per_person::*;
pub use transfer_plot::*;
pub use read_plot::*;
pub use get_owner_plot_count::*;

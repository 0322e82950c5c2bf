pub mod regions;
pub mod serve;
pub mod show;

pub use regions::list_regions;
pub use serve::serve;
pub use show::show;

mod system;

pub use system::SystemHost;

mod tasks;

pub use tasks::Tasks;

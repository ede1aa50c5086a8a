pub mod classes;
pub mod dialogs;
pub mod host;
pub mod provider;
pub mod scheduler;

#[cfg(test)]
mod test_support;

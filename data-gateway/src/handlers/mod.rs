pub mod collection;
pub mod health;
pub mod relay;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

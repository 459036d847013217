pub mod pipeline;
pub mod resizer;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

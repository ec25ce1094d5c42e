pub mod query;
pub mod routing;
pub mod search;

#[cfg(test)]
pub(crate) mod test_graphs;

mod catalog;
mod similarity;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use catalog::CatalogView;
pub use similarity::SimilarityView;

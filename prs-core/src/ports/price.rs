use crate::models::{BrandId, DateTime, PriceRecord, ProductId};

/// Read access to the price catalog.
///
/// # Candidate lookup
///
/// `find_candidates` returns the records that *may* apply to a product of a
/// brand at an instant. Implementations are expected to filter on product,
/// brand and window, but the resolver checks every candidate again, so
/// returning extra records only costs time. Missing a record that does apply
/// is a bug. The order of the returned records does not matter.
pub trait PriceRepository: super::Repository {
    /// Retrieve every record that could apply to `product_id` of `brand_id` at `at`.
    fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime,
    ) -> impl Future<Output = Result<Vec<PriceRecord>, Self::Error>> + Send;
}

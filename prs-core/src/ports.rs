mod price;

pub use price::PriceRepository;

/// Base repository trait shared by every storage port.
///
/// An implementation picks its own error type; the service layer carries it
/// through untouched so that the surrounding application can decide how to
/// report infrastructure failures.
pub trait Repository: Clone + Send + Sync + 'static {
    /// The error type for underlying operations
    type Error: std::error::Error + Send + Sync + 'static;
}

/// An application that owns a price repository.
///
/// Hosting layers (such as the REST server) are generic over this trait, so
/// any storage backend can be plugged in.
pub trait Application: Send + Sync + 'static {
    /// The repository serving the catalog
    type Repository: PriceRepository;

    /// Get a handle to the repository
    fn database(&self) -> &Self::Repository;
}

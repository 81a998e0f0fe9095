pub mod manhwaweb;
pub mod traits;
pub mod transport;

pub use manhwaweb::{ManhwaWebClient, ManhwaWebError};
pub use traits::CatalogSource;
pub use transport::{HttpTransport, Transport, TransportError};

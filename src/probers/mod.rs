pub mod http_prober;
pub mod mock_prober;

mod prober;
pub use http_prober::HttpProber;
pub use mock_prober::{MockProbe, MockProber};
pub use prober::Prober;

//! Recommendation client core: configuration, the remote call, the request
//! lifecycle state machine, and the view projection shared by every frontend.

pub mod config;
pub mod error;
pub mod session;
pub mod transport;
pub mod view;

pub use config::{load_client_config, ClientConfig};
pub use error::{FailureCategory, FetchError, EMPTY_IDENTIFIER_MESSAGE, FETCH_FAILED_MESSAGE};
pub use session::{
    PendingFetch, RequestController, SessionError, SessionState, SessionStatus, Settlement,
};
pub use transport::{HttpRecommendationSource, RecommendationSource};
pub use view::{render, Intent, PageView};

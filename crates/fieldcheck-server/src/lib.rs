//! # fieldcheck-server
//!
//! A small HTTP front end for `fieldcheck`. Each route decodes a JSON body,
//! runs it through the validator and answers with either `201 Created` or a
//! `400 Bad Request` listing every violation:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "name", "code": "required", "message": "is required"},
//!       {"field": "age", "code": "required", "message": "is required"}
//!     ]
//!   }
//! }
//! ```
//!
//! Routes:
//!
//! - `POST /profile` - `{"name": string, "age": int}`
//! - `POST /avengers` - `{"name", "age", "email", "rank", "missions"}`

mod error;
mod handlers;
mod models;
mod server;

pub use error::{json_response, validation_response, ApiError, Response, ServerError};
pub use handlers::{route, AppState, DEFAULT_BODY_LIMIT, INVALID_BODY};
pub use models::{Avenger, Profile};
pub use server::Server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info` with debug for both fieldcheck crates.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fieldcheck=debug,fieldcheck_server=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

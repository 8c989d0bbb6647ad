//! Identity passthrough.
//!
//! Session lifecycle is owned by a hosted identity provider; the server only
//! needs to know who a request belongs to, if anyone. Modeled as a trait so
//! handlers can be tested without the provider.

use async_trait::async_trait;
use nda_types::User;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The user attached to the given bearer token, or `None` when the
    /// request is anonymous or the token is not recognized.
    async fn current_user(&self, bearer_token: Option<&str>) -> Option<User>;
}

/// Provider used when no identity service is configured: every request is
/// anonymous.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn current_user(&self, _bearer_token: Option<&str>) -> Option<User> {
        None
    }
}

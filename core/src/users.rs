use crate::client::PocketSmithClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::User;

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_get_current_user(&self) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, "/me", Vec::new())
    }

    /// The user the developer key belongs to.
    pub fn get_current_user(&self) -> Result<User> {
        self.send(&self.build_get_current_user()?)
    }
}

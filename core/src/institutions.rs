use serde::Serialize;

use crate::client::PocketSmithClient;
use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::Institution;

#[derive(Serialize)]
struct CreateInstitution<'a> {
    title: &'a str,
    currency_code: &'a str,
}

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_list_institutions(&self, user_id: i64) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, &format!("/users/{user_id}/institutions"), Vec::new())
    }

    pub fn list_institutions(&self, user_id: i64) -> Result<Vec<Institution>> {
        self.send(&self.build_list_institutions(user_id)?)
    }

    pub fn build_create_institution(&self, user_id: i64, title: &str, currency_code: &str) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Post,
            &format!("/users/{user_id}/institutions"),
            Vec::new(),
            &CreateInstitution { title, currency_code },
        )
    }

    pub fn create_institution(&self, user_id: i64, title: &str, currency_code: &str) -> Result<Institution> {
        self.send(&self.build_create_institution(user_id, title, currency_code)?)
    }

    pub fn build_delete_institution(&self, institution_id: i64, merge_into_id: Option<i64>) -> Result<HttpRequest> {
        let query = merge_into_id
            .map(|target| vec![("merge_into_id".to_string(), target.to_string())])
            .unwrap_or_default();
        self.build_request(HttpMethod::Delete, &format!("/institutions/{institution_id}"), query)
    }

    /// Delete an institution. With `merge_into_id`, its accounts move to that
    /// institution first.
    pub fn delete_institution(&self, institution_id: i64, merge_into_id: Option<i64>) -> Result<()> {
        self.send_empty(&self.build_delete_institution(institution_id, merge_into_id)?)
    }

    pub fn find_institution_by_title(&self, user_id: i64, title: &str) -> Result<Institution> {
        self.list_institutions(user_id)?
            .into_iter()
            .find(|institution| institution.title == title)
            .ok_or(ClientError::NotFound)
    }

    /// First institution whose title contains `needle` (case-sensitive).
    pub fn find_institution_by_title_containing(&self, user_id: i64, needle: &str) -> Result<Institution> {
        self.list_institutions(user_id)?
            .into_iter()
            .find(|institution| institution.title.contains(needle))
            .ok_or(ClientError::NotFound)
    }
}

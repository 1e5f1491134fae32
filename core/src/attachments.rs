use serde::Serialize;

use crate::client::PocketSmithClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{Attachment, CreateAttachment, UpdateAttachment};

#[derive(Serialize)]
struct AttachToTransaction {
    attachment_id: i64,
}

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_list_attachments(&self, user_id: i64, unassigned_only: bool) -> Result<HttpRequest> {
        let query = if unassigned_only {
            vec![("unassigned".to_string(), "1".to_string())]
        } else {
            Vec::new()
        };
        self.build_request(HttpMethod::Get, &format!("/users/{user_id}/attachments"), query)
    }

    /// The user's attachments; with `unassigned_only`, just those not linked
    /// to any transaction.
    pub fn list_attachments(&self, user_id: i64, unassigned_only: bool) -> Result<Vec<Attachment>> {
        self.send(&self.build_list_attachments(user_id, unassigned_only)?)
    }

    pub fn build_create_attachment(&self, user_id: i64, input: &CreateAttachment) -> Result<HttpRequest> {
        self.build_json_request(HttpMethod::Post, &format!("/users/{user_id}/attachments"), Vec::new(), input)
    }

    pub fn create_attachment(&self, user_id: i64, input: &CreateAttachment) -> Result<Attachment> {
        self.send(&self.build_create_attachment(user_id, input)?)
    }

    pub fn build_list_transaction_attachments(&self, transaction_id: i64) -> Result<HttpRequest> {
        self.build_request(
            HttpMethod::Get,
            &format!("/transactions/{transaction_id}/attachments"),
            Vec::new(),
        )
    }

    pub fn list_transaction_attachments(&self, transaction_id: i64) -> Result<Vec<Attachment>> {
        self.send(&self.build_list_transaction_attachments(transaction_id)?)
    }

    pub fn build_attach_to_transaction(&self, transaction_id: i64, attachment_id: i64) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Post,
            &format!("/transactions/{transaction_id}/attachments"),
            Vec::new(),
            &AttachToTransaction { attachment_id },
        )
    }

    /// Link an existing attachment to a transaction.
    pub fn attach_to_transaction(&self, transaction_id: i64, attachment_id: i64) -> Result<()> {
        self.send_empty(&self.build_attach_to_transaction(transaction_id, attachment_id)?)
    }

    pub fn build_unassign_attachment(&self, transaction_id: i64, attachment_id: i64) -> Result<HttpRequest> {
        self.build_request(
            HttpMethod::Delete,
            &format!("/transactions/{transaction_id}/attachments/{attachment_id}"),
            Vec::new(),
        )
    }

    /// Unlink an attachment from a transaction. The attachment itself is kept.
    pub fn unassign_attachment(&self, transaction_id: i64, attachment_id: i64) -> Result<()> {
        self.send_empty(&self.build_unassign_attachment(transaction_id, attachment_id)?)
    }

    pub fn build_get_attachment(&self, attachment_id: i64) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, &format!("/attachments/{attachment_id}"), Vec::new())
    }

    pub fn get_attachment(&self, attachment_id: i64) -> Result<Attachment> {
        self.send(&self.build_get_attachment(attachment_id)?)
    }

    pub fn build_update_attachment(&self, attachment_id: i64, input: &UpdateAttachment) -> Result<HttpRequest> {
        self.build_json_request(HttpMethod::Put, &format!("/attachments/{attachment_id}"), Vec::new(), input)
    }

    pub fn update_attachment(&self, attachment_id: i64, input: &UpdateAttachment) -> Result<Attachment> {
        self.send(&self.build_update_attachment(attachment_id, input)?)
    }
}

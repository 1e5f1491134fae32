use crate::client::PocketSmithClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{Category, CategoryRule};

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_list_categories(&self, user_id: i64) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, &format!("/users/{user_id}/categories"), Vec::new())
    }

    /// Top-level categories; sub-categories are nested in `children`.
    pub fn list_categories(&self, user_id: i64) -> Result<Vec<Category>> {
        self.send(&self.build_list_categories(user_id)?)
    }

    pub fn build_list_category_rules(&self, user_id: i64) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, &format!("/users/{user_id}/category_rules"), Vec::new())
    }

    pub fn list_category_rules(&self, user_id: i64) -> Result<Vec<CategoryRule>> {
        self.send(&self.build_list_category_rules(user_id)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{stub_client, StubTransport};

    #[test]
    fn list_categories_decodes_children() {
        let client = stub_client(StubTransport::new().respond(
            200,
            r#"[{"id":1,"title":"Food","colour":null,"children":[{"id":2,"title":"Groceries","parent_id":1}]}]"#,
        ));
        let categories = client.list_categories(7).unwrap();
        assert_eq!(categories[0].children[0].parent_id, Some(1));
        assert_eq!(
            client.transport().last_request().url,
            "https://api.pocketsmith.com/v2/users/7/categories"
        );
    }

    #[test]
    fn list_category_rules_and_match() {
        let client = stub_client(StubTransport::new().respond(
            200,
            r#"[{"id":11,"payee_matches":"COUNTDOWN","category":{"id":2,"title":"Groceries"}}]"#,
        ));
        let rules = client.list_category_rules(7).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules[0].matches("COUNTDOWN PONSONBY"));
        assert_eq!(rules[0].category.as_ref().unwrap().title, "Groceries");
        assert_eq!(
            client.transport().last_request().url,
            "https://api.pocketsmith.com/v2/users/7/category_rules"
        );
    }
}

//! Pure request builders for every endpoint the core targets.
//!
//! # Design
//! `QueryGenerator` holds only a base URL and carries no state between calls,
//! so building the same request twice yields identical descriptors. Builders
//! take already-validated canonical targets (`UserTarget`, `ListTarget`), which
//! is why none of them can fail.
//!
//! Wire rules shared by every builder:
//! - a user is sent as `user_id` or `screen_name`, never both;
//! - optional parameters are omitted entirely when absent or empty;
//! - booleans and enum values are lowercase.

use crate::config::ClientConfig;
use crate::http::HttpRequest;
use crate::identifier::{ListTarget, UserTarget};
use crate::types::{CreateList, RelationshipAuthorizations};

#[derive(Debug, Clone)]
pub struct QueryGenerator {
    base_url: String,
}

impl QueryGenerator {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url)
    }

    // -----------------------------------------------------------------------
    // Friendships
    // -----------------------------------------------------------------------

    pub fn create_friendship(&self, user: &UserTarget) -> HttpRequest {
        with_user(HttpRequest::post(self.resource("friendships/create.json")), user)
            .with_param("follow", true)
    }

    pub fn destroy_friendship(&self, user: &UserTarget) -> HttpRequest {
        with_user(HttpRequest::post(self.resource("friendships/destroy.json")), user)
    }

    pub fn update_relationship_authorizations(
        &self,
        user: &UserTarget,
        authorizations: RelationshipAuthorizations,
    ) -> HttpRequest {
        with_user(HttpRequest::post(self.resource("friendships/update.json")), user)
            .with_param("device", authorizations.device_notifications_enabled)
            .with_param("retweets", authorizations.retweets_enabled)
    }

    /// Cursor template for users who asked to follow the authenticated user.
    pub fn user_ids_requesting_friendship(&self) -> HttpRequest {
        HttpRequest::get(self.resource("friendships/incoming.json"))
    }

    /// Cursor template for pending follow requests sent by the authenticated user.
    pub fn user_ids_you_requested_to_follow(&self) -> HttpRequest {
        HttpRequest::get(self.resource("friendships/outgoing.json"))
    }

    pub fn friend_ids(&self, user: &UserTarget) -> HttpRequest {
        with_user(HttpRequest::get(self.resource("friends/ids.json")), user)
    }

    pub fn follower_ids(&self, user: &UserTarget) -> HttpRequest {
        with_user(HttpRequest::get(self.resource("followers/ids.json")), user)
    }

    // -----------------------------------------------------------------------
    // Direct messages
    // -----------------------------------------------------------------------

    pub fn publish_message(&self, recipient: &UserTarget, text: &str) -> HttpRequest {
        with_user(HttpRequest::post(self.resource("direct_messages/new.json")), recipient)
            .with_param("text", text)
    }

    pub fn destroy_message(&self, message_id: u64) -> HttpRequest {
        HttpRequest::post(self.resource("direct_messages/destroy.json")).with_param("id", message_id)
    }

    pub fn get_message(&self, message_id: u64) -> HttpRequest {
        HttpRequest::get(self.resource("direct_messages/show.json")).with_param("id", message_id)
    }

    // -----------------------------------------------------------------------
    // Lists
    // -----------------------------------------------------------------------

    pub fn create_list(&self, input: &CreateList) -> HttpRequest {
        HttpRequest::post(self.resource("lists/create.json"))
            .with_param("name", &input.name)
            .with_param("mode", input.mode.as_str())
            .with_optional_param("description", input.description.as_deref())
    }

    pub fn get_list(&self, list: &ListTarget) -> HttpRequest {
        with_list(HttpRequest::get(self.resource("lists/show.json")), list)
    }

    pub fn destroy_list(&self, list: &ListTarget) -> HttpRequest {
        with_list(HttpRequest::post(self.resource("lists/destroy.json")), list)
    }
}

/// Add the single parameter naming a user.
fn with_user(request: HttpRequest, user: &UserTarget) -> HttpRequest {
    with_user_named(request, user, "user_id", "screen_name")
}

fn with_user_named(request: HttpRequest, user: &UserTarget, id_name: &str, name_name: &str) -> HttpRequest {
    match user {
        UserTarget::Id(id) => request.with_param(id_name, id),
        UserTarget::ScreenName(name) => request.with_param(name_name, name),
    }
}

fn with_list(request: HttpRequest, list: &ListTarget) -> HttpRequest {
    match list {
        ListTarget::Id(id) => request.with_param("list_id", id),
        ListTarget::Slug { slug, owner } => {
            with_user_named(request.with_param("slug", slug), owner, "owner_id", "owner_screen_name")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::types::PrivacyMode;

    fn generator() -> QueryGenerator {
        QueryGenerator::new("http://localhost:3000")
    }

    #[test]
    fn create_friendship_by_id() {
        let req = generator().create_friendship(&UserTarget::Id(42));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url(), "http://localhost:3000/friendships/create.json?user_id=42&follow=true");
    }

    #[test]
    fn create_friendship_by_screen_name() {
        let req = generator().create_friendship(&UserTarget::ScreenName("alice".to_string()));
        assert_eq!(req.param("screen_name"), Some("alice"));
        assert_eq!(req.param("user_id"), None);
    }

    #[test]
    fn destroy_friendship() {
        let req = generator().destroy_friendship(&UserTarget::Id(7));
        assert_eq!(req.url(), "http://localhost:3000/friendships/destroy.json?user_id=7");
    }

    #[test]
    fn update_relationship_renders_lowercase_booleans() {
        let req = generator().update_relationship_authorizations(
            &UserTarget::ScreenName("bob".to_string()),
            RelationshipAuthorizations::new(false, true),
        );
        assert_eq!(
            req.url(),
            "http://localhost:3000/friendships/update.json?screen_name=bob&device=true&retweets=false"
        );
    }

    #[test]
    fn pending_request_templates_have_no_params() {
        let g = generator();
        let incoming = g.user_ids_requesting_friendship();
        let outgoing = g.user_ids_you_requested_to_follow();
        assert_eq!(incoming.method, HttpMethod::Get);
        assert!(incoming.params.is_empty());
        assert_eq!(incoming.path, "http://localhost:3000/friendships/incoming.json");
        assert_eq!(outgoing.path, "http://localhost:3000/friendships/outgoing.json");
    }

    #[test]
    fn friend_and_follower_ids() {
        let g = generator();
        assert_eq!(
            g.friend_ids(&UserTarget::Id(1)).url(),
            "http://localhost:3000/friends/ids.json?user_id=1"
        );
        assert_eq!(
            g.follower_ids(&UserTarget::ScreenName("x".to_string())).url(),
            "http://localhost:3000/followers/ids.json?screen_name=x"
        );
    }

    #[test]
    fn publish_message_encodes_text() {
        let req = generator().publish_message(&UserTarget::Id(3), "hello world");
        assert_eq!(
            req.url(),
            "http://localhost:3000/direct_messages/new.json?user_id=3&text=hello%20world"
        );
    }

    #[test]
    fn message_by_id_requests() {
        let g = generator();
        let destroy = g.destroy_message(99);
        assert_eq!(destroy.method, HttpMethod::Post);
        assert_eq!(destroy.url(), "http://localhost:3000/direct_messages/destroy.json?id=99");
        let show = g.get_message(99);
        assert_eq!(show.method, HttpMethod::Get);
        assert_eq!(show.url(), "http://localhost:3000/direct_messages/show.json?id=99");
    }

    #[test]
    fn create_list_omits_missing_description() {
        let req = generator().create_list(&CreateList::new("rust", PrivacyMode::Private));
        assert_eq!(req.url(), "http://localhost:3000/lists/create.json?name=rust&mode=private");

        let req = generator().create_list(&CreateList::new("rust", PrivacyMode::Public).with_description(""));
        assert_eq!(req.param("description"), None);
    }

    #[test]
    fn create_list_with_description() {
        let req = generator().create_list(&CreateList::new("rust", PrivacyMode::Public).with_description("x"));
        let descriptions: Vec<_> = req.params.iter().filter(|(k, _)| k == "description").collect();
        assert_eq!(descriptions, vec![&("description".to_string(), "x".to_string())]);
    }

    #[test]
    fn list_by_id_and_slug() {
        let g = generator();
        assert_eq!(
            g.get_list(&ListTarget::Id(5)).url(),
            "http://localhost:3000/lists/show.json?list_id=5"
        );
        let slug = ListTarget::Slug {
            slug: "team".to_string(),
            owner: UserTarget::ScreenName("alice".to_string()),
        };
        assert_eq!(
            g.get_list(&slug).url(),
            "http://localhost:3000/lists/show.json?slug=team&owner_screen_name=alice"
        );
        let owned_by_id = ListTarget::Slug {
            slug: "team".to_string(),
            owner: UserTarget::Id(8),
        };
        let destroy = g.destroy_list(&owned_by_id);
        assert_eq!(destroy.method, HttpMethod::Post);
        assert_eq!(destroy.url(), "http://localhost:3000/lists/destroy.json?slug=team&owner_id=8");
    }

    #[test]
    fn generation_is_idempotent() {
        let g = generator();
        let input = CreateList::new("rust", PrivacyMode::Public).with_description("d");
        assert_eq!(g.create_list(&input), g.create_list(&input));
        assert_eq!(g.create_list(&input).url(), g.create_list(&input).url());
    }
}

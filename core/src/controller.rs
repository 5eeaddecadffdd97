//! Entry points for every social-graph operation.
//!
//! # Design
//! Each operation runs the same fixed pipeline: resolve the target, validate
//! preconditions, generate the request, then either make a single call or walk
//! the cursor to the end. Validation always finishes before a request is
//! built, so invalid input never reaches the transport.
//!
//! User-facing operations accept `impl Into<UserIdentifier>`, which covers a
//! numeric id, a screen name, a `&User` and a `UserIdentifier` with one code
//! path. Mutations return the raw JSON body; listings return ids.

use crate::config::ClientConfig;
use crate::cursor::CursorAccessor;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::identifier::{ListIdentifier, UserIdentifier};
use crate::query::QueryGenerator;
use crate::transport::{execute_for_body, Transport};
use crate::types::{CreateList, Message, PublishMessageParameters, RelationshipAuthorizations};
use crate::validate;

#[derive(Debug, Clone)]
pub struct SocialController<T> {
    queries: QueryGenerator,
    cursor: CursorAccessor,
    transport: T,
}

impl<T: Transport> SocialController<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            queries: QueryGenerator::from_config(config),
            cursor: CursorAccessor::new(),
            transport,
        }
    }

    pub fn queries(&self) -> &QueryGenerator {
        &self.queries
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call(&self, request: HttpRequest) -> Result<String, ApiError> {
        Ok(execute_for_body(&self.transport, &request)?)
    }

    fn collect(&self, template: HttpRequest) -> Result<Vec<u64>, ApiError> {
        self.cursor.collect_ids(&self.transport, &template)
    }

    // -----------------------------------------------------------------------
    // Friendships
    // -----------------------------------------------------------------------

    pub fn create_friendship_with(&self, user: impl Into<UserIdentifier>) -> Result<String, ApiError> {
        let target = validate::validate_identifiable(&user.into())?;
        self.call(self.queries.create_friendship(&target))
    }

    pub fn destroy_friendship_with(&self, user: impl Into<UserIdentifier>) -> Result<String, ApiError> {
        let target = validate::validate_identifiable(&user.into())?;
        self.call(self.queries.destroy_friendship(&target))
    }

    pub fn update_relationship_authorizations_with(
        &self,
        user: impl Into<UserIdentifier>,
        retweets_enabled: bool,
        device_notifications_enabled: bool,
    ) -> Result<String, ApiError> {
        let target = validate::validate_identifiable(&user.into())?;
        let authorizations = RelationshipAuthorizations::new(retweets_enabled, device_notifications_enabled);
        self.call(self.queries.update_relationship_authorizations(&target, authorizations))
    }

    pub fn get_user_ids_requesting_friendship(&self) -> Result<Vec<u64>, ApiError> {
        self.collect(self.queries.user_ids_requesting_friendship())
    }

    pub fn get_user_ids_you_requested_to_follow(&self) -> Result<Vec<u64>, ApiError> {
        self.collect(self.queries.user_ids_you_requested_to_follow())
    }

    pub fn get_friend_ids(&self, user: impl Into<UserIdentifier>) -> Result<Vec<u64>, ApiError> {
        let target = validate::validate_identifiable(&user.into())?;
        self.collect(self.queries.friend_ids(&target))
    }

    pub fn get_follower_ids(&self, user: impl Into<UserIdentifier>) -> Result<Vec<u64>, ApiError> {
        let target = validate::validate_identifiable(&user.into())?;
        self.collect(self.queries.follower_ids(&target))
    }

    // -----------------------------------------------------------------------
    // Direct messages
    // -----------------------------------------------------------------------

    pub fn publish_message(&self, params: &PublishMessageParameters) -> Result<String, ApiError> {
        let recipient = validate::validate_publishable(Some(params))?;
        // validate_publishable guarantees non-empty text
        let text = params.text.as_deref().unwrap_or_default();
        self.call(self.queries.publish_message(&recipient, text))
    }

    pub fn destroy_message(&self, message: &Message) -> Result<String, ApiError> {
        validate::validate_destroyable(Some(message))?;
        let id = validate::validate_destroyable_by_id(message.id)?;
        self.call(self.queries.destroy_message(id))
    }

    pub fn destroy_message_by_id(&self, message_id: Option<u64>) -> Result<String, ApiError> {
        let id = validate::validate_destroyable_by_id(message_id)?;
        self.call(self.queries.destroy_message(id))
    }

    pub fn get_message(&self, message_id: Option<u64>) -> Result<String, ApiError> {
        let id = validate::validate_message_id(message_id)?;
        self.call(self.queries.get_message(id))
    }

    // -----------------------------------------------------------------------
    // Lists
    // -----------------------------------------------------------------------

    pub fn create_list(&self, input: &CreateList) -> Result<String, ApiError> {
        self.call(self.queries.create_list(input))
    }

    pub fn get_list(&self, list: &ListIdentifier) -> Result<String, ApiError> {
        let target = validate::validate_list_identifier(list)?;
        self.call(self.queries.get_list(&target))
    }

    pub fn destroy_list(&self, list: &ListIdentifier) -> Result<String, ApiError> {
        let target = validate::validate_list_identifier(list)?;
        self.call(self.queries.destroy_list(&target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpMethod;
    use crate::testing::ScriptedTransport;
    use crate::types::{PrivacyMode, User};

    fn controller(replies: Vec<Result<String, TransportError>>) -> SocialController<ScriptedTransport> {
        SocialController::new(&ClientConfig::new("http://api.test"), ScriptedTransport::new(replies))
    }

    fn ok(body: &str) -> Result<String, TransportError> {
        Ok(body.to_string())
    }

    #[test]
    fn every_identifier_form_reaches_the_same_request() {
        let c = controller(vec![ok("{}"), ok("{}"), ok("{}"), ok("{}")]);
        let user = User {
            id: Some(12),
            screen_name: Some("alice".to_string()),
            name: None,
        };
        c.create_friendship_with(12u64).unwrap();
        c.create_friendship_with(&user).unwrap();
        c.create_friendship_with(UserIdentifier::new(Some(12), None)).unwrap();
        c.create_friendship_with("alice").unwrap();

        let sent = c.transport().requests();
        assert_eq!(sent[0], sent[1]);
        assert_eq!(sent[1], sent[2]);
        assert_eq!(sent[3].param("screen_name"), Some("alice"));
    }

    #[test]
    fn missing_identifier_makes_no_call() {
        let c = controller(Vec::new());
        let empty = UserIdentifier::default();
        assert!(matches!(c.create_friendship_with(&empty), Err(ApiError::MissingIdentifier)));
        assert!(matches!(c.destroy_friendship_with(&empty), Err(ApiError::MissingIdentifier)));
        assert!(matches!(
            c.update_relationship_authorizations_with(&empty, true, true),
            Err(ApiError::MissingIdentifier)
        ));
        assert!(matches!(c.get_friend_ids(&empty), Err(ApiError::MissingIdentifier)));
        assert!(matches!(c.get_follower_ids(&empty), Err(ApiError::MissingIdentifier)));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn mutation_returns_raw_json() {
        let c = controller(vec![ok(r#"{"id":7,"screen_name":"bob"}"#)]);
        let body = c.destroy_friendship_with(7u64).unwrap();
        assert_eq!(body, r#"{"id":7,"screen_name":"bob"}"#);
        assert_eq!(c.transport().requests()[0].method, HttpMethod::Post);
    }

    #[test]
    fn update_relationship_sends_both_switches() {
        let c = controller(vec![ok("{}")]);
        c.update_relationship_authorizations_with("carol", true, false).unwrap();
        let req = &c.transport().requests()[0];
        assert_eq!(req.param("retweets"), Some("true"));
        assert_eq!(req.param("device"), Some("false"));
    }

    #[test]
    fn incoming_requests_walk_the_cursor() {
        let c = controller(vec![
            ok(r#"{"ids":[10,11],"next_cursor":5}"#),
            ok(r#"{"ids":[12],"next_cursor":0}"#),
        ]);
        assert_eq!(c.get_user_ids_requesting_friendship().unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn outgoing_requests_use_their_own_endpoint() {
        let c = controller(vec![ok(r#"{"ids":[1],"next_cursor":0}"#)]);
        assert_eq!(c.get_user_ids_you_requested_to_follow().unwrap(), vec![1]);
        assert_eq!(
            c.transport().requests()[0].path,
            "http://api.test/friendships/outgoing.json"
        );
    }

    #[test]
    fn publish_invalid_message_makes_no_call() {
        let c = controller(Vec::new());
        let params = PublishMessageParameters::new("", "alice");
        assert!(matches!(c.publish_message(&params), Err(ApiError::InvalidMessageText)));
        let params = PublishMessageParameters::new("hi", UserIdentifier::default());
        assert!(matches!(c.publish_message(&params), Err(ApiError::InvalidRecipient)));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn publish_sends_text_to_recipient() {
        let c = controller(vec![ok(r#"{"id":1}"#)]);
        c.publish_message(&PublishMessageParameters::new("hello", 4u64)).unwrap();
        let req = &c.transport().requests()[0];
        assert_eq!(req.param("user_id"), Some("4"));
        assert_eq!(req.param("text"), Some("hello"));
    }

    #[test]
    fn destroy_message_checks_lifecycle_then_id() {
        let c = controller(vec![ok("{}")]);
        let mut message = Message {
            id: None,
            text: "x".to_string(),
            recipient: "a".into(),
            is_published: false,
            is_destroyed: false,
        };
        assert!(matches!(c.destroy_message(&message), Err(ApiError::NotYetPublished)));
        message.is_published = true;
        assert!(matches!(c.destroy_message(&message), Err(ApiError::MissingIdentifier)));
        message.id = Some(33);
        c.destroy_message(&message).unwrap();
        let sent = c.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].param("id"), Some("33"));
    }

    #[test]
    fn destroy_and_get_by_id_require_id() {
        let c = controller(Vec::new());
        assert!(matches!(c.destroy_message_by_id(None), Err(ApiError::MissingIdentifier)));
        assert!(matches!(c.get_message(Some(0)), Err(ApiError::MissingIdentifier)));
        assert!(matches!(c.get_message(None), Err(ApiError::MissingIdentifier)));
        assert!(c.transport().requests().is_empty());
    }

    #[test]
    fn list_operations() {
        let c = controller(vec![ok(r#"{"id":1}"#), ok(r#"{"id":1}"#), ok(r#"{"id":1}"#)]);
        c.create_list(&CreateList::new("team", PrivacyMode::Private)).unwrap();
        c.get_list(&ListIdentifier::from_slug("team", "alice")).unwrap();
        c.destroy_list(&ListIdentifier::from_id(1)).unwrap();
        assert!(matches!(
            c.get_list(&ListIdentifier::default()),
            Err(ApiError::MissingIdentifier)
        ));

        let sent = c.transport().requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].param("mode"), Some("private"));
        assert_eq!(sent[1].param("owner_screen_name"), Some("alice"));
        assert_eq!(sent[2].param("list_id"), Some("1"));
    }

    #[test]
    fn transport_error_is_propagated_unchanged() {
        let c = controller(vec![Err(TransportError::Status {
            status: 404,
            body: "nope".to_string(),
        })]);
        let err = c.get_list(&ListIdentifier::from_id(9)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport(TransportError::Status { status: 404, .. })
        ));
    }
}

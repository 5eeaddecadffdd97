use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

type Params = Query<HashMap<String, String>>;

/// Id of the account every request is made on behalf of.
pub const ME: u64 = 1;

pub const DEFAULT_PAGE_SIZE: usize = 5000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockUser {
    pub id: u64,
    pub screen_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectMessage {
    pub id: u64,
    pub text: String,
    pub sender_id: u64,
    pub recipient_id: u64,
    pub recipient_screen_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockList {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdsPage {
    pub ids: Vec<u64>,
    pub next_cursor: i64,
    pub previous_cursor: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendshipResult {
    pub id: u64,
    pub screen_name: String,
    pub following: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipSettings {
    pub target_id: u64,
    pub want_retweets: bool,
    pub notifications_enabled: bool,
}

/// In-memory state behind the router.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<MockUser>,
    /// (follower, followee)
    pub follows: BTreeSet<(u64, u64)>,
    pub incoming: Vec<u64>,
    pub outgoing: Vec<u64>,
    pub settings: HashMap<u64, RelationshipSettings>,
    pub messages: BTreeMap<u64, DirectMessage>,
    pub lists: BTreeMap<u64, MockList>,
    next_id: u64,
}

impl Store {
    /// A small world: `me`, three named users, and a queue of pending
    /// follow requests in both directions.
    pub fn seeded() -> Self {
        let users = [(ME, "me"), (2, "alice"), (3, "bob"), (4, "carol")]
            .into_iter()
            .map(|(id, name)| MockUser {
                id,
                screen_name: name.to_string(),
            })
            .collect();
        Self {
            users,
            follows: [(2, ME), (3, ME)].into_iter().collect(),
            incoming: (101..=107).collect(),
            outgoing: vec![201, 202],
            next_id: 1000,
            ..Self::default()
        }
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn find_user(&self, params: &HashMap<String, String>, id_key: &str, name_key: &str) -> Result<MockUser, StatusCode> {
        let found = if let Some(id) = params.get(id_key) {
            let id: u64 = id.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            self.users.iter().find(|u| u.id == id)
        } else if let Some(name) = params.get(name_key) {
            self.users.iter().find(|u| &u.screen_name == name)
        } else {
            return Err(StatusCode::BAD_REQUEST);
        };
        found.cloned().ok_or(StatusCode::NOT_FOUND)
    }

    fn find_list(&self, params: &HashMap<String, String>) -> Result<u64, StatusCode> {
        if let Some(id) = params.get("list_id") {
            let id: u64 = id.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            return self.lists.contains_key(&id).then_some(id).ok_or(StatusCode::NOT_FOUND);
        }
        let slug = params.get("slug").ok_or(StatusCode::BAD_REQUEST)?;
        let owner = self.find_user(params, "owner_id", "owner_screen_name")?;
        self.lists
            .values()
            .find(|l| &l.slug == slug && l.owner_id == owner.id)
            .map(|l| l.id)
            .ok_or(StatusCode::NOT_FOUND)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub page_size: usize,
}

pub fn app() -> Router {
    app_with(Store::seeded(), DEFAULT_PAGE_SIZE)
}

pub fn app_with(store: Store, page_size: usize) -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        page_size: page_size.max(1),
    };
    Router::new()
        .route("/friendships/create.json", post(create_friendship))
        .route("/friendships/destroy.json", post(destroy_friendship))
        .route("/friendships/update.json", post(update_friendship))
        .route("/friendships/incoming.json", get(incoming))
        .route("/friendships/outgoing.json", get(outgoing))
        .route("/friends/ids.json", get(friend_ids))
        .route("/followers/ids.json", get(follower_ids))
        .route("/direct_messages/new.json", post(new_message))
        .route("/direct_messages/destroy.json", post(destroy_message))
        .route("/direct_messages/show.json", get(show_message))
        .route("/lists/create.json", post(create_list))
        .route("/lists/show.json", get(show_list))
        .route("/lists/destroy.json", post(destroy_list))
        .with_state(state)
}

pub async fn run(listener: TcpListener, page_size: usize) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(Store::seeded(), page_size)).await
}

/// Slice `ids` at the offset encoded in the `cursor` parameter.
///
/// Cursors are offsets into the list; `-1` (or no cursor) starts at the top and
/// `0` is returned as the next cursor on the last page.
pub fn page_of(ids: &[u64], params: &HashMap<String, String>, page_size: usize) -> Result<IdsPage, StatusCode> {
    let cursor: i64 = match params.get("cursor") {
        Some(c) => c.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => -1,
    };
    let offset = match cursor {
        -1 => 0,
        c if c > 0 => c as usize,
        _ => return Err(StatusCode::BAD_REQUEST),
    };
    let end = offset.saturating_add(page_size).min(ids.len());
    let page = ids.get(offset..end).unwrap_or_default().to_vec();
    let next_cursor = if end < ids.len() { end as i64 } else { 0 };
    let previous_cursor = if offset == 0 { 0 } else { -(offset as i64) };
    Ok(IdsPage {
        ids: page,
        next_cursor,
        previous_cursor,
    })
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, StatusCode> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)
}

fn flag(params: &HashMap<String, String>, key: &str) -> Result<bool, StatusCode> {
    match required(params, key)? {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

// --- friendships ---

async fn create_friendship(State(state): State<AppState>, Query(params): Params) -> Result<Json<FriendshipResult>, StatusCode> {
    let mut store = state.store.write().await;
    let user = store.find_user(&params, "user_id", "screen_name")?;
    store.follows.insert((ME, user.id));
    tracing::debug!(target_id = user.id, "follow");
    Ok(Json(FriendshipResult {
        id: user.id,
        screen_name: user.screen_name,
        following: true,
    }))
}

async fn destroy_friendship(State(state): State<AppState>, Query(params): Params) -> Result<Json<FriendshipResult>, StatusCode> {
    let mut store = state.store.write().await;
    let user = store.find_user(&params, "user_id", "screen_name")?;
    store.follows.remove(&(ME, user.id));
    tracing::debug!(target_id = user.id, "unfollow");
    Ok(Json(FriendshipResult {
        id: user.id,
        screen_name: user.screen_name,
        following: false,
    }))
}

async fn update_friendship(State(state): State<AppState>, Query(params): Params) -> Result<Json<RelationshipSettings>, StatusCode> {
    let mut store = state.store.write().await;
    let user = store.find_user(&params, "user_id", "screen_name")?;
    let settings = RelationshipSettings {
        target_id: user.id,
        want_retweets: flag(&params, "retweets")?,
        notifications_enabled: flag(&params, "device")?,
    };
    store.settings.insert(user.id, settings.clone());
    Ok(Json(settings))
}

async fn incoming(State(state): State<AppState>, Query(params): Params) -> Result<Json<IdsPage>, StatusCode> {
    let store = state.store.read().await;
    page_of(&store.incoming, &params, state.page_size).map(Json)
}

async fn outgoing(State(state): State<AppState>, Query(params): Params) -> Result<Json<IdsPage>, StatusCode> {
    let store = state.store.read().await;
    page_of(&store.outgoing, &params, state.page_size).map(Json)
}

async fn friend_ids(State(state): State<AppState>, Query(params): Params) -> Result<Json<IdsPage>, StatusCode> {
    let store = state.store.read().await;
    let user = store.find_user(&params, "user_id", "screen_name")?;
    let ids: Vec<u64> = store
        .follows
        .iter()
        .filter(|(follower, _)| *follower == user.id)
        .map(|(_, followee)| *followee)
        .collect();
    page_of(&ids, &params, state.page_size).map(Json)
}

async fn follower_ids(State(state): State<AppState>, Query(params): Params) -> Result<Json<IdsPage>, StatusCode> {
    let store = state.store.read().await;
    let user = store.find_user(&params, "user_id", "screen_name")?;
    let ids: Vec<u64> = store
        .follows
        .iter()
        .filter(|(_, followee)| *followee == user.id)
        .map(|(follower, _)| *follower)
        .collect();
    page_of(&ids, &params, state.page_size).map(Json)
}

// --- direct messages ---

async fn new_message(State(state): State<AppState>, Query(params): Params) -> Result<Json<DirectMessage>, StatusCode> {
    let mut store = state.store.write().await;
    let recipient = store.find_user(&params, "user_id", "screen_name")?;
    let text = required(&params, "text")?.to_string();
    let message = DirectMessage {
        id: store.allocate_id(),
        text,
        sender_id: ME,
        recipient_id: recipient.id,
        recipient_screen_name: recipient.screen_name,
    };
    store.messages.insert(message.id, message.clone());
    Ok(Json(message))
}

fn message_id(params: &HashMap<String, String>) -> Result<u64, StatusCode> {
    required(params, "id")?.parse().map_err(|_| StatusCode::BAD_REQUEST)
}

async fn destroy_message(State(state): State<AppState>, Query(params): Params) -> Result<Json<DirectMessage>, StatusCode> {
    let id = message_id(&params)?;
    let mut store = state.store.write().await;
    store.messages.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn show_message(State(state): State<AppState>, Query(params): Params) -> Result<Json<DirectMessage>, StatusCode> {
    let id = message_id(&params)?;
    let store = state.store.read().await;
    store.messages.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// --- lists ---

async fn create_list(State(state): State<AppState>, Query(params): Params) -> Result<Json<MockList>, StatusCode> {
    let name = required(&params, "name")?.to_string();
    let mode = required(&params, "mode")?;
    if mode != "public" && mode != "private" {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = state.store.write().await;
    let list = MockList {
        id: store.allocate_id(),
        slug: name.to_lowercase().replace(' ', "-"),
        name,
        mode: mode.to_string(),
        description: params.get("description").cloned(),
        owner_id: ME,
    };
    store.lists.insert(list.id, list.clone());
    Ok(Json(list))
}

async fn show_list(State(state): State<AppState>, Query(params): Params) -> Result<Json<MockList>, StatusCode> {
    let store = state.store.read().await;
    let id = store.find_list(&params)?;
    store.lists.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn destroy_list(State(state): State<AppState>, Query(params): Params) -> Result<Json<MockList>, StatusCode> {
    let mut store = state.store.write().await;
    let id = store.find_list(&params)?;
    store.lists.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

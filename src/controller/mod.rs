//! View controllers binding resource calls to observable view state.
//!
//! A controller fires its fetches once, when it is constructed, and never
//! again. Each fetch runs on its own tokio task and writes only its own
//! slot of [`ViewState`], so the fetches of one controller resolve in any
//! order. Failed fetches leave their slot untouched: there is no loading
//! flag and no error slot.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::User;
use crate::resource::{Params, Resource, ResourceError};

/// The resource type controllers consume.
pub type UserResource = Arc<dyn Resource<Item = User>>;

/// What the view renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    /// Every user returned by the collection fetch. Empty until it resolves.
    pub users: Vec<User>,
    /// The single user fetched by the list-and-detail variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A controller holding observable view state.
///
/// Must be constructed inside a tokio runtime.
pub struct ViewController {
    state: Arc<watch::Sender<ViewState>>,
    tasks: Vec<JoinHandle<()>>,
}

impl ViewController {
    /// List all users.
    pub fn list(resource: UserResource) -> Self {
        let mut controller = Self::idle();
        controller.spawn_query(resource);
        controller
    }

    /// List all users and fetch the user with `id`.
    ///
    /// The two requests are issued back to back without waiting on each
    /// other.
    pub fn list_and_detail(resource: UserResource, id: i64) -> Self {
        let mut controller = Self::idle();
        controller.spawn_query(Arc::clone(&resource));
        controller.spawn_get(resource, Params::id(id));
        controller
    }

    fn idle() -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            state: Arc::new(state),
            tasks: Vec::new(),
        }
    }

    fn spawn_query(&mut self, resource: UserResource) {
        let state = Arc::clone(&self.state);
        self.tasks.push(tokio::spawn(async move {
            match resource.query().await {
                Ok(users) => state.send_modify(|s| s.users = users),
                Err(err) => unhandled("users", &err),
            }
        }));
    }

    fn spawn_get(&mut self, resource: UserResource, params: Params) {
        let state = Arc::clone(&self.state);
        self.tasks.push(tokio::spawn(async move {
            match resource.get(&params).await {
                Ok(user) => state.send_modify(|s| s.user = Some(user)),
                Err(err) => unhandled("user", &err),
            }
        }));
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever a fetch resolves.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Wait until every fetch issued at construction has resolved or been
    /// rejected, then return the final state.
    pub async fn settled(&mut self) -> ViewState {
        for task in self.tasks.drain(..) {
            if let Err(err) = task.await {
                tracing::error!(error = %err, "fetch task did not complete");
            }
        }
        self.state()
    }
}

/// Rejections are not handled by controllers; they are only logged.
fn unhandled(slot: &str, err: &ResourceError) {
    tracing::warn!(slot, error = %err, "possibly unhandled rejection");
}

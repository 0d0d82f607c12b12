//! Application controller: resolves routes into screens and applies user
//! actions to the overlay store.

use crate::{CliError, CliErrorResult};

use std::time::Instant;

use log::{debug, info};
use ud_client::{Client, ClientError, LoadState};
use ud_config::Config;
use ud_core::{
    EditView, FormField, FormSchema, ListView, OverlayStore, Route, SubmitOutcome, UserId,
    UserRecord,
};

/// What the current route shows
#[derive(Debug)]
pub enum Screen {
    List(LoadState<Vec<UserRecord>>),
    Edit {
        id: UserId,
        view: LoadState<EditView>,
    },
}

impl Screen {
    fn loading(route: Route) -> Self {
        match route {
            Route::List => Screen::List(LoadState::Loading),
            Route::EditUser(id) => Screen::Edit {
                id,
                view: LoadState::Loading,
            },
        }
    }
}

pub struct App {
    client: Client,
    store: OverlayStore,
    config: Config,
    schema: FormSchema,
    route: Route,
    screen: Screen,
}

impl App {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            store: OverlayStore::new(),
            schema: FormSchema::new(&config.validation),
            config,
            route: Route::List,
            screen: Screen::loading(Route::List),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut OverlayStore {
        &mut self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Switch to `route` with its data still loading
    pub fn start(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        self.route = route;
        self.screen = Screen::loading(route);
    }

    /// Fetch the data for the current route and settle the screen
    pub async fn load(&mut self) {
        self.screen = match self.route {
            Route::List => Screen::List(LoadState::resolve(self.client.fetch_list()).await),
            Route::EditUser(id) => {
                let state = LoadState::resolve(self.client.fetch_one(id)).await;
                let snapshot = self.store.snapshot();
                let schema = self.schema.clone();
                let delay = self.config.view.confirmation_delay();
                Screen::Edit {
                    id,
                    view: state.map(|raw| EditView::open(&raw, &snapshot, schema, delay)),
                }
            }
        };
    }

    pub async fn navigate(&mut self, route: Route) {
        self.start(route);
        self.load().await;
    }

    /// Take the fetch error out of a failed screen, leaving it loading
    pub fn take_failure(&mut self) -> Option<ClientError> {
        let failed = matches!(
            self.screen,
            Screen::List(LoadState::Failed(_))
                | Screen::Edit {
                    view: LoadState::Failed(_),
                    ..
                }
        );
        if !failed {
            return None;
        }

        match std::mem::replace(&mut self.screen, Screen::loading(self.route)) {
            Screen::List(LoadState::Failed(err))
            | Screen::Edit {
                view: LoadState::Failed(err),
                ..
            } => Some(err),
            _ => None,
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// List projection of the loaded users under the current overlay
    pub fn list_view(&self) -> Option<ListView> {
        match &self.screen {
            Screen::List(LoadState::Ready(users)) => Some(ListView::project(
                users,
                &self.store.snapshot(),
                self.config.view.list_limit,
            )),
            _ => None,
        }
    }

    pub fn edit_view(&self) -> Option<&EditView> {
        match &self.screen {
            Screen::Edit {
                view: LoadState::Ready(view),
                ..
            } => Some(view),
            _ => None,
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn archive(&mut self, id: UserId) {
        info!("Archiving user {}", id);
        self.store.archive_user(id);
    }

    pub fn unarchive(&mut self, id: UserId) {
        info!("Activating user {}", id);
        self.store.unarchive_user(id);
    }

    pub fn hide(&mut self, id: UserId) {
        info!("Hiding user {}", id);
        self.store.hide_user(id);
    }

    /// Type into a field and leave it. Returns the field's error, if any.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> CliErrorResult<Option<String>> {
        let view = self.edit_view_mut()?;
        view.form.set(field, value);
        Ok(view.form.blur(field).map(str::to_string))
    }

    pub fn save(&mut self, now: Instant) -> CliErrorResult<SubmitOutcome> {
        match &mut self.screen {
            Screen::Edit {
                view: LoadState::Ready(view),
                ..
            } => {
                let outcome = view.save(&mut self.store, now);
                if outcome.is_saved() {
                    info!("Saved local edit for user {}", view.user.id);
                }
                Ok(outcome)
            }
            _ => Err(CliError::session("No user form is open")),
        }
    }

    /// Dismiss the save confirmation early
    pub fn close_notice(&mut self) -> CliErrorResult<()> {
        self.edit_view_mut()?.notice.close();
        Ok(())
    }

    fn edit_view_mut(&mut self) -> CliErrorResult<&mut EditView> {
        match &mut self.screen {
            Screen::Edit {
                view: LoadState::Ready(view),
                ..
            } => Ok(view),
            _ => Err(CliError::session("No user form is open")),
        }
    }
}

//! Admin dashboard state.
//!
//! DESIGN
//! ======
//! Wraps [`content::Dashboard`] with the load status and the inline error
//! banner. Validation failures are not stored here: the page raises them as a
//! blocking alert and the form keeps its draft.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use content::{Clock, ContentStore, Dashboard, EditorError, StoragePort, StoreError, Submitted};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub dashboard: Dashboard,
    pub loaded: bool,
    pub error: Option<String>,
}

impl AdminState {
    /// State after loading both collections; load errors become the banner.
    pub fn loaded_from(dashboard: Dashboard, errors: &[StoreError]) -> Self {
        Self { dashboard, loaded: true, error: join_errors(errors) }
    }

    /// Submit the active form, updating the banner from the outcome.
    ///
    /// # Errors
    ///
    /// Passes through the editor's error so the page can react to validation.
    pub fn submit<S: StoragePort>(
        &mut self,
        store: &ContentStore<S>,
        clock: &impl Clock,
    ) -> Result<Submitted, EditorError> {
        let result = self.dashboard.submit(store, clock);
        self.error = match &result {
            Ok(_) | Err(EditorError::Validation(_)) => None,
            Err(e) => Some(e.notice()),
        };
        result
    }

    /// Delete a project after the user answered the confirmation prompt.
    pub fn delete_project<S: StoragePort>(&mut self, store: &ContentStore<S>, id: &str, confirmed: bool) {
        let result = self.dashboard.projects.delete(store, id, confirmed);
        self.record_delete(result);
    }

    /// Delete a floor plan after the user answered the confirmation prompt.
    pub fn delete_floor_plan<S: StoragePort>(&mut self, store: &ContentStore<S>, id: &str, confirmed: bool) {
        let result = self.dashboard.floor_plans.delete(store, id, confirmed);
        self.record_delete(result);
    }

    /// Discard the active tab's unreadable collection after confirmation.
    /// A successful reset clears the banner.
    pub fn reset_unreadable<S: StoragePort>(&mut self, store: &ContentStore<S>, confirmed: bool) {
        match self.dashboard.reset_unreadable(store, confirmed) {
            Ok(true) => self.error = None,
            Ok(false) => {}
            Err(e) => self.error = Some(e.notice()),
        }
    }

    fn record_delete(&mut self, result: Result<bool, EditorError>) {
        self.error = result.err().map(|e| e.notice());
    }
}

fn join_errors(errors: &[StoreError]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    let joined = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
    Some(format!("Some saved content could not be read: {joined}"))
}

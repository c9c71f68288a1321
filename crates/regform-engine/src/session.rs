//! One form session, from first keystroke to submit
//!
//! The session is the surface the embedding interface talks to. It owns the
//! partial submission exclusively for its whole lifetime, keeps the
//! manual-override gate and step machine consistent, and shields the
//! embedding layer from collaborator timing: results that arrive after the
//! session has ended are discarded, never applied.

use crate::{
    validator, FormStepMachine, LocationMode, ManualOverrideGate, PhoneDirectory,
    SearchScheduler, SearchSink, StoredSubmission, SubmissionStore,
};
use regform_locations::LocationResolver;
use regform_types::{
    CanonicalLocation, FieldChange, FieldErrorSet, FormError, FormResult, LocationRecord,
    PartialSubmission, Step, ValidationPolicy,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Callbacks the embedding interface registers with a session.
pub struct SessionHooks {
    /// Fired on every selection with the complete canonical location, even
    /// when the values happen to be unchanged.
    pub on_location_resolved: Arc<dyn Fn(CanonicalLocation) + Send + Sync>,
    /// Receives each debounced search's result list.
    pub on_search_results: SearchSink,
}

impl SessionHooks {
    pub fn noop() -> Self {
        Self {
            on_location_resolved: Arc::new(|_| {}),
            on_search_results: Arc::new(|_| {}),
        }
    }
}

/// What a submit call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator accepted the submission; the session is closed.
    Persisted(StoredSubmission),
    /// Another submit was still pending; this call did nothing.
    AlreadyInFlight,
}

struct SessionState {
    partial: PartialSubmission,
    gate: ManualOverrideGate,
    machine: FormStepMachine,
    policy: ValidationPolicy,
    errors: FieldErrorSet,
    scheduler: SearchScheduler,
}

impl SessionState {
    fn revalidate_current(&mut self) {
        self.errors = validator::validate(self.machine.current(), &self.partial, &self.policy);
    }
}

/// One active form session.
pub struct FormSession {
    state: Mutex<SessionState>,
    store: Arc<dyn SubmissionStore>,
    phones: Arc<dyn PhoneDirectory>,
    on_location_resolved: Arc<dyn Fn(CanonicalLocation) + Send + Sync>,
    closed: Arc<AtomicBool>,
    submit_in_flight: AtomicBool,
}

impl FormSession {
    /// Start a create-flow session with an empty submission.
    pub fn create(
        resolver: LocationResolver,
        store: Arc<dyn SubmissionStore>,
        phones: Arc<dyn PhoneDirectory>,
        hooks: SessionHooks,
    ) -> Arc<Self> {
        Self::start(
            PartialSubmission::new(),
            ValidationPolicy::for_create(),
            resolver,
            store,
            phones,
            hooks,
        )
    }

    /// Start an edit-flow session hydrated from an existing record. The
    /// record id rides along and routes the eventual submit to `update`.
    pub fn edit(
        existing: StoredSubmission,
        resolver: LocationResolver,
        store: Arc<dyn SubmissionStore>,
        phones: Arc<dyn PhoneDirectory>,
        hooks: SessionHooks,
    ) -> Arc<Self> {
        let mut partial = existing.submission;
        partial.id = Some(existing.id);
        Self::start(
            partial,
            ValidationPolicy::for_edit(),
            resolver,
            store,
            phones,
            hooks,
        )
    }

    fn start(
        partial: PartialSubmission,
        policy: ValidationPolicy,
        resolver: LocationResolver,
        store: Arc<dyn SubmissionStore>,
        phones: Arc<dyn PhoneDirectory>,
        hooks: SessionHooks,
    ) -> Arc<Self> {
        let closed = Arc::new(AtomicBool::new(false));

        // Search results outlive keystrokes; gate them on session liveness
        // so a torn-down consumer never sees a late delivery.
        let sink_closed = Arc::clone(&closed);
        let user_sink = hooks.on_search_results;
        let sink: SearchSink = Arc::new(move |hits| {
            if sink_closed.load(Ordering::SeqCst) {
                warn!("dropping search results for a closed session");
                return;
            }
            user_sink(hits);
        });

        info!(edit = partial.is_edit(), "form session started");
        Arc::new(Self {
            state: Mutex::new(SessionState {
                partial,
                gate: ManualOverrideGate::new(),
                machine: FormStepMachine::new(),
                policy,
                errors: FieldErrorSet::new(),
                scheduler: SearchScheduler::new(resolver, sink),
            }),
            store,
            phones,
            on_location_resolved: hooks.on_location_resolved,
            closed,
            submit_in_flight: AtomicBool::new(false),
        })
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self) -> FormResult<()> {
        if self.is_closed() {
            return Err(FormError::SessionClosed);
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn current_step(&self) -> Step {
        self.state().machine.current()
    }

    pub fn location_mode(&self) -> LocationMode {
        self.state().gate.mode()
    }

    /// A copy of the in-progress submission, for rendering.
    pub fn snapshot(&self) -> PartialSubmission {
        self.state().partial.clone()
    }

    /// The error set from the most recent validation pass.
    pub fn field_errors(&self) -> FieldErrorSet {
        self.state().errors.clone()
    }

    /// Validate one step on demand. Pure; does not touch the stored set.
    pub fn validate(&self, step: Step) -> FieldErrorSet {
        let state = self.state();
        validator::validate(step, &state.partial, &state.policy)
    }

    /// Apply a single field mutation, then recompute the current step's
    /// errors wholesale.
    ///
    /// Keystrokes on the location sub-fields are routed through the
    /// manual-override gate and are rejected unless manual entry is active.
    pub fn on_change(&self, change: FieldChange) -> FormResult<()> {
        self.ensure_open()?;
        let mut state = self.state();
        let location_input = change
            .as_location_input()
            .map(|(field, value)| (field, value.to_string()));
        match location_input {
            Some((field, value)) => {
                let SessionState { partial, gate, .. } = &mut *state;
                gate.manual_input(partial, field, &value)?;
            }
            None => state.partial.apply(change),
        }
        state.revalidate_current();
        Ok(())
    }

    /// Record a search keystroke; the actual index search runs after the
    /// quiet period, superseding any still-pending one.
    pub fn search(&self, query: impl Into<String>) -> FormResult<()> {
        self.ensure_open()?;
        self.state().scheduler.keystroke(query);
        Ok(())
    }

    /// Cascade a selected record into the submission.
    ///
    /// Fully overwrites the location sub-object (including manually typed
    /// values), cancels any pending search, and always fires the
    /// location-resolved callback.
    pub fn select_location(&self, record: &LocationRecord) -> FormResult<CanonicalLocation> {
        self.ensure_open()?;
        let canonical = CanonicalLocation::from(record);
        {
            let mut state = self.state();
            let SessionState {
                partial,
                gate,
                scheduler,
                ..
            } = &mut *state;
            gate.select(partial, &canonical);
            scheduler.cancel_pending();
            state.revalidate_current();
        }
        (self.on_location_resolved)(canonical.clone());
        Ok(canonical)
    }

    /// Erase the location sub-object and return to the search pathway.
    pub fn clear_location(&self) -> FormResult<()> {
        self.ensure_open()?;
        let mut state = self.state();
        let SessionState { partial, gate, .. } = &mut *state;
        gate.clear(partial);
        state.revalidate_current();
        Ok(())
    }

    /// Switch the location sub-object to free typing.
    pub fn enable_manual_entry(&self) -> FormResult<()> {
        self.ensure_open()?;
        self.state().gate.enable_manual()
    }

    /// Advance one step if the current step validates empty.
    pub fn next(&self) -> FormResult<Step> {
        self.ensure_open()?;
        let mut state = self.state();
        let SessionState {
            machine,
            partial,
            policy,
            ..
        } = &mut *state;
        let result = machine.next(partial, policy);
        state.revalidate_current();
        result
    }

    /// Step backward. Never re-validates, never blocks.
    pub fn prev(&self) -> FormResult<Step> {
        self.ensure_open()?;
        Ok(self.state().machine.prev())
    }

    /// Advisory duplicate-phone lookup for live feedback. The result is
    /// discarded if the session ended while the call was in flight.
    pub async fn check_phone_in_use(&self) -> FormResult<bool> {
        self.ensure_open()?;
        let (phone, exclude) = {
            let state = self.state();
            (
                state.partial.phone_number.clone(),
                state.partial.id.clone(),
            )
        };
        let in_use = self.phones.phone_in_use(&phone, exclude.as_ref()).await?;
        if self.is_closed() {
            warn!("discarding phone-check result for a closed session");
            return Err(FormError::SessionClosed);
        }
        Ok(in_use)
    }

    /// Hand the validated submission to the persistence collaborator.
    ///
    /// Only callable at the review step with every step validating empty.
    /// While one submit is pending, further calls are no-ops rather than
    /// queued, so rapid repeated activation cannot duplicate the
    /// persistence call. On failure the session stays at the review step
    /// for correction and retry.
    pub async fn submit(&self) -> FormResult<SubmitOutcome> {
        self.ensure_open()?;
        let payload = {
            let state = self.state();
            state.machine.ready_to_submit(&state.partial, &state.policy)?;
            state.partial.clone()
        };

        if self
            .submit_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submit already in flight; ignoring repeated activation");
            return Ok(SubmitOutcome::AlreadyInFlight);
        }

        let result = match payload.id.clone() {
            Some(id) => self.store.update(&id, &payload).await,
            None => self.store.create(&payload).await,
        };
        self.submit_in_flight.store(false, Ordering::SeqCst);

        if self.is_closed() {
            warn!("discarding submit result for a closed session");
            return Err(FormError::SessionClosed);
        }
        match result {
            Ok(stored) => {
                info!(id = %stored.id, "submission persisted");
                self.close();
                Ok(SubmitOutcome::Persisted(stored))
            }
            Err(err) => {
                warn!(error = %err, "submit failed; staying on the review step");
                Err(err.into())
            }
        }
    }

    /// End the session: cancel pending search work and discard any
    /// collaborator results still in flight.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.state().scheduler.cancel_pending();
    }
}

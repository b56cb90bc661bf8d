//! Publication composer.
//!
//! [`Composer`] owns one draft ([`ComposerSession`]) and turns it into a
//! publication: validation, optional poll creation, metadata upload, the
//! channel/dispatch decision, and the create (or sign and broadcast) call.
//!
//! One submission runs at a time per composer. The draft lock is never held
//! across an await; a snapshot is taken before the network work starts.

pub mod events;
pub mod mentions;
pub mod metadata;
pub mod planner;
pub mod registry;
pub mod validate;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ComposerError, ComposerResult, Surface, TRANSACTION_FAILED};
use crate::models::{
    BroadcastRequest, Channel, OpenActionModuleInput, Profile, ProfileStatus, PublicationKind,
    PublicationRef, PublicationRequest, PublicationTarget, RelayResult, SubmissionResponse,
};
use crate::state::{ComposerSession, ModalState, NonceStore};
use crate::traits::{
    arweave_uri, AnalyticsSink, LensApi, MetadataUploader, PollService, TypedDataSigner,
};

pub use events::PublicationEvent;
pub use metadata::MetadataBuilder;
pub use planner::{plan_submission, PlanInput};
pub use registry::{ActionContext, ActionPanel, ActionRegistry, ComposerAction, PanelState};

/// External collaborators of a composer.
#[derive(Clone)]
pub struct ComposerServices {
    pub api: Arc<dyn LensApi>,
    pub uploader: Arc<dyn MetadataUploader>,
    pub polls: Arc<dyn PollService>,
    pub signer: Arc<dyn TypedDataSigner>,
    pub analytics: Arc<dyn AnalyticsSink>,
    pub nonce: NonceStore,
}

/// Toast and banner currently shown by the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub toast: Option<String>,
    pub banner: Option<String>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationReceipt {
    pub kind: PublicationKind,
    pub content_uri: String,
    pub request: PublicationRequest,
    pub result: RelayResult,
}

/// Holds the loading flag for the duration of one submission.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Composer {
    id: Uuid,
    services: ComposerServices,
    comment_on: Option<PublicationRef>,
    session: Mutex<ComposerSession>,
    modals: Arc<Mutex<ModalState>>,
    feedback: Mutex<Feedback>,
    actions: Mutex<ActionRegistry>,
    is_loading: AtomicBool,
    alive: AtomicBool,
}

impl Composer {
    /// Composer for new posts and quotes.
    pub fn new(services: ComposerServices) -> Self {
        Self {
            id: Uuid::new_v4(),
            services,
            comment_on: None,
            session: Mutex::new(ComposerSession::new()),
            modals: Arc::new(Mutex::new(ModalState::default())),
            feedback: Mutex::new(Feedback::default()),
            actions: Mutex::new(ActionRegistry::new()),
            is_loading: AtomicBool::new(false),
            alive: AtomicBool::new(true),
        }
    }

    /// Composer embedded under a publication; everything it creates is a
    /// comment on `target`.
    pub fn for_comment(services: ComposerServices, target: PublicationRef) -> Self {
        Self {
            comment_on: Some(target),
            ..Self::new(services)
        }
    }

    /// Share modal state with the surrounding page.
    pub fn with_modals(mut self, modals: Arc<Mutex<ModalState>>) -> Self {
        self.modals = modals;
        self
    }

    pub fn with_actions(self, actions: ActionRegistry) -> Self {
        *lock(&self.actions) = actions;
        self
    }

    /// The draft.
    ///
    /// Take one guard at a time: a second `session()` call while a guard is
    /// alive (including twice in one expression) deadlocks. Do not hold the
    /// guard across an await.
    pub fn session(&self) -> MutexGuard<'_, ComposerSession> {
        lock(&self.session)
    }

    /// Edit the draft under a single short-lived lock.
    pub fn update_session<R>(&self, edit: impl FnOnce(&mut ComposerSession) -> R) -> R {
        edit(&mut lock(&self.session))
    }

    /// Copy of the draft; no lock is held afterwards.
    pub fn snapshot(&self) -> ComposerSession {
        lock(&self.session).clone()
    }

    pub fn modals(&self) -> ModalState {
        lock(&self.modals).clone()
    }

    pub fn feedback(&self) -> Feedback {
        lock(&self.feedback).clone()
    }

    pub fn is_comment(&self) -> bool {
        self.comment_on.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_comment() {
            "Comment"
        } else {
            "Post"
        }
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.session().set_content(content);
    }

    /// Open the new-post modal quoting `publication`.
    pub fn quote(&self, publication: PublicationRef) {
        self.session().publication.quoted_publication = Some(publication);
        lock(&self.modals).show_new_post_modal = true;
    }

    pub fn set_nft_open_action_embed(&self, embed: Option<OpenActionModuleInput>) {
        self.session().nft_open_action_embed = embed;
    }

    pub fn is_submit_disabled(&self) -> bool {
        if self.is_loading() {
            return true;
        }
        self.session().submit_blocker().is_some()
    }

    fn action_context(&self, status: ProfileStatus) -> ActionContext {
        ActionContext {
            is_comment: self.is_comment(),
            comment_target_on_momoka: self
                .comment_on
                .as_ref()
                .map(PublicationRef::has_momoka_proof)
                .unwrap_or(false),
            is_pro: status.is_pro,
        }
    }

    /// Toolbar actions shown for this composer.
    pub fn visible_actions(&self, status: ProfileStatus) -> Vec<ComposerAction> {
        let ctx = self.action_context(status);
        lock(&self.actions).visible(&ctx)
    }

    pub fn action_state(&self, action: ComposerAction) -> PanelState {
        lock(&self.actions).state(action)
    }

    /// Run an action's panel against the draft. Returns false when the
    /// action is hidden.
    pub fn activate_action(&self, action: ComposerAction, status: ProfileStatus) -> bool {
        let ctx = self.action_context(status);
        let mut actions = lock(&self.actions);
        match actions.panel_mut(action, &ctx) {
            Some(panel) => {
                panel.activate(&mut self.session());
                true
            }
            None => false,
        }
    }

    /// Throw the draft away.
    pub fn discard(&self) {
        {
            let mut session = self.session();
            session.publication.quoted_publication = None;
            session.reset();
        }
        let mut modals = lock(&self.modals);
        modals.show_new_post_modal = false;
        modals.show_discard_modal = false;
    }

    /// The composer is going away. Safe to call more than once.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.session().reset();
        debug!(composer = %self.id, "Composer torn down");
    }

    /// Submit the draft as a post, comment or quote.
    ///
    /// On success the draft is reset and analytics are emitted. On failure
    /// the draft is left untouched and the error is also recorded on the
    /// surface it belongs to (field, toast or banner).
    pub async fn create_publication(
        &self,
        profile: Option<&Profile>,
        status: ProfileStatus,
    ) -> ComposerResult<PublicationReceipt> {
        let _loading = match LoadingGuard::acquire(&self.is_loading) {
            Some(guard) => guard,
            None => return Err(ComposerError::SubmissionInFlight),
        };
        let blocker = self.session().submit_blocker();
        if let Some(reason) = blocker {
            debug!(composer = %self.id, reason, "Submission blocked");
            return Err(ComposerError::SubmissionBlocked { reason });
        }
        *lock(&self.feedback) = Feedback::default();

        let profile = match profile {
            Some(profile) => profile,
            None => return Err(self.fail(ComposerError::AuthRequired)),
        };
        if status.is_suspended {
            return Err(self.fail(ComposerError::AccountSuspended));
        }

        let snapshot = self.snapshot();
        let target = PublicationTarget::resolve(
            self.comment_on.as_ref(),
            snapshot.publication.quoted_publication.as_ref(),
        );

        match self.submit(profile, &snapshot, &target).await {
            Ok(receipt) => {
                self.complete(&receipt, &snapshot, &target);
                Ok(receipt)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn submit(
        &self,
        profile: &Profile,
        draft: &ComposerSession,
        target: &PublicationTarget,
    ) -> ComposerResult<PublicationReceipt> {
        let kind = target.kind();
        validate::validate_draft(draft, kind)?;
        self.session().content_error = None;

        let poll_id = if draft.poll.show_poll_editor {
            let id = self
                .services
                .polls
                .create_poll(&draft.poll.poll_config)
                .await?;
            debug!(poll_id = %id, "Poll created");
            Some(id)
        } else {
            None
        };

        let metadata = MetadataBuilder::new(draft, profile, kind)
            .poll_id(poll_id)
            .build();
        let id = self.services.uploader.upload(&metadata).await?;
        let content_uri = arweave_uri(&id);
        debug!(%content_uri, "Metadata uploaded");

        let collect = &draft.collect.collect_module;
        let plan = PlanInput {
            target: target.clone(),
            content_uri: content_uri.clone(),
            has_collect_module: collect.is_configured(),
            collect_params: collect.params(),
            nft_open_action_embed: draft.nft_open_action_embed.clone(),
            reference_module: draft.reference.input(),
            can_use_lens_manager: profile.can_use_lens_manager(),
            nonce: self.services.nonce.current(),
        };
        let request = plan_submission(&plan);
        info!(
            composer = %self.id,
            operation = request.operation(),
            channel = ?request.channel(),
            dispatch = ?request.dispatch(),
            "Submitting publication"
        );

        let result = match self.services.api.create_publication(&request).await? {
            SubmissionResponse::Relayed(result) => result,
            SubmissionResponse::TypedData(typed) => {
                let signature = self
                    .services
                    .signer
                    .sign_typed_data(&typed.typed_data)
                    .await?;
                let broadcast = BroadcastRequest {
                    id: typed.id,
                    signature,
                };
                let result = self
                    .services
                    .api
                    .broadcast(request.channel(), &broadcast)
                    .await?;
                if request.channel() == Channel::Onchain && !result.is_rejection() {
                    let nonce = self.services.nonce.increment();
                    debug!(nonce, "Signature nonce advanced");
                }
                result
            }
        };

        if let Some(reason) = result.rejection_reason() {
            warn!(typename = result.typename(), reason, "Relay rejected publication");
            return Err(ComposerError::RelayRejected {
                typename: result.typename(),
                reason: reason.to_string(),
            });
        }

        Ok(PublicationReceipt {
            kind,
            content_uri,
            request,
            result,
        })
    }

    fn complete(
        &self,
        receipt: &PublicationReceipt,
        draft: &ComposerSession,
        target: &PublicationTarget,
    ) {
        if !self.is_alive() {
            debug!(composer = %self.id, "Submission finished after teardown; skipping completion");
            return;
        }

        {
            let mut session = self.session();
            session.publication.quoted_publication = None;
            session.reset();
        }
        if receipt.kind != PublicationKind::Comment {
            lock(&self.modals).show_new_post_modal = false;
        }

        let event = PublicationEvent::capture(draft, target);
        self.services
            .analytics
            .track(events::event_name(receipt.kind), event.to_value());
        info!(
            composer = %self.id,
            reference = receipt.result.reference().unwrap_or_default(),
            "{} created",
            receipt.kind.label()
        );
    }

    /// Record the error on its surface and hand it back.
    fn fail(&self, err: ComposerError) -> ComposerError {
        warn!(
            composer = %self.id,
            code = err.error_code(),
            category = %err.category(),
            "Submission failed: {}",
            err
        );
        if !self.is_alive() {
            return err;
        }

        match err.surface() {
            Surface::Field => {
                self.session().content_error = Some(err.user_message());
            }
            Surface::Toast => {
                lock(&self.feedback).toast = Some(err.user_message());
            }
            Surface::Banner => {
                let mut feedback = lock(&self.feedback);
                feedback.toast = Some(err.user_message());
                feedback.banner = Some(TRANSACTION_FAILED.to_string());
            }
        }
        err
    }
}

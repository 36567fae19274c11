use std::any::Any;

use gatehouse_states::State;

use super::api::UserChangeBody;
use super::model::UserRecord;

/// Where the edit dialog currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    /// No dialog session.
    #[default]
    Closed,

    /// A draft is open for editing.
    Editing,

    /// A write is in flight; dialog input is blocked until it resolves.
    Saving,

    /// The user asked to leave with unsaved changes; a confirmation is up.
    ConfirmingExit,
}

/// The edit dialog state machine.
///
/// One session = one user record. The session owns a draft cloned from the
/// original record; the dirty flag is always derived as `draft != original`
/// (whole-record structural equality, never per-field bookkeeping). The
/// draft is either persisted whole or discarded whole.
#[derive(Debug, Default)]
pub struct EditWorkflowState {
    phase: EditPhase,
    original: Option<UserRecord>,
    draft: Option<UserRecord>,
    display_name_error: bool,
    email_error: bool,

    /// Pending text in the group tag editor. Not part of the draft, so it
    /// never counts towards dirtiness.
    pub group_entry: String,
}

impl EditWorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Closed
    }

    /// Start a session for `record`.
    ///
    /// Always resets: opening with a different record while a session exists
    /// starts fresh, so no state leaks between sessions. The primary email
    /// slot is ensured on both copies so the list shape is canonical and the
    /// comparison stays clean.
    pub fn open(&mut self, mut record: UserRecord) {
        if record.emails.is_empty() {
            record.emails.push(String::new());
        }
        self.original = Some(record.clone());
        self.draft = Some(record);
        self.phase = EditPhase::Editing;
        self.display_name_error = false;
        self.email_error = false;
        self.group_entry.clear();
    }

    pub fn username(&self) -> Option<&str> {
        self.original.as_ref().map(|r| r.username.as_str())
    }

    pub fn draft(&self) -> Option<&UserRecord> {
        self.draft.as_ref()
    }

    /// Mutable access for field editors. Dirtiness needs no notification:
    /// it is re-derived on every read.
    pub fn draft_mut(&mut self) -> Option<&mut UserRecord> {
        self.draft.as_mut()
    }

    pub fn is_dirty(&self) -> bool {
        match (&self.draft, &self.original) {
            (Some(draft), Some(original)) => draft != original,
            _ => false,
        }
    }

    pub fn display_name_error(&self) -> bool {
        self.display_name_error
    }

    pub fn email_error(&self) -> bool {
        self.email_error
    }

    pub fn add_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        if group.trim().is_empty() {
            return;
        }
        if let Some(draft) = self.draft.as_mut()
            && !draft.groups.contains(&group)
        {
            draft.groups.push(group);
        }
    }

    pub fn remove_group(&mut self, index: usize) {
        if let Some(draft) = self.draft.as_mut()
            && index < draft.groups.len()
        {
            draft.groups.remove(index);
        }
    }

    /// Validate the draft and, if it passes, enter `Saving` and hand back the
    /// write body.
    ///
    /// Only meaningful from `Editing` with unsaved changes. The two checks
    /// run independently so both error flags can light up at once; any
    /// failure aborts before a request body exists.
    pub fn begin_save(&mut self) -> Option<UserChangeBody> {
        if self.phase != EditPhase::Editing || !self.is_dirty() {
            return None;
        }
        let draft = self.draft.as_ref()?;

        self.display_name_error = draft.display_name.trim().is_empty();
        self.email_error = draft.primary_email().is_none_or(str::is_empty);

        if self.display_name_error || self.email_error {
            return None;
        }

        self.phase = EditPhase::Saving;
        Some(UserChangeBody {
            username: draft.username.clone(),
            display_name: draft.display_name.clone(),
            email: draft.primary_email().unwrap_or_default().to_owned(),
            groups: draft.groups.clone(),
        })
    }

    /// The write resolved; the session is over. The caller marks the
    /// directory stale and pushes the success toast.
    pub fn save_succeeded(&mut self) {
        if self.phase == EditPhase::Saving {
            self.close();
        }
    }

    /// The write failed. Stale field-error flags are cleared (the failure was
    /// not a validation problem) and the draft survives so the user can retry
    /// or cancel.
    pub fn save_failed(&mut self) {
        if self.phase == EditPhase::Saving {
            self.display_name_error = false;
            self.email_error = false;
            self.phase = EditPhase::Editing;
        }
    }

    /// The user asked to dismiss the dialog.
    ///
    /// Clean sessions close immediately; dirty ones move to the blocking
    /// confirmation. Ignored while a write is in flight.
    pub fn request_close(&mut self) {
        if self.phase != EditPhase::Editing {
            return;
        }
        if self.is_dirty() {
            self.phase = EditPhase::ConfirmingExit;
        } else {
            self.close();
        }
    }

    /// Discard the draft and leave.
    pub fn confirm_exit(&mut self) {
        if self.phase == EditPhase::ConfirmingExit {
            self.draft = self.original.clone();
            self.close();
        }
    }

    /// Back to editing; the draft is untouched.
    pub fn cancel_exit(&mut self) {
        if self.phase == EditPhase::ConfirmingExit {
            self.phase = EditPhase::Editing;
        }
    }

    fn close(&mut self) {
        *self = Self::default();
    }
}

impl State for EditWorkflowState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

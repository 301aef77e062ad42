// ============================================================================
// FORM STATE - Drafts bound to the form inputs
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{
    DiagnosisDraft, FileUploadDraft, ImportDraft, LoginDraft, PrescriptionDraft, RegisterDraft,
    VisitDraft,
};

/// One draft per form. Inputs write through on every keystroke, a successful
/// submit resets the draft to its defaults.
#[derive(Clone, Default)]
pub struct FormState {
    pub login: Rc<RefCell<LoginDraft>>,
    pub register: Rc<RefCell<RegisterDraft>>,
    pub visit: Rc<RefCell<VisitDraft>>,
    pub diagnosis: Rc<RefCell<DiagnosisDraft>>,
    pub prescription: Rc<RefCell<PrescriptionDraft>>,
    pub upload: Rc<RefCell<FileUploadDraft>>,
    pub import: Rc<RefCell<ImportDraft>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_all(&self) {
        *self.login.borrow_mut() = LoginDraft::default();
        *self.register.borrow_mut() = RegisterDraft::default();
        *self.visit.borrow_mut() = VisitDraft::default();
        *self.diagnosis.borrow_mut() = DiagnosisDraft::default();
        *self.prescription.borrow_mut() = PrescriptionDraft::default();
        *self.upload.borrow_mut() = FileUploadDraft::default();
        *self.import.borrow_mut() = ImportDraft::default();
    }
}

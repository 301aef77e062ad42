// ============================================================================
// DATA STATE - Collections fetched from the backend
// ============================================================================
// Every list is replaced wholesale by the fetch that owns it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{
    DashboardStats, Doctor, ImportResult, MedicalFile, MedicalRecord, Patient, Prescription, Visit,
};

#[derive(Clone, Default)]
pub struct DataState {
    pub stats: Rc<RefCell<DashboardStats>>,
    pub records: Rc<RefCell<Vec<MedicalRecord>>>,
    pub patients: Rc<RefCell<Vec<Patient>>>,
    pub doctors: Rc<RefCell<Vec<Doctor>>>,
    pub visits: Rc<RefCell<Vec<Visit>>>,
    pub prescriptions: Rc<RefCell<Vec<Prescription>>>,
    pub files: Rc<RefCell<Vec<MedicalFile>>>,
    /// Outcome of the last patient import, shown until the next one
    pub import_result: Rc<RefCell<Option<ImportResult>>>,
}

impl DataState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stats(&self, stats: DashboardStats) {
        *self.stats.borrow_mut() = stats;
    }

    pub fn set_records(&self, records: Vec<MedicalRecord>) {
        *self.records.borrow_mut() = records;
    }

    pub fn set_patients(&self, patients: Vec<Patient>) {
        *self.patients.borrow_mut() = patients;
    }

    pub fn set_doctors(&self, doctors: Vec<Doctor>) {
        *self.doctors.borrow_mut() = doctors;
    }

    pub fn set_visits(&self, visits: Vec<Visit>) {
        *self.visits.borrow_mut() = visits;
    }

    pub fn set_prescriptions(&self, prescriptions: Vec<Prescription>) {
        *self.prescriptions.borrow_mut() = prescriptions;
    }

    pub fn set_files(&self, files: Vec<MedicalFile>) {
        *self.files.borrow_mut() = files;
    }

    pub fn set_import_result(&self, result: Option<ImportResult>) {
        *self.import_result.borrow_mut() = result;
    }

    /// Forget everything fetched for the previous session
    pub fn clear(&self) {
        self.set_stats(DashboardStats::default());
        self.set_records(Vec::new());
        self.set_patients(Vec::new());
        self.set_doctors(Vec::new());
        self.set_visits(Vec::new());
        self.set_prescriptions(Vec::new());
        self.set_files(Vec::new());
        self.set_import_result(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_every_collection() {
        let data = DataState::new();
        data.set_stats(DashboardStats { total_patients: 3, ..Default::default() });
        data.set_import_result(Some(ImportResult { total: 2, ..Default::default() }));
        data.set_files(vec![MedicalFile {
            file_id: 1,
            file_type: None,
            file_name: "scan.png".into(),
            file_size: 10,
            description: None,
            uploaded_at: None,
            uploaded_by: None,
        }]);

        let shared = data.clone();
        shared.clear();

        assert_eq!(*data.stats.borrow(), DashboardStats::default());
        assert!(data.files.borrow().is_empty());
        assert!(data.import_result.borrow().is_none());
    }
}

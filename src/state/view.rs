// ============================================================================
// VIEW - Which page the dashboard shows, and which pages each role may open
// ============================================================================

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Records,
    MyRecords,
    CreateVisit,
    AddDiagnosis,
    AddPrescription,
    MyFiles,
    UploadFile,
    Prescriptions,
    Patients,
    Import,
}

impl View {
    pub const ALL: [View; 11] = [
        View::Dashboard,
        View::Records,
        View::MyRecords,
        View::CreateVisit,
        View::AddDiagnosis,
        View::AddPrescription,
        View::MyFiles,
        View::UploadFile,
        View::Prescriptions,
        View::Patients,
        View::Import,
    ];

    /// Stable id, used as the `data-view` attribute of nav links
    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Records => "records",
            View::MyRecords => "my-records",
            View::CreateVisit => "create-visit",
            View::AddDiagnosis => "add-diagnosis",
            View::AddPrescription => "add-prescription",
            View::MyFiles => "my-files",
            View::UploadFile => "upload-file",
            View::Prescriptions => "prescriptions",
            View::Patients => "patients",
            View::Import => "import",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Records => "Medical Records",
            View::MyRecords => "My Medical Records",
            View::CreateVisit => "Create Visit",
            View::AddDiagnosis => "Add Diagnosis",
            View::AddPrescription => "Add Prescription",
            View::MyFiles => "My Files",
            View::UploadFile => "Upload File",
            View::Prescriptions => "Prescriptions",
            View::Patients => "Patients",
            View::Import => "Import Patients",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "📊",
            View::Records | View::MyRecords => "📋",
            View::CreateVisit => "➕",
            View::AddDiagnosis => "🩺",
            View::AddPrescription | View::Prescriptions => "💊",
            View::MyFiles => "📁",
            View::UploadFile => "📤",
            View::Patients => "👥",
            View::Import => "📥",
        }
    }
}

/// Sidebar entries for `role`, in display order
pub fn nav_items(role: Role) -> &'static [View] {
    match role {
        Role::Doctor => &[
            View::Dashboard,
            View::Records,
            View::CreateVisit,
            View::AddDiagnosis,
            View::AddPrescription,
        ],
        Role::Patient => &[View::Dashboard, View::MyRecords, View::MyFiles, View::UploadFile],
        Role::Pharmacist => &[View::Dashboard, View::Prescriptions],
        Role::Admin => &[View::Dashboard, View::Patients, View::Import],
        Role::Unknown => &[View::Dashboard],
    }
}

pub fn is_allowed(role: Role, view: View) -> bool {
    nav_items(role).contains(&view)
}

/// Screen shown while there is no session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in View::ALL.iter().enumerate() {
            for b in &View::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn every_role_starts_on_dashboard() {
        for role in [Role::Doctor, Role::Patient, Role::Pharmacist, Role::Admin, Role::Unknown] {
            assert_eq!(nav_items(role).first(), Some(&View::Dashboard));
        }
    }

    #[test]
    fn roles_only_reach_their_own_pages() {
        assert!(is_allowed(Role::Doctor, View::AddPrescription));
        assert!(!is_allowed(Role::Doctor, View::Import));
        assert!(is_allowed(Role::Patient, View::UploadFile));
        assert!(!is_allowed(Role::Patient, View::Records));
        assert!(is_allowed(Role::Pharmacist, View::Prescriptions));
        assert!(!is_allowed(Role::Pharmacist, View::Patients));
        assert!(is_allowed(Role::Admin, View::Import));
        assert_eq!(nav_items(Role::Unknown), &[View::Dashboard]);
    }
}

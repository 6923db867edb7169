use serde::{Deserialize, Serialize};

/// Contact to call for a patient in an emergency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// Patient record as embedded in appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
}

/// A bookable date/time a dentist has open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    pub date: String,
    pub time: String,
}

/// Dentist record as embedded in appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dentist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub years_of_experience: i64,
    #[serde(default)]
    pub clinic_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<AvailableSlot>>,
}

/// Kind of visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    #[default]
    Checkup,
    Surgery,
    Consultation,
}

pub const ALL_APPOINTMENT_TYPES: &[AppointmentType] = &[
    AppointmentType::Checkup,
    AppointmentType::Surgery,
    AppointmentType::Consultation,
];

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "checkup",
            AppointmentType::Surgery => "surgery",
            AppointmentType::Consultation => "consultation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentType::Checkup => "Checkup",
            AppointmentType::Surgery => "Surgery",
            AppointmentType::Consultation => "Consultation",
        }
    }

    /// Parse a type key, defaulting to a checkup for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "surgery" => AppointmentType::Surgery,
            "consultation" => AppointmentType::Consultation,
            _ => AppointmentType::Checkup,
        }
    }
}

/// An appointment as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub dentist: Option<Dentist>,
    /// `YYYY-MM-DD`.
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: String,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub reason_for_visit: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Appointment {
    pub fn patient_name(&self) -> &str {
        self.patient.as_ref().map(|p| p.name.as_str()).unwrap_or("N/A")
    }

    pub fn dentist_name(&self) -> &str {
        self.dentist.as_ref().map(|d| d.name.as_str()).unwrap_or("N/A")
    }
}

/// User counts per role in the analytics summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsersByRole {
    #[serde(default)]
    pub admin: i64,
    #[serde(default)]
    pub dentist: i64,
    #[serde(default)]
    pub receptionist: i64,
    #[serde(default)]
    pub patient: i64,
}

/// Appointment counts per status in the analytics summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentStatusCounts {
    #[serde(default)]
    pub completed: i64,
    #[serde(default)]
    pub pending: i64,
    #[serde(default)]
    pub canceled: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyGrowth {
    pub date: String,
    pub new_users: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveUser {
    pub name: String,
    /// Unix timestamp of the last sign-in.
    pub last_login: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DentistLoad {
    pub name: String,
    pub appointments: i64,
}

/// Clinic-wide summary shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminAnalytics {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub active_users: i64,
    #[serde(default)]
    pub users_by_role: UsersByRole,
    #[serde(default)]
    pub total_appointments: i64,
    #[serde(default)]
    pub appointment_statuses: AppointmentStatusCounts,
    #[serde(default)]
    pub user_growth_last_7_days: Vec<DailyGrowth>,
    #[serde(default)]
    pub most_active_users: Vec<ActiveUser>,
    #[serde(default)]
    pub top_dentists_by_appointments: Vec<DentistLoad>,
}

/// Body returned by the login endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body returned by the token refresh endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access: String,
}

/// A clinic account as listed in user management.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Distinct patients appearing in a list of appointments, first-seen order.
pub fn distinct_patients(appointments: &[Appointment]) -> Vec<Patient> {
    let mut seen: Vec<Patient> = Vec::new();
    for patient in appointments.iter().filter_map(|a| a.patient.as_ref()) {
        if !seen.iter().any(|p| p.id == patient.id) {
            seen.push(patient.clone());
        }
    }
    seen
}

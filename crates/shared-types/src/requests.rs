use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::models::AppointmentType;
#[cfg(feature = "validation")]
use crate::role::Role;

/// Statuses an appointment may be moved to.
pub const APPOINTMENT_STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];

/// Sign-in form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Account registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[serde(skip_serializing)]
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords must match"))
    )]
    pub confirm_password: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_role")))]
    pub role: String,
}

/// Booking form.
///
/// `patient_id` is filled in by staff booking on a patient's behalf; a
/// patient booking for themselves leaves it empty and the backend uses the
/// signed-in account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AppointmentCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dentist_id: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_upcoming_date"))
    )]
    pub date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Time is required"))
    )]
    pub time: String,
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub reason_for_visit: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 500, message = "Notes cannot exceed 500 characters"))
    )]
    #[serde(default)]
    pub notes: String,
}

/// Reschedule / status change form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AppointmentUpdateRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_upcoming_date"))
    )]
    pub date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Time is required"))
    )]
    pub time: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_status")))]
    pub status: String,
}

/// Profile settings form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileUpdateRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_phone")))]
    pub phone: String,
}

/// Admin form for creating or editing an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UserManagementRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_role")))]
    pub role: String,
}

/// Admin form replacing a user's role set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RoleAssignmentRequest {
    #[serde(skip_serializing)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "User ID is required"))
    )]
    pub user_id: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_role_list")))]
    pub roles: Vec<String>,
}

#[cfg(feature = "validation")]
fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

#[cfg(feature = "validation")]
fn validate_role(role: &str) -> Result<(), ValidationError> {
    if role.trim().is_empty() {
        return Err(invalid("required", "Role is required"));
    }
    Role::parse(role)
        .map(|_| ())
        .ok_or_else(|| invalid("role", "Invalid role"))
}

#[cfg(feature = "validation")]
fn validate_role_list(roles: &[String]) -> Result<(), ValidationError> {
    if roles.is_empty() {
        return Err(invalid("required", "At least one role is required"));
    }
    if roles.iter().any(|r| Role::parse(r).is_none()) {
        return Err(invalid("role", "Invalid role"));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(invalid("required", "Status is required"));
    }
    if APPOINTMENT_STATUSES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status))
    {
        Ok(())
    } else {
        Err(invalid("status", "Invalid status"))
    }
}

#[cfg(feature = "validation")]
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(invalid("required", "Phone number is required"));
    }
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("phone", "Phone number must be 10 digits"))
    }
}

#[cfg(feature = "validation")]
fn validate_upcoming_date(date: &str) -> Result<(), ValidationError> {
    crate::dates::check_not_past(date, crate::dates::today())
        .map_err(|msg| invalid("date", msg))
}

#[cfg(feature = "validation")]
impl AppointmentCreateRequest {
    /// Full validation for a booking made by `role`.
    ///
    /// Staff must name the patient; patients book for themselves.
    pub fn validate_for(&self, role: Role) -> Result<(), crate::error::AppError> {
        let mut result = self
            .validate()
            .map_err(crate::error::AppError::from)
            .err();

        let needs_patient = matches!(role, Role::Receptionist | Role::Admin);
        let has_patient = self
            .patient_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());
        if needs_patient && !has_patient {
            let err = result.get_or_insert_with(|| {
                crate::error::AppError::validation("Validation failed", Default::default())
            });
            err.field_errors
                .insert("patient_id".to_string(), "Patient ID is required".to_string());
        }

        match result {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Blanket validation entry point used by forms and the API client.
#[cfg(feature = "validation")]
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), crate::error::AppError>;
}

#[cfg(feature = "validation")]
impl<T: Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), crate::error::AppError> {
        self.validate().map_err(crate::error::AppError::from)
    }
}

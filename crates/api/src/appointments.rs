use shared_types::{
    Appointment, AppointmentCreateRequest, AppointmentUpdateRequest, AppError, Role,
    ValidateRequest,
};

use crate::ApiClient;

fn appointment_path(id: i64) -> String {
    format!("/appointments/{id}/")
}

impl ApiClient {
    /// Appointments visible to `role`.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_appointments(&self, role: Role) -> Result<Vec<Appointment>, AppError> {
        let appointments: Vec<Appointment> = self
            .get(&format!("/appointments/?role={}", role.as_str()))
            .await?;
        tracing::debug!(count = appointments.len(), "Fetched appointments");
        Ok(appointments)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_appointment(&self, id: i64) -> Result<Appointment, AppError> {
        self.get(&appointment_path(id)).await
    }

    /// Book an appointment as `role`.
    #[tracing::instrument(skip(self, req))]
    pub async fn create_appointment(
        &self,
        req: &AppointmentCreateRequest,
        role: Role,
    ) -> Result<Appointment, AppError> {
        req.validate_for(role)?;
        let created: Appointment = self.post("/appointments/", req).await?;
        tracing::info!(id = created.id, "Appointment booked");
        Ok(created)
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn update_appointment(
        &self,
        id: i64,
        req: &AppointmentUpdateRequest,
    ) -> Result<Appointment, AppError> {
        req.validate_request()?;
        self.put(&appointment_path(id), req).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_appointment(&self, id: i64) -> Result<(), AppError> {
        self.delete(&appointment_path(id)).await?;
        tracing::info!(id, "Appointment deleted");
        Ok(())
    }
}
